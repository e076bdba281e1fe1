//! Observability subsystem for driftview
//!
//! - Structured logging (JSON lines on stderr)
//! - Counters per session
//! - Scoped begin/complete events for host commands
//!
//! Observability is read-only: the view controller never logs. Hosts log
//! around it.

mod events;
mod logger;
mod metrics;
mod scope;

pub use events::Event;
pub use logger::{Logger, Severity};
pub use metrics::{MetricsRegistry, MetricsSnapshot};
pub use scope::ObservationScope;

/// Log an event at its natural severity
pub fn log_event(event: Event) {
    log_event_with_fields(event, &[]);
}

/// Log an event with fields. Failure events are logged at WARN.
pub fn log_event_with_fields(event: Event, fields: &[(&str, &str)]) {
    let severity = if event.is_failure() {
        Severity::Warn
    } else {
        Severity::Info
    };
    Logger::log(severity, event.as_str(), fields);
}
