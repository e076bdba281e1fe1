//! Hosted comparison session
//!
//! Owns the current view, runs actions through the controller, and swaps in
//! each new view whole. Logging and counters live here so the controller can
//! stay pure.

use uuid::Uuid;

use crate::compare::{CompareError, CompareResult};
use crate::config::Config;
use crate::observability::{log_event_with_fields, Event, MetricsRegistry, MetricsSnapshot};

use super::action::CompareAction;
use super::controller::CompareController;
use super::state::ViewState;

/// A comparison view plus its host-side bookkeeping
#[derive(Debug)]
pub struct Session {
    id: Uuid,
    state: ViewState,
    controller: CompareController,
    metrics: MetricsRegistry,
    max_per_page: usize,
}

impl Session {
    /// Opens a session with a fresh view
    pub fn new(config: &Config) -> Self {
        Self {
            id: Uuid::new_v4(),
            state: ViewState::with_per_page(config.default_per_page),
            controller: CompareController::new(config.enforce_fetch_generation),
            metrics: MetricsRegistry::new(),
            max_per_page: config.max_per_page,
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    /// Current view
    pub fn state(&self) -> &ViewState {
        &self.state
    }

    pub fn metrics(&self) -> MetricsSnapshot {
        self.metrics.snapshot()
    }

    /// Applies an action. On error the current view is left unchanged.
    pub fn dispatch(&mut self, action: &CompareAction) -> CompareResult<&ViewState> {
        let session = self.id.to_string();

        if let Err(err) = self.check_limits(action) {
            return Err(self.reject(&session, action, err));
        }

        if self.controller.is_stale(&self.state, action) {
            self.metrics.increment_stale_fetches();
            let current = self.state.fetch_generation.to_string();
            let received = action
                .fetch_generation()
                .map(|g| g.to_string())
                .unwrap_or_default();
            log_event_with_fields(
                Event::FetchStale,
                &[
                    ("action", action.kind()),
                    ("current_generation", current.as_str()),
                    ("received_generation", received.as_str()),
                    ("session", session.as_str()),
                ],
            );
            return Ok(&self.state);
        }

        let next = match self.controller.reduce(&self.state, action) {
            Ok(next) => next,
            Err(err) => return Err(self.reject(&session, action, err)),
        };

        self.record(action, &next);
        let total = next.total_facts.to_string();
        let generation = next.fetch_generation.to_string();
        log_event_with_fields(
            Event::for_action(action),
            &[
                ("generation", generation.as_str()),
                ("session", session.as_str()),
                ("total_facts", total.as_str()),
            ],
        );

        self.state = next;
        Ok(&self.state)
    }

    fn check_limits(&self, action: &CompareAction) -> CompareResult<()> {
        match action {
            CompareAction::UpdateDriftPagination(request) if request.per_page > self.max_per_page => {
                Err(CompareError::invalid_pagination(format!(
                    "perPage {} exceeds the maximum of {}",
                    request.per_page, self.max_per_page
                )))
            }
            _ => Ok(()),
        }
    }

    fn record(&self, action: &CompareAction, next: &ViewState) {
        self.metrics.increment_actions_dispatched();
        match action {
            CompareAction::FetchCompareFulfilled(_) => {
                self.metrics.increment_fetches_fulfilled();
                self.metrics
                    .add_facts_classified(next.full_compare_data.len() as u64);
            }
            CompareAction::FetchCompareRejected(_) => self.metrics.increment_fetches_rejected(),
            _ => {}
        }
    }

    fn reject(&self, session: &str, action: &CompareAction, err: CompareError) -> CompareError {
        self.metrics.increment_actions_rejected();
        log_event_with_fields(
            Event::ActionRejected,
            &[
                ("action", action.kind()),
                ("code", err.code().code()),
                ("reason", err.message()),
                ("session", session),
            ],
        );
        err
    }
}
