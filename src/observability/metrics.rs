//! Metrics registry for driftview
//!
//! - Counters only
//! - Monotonic increase
//! - Reset only on process start

use std::sync::atomic::{AtomicU64, Ordering};

use serde::Serialize;

/// Operational counters for a comparison session
#[derive(Debug, Default)]
pub struct MetricsRegistry {
    /// Actions applied to the view
    actions_dispatched: AtomicU64,
    /// Actions refused with an error
    actions_rejected: AtomicU64,
    /// Fetch results applied
    fetches_fulfilled: AtomicU64,
    /// Fetch failures recorded
    fetches_rejected: AtomicU64,
    /// Results dropped for a superseded fetch
    stale_fetches_dropped: AtomicU64,
    /// Top-level facts classified across all fetches
    facts_classified: AtomicU64,
}

impl MetricsRegistry {
    /// Create a new metrics registry with all counters at zero
    pub fn new() -> Self {
        Self::default()
    }

    pub fn increment_actions_dispatched(&self) {
        self.actions_dispatched.fetch_add(1, Ordering::Relaxed);
    }

    pub fn increment_actions_rejected(&self) {
        self.actions_rejected.fetch_add(1, Ordering::Relaxed);
    }

    pub fn increment_fetches_fulfilled(&self) {
        self.fetches_fulfilled.fetch_add(1, Ordering::Relaxed);
    }

    pub fn increment_fetches_rejected(&self) {
        self.fetches_rejected.fetch_add(1, Ordering::Relaxed);
    }

    pub fn increment_stale_fetches(&self) {
        self.stale_fetches_dropped.fetch_add(1, Ordering::Relaxed);
    }

    pub fn add_facts_classified(&self, count: u64) {
        self.facts_classified.fetch_add(count, Ordering::Relaxed);
    }

    /// Get all metrics as a snapshot
    pub fn snapshot(&self) -> MetricsSnapshot {
        MetricsSnapshot {
            actions_dispatched: self.actions_dispatched.load(Ordering::Relaxed),
            actions_rejected: self.actions_rejected.load(Ordering::Relaxed),
            fetches_fulfilled: self.fetches_fulfilled.load(Ordering::Relaxed),
            fetches_rejected: self.fetches_rejected.load(Ordering::Relaxed),
            stale_fetches_dropped: self.stale_fetches_dropped.load(Ordering::Relaxed),
            facts_classified: self.facts_classified.load(Ordering::Relaxed),
        }
    }
}

/// A point-in-time snapshot of all metrics
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct MetricsSnapshot {
    pub actions_dispatched: u64,
    pub actions_rejected: u64,
    pub fetches_fulfilled: u64,
    pub fetches_rejected: u64,
    pub stale_fetches_dropped: u64,
    pub facts_classified: u64,
}
