//! Observable events for driftview
//!
//! One event per dispatched action, plus host lifecycle events.

use std::fmt;

use crate::view::CompareAction;

/// Observable events
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    // Fetch lifecycle
    /// Fetch started
    FetchPending,
    /// Fetch result applied
    FetchFulfilled,
    /// Fetch failure recorded
    FetchRejected,
    /// Fetch result for a superseded fetch dropped
    FetchStale,

    // View actions
    ComparisonCleared,
    FiltersCleared,
    CompareReverted,
    StateFilterToggled,
    FactFilterChanged,
    FactSortToggled,
    StateSortToggled,
    PaginationUpdated,
    RowToggled,
    ReferenceUpdated,
    /// Export handed to the host
    ExportRequested,
    /// Action payload violated a view invariant
    ActionRejected,

    // Host
    ConfigLoaded,
    ReplayBegin,
    ReplayComplete,
}

impl Event {
    /// Returns the string representation of the event
    pub fn as_str(&self) -> &'static str {
        match self {
            Event::FetchPending => "FETCH_PENDING",
            Event::FetchFulfilled => "FETCH_FULFILLED",
            Event::FetchRejected => "FETCH_REJECTED",
            Event::FetchStale => "FETCH_STALE",
            Event::ComparisonCleared => "COMPARISON_CLEARED",
            Event::FiltersCleared => "FILTERS_CLEARED",
            Event::CompareReverted => "COMPARE_REVERTED",
            Event::StateFilterToggled => "STATE_FILTER_TOGGLED",
            Event::FactFilterChanged => "FACT_FILTER_CHANGED",
            Event::FactSortToggled => "FACT_SORT_TOGGLED",
            Event::StateSortToggled => "STATE_SORT_TOGGLED",
            Event::PaginationUpdated => "PAGINATION_UPDATED",
            Event::RowToggled => "ROW_TOGGLED",
            Event::ReferenceUpdated => "REFERENCE_UPDATED",
            Event::ExportRequested => "EXPORT_REQUESTED",
            Event::ActionRejected => "ACTION_REJECTED",
            Event::ConfigLoaded => "CONFIG_LOADED",
            Event::ReplayBegin => "REPLAY_BEGIN",
            Event::ReplayComplete => "REPLAY_COMPLETE",
        }
    }

    /// Event recorded for an applied action
    pub fn for_action(action: &CompareAction) -> Self {
        match action {
            CompareAction::FetchComparePending => Event::FetchPending,
            CompareAction::FetchCompareFulfilled(_) => Event::FetchFulfilled,
            CompareAction::FetchCompareRejected(_) => Event::FetchRejected,
            CompareAction::ClearComparison => Event::ComparisonCleared,
            CompareAction::ClearComparisonFilters => Event::FiltersCleared,
            CompareAction::RevertCompareData => Event::CompareReverted,
            CompareAction::AddStateFilter(_) => Event::StateFilterToggled,
            CompareAction::FilterByFact(_) => Event::FactFilterChanged,
            CompareAction::ToggleFactSort(_) => Event::FactSortToggled,
            CompareAction::ToggleStateSort(_) => Event::StateSortToggled,
            CompareAction::UpdateDriftPagination(_) => Event::PaginationUpdated,
            CompareAction::ExpandRow(_) => Event::RowToggled,
            CompareAction::UpdateReferenceId(_) => Event::ReferenceUpdated,
            CompareAction::ExportToCsv => Event::ExportRequested,
        }
    }

    /// Returns true for events that indicate a failure
    pub fn is_failure(&self) -> bool {
        matches!(self, Event::FetchRejected | Event::ActionRejected)
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
