//! Lifecycle controller for the comparison view
//!
//! A pure transition function: one state and one action in, one new state
//! out. No I/O, no logging, no suspension points. The fetch itself happens
//! outside; the controller only reacts to its pending/fulfilled/rejected
//! signals.
//!
//! Transitions (see [`CompareAction`]):
//! - FETCH_COMPARE_PENDING: remember `systems`, clear systems and reference
//!   subjects, start loading, bump the fetch generation
//! - FETCH_COMPARE_FULFILLED: classify, run the pipeline, stop loading
//! - FETCH_COMPARE_REJECTED: record the normalized error, force the empty
//!   state; previously displayed data is kept
//! - CLEAR_COMPARISON: reset, keeping filters, sorts and page size
//! - CLEAR_COMPARISON_FILTERS: empty text filter, deselect every state
//! - REVERT_COMPARE_DATA: restore `systems` captured at fetch start
//! - EXPAND_ROW, UPDATE_REFERENCE_ID, EXPORT_TO_CSV: no pipeline run
//!
//! A fetch result with duplicate or empty system ids, or an EXPAND_ROW with
//! an empty name, is refused with DRIFT_INVALID_PAYLOAD.

use std::collections::BTreeSet;

use crate::compare::{
    CompareError, CompareResult, FactClassifier, FetchPayload, PageWindow, StateFilters,
};

use super::action::{CompareAction, PaginationRequest, StateFilterToggle};
use super::fetch_error::{FetchError, RejectionPayload};
use super::state::ViewState;

/// Applies actions to view states
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CompareController {
    enforce_generation: bool,
}

impl CompareController {
    /// Creates a controller. With `enforce_generation`, fetch results carrying
    /// a generation other than the current one are ignored.
    pub fn new(enforce_generation: bool) -> Self {
        Self { enforce_generation }
    }

    /// Returns true if `action` is a fetch result for a superseded fetch.
    ///
    /// Results without a generation are always trusted.
    pub fn is_stale(&self, state: &ViewState, action: &CompareAction) -> bool {
        self.enforce_generation
            && action
                .fetch_generation()
                .is_some_and(|generation| generation != state.fetch_generation)
    }

    /// Produces the state following `action`.
    ///
    /// On error the caller keeps `state`; nothing is partially applied.
    pub fn reduce(&self, state: &ViewState, action: &CompareAction) -> CompareResult<ViewState> {
        if self.is_stale(state, action) {
            return Ok(state.clone());
        }

        match action {
            CompareAction::FetchComparePending => Ok(fetch_pending(state)),
            CompareAction::FetchCompareFulfilled(payload) => fetch_fulfilled(state, payload),
            CompareAction::FetchCompareRejected(payload) => Ok(fetch_rejected(state, payload)),
            CompareAction::ClearComparison => Ok(clear_comparison(state)),
            CompareAction::ClearComparisonFilters => clear_filters(state),
            CompareAction::RevertCompareData => Ok(revert(state)),
            CompareAction::AddStateFilter(toggle) => toggle_state_filter(state, toggle),
            CompareAction::FilterByFact(text) => ViewState {
                fact_filter: text.clone(),
                ..state.clone()
            }
            .recomputed(),
            CompareAction::ToggleFactSort(order) => ViewState {
                fact_sort: *order,
                ..state.clone()
            }
            .recomputed(),
            CompareAction::ToggleStateSort(order) => ViewState {
                state_sort: *order,
                ..state.clone()
            }
            .recomputed(),
            CompareAction::UpdateDriftPagination(request) => paginate(state, request),
            CompareAction::ExpandRow(name) => expand_row(state, name),
            CompareAction::UpdateReferenceId(id) => Ok(ViewState {
                reference_id: id.clone(),
                ..state.clone()
            }),
            CompareAction::ExportToCsv => Ok(state.clone()),
        }
    }
}

impl Default for CompareController {
    fn default() -> Self {
        Self::new(true)
    }
}

/// Applies `action` with the default controller
pub fn reduce(state: &ViewState, action: &CompareAction) -> CompareResult<ViewState> {
    CompareController::default().reduce(state, action)
}

fn fetch_pending(state: &ViewState) -> ViewState {
    ViewState {
        previous_state_systems: state.systems.clone(),
        systems: Vec::new(),
        baselines: Vec::new(),
        historical_profiles: Vec::new(),
        loading: true,
        empty_state: false,
        fetch_generation: state.fetch_generation.wrapping_add(1),
        ..state.clone()
    }
}

fn fetch_fulfilled(state: &ViewState, payload: &FetchPayload) -> CompareResult<ViewState> {
    validate_payload(payload)?;
    let full_compare_data = FactClassifier::classify(&payload.facts, &payload.systems);

    let next = ViewState {
        empty_state: full_compare_data.is_empty(),
        full_compare_data,
        all_systems: payload.systems.clone(),
        baselines: payload.baselines.clone(),
        historical_profiles: payload.historical_profiles.clone(),
        loading: false,
        error: None,
        fetched: true,
        ..state.clone()
    };

    next.recomputed()
}

/// Rejects payloads the view cannot render: one column per system id.
fn validate_payload(payload: &FetchPayload) -> CompareResult<()> {
    let mut seen = BTreeSet::new();
    for system in &payload.systems {
        if system.id.is_empty() {
            return Err(CompareError::invalid_payload("system id must not be empty"));
        }
        if !seen.insert(system.id.as_str()) {
            return Err(CompareError::invalid_payload(format!(
                "duplicate system id '{}'",
                system.id
            )));
        }
    }
    Ok(())
}

fn fetch_rejected(state: &ViewState, payload: &RejectionPayload) -> ViewState {
    ViewState {
        error: Some(FetchError::from_rejection(payload)),
        loading: false,
        empty_state: true,
        ..state.clone()
    }
}

fn clear_comparison(state: &ViewState) -> ViewState {
    ViewState {
        fact_filter: state.fact_filter.clone(),
        state_filters: state.state_filters.clone(),
        fact_sort: state.fact_sort,
        state_sort: state.state_sort,
        fetch_generation: state.fetch_generation.wrapping_add(1),
        ..ViewState::with_per_page(state.per_page)
    }
}

fn clear_filters(state: &ViewState) -> CompareResult<ViewState> {
    ViewState {
        fact_filter: String::new(),
        state_filters: StateFilters::none_selected(),
        ..state.clone()
    }
    .recomputed()
}

fn revert(state: &ViewState) -> ViewState {
    ViewState {
        systems: state.previous_state_systems.clone(),
        loading: false,
        error: None,
        ..state.clone()
    }
}

fn toggle_state_filter(state: &ViewState, toggle: &StateFilterToggle) -> CompareResult<ViewState> {
    ViewState {
        state_filters: state.state_filters.toggled(toggle.filter),
        ..state.clone()
    }
    .recomputed()
}

fn paginate(state: &ViewState, request: &PaginationRequest) -> CompareResult<ViewState> {
    let window = PageWindow::new(request.page, request.per_page)?;
    ViewState {
        page: window.page,
        per_page: window.per_page,
        ..state.clone()
    }
    .recomputed()
}

fn expand_row(state: &ViewState, name: &str) -> CompareResult<ViewState> {
    if name.is_empty() {
        return Err(CompareError::invalid_payload("row name must not be empty"));
    }

    let mut expanded_rows = state.expanded_rows.clone();
    if !expanded_rows.remove(name) {
        expanded_rows.insert(name.to_string());
    }
    Ok(ViewState {
        expanded_rows,
        ..state.clone()
    })
}
