//! Actions accepted by the comparison view
//!
//! Wire form is `{"type": "...", "payload": ...}`; actions without a payload
//! omit the `payload` key.

use serde::{Deserialize, Serialize};

use crate::compare::{AgreementState, FetchPayload, SortOrder};

use super::fetch_error::RejectionPayload;

/// State filter toggle request. Only `filter` drives the toggle; `display`
/// and `selected` travel with it for the host's benefit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StateFilterToggle {
    pub filter: AgreementState,
    #[serde(default)]
    pub display: Option<String>,
    #[serde(default)]
    pub selected: Option<bool>,
}

impl StateFilterToggle {
    pub fn new(filter: AgreementState) -> Self {
        Self {
            filter,
            display: None,
            selected: None,
        }
    }
}

/// Requested page window, unvalidated
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaginationRequest {
    pub page: usize,
    pub per_page: usize,
}

/// An action dispatched to the comparison view
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "payload", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CompareAction {
    FetchComparePending,
    FetchCompareFulfilled(FetchPayload),
    FetchCompareRejected(RejectionPayload),
    ClearComparison,
    ClearComparisonFilters,
    RevertCompareData,
    AddStateFilter(StateFilterToggle),
    FilterByFact(String),
    ToggleFactSort(SortOrder),
    ToggleStateSort(SortOrder),
    UpdateDriftPagination(PaginationRequest),
    ExpandRow(String),
    UpdateReferenceId(Option<String>),
    ExportToCsv,
}

impl CompareAction {
    /// Wire name of the action
    pub fn kind(&self) -> &'static str {
        match self {
            CompareAction::FetchComparePending => "FETCH_COMPARE_PENDING",
            CompareAction::FetchCompareFulfilled(_) => "FETCH_COMPARE_FULFILLED",
            CompareAction::FetchCompareRejected(_) => "FETCH_COMPARE_REJECTED",
            CompareAction::ClearComparison => "CLEAR_COMPARISON",
            CompareAction::ClearComparisonFilters => "CLEAR_COMPARISON_FILTERS",
            CompareAction::RevertCompareData => "REVERT_COMPARE_DATA",
            CompareAction::AddStateFilter(_) => "ADD_STATE_FILTER",
            CompareAction::FilterByFact(_) => "FILTER_BY_FACT",
            CompareAction::ToggleFactSort(_) => "TOGGLE_FACT_SORT",
            CompareAction::ToggleStateSort(_) => "TOGGLE_STATE_SORT",
            CompareAction::UpdateDriftPagination(_) => "UPDATE_DRIFT_PAGINATION",
            CompareAction::ExpandRow(_) => "EXPAND_ROW",
            CompareAction::UpdateReferenceId(_) => "UPDATE_REFERENCE_ID",
            CompareAction::ExportToCsv => "EXPORT_TO_CSV",
        }
    }

    /// Generation carried by a fetch result, if any
    pub fn fetch_generation(&self) -> Option<u64> {
        match self {
            CompareAction::FetchCompareFulfilled(payload) => payload.generation,
            CompareAction::FetchCompareRejected(payload) => payload.generation,
            _ => None,
        }
    }
}
