//! Comparison view state
//!
//! A `ViewState` is a value. Transitions build a new one from the old; no
//! field is ever updated in place on a state a reader may be holding.

use std::collections::BTreeSet;

use serde::Serialize;

use crate::compare::{
    ComparePipeline, CompareResult, Fact, PageWindow, PipelineInput, ReferenceSubject, SortOrder,
    StateFilters, System,
};

use super::fetch_error::FetchError;

/// Default page size
pub const DEFAULT_PER_PAGE: usize = 50;

/// Lifecycle phase derived from the view fields
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Phase {
    /// No data
    Idle,
    /// Fetch pending
    Loading,
    /// Data present, possibly empty
    Ready,
    /// Last fetch failed
    Error,
}

/// Derived view over the comparison dataset
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ViewState {
    /// Every classified fact of the last successful fetch
    pub full_compare_data: Vec<Fact>,
    /// Facts passing the filters, sorted, not paginated
    pub sorted_filtered_facts: Vec<Fact>,
    /// The current page window of `sorted_filtered_facts`
    pub filtered_compare_data: Vec<Fact>,
    pub fact_filter: String,
    pub state_filters: StateFilters,
    pub fact_sort: SortOrder,
    pub state_sort: SortOrder,
    /// Systems relevant to the current page
    pub systems: Vec<System>,
    /// Every system of the last successful fetch, in fetch order
    pub all_systems: Vec<System>,
    /// `systems` as captured when the latest fetch began
    pub previous_state_systems: Vec<System>,
    pub page: usize,
    pub per_page: usize,
    /// Facts passing the filters, before slicing
    pub total_facts: usize,
    pub expanded_rows: BTreeSet<String>,
    pub baselines: Vec<ReferenceSubject>,
    pub historical_profiles: Vec<ReferenceSubject>,
    pub reference_id: Option<String>,
    pub loading: bool,
    pub error: Option<FetchError>,
    pub empty_state: bool,
    /// A fetch has been fulfilled since the view was created or cleared
    pub fetched: bool,
    /// Incremented on each fetch start and on clear
    pub fetch_generation: u64,
}

impl ViewState {
    /// Initial state with the default page size
    pub fn new() -> Self {
        Self::with_per_page(DEFAULT_PER_PAGE)
    }

    /// Initial state with a custom page size. A size of 0 falls back to the
    /// default.
    pub fn with_per_page(per_page: usize) -> Self {
        Self {
            full_compare_data: Vec::new(),
            sorted_filtered_facts: Vec::new(),
            filtered_compare_data: Vec::new(),
            fact_filter: String::new(),
            state_filters: StateFilters::all_selected(),
            fact_sort: SortOrder::Asc,
            state_sort: SortOrder::Desc,
            systems: Vec::new(),
            all_systems: Vec::new(),
            previous_state_systems: Vec::new(),
            page: 1,
            per_page: if per_page == 0 { DEFAULT_PER_PAGE } else { per_page },
            total_facts: 0,
            expanded_rows: BTreeSet::new(),
            baselines: Vec::new(),
            historical_profiles: Vec::new(),
            reference_id: None,
            loading: false,
            error: None,
            empty_state: true,
            fetched: false,
            fetch_generation: 0,
        }
    }

    /// Current lifecycle phase.
    ///
    /// `empty_state` is a display hint and is not consulted: a rejected
    /// fetch sets it while older data is still held.
    pub fn phase(&self) -> Phase {
        if self.loading {
            Phase::Loading
        } else if self.error.is_some() {
            Phase::Error
        } else if self.fetched {
            Phase::Ready
        } else {
            Phase::Idle
        }
    }

    /// Current page window
    pub fn window(&self) -> CompareResult<PageWindow> {
        PageWindow::new(self.page, self.per_page)
    }

    /// Returns a copy with every derived field recomputed from
    /// `full_compare_data` and the current settings.
    ///
    /// While a fetch is pending `systems` stays empty; the columns belong
    /// to the fetch in flight.
    pub fn recomputed(&self) -> CompareResult<Self> {
        let output = ComparePipeline::execute(&PipelineInput {
            full: &self.full_compare_data,
            all_systems: &self.all_systems,
            state_filters: &self.state_filters,
            fact_filter: &self.fact_filter,
            fact_sort: self.fact_sort,
            state_sort: self.state_sort,
            window: self.window()?,
        });

        Ok(Self {
            sorted_filtered_facts: output.sorted_filtered_facts,
            filtered_compare_data: output.filtered_compare_data,
            systems: if self.loading {
                Vec::new()
            } else {
                output.systems
            },
            total_facts: output.total_facts,
            ..self.clone()
        })
    }

    pub fn is_expanded(&self, fact_name: &str) -> bool {
        self.expanded_rows.contains(fact_name)
    }
}

impl Default for ViewState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_state() {
        let state = ViewState::new();
        assert!(state.full_compare_data.is_empty());
        assert!(state.sorted_filtered_facts.is_empty());
        assert!(state.filtered_compare_data.is_empty());
        assert_eq!(state.fact_filter, "");
        assert_eq!(state.state_filters, StateFilters::all_selected());
        assert_eq!(state.fact_sort, SortOrder::Asc);
        assert_eq!(state.state_sort, SortOrder::Desc);
        assert_eq!(state.page, 1);
        assert_eq!(state.per_page, 50);
        assert_eq!(state.total_facts, 0);
        assert!(state.expanded_rows.is_empty());
        assert!(state.error.is_none());
        assert!(state.reference_id.is_none());
        assert!(!state.loading);
        assert!(state.empty_state);
        assert!(!state.fetched);
        assert_eq!(state.phase(), Phase::Idle);
    }

    #[test]
    fn test_phase_ignores_empty_state_flag() {
        let fetched = ViewState {
            fetched: true,
            empty_state: true,
            ..ViewState::new()
        };
        assert_eq!(fetched.phase(), Phase::Ready);

        let failed = ViewState {
            error: Some(FetchError {
                detail: "down".to_string(),
                status: 503,
            }),
            ..fetched.clone()
        };
        assert_eq!(failed.phase(), Phase::Error);

        let loading = ViewState {
            loading: true,
            ..failed
        };
        assert_eq!(loading.phase(), Phase::Loading);
    }

    #[test]
    fn test_zero_per_page_falls_back() {
        assert_eq!(ViewState::with_per_page(0).per_page, DEFAULT_PER_PAGE);
        assert_eq!(ViewState::with_per_page(10).per_page, 10);
    }

    #[test]
    fn test_serializes_camel_case() {
        let value = serde_json::to_value(ViewState::new()).unwrap();
        assert_eq!(value["perPage"], 50);
        assert_eq!(value["factSort"], "ASC");
        assert_eq!(value["stateSort"], "DESC");
        assert_eq!(value["emptyState"], true);
        assert!(value["error"].is_null());
        assert_eq!(value["stateFilters"].as_array().unwrap().len(), 3);
    }

    #[test]
    fn test_recompute_keeps_systems_empty_while_loading() {
        let state = ViewState {
            all_systems: vec![System::new("a")],
            loading: true,
            ..ViewState::new()
        };
        assert!(state.recomputed().unwrap().systems.is_empty());

        let done = ViewState {
            loading: false,
            ..state
        };
        assert_eq!(done.recomputed().unwrap().systems, vec![System::new("a")]);
    }

    #[test]
    fn test_recompute_empty() {
        let state = ViewState::new().recomputed().unwrap();
        assert_eq!(state, ViewState::new());
    }
}
