//! Filter → sort → paginate pipeline
//!
//! Execution flow (strict order):
//! 1. State filter over the full classified dataset
//! 2. Text filter over the state-filtered facts
//! 3. Sort facts by name
//! 4. Order systems by the state sort
//! 5. Slice the page window and narrow systems to it
//!
//! Every run starts from the full dataset, so the output depends only on the
//! inputs and never on earlier runs.

use super::filters::filter_facts;
use super::model::{Fact, SortOrder, StateFilters, System};
use super::paginator::{PageWindow, Paginator};
use super::sorter::{FactSorter, SystemSorter};

/// Everything the pipeline reads
#[derive(Debug, Clone, Copy)]
pub struct PipelineInput<'a> {
    pub full: &'a [Fact],
    pub all_systems: &'a [System],
    pub state_filters: &'a StateFilters,
    pub fact_filter: &'a str,
    pub fact_sort: SortOrder,
    pub state_sort: SortOrder,
    pub window: PageWindow,
}

/// Derived view fields
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PipelineOutput {
    /// Filtered and sorted, not paginated
    pub sorted_filtered_facts: Vec<Fact>,
    /// The page window
    pub filtered_compare_data: Vec<Fact>,
    /// Systems relevant to the page window
    pub systems: Vec<System>,
    /// Number of facts passing the filters
    pub total_facts: usize,
}

/// Runs the comparison pipeline
pub struct ComparePipeline;

impl ComparePipeline {
    /// Executes the pipeline. Deterministic: same input, same output.
    pub fn execute(input: &PipelineInput<'_>) -> PipelineOutput {
        // Steps 1-2: filter from the full set
        let mut sorted_filtered_facts =
            filter_facts(input.full, input.state_filters, input.fact_filter);

        // Step 3: sort facts
        FactSorter::sort(&mut sorted_filtered_facts, input.fact_sort);

        // Step 4: order systems
        let mut systems = input.all_systems.to_vec();
        SystemSorter::sort(&mut systems, input.state_sort);

        // Step 5: page window
        let page = Paginator::paginate(&sorted_filtered_facts, &systems, input.window);

        PipelineOutput {
            filtered_compare_data: page.facts,
            systems: page.systems,
            total_facts: page.total,
            sorted_filtered_facts,
        }
    }
}
