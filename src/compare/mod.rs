//! Comparison pipeline for driftview
//!
//! Turns a fetch payload into the displayed page of facts.
//!
//! # Execution Flow (strict order)
//!
//! 1. Classify raw facts into agreement states (once per fetch)
//! 2. Filter by selected agreement states
//! 3. Filter by case-insensitive name substring
//! 4. Sort facts by name, systems by report time
//! 5. Slice the page window and narrow systems to it
//!
//! Every stage is a pure function. Steps 2-5 always start from the full
//! classified dataset.

mod classifier;
mod errors;
mod filters;
mod model;
mod paginator;
mod pipeline;
mod sorter;

pub use classifier::FactClassifier;
pub use errors::{CompareError, CompareErrorCode, CompareResult};
pub use filters::{filter_facts, StateFilter, TextFilter};
pub use model::{
    AgreementState, Fact, FetchPayload, RawFact, ReferenceSubject, SortOrder,
    StateFilterDescriptor, StateFilters, System, SystemValue,
};
pub use paginator::{PageSlice, PageWindow, Paginator};
pub use pipeline::{ComparePipeline, PipelineInput, PipelineOutput};
pub use sorter::{FactSorter, SystemSorter};
