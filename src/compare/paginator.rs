//! Page window slicing

use serde::{Deserialize, Serialize};

use super::errors::{CompareError, CompareResult};
use super::model::{Fact, System};

/// A validated page request: `page >= 1`, `per_page > 0`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageWindow {
    pub page: usize,
    pub per_page: usize,
}

impl PageWindow {
    /// Creates a window, rejecting page 0 and per-page 0
    pub fn new(page: usize, per_page: usize) -> CompareResult<Self> {
        if page == 0 {
            return Err(CompareError::invalid_pagination("page must be >= 1"));
        }
        if per_page == 0 {
            return Err(CompareError::invalid_pagination("perPage must be > 0"));
        }
        Ok(Self { page, per_page })
    }

    /// Zero-based offset of the first fact in the window
    pub fn offset(&self) -> usize {
        (self.page - 1).saturating_mul(self.per_page)
    }
}

/// One page of facts plus the systems visible on it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageSlice {
    /// Facts in the window, at most `per_page`
    pub facts: Vec<Fact>,
    /// Systems reporting a value for at least one fact in the window
    pub systems: Vec<System>,
    /// Size of the input before slicing
    pub total: usize,
}

/// Slices sorted facts into page windows
pub struct Paginator;

impl Paginator {
    /// Returns the facts in `window` and the systems they use.
    ///
    /// `systems` is the ordered list of every compared system. The returned
    /// subset keeps that order. A window past the end yields no facts; in
    /// that case nothing narrows the system list and it is returned whole.
    pub fn paginate(sorted: &[Fact], systems: &[System], window: PageWindow) -> PageSlice {
        let facts: Vec<Fact> = sorted
            .iter()
            .skip(window.offset())
            .take(window.per_page)
            .cloned()
            .collect();

        let systems = if facts.is_empty() {
            systems.to_vec()
        } else {
            systems
                .iter()
                .filter(|system| facts.iter().any(|fact| fact.reported_by(&system.id)))
                .cloned()
                .collect()
        };

        PageSlice {
            facts,
            systems,
            total: sorted.len(),
        }
    }
}
