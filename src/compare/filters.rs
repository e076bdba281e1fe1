//! State and text filtering
//!
//! Both stages are pure functions of the full classified dataset. Nothing is
//! narrowed incrementally from a previous result: each call re-scans `full`.

use super::model::{Fact, StateFilters};

/// Keeps facts whose agreement state is currently selected
pub struct StateFilter;

impl StateFilter {
    /// Returns facts whose state matches any selected descriptor.
    ///
    /// With no descriptor selected the result is empty, not "everything".
    pub fn apply(facts: &[Fact], filters: &StateFilters) -> Vec<Fact> {
        if !filters.any_selected() {
            return Vec::new();
        }

        facts
            .iter()
            .filter(|fact| filters.is_selected(fact.state))
            .cloned()
            .collect()
    }
}

/// Case-insensitive substring filter on fact names
pub struct TextFilter;

impl TextFilter {
    /// Narrows facts to those whose name contains `query`.
    ///
    /// A parent whose own name matches keeps all of its sub-facts. A parent
    /// that only matches through sub-facts keeps just the matching ones.
    pub fn apply(facts: Vec<Fact>, query: &str) -> Vec<Fact> {
        if query.is_empty() {
            return facts;
        }

        let needle = query.to_lowercase();
        facts
            .into_iter()
            .filter_map(|fact| Self::narrow(fact, &needle))
            .collect()
    }

    fn narrow(mut fact: Fact, needle: &str) -> Option<Fact> {
        if Self::name_matches(&fact.name, needle) {
            return Some(fact);
        }

        fact.comparisons
            .retain(|child| Self::name_matches(&child.name, needle));

        if fact.comparisons.is_empty() {
            None
        } else {
            Some(fact)
        }
    }

    fn name_matches(name: &str, needle: &str) -> bool {
        name.to_lowercase().contains(needle)
    }
}

/// Runs the state filter followed by the text filter over the full dataset.
pub fn filter_facts(full: &[Fact], state_filters: &StateFilters, query: &str) -> Vec<Fact> {
    TextFilter::apply(StateFilter::apply(full, state_filters), query)
}
