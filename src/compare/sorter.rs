//! Fact and system ordering
//!
//! Both sorts are stable, so equal keys keep their source order.

use std::cmp::Ordering;

use super::model::{Fact, SortOrder, System};

/// Orders facts by name
pub struct FactSorter;

impl FactSorter {
    /// Sorts facts (and their sub-facts) by name.
    ///
    /// Names compare case-insensitively first, then byte-wise so the result
    /// is total. `Unset` leaves the source order alone.
    pub fn sort(facts: &mut [Fact], order: SortOrder) {
        if order == SortOrder::Unset {
            return;
        }

        facts.sort_by(|a, b| Self::directed(Self::compare_names(&a.name, &b.name), order));

        for fact in facts.iter_mut() {
            Self::sort(&mut fact.comparisons, order);
        }
    }

    fn compare_names(a: &str, b: &str) -> Ordering {
        a.to_lowercase()
            .cmp(&b.to_lowercase())
            .then_with(|| a.cmp(b))
    }

    fn directed(ordering: Ordering, order: SortOrder) -> Ordering {
        match order {
            SortOrder::Desc => ordering.reverse(),
            _ => ordering,
        }
    }
}

/// Orders systems by their last report time
pub struct SystemSorter;

impl SystemSorter {
    /// ASC puts the oldest report first, DESC the newest. Systems without a
    /// timestamp count as older than any timestamped system.
    pub fn sort(systems: &mut [System], order: SortOrder) {
        match order {
            SortOrder::Asc => systems.sort_by(|a, b| a.last_updated.cmp(&b.last_updated)),
            SortOrder::Desc => systems.sort_by(|a, b| b.last_updated.cmp(&a.last_updated)),
            SortOrder::Unset => {}
        }
    }
}
