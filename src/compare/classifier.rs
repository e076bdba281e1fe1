//! Fact classification
//!
//! Assigns an agreement state to every fact of a fetch result. Runs once per
//! successful fetch; later stages only filter and reorder its output.

use super::model::{AgreementState, Fact, RawFact, System, SystemValue};

/// Classifies raw fact records
pub struct FactClassifier;

impl FactClassifier {
    /// Classifies every fact against the given systems, preserving source order.
    pub fn classify(facts: &[RawFact], systems: &[System]) -> Vec<Fact> {
        facts
            .iter()
            .map(|raw| Self::classify_fact(raw, systems))
            .collect()
    }

    fn classify_fact(raw: &RawFact, systems: &[System]) -> Fact {
        let comparisons = Self::classify(&raw.comparisons, systems);

        let state = if comparisons.is_empty() {
            Self::state_of(&raw.systems, systems)
        } else {
            Self::aggregate(&comparisons)
        };

        Fact {
            name: raw.name.clone(),
            state,
            systems: raw.systems.clone(),
            comparisons,
        }
    }

    /// Computes the agreement state of one set of per-system values.
    ///
    /// A system with no entry, or an entry without a value, makes the fact
    /// incomplete. With no systems at all every value vacuously agrees.
    pub fn state_of(values: &[SystemValue], systems: &[System]) -> AgreementState {
        let mut reported = Vec::with_capacity(systems.len());

        for system in systems {
            let value = values
                .iter()
                .find(|v| v.id == system.id)
                .and_then(|v| v.value.as_deref());

            match value {
                Some(v) => reported.push(v),
                None => return AgreementState::IncompleteData,
            }
        }

        match reported.split_first() {
            Some((first, rest)) if rest.iter().any(|v| v != first) => AgreementState::Different,
            _ => AgreementState::Same,
        }
    }

    /// State of a parent fact from its sub-facts. DIFFERENT wins over
    /// INCOMPLETE_DATA, which wins over SAME.
    fn aggregate(comparisons: &[Fact]) -> AgreementState {
        if comparisons
            .iter()
            .any(|c| c.state == AgreementState::Different)
        {
            AgreementState::Different
        } else if comparisons
            .iter()
            .any(|c| c.state == AgreementState::IncompleteData)
        {
            AgreementState::IncompleteData
        } else {
            AgreementState::Same
        }
    }
}
