//! Data model for fact comparison
//!
//! Raw records arrive from a fetch payload; classified [`Fact`]s are what the
//! rest of the pipeline filters, sorts and pages.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Agreement state of a fact across the compared systems
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AgreementState {
    /// Every system reports the same value
    Same,
    /// Every system reports a value and at least one differs
    Different,
    /// At least one system has no value
    IncompleteData,
}

impl AgreementState {
    /// All states in display order
    pub const ALL: [AgreementState; 3] = [
        AgreementState::Same,
        AgreementState::Different,
        AgreementState::IncompleteData,
    ];

    /// Returns the wire key
    pub fn as_str(&self) -> &'static str {
        match self {
            AgreementState::Same => "SAME",
            AgreementState::Different => "DIFFERENT",
            AgreementState::IncompleteData => "INCOMPLETE_DATA",
        }
    }

    /// Returns the label shown next to the filter toggle
    pub fn display_label(&self) -> &'static str {
        match self {
            AgreementState::Same => "Same",
            AgreementState::Different => "Different",
            AgreementState::IncompleteData => "Incomplete data",
        }
    }
}

/// Sort order for facts and systems.
///
/// `Unset` is a distinct third value: the sequence keeps its source order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SortOrder {
    #[serde(rename = "ASC")]
    Asc,
    #[serde(rename = "DESC")]
    Desc,
    #[serde(rename = "")]
    Unset,
}

impl SortOrder {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortOrder::Asc => "ASC",
            SortOrder::Desc => "DESC",
            SortOrder::Unset => "",
        }
    }
}

/// A compared system
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct System {
    /// System identifier
    pub id: String,
    /// Human-readable name
    #[serde(default)]
    pub display_name: Option<String>,
    /// Last time the system reported its facts
    #[serde(default)]
    pub last_updated: Option<DateTime<Utc>>,
}

impl System {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            display_name: None,
            last_updated: None,
        }
    }

    pub fn with_display_name(mut self, name: impl Into<String>) -> Self {
        self.display_name = Some(name.into());
        self
    }

    pub fn with_last_updated(mut self, at: DateTime<Utc>) -> Self {
        self.last_updated = Some(at);
        self
    }
}

/// Baseline or historical profile used as an extra comparison subject
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReferenceSubject {
    pub id: String,
    #[serde(default)]
    pub display_name: Option<String>,
    #[serde(default)]
    pub updated: Option<DateTime<Utc>>,
}

/// One system's reported value for a fact
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SystemValue {
    /// System identifier
    pub id: String,
    /// Reported value; `None` means the system lacks the fact
    #[serde(default)]
    pub value: Option<String>,
}

impl SystemValue {
    pub fn new(id: impl Into<String>, value: Option<&str>) -> Self {
        Self {
            id: id.into(),
            value: value.map(str::to_string),
        }
    }
}

/// Unclassified fact record as delivered by a fetch
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawFact {
    pub name: String,
    #[serde(default)]
    pub systems: Vec<SystemValue>,
    /// Nested sub-facts (e.g. one entry per network interface)
    #[serde(default)]
    pub comparisons: Vec<RawFact>,
}

/// A classified fact
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Fact {
    /// Fact name, unique within one level of the dataset
    pub name: String,
    /// Agreement state computed at classification time
    pub state: AgreementState,
    /// Per-system values
    pub systems: Vec<SystemValue>,
    /// Classified sub-facts
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub comparisons: Vec<Fact>,
}

impl Fact {
    /// Returns the value reported by a system, if any
    pub fn value_for(&self, system_id: &str) -> Option<&str> {
        self.systems
            .iter()
            .find(|v| v.id == system_id)
            .and_then(|v| v.value.as_deref())
    }

    /// Returns true if the system reports a value for this fact or any sub-fact
    pub fn reported_by(&self, system_id: &str) -> bool {
        self.value_for(system_id).is_some()
            || self.comparisons.iter().any(|c| c.reported_by(system_id))
    }
}

/// Successful fetch result
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct FetchPayload {
    #[serde(default)]
    pub facts: Vec<RawFact>,
    #[serde(default)]
    pub systems: Vec<System>,
    #[serde(default)]
    pub baselines: Vec<ReferenceSubject>,
    #[serde(default)]
    pub historical_profiles: Vec<ReferenceSubject>,
    /// Fetch generation this result answers
    #[serde(default)]
    pub generation: Option<u64>,
}

/// Toggle for one agreement state
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StateFilterDescriptor {
    pub filter: AgreementState,
    pub display: String,
    pub selected: bool,
}

impl StateFilterDescriptor {
    pub fn new(filter: AgreementState, selected: bool) -> Self {
        Self {
            filter,
            display: filter.display_label().to_string(),
            selected,
        }
    }
}

/// The three state filter descriptors, always in SAME, DIFFERENT,
/// INCOMPLETE_DATA order with exactly one entry per state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct StateFilters([StateFilterDescriptor; 3]);

impl StateFilters {
    /// Every state selected
    pub fn all_selected() -> Self {
        Self::from_fn(|_| true)
    }

    /// No state selected
    pub fn none_selected() -> Self {
        Self::from_fn(|_| false)
    }

    /// Builds descriptors from a selection predicate
    pub fn from_fn(selected: impl Fn(AgreementState) -> bool) -> Self {
        Self(AgreementState::ALL.map(|s| StateFilterDescriptor::new(s, selected(s))))
    }

    /// Returns a copy with the matching descriptor flipped
    pub fn toggled(&self, filter: AgreementState) -> Self {
        let mut next = self.clone();
        for descriptor in next.0.iter_mut() {
            if descriptor.filter == filter {
                descriptor.selected = !descriptor.selected;
            }
        }
        next
    }

    pub fn is_selected(&self, state: AgreementState) -> bool {
        self.0.iter().any(|d| d.filter == state && d.selected)
    }

    pub fn any_selected(&self) -> bool {
        self.0.iter().any(|d| d.selected)
    }

    pub fn descriptors(&self) -> &[StateFilterDescriptor] {
        &self.0
    }
}

impl Default for StateFilters {
    fn default() -> Self {
        Self::all_selected()
    }
}
