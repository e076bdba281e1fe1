//! driftview - a deterministic view engine for cross-system fact comparison
//!
//! Facts fetched from several systems are classified by agreement, then
//! filtered, sorted and paged into the view a host displays. The view is a
//! value rebuilt from the full dataset on every action.

pub mod cli;
pub mod compare;
pub mod config;
pub mod observability;
pub mod view;
