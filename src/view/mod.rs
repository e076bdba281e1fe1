//! Comparison view: state, actions and lifecycle controller
//!
//! ```text
//! Action → CompareController::reduce → new ViewState
//! ```
//!
//! The controller is a pure transition function. [`Session`] hosts it,
//! holding the current view and doing the logging and counting.

mod action;
mod controller;
mod fetch_error;
mod session;
mod state;

pub use action::{CompareAction, PaginationRequest, StateFilterToggle};
pub use controller::{reduce, CompareController};
pub use fetch_error::{FetchError, RejectedResponse, RejectionPayload};
pub use session::Session;
pub use state::{Phase, ViewState, DEFAULT_PER_PAGE};
