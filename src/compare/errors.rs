//! Comparison error types
//!
//! Error codes:
//! - DRIFT_INVALID_PAGINATION (ERROR)
//! - DRIFT_INVALID_PAYLOAD (ERROR)
//!
//! These reject an action before it reaches the view. The previous view
//! stays in place. Fetch failures are not errors here; they are recorded in
//! the view as [`crate::view::FetchError`].

use std::fmt;

/// Comparison error codes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompareErrorCode {
    /// Page below 1, per-page of 0, or per-page above the configured cap
    DriftInvalidPagination,
    /// Action payload violates a view invariant
    DriftInvalidPayload,
}

impl CompareErrorCode {
    /// Returns the string code
    pub fn code(&self) -> &'static str {
        match self {
            CompareErrorCode::DriftInvalidPagination => "DRIFT_INVALID_PAGINATION",
            CompareErrorCode::DriftInvalidPayload => "DRIFT_INVALID_PAYLOAD",
        }
    }
}

impl fmt::Display for CompareErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// Comparison error with context
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompareError {
    code: CompareErrorCode,
    message: String,
}

impl CompareError {
    /// Create an invalid pagination error
    pub fn invalid_pagination(reason: impl Into<String>) -> Self {
        Self {
            code: CompareErrorCode::DriftInvalidPagination,
            message: reason.into(),
        }
    }

    /// Create an invalid payload error
    pub fn invalid_payload(reason: impl Into<String>) -> Self {
        Self {
            code: CompareErrorCode::DriftInvalidPayload,
            message: reason.into(),
        }
    }

    /// Returns the error code
    pub fn code(&self) -> CompareErrorCode {
        self.code
    }

    /// Returns the error message
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl fmt::Display for CompareError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[ERROR] {}: {}", self.code.code(), self.message)
    }
}

impl std::error::Error for CompareError {}

/// Result type for comparison operations
pub type CompareResult<T> = Result<T, CompareError>;
