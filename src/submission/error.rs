//! Error taxonomy for draft submission.
//!
//! Uses `thiserror` for ergonomic error handling with typed variants that
//! can be inspected by callers. All variants are caught at the submission
//! boundary; none of them tear down the creation view, and every failure
//! leaves the draft intact.

use crate::submission::ports::{AuthError, GatewayError};
use thiserror::Error;

/// A single field-level validation failure.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("validation failed for field '{field}': {reason}")]
pub struct ValidationError {
    /// The draft field that failed validation.
    pub field: &'static str,
    /// Why the field was rejected.
    pub reason: &'static str,
}

impl ValidationError {
    /// Creates a "required field is empty" violation.
    #[must_use]
    pub const fn required(field: &'static str) -> Self {
        Self {
            field,
            reason: "required",
        }
    }
}

/// Errors surfaced by a draft submission attempt.
#[derive(Debug, Error)]
pub enum SubmissionError {
    /// The draft failed validation; no async work was started.
    #[error("draft validation failed: {}", summarise(.violations))]
    Validation {
        /// Every violated field, collected rather than short-circuited.
        violations: Vec<ValidationError>,
    },

    /// Token acquisition failed; no network call was made.
    #[error(transparent)]
    Auth(#[from] AuthError),

    /// The gateway call failed after the token resolved.
    #[error(transparent)]
    Gateway(#[from] GatewayError),

    /// A submission was already in flight; the trigger was ignored.
    #[error("a submission is already in flight")]
    AlreadyInFlight,
}

impl SubmissionError {
    /// Wraps collected validation violations.
    #[must_use]
    pub const fn validation(violations: Vec<ValidationError>) -> Self {
        Self::Validation { violations }
    }
}

fn summarise(violations: &[ValidationError]) -> String {
    violations
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

/// Result type for submission operations.
pub type SubmissionResult<T> = Result<T, SubmissionError>;
