//! Goal form input errors.
//!
//! Invalid form input never reaches storage. The tracker reports why a submission was skipped
//! so the client can log it, but nothing else happens: the goal list stays untouched.

use thiserror::Error;

/// Reasons a goal form submission is skipped.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InputError {
    /// The description is empty or whitespace only.
    #[error("Goal text must not be empty")]
    EmptyText,

    /// The target could not be parsed as a whole number.
    #[error("Goal target {0:?} is not a whole number")]
    InvalidTarget(String),

    /// The target parsed but is zero or negative.
    #[error("Goal target must be positive, got {0}")]
    NonPositiveTarget(i64),
}
