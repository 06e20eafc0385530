//! # Error Types
//!
//! Construction errors for the validated newtypes in this crate. Messages
//! carry the rejected input so callers can surface it verbatim.

use thiserror::Error;

/// A value was rejected by a newtype's constructor.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Slug is empty or contains whitespace.
    #[error("invalid slug: {0:?} (expected a non-empty string without whitespace)")]
    InvalidSlug(String),

    /// Input is not a calendar date in a recognised format.
    #[error("invalid date: {input:?} ({reason})")]
    InvalidDate {
        /// The rejected input string.
        input: String,
        /// Parser diagnostic.
        reason: String,
    },
}
