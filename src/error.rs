//! Error types for eager stream construction and deduplication
//!
//! Empty or undersized input is never an error. Only invalid constructor
//! arguments, elements that cannot be fingerprinted and malformed
//! configuration fail.

use crate::fingerprint::EncodingError;

/// Main error type for rs2-eager operations
#[derive(Debug, thiserror::Error)]
pub enum StreamError {
    /// `from_range` was given an end before its start (or a NaN bound)
    #[error("invalid range: end {end} is before start {start}")]
    InvalidRange { start: String, end: String },

    /// `from_range` was given a step that is not strictly positive
    #[error("invalid step {step}: step must be positive")]
    InvalidStep { step: String },

    /// `from_range` would produce more elements than fit in memory
    #[error("range {start}..={end} by {step} has too many elements")]
    RangeTooLarge {
        start: String,
        end: String,
        step: String,
    },

    /// An element could not be encoded into a structural fingerprint
    #[error("failed to fingerprint element: {0}")]
    Encoding(#[from] EncodingError),

    /// A configuration document could not be parsed
    #[error("invalid configuration: {0}")]
    Config(String),
}

/// Result type for rs2-eager operations
pub type StreamResult<T> = Result<T, StreamError>;
