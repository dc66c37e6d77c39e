//! Error types for timeline domain validation.

use thiserror::Error;

/// Errors returned while validating message text.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum MessageTextError {
    /// The text is empty or contains only whitespace.
    #[error("message text must not be empty")]
    Empty,

    /// The text exceeds the configured character limit.
    #[error("message text has {length} characters, exceeds limit of {max}")]
    TooLong {
        /// Number of characters in the rejected text.
        length: usize,
        /// Maximum number of characters allowed.
        max: usize,
    },
}
