//! Service-level errors shared by the timeline use cases.

use crate::timeline::{domain::MessageTextError, ports::MessageRepositoryError};
use thiserror::Error;

/// Errors returned by the post, edit and view use cases.
#[derive(Debug, Error)]
pub enum TimelineServiceError {
    /// The message text failed validation.
    #[error(transparent)]
    Text(#[from] MessageTextError),
    /// Repository operation failed.
    #[error(transparent)]
    Repository(#[from] MessageRepositoryError),
}

/// Result type for timeline use case operations.
pub type TimelineServiceResult<T> = Result<T, TimelineServiceError>;
