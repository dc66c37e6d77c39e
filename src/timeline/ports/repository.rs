//! Repository port for message persistence and timeline listing.

use crate::timeline::domain::{Author, Message, MessageId};
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for message repository operations.
pub type MessageRepositoryResult<T> = Result<T, MessageRepositoryError>;

/// Message persistence contract.
///
/// Implementations key messages by [`MessageId`]. Saving a message whose
/// identifier already exists replaces the stored value.
#[async_trait]
pub trait MessageRepository: Send + Sync {
    /// Finds a message by identifier.
    ///
    /// Returns `None` when the message does not exist.
    ///
    /// # Errors
    ///
    /// Returns [`MessageRepositoryError::Persistence`] when the lookup fails.
    async fn find_by_id(&self, id: &MessageId) -> MessageRepositoryResult<Option<Message>>;

    /// Inserts a message, or overwrites the message with the same identifier.
    ///
    /// # Errors
    ///
    /// Returns [`MessageRepositoryError::Persistence`] when the write fails.
    async fn save(&self, message: &Message) -> MessageRepositoryResult<()>;

    /// Returns every message written by `author`, in timeline order.
    ///
    /// Returns an empty vector when the author has not posted anything.
    ///
    /// # Errors
    ///
    /// Returns [`MessageRepositoryError::Persistence`] when the query fails.
    async fn list_by_author(&self, author: &Author) -> MessageRepositoryResult<Vec<Message>>;
}

/// Errors returned by message repository implementations.
#[derive(Debug, Clone, Error)]
pub enum MessageRepositoryError {
    /// The message was not found.
    #[error("message not found: {0}")]
    NotFound(MessageId),

    /// Persistence-layer failure.
    #[error("persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl MessageRepositoryError {
    /// Wraps a persistence error.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }
}
