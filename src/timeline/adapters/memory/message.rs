//! In-memory implementation of the `MessageRepository` port.
//!
//! Provides a simple, thread-safe repository for tests and demos without a
//! database. Not suitable for production use.

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use async_trait::async_trait;

use crate::timeline::{
    domain::{Author, Message, MessageId},
    ports::{MessageRepository, MessageRepositoryError, MessageRepositoryResult},
};

/// In-memory implementation of [`MessageRepository`].
///
/// Messages are keyed by identifier. Timelines are listed most recent
/// first, with ties broken by identifier.
///
/// # Example
///
/// ```
/// use microblog::timeline::adapters::memory::InMemoryMessageRepository;
///
/// let repo = InMemoryMessageRepository::new();
/// assert!(repo.is_empty());
/// ```
#[derive(Debug, Default, Clone)]
pub struct InMemoryMessageRepository {
    messages: Arc<RwLock<HashMap<MessageId, Message>>>,
}

impl InMemoryMessageRepository {
    /// Creates an empty repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a repository pre-populated with `messages`.
    ///
    /// Later messages overwrite earlier ones with the same identifier.
    #[must_use]
    pub fn with_messages(messages: impl IntoIterator<Item = Message>) -> Self {
        let map = messages
            .into_iter()
            .map(|message| (message.id().clone(), message))
            .collect();
        Self {
            messages: Arc::new(RwLock::new(map)),
        }
    }

    /// Returns the number of stored messages.
    ///
    /// Returns `0` if the internal lock is poisoned, matching the fallback
    /// behaviour of an empty repository.
    #[must_use]
    pub fn len(&self) -> usize {
        self.messages.read().map(|guard| guard.len()).unwrap_or(0)
    }

    /// Returns `true` if no messages are stored.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

fn lock_poisoned(err: impl std::fmt::Display) -> MessageRepositoryError {
    MessageRepositoryError::persistence(std::io::Error::other(format!("lock poisoned: {err}")))
}

#[async_trait]
impl MessageRepository for InMemoryMessageRepository {
    async fn find_by_id(&self, id: &MessageId) -> MessageRepositoryResult<Option<Message>> {
        let guard = self.messages.read().map_err(lock_poisoned)?;
        Ok(guard.get(id).cloned())
    }

    async fn save(&self, message: &Message) -> MessageRepositoryResult<()> {
        let mut guard = self.messages.write().map_err(lock_poisoned)?;
        guard.insert(message.id().clone(), message.clone());
        Ok(())
    }

    async fn list_by_author(&self, author: &Author) -> MessageRepositoryResult<Vec<Message>> {
        let guard = self.messages.read().map_err(lock_poisoned)?;
        let mut timeline: Vec<Message> = guard
            .values()
            .filter(|message| message.author() == author)
            .cloned()
            .collect();
        timeline.sort_by(|a, b| {
            b.published_at()
                .cmp(&a.published_at())
                .then_with(|| a.id().cmp(b.id()))
        });
        Ok(timeline)
    }
}
