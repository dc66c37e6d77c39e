//! Use case for editing the text of an existing message.

use crate::timeline::{
    domain::{Author, Message, MessageId, MessageText, MessageTextConfig},
    ports::{DateTimeProvider, MessageRepository, MessageRepositoryError},
};
use std::sync::Arc;

use super::TimelineServiceResult;

/// Request payload for editing a message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditMessageCommand {
    id: MessageId,
    text: String,
    author: Author,
}

impl EditMessageCommand {
    /// Creates a command with every required field.
    #[must_use]
    pub fn new(
        id: impl Into<MessageId>,
        text: impl Into<String>,
        author: impl Into<Author>,
    ) -> Self {
        Self {
            id: id.into(),
            text: text.into(),
            author: author.into(),
        }
    }
}

/// Validates edits and replaces stored messages.
#[derive(Clone)]
pub struct EditMessageUseCase<R, C>
where
    R: MessageRepository,
    C: DateTimeProvider,
{
    repository: Arc<R>,
    clock: Arc<C>,
    config: MessageTextConfig,
}

impl<R, C> EditMessageUseCase<R, C>
where
    R: MessageRepository,
    C: DateTimeProvider,
{
    /// Creates a use case with the default text configuration.
    #[must_use]
    pub const fn new(repository: Arc<R>, clock: Arc<C>) -> Self {
        Self {
            repository,
            clock,
            config: MessageTextConfig::DEFAULT,
        }
    }

    /// Replaces the text validation configuration.
    #[must_use]
    pub const fn with_config(mut self, config: MessageTextConfig) -> Self {
        self.config = config;
        self
    }

    /// Replaces the text of message `id` and re-stamps its publication time.
    ///
    /// The stored identifier and author are kept. The command's author is
    /// not compared with the stored author.
    ///
    /// # Errors
    ///
    /// Returns [`super::TimelineServiceError::Text`] when the text is empty
    /// or too long, [`MessageRepositoryError::NotFound`] (wrapped) when no
    /// message has the given identifier, or a wrapped persistence error. The
    /// stored message is unchanged on every error.
    pub async fn handle(&self, command: EditMessageCommand) -> TimelineServiceResult<()> {
        // TODO: reject edits whose author differs from the stored message's author.
        let EditMessageCommand { id, text, author } = command;

        let message_text = MessageText::with_config(text, &self.config).inspect_err(|err| {
            tracing::debug!(message_id = %id, %author, error = %err, "edit rejected");
        })?;

        let original = self.find_by_id_or_error(&id).await?;
        let edited = original.with_edited_text(message_text, self.clock.now());
        self.repository.save(&edited).await?;
        tracing::debug!(message_id = %edited.id(), "message edited");
        Ok(())
    }

    async fn find_by_id_or_error(&self, id: &MessageId) -> TimelineServiceResult<Message> {
        let Some(message) = self.repository.find_by_id(id).await? else {
            tracing::debug!(message_id = %id, "edit target not found");
            return Err(MessageRepositoryError::NotFound(id.clone()).into());
        };
        Ok(message)
    }
}
