//! Use case for posting a new message on an author's timeline.

use crate::timeline::{
    domain::{Author, Message, MessageId, MessageText, MessageTextConfig},
    ports::{DateTimeProvider, MessageRepository},
};
use std::sync::Arc;

use super::TimelineServiceResult;

/// Request payload for posting a message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostMessageCommand {
    id: MessageId,
    text: String,
    author: Author,
}

impl PostMessageCommand {
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

/// Validates and publishes new messages.
#[derive(Clone)]
pub struct PostMessageUseCase<R, C>
where
    R: MessageRepository,
    C: DateTimeProvider,
{
    repository: Arc<R>,
    clock: Arc<C>,
    config: MessageTextConfig,
}

impl<R, C> PostMessageUseCase<R, C>
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

    /// Posts a message stamped with the provider's current time.
    ///
    /// # Errors
    ///
    /// Returns [`super::TimelineServiceError::Text`] when the text is empty
    /// or too long, in which case nothing is saved, or
    /// [`super::TimelineServiceError::Repository`] when persistence fails.
    pub async fn handle(&self, command: PostMessageCommand) -> TimelineServiceResult<()> {
        let PostMessageCommand { id, text, author } = command;

        let message_text = MessageText::with_config(text, &self.config).inspect_err(|err| {
            tracing::debug!(message_id = %id, %author, error = %err, "post rejected");
        })?;

        let message = Message::new(id, author, message_text, self.clock.now());
        self.repository.save(&message).await?;
        tracing::debug!(
            message_id = %message.id(),
            author = %message.author(),
            "message posted"
        );
        Ok(())
    }
}
