//! Use case for reading an author's timeline.

use crate::timeline::{
    domain::{Author, TimelineEntry},
    ports::MessageRepository,
};
use std::sync::Arc;

use super::TimelineServiceResult;

/// Lists an author's messages as display entries.
#[derive(Clone)]
pub struct ViewTimelineUseCase<R>
where
    R: MessageRepository,
{
    repository: Arc<R>,
}

impl<R> ViewTimelineUseCase<R>
where
    R: MessageRepository,
{
    /// Creates a timeline reader over `repository`.
    #[must_use]
    pub const fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Returns the timeline of `author` in repository listing order.
    ///
    /// An author with no messages has an empty timeline.
    ///
    /// # Errors
    ///
    /// Returns [`super::TimelineServiceError::Repository`] when the listing
    /// fails.
    pub async fn handle(&self, author: &Author) -> TimelineServiceResult<Vec<TimelineEntry>> {
        let messages = self.repository.list_by_author(author).await?;
        tracing::debug!(%author, count = messages.len(), "timeline loaded");
        Ok(messages.into_iter().map(TimelineEntry::from).collect())
    }
}
