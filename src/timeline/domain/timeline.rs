//! Display projection of messages on a timeline.

use super::Message;
use chrono::{DateTime, Utc};
use serde::Serialize;

/// A single row of a rendered timeline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TimelineEntry {
    /// Message identifier.
    pub id: String,
    /// Author of the message.
    pub author: String,
    /// Message text as posted.
    pub text: String,
    /// Publication timestamp of the latest revision.
    pub published_at: DateTime<Utc>,
}

impl From<&Message> for TimelineEntry {
    fn from(message: &Message) -> Self {
        Self {
            id: message.id().as_str().to_owned(),
            author: message.author().as_str().to_owned(),
            text: message.text().as_str().to_owned(),
            published_at: message.published_at(),
        }
    }
}

impl From<Message> for TimelineEntry {
    fn from(message: Message) -> Self {
        Self::from(&message)
    }
}
