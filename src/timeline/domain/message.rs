//! Posted message entity.

use super::{Author, MessageId, MessageText};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A message posted on an author's timeline.
///
/// Messages are immutable values. Editing produces a new [`Message`] with
/// the same identifier and author via [`Message::with_edited_text`].
///
/// # Examples
///
/// ```
/// use chrono::{TimeZone, Utc};
/// use microblog::timeline::domain::{Author, Message, MessageId, MessageText};
///
/// let published_at = Utc.with_ymd_and_hms(2022, 6, 4, 19, 0, 0)
///     .single()
///     .expect("valid timestamp");
/// let message = Message::new(
///     MessageId::new("message-id"),
///     Author::new("Bob"),
///     MessageText::new("Hello everyone").expect("valid text"),
///     published_at,
/// );
///
/// assert_eq!(message.author().as_str(), "Bob");
/// assert_eq!(message.published_at(), published_at);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    id: MessageId,
    author: Author,
    text: MessageText,
    published_at: DateTime<Utc>,
}

impl Message {
    /// Creates a message from validated parts.
    #[must_use]
    pub const fn new(
        id: MessageId,
        author: Author,
        text: MessageText,
        published_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            author,
            text,
            published_at,
        }
    }

    /// Returns a replacement message carrying new text and publication time.
    ///
    /// The identifier and author are preserved.
    #[must_use]
    pub fn with_edited_text(&self, text: MessageText, published_at: DateTime<Utc>) -> Self {
        Self {
            id: self.id.clone(),
            author: self.author.clone(),
            text,
            published_at,
        }
    }

    /// Returns the message identifier.
    #[must_use]
    pub const fn id(&self) -> &MessageId {
        &self.id
    }

    /// Returns the message author.
    #[must_use]
    pub const fn author(&self) -> &Author {
        &self.author
    }

    /// Returns the message text.
    #[must_use]
    pub const fn text(&self) -> &MessageText {
        &self.text
    }

    /// Returns the publication timestamp.
    #[must_use]
    pub const fn published_at(&self) -> DateTime<Utc> {
        self.published_at
    }
}
