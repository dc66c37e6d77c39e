//! Validated message text and its length configuration.

use super::MessageTextError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Default maximum number of characters in a message.
pub const DEFAULT_MAX_TEXT_LENGTH: usize = 280;

/// Configuration for message text validation.
///
/// # Examples
///
/// ```
/// use microblog::timeline::domain::MessageTextConfig;
///
/// let config = MessageTextConfig::default();
/// assert_eq!(config.max_length, 280);
///
/// let short = MessageTextConfig::new(140);
/// assert_eq!(short.max_length, 140);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MessageTextConfig {
    /// Maximum text length in characters (Unicode scalar values).
    pub max_length: usize,
}

impl MessageTextConfig {
    /// The 280-character configuration, usable in `const` contexts.
    pub const DEFAULT: Self = Self::new(DEFAULT_MAX_TEXT_LENGTH);

    /// Creates a configuration with a custom character limit.
    #[must_use]
    pub const fn new(max_length: usize) -> Self {
        Self { max_length }
    }
}

impl Default for MessageTextConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Message text that has passed the emptiness and length rules.
///
/// The text is stored verbatim; surrounding whitespace is preserved.
/// Deserialization runs the same rules against the default configuration.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct MessageText(String);

impl MessageText {
    /// Validates text against the default configuration.
    ///
    /// # Errors
    ///
    /// See [`MessageText::with_config`].
    pub fn new(value: impl Into<String>) -> Result<Self, MessageTextError> {
        Self::with_config(value, &MessageTextConfig::default())
    }

    /// Validates text against the given configuration.
    ///
    /// Emptiness is checked before length.
    ///
    /// # Errors
    ///
    /// Returns [`MessageTextError::Empty`] when the text is empty or only
    /// whitespace (including the U+001C to U+001F separators), or [`MessageTextError::TooLong`] when it has more than
    /// `config.max_length` characters.
    ///
    /// # Examples
    ///
    /// ```
    /// use microblog::timeline::domain::{MessageText, MessageTextConfig, MessageTextError};
    ///
    /// let config = MessageTextConfig::new(5);
    /// assert!(MessageText::with_config("hello", &config).is_ok());
    /// assert_eq!(
    ///     MessageText::with_config("   ", &config),
    ///     Err(MessageTextError::Empty)
    /// );
    /// assert_eq!(
    ///     MessageText::with_config("hello!", &config),
    ///     Err(MessageTextError::TooLong { length: 6, max: 5 })
    /// );
    /// ```
    pub fn with_config(
        value: impl Into<String>,
        config: &MessageTextConfig,
    ) -> Result<Self, MessageTextError> {
        let raw = value.into();

        if raw.chars().all(is_blank) {
            return Err(MessageTextError::Empty);
        }

        let length = raw.chars().count();
        if length > config.max_length {
            return Err(MessageTextError::TooLong {
                length,
                max: config.max_length,
            });
        }

        Ok(Self(raw))
    }

    /// Returns the text as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Unicode whitespace plus the information separators U+001C to U+001F,
/// which splitting on whitespace also discards.
fn is_blank(c: char) -> bool {
    c.is_whitespace() || ('\u{1c}'..='\u{1f}').contains(&c)
}

impl TryFrom<String> for MessageText {
    type Error = MessageTextError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<MessageText> for String {
    fn from(text: MessageText) -> Self {
        text.0
    }
}

impl AsRef<str> for MessageText {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for MessageText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
