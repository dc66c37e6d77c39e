//! Domain model for posting, editing and viewing messages.
//!
//! The domain holds the message entity, its identifiers, and the text rules
//! every use case shares. All infrastructure concerns are kept outside the
//! domain boundary.

mod error;
mod ids;
mod message;
mod text;
mod timeline;

pub use error::MessageTextError;
pub use ids::{Author, MessageId};
pub use message::Message;
pub use text::{DEFAULT_MAX_TEXT_LENGTH, MessageText, MessageTextConfig};
pub use timeline::TimelineEntry;
