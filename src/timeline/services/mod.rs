//! Application services for posting, editing and viewing messages.

mod edit_message;
mod error;
mod post_message;
mod view_timeline;

pub use edit_message::{EditMessageCommand, EditMessageUseCase};
pub use error::{TimelineServiceError, TimelineServiceResult};
pub use post_message::{PostMessageCommand, PostMessageUseCase};
pub use view_timeline::ViewTimelineUseCase;
