//! Port contracts for the timeline use cases.
//!
//! Ports define infrastructure-agnostic interfaces used by the timeline
//! services.

pub mod date_time;
pub mod repository;

pub use date_time::DateTimeProvider;
pub use repository::{MessageRepository, MessageRepositoryError, MessageRepositoryResult};
