//! In-memory adapter implementations for testing.
//!
//! These adapters provide simple, thread-safe implementations suitable for
//! unit testing without infrastructure dependencies.

mod date_time;
mod message;

pub use date_time::StubDateTimeProvider;
pub use message::InMemoryMessageRepository;
