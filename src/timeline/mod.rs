//! Posting, editing and viewing timeline messages.
//!
//! The module follows hexagonal architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Use cases in [`services`]
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//!
//! use microblog::timeline::{
//!     adapters::memory::{InMemoryMessageRepository, StubDateTimeProvider},
//!     domain::Author,
//!     services::{PostMessageCommand, PostMessageUseCase, ViewTimelineUseCase},
//! };
//!
//! # tokio_test_runtime(async {
//! let repository = Arc::new(InMemoryMessageRepository::new());
//! let clock = Arc::new(StubDateTimeProvider::default());
//!
//! PostMessageUseCase::new(Arc::clone(&repository), clock)
//!     .handle(PostMessageCommand::new("message-id", "Hello everyone", "Bob"))
//!     .await
//!     .expect("valid message is posted");
//!
//! let timeline = ViewTimelineUseCase::new(repository)
//!     .handle(&Author::new("Bob"))
//!     .await
//!     .expect("timeline loads");
//! assert_eq!(timeline.len(), 1);
//! # });
//! # fn tokio_test_runtime(future: impl std::future::Future<Output = ()>) {
//! #     tokio::runtime::Builder::new_current_thread()
//! #         .build()
//! #         .expect("runtime builds")
//! #         .block_on(future);
//! # }
//! ```

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;
