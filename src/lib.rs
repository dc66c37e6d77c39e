//! Microblog: post, edit and view timeline messages.
//!
//! This crate provides the application layer of a small Twitter-like
//! timeline: validated posting and editing of short messages, and reading
//! an author's messages back as a timeline.
//!
//! # Architecture
//!
//! The crate follows hexagonal architecture principles:
//!
//! - **Domain**: Pure business logic with no infrastructure dependencies
//! - **Ports**: Abstract trait interfaces for storage and time
//! - **Adapters**: Concrete implementations of ports (in-memory, stub clock)
//!
//! # Modules
//!
//! - [`timeline`]: Messages, text rules and the post/edit/view use cases

pub mod timeline;
