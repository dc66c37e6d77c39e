//! Adapter implementations for the timeline ports.

pub mod memory;
