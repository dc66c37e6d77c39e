//! Step definitions for timeline BDD scenarios.

pub mod world;

mod then;
