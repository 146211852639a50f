//! # Use Cases
//!
//! Application-level orchestration logic.
//!
//! - [`collector`]: expands every seed line of an input stream and
//!   merges the results
//! - [`dto`]: data transfer objects for use case boundaries
//!
//! Use cases depend on both domain and ports, but not on infrastructure.

#![allow(clippy::multiple_crate_versions)]

pub mod collector;
pub mod dto;

pub use collector::CollectSeeds;
pub use dto::{CollectOptions, CollectOutput};
