//! # Domain
//!
//! Pure subdomain logic with no I/O:
//!
//! - [`validation`]: domain-shape checks and seed normalisation
//! - [`model`]: splitting a domain into its base and movable labels
//! - [`permutation`]: the label permutation engine
//! - [`dedup`]: order-preserving deduplication
//! - [`options`]: generation and output options

#![allow(clippy::multiple_crate_versions)]

pub mod dedup;
pub mod model;
pub mod options;
pub mod permutation;
pub mod validation;

pub use dedup::dedup_preserving_order;
pub use model::SplitDomain;
pub use options::{GenerationOptions, OutputFormat};
pub use permutation::{InvalidSeed, LARGE_PERMUTATION_LABELS, PermutationEngine, permutation_count};
pub use validation::{SubdomainValidator, normalize_seed};
