//! # Ports
//!
//! Interface definitions for external collaborators.
//!
//! - [`diagnostics`]: side channel for verbose and warning messages,
//!   kept separate from the primary output stream
//!
//! These ports allow the use cases to stay independent of where
//! diagnostics actually end up.

// crates/ports/src/lib.rs
#![allow(clippy::multiple_crate_versions)]

pub mod diagnostics;

pub use diagnostics::{Diagnostic, DiagnosticSink, NullDiagnostics};
