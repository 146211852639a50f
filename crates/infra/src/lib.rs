// crates/infra/src/lib.rs
#![allow(clippy::multiple_crate_versions)]

pub mod diagnostics;
pub mod input;
pub mod output;
pub mod persistence;

pub use diagnostics::StderrDiagnostics;
pub use input::InputSource;
pub use output::{OutputWriter, emit};
