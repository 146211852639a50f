// crates/ports/src/diagnostics.rs
use std::fmt;

use subcomb_shared_kernel::Result;

/// A message destined for the diagnostic side channel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Diagnostic {
    /// A seed line is about to be expanded.
    Processing(String),
    /// A seed was skipped because it is not domain-shaped.
    InvalidSeed(String),
    /// Total number of results after collection.
    Generated(usize),
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Processing(line) => write!(f, "Processing: {line}"),
            Self::InvalidSeed(seed) => write!(f, "Warning: '{seed}' doesn't appear to be a valid subdomain"),
            Self::Generated(count) => write!(f, "Generated {count} results"),
        }
    }
}

pub trait DiagnosticSink: Send + Sync {
    fn emit(&self, diagnostic: &Diagnostic) -> Result<()>;
}

/// Discards every diagnostic.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullDiagnostics;

impl DiagnosticSink for NullDiagnostics {
    fn emit(&self, _diagnostic: &Diagnostic) -> Result<()> {
        Ok(())
    }
}
