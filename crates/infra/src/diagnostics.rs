// crates/infra/src/diagnostics.rs
use std::io::{self, Write};

use subcomb_ports::{Diagnostic, DiagnosticSink};
use subcomb_shared_kernel::{InfrastructureError, Result};

/// Writes diagnostics to standard error, one per line, independent of the
/// primary output stream.
#[derive(Debug, Default, Clone, Copy)]
pub struct StderrDiagnostics;

impl DiagnosticSink for StderrDiagnostics {
    fn emit(&self, diagnostic: &Diagnostic) -> Result<()> {
        let mut stderr = io::stderr().lock();
        writeln!(stderr, "{diagnostic}").map_err(|source| InfrastructureError::DiagnosticWrite { source })?;
        Ok(())
    }
}
