// crates/infra/src/output/mod.rs
pub mod formatters;
mod writer;

use std::io::Write;

use formatters::{output_csv, output_json, output_plain};
use subcomb_domain::OutputFormat;
use subcomb_shared_kernel::{InfrastructureError, Result};
pub use writer::OutputWriter;

/// Serialize `results` in `format` to `out` and flush it.
pub fn emit(results: &[String], format: OutputFormat, out: &mut impl Write) -> Result<()> {
    tracing::debug!(%format, count = results.len(), "writing results");
    match format {
        OutputFormat::Plain => output_plain(results, out)?,
        OutputFormat::Json => output_json(results, out)?,
        OutputFormat::Csv => output_csv(results, out)?,
    }
    out.flush().map_err(|source| InfrastructureError::OutputWrite { source })?;
    Ok(())
}
