// crates/infra/src/output/formatters.rs
//! Result serializers. Results are always domain-shaped, so none of the
//! formats need quoting or escaping.

use std::io::Write;

use subcomb_shared_kernel::{InfraResult, InfrastructureError};

fn write_err(source: std::io::Error) -> InfrastructureError {
    InfrastructureError::OutputWrite { source }
}

/// One result per line.
pub fn output_plain(results: &[String], out: &mut impl Write) -> InfraResult<()> {
    for result in results {
        writeln!(out, "{result}").map_err(write_err)?;
    }
    Ok(())
}

/// A compact JSON array followed by a newline.
pub fn output_json(results: &[String], out: &mut impl Write) -> InfraResult<()> {
    serde_json::to_writer(&mut *out, results)?;
    writeln!(out).map_err(write_err)
}

/// A `subdomain` header, then one result per line.
pub fn output_csv(results: &[String], out: &mut impl Write) -> InfraResult<()> {
    writeln!(out, "subdomain").map_err(write_err)?;
    output_plain(results, out)
}
