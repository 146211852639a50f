// src/app.rs
use std::io::BufRead;

use anyhow::{Context, Result};
use subcomb_infra::{InputSource, OutputWriter, StderrDiagnostics, emit};
use subcomb_ports::DiagnosticSink;
use subcomb_usecase::{CollectOutput, CollectSeeds};

use crate::config::Config;

/// Runs one invocation against the real stdin and stderr.
pub fn run(config: &Config) -> Result<CollectOutput> {
    let source = InputSource::detect(config.input_file.as_deref(), config.seed.as_deref())?;
    run_with_source(config, source, &StderrDiagnostics)
}

/// Opens `source` and hands it to [`run_with_reader`].
pub fn run_with_source(config: &Config, source: InputSource, diagnostics: &dyn DiagnosticSink) -> Result<CollectOutput> {
    let reader = source.open()?;
    run_with_reader(config, reader, diagnostics)
}

/// Reads every seed from `reader`, then writes the combined results.
///
/// The output file is only created once the whole input was read, so a
/// failed read leaves an existing file as it was.
pub fn run_with_reader(config: &Config, reader: impl BufRead, diagnostics: &dyn DiagnosticSink) -> Result<CollectOutput> {
    let collected = CollectSeeds::new(config.collect_options(), diagnostics)?
        .run(reader)
        .context("failed to process input")?;
    tracing::debug!(
        seeds = collected.seeds,
        invalid = collected.invalid,
        results = collected.results.len(),
        "input processed"
    );

    let mut writer = OutputWriter::create(config.output_file.as_deref())?;
    emit(&collected.results, config.format, &mut writer).context("failed to emit output")?;
    Ok(collected)
}
