// crates/usecase/src/collector.rs
use std::io::BufRead;

use subcomb_domain::{GenerationOptions, PermutationEngine, dedup_preserving_order};
use subcomb_ports::{Diagnostic, DiagnosticSink};
use subcomb_shared_kernel::{ErrorContext, InfrastructureError, Result};

use crate::dto::{CollectOptions, CollectOutput};

/// Applies the permutation engine to each seed line of an input stream.
///
/// Blank lines and lines starting with `#` are skipped. Results are
/// concatenated in line order and, when `unique` is set, deduplicated once
/// more across all seeds. The whole result set is held in memory; a read
/// error discards everything collected so far.
pub struct CollectSeeds<'a> {
    engine: PermutationEngine,
    options: CollectOptions,
    diagnostics: &'a dyn DiagnosticSink,
}

impl<'a> CollectSeeds<'a> {
    pub fn new(options: CollectOptions, diagnostics: &'a dyn DiagnosticSink) -> Result<Self> {
        let engine = PermutationEngine::new(GenerationOptions { unique: options.unique })?;
        Ok(Self { engine, options, diagnostics })
    }

    /// Lines are decoded lossily, so bytes that are not UTF-8 end up in a
    /// seed the validator rejects rather than failing the read.
    pub fn run<R: BufRead>(&self, mut reader: R) -> Result<CollectOutput> {
        let mut output = CollectOutput::default();
        let mut buf = Vec::new();
        let mut line_no = 0usize;

        loop {
            buf.clear();
            let read = reader
                .read_until(b'\n', &mut buf)
                .map_err(|source| InfrastructureError::InputRead { source })
                .with_context(|| format!("reading seed line {}", line_no + 1))?;
            if read == 0 {
                break;
            }
            line_no += 1;

            let line = String::from_utf8_lossy(&buf);
            let seed = line.trim();
            if seed.is_empty() || seed.starts_with('#') {
                continue;
            }

            self.notify(|| Diagnostic::Processing(seed.to_string()))?;
            output.seeds += 1;

            match self.engine.try_generate(seed) {
                Ok(results) => output.results.extend(results),
                Err(invalid) => {
                    tracing::debug!(seed = %invalid.0, "skipping invalid seed");
                    output.invalid += 1;
                    self.notify(|| Diagnostic::InvalidSeed(invalid.0))?;
                }
            }
        }

        if self.options.unique {
            output.results = dedup_preserving_order(output.results);
        }

        self.notify(|| Diagnostic::Generated(output.results.len()))?;
        Ok(output)
    }

    fn notify<F>(&self, diagnostic: F) -> Result<()>
    where
        F: FnOnce() -> Diagnostic,
    {
        if self.options.verbose {
            self.diagnostics.emit(&diagnostic())?;
        }
        Ok(())
    }
}
