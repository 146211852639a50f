// crates/usecase/src/dto.rs

/// Switches for a collection run, passed by value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CollectOptions {
    /// Deduplicate per seed and across the combined output.
    pub unique: bool,
    /// Emit per-line diagnostics.
    pub verbose: bool,
}

impl Default for CollectOptions {
    fn default() -> Self {
        Self { unique: true, verbose: false }
    }
}

/// Combined results of a collection run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CollectOutput {
    pub results: Vec<String>,
    /// Seed lines that reached the permutation engine.
    pub seeds: usize,
    /// Seeds rejected by validation.
    pub invalid: usize,
}
