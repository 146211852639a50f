// crates/domain/src/permutation.rs
//! Label permutation engine.
//!
//! For a domain with `n` movable labels the engine emits
//! `1 + Σ_{k=1..n} n!/(n-k)!` strings before deduplication: 5 for two
//! labels, 16 for three, 65 for four, 1957 for six and 109601 for eight.
//! Growth is factorial, so every extra label multiplies the work and the
//! memory held by the result set.

use std::fmt;

use subcomb_shared_kernel::DomainResult;

use crate::{
    dedup::dedup_preserving_order,
    model::SplitDomain,
    options::GenerationOptions,
    validation::{SubdomainValidator, normalize_seed},
};

/// Seeds with more movable labels than this trigger a growth warning.
pub const LARGE_PERMUTATION_LABELS: usize = 8;

const PREALLOCATE_LIMIT: usize = 1 << 16;

/// A seed that did not pass validation. Carries the normalised form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvalidSeed(pub String);

impl fmt::Display for InvalidSeed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "'{}' doesn't appear to be a valid subdomain", self.0)
    }
}

/// Number of strings generated for `movable` labels before deduplication,
/// base domain included. Saturates at `u64::MAX`.
#[must_use]
pub fn permutation_count(movable: usize) -> u64 {
    let mut total: u64 = 1;
    let mut arrangements: u64 = 1;
    for k in 1..=movable {
        arrangements = arrangements.saturating_mul((movable - k + 1) as u64);
        total = total.saturating_add(arrangements);
    }
    total
}

/// Expands a seed domain into the base domain plus every ordered,
/// repetition-free selection of its movable labels.
#[derive(Debug, Clone)]
pub struct PermutationEngine {
    validator: SubdomainValidator,
    options: GenerationOptions,
}

impl PermutationEngine {
    pub fn new(options: GenerationOptions) -> DomainResult<Self> {
        Ok(Self { validator: SubdomainValidator::new()?, options })
    }

    /// Generates permutations for `seed`, returning an empty list when the
    /// seed is not domain-shaped.
    #[must_use]
    pub fn generate(&self, seed: &str) -> Vec<String> {
        self.try_generate(seed).unwrap_or_default()
    }

    /// Like [`generate`](Self::generate) but reports invalid seeds.
    pub fn try_generate(&self, seed: &str) -> Result<Vec<String>, InvalidSeed> {
        let normalized = normalize_seed(seed);
        if !self.validator.is_valid(&normalized) {
            return Err(InvalidSeed(normalized));
        }

        let Some(split) = SplitDomain::parse(&normalized) else {
            return Ok(vec![normalized.clone()]);
        };

        let n = split.movable.len();
        if n > LARGE_PERMUTATION_LABELS {
            tracing::warn!(
                seed = %normalized,
                labels = n,
                results = permutation_count(n),
                "seed has many movable labels; permutation count grows factorially"
            );
        }

        let capacity = usize::try_from(permutation_count(n)).map_or(PREALLOCATE_LIMIT, |c| c.min(PREALLOCATE_LIMIT));
        let mut results = Vec::with_capacity(capacity);
        results.push(split.base.clone());
        Backtracker::new(&split.movable, &split.base).run(&mut results);

        if self.options.unique {
            results = dedup_preserving_order(results);
        }
        tracing::trace!(seed = %normalized, count = results.len(), "generated permutations");
        Ok(results)
    }
}

/// Depth-first enumeration over label positions. `used` marks positions
/// already placed in `chosen`; both buffers are reused for every length.
struct Backtracker<'a> {
    labels: &'a [&'a str],
    base: &'a str,
    used: Vec<bool>,
    chosen: Vec<usize>,
}

impl<'a> Backtracker<'a> {
    fn new(labels: &'a [&'a str], base: &'a str) -> Self {
        Self {
            labels,
            base,
            used: vec![false; labels.len()],
            chosen: Vec::with_capacity(labels.len()),
        }
    }

    fn run(mut self, out: &mut Vec<String>) {
        for length in 1..=self.labels.len() {
            self.extend(length, out);
        }
    }

    fn extend(&mut self, length: usize, out: &mut Vec<String>) {
        if self.chosen.len() == length {
            out.push(self.render());
            return;
        }
        for index in 0..self.labels.len() {
            if self.used[index] {
                continue;
            }
            self.used[index] = true;
            self.chosen.push(index);
            self.extend(length, out);
            self.chosen.pop();
            self.used[index] = false;
        }
    }

    fn render(&self) -> String {
        let len = self.chosen.iter().map(|&i| self.labels[i].len() + 1).sum::<usize>() + self.base.len();
        let mut rendered = String::with_capacity(len);
        for &index in &self.chosen {
            rendered.push_str(self.labels[index]);
            rendered.push('.');
        }
        rendered.push_str(self.base);
        rendered
    }
}
