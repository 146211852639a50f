// crates/domain/src/validation.rs
use regex::Regex;
use subcomb_shared_kernel::{DomainError, DomainResult};

/// One or more hostname labels (1-63 chars, alphanumeric, inner hyphens only)
/// followed by an alphabetic TLD of at least two characters.
pub const SUBDOMAIN_PATTERN: &str = r"^[a-zA-Z0-9]([a-zA-Z0-9\-]{0,61}[a-zA-Z0-9])?(\.[a-zA-Z0-9]([a-zA-Z0-9\-]{0,61}[a-zA-Z0-9])?)*\.[a-zA-Z]{2,63}$";

/// Decides whether a string is domain-shaped.
///
/// The validator does not normalise its input; callers pass the string
/// through [`normalize_seed`] first.
#[derive(Debug, Clone)]
pub struct SubdomainValidator {
    pattern: Regex,
}

impl SubdomainValidator {
    pub fn new() -> DomainResult<Self> {
        let pattern = Regex::new(SUBDOMAIN_PATTERN).map_err(|err| DomainError::InvalidPattern {
            pattern: SUBDOMAIN_PATTERN.to_string(),
            details: err.to_string(),
        })?;
        Ok(Self { pattern })
    }

    /// Returns `true` iff the whole string is a valid subdomain.
    #[must_use]
    pub fn is_valid(&self, input: &str) -> bool {
        self.pattern.is_match(input)
    }
}

/// Lower-cases, trims surrounding whitespace and strips one trailing dot.
#[must_use]
pub fn normalize_seed(raw: &str) -> String {
    let lowered = raw.trim().to_lowercase();
    match lowered.strip_suffix('.') {
        Some(stripped) => stripped.to_string(),
        None => lowered,
    }
}
