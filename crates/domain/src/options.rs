// crates/domain/src/options.rs
use std::fmt;

/// Output format options for the tool.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// One result per line.
    #[default]
    Plain,
    /// A single JSON array of strings.
    Json,
    /// A `subdomain` header followed by one result per line.
    Csv,
}

impl OutputFormat {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Plain => "plain",
            Self::Json => "json",
            Self::Csv => "csv",
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Options that shape what the permutation engine and collector emit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GenerationOptions {
    /// Drop repeated results, keeping the first occurrence.
    pub unique: bool,
}

impl Default for GenerationOptions {
    fn default() -> Self {
        Self { unique: true }
    }
}
