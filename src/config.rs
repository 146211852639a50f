// src/config.rs
use std::path::PathBuf;

use subcomb_domain::OutputFormat;
use subcomb_usecase::CollectOptions;

use crate::cli::Args;

/// Resolved run configuration. Each field is handed to the stage that needs
/// it as a plain value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub input_file: Option<PathBuf>,
    pub output_file: Option<PathBuf>,
    pub seed: Option<String>,
    pub unique: bool,
    pub verbose: bool,
    pub format: OutputFormat,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            input_file: None,
            output_file: None,
            seed: None,
            unique: true,
            verbose: false,
            format: OutputFormat::Plain,
        }
    }
}

impl Config {
    #[must_use]
    pub fn collect_options(&self) -> CollectOptions {
        CollectOptions { unique: self.unique, verbose: self.verbose }
    }
}

impl From<Args> for Config {
    fn from(args: Args) -> Self {
        Self {
            input_file: args.input,
            output_file: args.output,
            seed: args.subdomain,
            unique: args.unique,
            verbose: args.verbose,
            format: args.format.into(),
        }
    }
}
