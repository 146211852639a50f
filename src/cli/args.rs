// src/cli/args.rs
use std::path::PathBuf;

use clap::{ArgAction, Parser, ValueHint};

use super::value_enum::CliOutputFormat;

/// Top-level CLI arguments parsed via clap.
#[derive(Parser, Debug)]
#[command(
    name = "subcomb",
    version = crate::VERSION,
    about = "Subdomain permutation generator",
    long_about = Some(include_str!("../../usage.txt"))
)]
pub struct Args {
    /// Seed subdomain (read from --input or piped stdin when omitted)
    #[arg(value_name = "SUBDOMAIN")]
    pub subdomain: Option<String>,

    /// Read subdomains from input file
    #[arg(short, long, value_name = "FILE", value_hint = ValueHint::FilePath)]
    pub input: Option<PathBuf>,

    /// Write results to output file (default: stdout)
    #[arg(short, long, value_name = "FILE", value_hint = ValueHint::FilePath)]
    pub output: Option<PathBuf>,

    /// Remove duplicate results (use --unique=false to keep them)
    #[arg(
        short,
        long,
        value_name = "BOOL",
        action = ArgAction::Set,
        num_args = 0..=1,
        require_equals = true,
        default_value_t = true,
        default_missing_value = "true"
    )]
    pub unique: bool,

    /// Enable verbose output on stderr
    #[arg(short, long)]
    pub verbose: bool,

    /// Output format
    #[arg(short, long, value_enum, default_value = "plain")]
    pub format: CliOutputFormat,
}
