// src/main.rs
#![allow(clippy::multiple_crate_versions)]

use std::process::ExitCode;

use clap::Parser;
use subcomb::{app, cli::Args, config::Config, logging};

fn main() -> ExitCode {
    let config = Config::from(Args::parse());

    if let Err(err) = logging::init() {
        eprintln!("Warning: failed to initialise logging: {err}");
    }

    match app::run(&config) {
        Ok(_) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {err:#}");
            ExitCode::FAILURE
        }
    }
}
