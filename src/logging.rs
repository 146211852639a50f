// src/logging.rs
use tracing::level_filters::LevelFilter;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Installs a stderr `fmt` subscriber filtered by `RUST_LOG`, showing only
/// warnings when the variable is unset.
pub fn init() -> anyhow::Result<()> {
    let env_filter = EnvFilter::builder()
        .with_default_directive(LevelFilter::WARN.into())
        .from_env_lossy();

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr).with_target(false).without_time())
        .with(env_filter)
        .try_init()?;
    Ok(())
}
