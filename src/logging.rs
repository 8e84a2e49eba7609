//! Tracing subscriber setup for the command line tool

use anyhow::{Result, anyhow};
use tracing_subscriber::{EnvFilter, fmt};

use crate::config::LoggingConfig;

/// Install the global tracing subscriber
///
/// `RUST_LOG` wins over the configured level; `verbose` forces `debug`.
/// Output goes to stderr so stdout only carries the plan.
pub fn init_logging(config: &LoggingConfig, verbose: bool) -> Result<()> {
    let env_filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env()
            .or_else(|_| EnvFilter::try_new(&config.level))
            .unwrap_or_else(|_| EnvFilter::new("info"))
    };

    let builder = fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(false);

    let installed = match config.format.as_str() {
        "json" => builder.json().try_init(),
        _ => builder.pretty().try_init(),
    };

    installed.map_err(|e| anyhow!("Failed to initialize logging: {e}"))
}
