// src/logging.rs
//! Diagnostic logging on stderr.

use anyhow::{anyhow, Result};
use tracing_subscriber::EnvFilter;

/// Installs the global subscriber. `RUST_LOG` takes precedence over `verbose`.
///
/// # Errors
/// Returns error if the filter is invalid or a subscriber is already installed.
pub fn init(verbose: bool) -> Result<()> {
    let default = if verbose { "debug" } else { "warn" };
    let filter = match std::env::var("RUST_LOG") {
        Ok(directives) => EnvFilter::try_new(directives)?,
        Err(_) => EnvFilter::new(default),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|e| anyhow!("failed to install logger: {e}"))
}
