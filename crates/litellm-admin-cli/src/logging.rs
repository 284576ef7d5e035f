//! Tracing subscriber installation for the CLI.

use anyhow::{Result, anyhow};
use tracing_subscriber::{EnvFilter, fmt};

/// Filter applied when `RUST_LOG` is not provided.
const DEFAULT_LOG_LEVEL: &str = "warn";
const VERBOSE_LOG_LEVEL: &str = "debug";

/// Install a stderr subscriber so diagnostics never mix with command output.
///
/// # Errors
///
/// Returns an error if a global subscriber has already been installed.
pub(crate) fn init_logging(verbose: bool) -> Result<()> {
    let level = if verbose {
        VERBOSE_LOG_LEVEL
    } else {
        DEFAULT_LOG_LEVEL
    };
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    fmt::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|err| anyhow!("failed to install tracing subscriber: {err}"))
}
