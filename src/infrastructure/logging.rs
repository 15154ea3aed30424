//! Tracing subscriber setup

use crate::error::{MoodError, Result};
use tracing_subscriber::EnvFilter;

/// Environment variable holding an explicit filter directive
pub const LOG_ENV: &str = "MOODMETER_LOG";

/// Default filter directive for the given verbosity flags
pub fn default_level(quiet: bool, verbose: bool) -> &'static str {
    if quiet {
        "error"
    } else if verbose {
        "debug"
    } else {
        "warn"
    }
}

/// Install a stderr fmt subscriber. `MOODMETER_LOG` overrides the flags.
pub fn init_logging(quiet: bool, verbose: bool) -> Result<()> {
    let filter = EnvFilter::try_from_env(LOG_ENV)
        .unwrap_or_else(|_| EnvFilter::new(default_level(quiet, verbose)));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init()
        .map_err(|e| MoodError::Config(format!("Failed to initialize logging: {}", e)))
}
