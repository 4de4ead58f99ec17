// file: src/logging/logger.rs
// version: 1.1.0
// guid: 2e6b0d97-53c4-4f18-a2d0-f19c84e67b35

//! Logger initialization and configuration

use crate::Result;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Initialize the logging system
///
/// `--quiet` and `--verbose` take precedence; otherwise the configured
/// level string is used, falling back to `info` if it does not parse.
pub fn init_logger(verbose: bool, quiet: bool, default_level: &str) -> Result<()> {
    let filter = if quiet {
        EnvFilter::new("error")
    } else if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_new(default_level).unwrap_or_else(|_| EnvFilter::new("info"))
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                // stdout is reserved for the assembled command
                .with_writer(std::io::stderr)
                .with_target(false)
                .with_thread_ids(false)
                .with_file(false)
                .with_line_number(false)
                .compact(),
        )
        .try_init()
        .map_err(|e| {
            crate::error::HarnessError::config(format!("Failed to initialize logger: {}", e))
        })?;

    Ok(())
}
