//! scp-cli library
//!
//! Exposes the command-line surface of the `scp` binary so commands can be
//! driven from tests with an in-memory writer.

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

pub mod commands;

pub use commands::types::{Cli, Commands, ExportArgs, Neo4jArgs};
pub use commands::Outcome;

/// Filter for the log level selected by the verbose flag
#[must_use]
pub fn log_filter(verbose: bool) -> EnvFilter {
    if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    }
}

/// Install the global tracing subscriber
///
/// Can only be called once per process.
pub fn setup_logging(verbose: bool) {
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(log_filter(verbose))
        .init();
}

#[cfg(test)]
mod tests;
