//! Logging setup
//!
//! Structured logging to stderr via `tracing`. `RUST_LOG` wins when set;
//! otherwise the verbosity flag picks the default level.

use tracing_subscriber::EnvFilter;

/// Initialize logging for the CLI. Call once, before any work.
pub fn init(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
