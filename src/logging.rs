//! Logging setup.
//!
//! Logs go to stderr only; stdout carries the MCP protocol.

use tracing_subscriber::EnvFilter;

/// Build the filter: `RUST_LOG` wins, otherwise `default_level` for every target.
pub fn env_filter(default_level: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level))
}

/// Install the global stderr subscriber. Call once at startup.
pub fn init_logging(default_level: &str) {
    tracing_subscriber::fmt()
        .with_env_filter(env_filter(default_level))
        .with_writer(std::io::stderr)
        .init();
}
