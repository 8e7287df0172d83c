//! Tracing subscriber setup for the `headsup` binary.
//!
//! Events go to stderr so they never mix with command output on stdout.
//! `RUST_LOG` overrides [`DEFAULT_FILTER`].

use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt;

/// Warnings everywhere, plus hand starts and settlements from the engine.
pub const DEFAULT_FILTER: &str = "warn,headsup_engine=info";

pub fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

/// Installs the global subscriber. Fails if one is already set.
pub fn init_logging() -> Result<(), String> {
    let subscriber = fmt()
        .with_env_filter(env_filter())
        .with_writer(std::io::stderr)
        .with_target(true)
        .finish();

    tracing::subscriber::set_global_default(subscriber).map_err(|e| e.to_string())
}
