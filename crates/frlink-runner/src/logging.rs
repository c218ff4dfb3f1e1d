//! Tracing subscriber setup.

use tracing_subscriber::EnvFilter;

use crate::error::*;

/// Filter used when nothing else is configured.
pub const DEFAULT_LOG_FILTER: &str = "info";

/// Pick the log filter: an explicit level wins, then `RUST_LOG`, then
/// [`DEFAULT_LOG_FILTER`].
pub fn build_filter(level: Option<&str>) -> RunnerResult<EnvFilter> {
    match level {
        Some(level) => {
            EnvFilter::try_new(level).map_err(|e| RunnerError::Logging(e.to_string()))
        }
        None => Ok(EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER))),
    }
}

/// Install the global subscriber. Logs go to stderr so stdout carries only
/// command output.
pub fn init_logging(level: Option<&str>) -> RunnerResult<()> {
    let filter = build_filter(level)?;
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|e| RunnerError::Logging(e.to_string()))
}
