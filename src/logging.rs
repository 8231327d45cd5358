//! Diagnostic logging setup
//!
//! Logs go to stderr through `tracing-subscriber`. The default level is
//! `warn`; `--verbose` turns on debug logs for this crate and `RUST_LOG`
//! overrides both.

use tracing_subscriber::EnvFilter;

/// Build the filter used by the subscriber
pub fn filter(verbose: bool) -> EnvFilter {
    let default = if verbose {
        "warn,check_deps=debug"
    } else {
        "warn"
    };
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default))
}

/// Install the global subscriber. Later calls are no-ops.
pub fn init(verbose: bool) {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter(verbose))
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .try_init();
}
