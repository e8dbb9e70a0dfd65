//! Diagnostic logging for the command-line front end.
//!
//! The library only emits `tracing` events; installing a subscriber is the
//! binary's job. Log lines go to stderr so report output on stdout stays
//! machine-readable.

use tracing_subscriber::EnvFilter;

/// Environment variable holding an `EnvFilter` directive, e.g.
/// `CODECAT_LOG=codecat=debug`. Takes precedence over `-v` flags.
pub const LOG_ENV_VAR: &str = "CODECAT_LOG";

/// Default level for a given number of `-v` flags.
pub fn level_for_verbosity(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

fn build_filter(verbosity: u8) -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV_VAR)
        .unwrap_or_else(|_| EnvFilter::new(level_for_verbosity(verbosity)))
}

/// Install the global stderr subscriber. Calling it twice is harmless; the
/// second call leaves the first subscriber in place.
pub fn init_tracing(verbosity: u8) {
    let result = tracing_subscriber::fmt()
        .with_env_filter(build_filter(verbosity))
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();

    if let Err(e) = result {
        tracing::debug!(error = %e, "tracing subscriber already installed");
    }
}
