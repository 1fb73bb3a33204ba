//! Tracing setup for the CLI.
//!
//! Structured logs go to stderr so stdout stays reserved for the single
//! JSON record each command emits.

use tracing_subscriber::{EnvFilter, fmt};

/// Initialize the tracing subscriber.
///
/// Honors `RUST_LOG` when set; otherwise defaults to `info`, or `debug`
/// under `--verbose`. Safe to call once per process; a second call is a
/// no-op.
pub fn init_tracing(verbose: bool) {
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| {
            if verbose {
                EnvFilter::try_new("debug")
            } else {
                EnvFilter::try_new("info")
            }
        })
        .unwrap_or_else(|_| EnvFilter::new("info"));

    let _ = fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(verbose)
        .compact()
        .try_init();
}
