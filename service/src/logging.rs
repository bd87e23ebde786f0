//! Diagnostic logging, kept off stdout

use tracing_subscriber::EnvFilter;

/// Install the global subscriber.
///
/// Output goes to stderr: stdout carries protocol lines only. The filter comes
/// from `RUST_LOG` and defaults to `info`.
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
