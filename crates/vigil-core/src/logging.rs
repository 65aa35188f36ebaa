//! Logging initialization for the supervisor.
//!
//! The child owns the terminal (stdio is fully inherited), so supervisor logs
//! are off by default and opt-in. When enabled, logs go to stderr as JSON so
//! they never mix with the child's stdout.

use tracing_subscriber::EnvFilter;

/// Initialize tracing output.
///
/// With `quiet` all log levels are suppressed. Otherwise the filter comes
/// from `RUST_LOG`, defaulting to `info`.
pub fn init_logging(quiet: bool) {
    let filter = if quiet {
        EnvFilter::new("off")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    };

    // try_init: tests may initialize more than once.
    let _ = tracing_subscriber::fmt()
        .json()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
