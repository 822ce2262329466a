//! Logging setup.
//!
//! The engine emits `tracing` events at run and phase boundaries; hosts
//! call [`init`] once to get them on stderr, filtered by `RUST_LOG`.

use tracing_subscriber::{fmt, EnvFilter};

/// Initializes the global subscriber.
///
/// Reads the filter from `RUST_LOG`, defaulting to `info`. Panics if a
/// global subscriber is already set.
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .init();
}

/// Initializes a test subscriber at debug level.
///
/// Safe to call from multiple tests; later calls are no-ops.
pub fn init_test() {
    let _ = fmt()
        .with_env_filter(EnvFilter::new("debug"))
        .with_test_writer()
        .try_init();
}
