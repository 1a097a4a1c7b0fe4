//! Tracing initialization for hosting processes

use tracing_subscriber::EnvFilter;

/// Initialize the global tracing subscriber from `RUST_LOG`.
///
/// Safe to call more than once; later calls are ignored.
pub fn init() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .try_init();
}
