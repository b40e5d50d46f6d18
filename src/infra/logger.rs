// src/infra/logger.rs — Structured logging with tracing
//
// The library only emits `tracing` events. Binaries and tests that want to
// see them can install this subscriber.

use tracing_subscriber::{fmt, EnvFilter};

/// Install a compact fmt subscriber filtered by `RUST_LOG`, falling back to
/// `level`. Returns false if a global subscriber was already installed.
pub fn init_logging(level: &str) -> bool {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .compact()
        .try_init()
        .is_ok()
}
