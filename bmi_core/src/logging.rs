//! Tracing setup shared by the `bmi` binary and the unit tests.

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Start logging at `info`.
pub fn init() {
    init_with_level("info")
}

/// Start logging at `default_level` unless `RUST_LOG` says otherwise.
///
/// Events go to stderr in the compact format; stdout is reserved for
/// results, including `calc --json`.
pub fn init_with_level(default_level: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().compact().with_writer(std::io::stderr))
        .init();
}

/// Debug-level logging routed through the test harness writer
#[cfg(test)]
pub fn init_test() {
    let _ = tracing_subscriber::fmt()
        .with_test_writer()
        .with_env_filter(EnvFilter::new("debug"))
        .try_init();
}
