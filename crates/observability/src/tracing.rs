//! Tracing/logging initialization.

use tracing_subscriber::EnvFilter;

/// Install the JSON subscriber.
///
/// `RUST_LOG` wins over `default_filter` when set. Safe to call multiple
/// times (subsequent calls are no-ops).
pub fn init(default_filter: &str) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_filter));

    // JSON logs + timestamps.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .json()
        .with_timer(tracing_subscriber::fmt::time::SystemTime)
        .with_target(false)
        .try_init();
}

/// Install a plain-text subscriber that writes through the test harness.
///
/// Used by integration tests so request logs show up under `--nocapture`.
pub fn init_for_tests() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new("debug"))
        .with_test_writer()
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn init_is_idempotent() {
        init("info");
        init("debug");
        init_for_tests();
    }
}
