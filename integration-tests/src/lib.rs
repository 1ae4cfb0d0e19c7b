//! Shared fixtures for the cross-crate scenario tests.

pub mod reference;

use std::sync::Once;

use tracing_subscriber::EnvFilter;

/// Installs a test-friendly `tracing` subscriber once per test binary.
///
/// Honors `RUST_LOG`, so `RUST_LOG=contrail_sac=debug` shows every
/// disagreement between the two verdicts.
pub fn init_tracing() {
    static INIT: Once = Once::new();
    INIT.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();
    });
}
