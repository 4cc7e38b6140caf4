//! Scenario and property tests for the quickpay crate
//!
//! - Integration scenarios exercising the public API end to end
//! - Security tests: escaping, tampering, signature properties
//! - Shared fixtures

pub mod fixtures;
pub mod integration;
pub mod security;

/// Test configuration and utilities
pub mod config {
    use std::sync::Once;

    static INIT: Once = Once::new();

    /// Initialize tracing once for the test binary
    pub fn init() {
        INIT.call_once(|| {
            let _ = tracing_subscriber::fmt()
                .with_env_filter("debug")
                .with_test_writer()
                .try_init();
        });
    }
}
