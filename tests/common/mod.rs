#![allow(dead_code)]
//! Shared integration test utilities.
//!
//! Import with:
//! ```
//! mod common;
//! use common::*;
//! ```

use proptest::prelude::ProptestConfig;
use std::sync::Once;

static INIT_LOGGING: Once = Once::new();

/// Initialize tracing output for tests. Safe to call from every test;
/// only the first call installs the subscriber.
pub fn init_test_logging() {
    INIT_LOGGING.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();
        tracing::debug!("test logging initialized");
    });
}

/// Build a `ProptestConfig` with the given case count and a bounded
/// shrink budget.
pub fn test_proptest_config(cases: u32) -> ProptestConfig {
    ProptestConfig {
        cases,
        max_shrink_iters: 2048,
        ..ProptestConfig::default()
    }
}
