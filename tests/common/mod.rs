//! Shared helpers for integration tests

#![allow(dead_code)]

use std::sync::Once;

use serde_json::Value;

static TRACING: Once = Once::new();

/// Route `tracing` output through the test harness (RUST_LOG=pathflow=trace)
pub fn init_tracing() {
    TRACING.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();
    });
}

/// Integer view of a value; nil and non-numbers count as 0
pub fn int(value: &Value) -> i64 {
    value.as_i64().unwrap_or(0)
}
