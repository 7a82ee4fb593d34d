// tests/support.rs
//! Test utilities — tracing setup and fixture loading

use std::fs;
use std::path::PathBuf;

/// Initialize tracing only when logging feature is enabled
#[cfg(feature = "logging")]
#[allow(dead_code)]
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt().with_test_writer().try_init();
}

#[cfg(not(feature = "logging"))]
#[allow(dead_code)]
pub fn init_tracing() {}

/// Read a file from `tests/data` as text
#[allow(dead_code)] // not every test binary loads fixtures
pub fn fixture(name: &str) -> String {
    let path = PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("data")
        .join(name);
    fs::read_to_string(&path).unwrap_or_else(|e| panic!("missing fixture {}: {e}", path.display()))
}
