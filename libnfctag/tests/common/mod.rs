// Shared helpers for integration tests. Each aggregator pulls this in with
// `#[path]`, so not every helper is used by every test crate.
#![allow(dead_code)]

pub mod fixtures;

pub use libnfctag::test_support::{SharedMock, connected_mock_session, success};

/// Initialise env_logger once; repeated calls are ignored.
pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}
