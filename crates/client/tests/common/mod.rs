//! Common test utilities for integration tests.
//!
//! This module provides shared helper functions and re-exports commonly used
//! types for testing the Cloudera Manager client against a wiremock server.
//!
//! # Invariants
//! - Fixtures are loaded from the `fixtures/` directory relative to the crate root
//! - All fixture files must be valid JSON
//! - Test clients authenticate as `admin:admin`
//!
//! # What this does NOT handle
//! - Test-specific assertions or test logic

use std::time::Duration;

#[allow(unused_imports)]
pub use cm_client::testing::load_fixture;

// Re-export commonly used types for test convenience
#[allow(unused_imports)]
pub use cm_client::{ClientError, ClouderaManagerClient, WaitOptions};
#[allow(unused_imports)]
pub use wiremock::{Mock, MockServer, ResponseTemplate};

/// `Authorization` header value for `admin:admin`.
#[allow(dead_code)]
pub const ADMIN_BASIC_AUTH: &str = "Basic YWRtaW46YWRtaW4=";

/// Build a client pointed at the mock server.
#[allow(dead_code)]
pub fn client_for(server: &MockServer) -> ClouderaManagerClient {
    ClouderaManagerClient::builder()
        .base_url(server.uri())
        .credentials("admin", secrecy::SecretString::new("admin".into()))
        .timeout(Duration::from_secs(5))
        .build()
        .expect("client should build for mock server")
}

/// Wait options with a short real-time interval for HTTP-backed polling tests.
#[allow(dead_code)]
pub fn fast_wait() -> WaitOptions {
    WaitOptions::new()
        .with_poll_interval(Duration::from_millis(20))
        .expect("interval is positive")
        .with_timeout(Duration::from_secs(10))
}
