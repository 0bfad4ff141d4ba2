//! Shared test utilities for cmctl integration tests.
//!
//! Responsibilities:
//! - Provide a hermetic CLI command factory that prevents dotenv loading.
//! - Load JSON fixtures shared with the client crate.
//!
//! Invariants / Assumptions:
//! - All integration tests using this helper are hermetic by default.
//! - Credentials are `admin`/`admin` unless a test overrides them.

use assert_cmd::Command;

/// Returns a hermetic `cmctl` command for integration testing.
///
/// It ensures:
/// - `DOTENV_DISABLED=1` is set to prevent local `.env` contamination.
/// - Credentials are set to dummy values to satisfy config validation.
/// - Other `CM_*` env vars are cleared to ensure no leakage from the host.
pub fn cmctl_cmd() -> Command {
    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("cmctl");

    // Hermeticity: prevent loading local .env
    cmd.env("DOTENV_DISABLED", "1");

    cmd.env("CM_USERNAME", "admin").env("CM_PASSWORD", "admin");

    // Clear potential host leakage
    cmd.env_remove("CM_BASE_URL")
        .env_remove("CM_TIMEOUT")
        .env_remove("CM_CONNECT_TIMEOUT")
        .env_remove("CM_API_VERSION")
        .env_remove("CM_POLL_INTERVAL")
        .env_remove("CM_MAX_WAIT")
        .env_remove("RUST_LOG");

    cmd
}

/// Returns a hermetic `cmctl` command pointed at `base_url`.
#[allow(dead_code)]
pub fn cmctl_cmd_with_base_url(base_url: &str) -> Command {
    let mut cmd = cmctl_cmd();
    cmd.env("CM_BASE_URL", base_url);
    cmd
}

/// Load a JSON fixture from the client crate's fixtures directory.
#[allow(dead_code)]
pub fn load_fixture(fixture_path: &str) -> serde_json::Value {
    cm_client::testing::load_fixture(fixture_path)
}
