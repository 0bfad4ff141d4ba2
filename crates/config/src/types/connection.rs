//! Connection and polling configuration types.
//!
//! Responsibilities:
//! - Define connection settings (URL, timeouts, API version).
//! - Define command polling settings (interval, upper bound on a wait).
//! - Define the main `Config` structure combining connection, auth, and polling.
//! - Provide serialization helpers for `Duration`.
//!
//! Does NOT handle:
//! - Configuration loading from env (see `loader` module).
//! - Actual network connections (see client crate).
//!
//! Invariants:
//! - All duration fields are serialized as seconds (integers).
//! - `PollingConfig::max_wait` of `None` means "wait without bound" and must be opted into.

use crate::constants::{
    DEFAULT_API_VERSION, DEFAULT_CM_PORT, DEFAULT_CONNECT_TIMEOUT_SECS, DEFAULT_MAX_WAIT_SECS,
    DEFAULT_POLL_INTERVAL_SECS, DEFAULT_TIMEOUT_SECS,
};
use crate::types::auth::AuthConfig;
use secrecy::SecretString;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Module for serializing Duration as seconds (integer).
mod duration_seconds {
    use serde::{Deserialize, Deserializer, Serialize, Serializer};
    use std::time::Duration;

    pub fn serialize<S>(duration: &Duration, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        duration.as_secs().serialize(serializer)
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Duration, D::Error>
    where
        D: Deserializer<'de>,
    {
        let secs = u64::deserialize(deserializer)?;
        Ok(Duration::from_secs(secs))
    }
}

/// Module for serializing `Option<Duration>` as optional seconds.
mod opt_duration_seconds {
    use serde::{Deserialize, Deserializer, Serialize, Serializer};
    use std::time::Duration;

    pub fn serialize<S>(duration: &Option<Duration>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        duration.map(|d| d.as_secs()).serialize(serializer)
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<Duration>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let secs = Option::<u64>::deserialize(deserializer)?;
        Ok(secs.map(Duration::from_secs))
    }
}

/// Connection configuration for a Cloudera Manager server.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConnectionConfig {
    /// Base URL of the Cloudera Manager server (e.g., http://localhost:7180)
    pub base_url: String,
    /// Overall request timeout (serialized as seconds)
    #[serde(with = "duration_seconds")]
    pub timeout: Duration,
    /// TCP connect timeout (serialized as seconds)
    #[serde(with = "duration_seconds", default = "default_connect_timeout")]
    pub connect_timeout: Duration,
    /// API version path segment, e.g. "v1"
    #[serde(default = "default_api_version")]
    pub api_version: String,
}

fn default_connect_timeout() -> Duration {
    Duration::from_secs(DEFAULT_CONNECT_TIMEOUT_SECS)
}

fn default_api_version() -> String {
    DEFAULT_API_VERSION.to_string()
}

impl ConnectionConfig {
    /// Connection settings for `base_url` with default timeouts and API version.
    pub fn new(base_url: String) -> Self {
        Self {
            base_url,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            connect_timeout: default_connect_timeout(),
            api_version: default_api_version(),
        }
    }
}

/// Command polling configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PollingConfig {
    /// Delay between two status checks of the same command
    #[serde(with = "duration_seconds")]
    pub poll_interval: Duration,
    /// Upper bound on a single command wait; `None` waits indefinitely
    #[serde(with = "opt_duration_seconds", default)]
    pub max_wait: Option<Duration>,
}

impl Default for PollingConfig {
    fn default() -> Self {
        Self {
            poll_interval: Duration::from_secs(DEFAULT_POLL_INTERVAL_SECS),
            max_wait: Some(Duration::from_secs(DEFAULT_MAX_WAIT_SECS)),
        }
    }
}

/// Main configuration structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Connection settings
    pub connection: ConnectionConfig,
    /// Authentication settings
    pub auth: AuthConfig,
    /// Command polling settings
    #[serde(default)]
    pub polling: PollingConfig,
}

impl Default for Config {
    /// Creates a default configuration with development-only credentials.
    ///
    /// # Security Warning
    ///
    /// The default configuration uses Cloudera Manager's factory credentials
    /// (admin/admin) targeting localhost:7180. These are **ONLY** appropriate for
    /// local development and MUST be changed before any production use.
    fn default() -> Self {
        Self::with_credentials(
            format!("http://localhost:{}", DEFAULT_CM_PORT),
            "admin".to_string(),
            SecretString::new("admin".to_string().into()),
        )
    }
}

impl Config {
    /// Create a new config with the specified base URL and credentials.
    pub fn with_credentials(base_url: String, username: String, password: SecretString) -> Self {
        Self {
            connection: ConnectionConfig::new(base_url),
            auth: AuthConfig { username, password },
            polling: PollingConfig::default(),
        }
    }

    /// Checks if this configuration is using the factory credentials (admin/admin).
    pub fn is_using_default_credentials(&self) -> bool {
        use secrecy::ExposeSecret;

        self.auth.username == "admin" && self.auth.password.expose_secret() == "admin"
    }
}
