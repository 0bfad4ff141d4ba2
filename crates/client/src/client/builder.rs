//! Client builder for constructing [`ClouderaManagerClient`] instances.
//!
//! This module is responsible for:
//! - Providing a fluent builder API for client configuration
//! - Validating required configuration (base_url, credentials)
//! - Normalizing the base URL (removing trailing slashes) and deriving the API root
//! - Configuring the underlying HTTP client (timeouts, redirects)
//!
//! # What this module does NOT handle:
//! - Actual API calls (handled by [`ClouderaManagerClient`] methods)
//! - Reading environment variables or `.env` files (handled by `cm_config::ConfigLoader`)
//!
//! # Invariants
//! - `base_url` and credentials are required and must be provided before calling `build()`
//! - The base URL is always normalized to have no trailing slashes
//! - Only `http` and `https` base URLs are accepted

use std::time::Duration;

use cm_config::{
    Config, PollingConfig,
    constants::{
        DEFAULT_API_VERSION, DEFAULT_CONNECT_TIMEOUT_SECS, DEFAULT_MAX_REDIRECTS,
        DEFAULT_TIMEOUT_SECS,
    },
};
use reqwest::Url;
use secrecy::SecretString;

use crate::auth::Credentials;
use crate::client::ClouderaManagerClient;
use crate::error::{ClientError, Result};
use crate::poller::WaitOptions;

/// Builder for creating a new [`ClouderaManagerClient`].
///
/// All options have defaults except `base_url` and credentials.
///
/// # Example
///
/// ```rust,ignore
/// use cm_client::ClouderaManagerClient;
/// use secrecy::SecretString;
///
/// let client = ClouderaManagerClient::builder()
///     .base_url("http://cm.example.com:7180".to_string())
///     .credentials("admin", SecretString::new("admin".into()))
///     .timeout(Duration::from_secs(60))
///     .build()?;
/// ```
pub struct ClouderaManagerClientBuilder {
    base_url: Option<String>,
    credentials: Option<Credentials>,
    api_version: String,
    timeout: Duration,
    connect_timeout: Duration,
    polling: PollingConfig,
}

impl Default for ClouderaManagerClientBuilder {
    fn default() -> Self {
        Self {
            base_url: None,
            credentials: None,
            api_version: DEFAULT_API_VERSION.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            connect_timeout: Duration::from_secs(DEFAULT_CONNECT_TIMEOUT_SECS),
            polling: PollingConfig::default(),
        }
    }
}

impl ClouderaManagerClientBuilder {
    /// Create a new builder with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the base URL of the Cloudera Manager server.
    ///
    /// This should include the protocol and port, e.g., `http://cm:7180`.
    /// Trailing slashes will be automatically removed.
    pub fn base_url(mut self, url: String) -> Self {
        self.base_url = Some(url);
        self
    }

    /// Set the basic-auth credentials.
    pub fn credentials(mut self, username: impl Into<String>, password: SecretString) -> Self {
        self.credentials = Some(Credentials::new(username, password));
        self
    }

    /// Set the API version path segment. Default is `v1`.
    pub fn api_version(mut self, version: impl Into<String>) -> Self {
        self.api_version = version.into();
        self
    }

    /// Set the overall request timeout. Default is 30 seconds.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set the TCP connect timeout. Default is 10 seconds.
    pub fn connect_timeout(mut self, timeout: Duration) -> Self {
        self.connect_timeout = timeout;
        self
    }

    /// Set the polling defaults returned by [`ClouderaManagerClient::wait_options`].
    pub fn polling(mut self, polling: PollingConfig) -> Self {
        self.polling = polling;
        self
    }

    /// Create a client builder from configuration.
    ///
    /// This keeps the conversion from config crate types in one place so the
    /// CLI does not repeat it.
    pub fn from_config(mut self, config: &Config) -> Self {
        self.base_url = Some(config.connection.base_url.clone());
        self.credentials = Some(Credentials::new(
            config.auth.username.clone(),
            config.auth.password.clone(),
        ));
        self.api_version = config.connection.api_version.clone();
        self.timeout = config.connection.timeout;
        self.connect_timeout = config.connection.connect_timeout;
        self.polling = config.polling;
        self
    }

    /// Normalize a base URL by removing trailing slashes.
    ///
    /// - `"http://cm:7180/"` -> `"http://cm:7180"`
    /// - `"http://cm:7180//"` -> `"http://cm:7180"`
    fn normalize_base_url(url: String) -> String {
        url.trim_end_matches('/').to_string()
    }

    /// Build the [`ClouderaManagerClient`] with the configured options.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::InvalidUrl`] if `base_url` is missing or not an http(s) URL.
    /// Returns [`ClientError::MissingCredentials`] if no credentials were provided.
    /// Returns [`ClientError::InvalidConfiguration`] for an empty API version
    /// or a zero poll interval.
    /// Returns `ClientError::HttpError` if the HTTP client fails to build.
    pub fn build(self) -> Result<ClouderaManagerClient> {
        let base_url = self
            .base_url
            .ok_or_else(|| ClientError::InvalidUrl("base_url is required".to_string()))?;
        let base_url = Self::normalize_base_url(base_url);

        let parsed = Url::parse(&base_url)
            .map_err(|e| ClientError::InvalidUrl(format!("{base_url}: {e}")))?;
        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(ClientError::InvalidUrl(format!(
                "{base_url}: scheme must be http or https"
            )));
        }

        let credentials = self.credentials.ok_or(ClientError::MissingCredentials)?;

        let api_version = self.api_version.trim().trim_matches('/');
        if api_version.is_empty() {
            return Err(ClientError::InvalidConfiguration(
                "api_version must not be empty".to_string(),
            ));
        }

        if parsed.scheme() == "http"
            && !matches!(parsed.host_str(), Some("localhost" | "127.0.0.1" | "[::1]"))
        {
            tracing::warn!(
                base_url = %base_url,
                "Credentials will be sent over plain HTTP; use https for remote servers"
            );
        }

        let wait_defaults = WaitOptions::try_from(&self.polling)?;

        let http = reqwest::Client::builder()
            .timeout(self.timeout)
            .connect_timeout(self.connect_timeout)
            .redirect(reqwest::redirect::Policy::limited(DEFAULT_MAX_REDIRECTS))
            .build()?;

        let api_root = format!("{base_url}/api/{api_version}");
        tracing::debug!(api_root = %api_root, "Built Cloudera Manager client");

        Ok(ClouderaManagerClient {
            http,
            base_url,
            api_root,
            credentials,
            wait_defaults,
        })
    }
}
