//! Main Cloudera Manager REST API client and API methods.
//!
//! This module provides the primary [`ClouderaManagerClient`]. Methods are
//! grouped by resource in submodules, each delegating the HTTP work to
//! [`crate::endpoints`].
//!
//! # Submodules
//! - [`builder`]: Client construction and configuration
//! - `commands`: Command status, abort, and waiting
//! - `clusters`: Cluster listing and lifecycle
//! - `services`: Services, roles, and bulk role commands
//! - `events`: Event queries
//! - `hosts`, `users`, `tools`, `cm`: Remaining resources
//!
//! # What this module does NOT handle:
//! - Direct HTTP request implementation (delegated to [`crate::endpoints`])
//! - The polling loop itself (in [`crate::poller`])
//!
//! # Invariants
//! - `api_root` is always `{base_url}/api/{version}` with no trailing slash.
//! - Every request carries the configured basic-auth credentials.

pub mod builder;

mod clusters;
mod cm;
mod commands;
mod events;
mod hosts;
mod services;
mod tools;
mod users;

use crate::auth::Credentials;
use crate::poller::WaitOptions;

/// Cloudera Manager REST API client.
///
/// # Creating a Client
///
/// Use [`ClouderaManagerClient::builder()`]:
///
/// ```rust,ignore
/// use cm_client::ClouderaManagerClient;
/// use secrecy::SecretString;
///
/// let client = ClouderaManagerClient::builder()
///     .base_url("http://cm.example.com:7180".to_string())
///     .credentials("admin", SecretString::new("admin".into()))
///     .build()?;
///
/// let command = client.start_cluster("prod").await?;
/// let finished = client.wait_for_command(&command, &client.wait_options()).await?;
/// ```
#[derive(Debug, Clone)]
pub struct ClouderaManagerClient {
    pub(crate) http: reqwest::Client,
    pub(crate) base_url: String,
    pub(crate) api_root: String,
    pub(crate) credentials: Credentials,
    pub(crate) wait_defaults: WaitOptions,
}

impl ClouderaManagerClient {
    /// Create a new client builder.
    pub fn builder() -> builder::ClouderaManagerClientBuilder {
        builder::ClouderaManagerClientBuilder::new()
    }

    /// Get the base URL (scheme, host, and port).
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Get the versioned API root, e.g. `http://cm:7180/api/v1`.
    pub fn api_root(&self) -> &str {
        &self.api_root
    }

    /// The username requests are sent as.
    pub fn username(&self) -> &str {
        self.credentials.username()
    }

    /// Wait options derived from the client's polling configuration.
    pub fn wait_options(&self) -> WaitOptions {
        self.wait_defaults.clone()
    }
}
