//! Cloudera Manager server methods for [`ClouderaManagerClient`].

use crate::client::ClouderaManagerClient;
use crate::endpoints;
use crate::error::Result;
use crate::models::{ApiConfig, CmVersionInfo, Command, CommandList, ConfigList, License};

impl ClouderaManagerClient {
    /// Fetch server version information.
    pub async fn version(&self) -> Result<CmVersionInfo> {
        endpoints::get_version(&self.http, &self.api_root, &self.credentials).await
    }

    /// Fetch the server-wide configuration.
    pub async fn cm_config(&self) -> Result<ConfigList> {
        endpoints::get_config(&self.http, &self.api_root, &self.credentials).await
    }

    /// Update server-wide settings; see [`ApiConfig::set`] and [`ApiConfig::unset`].
    pub async fn update_cm_config(&self, updates: &[ApiConfig]) -> Result<ConfigList> {
        endpoints::update_config(&self.http, &self.api_root, &self.credentials, updates).await
    }

    /// Fetch the installed license.
    pub async fn license(&self) -> Result<License> {
        endpoints::get_license(&self.http, &self.api_root, &self.credentials).await
    }

    /// Upload a new license file. Takes effect after a server restart.
    pub async fn update_license(&self, license: Vec<u8>) -> Result<License> {
        endpoints::update_license(&self.http, &self.api_root, &self.credentials, license).await
    }

    /// List global commands currently active on the server.
    pub async fn cm_commands(&self) -> Result<CommandList> {
        endpoints::list_commands(&self.http, &self.api_root, &self.credentials).await
    }

    /// Start a host inspection.
    pub async fn inspect_hosts(&self) -> Result<Command> {
        endpoints::inspect_hosts(&self.http, &self.api_root, &self.credentials).await
    }
}
