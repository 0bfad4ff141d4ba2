//! Host API methods for [`ClouderaManagerClient`].

use crate::client::ClouderaManagerClient;
use crate::endpoints;
use crate::error::Result;
use crate::models::{Host, HostList};

impl ClouderaManagerClient {
    /// List all hosts.
    pub async fn list_hosts(&self) -> Result<HostList> {
        endpoints::list_hosts(&self.http, &self.api_root, &self.credentials).await
    }

    /// Fetch a host by ID.
    pub async fn get_host(&self, host_id: &str) -> Result<Host> {
        endpoints::get_host(&self.http, &self.api_root, &self.credentials, host_id).await
    }

    /// Remove a host from Cloudera Manager.
    pub async fn delete_host(&self, host_id: &str) -> Result<Host> {
        endpoints::delete_host(&self.http, &self.api_root, &self.credentials, host_id).await
    }
}
