//! Cluster API methods for [`ClouderaManagerClient`].

use crate::client::ClouderaManagerClient;
use crate::endpoints;
use crate::error::Result;
use crate::models::{Cluster, ClusterList, Command, CommandList, LifecycleCommand};

impl ClouderaManagerClient {
    /// List all clusters.
    pub async fn list_clusters(&self) -> Result<ClusterList> {
        endpoints::list_clusters(&self.http, &self.api_root, &self.credentials).await
    }

    /// Fetch a single cluster by name.
    pub async fn get_cluster(&self, cluster: &str) -> Result<Cluster> {
        endpoints::get_cluster(&self.http, &self.api_root, &self.credentials, cluster).await
    }

    /// Create clusters.
    pub async fn create_clusters(&self, clusters: &[Cluster]) -> Result<ClusterList> {
        endpoints::create_clusters(&self.http, &self.api_root, &self.credentials, clusters).await
    }

    /// Delete a cluster.
    pub async fn delete_cluster(&self, cluster: &str) -> Result<Cluster> {
        endpoints::delete_cluster(&self.http, &self.api_root, &self.credentials, cluster).await
    }

    /// List commands currently active on a cluster.
    pub async fn cluster_commands(&self, cluster: &str) -> Result<CommandList> {
        endpoints::list_cluster_commands(&self.http, &self.api_root, &self.credentials, cluster)
            .await
    }

    /// Issue a lifecycle command against every service of a cluster.
    pub async fn cluster_command(
        &self,
        cluster: &str,
        command: LifecycleCommand,
    ) -> Result<Command> {
        endpoints::cluster_command(
            &self.http,
            &self.api_root,
            &self.credentials,
            cluster,
            command,
        )
        .await
    }

    pub async fn start_cluster(&self, cluster: &str) -> Result<Command> {
        self.cluster_command(cluster, LifecycleCommand::Start).await
    }

    pub async fn stop_cluster(&self, cluster: &str) -> Result<Command> {
        self.cluster_command(cluster, LifecycleCommand::Stop).await
    }

    pub async fn restart_cluster(&self, cluster: &str) -> Result<Command> {
        self.cluster_command(cluster, LifecycleCommand::Restart).await
    }
}
