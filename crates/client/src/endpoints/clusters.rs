//! Cluster endpoints.

use reqwest::Client;

use crate::auth::Credentials;
use crate::endpoints::{endpoint_url, read_json, send_request};
use crate::error::Result;
use crate::models::{Cluster, ClusterList, Command, CommandList, LifecycleCommand};

/// List all clusters.
pub async fn list_clusters(
    client: &Client,
    api_root: &str,
    credentials: &Credentials,
) -> Result<ClusterList> {
    let url = endpoint_url(api_root, &["clusters"]);
    let response = send_request(client.get(&url), credentials).await?;
    read_json(response).await
}

/// Fetch a single cluster.
pub async fn get_cluster(
    client: &Client,
    api_root: &str,
    credentials: &Credentials,
    cluster: &str,
) -> Result<Cluster> {
    let url = endpoint_url(api_root, &["clusters", cluster]);
    let response = send_request(client.get(&url), credentials).await?;
    read_json(response).await
}

/// Create clusters, returning the clusters the server created.
pub async fn create_clusters(
    client: &Client,
    api_root: &str,
    credentials: &Credentials,
    clusters: &[Cluster],
) -> Result<ClusterList> {
    let url = endpoint_url(api_root, &["clusters"]);
    let body = ClusterList {
        items: clusters.to_vec(),
    };
    let response = send_request(client.post(&url).json(&body), credentials).await?;
    read_json(response).await
}

/// Delete a cluster, returning its last state.
pub async fn delete_cluster(
    client: &Client,
    api_root: &str,
    credentials: &Credentials,
    cluster: &str,
) -> Result<Cluster> {
    let url = endpoint_url(api_root, &["clusters", cluster]);
    let response = send_request(client.delete(&url), credentials).await?;
    read_json(response).await
}

/// List the commands currently active on a cluster.
pub async fn list_cluster_commands(
    client: &Client,
    api_root: &str,
    credentials: &Credentials,
    cluster: &str,
) -> Result<CommandList> {
    let url = endpoint_url(api_root, &["clusters", cluster, "commands"]);
    let response = send_request(client.get(&url), credentials).await?;
    read_json(response).await
}

/// Start, stop, or restart every service of a cluster.
pub async fn cluster_command(
    client: &Client,
    api_root: &str,
    credentials: &Credentials,
    cluster: &str,
    command: LifecycleCommand,
) -> Result<Command> {
    let url = endpoint_url(api_root, &["clusters", cluster, "commands", command.as_path()]);
    let response = send_request(client.post(&url), credentials).await?;
    read_json(response).await
}
