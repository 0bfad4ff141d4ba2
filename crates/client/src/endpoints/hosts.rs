//! Host endpoints.

use reqwest::Client;

use crate::auth::Credentials;
use crate::endpoints::{endpoint_url, read_json, send_request};
use crate::error::Result;
use crate::models::{Host, HostList};

/// List all hosts.
pub async fn list_hosts(
    client: &Client,
    api_root: &str,
    credentials: &Credentials,
) -> Result<HostList> {
    let url = endpoint_url(api_root, &["hosts"]);
    let response = send_request(client.get(&url), credentials).await?;
    read_json(response).await
}

/// Fetch a host by ID.
pub async fn get_host(
    client: &Client,
    api_root: &str,
    credentials: &Credentials,
    host_id: &str,
) -> Result<Host> {
    let url = endpoint_url(api_root, &["hosts", host_id]);
    let response = send_request(client.get(&url), credentials).await?;
    read_json(response).await
}

/// Remove a host, returning its last state.
pub async fn delete_host(
    client: &Client,
    api_root: &str,
    credentials: &Credentials,
    host_id: &str,
) -> Result<Host> {
    let url = endpoint_url(api_root, &["hosts", host_id]);
    let response = send_request(client.delete(&url), credentials).await?;
    read_json(response).await
}
