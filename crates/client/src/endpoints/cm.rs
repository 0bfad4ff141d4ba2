//! Cloudera Manager server endpoints (`/cm`).

use reqwest::Client;
use reqwest::multipart::{Form, Part};

use crate::auth::Credentials;
use crate::endpoints::{endpoint_url, read_json, send_multipart, send_request};
use crate::error::Result;
use crate::models::{ApiConfig, CmVersionInfo, Command, CommandList, ConfigList, License};

/// Fetch the server's version information.
pub async fn get_version(
    client: &Client,
    api_root: &str,
    credentials: &Credentials,
) -> Result<CmVersionInfo> {
    let url = endpoint_url(api_root, &["cm", "version"]);
    let response = send_request(client.get(&url), credentials).await?;
    read_json(response).await
}

/// Fetch the server-wide configuration.
pub async fn get_config(
    client: &Client,
    api_root: &str,
    credentials: &Credentials,
) -> Result<ConfigList> {
    let url = endpoint_url(api_root, &["cm", "config"]);
    let response = send_request(client.get(&url), credentials).await?;
    read_json(response).await
}

/// Update server-wide settings.
///
/// Listed parameters with a value replace the current setting; listed
/// parameters without one are erased. Unlisted parameters keep their values.
pub async fn update_config(
    client: &Client,
    api_root: &str,
    credentials: &Credentials,
    updates: &[ApiConfig],
) -> Result<ConfigList> {
    let url = endpoint_url(api_root, &["cm", "config"]);
    let body = ConfigList {
        items: updates.to_vec(),
    };
    let response = send_request(client.put(&url).json(&body), credentials).await?;
    read_json(response).await
}

/// Fetch the installed license.
pub async fn get_license(
    client: &Client,
    api_root: &str,
    credentials: &Credentials,
) -> Result<License> {
    let url = endpoint_url(api_root, &["cm", "license"]);
    let response = send_request(client.get(&url), credentials).await?;
    read_json(response).await
}

/// Upload a new license file.
///
/// The server only applies it after Cloudera Manager is restarted.
pub async fn update_license(
    client: &Client,
    api_root: &str,
    credentials: &Credentials,
    license: Vec<u8>,
) -> Result<License> {
    let url = endpoint_url(api_root, &["cm", "license"]);
    let form = Form::new().part("license", Part::bytes(license).file_name("license.txt"));
    let response = send_multipart(client.post(&url), form, credentials).await?;
    read_json(response).await
}

/// List the global commands currently active on the server.
pub async fn list_commands(
    client: &Client,
    api_root: &str,
    credentials: &Credentials,
) -> Result<CommandList> {
    let url = endpoint_url(api_root, &["cm", "commands"]);
    let response = send_request(client.get(&url), credentials).await?;
    read_json(response).await
}

/// Start a host inspection across all managed hosts.
pub async fn inspect_hosts(
    client: &Client,
    api_root: &str,
    credentials: &Credentials,
) -> Result<Command> {
    let url = endpoint_url(api_root, &["cm", "commands", "inspectHosts"]);
    let response = send_request(client.post(&url), credentials).await?;
    read_json(response).await
}
