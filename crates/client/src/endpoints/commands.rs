//! Command status endpoints.

use reqwest::Client;

use crate::auth::Credentials;
use crate::endpoints::{endpoint_url, read_json, send_request};
use crate::error::Result;
use crate::models::Command;

/// Fetch the current snapshot of a command.
pub async fn get_command(
    client: &Client,
    api_root: &str,
    credentials: &Credentials,
    command_id: u64,
) -> Result<Command> {
    let url = endpoint_url(api_root, &["commands", &command_id.to_string()]);
    let response = send_request(client.get(&url), credentials).await?;
    read_json(response).await
}

/// Ask the server to abort a running command.
///
/// Returns the command snapshot after the abort request; the command may
/// still be active for a short while afterwards.
pub async fn abort_command(
    client: &Client,
    api_root: &str,
    credentials: &Credentials,
    command_id: u64,
) -> Result<Command> {
    let url = endpoint_url(api_root, &["commands", &command_id.to_string(), "abort"]);
    let response = send_request(client.post(&url), credentials).await?;
    read_json(response).await
}
