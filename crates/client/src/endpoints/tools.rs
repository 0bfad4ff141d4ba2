//! Diagnostic echo endpoints.

use reqwest::Client;

use crate::auth::Credentials;
use crate::endpoints::{endpoint_url, read_json, send_request};
use crate::error::Result;
use crate::models::{EchoMessage, ErrorMessage};

/// Echo a message back from the server.
pub async fn echo(
    client: &Client,
    api_root: &str,
    credentials: &Credentials,
    message: &str,
) -> Result<EchoMessage> {
    let url = endpoint_url(api_root, &["tools", "echo"]);
    let builder = client.get(&url).query(&[("message", message)]);
    let response = send_request(builder, credentials).await?;
    read_json(response).await
}

/// Ask the server to fail with the given message.
///
/// The server answers with an error status, which surfaces as
/// `ClientError::ApiError` carrying `message`.
pub async fn echo_error(
    client: &Client,
    api_root: &str,
    credentials: &Credentials,
    message: &str,
) -> Result<ErrorMessage> {
    let url = endpoint_url(api_root, &["tools", "echoError"]);
    let builder = client.get(&url).query(&[("message", message)]);
    let response = send_request(builder, credentials).await?;
    read_json(response).await
}
