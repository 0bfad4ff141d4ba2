//! Request execution and response decoding.
//!
//! Responsibilities:
//! - Attach basic-auth credentials and the JSON `Accept` header to outgoing requests.
//! - Send multipart uploads.
//! - Map non-success responses to [`ClientError::ApiError`], decoding the
//!   Cloudera Manager error payload when present.
//! - Decode JSON bodies into typed models.
//!
//! Does NOT handle:
//! - Retries. A failed request is reported to the caller as-is.
//! - URL construction (see [`super::url_encoding`]).
//!
//! Invariants:
//! - Credentials never appear in log output or error messages.

use reqwest::header::ACCEPT;
use reqwest::multipart::Form;
use reqwest::{RequestBuilder, Response};
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::auth::Credentials;
use crate::error::{ClientError, Result};
use crate::models::ErrorMessage;

const JSON: &str = "application/json";

/// Send an authenticated request and fail on non-2xx statuses.
///
/// Request bodies carry their own content type (`.json()`, `.multipart()`).
pub async fn send_request(builder: RequestBuilder, credentials: &Credentials) -> Result<Response> {
    let response = credentials
        .apply(builder)
        .header(ACCEPT, JSON)
        .send()
        .await?;
    let status = response.status();
    debug!(
        status = status.as_u16(),
        url = %response.url(),
        "Received response"
    );

    if status.is_success() {
        return Ok(response);
    }

    let url = response.url().to_string();
    let body = response
        .text()
        .await
        .unwrap_or_else(|_| "Could not read error response body".to_string());
    Err(api_error(status.as_u16(), url, &body))
}

/// Send an authenticated `multipart/form-data` request.
pub async fn send_multipart(
    builder: RequestBuilder,
    form: Form,
    credentials: &Credentials,
) -> Result<Response> {
    send_request(builder.multipart(form), credentials).await
}

/// Build an [`ClientError::ApiError`] from a failed response body.
///
/// Falls back to the raw body, or the status text for empty bodies, when
/// the server did not send an `ErrorMessage` payload.
pub(crate) fn api_error(status: u16, url: String, body: &str) -> ClientError {
    match serde_json::from_str::<ErrorMessage>(body) {
        Ok(decoded) if !decoded.message.is_empty() => ClientError::ApiError {
            status,
            url,
            message: decoded.message,
            causes: decoded.causes,
        },
        _ => {
            let message = if body.trim().is_empty() {
                reqwest::StatusCode::from_u16(status)
                    .ok()
                    .and_then(|s| s.canonical_reason())
                    .unwrap_or("Unknown error")
                    .to_string()
            } else {
                body.to_string()
            };
            ClientError::ApiError {
                status,
                url,
                message,
                causes: Vec::new(),
            }
        }
    }
}

/// Decode a JSON response body into `T`.
pub async fn read_json<T: DeserializeOwned>(response: Response) -> Result<T> {
    let url = response.url().to_string();
    let body = response.text().await?;
    serde_json::from_str(&body)
        .map_err(|e| ClientError::InvalidResponse(format!("Failed to parse response from {url}: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_error_decodes_error_message() {
        let body = r#"{"message": "Cluster 'lab' not found", "causes": ["lookup failed"]}"#;
        match api_error(404, "http://cm/api/v1/clusters/lab".to_string(), body) {
            ClientError::ApiError {
                status,
                message,
                causes,
                ..
            } => {
                assert_eq!(status, 404);
                assert_eq!(message, "Cluster 'lab' not found");
                assert_eq!(causes, vec!["lookup failed"]);
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_api_error_keeps_raw_body() {
        let body = "<html>Bad gateway</html>";
        match api_error(502, "http://cm/api/v1".to_string(), body) {
            ClientError::ApiError {
                message, causes, ..
            } => {
                assert_eq!(message, body);
                assert!(causes.is_empty());
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_api_error_empty_body_uses_status_text() {
        match api_error(401, "http://cm/api/v1".to_string(), "") {
            ClientError::ApiError { message, .. } => assert_eq!(message, "Unauthorized"),
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
