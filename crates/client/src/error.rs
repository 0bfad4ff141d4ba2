//! Error types for the Cloudera Manager client.

use std::time::Duration;
use thiserror::Error;

/// Result type alias for client operations.
pub type Result<T> = std::result::Result<T, ClientError>;

/// Errors that can occur during Cloudera Manager client operations.
#[derive(Error, Debug)]
pub enum ClientError {
    /// HTTP request error (connection refused, DNS failure, request timeout).
    #[error("HTTP error: {0}")]
    HttpError(#[from] reqwest::Error),

    /// Non-success response from Cloudera Manager.
    ///
    /// `message` and `causes` come from the server's error payload when the
    /// body decodes as one, otherwise `message` holds the raw body.
    #[error("API error ({status}) at {url}: {message}")]
    ApiError {
        status: u16,
        url: String,
        message: String,
        causes: Vec<String>,
    },

    /// Response body could not be decoded into the expected model.
    #[error("Invalid response format: {0}")]
    InvalidResponse(String),

    /// Invalid URL.
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// No username/password were supplied to the builder.
    #[error("Credentials are required (username and password)")]
    MissingCredentials,

    /// A caller-supplied setting was rejected.
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// A bounded wait ran out of time.
    #[error("{operation} did not finish within {timeout:?}")]
    OperationTimeout {
        operation: String,
        timeout: Duration,
    },

    /// The operation was cancelled by the caller.
    #[error("Operation cancelled")]
    Cancelled,

    /// Waiting on one command of a batch failed.
    #[error("Waiting for command {command_id} (position {index}) failed: {source}")]
    CommandWaitFailed {
        index: usize,
        command_id: u64,
        #[source]
        source: Box<ClientError>,
    },
}

impl ClientError {
    /// Returns the innermost error, looking through batch wrappers.
    pub fn root_cause(&self) -> &ClientError {
        match self {
            Self::CommandWaitFailed { source, .. } => source.root_cause(),
            other => other,
        }
    }

    /// Check if this error (or the error it wraps) is a cancellation.
    pub fn is_cancelled(&self) -> bool {
        matches!(self.root_cause(), Self::Cancelled)
    }

    /// Check if this error (or the error it wraps) is a wait timeout.
    pub fn is_timeout(&self) -> bool {
        match self.root_cause() {
            Self::OperationTimeout { .. } => true,
            Self::HttpError(e) => e.is_timeout(),
            _ => false,
        }
    }

    /// HTTP status code of the underlying API error, if any.
    pub fn status(&self) -> Option<u16> {
        match self.root_cause() {
            Self::ApiError { status, .. } => Some(*status),
            Self::HttpError(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }

    /// Check if the server reported the resource as missing.
    pub fn is_not_found(&self) -> bool {
        self.status() == Some(404)
    }

    /// Check if this error indicates rejected credentials.
    pub fn is_auth_error(&self) -> bool {
        matches!(self.status(), Some(401) | Some(403))
    }
}
