//! HTTP basic authentication credentials.
//!
//! Cloudera Manager authenticates every request with HTTP basic auth; there
//! is no session handshake, so credentials are attached per request.

use reqwest::RequestBuilder;
use secrecy::{ExposeSecret, SecretString};

/// Username and password sent with every request.
#[derive(Debug, Clone)]
pub struct Credentials {
    username: String,
    password: SecretString,
}

impl Credentials {
    /// Create credentials from a username and password.
    pub fn new(username: impl Into<String>, password: SecretString) -> Self {
        Self {
            username: username.into(),
            password,
        }
    }

    /// The configured username.
    pub fn username(&self) -> &str {
        &self.username
    }

    /// Attach the `Authorization: Basic ...` header to a request.
    pub(crate) fn apply(&self, builder: RequestBuilder) -> RequestBuilder {
        builder.basic_auth(&self.username, Some(self.password.expose_secret()))
    }
}
