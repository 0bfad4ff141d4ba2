//! Diagnostic tool methods for [`ClouderaManagerClient`].

use crate::client::ClouderaManagerClient;
use crate::endpoints;
use crate::error::Result;
use crate::models::{EchoMessage, ErrorMessage};

impl ClouderaManagerClient {
    /// Round-trip a message through the server. Useful as a connectivity check.
    pub async fn echo(&self, message: &str) -> Result<EchoMessage> {
        endpoints::echo(&self.http, &self.api_root, &self.credentials, message).await
    }

    /// Make the server answer with an error carrying `message`.
    pub async fn echo_error(&self, message: &str) -> Result<ErrorMessage> {
        endpoints::echo_error(&self.http, &self.api_root, &self.credentials, message).await
    }
}
