//! User management API methods for [`ClouderaManagerClient`].

use crate::client::ClouderaManagerClient;
use crate::endpoints;
use crate::error::Result;
use crate::models::{User, UserList};

impl ClouderaManagerClient {
    /// List all users.
    pub async fn list_users(&self) -> Result<UserList> {
        endpoints::list_users(&self.http, &self.api_root, &self.credentials).await
    }

    pub async fn get_user(&self, name: &str) -> Result<User> {
        endpoints::get_user(&self.http, &self.api_root, &self.credentials, name).await
    }

    /// Create users; each should carry a password.
    pub async fn create_users(&self, users: &[User]) -> Result<UserList> {
        endpoints::create_users(&self.http, &self.api_root, &self.credentials, users).await
    }

    pub async fn delete_user(&self, name: &str) -> Result<User> {
        endpoints::delete_user(&self.http, &self.api_root, &self.credentials, name).await
    }
}
