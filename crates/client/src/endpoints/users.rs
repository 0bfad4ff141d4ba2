//! User management endpoints.

use reqwest::Client;

use crate::auth::Credentials;
use crate::endpoints::{endpoint_url, read_json, send_request};
use crate::error::Result;
use crate::models::{User, UserList};

/// List all users.
pub async fn list_users(
    client: &Client,
    api_root: &str,
    credentials: &Credentials,
) -> Result<UserList> {
    let url = endpoint_url(api_root, &["users"]);
    let response = send_request(client.get(&url), credentials).await?;
    read_json(response).await
}

/// Fetch a single user.
pub async fn get_user(
    client: &Client,
    api_root: &str,
    credentials: &Credentials,
    name: &str,
) -> Result<User> {
    let url = endpoint_url(api_root, &["users", name]);
    let response = send_request(client.get(&url), credentials).await?;
    read_json(response).await
}

/// Create users. Passwords are sent in the request body.
pub async fn create_users(
    client: &Client,
    api_root: &str,
    credentials: &Credentials,
    users: &[User],
) -> Result<UserList> {
    let url = endpoint_url(api_root, &["users"]);
    let body = UserList {
        items: users.to_vec(),
    };
    let response = send_request(client.post(&url).json(&body), credentials).await?;
    read_json(response).await
}

/// Delete a user, returning the removed account.
pub async fn delete_user(
    client: &Client,
    api_root: &str,
    credentials: &Credentials,
    name: &str,
) -> Result<User> {
    let url = endpoint_url(api_root, &["users", name]);
    let response = send_request(client.delete(&url), credentials).await?;
    read_json(response).await
}
