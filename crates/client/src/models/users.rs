//! User models for Cloudera Manager accounts.

use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize, Serializer};

/// A Cloudera Manager user account.
///
/// The server never returns passwords; `password` is only populated when
/// creating users.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub name: String,
    #[serde(
        default,
        skip_deserializing,
        skip_serializing_if = "Option::is_none",
        serialize_with = "serialize_password"
    )]
    pub password: Option<SecretString>,
    #[serde(default, deserialize_with = "crate::serde_helpers::null_as_default")]
    pub roles: Vec<String>,
}

impl User {
    /// A new account to create with the given password and roles.
    pub fn new(name: impl Into<String>, password: SecretString, roles: Vec<String>) -> Self {
        Self {
            name: name.into(),
            password: Some(password),
            roles,
        }
    }
}

fn serialize_password<S: Serializer>(
    password: &Option<SecretString>,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    match password {
        Some(secret) => serializer.serialize_str(secret.expose_secret()),
        None => serializer.serialize_none(),
    }
}

/// A list of users.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UserList {
    #[serde(default, deserialize_with = "crate::serde_helpers::null_as_default")]
    pub items: Vec<User>,
}
