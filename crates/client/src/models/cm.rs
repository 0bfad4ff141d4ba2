//! Cloudera Manager server models: version info, configuration and license.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Build information of the Cloudera Manager server.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CmVersionInfo {
    pub version: String,
    #[serde(default)]
    pub snapshot: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub build_user: Option<String>,
    /// Build time as reported by the server (epoch milliseconds on older releases).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub build_timestamp: Option<serde_json::Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub git_hash: Option<String>,
}

/// Result of server-side validation of a configuration value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ValidationState {
    Ok,
    Warning,
    Error,
    #[serde(other)]
    Unknown,
}

/// A single configuration parameter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiConfig {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub required: bool,
    #[serde(rename = "default", default, skip_serializing_if = "Option::is_none")]
    pub default_value: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub validation_state: Option<ValidationState>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub validation_message: Option<String>,
}

impl ApiConfig {
    /// A parameter update that sets `name` to `value`.
    pub fn set(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self::update(name, Some(value.into()))
    }

    /// A parameter update that erases `name`, restoring its default.
    pub fn unset(name: impl Into<String>) -> Self {
        Self::update(name, None)
    }

    fn update(name: impl Into<String>, value: Option<String>) -> Self {
        Self {
            name: name.into(),
            value,
            required: false,
            default_value: None,
            display_name: None,
            description: None,
            validation_state: None,
            validation_message: None,
        }
    }
}

/// A list of configuration parameters.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfigList {
    #[serde(default, deserialize_with = "crate::serde_helpers::null_as_default")]
    pub items: Vec<ApiConfig>,
}

impl ConfigList {
    /// Look up a parameter's effective value (explicit value, else default).
    pub fn value_of(&self, name: &str) -> Option<&str> {
        self.items
            .iter()
            .find(|c| c.name == name)
            .and_then(|c| c.value.as_deref().or(c.default_value.as_deref()))
    }
}

/// The installed Cloudera Manager license.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct License {
    /// Organization the license was issued to.
    pub owner: String,
    pub uuid: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expiration: Option<DateTime<Utc>>,
}
