//! Host models.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::common::{HealthSummary, RoleRef};

/// A host known to Cloudera Manager.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Host {
    pub host_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ip_address: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hostname: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rack_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_heartbeat: Option<DateTime<Utc>>,
    #[serde(
        default,
        deserialize_with = "crate::serde_helpers::null_as_default",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub role_refs: Vec<RoleRef>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub health_summary: Option<HealthSummary>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub host_url: Option<String>,
}

/// A list of hosts.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HostList {
    #[serde(default, deserialize_with = "crate::serde_helpers::null_as_default")]
    pub items: Vec<Host>,
}
