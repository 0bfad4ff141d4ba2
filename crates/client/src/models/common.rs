//! Shared reference types and response envelopes.

use serde::{Deserialize, Serialize};

/// Reference to a cluster by name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClusterRef {
    pub cluster_name: String,
}

/// Reference to a service within a cluster.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceRef {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cluster_name: Option<String>,
    pub service_name: String,
}

/// Reference to a role within a service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoleRef {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cluster_name: Option<String>,
    pub service_name: String,
    pub role_name: String,
}

/// Reference to a host by its identifier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HostRef {
    pub host_id: String,
}

/// Aggregate health reported for services, roles, and hosts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum HealthSummary {
    Disabled,
    HistoryNotAvailable,
    NotAvailable,
    Good,
    Concerning,
    Bad,
    #[serde(other)]
    Unknown,
}

impl std::fmt::Display for HealthSummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            Self::Disabled => "DISABLED",
            Self::HistoryNotAvailable => "HISTORY_NOT_AVAILABLE",
            Self::NotAvailable => "NOT_AVAILABLE",
            Self::Good => "GOOD",
            Self::Concerning => "CONCERNING",
            Self::Bad => "BAD",
            Self::Unknown => "UNKNOWN",
        };
        f.write_str(label)
    }
}

/// Error payload returned by Cloudera Manager on failed requests.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorMessage {
    #[serde(default)]
    pub message: String,
    #[serde(
        default,
        deserialize_with = "crate::serde_helpers::null_as_default",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub causes: Vec<String>,
}

/// Response of the `/tools/echo` endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EchoMessage {
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_role_ref() {
        let json = r#"{"clusterName": "prod", "serviceName": "hdfs1", "roleName": "hdfs-nn"}"#;
        let role_ref: RoleRef = serde_json::from_str(json).unwrap();
        assert_eq!(role_ref.cluster_name.as_deref(), Some("prod"));
        assert_eq!(role_ref.service_name, "hdfs1");
        assert_eq!(role_ref.role_name, "hdfs-nn");
    }

    #[test]
    fn test_unknown_health_value_falls_back() {
        let health: HealthSummary = serde_json::from_str(r#""SOMETHING_NEW""#).unwrap();
        assert_eq!(health, HealthSummary::Unknown);

        let health: HealthSummary = serde_json::from_str(r#""CONCERNING""#).unwrap();
        assert_eq!(health, HealthSummary::Concerning);
    }

    #[test]
    fn test_error_message_with_null_causes() {
        let json = r#"{"message": "Cluster 'x' not found", "causes": null}"#;
        let message: ErrorMessage = serde_json::from_str(json).unwrap();
        assert_eq!(message.message, "Cluster 'x' not found");
        assert!(message.causes.is_empty());
    }
}
