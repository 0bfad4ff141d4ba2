//! Service and role models.

use serde::{Deserialize, Serialize};

use super::common::{ClusterRef, HealthSummary, HostRef, ServiceRef};

/// Run state of a service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ServiceState {
    HistoryNotAvailable,
    Starting,
    Started,
    Stopping,
    Stopped,
    #[serde(other)]
    Unknown,
}

/// Run state of a role.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RoleState {
    HistoryNotAvailable,
    Starting,
    Started,
    Busy,
    Stopping,
    Stopped,
    #[serde(other)]
    Unknown,
}

display_as_serde_name!(ServiceState);
display_as_serde_name!(RoleState);

/// A service (HDFS, MAPREDUCE, ...) registered in a cluster.
///
/// `service_type` is kept as the raw server string so new service types
/// decode without a client release.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Service {
    pub name: String,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub service_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cluster_ref: Option<ClusterRef>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub service_state: Option<ServiceState>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub health_summary: Option<HealthSummary>,
    #[serde(default)]
    pub config_stale: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub service_url: Option<String>,
}

/// A list of services.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceList {
    #[serde(default, deserialize_with = "crate::serde_helpers::null_as_default")]
    pub items: Vec<Service>,
}

/// Role to create alongside a new service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoleSetupInfo {
    pub name: String,
    #[serde(rename = "type")]
    pub role_type: String,
    pub host_ref: HostRef,
}

/// Payload for registering a service.
///
/// Holds the name/type pair plus the optional role layout; it does not
/// carry the read-only state fields a [`Service`] response has.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceSetupInfo {
    pub name: String,
    #[serde(rename = "type")]
    pub service_type: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub roles: Vec<RoleSetupInfo>,
}

impl ServiceSetupInfo {
    pub fn new(name: impl Into<String>, service_type: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            service_type: service_type.into(),
            roles: Vec::new(),
        }
    }

    /// Add a role to create on the given host.
    pub fn with_role(
        mut self,
        name: impl Into<String>,
        role_type: impl Into<String>,
        host_id: impl Into<String>,
    ) -> Self {
        self.roles.push(RoleSetupInfo {
            name: name.into(),
            role_type: role_type.into(),
            host_ref: HostRef {
                host_id: host_id.into(),
            },
        });
        self
    }
}

/// Body of a service registration request.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceSetupList {
    pub items: Vec<ServiceSetupInfo>,
}

/// A role instance of a service on a host.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Role {
    pub name: String,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub role_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub host_ref: Option<HostRef>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub service_ref: Option<ServiceRef>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role_state: Option<RoleState>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub health_summary: Option<HealthSummary>,
    #[serde(default)]
    pub config_stale: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role_url: Option<String>,
}

/// A list of roles.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoleList {
    #[serde(default, deserialize_with = "crate::serde_helpers::null_as_default")]
    pub items: Vec<Role>,
}

/// Role names targeted by a bulk role command.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoleNameList {
    pub items: Vec<String>,
}

impl<S: Into<String>> FromIterator<S> for RoleNameList {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self {
            items: iter.into_iter().map(Into::into).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_service() {
        let json = r#"{
            "name": "hdfs1",
            "type": "HDFS",
            "clusterRef": {"clusterName": "prod"},
            "serviceState": "STARTED",
            "healthSummary": "GOOD",
            "configStale": false,
            "healthChecks": [{"name": "HDFS_HA_NAMENODE_HEALTH", "summary": "GOOD"}],
            "serviceUrl": "http://cm:7180/cmf/serviceRedirect/hdfs1"
        }"#;
        let service: Service = serde_json::from_str(json).unwrap();
        assert_eq!(service.service_type.as_deref(), Some("HDFS"));
        assert_eq!(service.service_state, Some(ServiceState::Started));
        assert_eq!(service.health_summary, Some(HealthSummary::Good));
        assert_eq!(service.service_state.unwrap().to_string(), "STARTED");
    }

    #[test]
    fn test_unknown_states_fall_back() {
        let state: ServiceState = serde_json::from_str(r#""UNKNOWN""#).unwrap();
        assert_eq!(state, ServiceState::Unknown);
        let state: RoleState = serde_json::from_str(r#""DECOMMISSIONING""#).unwrap();
        assert_eq!(state, RoleState::Unknown);
        assert_eq!(RoleState::Busy.to_string(), "BUSY");
    }

    #[test]
    fn test_service_setup_serializes_roles() {
        let setup = ServiceSetupInfo::new("hdfs1", "HDFS").with_role("hdfs-nn", "NAMENODE", "host-1");
        let json = serde_json::to_value(ServiceSetupList { items: vec![setup] }).unwrap();
        assert_eq!(json["items"][0]["type"], "HDFS");
        assert_eq!(json["items"][0]["roles"][0]["hostRef"]["hostId"], "host-1");
    }

    #[test]
    fn test_role_name_list_from_iter() {
        let names: RoleNameList = ["hdfs-nn", "hdfs-dn1"].into_iter().collect();
        assert_eq!(
            serde_json::to_string(&names).unwrap(),
            r#"{"items":["hdfs-nn","hdfs-dn1"]}"#
        );
    }
}
