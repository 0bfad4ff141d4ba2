//! Cluster models.

use serde::{Deserialize, Serialize};

/// CDH major version a cluster runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ClusterVersion {
    #[serde(rename = "CDH3")]
    Cdh3,
    #[serde(rename = "CDH4")]
    Cdh4,
    #[serde(other)]
    Unknown,
}

impl std::fmt::Display for ClusterVersion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Cdh3 => f.write_str("CDH3"),
            Self::Cdh4 => f.write_str("CDH4"),
            Self::Unknown => f.write_str("UNKNOWN"),
        }
    }
}

/// A cluster managed by Cloudera Manager.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cluster {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<ClusterVersion>,
}

impl Cluster {
    pub fn new(name: impl Into<String>, version: ClusterVersion) -> Self {
        Self {
            name: name.into(),
            version: Some(version),
        }
    }
}

/// A list of clusters.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClusterList {
    #[serde(default, deserialize_with = "crate::serde_helpers::null_as_default")]
    pub items: Vec<Cluster>,
}
