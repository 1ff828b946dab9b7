//! Cluster CRD
//!
//! Top-level resource describing a whole cluster: its network layout and
//! where its API server can be reached.

use chrono::{DateTime, Utc};
use kube::CustomResource;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::status_error::ClusterStatusError;

/// ClusterSpec defines the desired state of a cluster
#[derive(CustomResource, Debug, Clone, Serialize, Deserialize, JsonSchema, Default, PartialEq)]
#[kube(
    group = "cluster.k8s.io",
    version = "v1alpha1",
    kind = "Cluster",
    plural = "clusters",
    namespaced,
    status = "ClusterStatus"
)]
#[serde(rename_all = "camelCase")]
pub struct ClusterSpec {
    /// Cluster network configuration
    pub cluster_network: ClusterNetworkingConfig,

    /// Provider-specific cluster configuration
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schemars(schema_with = "crate::schema::preserve_unknown_fields")]
    pub provider_config: Option<Value>,
}

/// Network ranges from which service VIPs and pod IPs are allocated
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ClusterNetworkingConfig {
    /// Service VIP ranges
    pub services: NetworkRanges,

    /// Pod IP ranges
    pub pods: NetworkRanges,

    /// Domain name for services (e.g. "cluster.local")
    pub service_domain: String,
}

/// A set of CIDR blocks
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct NetworkRanges {
    /// CIDR blocks (e.g. "10.96.0.0/12")
    #[serde(default)]
    pub cidr_blocks: Vec<String>,
}

/// Address at which the cluster API server is reachable
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ApiEndpoint {
    /// Hostname or IP address
    pub host: String,

    /// TCP port
    pub port: u16,
}

/// ClusterStatus defines the observed state of a cluster
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ClusterStatus {
    /// Endpoints of the cluster API server
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub api_endpoints: Vec<ApiEndpoint>,

    /// Last time this status was written
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_updated: Option<DateTime<Utc>>,

    /// Terminal problem reconciling the cluster, suitable for machine
    /// interpretation
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schemars(schema_with = "crate::schema::optional_cluster_status_error")]
    pub error_reason: Option<ClusterStatusError>,

    /// Terminal problem reconciling the cluster, suitable for logging and
    /// human consumption
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error_message: Option<String>,

    /// Provider-specific status
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schemars(schema_with = "crate::schema::preserve_unknown_fields")]
    pub provider_status: Option<Value>,
}

impl ClusterStatus {
    /// Record a reconciliation failure
    pub fn set_error(&mut self, reason: ClusterStatusError, message: impl Into<String>) {
        let message = message.into();
        tracing::debug!(reason = %reason, message = %message, "Recording cluster status error");
        self.error_reason = Some(reason);
        self.error_message = Some(message);
        self.last_updated = Some(Utc::now());
    }

    /// Clear a previously recorded failure
    pub fn clear_error(&mut self) {
        if self.has_error() {
            self.error_reason = None;
            self.error_message = None;
            self.last_updated = Some(Utc::now());
        }
    }

    /// Whether a failure is recorded
    #[must_use]
    pub fn has_error(&self) -> bool {
        self.error_reason.is_some() || self.error_message.is_some()
    }
}
