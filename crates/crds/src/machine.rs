//! Machine CRD
//!
//! A single compute node managed by the cluster. The controller that
//! reconciles it is external; this module only fixes the shape of the
//! resource and the status fields it reports failures through.

use chrono::{DateTime, Utc};
use kube::CustomResource;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::machine_role::{MachineRole, ProvisioningOutcome, classify_roles};
use crate::status_error::MachineStatusError;

/// MachineSpec defines the desired state of a machine
#[derive(CustomResource, Debug, Clone, Serialize, Deserialize, JsonSchema, Default, PartialEq)]
#[kube(
    group = "cluster.k8s.io",
    version = "v1alpha1",
    kind = "Machine",
    plural = "machines",
    namespaced,
    status = "MachineStatus"
)]
#[serde(rename_all = "camelCase")]
pub struct MachineSpec {
    /// Roles this machine fulfils. Master installs the control plane and
    /// Node makes the machine schedulable; at least one of them is required.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub roles: Vec<MachineRole>,

    /// Desired software versions
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub versions: Option<MachineVersionInfo>,

    /// Provider-specific machine configuration
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schemars(schema_with = "crate::schema::preserve_unknown_fields")]
    pub provider_config: Option<Value>,
}

impl MachineSpec {
    /// Classify this spec's roles against the role matrix
    #[must_use]
    pub fn outcome(&self) -> ProvisioningOutcome {
        classify_roles(&self.roles)
    }
}

/// Kubernetes component versions of a machine
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct MachineVersionInfo {
    /// Kubelet version (e.g. "1.30.2")
    pub kubelet: String,

    /// Control plane version; only meaningful for machines with the Master role
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub control_plane: Option<String>,
}

/// Reference to the Kubernetes Node backing a machine
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct NodeReference {
    /// Node name
    pub name: String,

    /// Node UID
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub uid: Option<String>,
}

/// MachineStatus defines the observed state of a machine
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct MachineStatus {
    /// Node backing this machine, once it exists
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub node_ref: Option<NodeReference>,

    /// Last time this status was written
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_updated: Option<DateTime<Utc>>,

    /// Observed software versions
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub versions: Option<MachineVersionInfo>,

    /// Terminal problem reconciling the machine, suitable for machine
    /// interpretation
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schemars(schema_with = "crate::schema::optional_machine_status_error")]
    pub error_reason: Option<MachineStatusError>,

    /// Terminal problem reconciling the machine, suitable for logging and
    /// human consumption
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error_message: Option<String>,

    /// Provider-specific status
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schemars(schema_with = "crate::schema::preserve_unknown_fields")]
    pub provider_status: Option<Value>,
}

impl MachineStatus {
    /// Record a reconciliation failure
    pub fn set_error(&mut self, reason: MachineStatusError, message: impl Into<String>) {
        let message = message.into();
        tracing::debug!(reason = %reason, message = %message, "Recording machine status error");
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
