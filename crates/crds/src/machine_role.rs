//! Machine roles
//!
//! A role determines what software and configuration is used when a
//! `Machine` is provisioned. A machine may carry several roles; the set of
//! supported roles is expected to grow (e.g. dedicated etcd machines).
//!
//! The two current roles combine as follows:
//!
//! ```text
//!                 +-----------------------+------------------------+
//!                 | Master present        | Master absent          |
//! +---------------+-----------------------+------------------------|
//! | Node present: | Install control plane | Join the cluster as    |
//! |               | and be schedulable    | just a node            |
//! |---------------+-----------------------+------------------------|
//! | Node absent:  | Install control plane | Invalid configuration  |
//! |               | and be unscheduleable |                        |
//! +---------------+-----------------------+------------------------+
//! ```

use std::fmt;
use std::str::FromStr;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Intended function of a `Machine`
#[derive(Debug, Clone, Copy, Serialize, Deserialize, JsonSchema, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum MachineRole {
    /// Runs the control plane
    Master,

    /// Runs workloads
    Node,
}

impl MachineRole {
    /// Every role, in declaration order
    pub const ALL: [Self; 2] = [Self::Master, Self::Node];

    /// Wire literal for this role
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Master => "Master",
            Self::Node => "Node",
        }
    }
}

impl fmt::Display for MachineRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MachineRole {
    type Err = Error;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|role| role.as_str() == s)
            .ok_or_else(|| Error::UnknownMachineRole(s.to_string()))
    }
}

/// What provisioning a machine with a given role set amounts to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProvisioningOutcome {
    /// Master and Node
    ControlPlaneSchedulable,

    /// Master only
    ControlPlaneUnschedulable,

    /// Node only
    NodeOnly,

    /// Neither role
    Invalid,
}

impl ProvisioningOutcome {
    /// Human-readable classification, as written in the role matrix
    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::ControlPlaneSchedulable => "install control plane and be schedulable",
            Self::ControlPlaneUnschedulable => "install control plane and be unschedulable",
            Self::NodeOnly => "join the cluster as just a node",
            Self::Invalid => "invalid configuration",
        }
    }

    /// Whether the role set may be provisioned at all
    #[must_use]
    pub const fn is_valid(self) -> bool {
        !matches!(self, Self::Invalid)
    }

    /// Whether the machine hosts the control plane
    #[must_use]
    pub const fn installs_control_plane(self) -> bool {
        matches!(self, Self::ControlPlaneSchedulable | Self::ControlPlaneUnschedulable)
    }

    /// Whether workloads may be scheduled on the machine
    #[must_use]
    pub const fn is_schedulable(self) -> bool {
        matches!(self, Self::ControlPlaneSchedulable | Self::NodeOnly)
    }
}

impl fmt::Display for ProvisioningOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.description())
    }
}

/// Classify a role list against the role matrix. Duplicate roles are ignored.
#[must_use]
pub fn classify_roles(roles: &[MachineRole]) -> ProvisioningOutcome {
    let master = roles.contains(&MachineRole::Master);
    let node = roles.contains(&MachineRole::Node);

    match (master, node) {
        (true, true) => ProvisioningOutcome::ControlPlaneSchedulable,
        (true, false) => ProvisioningOutcome::ControlPlaneUnschedulable,
        (false, true) => ProvisioningOutcome::NodeOnly,
        (false, false) => ProvisioningOutcome::Invalid,
    }
}

/// Classify a role list, rejecting the invalid combination.
///
/// # Errors
///
/// Returns [`Error::NoRoles`] when neither `Master` nor `Node` is present.
pub fn validate_roles(roles: &[MachineRole]) -> Result<ProvisioningOutcome> {
    match classify_roles(roles) {
        ProvisioningOutcome::Invalid => Err(Error::NoRoles),
        outcome => Ok(outcome),
    }
}
