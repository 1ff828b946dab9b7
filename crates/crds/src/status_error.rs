//! Status error tags
//!
//! Closed classifications a controller records on a `Machine` or `Cluster`
//! status when reconciliation fails. The tag describes the failure; it does
//! not drive retries. The serialized literals are stable identifiers and are
//! persisted verbatim, so a literal is never renamed or reused.

use std::fmt;
use std::str::FromStr;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::Error;

/// Reason a `Machine` failed to reconcile.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, JsonSchema, PartialEq, Eq, Hash)]
pub enum MachineStatusError {
    /// The combination of configuration in the machine spec is not supported
    /// by this cluster. This is not a transient error; the spec must be fixed
    /// before progress can be made.
    ///
    /// Example: the provider config names an instance type that doesn't exist.
    InvalidConfiguration,

    /// The machine spec was updated in a way the controller cannot reconcile.
    /// The spec may be valid on its own, but the real world state cannot be
    /// changed to match it.
    ///
    /// Example: switching the container runtime from docker to rkt.
    UnsupportedChange,

    /// Quota exceeded in a cloud provider, or no physical machines left in
    /// an on-premise environment.
    InsufficientResources,

    /// Creating the node backing this machine failed. May be transient
    /// (a service outage) or terminal without a more specific tag.
    ///
    /// Example: timeout trying to connect to GCE.
    #[serde(rename = "CreateError")]
    Create,

    /// Deleting the node backing this machine failed. Only observable when
    /// the provider's controller holds a finalizer on the object.
    ///
    /// Example: cannot resolve EC2 IP address.
    #[serde(rename = "DeleteError")]
    Delete,
}

impl MachineStatusError {
    /// Every tag, in declaration order
    pub const ALL: [Self; 5] = [
        Self::InvalidConfiguration,
        Self::UnsupportedChange,
        Self::InsufficientResources,
        Self::Create,
        Self::Delete,
    ];

    /// Wire literal for this tag
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::InvalidConfiguration => "InvalidConfiguration",
            Self::UnsupportedChange => "UnsupportedChange",
            Self::InsufficientResources => "InsufficientResources",
            Self::Create => "CreateError",
            Self::Delete => "DeleteError",
        }
    }
}

impl fmt::Display for MachineStatusError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MachineStatusError {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|tag| tag.as_str() == s)
            .ok_or_else(|| Error::UnknownMachineStatusError(s.to_string()))
    }
}

/// Reason a `Cluster` failed to reconcile.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, JsonSchema, PartialEq, Eq, Hash)]
pub enum ClusterStatusError {
    /// The cluster configuration is invalid
    InvalidConfiguration,

    /// The cluster spec was updated in a way that cannot be reconciled
    UnsupportedChange,

    /// Creating the cluster failed
    #[serde(rename = "CreateError")]
    Create,

    /// Updating the cluster failed
    #[serde(rename = "UpdateError")]
    Update,

    /// Deleting the cluster failed
    #[serde(rename = "DeleteError")]
    Delete,
}

impl ClusterStatusError {
    /// Every tag, in declaration order
    pub const ALL: [Self; 5] = [
        Self::InvalidConfiguration,
        Self::UnsupportedChange,
        Self::Create,
        Self::Update,
        Self::Delete,
    ];

    /// Wire literal for this tag
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::InvalidConfiguration => "InvalidConfiguration",
            Self::UnsupportedChange => "UnsupportedChange",
            Self::Create => "CreateError",
            Self::Update => "UpdateError",
            Self::Delete => "DeleteError",
        }
    }
}

impl fmt::Display for ClusterStatusError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ClusterStatusError {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|tag| tag.as_str() == s)
            .ok_or_else(|| Error::UnknownClusterStatusError(s.to_string()))
    }
}
