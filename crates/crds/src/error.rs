//! Error types for parsing and validating cluster API tags.

use thiserror::Error;

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised when a tag string or role set does not fit the closed API.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    /// String is not one of the `MachineStatusError` literals
    #[error("Unknown machine status error: {0:?}")]
    UnknownMachineStatusError(String),

    /// String is not one of the `ClusterStatusError` literals
    #[error("Unknown cluster status error: {0:?}")]
    UnknownClusterStatusError(String),

    /// String is not one of the `MachineRole` literals
    #[error("Unknown machine role: {0:?}")]
    UnknownMachineRole(String),

    /// Role set carries neither Master nor Node
    #[error("Invalid configuration: machine must have at least one of the Master or Node roles")]
    NoRoles,
}
