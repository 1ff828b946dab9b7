//! Cluster API CRD Definitions
//!
//! `Machine` and `Cluster` custom resources, the closed status error tags
//! their controllers report failures with, and the machine role set.

pub mod cluster;
pub mod error;
pub mod machine;
pub mod machine_role;
mod schema;
pub mod status_error;

pub use cluster::*;
pub use error::{Error, Result};
pub use machine::*;
pub use machine_role::*;
pub use status_error::*;

/// API group of every resource in this crate
pub const API_GROUP: &str = "cluster.k8s.io";

/// API version of every resource in this crate
pub const API_VERSION: &str = "v1alpha1";
