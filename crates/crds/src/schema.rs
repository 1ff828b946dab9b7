//! Schema helpers shared by the resource definitions.
//!
//! Kubernetes requires structural schemas: every property carries a `type`
//! and `anyOf` branches may not set `type`, `nullable` or `description`.
//! The derived schema for an optional enum violates both, so optional tag
//! fields use the flat nullable string schemas below.

use schemars::{Schema, SchemaGenerator, json_schema};

use crate::status_error::{ClusterStatusError, MachineStatusError};

/// Schema for provider-owned blobs. Their structure belongs to whichever
/// provider controller reads them, so the API server keeps unknown fields
/// instead of validating them.
pub(crate) fn preserve_unknown_fields(_: &mut SchemaGenerator) -> Schema {
    json_schema!({
        "type": "object",
        "nullable": true,
        "x-kubernetes-preserve-unknown-fields": true,
    })
}

fn nullable_string_enum(values: &[&str]) -> Schema {
    json_schema!({
        "type": "string",
        "nullable": true,
        "enum": values,
    })
}

/// Schema for `Option<MachineStatusError>`
pub(crate) fn optional_machine_status_error(_: &mut SchemaGenerator) -> Schema {
    nullable_string_enum(&MachineStatusError::ALL.map(MachineStatusError::as_str))
}

/// Schema for `Option<ClusterStatusError>`
pub(crate) fn optional_cluster_status_error(_: &mut SchemaGenerator) -> Schema {
    nullable_string_enum(&ClusterStatusError::ALL.map(ClusterStatusError::as_str))
}
