//! Wire format tests
//!
//! The tag literals are persisted by external systems, so these tests pin
//! them through both JSON and YAML and through the generated CRD schemas.

use cluster_crds::*;
use kube::{CustomResourceExt, Resource};

#[test]
fn test_machine_status_error_yaml_round_trip() {
    for tag in MachineStatusError::ALL {
        let yaml = serde_yaml::to_string(&tag).unwrap();
        assert_eq!(yaml.trim(), tag.as_str());
        let parsed: MachineStatusError = serde_yaml::from_str(&yaml).unwrap();
        assert_eq!(parsed, tag);
    }
}

#[test]
fn test_cluster_status_error_yaml_round_trip() {
    for tag in ClusterStatusError::ALL {
        let yaml = serde_yaml::to_string(&tag).unwrap();
        assert_eq!(yaml.trim(), tag.as_str());
        let parsed: ClusterStatusError = serde_yaml::from_str(&yaml).unwrap();
        assert_eq!(parsed, tag);
    }
}

#[test]
fn test_machine_manifest_from_yaml() {
    let manifest = r#"
apiVersion: cluster.k8s.io/v1alpha1
kind: Machine
metadata:
  name: worker-0
  namespace: default
spec:
  roles:
    - Node
  versions:
    kubelet: 1.30.2
status:
  nodeRef:
    name: worker-0
  errorReason: CreateError
  errorMessage: timeout trying to connect to GCE
"#;

    let machine: Machine = serde_yaml::from_str(manifest).unwrap();
    assert_eq!(machine.metadata.name.as_deref(), Some("worker-0"));
    assert_eq!(machine.spec.outcome(), ProvisioningOutcome::NodeOnly);

    let status = machine.status.as_ref().unwrap();
    assert!(status.has_error());
    assert_eq!(status.error_reason, Some(MachineStatusError::Create));

    // Re-serializing keeps the literal as-is
    let json = serde_json::to_value(&machine).unwrap();
    assert_eq!(json["status"]["errorReason"], "CreateError");
    assert_eq!(json["spec"]["roles"], serde_json::json!(["Node"]));
}

#[test]
fn test_new_machine_has_no_status() {
    let machine = Machine::new(
        "cp-0",
        MachineSpec {
            roles: vec![MachineRole::Master, MachineRole::Node],
            ..Default::default()
        },
    );
    assert!(machine.status.is_none());
    assert_eq!(
        machine.spec.outcome().description(),
        "install control plane and be schedulable"
    );
    assert_eq!(validate_roles(&machine.spec.roles), Ok(ProvisioningOutcome::ControlPlaneSchedulable));
}

#[test]
fn test_resource_identity() {
    assert_eq!(Machine::group(&()), API_GROUP);
    assert_eq!(Machine::version(&()), API_VERSION);
    assert_eq!(Machine::kind(&()), "Machine");
    assert_eq!(Cluster::group(&()), API_GROUP);
    assert_eq!(Cluster::kind(&()), "Cluster");
    assert_eq!(Machine::api_version(&()), "cluster.k8s.io/v1alpha1");
}

#[test]
fn test_generated_crds() {
    let machine_crd = Machine::crd();
    assert_eq!(machine_crd.metadata.name.as_deref(), Some("machines.cluster.k8s.io"));
    assert_eq!(machine_crd.spec.group, API_GROUP);
    assert_eq!(machine_crd.spec.names.kind, "Machine");
    assert_eq!(machine_crd.spec.scope, "Namespaced");

    let cluster_crd = Cluster::crd();
    assert_eq!(cluster_crd.metadata.name.as_deref(), Some("clusters.cluster.k8s.io"));
    assert_eq!(cluster_crd.spec.names.kind, "Cluster");
}

#[test]
fn test_crd_schemas_carry_tag_literals() {
    let machine_yaml = serde_yaml::to_string(&Machine::crd()).unwrap();
    for tag in MachineStatusError::ALL {
        assert!(machine_yaml.contains(tag.as_str()), "Machine CRD missing {tag}");
    }
    for role in MachineRole::ALL {
        assert!(machine_yaml.contains(role.as_str()), "Machine CRD missing role {role}");
    }

    let cluster_yaml = serde_yaml::to_string(&Cluster::crd()).unwrap();
    for tag in ClusterStatusError::ALL {
        assert!(cluster_yaml.contains(tag.as_str()), "Cluster CRD missing {tag}");
    }
}

#[test]
fn test_error_messages() {
    assert_eq!(
        "Bogus".parse::<MachineRole>().unwrap_err().to_string(),
        "Unknown machine role: \"Bogus\""
    );
    assert!(Error::NoRoles.to_string().starts_with("Invalid configuration"));
}

fn status_property(crd_json: &serde_json::Value, field: &str) -> serde_json::Value {
    crd_json["spec"]["versions"][0]["schema"]["openAPIV3Schema"]["properties"]["status"]["properties"][field].clone()
}

fn assert_flat_nullable_enum(schema: &serde_json::Value, expected: &[&str]) {
    assert_eq!(schema["type"], "string", "errorReason needs a top-level type: {schema}");
    assert_eq!(schema["nullable"], true, "errorReason must be nullable: {schema}");
    assert!(schema.get("anyOf").is_none(), "errorReason must not use anyOf: {schema}");
    assert!(schema.get("oneOf").is_none(), "errorReason must not use oneOf: {schema}");
    assert_eq!(schema["enum"], serde_json::json!(expected));
}

#[test]
fn test_error_reason_schema_is_structural() {
    let machine = serde_json::to_value(Machine::crd()).unwrap();
    let expected: Vec<&str> = MachineStatusError::ALL.iter().map(|t| t.as_str()).collect();
    assert_flat_nullable_enum(&status_property(&machine, "errorReason"), &expected);

    let cluster = serde_json::to_value(Cluster::crd()).unwrap();
    let expected: Vec<&str> = ClusterStatusError::ALL.iter().map(|t| t.as_str()).collect();
    assert_flat_nullable_enum(&status_property(&cluster, "errorReason"), &expected);
}

#[test]
fn test_roles_description_is_plain_text() {
    let machine = serde_json::to_value(Machine::crd()).unwrap();
    let roles = &machine["spec"]["versions"][0]["schema"]["openAPIV3Schema"]["properties"]["spec"]["properties"]["roles"];
    let description = roles["description"].as_str().unwrap();
    assert!(description.starts_with("Roles this machine fulfils"));
    assert!(!description.contains('`'), "description should not carry rustdoc markup: {description}");
    assert!(!description.contains("crate::"), "description should not carry rustdoc links: {description}");
}
