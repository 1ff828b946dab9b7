//! CRD Generator
//!
//! Renders the `Machine` and `Cluster` CustomResourceDefinitions as YAML.
//!
//! By default the manifests are written to stdout as a single multi-document
//! stream. When `CRDGEN_OUTPUT_DIR` is set to a non-empty path, each CRD is
//! written to its own `<name>.yaml` file in that directory instead.

use std::env;
use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use cluster_crds::{Cluster, Machine};
use k8s_openapi::apiextensions_apiserver::pkg::apis::apiextensions::v1::CustomResourceDefinition;
use kube::CustomResourceExt;
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // stdout carries the manifests, so logs go to stderr
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let crds = vec![Machine::crd(), Cluster::crd()];

    match output_dir(env::var_os("CRDGEN_OUTPUT_DIR")) {
        Some(dir) => write_files(&dir, &crds)?,
        None => print!("{}", render_stream(&crds)?),
    }

    Ok(())
}

/// An unset or empty value means stdout. Paths are taken as raw OS strings.
fn output_dir(value: Option<OsString>) -> Option<PathBuf> {
    value.filter(|v| !v.is_empty()).map(PathBuf::from)
}

fn crd_name(crd: &CustomResourceDefinition) -> Result<&str> {
    crd.metadata
        .name
        .as_deref()
        .context("generated CRD has no metadata.name")
}

fn render_stream(crds: &[CustomResourceDefinition]) -> Result<String> {
    let mut out = String::new();
    for crd in crds {
        let name = crd_name(crd)?;
        let yaml = serde_yaml::to_string(crd)
            .with_context(|| format!("failed to serialize CRD {name}"))?;
        out.push_str("---\n");
        out.push_str(&yaml);
        info!("Rendered CRD {}", name);
    }
    Ok(out)
}

fn write_files(dir: &Path, crds: &[CustomResourceDefinition]) -> Result<()> {
    fs::create_dir_all(dir)
        .with_context(|| format!("failed to create output directory {}", dir.display()))?;

    for crd in crds {
        let name = crd_name(crd)?;
        let yaml = serde_yaml::to_string(crd)
            .with_context(|| format!("failed to serialize CRD {name}"))?;
        let path = dir.join(format!("{name}.yaml"));
        fs::write(&path, yaml)
            .with_context(|| format!("failed to write {}", path.display()))?;
        info!("Wrote CRD {} to {}", name, path.display());
    }

    Ok(())
}
