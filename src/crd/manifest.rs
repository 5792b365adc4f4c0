//! # Manifests
//!
//! Reading and writing StatusProbe manifests on disk.

use crate::crd::StatusProbe;
use anyhow::{Context, Result};
use std::path::Path;

/// Load a StatusProbe from a YAML manifest
pub fn load(path: &Path) -> Result<StatusProbe> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read manifest '{}'", path.display()))?;
    serde_yaml::from_str(&raw)
        .with_context(|| format!("Failed to parse StatusProbe from '{}'", path.display()))
}

/// Write a StatusProbe back as YAML, status included
pub fn save(path: &Path, probe: &StatusProbe) -> Result<()> {
    let raw = serde_yaml::to_string(probe).context("Failed to serialize StatusProbe")?;
    std::fs::write(path, raw)
        .with_context(|| format!("Failed to write manifest '{}'", path.display()))
}
