//! # Patch Command
//!
//! Command to show the status patch a controller would send for a StatusProbe.

use anyhow::{Context, Result};
use status_reconciler::config::EngineConfig;
use status_reconciler::crd::manifest;
use status_reconciler::patch::{add_patch_options, HelperOptions};
use std::path::Path;

/// Print the field manager, observed-generation decision and merge patch
pub fn patch_command(config: &EngineConfig, path: &Path, field_owner: Option<String>) -> Result<()> {
    let probe = manifest::load(path)?;
    let sets = probe
        .spec
        .condition_sets()
        .context("Invalid condition set in spec")?;

    let owner = field_owner.unwrap_or_else(|| config.field_owner.clone());
    let owned: Vec<String> = sets.iter().flat_map(|s| s.owned().iter().cloned()).collect();
    let opts = HelperOptions::from_options(&add_patch_options(&probe, Vec::new(), owned, &owner));

    let params = opts.patch_params();
    println!(
        "Field manager: {}",
        params.field_manager.as_deref().unwrap_or("<default>")
    );
    println!(
        "Include observedGeneration: {}",
        opts.include_status_observed_generation
    );
    let patch = serde_json::to_string_pretty(&opts.status_patch(&probe))
        .context("Failed to render status patch")?;
    println!("{patch}");
    Ok(())
}
