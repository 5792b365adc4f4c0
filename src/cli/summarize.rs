//! # Summarize Command
//!
//! Command to recompute the condition summaries a StatusProbe declares.

use anyhow::{Context, Result};
use status_reconciler::conditions::set_summary;
use status_reconciler::crd::manifest;
use std::path::Path;
use tracing::info;

use crate::show::print_status;

/// Recompute the declared summaries of a StatusProbe manifest
pub fn summarize_command(path: &Path, write: bool) -> Result<()> {
    let mut probe = manifest::load(path)?;
    let sets = probe
        .spec
        .condition_sets()
        .context("Invalid condition set in spec")?;

    for set in &sets {
        let written = set_summary(&mut probe, set);
        info!(target_condition = set.target(), written, "Summarized condition set");
    }

    if write {
        manifest::save(path, &probe)?;
    }
    print_status(&probe);
    Ok(())
}
