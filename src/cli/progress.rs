//! # Progress Command
//!
//! Command to mark a StatusProbe as reconciling.

use anyhow::Result;
use status_reconciler::crd::manifest;
use status_reconciler::reconcile::progressive_status;
use std::path::Path;

use crate::show::print_status;

/// Apply progressive status to a StatusProbe manifest
pub fn progress_command(
    path: &Path,
    reason: &str,
    message: String,
    drift: bool,
    write: bool,
) -> Result<()> {
    let mut probe = manifest::load(path)?;
    progressive_status(drift, &mut probe, reason, message);

    if write {
        manifest::save(path, &probe)?;
    }
    print_status(&probe);
    Ok(())
}
