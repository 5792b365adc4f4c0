//! # Show Command
//!
//! Command to show the conditions of a StatusProbe manifest.

use anyhow::Result;
use status_reconciler::crd::{manifest, StatusProbe};
use std::path::Path;

/// Show the conditions of a StatusProbe manifest
pub fn show_command(path: &Path) -> Result<()> {
    let probe = manifest::load(path)?;
    print_status(&probe);
    Ok(())
}

/// Print resource identity and status in a human-readable layout
pub fn print_status(probe: &StatusProbe) {
    let ns = probe.metadata.namespace.as_deref().unwrap_or("default");
    let name = probe.metadata.name.as_deref().unwrap_or("<unknown>");

    println!("📊 Status for StatusProbe '{ns}/{name}'");
    if let Some(generation) = probe.metadata.generation {
        println!("  Generation: {generation}");
    }

    let Some(status) = &probe.status else {
        println!("  No status recorded");
        return;
    };
    if let Some(observed) = status.observed_generation {
        println!("  Observed Generation: {observed}");
    }
    if let Some(handled) = &status.last_handled_reconcile_at {
        println!("  Last Handled Reconcile: {handled}");
    }

    println!();
    println!("Conditions:");
    if status.conditions.is_empty() {
        println!("  (none)");
    }
    for condition in &status.conditions {
        println!("  {}={}", condition.r#type, condition.status);
        if !condition.reason.is_empty() {
            println!("    Reason: {}", condition.reason);
        }
        if !condition.message.is_empty() {
            println!("    Message: {}", condition.message);
        }
        if let Some(time) = condition.last_transition_time {
            println!("    Last Transition: {}", time.to_rfc3339());
        }
    }
}
