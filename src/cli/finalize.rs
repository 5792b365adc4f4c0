//! # Finalize Command
//!
//! Command to finalize the status of a StatusProbe for a reconcile outcome.

use anyhow::{Context, Result};
use status_reconciler::config::EngineConfig;
use status_reconciler::crd::manifest;
use status_reconciler::patch::{add_patch_options, HelperOptions};
use status_reconciler::reconcile::{ReconcileResult, ResultFinalizer, SuccessPredicate};
use std::path::Path;
use std::time::Duration;

use crate::show::print_status;

/// Finalize a StatusProbe manifest for the given reconcile outcome
///
/// The spec's `successRequeueSeconds` overrides `SUCCESS_REQUEUE_SECS`.
/// A simulated `--error` is reported but is not a command failure; the
/// success/Ready=False contradiction is.
pub fn finalize_command(
    config: &EngineConfig,
    path: &Path,
    error: Option<String>,
    requeue: bool,
    requeue_after: u64,
    write: bool,
) -> Result<()> {
    let mut probe = manifest::load(path)?;
    let sets = probe
        .spec
        .condition_sets()
        .context("Invalid condition set in spec")?;

    let predicate = match probe.spec.success_interval() {
        Some(interval) => SuccessPredicate::requeue_on_success(interval),
        None => config.success_predicate(),
    };
    let owned: Vec<String> = sets.iter().flat_map(|s| s.owned().iter().cloned()).collect();
    let finalizer = ResultFinalizer::new(predicate, config.ready_success_message.as_str(), sets);

    let result = ReconcileResult {
        requeue,
        requeue_after: Duration::from_secs(requeue_after),
    };
    let outcome = finalizer.finalize(&mut probe, &result, error.map(anyhow::Error::msg));

    let opts = HelperOptions::from_options(&add_patch_options(
        &probe,
        Vec::new(),
        owned,
        &config.field_owner,
    ));
    probe.record_observed_generation(&opts);

    if write {
        manifest::save(path, &probe)?;
    }
    println!("Success type: {}", finalizer.success_type());
    print_status(&probe);

    match outcome {
        Ok(()) => Ok(()),
        Err(e) if e.is_contradiction() => Err(e.into()),
        Err(e) => {
            println!();
            println!("⚠️  Reconcile error recorded: {e}");
            Ok(())
        }
    }
}
