//! # Patch Option Tests
//!
//! Tests for composing status patch options after a reconcile.

mod common;

use common::{probe, ready_set, ARTIFACT_IN_STORAGE};
use status_reconciler::conditions;
use status_reconciler::patch::{add_patch_options, HelperOptions, PatchOption};
use status_reconciler::reconcile::{
    progressive_status, ReconcileResult, ResultFinalizer, SuccessPredicate,
};

fn helper_for(obj: &status_reconciler::crd::StatusProbe) -> HelperOptions {
    let set = ready_set();
    HelperOptions::from_options(&add_patch_options(
        obj,
        Vec::new(),
        set.owned().iter().cloned(),
        "source-controller",
    ))
}

#[test]
fn test_in_progress_snapshot_omits_observed_generation() {
    let mut obj = probe();
    progressive_status(false, &mut obj, "NewGeneration", "reconciling");

    let helper = helper_for(&obj);
    assert_eq!(helper.field_owner, "source-controller");
    assert!(!helper.include_status_observed_generation);

    let patch = helper.status_patch(&obj);
    assert!(patch["status"].get("observedGeneration").is_none());
}

#[test]
fn test_terminal_snapshots_include_observed_generation() {
    let finalizer = ResultFinalizer::new(
        SuccessPredicate::no_requeue_on_success(),
        "Stored artifact",
        vec![ready_set()],
    );

    let mut ready = probe();
    conditions::mark_true(&mut ready, ARTIFACT_IN_STORAGE, "Stored", "stored");
    finalizer.finalize(&mut ready, &ReconcileResult::empty(), None).unwrap();
    assert!(helper_for(&ready).include_status_observed_generation);

    let mut stalled = probe();
    conditions::mark_stalled(&mut stalled, "InvalidSpec", "bad spec");
    finalizer.finalize(&mut stalled, &ReconcileResult::empty(), None).unwrap();
    let helper = helper_for(&stalled);
    assert!(helper.include_status_observed_generation);

    stalled.record_observed_generation(&helper);
    assert_eq!(stalled.status.as_ref().and_then(|s| s.observed_generation), Some(1));
}

#[test]
fn test_failed_snapshot_omits_observed_generation() {
    let finalizer = ResultFinalizer::new(
        SuccessPredicate::no_requeue_on_success(),
        "ok",
        Vec::new(),
    );
    let mut obj = probe();
    let _ = finalizer.finalize(
        &mut obj,
        &ReconcileResult::empty(),
        Some(anyhow::anyhow!("boom")),
    );
    assert!(!helper_for(&obj).include_status_observed_generation);
}

#[test]
fn test_status_patch_contains_only_owned_conditions() {
    let mut obj = probe();
    conditions::mark_true(&mut obj, ARTIFACT_IN_STORAGE, "Stored", "stored");
    conditions::mark_true(&mut obj, "Healthy", "Checked", "owned by another controller");

    let patch = helper_for(&obj).status_patch(&obj);
    let types: Vec<&str> = patch["status"]["conditions"]
        .as_array()
        .unwrap()
        .iter()
        .filter_map(|c| c["type"].as_str())
        .collect();
    assert_eq!(types, vec![ARTIFACT_IN_STORAGE]);
}

#[test]
fn test_later_options_win() {
    let opts = vec![
        PatchOption::FieldOwner("first".to_string()),
        PatchOption::OwnedConditions(vec!["A".to_string()]),
        PatchOption::FieldOwner("second".to_string()),
    ];
    let helper = HelperOptions::from_options(&opts);
    assert_eq!(helper.field_owner, "second");
    assert_eq!(helper.owned_conditions, vec!["A".to_string()]);
    assert_eq!(
        helper.patch_params().field_manager.as_deref(),
        Some("second")
    );
}
