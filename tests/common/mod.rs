//! Common test utilities for the integration tests
//!
//! Builders for `StatusProbe` resources and the condition sets used across
//! the test binaries.

#![allow(dead_code, reason = "each test binary uses a different subset")]

use status_reconciler::conditions::{self, ConditionSet, ConditionStatus};
use status_reconciler::crd::{StatusProbe, StatusProbeSpec};

pub const FETCH_FAILED: &str = "FetchFailed";
pub const ARTIFACT_IN_STORAGE: &str = "ArtifactInStorage";

/// A probe at generation 1 with no status
pub fn probe() -> StatusProbe {
    let mut probe = StatusProbe::new("probe", StatusProbeSpec::default());
    probe.metadata.namespace = Some("default".to_string());
    probe.metadata.generation = Some(1);
    probe
}

/// Status, reason and message of a condition, if present
pub fn state(probe: &StatusProbe, condition_type: &str) -> Option<(ConditionStatus, String, String)> {
    conditions::get(probe, condition_type)
        .map(|c| (c.status, c.reason.clone(), c.message.clone()))
}

/// Types of all conditions, in order
pub fn types(probe: &StatusProbe) -> Vec<String> {
    use status_reconciler::conditions::ObjectWithConditions;
    probe.conditions().iter().map(|c| c.r#type.clone()).collect()
}

/// Ready summary over a source-like controller's conditions
pub fn ready_set() -> ConditionSet {
    ConditionSet::new(
        "Ready",
        [FETCH_FAILED, ARTIFACT_IN_STORAGE, "Ready", "Reconciling", "Stalled"],
        [FETCH_FAILED, ARTIFACT_IN_STORAGE, "Stalled", "Reconciling"],
        [FETCH_FAILED, "Stalled", "Reconciling"],
    )
    .unwrap()
}
