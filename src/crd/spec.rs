//! # StatusProbe Spec
//!
//! Main CRD specification types.

use crate::conditions::ConditionSet;
use crate::error::ConditionSetError;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// StatusProbe Custom Resource Definition
///
/// A resource whose status is driven entirely by the status engine. The spec
/// declares how the Ready condition is summarized and which success
/// discipline the reconciler follows, which makes it useful for exercising
/// status transitions offline and in conformance tests.
///
/// # Example
///
/// ```yaml
/// apiVersion: status.microscaler.io/v1alpha1
/// kind: StatusProbe
/// metadata:
///   name: artifact-probe
///   namespace: default
/// spec:
///   successRequeueSeconds: 60
///   conditionSets:
///     - target: Ready
///       owned: [FetchFailed, ArtifactInStorage, Ready, Reconciling, Stalled]
///       summarize: [FetchFailed, ArtifactInStorage, Stalled, Reconciling]
///       negativePolarity: [FetchFailed, Stalled, Reconciling]
/// ```
#[derive(
    kube::CustomResource, Debug, Clone, Default, Deserialize, Serialize, schemars::JsonSchema,
)]
#[kube(
    kind = "StatusProbe",
    group = "status.microscaler.io",
    version = "v1alpha1",
    namespaced,
    status = "crate::crd::StatusProbeStatus",
    shortname = "sprobe",
    printcolumn = r#"{"name":"Ready", "type":"string", "jsonPath":".status.conditions[?(@.type==\"Ready\")].status"}, {"name":"Status", "type":"string", "jsonPath":".status.conditions[?(@.type==\"Ready\")].message"}"#
)]
#[serde(rename_all = "camelCase")]
pub struct StatusProbeSpec {
    /// Condition sets summarized on every finalization, in order
    #[serde(default)]
    pub condition_sets: Vec<ConditionSetSpec>,
    /// Requeue interval that counts as success (seconds)
    /// Unset or 0 means the reconciler is event-driven: success is no requeue at all
    #[serde(default)]
    pub success_requeue_seconds: Option<u64>,
}

impl StatusProbeSpec {
    /// Success requeue interval, if the reconciler requeues on success
    #[must_use]
    pub fn success_interval(&self) -> Option<Duration> {
        self.success_requeue_seconds
            .filter(|secs| *secs > 0)
            .map(Duration::from_secs)
    }

    /// Validate and build the declared condition sets
    ///
    /// # Errors
    ///
    /// Returns the first invalid set.
    pub fn condition_sets(&self) -> Result<Vec<ConditionSet>, ConditionSetError> {
        self.condition_sets.iter().map(ConditionSet::try_from).collect()
    }
}

/// Declarative form of a [`ConditionSet`]
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize, schemars::JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ConditionSetSpec {
    /// Condition type computed by this set
    pub target: String,
    /// Condition types this set may consult
    #[serde(default)]
    pub owned: Vec<String>,
    /// Condition types to summarize, highest priority first
    #[serde(default)]
    pub summarize: Vec<String>,
    /// Summarized types for which True is the bad state
    #[serde(default)]
    pub negative_polarity: Vec<String>,
}

impl TryFrom<&ConditionSetSpec> for ConditionSet {
    type Error = ConditionSetError;

    fn try_from(spec: &ConditionSetSpec) -> Result<Self, Self::Error> {
        ConditionSet::new(
            spec.target.as_str(),
            spec.owned.iter().map(String::as_str),
            spec.summarize.iter().map(String::as_str),
            spec.negative_polarity.iter().map(String::as_str),
        )
    }
}
