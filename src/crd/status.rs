//! # StatusProbe Status
//!
//! Status type and the condition capability for StatusProbe.

use crate::conditions::{Condition, ObjectWithConditions};
use crate::constants::RECONCILE_REQUEST_ANNOTATION;
use crate::crd::StatusProbe;
use crate::patch::HelperOptions;
use serde::{Deserialize, Serialize};

/// Status of the StatusProbe resource
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq, schemars::JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct StatusProbeStatus {
    /// Conditions represent the latest available observations
    #[serde(default)]
    pub conditions: Vec<Condition>,
    /// Generation of the spec that produced the last terminal state
    /// Only written when Ready=True or Stalled=True
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub observed_generation: Option<i64>,
    /// Last `reconcile.fluxcd.io/requestedAt` value handled by the reconciler
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_handled_reconcile_at: Option<String>,
}

impl StatusProbe {
    /// Publish `status.observedGeneration` when the patch options allow it.
    ///
    /// Mirrors what the status patch would persist, for offline use.
    pub fn record_observed_generation(&mut self, opts: &HelperOptions) {
        if !opts.include_status_observed_generation {
            return;
        }
        let generation = self.metadata.generation;
        if let Some(generation) = generation {
            self.status.get_or_insert_with(Default::default).observed_generation = Some(generation);
        }
    }
}

impl ObjectWithConditions for StatusProbe {
    fn conditions(&self) -> &[Condition] {
        self.status
            .as_ref()
            .map(|status| status.conditions.as_slice())
            .unwrap_or_default()
    }

    fn conditions_mut(&mut self) -> &mut Vec<Condition> {
        &mut self.status.get_or_insert_with(Default::default).conditions
    }

    fn generation(&self) -> Option<i64> {
        self.metadata.generation
    }

    fn reconcile_request(&self) -> Option<&str> {
        self.metadata
            .annotations
            .as_ref()
            .and_then(|annotations| annotations.get(RECONCILE_REQUEST_ANNOTATION))
            .map(String::as_str)
    }

    fn last_handled_reconcile_at(&self) -> Option<&str> {
        self.status
            .as_ref()
            .and_then(|status| status.last_handled_reconcile_at.as_deref())
    }

    fn set_last_handled_reconcile_at(&mut self, value: String) {
        self.status
            .get_or_insert_with(Default::default)
            .last_handled_reconcile_at = Some(value);
    }
}
