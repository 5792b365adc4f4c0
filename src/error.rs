//! # Errors
//!
//! Error types returned by the engine.

use thiserror::Error;

/// Outcome errors of [`ResultFinalizer::finalize`](crate::reconcile::ResultFinalizer::finalize).
#[derive(Debug, Error)]
pub enum FinalizeError {
    /// The reconciler reported success while its own Ready condition is False.
    /// Points at a bug in the calling reconciler; never resolved silently.
    #[error("reconciliation reported success but Ready=False ({reason}): {message}")]
    NotReady { reason: String, message: String },

    /// The upstream reconcile error, passed through after conditions were updated.
    #[error(transparent)]
    Reconcile(#[from] anyhow::Error),
}

impl FinalizeError {
    /// Whether this is the success/Ready=False contradiction rather than an upstream error
    #[must_use]
    pub fn is_contradiction(&self) -> bool {
        matches!(self, FinalizeError::NotReady { .. })
    }
}

/// Reasons a condition set is rejected at construction.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConditionSetError {
    #[error("condition set target must not be empty")]
    EmptyTarget,

    #[error("condition set for {target} lists itself in summarize")]
    TargetInSummarize { target: String },

    #[error("condition type {condition} appears more than once in summarize")]
    DuplicateSummarize { condition: String },

    #[error("negative polarity condition {condition} is not listed in summarize")]
    PolarityNotSummarized { condition: String },
}
