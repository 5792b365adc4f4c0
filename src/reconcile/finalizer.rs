//! # Result Finalizer
//!
//! End-of-reconcile status transition.
//!
//! Takes the outcome of one reconcile attempt and turns it into a consistent
//! Ready/Stalled/Reconciling triad on the resource:
//!
//! 1. Acknowledge a pending reconcile request in status.
//! 2. Drop conditions the outcome proves stale: Stalled and Reconciling on
//!    success, Reconciling on a terminal stall, Stalled when more work is
//!    scheduled.
//! 3. Run the configured condition summaries in order.
//! 4. Fill gaps in Ready or report a contradiction.
//!
//! Ready values already set by business logic are only overwritten when they
//! claim the opposite of what the outcome proves; precise reasons are kept.

use crate::conditions::{
    self, get, set_summary, ConditionSet, ObjectWithConditions, FAILED_REASON,
    READY_CONDITION, RECONCILING_CONDITION, STALLED_CONDITION, SUCCEEDED_REASON,
};
use crate::error::FinalizeError;
use crate::observability::metrics;
use crate::reconcile::result::{ReconcileResult, SuccessPredicate, SuccessType};
use crate::reconcile::acknowledge_reconcile_request;
use tracing::{debug, info, warn};

/// How a finalize call was classified, for logs and metrics
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Outcome {
    Success,
    Failed,
    Stalled,
    Requeue,
    Pending,
    Contradiction,
}

impl Outcome {
    fn as_str(self) -> &'static str {
        match self {
            Outcome::Success => "success",
            Outcome::Failed => "failed",
            Outcome::Stalled => "stalled",
            Outcome::Requeue => "requeue",
            Outcome::Pending => "pending",
            Outcome::Contradiction => "contradiction",
        }
    }
}

/// Computes the final status of a resource after a reconcile attempt.
///
/// Holds only static configuration; all state lives on the resource.
#[derive(Debug, Clone)]
pub struct ResultFinalizer {
    is_success: SuccessPredicate,
    success_type: SuccessType,
    ready_success_message: String,
    summarize: Vec<ConditionSet>,
}

impl ResultFinalizer {
    /// Create a finalizer.
    ///
    /// `summarize` is applied in order on every call; a later set may consult a
    /// target written by an earlier one by listing it in its own summarize list.
    pub fn new(
        is_success: SuccessPredicate,
        ready_success_message: impl Into<String>,
        summarize: Vec<ConditionSet>,
    ) -> Self {
        let success_type = is_success.success_type();
        Self {
            is_success,
            success_type,
            ready_success_message: ready_success_message.into(),
            summarize,
        }
    }

    #[must_use]
    pub fn success_type(&self) -> SuccessType {
        self.success_type
    }

    #[must_use]
    pub fn condition_sets(&self) -> &[ConditionSet] {
        &self.summarize
    }

    /// Finalize the status of `obj` for the given reconcile outcome.
    ///
    /// # Errors
    ///
    /// - [`FinalizeError::Reconcile`] carrying `err` whenever the attempt failed.
    /// - [`FinalizeError::NotReady`] when the attempt is classified success
    ///   but Ready is explicitly False.
    pub fn finalize<T: ObjectWithConditions + ?Sized>(
        &self,
        obj: &mut T,
        result: &ReconcileResult,
        err: Option<anyhow::Error>,
    ) -> Result<(), FinalizeError> {
        acknowledge_reconcile_request(obj);

        let is_success = self.is_success.is_success(result, err.as_ref());
        // No requeue, no error, Stalled=True: the resource is wedged for this
        // generation. Takes precedence over success for event-driven reconcilers,
        // whose success result is also empty.
        let terminal_stall = err.is_none() && result.is_zero() && conditions::is_stalled(obj);

        if terminal_stall {
            conditions::delete(obj, RECONCILING_CONDITION);
        } else if is_success {
            conditions::delete(obj, STALLED_CONDITION);
            conditions::delete(obj, RECONCILING_CONDITION);
        } else if err.is_none() && !result.is_zero() {
            // More work is scheduled, so the resource is not stuck.
            conditions::delete(obj, STALLED_CONDITION);
        }

        for set in &self.summarize {
            set_summary(obj, set);
        }

        let outcome = match err {
            Some(err) => {
                // A False Ready already carries the precise cause.
                if !conditions::is_false(obj, READY_CONDITION) {
                    conditions::mark_false(obj, READY_CONDITION, FAILED_REASON, format!("{err:#}"));
                }
                self.record(Outcome::Failed);
                return Err(FinalizeError::Reconcile(err));
            }
            None if terminal_stall => {
                ready_from_stalled(obj);
                Outcome::Stalled
            }
            None if is_success => self.ready_on_success(obj)?,
            None if result.is_zero() => Outcome::Pending,
            None => Outcome::Requeue,
        };

        self.record(outcome);
        Ok(())
    }

    fn ready_on_success<T: ObjectWithConditions + ?Sized>(
        &self,
        obj: &mut T,
    ) -> Result<Outcome, FinalizeError> {
        match get(obj, READY_CONDITION) {
            Some(ready) if ready.is_true() => {
                if ready.message.is_empty() {
                    let reason = ready.reason.clone();
                    conditions::mark_true(
                        obj,
                        READY_CONDITION,
                        &reason,
                        self.ready_success_message.as_str(),
                    );
                }
                Ok(Outcome::Success)
            }
            Some(ready) if ready.is_false() => {
                let (reason, message) = (ready.reason.clone(), ready.message.clone());
                warn!(
                    success_type = %self.success_type,
                    reason = %reason,
                    "Reconciliation reported success but Ready=False"
                );
                self.record(Outcome::Contradiction);
                Err(FinalizeError::NotReady { reason, message })
            }
            _ => {
                debug!("Ready not set on success, using default success message");
                conditions::mark_true(
                    obj,
                    READY_CONDITION,
                    SUCCEEDED_REASON,
                    self.ready_success_message.as_str(),
                );
                Ok(Outcome::Success)
            }
        }
    }

    fn record(&self, outcome: Outcome) {
        metrics::increment_finalizations(outcome.as_str());
        info!(
            outcome = outcome.as_str(),
            success_type = %self.success_type,
            "Finalized reconcile status"
        );
    }
}

/// A stalled terminal state must always surface through Ready
fn ready_from_stalled<T: ObjectWithConditions + ?Sized>(obj: &mut T) {
    let Some(stalled) = get(obj, STALLED_CONDITION) else {
        return;
    };
    if !conditions::is_false(obj, READY_CONDITION) {
        let (reason, message) = (stalled.reason.clone(), stalled.message.clone());
        conditions::mark_false(obj, READY_CONDITION, &reason, message);
    }
}
