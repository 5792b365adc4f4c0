//! # Reconcile Results
//!
//! The outcome of one reconcile attempt and the predicate that decides whether
//! it was a terminal success.

use std::fmt;
use std::sync::Arc;
use std::time::Duration;

/// Requeue directive returned by a reconcile attempt
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReconcileResult {
    /// Requeue immediately
    pub requeue: bool,
    /// Requeue after this interval (zero means no timed requeue)
    pub requeue_after: Duration,
}

impl ReconcileResult {
    /// No requeue of any kind
    #[must_use]
    pub const fn empty() -> Self {
        Self {
            requeue: false,
            requeue_after: Duration::ZERO,
        }
    }

    /// Immediate requeue
    #[must_use]
    pub const fn requeue() -> Self {
        Self {
            requeue: true,
            requeue_after: Duration::ZERO,
        }
    }

    #[must_use]
    pub const fn requeue_after(interval: Duration) -> Self {
        Self {
            requeue: false,
            requeue_after: interval,
        }
    }

    /// Whether the result asks for no requeue at all
    #[must_use]
    pub fn is_zero(&self) -> bool {
        !self.requeue && self.requeue_after.is_zero()
    }
}

/// Success discipline of a reconciler
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SuccessType {
    /// Success implies a fixed positive requeue interval
    RequeueOnSuccess,
    /// Success implies no requeue directive at all
    NoRequeueOnSuccess,
}

impl SuccessType {
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            SuccessType::RequeueOnSuccess => "requeue-on-success",
            SuccessType::NoRequeueOnSuccess => "no-requeue-on-success",
        }
    }
}

impl fmt::Display for SuccessType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

type PredicateFn = dyn Fn(&ReconcileResult, Option<&anyhow::Error>) -> bool + Send + Sync;

/// Caller-supplied classifier deciding whether `(result, error)` is a terminal success.
///
/// Must be pure: the finalizer probes it with fabricated results.
#[derive(Clone)]
pub struct SuccessPredicate(Arc<PredicateFn>);

impl SuccessPredicate {
    pub fn new<F>(predicate: F) -> Self
    where
        F: Fn(&ReconcileResult, Option<&anyhow::Error>) -> bool + Send + Sync + 'static,
    {
        Self(Arc::new(predicate))
    }

    /// Success is no error and a requeue after exactly `interval`
    #[must_use]
    pub fn requeue_on_success(interval: Duration) -> Self {
        Self::new(move |result: &ReconcileResult, err: Option<&anyhow::Error>| {
            err.is_none() && !result.requeue && result.requeue_after == interval
        })
    }

    /// Success is no error and no requeue of any kind
    #[must_use]
    pub fn no_requeue_on_success() -> Self {
        Self::new(|result: &ReconcileResult, err: Option<&anyhow::Error>| {
            err.is_none() && result.is_zero()
        })
    }

    #[must_use]
    pub fn is_success(&self, result: &ReconcileResult, err: Option<&anyhow::Error>) -> bool {
        (self.0)(result, err)
    }

    /// See [`determine_success_type`]
    #[must_use]
    pub fn success_type(&self) -> SuccessType {
        determine_success_type(self)
    }
}

impl fmt::Debug for SuccessPredicate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("SuccessPredicate")
            .field(&self.success_type())
            .finish()
    }
}

/// Probe a predicate for its success discipline.
///
/// An empty result with no error is success only for event-driven
/// reconcilers; a periodic reconciler needs its interval to see success.
/// Probing the empty result works without knowing that interval.
#[must_use]
pub fn determine_success_type(predicate: &SuccessPredicate) -> SuccessType {
    if predicate.is_success(&ReconcileResult::empty(), None) {
        SuccessType::NoRequeueOnSuccess
    } else {
        SuccessType::RequeueOnSuccess
    }
}
