//! # Progressive Status
//!
//! Marks a resource as in-progress at the start of a reconcile, before the
//! outcome is known.

use crate::conditions::{
    self, get, mark_reconciling, ConditionStatus, ObjectWithConditions, READY_CONDITION,
};
use crate::observability::metrics;
use tracing::debug;

/// Set `Reconciling=True` and move Ready to `Unknown` where the last known
/// state no longer holds.
///
/// Ready is downgraded when it is unset or already `Unknown`, or when it is
/// `True` and `drift` says an out-of-band change invalidated it. A `False`
/// Ready, or a `True` one without drift, is kept so a re-attempt does not
/// erase the last terminal signal.
pub fn progressive_status<T: ObjectWithConditions + ?Sized>(
    drift: bool,
    obj: &mut T,
    reason: &str,
    message: impl Into<String>,
) {
    let message = message.into();
    mark_reconciling(obj, reason, message.as_str());

    let ready = get(obj, READY_CONDITION).map(|c| c.status);
    let downgrade = match ready {
        None | Some(ConditionStatus::Unknown) => true,
        Some(ConditionStatus::True) => drift,
        Some(ConditionStatus::False) => false,
    };
    if downgrade {
        debug!(drift, reason = %reason, "Marking Ready=Unknown while reconciling");
        conditions::mark_unknown(obj, READY_CONDITION, reason, message);
    }

    metrics::increment_progressive_updates();
}
