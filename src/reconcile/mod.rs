//! # Reconcile
//!
//! Status transitions around a single reconcile attempt.
//!
//! A controller calls [`progressive_status`] when it starts working on a
//! resource, runs its business logic (which may set its own conditions), then
//! hands the outcome to [`ResultFinalizer::finalize`]. The resource is then
//! persisted with the options from [`crate::patch::add_patch_options`].
//!
//! ## Usage
//!
//! ```rust
//! use status_reconciler::conditions::{self, PROGRESSING_REASON};
//! use status_reconciler::crd::StatusProbe;
//! use status_reconciler::reconcile::{
//!     progressive_status, ReconcileResult, ResultFinalizer, SuccessPredicate,
//! };
//!
//! let finalizer = ResultFinalizer::new(
//!     SuccessPredicate::no_requeue_on_success(),
//!     "Applied revision",
//!     Vec::new(),
//! );
//!
//! let mut probe = StatusProbe::new("example", Default::default());
//! progressive_status(false, &mut probe, PROGRESSING_REASON, "reconciling");
//! assert!(conditions::is_reconciling(&probe));
//!
//! finalizer
//!     .finalize(&mut probe, &ReconcileResult::empty(), None)
//!     .unwrap();
//! assert!(conditions::is_ready(&probe));
//! assert!(!conditions::is_reconciling(&probe));
//! ```

mod finalizer;
mod progressive;
mod result;

pub use finalizer::ResultFinalizer;
pub use progressive::progressive_status;
pub use result::{determine_success_type, ReconcileResult, SuccessPredicate, SuccessType};

use crate::conditions::ObjectWithConditions;
use tracing::debug;

/// Copy a pending reconcile request into `lastHandledReconcileAt`.
///
/// Writes only when the value differs, so each request value is acknowledged once.
/// Returns whether the status was updated.
pub fn acknowledge_reconcile_request<T: ObjectWithConditions + ?Sized>(obj: &mut T) -> bool {
    let Some(token) = obj.reconcile_request() else {
        return false;
    };
    if obj.last_handled_reconcile_at() == Some(token) {
        return false;
    }
    let token = token.to_string();
    debug!(token = %token, "Acknowledging reconcile request");
    obj.set_last_handled_reconcile_at(token);
    true
}
