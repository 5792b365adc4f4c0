//! # Prelude
//!
//! Re-exports commonly used types and functions for convenience.
//!
//! ## Usage
//!
//! ```rust
//! use status_reconciler::prelude::*;
//!
//! let finalizer = ResultFinalizer::new(
//!     SuccessPredicate::no_requeue_on_success(),
//!     "Applied",
//!     Vec::new(),
//! );
//! assert_eq!(finalizer.success_type(), SuccessType::NoRequeueOnSuccess);
//! ```
//!
//! This brings into scope:
//! - Condition types, the `ObjectWithConditions` trait and well-known names
//! - Reconcile types (`ResultFinalizer`, `ReconcileResult`, `SuccessPredicate`, ...)
//! - Patch option types
//! - CRD types, config and error types

// Condition types - most commonly used
pub use crate::conditions::{
    Condition, ConditionSet, ConditionStatus, ObjectWithConditions, Polarity, FAILED_REASON,
    PROGRESSING_REASON, READY_CONDITION, RECONCILING_CONDITION, STALLED_CONDITION,
    SUCCEEDED_REASON,
};

// Reconcile types - core engine functionality
pub use crate::reconcile::{
    determine_success_type, progressive_status, ReconcileResult, ResultFinalizer,
    SuccessPredicate, SuccessType,
};

// Patch options - for persisting status
pub use crate::patch::{add_patch_options, HelperOptions, PatchOption};

// CRD types
pub use crate::crd::{ConditionSetSpec, StatusProbe, StatusProbeSpec, StatusProbeStatus};

// Config and error types
pub use crate::config::EngineConfig;
pub use crate::error::{ConditionSetError, FinalizeError};
