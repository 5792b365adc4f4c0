//! # Constants
//!
//! Shared constants used throughout the engine.
//!
//! These values represent reasonable defaults and can be overridden via
//! configuration or environment variables where applicable.

/// Default field manager used when persisting status snapshots
pub const DEFAULT_FIELD_OWNER: &str = "status-reconciler";

/// Default message for `Ready=True` when the reconciler left no message of its own
pub const DEFAULT_READY_SUCCESS_MESSAGE: &str = "Reconciliation succeeded";

/// Default success requeue interval (seconds)
/// Zero selects the event-driven discipline: success means no requeue at all
pub const DEFAULT_SUCCESS_REQUEUE_SECS: u64 = 0;

/// Default global log level
pub const DEFAULT_LOG_LEVEL: &str = "INFO";

/// Default log format (json, text)
pub const DEFAULT_LOG_FORMAT: &str = "text";

/// Annotation an operator sets to request an out-of-band reconcile.
/// Its value is acknowledged in `status.lastHandledReconcileAt`.
pub const RECONCILE_REQUEST_ANNOTATION: &str = "reconcile.fluxcd.io/requestedAt";
