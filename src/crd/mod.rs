//! # Custom Resource Definitions
//!
//! CRD types for the status reconciler.
//!
//! ## Module Structure
//!
//! - `spec.rs` - StatusProbe specification and declarative condition sets
//! - `status.rs` - Status type and the condition capability of StatusProbe
//! - `manifest.rs` - Loading and saving manifests

pub mod manifest;
mod spec;
mod status;

pub use spec::{ConditionSetSpec, StatusProbe, StatusProbeSpec};
pub use status::StatusProbeStatus;
