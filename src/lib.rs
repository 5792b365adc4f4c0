//! Status Reconciler Library
//!
//! Status-condition engine for Kubernetes controllers. Summarizes owned
//! conditions into a target condition and drives the Ready/Stalled/Reconciling
//! triad around each reconcile attempt.
//!
//! ## Quick Start
//!
//! ```rust
//! use status_reconciler::prelude::*;
//! ```
//!
//! This brings commonly used types and functions into scope. For more specific imports,
//! use the individual modules.

pub mod conditions;
pub mod config;
pub mod constants;
pub mod crd;
pub mod error;
pub mod observability;
pub mod patch;
pub mod prelude;
pub mod reconcile;
