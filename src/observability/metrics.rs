//! # Metrics
//!
//! Prometheus metrics for monitoring status transitions.
//!
//! ## Metrics Exposed
//!
//! - `status_reconciler_finalizations_total{outcome}` - Finalize calls by outcome
//!   (success, failed, stalled, requeue, contradiction, pending)
//! - `status_reconciler_progressive_updates_total` - Progressive status updates

use anyhow::Result;
use prometheus::{Encoder, IntCounter, IntCounterVec, Opts, Registry, TextEncoder};
use std::sync::LazyLock;

// Metrics
pub(crate) static REGISTRY: LazyLock<Registry> = LazyLock::new(Registry::new);

static FINALIZATIONS_TOTAL: LazyLock<IntCounterVec> = LazyLock::new(|| {
    IntCounterVec::new(
        Opts::new(
            "status_reconciler_finalizations_total",
            "Total number of finalize calls by outcome",
        ),
        &["outcome"],
    )
    .expect("Failed to create FINALIZATIONS_TOTAL metric - this should never happen")
});

static PROGRESSIVE_UPDATES_TOTAL: LazyLock<IntCounter> = LazyLock::new(|| {
    IntCounter::new(
        "status_reconciler_progressive_updates_total",
        "Total number of progressive status updates",
    )
    .expect("Failed to create PROGRESSIVE_UPDATES_TOTAL metric - this should never happen")
});

/// Register all metrics with the crate registry
pub fn register_metrics() -> Result<()> {
    REGISTRY.register(Box::new(FINALIZATIONS_TOTAL.clone()))?;
    REGISTRY.register(Box::new(PROGRESSIVE_UPDATES_TOTAL.clone()))?;

    Ok(())
}

/// Render the registry in the Prometheus text exposition format
pub fn gather_text() -> Result<String> {
    let mut buffer = Vec::new();
    TextEncoder::new().encode(&REGISTRY.gather(), &mut buffer)?;
    Ok(String::from_utf8(buffer)?)
}

pub fn increment_finalizations(outcome: &str) {
    FINALIZATIONS_TOTAL.with_label_values(&[outcome]).inc();
}

pub fn increment_progressive_updates() {
    PROGRESSIVE_UPDATES_TOTAL.inc();
}
