//! # Observability
//!
//! Observability modules for metrics and tracing.
//!
//! - `metrics`: Prometheus counters for status transitions
//! - [`init_tracing`]: tracing subscriber setup driven by [`EngineConfig`]

pub mod metrics;

use crate::config::EngineConfig;
use tracing_subscriber::EnvFilter;

/// Install the global tracing subscriber.
///
/// `RUST_LOG` takes precedence; otherwise the configured log level applies to
/// this crate. Returns an error if a subscriber is already installed.
pub fn init_tracing(config: &EngineConfig) -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        format!("status_reconciler={}", config.log_level.to_lowercase()).into()
    });

    let builder = tracing_subscriber::fmt().with_env_filter(filter);
    let result = if config.log_format.eq_ignore_ascii_case("json") {
        builder.json().try_init()
    } else {
        builder.with_ansi(config.log_enable_color).try_init()
    };
    result.map_err(|e| anyhow::anyhow!("Failed to initialize tracing subscriber: {e}"))
}
