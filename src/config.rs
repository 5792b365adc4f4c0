//! # Engine Configuration
//!
//! Engine-level settings loaded from environment variables.

use crate::reconcile::SuccessPredicate;
use std::time::Duration;

/// Engine-level configuration
///
/// All settings have sensible defaults and can be overridden via environment variables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EngineConfig {
    /// Field manager used when persisting status snapshots
    pub field_owner: String,
    /// Message for `Ready=True` when business logic left none
    pub ready_success_message: String,
    /// Requeue interval that counts as success (seconds)
    /// 0 selects the event-driven discipline
    pub success_requeue_secs: u64,
    /// Global log level (ERROR, WARN, INFO, DEBUG, TRACE)
    pub log_level: String,
    /// Log format (json, text)
    pub log_format: String,
    /// Enable color in text format logs
    pub log_enable_color: bool,
}

impl Default for EngineConfig {
    fn default() -> Self {
        use crate::constants::*;
        Self {
            field_owner: DEFAULT_FIELD_OWNER.to_string(),
            ready_success_message: DEFAULT_READY_SUCCESS_MESSAGE.to_string(),
            success_requeue_secs: DEFAULT_SUCCESS_REQUEUE_SECS,
            log_level: DEFAULT_LOG_LEVEL.to_string(),
            log_format: DEFAULT_LOG_FORMAT.to_string(),
            log_enable_color: false,
        }
    }
}

impl EngineConfig {
    /// Load configuration from environment variables with defaults
    pub fn from_env() -> Self {
        use crate::constants::*;
        Self {
            field_owner: env_var_or_default_str("STATUS_FIELD_OWNER", DEFAULT_FIELD_OWNER),
            ready_success_message: env_var_or_default_str(
                "READY_SUCCESS_MESSAGE",
                DEFAULT_READY_SUCCESS_MESSAGE,
            ),
            success_requeue_secs: env_var_or_default(
                "SUCCESS_REQUEUE_SECS",
                DEFAULT_SUCCESS_REQUEUE_SECS,
            ),
            log_level: env_var_or_default_str("LOG_LEVEL", DEFAULT_LOG_LEVEL),
            log_format: env_var_or_default_str("LOG_FORMAT", DEFAULT_LOG_FORMAT),
            log_enable_color: env_var_or_default_bool("LOG_ENABLE_COLOR", false),
        }
    }

    /// Get success requeue duration, `None` for the event-driven discipline
    pub fn success_requeue_duration(&self) -> Option<Duration> {
        (self.success_requeue_secs > 0).then(|| Duration::from_secs(self.success_requeue_secs))
    }

    /// Stock success predicate matching the configured discipline
    pub fn success_predicate(&self) -> SuccessPredicate {
        match self.success_requeue_duration() {
            Some(interval) => SuccessPredicate::requeue_on_success(interval),
            None => SuccessPredicate::no_requeue_on_success(),
        }
    }
}

/// Read environment variable or return default value
fn env_var_or_default<T: std::str::FromStr>(key: &str, default: T) -> T
where
    <T as std::str::FromStr>::Err: std::fmt::Debug,
{
    std::env::var(key)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}

/// Read environment variable as boolean or return default
fn env_var_or_default_bool(key: &str, default: bool) -> bool {
    std::env::var(key)
        .ok()
        .map(|v| matches!(v.to_lowercase().as_str(), "true" | "1" | "yes" | "on"))
        .unwrap_or(default)
}

/// Read environment variable as string or return default
fn env_var_or_default_str(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reconcile::SuccessType;

    #[test]
    fn test_defaults_are_event_driven() {
        let config = EngineConfig::default();
        assert_eq!(config.field_owner, "status-reconciler");
        assert_eq!(config.success_requeue_duration(), None);
        assert_eq!(
            config.success_predicate().success_type(),
            SuccessType::NoRequeueOnSuccess
        );
    }

    #[test]
    fn test_requeue_interval_selects_requeue_discipline() {
        let config = EngineConfig {
            success_requeue_secs: 30,
            ..Default::default()
        };
        assert_eq!(config.success_requeue_duration(), Some(Duration::from_secs(30)));
        assert_eq!(
            config.success_predicate().success_type(),
            SuccessType::RequeueOnSuccess
        );
    }

    #[test]
    fn test_env_helpers_fall_back_on_missing_or_invalid() {
        assert_eq!(env_var_or_default("STATUS_RECONCILER_TEST_UNSET_U64", 7u64), 7);
        assert!(env_var_or_default_bool("STATUS_RECONCILER_TEST_UNSET_BOOL", true));
        assert_eq!(
            env_var_or_default_str("STATUS_RECONCILER_TEST_UNSET_STR", "fallback"),
            "fallback"
        );
    }
}
