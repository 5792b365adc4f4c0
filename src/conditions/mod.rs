//! # Conditions
//!
//! Typed status conditions and the capability a resource exposes so the engine
//! can read and mutate them.
//!
//! A resource carries at most one [`Condition`] per type. Writing a condition
//! through [`set`] stamps it with the resource generation and moves
//! `lastTransitionTime` only when the status actually changes, so repeated
//! writes of the same state are no-ops.
//!
//! ## Usage
//!
//! ```rust
//! use status_reconciler::conditions::{self, READY_CONDITION, SUCCEEDED_REASON};
//! use status_reconciler::crd::StatusProbe;
//!
//! let mut probe = StatusProbe::new("example", Default::default());
//! conditions::mark_true(&mut probe, READY_CONDITION, SUCCEEDED_REASON, "all good");
//! assert!(conditions::is_ready(&probe));
//! ```

pub mod summarize;

use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::debug;

pub use summarize::{set_summary, summarize, ConditionSet, Polarity};

/// Canonical terminal-outcome condition
pub const READY_CONDITION: &str = "Ready";

/// Resource cannot make progress without external intervention
pub const STALLED_CONDITION: &str = "Stalled";

/// A reconcile attempt is currently in progress
pub const RECONCILING_CONDITION: &str = "Reconciling";

/// Reason used for `Ready=True` written by the engine itself
pub const SUCCEEDED_REASON: &str = "Succeeded";

/// Reason used for `Ready=False` derived from an upstream reconcile error
pub const FAILED_REASON: &str = "Failed";

/// Reason conventionally used while a reconcile is in flight
pub const PROGRESSING_REASON: &str = "Progressing";

/// Value of a condition
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize, JsonSchema)]
pub enum ConditionStatus {
    True,
    False,
    Unknown,
}

impl ConditionStatus {
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            ConditionStatus::True => "True",
            ConditionStatus::False => "False",
            ConditionStatus::Unknown => "Unknown",
        }
    }
}

impl fmt::Display for ConditionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Condition represents an observation of a resource's state
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct Condition {
    /// Type of condition, unique within a resource
    pub r#type: String,
    /// Status of the condition (True, False, Unknown)
    pub status: ConditionStatus,
    /// Generation of the resource this condition was computed from
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub observed_generation: Option<i64>,
    /// Last time the status changed
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_transition_time: Option<DateTime<Utc>>,
    /// Machine-readable reason for the condition's last transition
    #[serde(default)]
    pub reason: String,
    /// Human-readable message
    #[serde(default)]
    pub message: String,
}

impl Condition {
    pub fn new(
        r#type: impl Into<String>,
        status: ConditionStatus,
        reason: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            r#type: r#type.into(),
            status,
            observed_generation: None,
            last_transition_time: None,
            reason: reason.into(),
            message: message.into(),
        }
    }

    pub fn true_condition(
        r#type: impl Into<String>,
        reason: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self::new(r#type, ConditionStatus::True, reason, message)
    }

    pub fn false_condition(
        r#type: impl Into<String>,
        reason: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self::new(r#type, ConditionStatus::False, reason, message)
    }

    pub fn unknown_condition(
        r#type: impl Into<String>,
        reason: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self::new(r#type, ConditionStatus::Unknown, reason, message)
    }

    #[must_use]
    pub fn is_true(&self) -> bool {
        self.status == ConditionStatus::True
    }

    #[must_use]
    pub fn is_false(&self) -> bool {
        self.status == ConditionStatus::False
    }

    #[must_use]
    pub fn is_unknown(&self) -> bool {
        self.status == ConditionStatus::Unknown
    }

    /// Compares type, status, reason and message; ignores bookkeeping fields
    #[must_use]
    pub fn has_same_state(&self, other: &Condition) -> bool {
        self.r#type == other.r#type
            && self.status == other.status
            && self.reason == other.reason
            && self.message == other.message
    }
}

/// Capability a resource exposes to have its status conditions managed.
///
/// The engine is generic over this trait rather than over concrete resource
/// types. Only the condition list and the generation are required; the
/// reconcile-request marker is optional and defaults to "not supported".
pub trait ObjectWithConditions {
    /// Current conditions, in insertion order
    fn conditions(&self) -> &[Condition];

    /// Mutable access to the condition list
    fn conditions_mut(&mut self) -> &mut Vec<Condition>;

    /// `metadata.generation` of the resource
    fn generation(&self) -> Option<i64>;

    /// Value of the pending out-of-band reconcile request, if any
    fn reconcile_request(&self) -> Option<&str> {
        None
    }

    /// Last reconcile request value acknowledged in status
    fn last_handled_reconcile_at(&self) -> Option<&str> {
        None
    }

    fn set_last_handled_reconcile_at(&mut self, _value: String) {}
}

/// Get a condition by type
pub fn get<'a, T>(obj: &'a T, condition_type: &str) -> Option<&'a Condition>
where
    T: ObjectWithConditions + ?Sized,
{
    obj.conditions().iter().find(|c| c.r#type == condition_type)
}

#[must_use]
pub fn has<T: ObjectWithConditions + ?Sized>(obj: &T, condition_type: &str) -> bool {
    get(obj, condition_type).is_some()
}

#[must_use]
pub fn is_true<T: ObjectWithConditions + ?Sized>(obj: &T, condition_type: &str) -> bool {
    get(obj, condition_type).is_some_and(Condition::is_true)
}

#[must_use]
pub fn is_false<T: ObjectWithConditions + ?Sized>(obj: &T, condition_type: &str) -> bool {
    get(obj, condition_type).is_some_and(Condition::is_false)
}

#[must_use]
pub fn is_unknown<T: ObjectWithConditions + ?Sized>(obj: &T, condition_type: &str) -> bool {
    get(obj, condition_type).is_some_and(Condition::is_unknown)
}

#[must_use]
pub fn is_ready<T: ObjectWithConditions + ?Sized>(obj: &T) -> bool {
    is_true(obj, READY_CONDITION)
}

#[must_use]
pub fn is_stalled<T: ObjectWithConditions + ?Sized>(obj: &T) -> bool {
    is_true(obj, STALLED_CONDITION)
}

#[must_use]
pub fn is_reconciling<T: ObjectWithConditions + ?Sized>(obj: &T) -> bool {
    is_true(obj, RECONCILING_CONDITION)
}

/// Set a condition, replacing any existing condition of the same type in place.
///
/// The condition is stamped with the resource generation. `lastTransitionTime`
/// is carried over from the existing condition when the status is unchanged.
pub fn set<T: ObjectWithConditions + ?Sized>(obj: &mut T, mut condition: Condition) {
    condition.observed_generation = obj.generation();
    let now = Utc::now();

    let conditions = obj.conditions_mut();
    if let Some(existing) = conditions
        .iter_mut()
        .find(|c| c.r#type == condition.r#type)
    {
        if existing.status == condition.status {
            condition.last_transition_time = existing.last_transition_time.or(Some(now));
        } else {
            condition.last_transition_time = Some(now);
        }
        if *existing != condition {
            debug!(
                condition = %condition.r#type,
                status = %condition.status,
                reason = %condition.reason,
                "Updating condition"
            );
            *existing = condition;
        }
        return;
    }

    if condition.last_transition_time.is_none() {
        condition.last_transition_time = Some(now);
    }
    debug!(
        condition = %condition.r#type,
        status = %condition.status,
        reason = %condition.reason,
        "Adding condition"
    );
    conditions.push(condition);
}

/// Remove a condition by type. Returns whether anything was removed.
pub fn delete<T: ObjectWithConditions + ?Sized>(obj: &mut T, condition_type: &str) -> bool {
    let conditions = obj.conditions_mut();
    let before = conditions.len();
    conditions.retain(|c| c.r#type != condition_type);
    let removed = conditions.len() != before;
    if removed {
        debug!(condition = %condition_type, "Removed condition");
    }
    removed
}

pub fn mark_true<T: ObjectWithConditions + ?Sized>(
    obj: &mut T,
    condition_type: &str,
    reason: &str,
    message: impl Into<String>,
) {
    set(obj, Condition::true_condition(condition_type, reason, message));
}

pub fn mark_false<T: ObjectWithConditions + ?Sized>(
    obj: &mut T,
    condition_type: &str,
    reason: &str,
    message: impl Into<String>,
) {
    set(obj, Condition::false_condition(condition_type, reason, message));
}

pub fn mark_unknown<T: ObjectWithConditions + ?Sized>(
    obj: &mut T,
    condition_type: &str,
    reason: &str,
    message: impl Into<String>,
) {
    set(obj, Condition::unknown_condition(condition_type, reason, message));
}

/// `Reconciling=True` with the given reason and message
pub fn mark_reconciling<T: ObjectWithConditions + ?Sized>(
    obj: &mut T,
    reason: &str,
    message: impl Into<String>,
) {
    mark_true(obj, RECONCILING_CONDITION, reason, message);
}

/// `Stalled=True` with the given reason and message.
/// A stalled resource is not progressing, so Reconciling is removed.
pub fn mark_stalled<T: ObjectWithConditions + ?Sized>(
    obj: &mut T,
    reason: &str,
    message: impl Into<String>,
) {
    delete(obj, RECONCILING_CONDITION);
    mark_true(obj, STALLED_CONDITION, reason, message);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Default)]
    struct Obj {
        generation: Option<i64>,
        conditions: Vec<Condition>,
    }

    impl ObjectWithConditions for Obj {
        fn conditions(&self) -> &[Condition] {
            &self.conditions
        }

        fn conditions_mut(&mut self) -> &mut Vec<Condition> {
            &mut self.conditions
        }

        fn generation(&self) -> Option<i64> {
            self.generation
        }
    }

    #[test]
    fn test_set_adds_condition_with_generation_and_time() {
        let mut obj = Obj {
            generation: Some(3),
            ..Default::default()
        };
        mark_true(&mut obj, READY_CONDITION, SUCCEEDED_REASON, "done");

        let ready = get(&obj, READY_CONDITION).unwrap();
        assert_eq!(ready.status, ConditionStatus::True);
        assert_eq!(ready.observed_generation, Some(3));
        assert!(ready.last_transition_time.is_some());
    }

    #[test]
    fn test_set_keeps_transition_time_when_status_unchanged() {
        let mut obj = Obj::default();
        mark_false(&mut obj, READY_CONDITION, "A", "first");
        let first = get(&obj, READY_CONDITION).unwrap().last_transition_time;

        mark_false(&mut obj, READY_CONDITION, "B", "second");
        let ready = get(&obj, READY_CONDITION).unwrap();
        assert_eq!(ready.reason, "B");
        assert_eq!(ready.message, "second");
        assert_eq!(ready.last_transition_time, first);
    }

    #[test]
    fn test_set_moves_transition_time_on_status_change() {
        let mut obj = Obj::default();
        let epoch = DateTime::from_timestamp(0, 0);
        let mut old = Condition::false_condition(READY_CONDITION, "A", "a");
        old.last_transition_time = epoch;
        obj.conditions.push(old);

        mark_true(&mut obj, READY_CONDITION, SUCCEEDED_REASON, "ok");
        let ready = get(&obj, READY_CONDITION).unwrap();
        assert!(ready.last_transition_time.is_some());
        assert_ne!(ready.last_transition_time, epoch);
    }

    #[test]
    fn test_set_replaces_in_place() {
        let mut obj = Obj::default();
        mark_true(&mut obj, "A", "R", "");
        mark_true(&mut obj, "B", "R", "");
        mark_false(&mut obj, "A", "R", "");

        let types: Vec<&str> = obj.conditions.iter().map(|c| c.r#type.as_str()).collect();
        assert_eq!(types, vec!["A", "B"]);
        assert!(is_false(&obj, "A"));
    }

    #[test]
    fn test_delete() {
        let mut obj = Obj::default();
        mark_true(&mut obj, STALLED_CONDITION, "R", "");
        assert!(delete(&mut obj, STALLED_CONDITION));
        assert!(!delete(&mut obj, STALLED_CONDITION));
        assert!(!has(&obj, STALLED_CONDITION));
    }

    #[test]
    fn test_mark_stalled_removes_reconciling() {
        let mut obj = Obj::default();
        mark_reconciling(&mut obj, PROGRESSING_REASON, "working");
        mark_stalled(&mut obj, "InvalidURL", "invalid URL");

        assert!(is_stalled(&obj));
        assert!(!is_reconciling(&obj));
    }

    #[test]
    fn test_condition_status_serializes_as_kubernetes_strings() {
        let c = Condition::unknown_condition(READY_CONDITION, "R", "m");
        let json = serde_json::to_value(&c).unwrap();
        assert_eq!(json["status"], "Unknown");
        assert_eq!(json["type"], "Ready");
        assert!(json.get("observedGeneration").is_none());
    }
}
