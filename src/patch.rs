//! # Patch Options
//!
//! Metadata needed to persist a status snapshot: the field manager, the
//! condition types this controller owns, and whether the snapshot may claim
//! an observed generation.
//!
//! Only terminal states (`Ready=True` or `Stalled=True`) publish
//! `status.observedGeneration`. An in-progress snapshot must not claim it,
//! since the generation may still be mid-reconcile.

use crate::conditions::{self, Condition, ObjectWithConditions};
use kube::core::params::{Patch, PatchParams};
use serde_json::{json, Map, Value};

/// One option for the status patch helper
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PatchOption {
    /// Field manager for server-side apply
    FieldOwner(String),
    /// Condition types owned by this controller; others are left to their owners
    OwnedConditions(Vec<String>),
    /// Publish `status.observedGeneration`
    IncludeStatusObservedGeneration,
}

impl PatchOption {
    pub fn apply_to_helper(&self, opts: &mut HelperOptions) {
        match self {
            PatchOption::FieldOwner(owner) => opts.field_owner.clone_from(owner),
            PatchOption::OwnedConditions(owned) => opts.owned_conditions.clone_from(owned),
            PatchOption::IncludeStatusObservedGeneration => {
                opts.include_status_observed_generation = true;
            }
        }
    }
}

/// Effective settings after applying a list of [`PatchOption`]s
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HelperOptions {
    pub field_owner: String,
    pub owned_conditions: Vec<String>,
    pub include_status_observed_generation: bool,
}

impl HelperOptions {
    /// Fold options in order; later options win.
    #[must_use]
    pub fn from_options(opts: &[PatchOption]) -> Self {
        let mut helper = Self::default();
        for opt in opts {
            opt.apply_to_helper(&mut helper);
        }
        helper
    }

    /// Server-side apply parameters for the status patch
    #[must_use]
    pub fn patch_params(&self) -> PatchParams {
        if self.field_owner.is_empty() {
            PatchParams::default()
        } else {
            PatchParams::apply(&self.field_owner)
        }
    }

    fn owns(&self, condition: &Condition) -> bool {
        self.owned_conditions.is_empty()
            || self.owned_conditions.iter().any(|o| *o == condition.r#type)
    }

    /// Render the `status` merge patch for `obj`.
    ///
    /// Contains the owned conditions (all of them when none are owned), the
    /// acknowledged reconcile request, and the observed generation when allowed.
    pub fn status_patch<T: ObjectWithConditions + ?Sized>(&self, obj: &T) -> Value {
        let owned: Vec<&Condition> = obj.conditions().iter().filter(|c| self.owns(c)).collect();

        let mut status = Map::new();
        status.insert("conditions".to_string(), json!(owned));
        if let Some(handled) = obj.last_handled_reconcile_at() {
            status.insert("lastHandledReconcileAt".to_string(), json!(handled));
        }
        if self.include_status_observed_generation {
            if let Some(generation) = obj.generation() {
                status.insert("observedGeneration".to_string(), json!(generation));
            }
        }

        json!({ "status": status })
    }

    /// [`Self::status_patch`] as a JSON merge patch
    pub fn merge_patch<T: ObjectWithConditions + ?Sized>(&self, obj: &T) -> Patch<Value> {
        Patch::Merge(self.status_patch(obj))
    }
}

/// Append the options needed to persist `obj`'s status.
///
/// Always appends the owned conditions and field owner (either may be empty);
/// appends [`PatchOption::IncludeStatusObservedGeneration`] only for terminal
/// states.
pub fn add_patch_options<T, I, S>(
    obj: &T,
    mut opts: Vec<PatchOption>,
    owned_conditions: I,
    field_owner: &str,
) -> Vec<PatchOption>
where
    T: ObjectWithConditions + ?Sized,
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    opts.push(PatchOption::OwnedConditions(
        owned_conditions.into_iter().map(Into::into).collect(),
    ));
    opts.push(PatchOption::FieldOwner(field_owner.to_string()));

    if conditions::is_stalled(obj) || conditions::is_ready(obj) {
        opts.push(PatchOption::IncludeStatusObservedGeneration);
    }
    opts
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::conditions::{
        mark_false, mark_reconciling, mark_stalled, mark_true, READY_CONDITION,
        STALLED_CONDITION, SUCCEEDED_REASON,
    };

    #[derive(Debug, Default)]
    struct Obj {
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
            Some(7)
        }
    }

    fn helper(obj: &Obj, owned: &[&str], owner: &str) -> HelperOptions {
        HelperOptions::from_options(&add_patch_options(obj, Vec::new(), owned.iter().copied(), owner))
    }

    #[test]
    fn test_no_conditions_no_field_owner() {
        let h = helper(&Obj::default(), &[], "");
        assert_eq!(h, HelperOptions::default());
    }

    #[test]
    fn test_owned_conditions_and_field_owner() {
        let h = helper(&Obj::default(), &["A", "B"], "foo-ctrl");
        assert_eq!(h.field_owner, "foo-ctrl");
        assert_eq!(h.owned_conditions, vec!["A".to_string(), "B".to_string()]);
        assert!(!h.include_status_observed_generation);
    }

    #[test]
    fn test_reconciling_not_ready_omits_observed_generation() {
        let mut obj = Obj::default();
        mark_reconciling(&mut obj, "SomeReasonX", "some msg X");
        mark_false(&mut obj, READY_CONDITION, "SomeReasonY", "some msg Y");
        assert!(!helper(&obj, &[], "").include_status_observed_generation);
    }

    #[test]
    fn test_stalled_not_ready_includes_observed_generation() {
        let mut obj = Obj::default();
        mark_stalled(&mut obj, "SomeReasonX", "some msg X");
        mark_false(&mut obj, READY_CONDITION, "SomeReasonY", "some msg Y");
        assert!(helper(&obj, &[], "").include_status_observed_generation);
    }

    #[test]
    fn test_ready_includes_observed_generation() {
        let mut obj = Obj::default();
        mark_true(&mut obj, READY_CONDITION, SUCCEEDED_REASON, "success");
        assert!(helper(&obj, &[], "").include_status_observed_generation);
    }

    #[test]
    fn test_base_options_are_kept_in_front() {
        let obj = Obj::default();
        let opts = add_patch_options(
            &obj,
            vec![PatchOption::FieldOwner("base".to_string())],
            ["A"],
            "foo-ctrl",
        );
        assert_eq!(opts.first(), Some(&PatchOption::FieldOwner("base".to_string())));
        assert_eq!(HelperOptions::from_options(&opts).field_owner, "foo-ctrl");
    }

    #[test]
    fn test_status_patch_filters_owned_conditions() {
        let mut obj = Obj::default();
        mark_stalled(&mut obj, "SomeReasonX", "some msg X");
        mark_true(&mut obj, "Foreign", "R", "owned by someone else");

        let h = helper(&obj, &[STALLED_CONDITION, READY_CONDITION], "foo-ctrl");
        let patch = h.status_patch(&obj);
        let conditions = patch["status"]["conditions"].as_array().unwrap();
        assert_eq!(conditions.len(), 1);
        assert_eq!(conditions[0]["type"], "Stalled");
        assert_eq!(patch["status"]["observedGeneration"], 7);
    }

    #[test]
    fn test_status_patch_omits_observed_generation_when_in_progress() {
        let mut obj = Obj::default();
        mark_reconciling(&mut obj, "Progressing", "working");
        let patch = helper(&obj, &[], "").status_patch(&obj);
        assert!(patch["status"].get("observedGeneration").is_none());
    }

    #[test]
    fn test_patch_params_use_field_owner() {
        let h = HelperOptions {
            field_owner: "foo-ctrl".to_string(),
            ..Default::default()
        };
        assert_eq!(h.patch_params().field_manager.as_deref(), Some("foo-ctrl"));
        assert!(HelperOptions::default().patch_params().field_manager.is_none());
    }
}
