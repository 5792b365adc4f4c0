//! # Condition Summaries
//!
//! Reduces a prioritized list of fine-grained conditions into one target
//! condition.
//!
//! Each summarized type has a [`Polarity`]. For positive types `False` is the
//! bad state; for negative types (e.g. `Stalled`, `FetchFailed`) `True` is.
//! Walking the summarize list in priority order, the first bad condition wins
//! and the target becomes `False` with that condition's reason and message.
//! Otherwise the target becomes `True`. When none of the summarized types is
//! present the target is left alone.

use super::{get, Condition, ConditionStatus, ObjectWithConditions, SUCCEEDED_REASON};
use crate::error::ConditionSetError;
use std::collections::HashSet;

/// Which status of a condition type means "bad"
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Polarity {
    /// `False` is bad (e.g. `ArtifactInStorage`)
    Positive,
    /// `True` is bad (e.g. `Stalled`, `FetchFailed`)
    Negative,
}

impl Polarity {
    #[must_use]
    pub fn is_bad(self, status: ConditionStatus) -> bool {
        match self {
            Polarity::Positive => status == ConditionStatus::False,
            Polarity::Negative => status == ConditionStatus::True,
        }
    }
}

/// A validated rule for deriving one target condition from others.
///
/// Immutable once built. Polarity is resolved per summarized type at
/// construction so summarizing is a single ordered walk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConditionSet {
    target: String,
    owned: Vec<String>,
    summarize: Vec<(String, Polarity)>,
}

impl ConditionSet {
    /// Build a condition set.
    ///
    /// # Errors
    ///
    /// Rejects an empty target, a target that summarizes itself, duplicate
    /// summarize entries, and negative-polarity types missing from `summarize`.
    pub fn new<O, S, N>(
        target: impl Into<String>,
        owned: O,
        summarize: S,
        negative_polarity: N,
    ) -> Result<Self, ConditionSetError>
    where
        O: IntoIterator,
        O::Item: Into<String>,
        S: IntoIterator,
        S::Item: Into<String>,
        N: IntoIterator,
        N::Item: Into<String>,
    {
        let target = target.into();
        if target.is_empty() {
            return Err(ConditionSetError::EmptyTarget);
        }

        let negative: HashSet<String> = negative_polarity.into_iter().map(Into::into).collect();

        let mut seen = HashSet::new();
        let mut ordered = Vec::new();
        for condition in summarize.into_iter().map(Into::into) {
            if condition == target {
                return Err(ConditionSetError::TargetInSummarize { target });
            }
            if !seen.insert(condition.clone()) {
                return Err(ConditionSetError::DuplicateSummarize { condition });
            }
            let polarity = if negative.contains(&condition) {
                Polarity::Negative
            } else {
                Polarity::Positive
            };
            ordered.push((condition, polarity));
        }

        if let Some(condition) = negative.into_iter().find(|c| !seen.contains(c)) {
            return Err(ConditionSetError::PolarityNotSummarized { condition });
        }

        Ok(Self {
            target,
            owned: owned.into_iter().map(Into::into).collect(),
            summarize: ordered,
        })
    }

    #[must_use]
    pub fn target(&self) -> &str {
        &self.target
    }

    #[must_use]
    pub fn owned(&self) -> &[String] {
        &self.owned
    }

    /// Summarized types with their polarity, highest priority first
    pub fn summarized(&self) -> impl Iterator<Item = (&str, Polarity)> + '_ {
        self.summarize.iter().map(|(c, p)| (c.as_str(), *p))
    }

    #[must_use]
    pub fn polarity(&self, condition_type: &str) -> Option<Polarity> {
        self.summarized()
            .find(|(c, _)| *c == condition_type)
            .map(|(_, p)| p)
    }

    /// Whether this set may consult the given type: owned types and the target
    #[must_use]
    pub fn considers(&self, condition_type: &str) -> bool {
        condition_type == self.target || self.owned.iter().any(|o| o == condition_type)
    }
}

/// Compute the target condition for `set` from the current conditions of `obj`.
///
/// Pure: depends only on the condition list and the set. Returns `None` when
/// none of the summarized types is present.
pub fn summarize<T: ObjectWithConditions + ?Sized>(obj: &T, set: &ConditionSet) -> Option<Condition> {
    let mut present = false;
    let mut first_positive_true: Option<&Condition> = None;

    for (condition_type, polarity) in set.summarized() {
        if !set.considers(condition_type) {
            continue;
        }
        let Some(condition) = get(obj, condition_type) else {
            continue;
        };
        present = true;

        if polarity.is_bad(condition.status) {
            return Some(Condition::false_condition(
                set.target(),
                condition.reason.clone(),
                condition.message.clone(),
            ));
        }
        if polarity == Polarity::Positive && condition.is_true() && first_positive_true.is_none() {
            first_positive_true = Some(condition);
        }
    }

    if !present {
        return None;
    }

    Some(match first_positive_true {
        Some(source) => Condition::true_condition(
            set.target(),
            source.reason.clone(),
            source.message.clone(),
        ),
        None => Condition::true_condition(set.target(), SUCCEEDED_REASON, ""),
    })
}

/// Summarize and write the target condition. Returns whether the target was written.
pub fn set_summary<T: ObjectWithConditions + ?Sized>(obj: &mut T, set: &ConditionSet) -> bool {
    match summarize(obj, set) {
        Some(condition) => {
            super::set(obj, condition);
            true
        }
        None => false,
    }
}
