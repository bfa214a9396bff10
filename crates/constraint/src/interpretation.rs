//! Consumer-side interpretation choices.
//!
//! Constraint metadata leaves a few questions open on purpose: what
//! "multiple of" means for non-integers, and what to do when a predicate
//! panics. A consumer (validator, schema generator) records its answers in
//! an [`Interpretation`] so they are explicit and can be loaded from
//! configuration. Nothing in this crate reads it.
//!
//! ```
//! use nebula_constraint::interpretation::{
//!     Interpretation, MultipleOfSemantics, PredicateFailurePolicy,
//! };
//!
//! let json_schema = Interpretation::from_json(r#"{ "multiple_of": "truncation" }"#).unwrap();
//! assert_eq!(json_schema.multiple_of, MultipleOfSemantics::Truncation);
//! assert_eq!(json_schema.predicate_failure, PredicateFailurePolicy::Propagate);
//! ```

use serde::{Deserialize, Serialize};

/// How a consumer reads [`Constraint::MultipleOf`](crate::Constraint::MultipleOf).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MultipleOfSemantics {
    /// `value % factor == 0`.
    Remainder,
    /// `trunc(value / factor) == value / factor`, as in JSON Schema.
    Truncation,
}

/// What a consumer does when a [`Predicate`](crate::Predicate) panics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PredicateFailurePolicy {
    /// Let the panic unwind to the caller.
    #[default]
    Propagate,
    /// Treat the value as invalid.
    Reject,
    /// Ignore the predicate for this value.
    Skip,
}

/// A consumer's answers to the questions constraint metadata leaves open.
///
/// `multiple_of` has no default: every consumer must pick a reading.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Interpretation {
    /// Reading of `MultipleOf`.
    pub multiple_of: MultipleOfSemantics,
    /// Handling of panicking predicates.
    #[serde(default)]
    pub predicate_failure: PredicateFailurePolicy,
}

impl Interpretation {
    /// Creates an interpretation with the default predicate policy.
    #[must_use]
    pub fn new(multiple_of: MultipleOfSemantics) -> Self {
        Self {
            multiple_of,
            predicate_failure: PredicateFailurePolicy::default(),
        }
    }

    /// Sets the predicate failure policy.
    #[must_use]
    pub fn with_predicate_failure(mut self, policy: PredicateFailurePolicy) -> Self {
        self.predicate_failure = policy;
        self
    }

    /// Loads an interpretation from a JSON document.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}
