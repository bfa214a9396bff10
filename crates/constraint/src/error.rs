//! Error type for constraint construction and narrowing.

/// Error type for building and narrowing constraints.
///
/// Covers conflicting interval narrowings, non-integer or negative length
/// bounds, inconsistent length ranges, and unknown timezone identifiers.
/// Every error is deterministic: the same call with the same arguments
/// always fails the same way.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConstraintError {
    /// A bound was applied to a side of an interval that is already fixed.
    #[error("{constraint} is incompatible with `{attempted}`")]
    Conflict {
        /// Rendering of the interval being narrowed.
        constraint: String,
        /// The rejected operation, e.g. `>= 3`.
        attempted: String,
    },

    /// A length bound was given a value that is not an integer.
    #[error("length bounds must be integers, got {got}")]
    NonIntegerBound {
        /// Description of the rejected value and its type.
        got: String,
    },

    /// A length bound was given a negative integer.
    #[error("length bounds must be non-negative, got {got}")]
    NegativeLength {
        /// The rejected value.
        got: i128,
    },

    /// The minimum length exceeds the maximum length.
    #[error("minimum length {min} exceeds maximum length {max}")]
    InvertedLength {
        /// Inclusive minimum.
        min: usize,
        /// Inclusive maximum.
        max: usize,
    },

    /// No length can satisfy the requested bound.
    #[error("unsatisfiable length bound: {reason}")]
    Unsatisfiable {
        /// Why the bound cannot be met.
        reason: String,
    },

    /// A timezone name is not a known IANA identifier.
    #[error("unknown timezone `{name}`")]
    UnknownTimezone {
        /// The rejected name.
        name: String,
    },
}

impl ConstraintError {
    /// Broad error category for grouping in logs and metrics.
    #[must_use]
    pub fn category(&self) -> &str {
        match self {
            Self::Conflict { .. } => "conflict",
            Self::NonIntegerBound { .. } => "type",
            Self::NegativeLength { .. } => "type",
            Self::InvertedLength { .. } => "value",
            Self::Unsatisfiable { .. } => "value",
            Self::UnknownTimezone { .. } => "value",
        }
    }

    /// Machine-readable error code for programmatic handling.
    #[must_use]
    pub fn code(&self) -> &str {
        match self {
            Self::Conflict { .. } => "CONSTRAINT_CONFLICT",
            Self::NonIntegerBound { .. } => "CONSTRAINT_NON_INTEGER",
            Self::NegativeLength { .. } => "CONSTRAINT_NEGATIVE_LENGTH",
            Self::InvertedLength { .. } => "CONSTRAINT_INVERTED_LENGTH",
            Self::Unsatisfiable { .. } => "CONSTRAINT_UNSATISFIABLE",
            Self::UnknownTimezone { .. } => "CONSTRAINT_UNKNOWN_TZ",
        }
    }

    /// Whether the caller passed a value of the wrong kind, as opposed to a
    /// well-typed value that clashes with the constraint.
    #[must_use]
    pub fn is_type_error(&self) -> bool {
        matches!(
            self,
            Self::NonIntegerBound { .. } | Self::NegativeLength { .. }
        )
    }

    pub(crate) fn conflict(constraint: impl Into<String>, attempted: impl Into<String>) -> Self {
        Self::Conflict {
            constraint: constraint.into(),
            attempted: attempted.into(),
        }
    }

    pub(crate) fn non_integer(value: impl std::fmt::Debug, type_name: &str) -> Self {
        Self::NonIntegerBound {
            got: format!("{value:?} (type {type_name})"),
        }
    }
}

/// Result alias used throughout the crate.
pub type Result<T, E = ConstraintError> = std::result::Result<T, E>;
