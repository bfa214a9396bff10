//! Atomic constraints: single, non-decomposable facts about a value.

use std::fmt::{self, Display};
use std::ops::Rem;

use crate::predicate::Predicate;
use crate::timezone::TimezoneRequirement;

// ============================================================================
// CONSTRAINT
// ============================================================================

/// A single validation fact about a value of type `T`.
///
/// The set of kinds is closed. Grouped constraints such as
/// [`Interval`](crate::Interval) and [`Length`](crate::Length) always expand
/// into these.
///
/// Ordering bounds work with any `T: PartialOrd`: numbers, dates and times,
/// strings, sets, and so on.
///
/// # Examples
///
/// ```
/// use nebula_constraint::Constraint;
///
/// let positive = Constraint::gt(0);
/// assert_eq!(positive, Constraint::GreaterThan(0));
/// assert_eq!(positive.to_string(), "> 0");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Constraint<T> {
    /// The value must be strictly greater than the bound.
    GreaterThan(T),
    /// The value must be greater than or equal to the bound.
    GreaterOrEqual(T),
    /// The value must be strictly less than the bound.
    LessThan(T),
    /// The value must be less than or equal to the bound.
    LessOrEqual(T),
    /// The value must be a multiple of the factor.
    ///
    /// Two readings are common and they disagree on non-integers:
    ///
    /// 1. remainder semantics, `value % factor == 0`;
    /// 2. truncation semantics, `trunc(value / factor) == value / factor`
    ///    (JSON Schema).
    ///
    /// Only the factor is recorded here. Consumers must document which
    /// reading they implement, see
    /// [`MultipleOfSemantics`](crate::interpretation::MultipleOfSemantics).
    MultipleOf(T),
    /// The value's length must be at least this (inclusive).
    MinLength(usize),
    /// The value's length must be at most this (inclusive).
    MaxLength(usize),
    /// The date-time value must satisfy this timezone requirement.
    Timezone(TimezoneRequirement),
    /// The value must pass an arbitrary predicate.
    Predicate(Predicate<T>),
}

impl<T> Constraint<T> {
    /// `value > bound`.
    pub fn gt(bound: T) -> Self
    where
        T: PartialOrd,
    {
        Self::GreaterThan(bound)
    }

    /// `value >= bound`.
    pub fn ge(bound: T) -> Self
    where
        T: PartialOrd,
    {
        Self::GreaterOrEqual(bound)
    }

    /// `value < bound`.
    pub fn lt(bound: T) -> Self
    where
        T: PartialOrd,
    {
        Self::LessThan(bound)
    }

    /// `value <= bound`.
    pub fn le(bound: T) -> Self
    where
        T: PartialOrd,
    {
        Self::LessOrEqual(bound)
    }

    /// The value must be a multiple of `factor`.
    pub fn multiple_of(factor: T) -> Self
    where
        T: Rem<Output = T>,
    {
        Self::MultipleOf(factor)
    }

    /// `len(value) >= min`.
    pub fn min_length(min: usize) -> Self {
        Self::MinLength(min)
    }

    /// `len(value) <= max`.
    pub fn max_length(max: usize) -> Self {
        Self::MaxLength(max)
    }

    /// The value must satisfy a timezone requirement.
    pub fn timezone(requirement: impl Into<TimezoneRequirement>) -> Self {
        Self::Timezone(requirement.into())
    }

    /// The value must pass `predicate`.
    pub fn predicate(predicate: Predicate<T>) -> Self {
        Self::Predicate(predicate)
    }

    /// The kind of this constraint, without its payload.
    pub fn kind(&self) -> ConstraintKind {
        match self {
            Self::GreaterThan(_) => ConstraintKind::GreaterThan,
            Self::GreaterOrEqual(_) => ConstraintKind::GreaterOrEqual,
            Self::LessThan(_) => ConstraintKind::LessThan,
            Self::LessOrEqual(_) => ConstraintKind::LessOrEqual,
            Self::MultipleOf(_) => ConstraintKind::MultipleOf,
            Self::MinLength(_) => ConstraintKind::MinLength,
            Self::MaxLength(_) => ConstraintKind::MaxLength,
            Self::Timezone(_) => ConstraintKind::Timezone,
            Self::Predicate(_) => ConstraintKind::Predicate,
        }
    }

    /// The ordering bound, for the four comparison kinds.
    pub fn bound(&self) -> Option<&T> {
        match self {
            Self::GreaterThan(b)
            | Self::GreaterOrEqual(b)
            | Self::LessThan(b)
            | Self::LessOrEqual(b) => Some(b),
            _ => None,
        }
    }
}

impl<T: Display> Display for Constraint<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::GreaterThan(b) => write!(f, "> {b}"),
            Self::GreaterOrEqual(b) => write!(f, ">= {b}"),
            Self::LessThan(b) => write!(f, "< {b}"),
            Self::LessOrEqual(b) => write!(f, "<= {b}"),
            Self::MultipleOf(factor) => write!(f, "% {factor}"),
            Self::MinLength(n) => write!(f, "len >= {n}"),
            Self::MaxLength(n) => write!(f, "len <= {n}"),
            Self::Timezone(tz) => write!(f, "tz {tz}"),
            Self::Predicate(p) => write!(f, "predicate {p}"),
        }
    }
}

// ============================================================================
// CONSTRAINT KIND
// ============================================================================

/// Payload-free discriminant of [`Constraint`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ConstraintKind {
    /// [`Constraint::GreaterThan`]
    GreaterThan,
    /// [`Constraint::GreaterOrEqual`]
    GreaterOrEqual,
    /// [`Constraint::LessThan`]
    LessThan,
    /// [`Constraint::LessOrEqual`]
    LessOrEqual,
    /// [`Constraint::MultipleOf`]
    MultipleOf,
    /// [`Constraint::MinLength`]
    MinLength,
    /// [`Constraint::MaxLength`]
    MaxLength,
    /// [`Constraint::Timezone`]
    Timezone,
    /// [`Constraint::Predicate`]
    Predicate,
}

impl ConstraintKind {
    /// Stable snake-case name, suitable as a log field or map key.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::GreaterThan => "gt",
            Self::GreaterOrEqual => "ge",
            Self::LessThan => "lt",
            Self::LessOrEqual => "le",
            Self::MultipleOf => "multiple_of",
            Self::MinLength => "min_length",
            Self::MaxLength => "max_length",
            Self::Timezone => "timezone",
            Self::Predicate => "predicate",
        }
    }

    /// Whether this kind bounds the value from below or above.
    #[must_use]
    pub fn is_ordering(self) -> bool {
        matches!(
            self,
            Self::GreaterThan | Self::GreaterOrEqual | Self::LessThan | Self::LessOrEqual
        )
    }
}

impl Display for ConstraintKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use std::collections::{BTreeSet, HashSet};

    use super::*;

    #[test]
    fn test_structural_equality() {
        assert_eq!(Constraint::gt(3), Constraint::gt(3));
        assert_eq!(Constraint::<i32>::min_length(2), Constraint::min_length(2));
        assert_ne!(Constraint::gt(3), Constraint::ge(3));
        assert_ne!(Constraint::lt(3), Constraint::lt(4));
    }

    #[test]
    fn test_hash_is_structural() {
        let set: HashSet<Constraint<i64>> = [
            Constraint::gt(1),
            Constraint::gt(1),
            Constraint::multiple_of(5),
            Constraint::multiple_of(5),
        ]
        .into_iter()
        .collect();
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn test_any_ordered_bound() {
        let word = Constraint::lt("zebra".to_string());
        assert_eq!(word.bound().map(String::as_str), Some("zebra"));

        let set = Constraint::ge(BTreeSet::from([1, 2]));
        assert_eq!(set.kind(), ConstraintKind::GreaterOrEqual);

        let date = chrono::NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        assert_eq!(Constraint::le(date).bound(), Some(&date));
    }

    #[test]
    fn test_display() {
        assert_eq!(Constraint::gt(3).to_string(), "> 3");
        assert_eq!(Constraint::ge(3).to_string(), ">= 3");
        assert_eq!(Constraint::lt(3).to_string(), "< 3");
        assert_eq!(Constraint::le(3).to_string(), "<= 3");
        assert_eq!(Constraint::multiple_of(3).to_string(), "% 3");
        assert_eq!(Constraint::<i32>::min_length(2).to_string(), "len >= 2");
        assert_eq!(Constraint::<i32>::max_length(10).to_string(), "len <= 10");
        assert_eq!(
            Constraint::<i32>::timezone(TimezoneRequirement::Naive).to_string(),
            "tz naive"
        );
        assert_eq!(
            Constraint::predicate(Predicate::<i32>::named("even", |v| v % 2 == 0)).to_string(),
            "predicate even"
        );
    }

    #[test]
    fn test_kind_names() {
        assert_eq!(Constraint::gt(1).kind().as_str(), "gt");
        assert_eq!(Constraint::multiple_of(1).kind().as_str(), "multiple_of");
        assert_eq!(Constraint::<u8>::max_length(1).kind().to_string(), "max_length");
        assert!(ConstraintKind::LessThan.is_ordering());
        assert!(!ConstraintKind::MinLength.is_ordering());
    }

    #[test]
    fn test_bound_only_for_ordering_kinds() {
        assert_eq!(Constraint::le(7).bound(), Some(&7));
        assert_eq!(Constraint::multiple_of(7).bound(), None);
        assert_eq!(Constraint::<i32>::min_length(7).bound(), None);
    }
}
