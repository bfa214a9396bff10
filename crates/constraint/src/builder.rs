//! Stateless builders that turn a single comparison into a grouped constraint.
//!
//! Read `VALUE.greater_than(0)` as "value > 0" and `LEN.max_len(20)` as
//! "len(value) <= 20". Each call returns a fresh [`Interval`] or [`Length`]
//! that can be narrowed further.
//!
//! ```
//! use nebula_constraint::{Constraint, Grouped, LEN, VALUE};
//!
//! let score = VALUE.greater_than(0).at_most(100).unwrap();
//! let facts: Vec<_> = score.expand().collect();
//! assert_eq!(facts, vec![Constraint::gt(0), Constraint::le(100)]);
//!
//! let code = LEN.exact_len(6).unwrap();
//! assert_eq!(code, 6_usize);
//! ```
//!
//! There is deliberately no builder for `MultipleOf`.

use crate::error::Result;
use crate::interval::{self, Interval};
use crate::length::{Length, LengthBound};

// ============================================================================
// NUMERIC BUILDER
// ============================================================================

/// Builds an [`Interval`] from one comparison against the value.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct NumericBuilder;

/// The value being constrained, for ordering comparisons.
pub const VALUE: NumericBuilder = NumericBuilder;

impl NumericBuilder {
    /// `value < bound`.
    pub fn less_than<T: PartialOrd>(self, bound: T) -> Interval<T> {
        interval::less_than(bound)
    }

    /// `value <= bound`.
    pub fn at_most<T: PartialOrd>(self, bound: T) -> Interval<T> {
        interval::at_most(bound)
    }

    /// `value == bound`, i.e. both `ge` and `le` set to `bound`.
    pub fn equal_to<T: PartialOrd + Clone>(self, bound: T) -> Interval<T> {
        interval::exactly(bound)
    }

    /// `value >= bound`.
    pub fn at_least<T: PartialOrd>(self, bound: T) -> Interval<T> {
        interval::at_least(bound)
    }

    /// `value > bound`.
    pub fn greater_than<T: PartialOrd>(self, bound: T) -> Interval<T> {
        interval::greater_than(bound)
    }
}

// ============================================================================
// LENGTH BUILDER
// ============================================================================

/// Builds a [`Length`] from one comparison against the value's length.
///
/// Strict comparisons are converted to inclusive bounds right away.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct LengthBuilder;

/// The length of the value being constrained.
pub const LEN: LengthBuilder = LengthBuilder;

impl LengthBuilder {
    /// `len(value) < n`, stored as `max_length = n - 1`.
    pub fn shorter_than(self, n: impl LengthBound) -> Result<Length> {
        Length::unbounded().shorter_than(n)
    }

    /// `len(value) <= n`.
    pub fn max_len(self, n: impl LengthBound) -> Result<Length> {
        Length::unbounded().max_len(n)
    }

    /// `len(value) == n`.
    pub fn exact_len(self, n: impl LengthBound) -> Result<Length> {
        Length::unbounded().exact_len(n)
    }

    /// `len(value) >= n`.
    pub fn min_len(self, n: impl LengthBound) -> Result<Length> {
        Length::unbounded().min_len(n)
    }

    /// `len(value) > n`, stored as `min_length = n + 1`.
    pub fn longer_than(self, n: impl LengthBound) -> Result<Length> {
        Length::unbounded().longer_than(n)
    }
}

// ============================================================================
// TESTS
// ============================================================================
