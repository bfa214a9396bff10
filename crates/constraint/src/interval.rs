//! Lower and upper bounds combined in one grouped constraint.

use std::fmt::Debug;
use std::ops::{Bound, Range, RangeFrom, RangeInclusive, RangeTo, RangeToInclusive};

use crate::atomic::Constraint;
use crate::error::{ConstraintError, Result};
use crate::grouped::Grouped;

// ============================================================================
// INTERVAL
// ============================================================================

/// Inclusive and/or exclusive bounds on an ordered value.
///
/// Each field is interpreted like the matching atomic constraint. Any subset
/// may be set; [`expand`](Grouped::expand) emits whatever is present in the
/// order `gt`, `ge`, `lt`, `le`.
///
/// Narrowing methods never mutate: they return a new interval, or a
/// [`ConstraintError::Conflict`] when the side being narrowed is already
/// bounded.
///
/// # Examples
///
/// ```
/// use nebula_constraint::{Constraint, Grouped, Interval, VALUE};
///
/// let percent = VALUE.at_least(0).at_most(100).unwrap();
/// assert_eq!(percent, Interval { ge: Some(0), le: Some(100), ..Interval::default() });
///
/// let facts: Vec<_> = percent.expand().collect();
/// assert_eq!(facts, vec![Constraint::ge(0), Constraint::le(100)]);
///
/// // The lower side is already fixed.
/// assert!(percent.greater_than(5).is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Interval<T> {
    /// Exclusive lower bound.
    pub gt: Option<T>,
    /// Inclusive lower bound.
    pub ge: Option<T>,
    /// Exclusive upper bound.
    pub lt: Option<T>,
    /// Inclusive upper bound.
    pub le: Option<T>,
}

impl<T> Default for Interval<T> {
    fn default() -> Self {
        Self {
            gt: None,
            ge: None,
            lt: None,
            le: None,
        }
    }
}

impl<T> Interval<T> {
    /// An interval with no bounds.
    #[must_use]
    pub fn unbounded() -> Self {
        Self::default()
    }

    /// Whether no bound is set.
    pub fn is_unbounded(&self) -> bool {
        !self.has_lower() && !self.has_upper()
    }

    /// Whether a lower bound (`gt` or `ge`) is set.
    pub fn has_lower(&self) -> bool {
        self.gt.is_some() || self.ge.is_some()
    }

    /// Whether an upper bound (`lt` or `le`) is set.
    pub fn has_upper(&self) -> bool {
        self.lt.is_some() || self.le.is_some()
    }

    /// The lower bound. `gt` wins over `ge` if both were set by hand.
    pub fn lower(&self) -> Bound<&T> {
        match (&self.gt, &self.ge) {
            (Some(gt), _) => Bound::Excluded(gt),
            (None, Some(ge)) => Bound::Included(ge),
            (None, None) => Bound::Unbounded,
        }
    }

    /// The upper bound. `lt` wins over `le` if both were set by hand.
    pub fn upper(&self) -> Bound<&T> {
        match (&self.lt, &self.le) {
            (Some(lt), _) => Bound::Excluded(lt),
            (None, Some(le)) => Bound::Included(le),
            (None, None) => Bound::Unbounded,
        }
    }
}

impl<T> Interval<T>
where
    T: PartialOrd + Clone + Debug,
{
    /// Narrows to `value < bound`.
    ///
    /// Fails if an upper bound is already set.
    pub fn less_than(&self, bound: T) -> Result<Self> {
        self.ensure_upper_free("<", &bound)?;
        Ok(Self {
            lt: Some(bound),
            ..self.clone()
        })
    }

    /// Narrows to `value <= bound`.
    ///
    /// Fails if an upper bound is already set.
    pub fn at_most(&self, bound: T) -> Result<Self> {
        self.ensure_upper_free("<=", &bound)?;
        Ok(Self {
            le: Some(bound),
            ..self.clone()
        })
    }

    /// Narrows to `value >= bound`.
    ///
    /// Fails if a lower bound is already set.
    pub fn at_least(&self, bound: T) -> Result<Self> {
        self.ensure_lower_free(">=", &bound)?;
        Ok(Self {
            ge: Some(bound),
            ..self.clone()
        })
    }

    /// Narrows to `value > bound`.
    ///
    /// Fails if a lower bound is already set.
    pub fn greater_than(&self, bound: T) -> Result<Self> {
        self.ensure_lower_free(">", &bound)?;
        Ok(Self {
            gt: Some(bound),
            ..self.clone()
        })
    }

    fn ensure_lower_free(&self, op: &str, bound: &T) -> Result<()> {
        if self.has_lower() {
            return Err(self.conflict(op, bound));
        }
        Ok(())
    }

    fn ensure_upper_free(&self, op: &str, bound: &T) -> Result<()> {
        if self.has_upper() {
            return Err(self.conflict(op, bound));
        }
        Ok(())
    }

    fn conflict(&self, op: &str, bound: &T) -> ConstraintError {
        tracing::debug!(interval = ?self, op, ?bound, "rejected interval narrowing");
        ConstraintError::conflict(format!("{self:?}"), format!("{op} {bound:?}"))
    }
}

impl<T: Clone> Grouped<T> for Interval<T> {
    fn expand(&self) -> impl Iterator<Item = Constraint<T>> {
        IntervalExpansion {
            interval: self,
            cursor: 0,
        }
    }
}

/// Lazy expansion of an [`Interval`], one bound at a time.
struct IntervalExpansion<'a, T> {
    interval: &'a Interval<T>,
    cursor: u8,
}

impl<T: Clone> Iterator for IntervalExpansion<'_, T> {
    type Item = Constraint<T>;

    fn next(&mut self) -> Option<Self::Item> {
        while self.cursor < 4 {
            let slot = self.cursor;
            self.cursor += 1;
            let item = match slot {
                0 => self.interval.gt.clone().map(Constraint::GreaterThan),
                1 => self.interval.ge.clone().map(Constraint::GreaterOrEqual),
                2 => self.interval.lt.clone().map(Constraint::LessThan),
                _ => self.interval.le.clone().map(Constraint::LessOrEqual),
            };
            if item.is_some() {
                return item;
            }
        }
        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, Some(4 - usize::from(self.cursor)))
    }
}

// ============================================================================
// RANGE CONVERSIONS
// ============================================================================

impl<T> From<Range<T>> for Interval<T> {
    fn from(range: Range<T>) -> Self {
        Self {
            ge: Some(range.start),
            lt: Some(range.end),
            ..Self::default()
        }
    }
}

impl<T> From<RangeInclusive<T>> for Interval<T> {
    fn from(range: RangeInclusive<T>) -> Self {
        let (start, end) = range.into_inner();
        Self {
            ge: Some(start),
            le: Some(end),
            ..Self::default()
        }
    }
}

impl<T> From<RangeFrom<T>> for Interval<T> {
    fn from(range: RangeFrom<T>) -> Self {
        Self {
            ge: Some(range.start),
            ..Self::default()
        }
    }
}

impl<T> From<RangeTo<T>> for Interval<T> {
    fn from(range: RangeTo<T>) -> Self {
        Self {
            lt: Some(range.end),
            ..Self::default()
        }
    }
}

impl<T> From<RangeToInclusive<T>> for Interval<T> {
    fn from(range: RangeToInclusive<T>) -> Self {
        Self {
            le: Some(range.end),
            ..Self::default()
        }
    }
}

// ============================================================================
// CONSTRUCTORS
// ============================================================================

/// `value > bound`.
pub fn greater_than<T: PartialOrd>(bound: T) -> Interval<T> {
    Interval {
        gt: Some(bound),
        ..Interval::default()
    }
}

/// `value >= bound`.
pub fn at_least<T: PartialOrd>(bound: T) -> Interval<T> {
    Interval {
        ge: Some(bound),
        ..Interval::default()
    }
}

/// `value < bound`.
pub fn less_than<T: PartialOrd>(bound: T) -> Interval<T> {
    Interval {
        lt: Some(bound),
        ..Interval::default()
    }
}

/// `value <= bound`.
pub fn at_most<T: PartialOrd>(bound: T) -> Interval<T> {
    Interval {
        le: Some(bound),
        ..Interval::default()
    }
}

/// `value == bound`, expressed as `bound <= value <= bound`.
pub fn exactly<T: PartialOrd + Clone>(bound: T) -> Interval<T> {
    Interval {
        ge: Some(bound.clone()),
        le: Some(bound),
        ..Interval::default()
    }
}

/// `lo <= value <= hi`.
///
/// ```
/// use nebula_constraint::{between, Interval};
///
/// assert_eq!(between(1, 10), Interval::from(1..=10));
/// ```
pub fn between<T: PartialOrd>(lo: T, hi: T) -> Interval<T> {
    Interval {
        ge: Some(lo),
        le: Some(hi),
        ..Interval::default()
    }
}

/// `lo < value < hi`.
pub fn exclusive_between<T: PartialOrd>(lo: T, hi: T) -> Interval<T> {
    Interval {
        gt: Some(lo),
        lt: Some(hi),
        ..Interval::default()
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn expanded<T: Clone>(interval: &Interval<T>) -> Vec<Constraint<T>> {
        interval.expand().collect()
    }

    #[test]
    fn test_unbounded_expands_to_nothing() {
        assert!(expanded(&Interval::<i32>::default()).is_empty());
        assert!(Interval::<i32>::unbounded().is_unbounded());
    }

    #[test]
    fn test_expand_order_is_gt_ge_lt_le() {
        let all = Interval {
            gt: Some(1),
            ge: Some(2),
            lt: Some(9),
            le: Some(8),
        };
        assert_eq!(
            expanded(&all),
            vec![
                Constraint::gt(1),
                Constraint::ge(2),
                Constraint::lt(9),
                Constraint::le(8),
            ]
        );
    }

    #[test]
    fn test_expand_skips_missing_bounds() {
        let iv = Interval {
            gt: Some(1),
            le: Some(5),
            ..Interval::default()
        };
        assert_eq!(expanded(&iv), vec![Constraint::gt(1), Constraint::le(5)]);
    }

    #[test]
    fn test_expand_is_lazy_and_repeatable() {
        let iv = less_than(3);
        let mut it = iv.expand();
        assert_eq!(it.size_hint(), (0, Some(4)));
        assert_eq!(it.next(), Some(Constraint::lt(3)));
        assert_eq!(it.next(), None);
        assert_eq!(expanded(&iv), expanded(&iv));
    }

    #[test]
    fn test_narrowing_does_not_mutate() {
        let base = greater_than(1);
        let narrowed = base.at_most(5).unwrap();
        assert_eq!(base, greater_than(1));
        assert_eq!(
            narrowed,
            Interval {
                gt: Some(1),
                le: Some(5),
                ..Interval::default()
            }
        );
    }

    #[test]
    fn test_lower_after_lower_conflicts() {
        let iv = at_least(0);
        assert!(matches!(iv.greater_than(1), Err(ConstraintError::Conflict { .. })));
        assert!(matches!(iv.at_least(1), Err(ConstraintError::Conflict { .. })));
    }

    #[test]
    fn test_upper_after_upper_conflicts() {
        let iv = less_than(10);
        assert!(matches!(iv.less_than(5), Err(ConstraintError::Conflict { .. })));
        assert!(matches!(iv.at_most(5), Err(ConstraintError::Conflict { .. })));
    }

    #[test]
    fn test_conflict_message_names_interval_and_operation() {
        let err = at_most(5).less_than(3).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Interval { gt: None, ge: None, lt: None, le: Some(5) } is incompatible with `< 3`"
        );
    }

    #[test]
    fn test_bounds_accessors() {
        let iv = exclusive_between(1, 9);
        assert_eq!(iv.lower(), Bound::Excluded(&1));
        assert_eq!(iv.upper(), Bound::Excluded(&9));

        let iv = exactly(4);
        assert_eq!(iv.lower(), Bound::Included(&4));
        assert_eq!(iv.upper(), Bound::Included(&4));

        let iv = Interval::<i32>::default();
        assert_eq!(iv.lower(), Bound::Unbounded);
        assert_eq!(iv.upper(), Bound::Unbounded);
    }

    #[test]
    fn test_from_ranges() {
        assert_eq!(Interval::from(1..5), at_least(1).less_than(5).unwrap());
        assert_eq!(Interval::from(1..=5), between(1, 5));
        assert_eq!(Interval::from(1..), at_least(1));
        assert_eq!(Interval::from(..5), less_than(5));
        assert_eq!(Interval::from(..=5), at_most(5));
    }

    #[test]
    fn test_non_numeric_bounds() {
        let iv = between("apple".to_string(), "melon".to_string());
        assert_eq!(
            expanded(&iv),
            vec![
                Constraint::ge("apple".to_string()),
                Constraint::le("melon".to_string()),
            ]
        );
    }
}
