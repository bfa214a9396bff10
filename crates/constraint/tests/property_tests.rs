//! Property-based tests for nebula-constraint.

use nebula_constraint::prelude::*;
use proptest::prelude::*;

fn expand_length(length: &Length) -> Vec<Constraint<()>> {
    <Length as Grouped<()>>::expand(length).collect()
}

// ============================================================================
// MONOTONIC LENGTH NARROWING
// ============================================================================

proptest! {
    #[test]
    fn max_len_never_widens(n in 0usize..1000, m in 0usize..1000) {
        let first = LEN.max_len(n).unwrap();
        let second = first.max_len(m).unwrap();
        prop_assert_eq!(second.max_length(), Some(n.min(m)));
    }

    #[test]
    fn min_len_never_widens(n in 0usize..1000, m in 0usize..1000) {
        let first = LEN.min_len(n).unwrap();
        let second = first.min_len(m).unwrap();
        prop_assert_eq!(second.min_length(), n.max(m));
    }

    #[test]
    fn shorter_than_is_max_len_minus_one(n in 1usize..1000) {
        prop_assert_eq!(LEN.shorter_than(n).unwrap(), LEN.max_len(n - 1).unwrap());
    }

    #[test]
    fn longer_than_is_min_len_plus_one(n in 0usize..1000) {
        prop_assert_eq!(LEN.longer_than(n).unwrap(), LEN.min_len(n + 1).unwrap());
    }

    #[test]
    fn narrowed_lengths_stay_consistent(lo in 0usize..100, hi in 0usize..100) {
        match LEN.min_len(lo).and_then(|l| l.max_len(hi)) {
            Ok(len) => prop_assert!(len.max_length().is_some_and(|max| len.min_length() <= max)),
            Err(err) => {
                prop_assert!(lo > hi);
                prop_assert_eq!(err, ConstraintError::InvertedLength { min: lo, max: hi });
            }
        }
    }

    #[test]
    fn exact_length_expands_to_at_most_two(n in 0usize..1000) {
        let facts = expand_length(&Length::exactly(n));
        prop_assert!(facts.len() <= 2);
        prop_assert_eq!(facts.last(), Some(&Constraint::MaxLength(n)));
    }

    #[test]
    fn negative_bounds_are_rejected(n in i64::MIN..0) {
        prop_assert_eq!(
            LEN.min_len(n),
            Err(ConstraintError::NegativeLength { got: i128::from(n) })
        );
    }
}

// ============================================================================
// INTERVAL NARROWING
// ============================================================================

proptest! {
    #[test]
    fn interval_one_bound_per_side(lo in any::<i32>(), hi in any::<i32>(), extra in any::<i32>()) {
        let iv = VALUE.greater_than(lo).at_most(hi).unwrap();
        prop_assert!(iv.greater_than(extra).is_err());
        prop_assert!(iv.at_least(extra).is_err());
        prop_assert!(iv.less_than(extra).is_err());
        prop_assert!(iv.at_most(extra).is_err());
    }

    #[test]
    fn interval_expansion_is_deterministic(lo in any::<i64>(), hi in any::<i64>()) {
        let iv = VALUE.at_least(lo).less_than(hi).unwrap();
        let a: Vec<_> = iv.expand().collect();
        let b: Vec<_> = iv.expand().collect();
        prop_assert_eq!(&a, &b);
        prop_assert_eq!(a, vec![Constraint::ge(lo), Constraint::lt(hi)]);
    }
}
