//! Grouped constraints and their expansion into atomic ones.
//!
//! A grouped constraint is shorthand for zero or more [`Constraint`]s.
//! On its own it carries no meaning: consumers must [`expand`](Grouped::expand)
//! it, which [`Constraints::push_grouped`] does for them.

use smallvec::SmallVec;

use crate::atomic::{Constraint, ConstraintKind};

// ============================================================================
// GROUPED TRAIT
// ============================================================================

/// A constraint expressible as an ordered list of atomic constraints.
///
/// `expand` has no default body, so a type cannot claim to be grouped without
/// saying what it expands to:
///
/// ```compile_fail
/// use nebula_constraint::Grouped;
///
/// struct Described;
///
/// // error[E0046]: not all trait items implemented, missing: `expand`
/// impl Grouped<i32> for Described {}
/// ```
///
/// # Examples
///
/// ```
/// use nebula_constraint::{Constraint, Grouped};
///
/// struct Percentage;
///
/// impl Grouped<f64> for Percentage {
///     fn expand(&self) -> impl Iterator<Item = Constraint<f64>> {
///         [Constraint::ge(0.0), Constraint::le(100.0)].into_iter()
///     }
/// }
///
/// let facts: Vec<_> = Percentage.expand().collect();
/// assert_eq!(facts, vec![Constraint::ge(0.0), Constraint::le(100.0)]);
/// ```
pub trait Grouped<T> {
    /// Expands into atomic constraints.
    ///
    /// The sequence is finite and its order is deterministic for a given
    /// value. Implementations may produce items lazily.
    fn expand(&self) -> impl Iterator<Item = Constraint<T>>;
}

// ============================================================================
// CONSTRAINTS
// ============================================================================

/// A flat list of atomic constraints attached to one value.
///
/// Grouped constraints are expanded on insertion, so the list never holds an
/// unexpanded composite.
///
/// # Examples
///
/// ```
/// use nebula_constraint::prelude::*;
///
/// let port = Constraints::new()
///     .with_grouped(&between(1u16, 65535))
///     .with(Constraint::predicate(Predicate::named("not_reserved", |p: &u16| *p != 1080)));
///
/// assert_eq!(port.len(), 3);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Constraints<T> {
    items: SmallVec<[Constraint<T>; 4]>,
}

impl<T> Constraints<T> {
    /// Creates an empty list.
    #[must_use]
    pub fn new() -> Self {
        Self {
            items: SmallVec::new(),
        }
    }

    /// Appends an atomic constraint.
    pub fn push(&mut self, constraint: Constraint<T>) -> &mut Self {
        self.items.push(constraint);
        self
    }

    /// Expands `group` and appends its constraints in expansion order.
    pub fn push_grouped<G>(&mut self, group: &G) -> &mut Self
    where
        G: Grouped<T> + ?Sized,
    {
        let before = self.items.len();
        self.items.extend(group.expand());
        tracing::trace!(
            expanded = self.items.len() - before,
            total = self.items.len(),
            "expanded grouped constraint"
        );
        self
    }

    /// Builder form of [`push`](Self::push).
    #[must_use]
    pub fn with(mut self, constraint: Constraint<T>) -> Self {
        self.push(constraint);
        self
    }

    /// Builder form of [`push_grouped`](Self::push_grouped).
    #[must_use]
    pub fn with_grouped<G>(mut self, group: &G) -> Self
    where
        G: Grouped<T> + ?Sized,
    {
        self.push_grouped(group);
        self
    }

    /// Iterates over the constraints in insertion order.
    pub fn iter(&self) -> std::slice::Iter<'_, Constraint<T>> {
        self.items.iter()
    }

    /// Kinds of the stored constraints, in insertion order.
    pub fn kinds(&self) -> impl Iterator<Item = ConstraintKind> + '_ {
        self.items.iter().map(Constraint::kind)
    }

    /// Whether a constraint of `kind` is present.
    pub fn contains_kind(&self, kind: ConstraintKind) -> bool {
        self.kinds().any(|k| k == kind)
    }

    /// Number of stored constraints.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the list is empty, i.e. the value is unconstrained.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// The constraints as a slice.
    pub fn as_slice(&self) -> &[Constraint<T>] {
        &self.items
    }
}

impl<T> Default for Constraints<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone> Grouped<T> for Constraints<T> {
    fn expand(&self) -> impl Iterator<Item = Constraint<T>> {
        self.items.iter().cloned()
    }
}

impl<T> FromIterator<Constraint<T>> for Constraints<T> {
    fn from_iter<I: IntoIterator<Item = Constraint<T>>>(iter: I) -> Self {
        Self {
            items: iter.into_iter().collect(),
        }
    }
}

impl<T> Extend<Constraint<T>> for Constraints<T> {
    fn extend<I: IntoIterator<Item = Constraint<T>>>(&mut self, iter: I) {
        self.items.extend(iter);
    }
}

impl<T> IntoIterator for Constraints<T> {
    type Item = Constraint<T>;
    type IntoIter = smallvec::IntoIter<[Constraint<T>; 4]>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a Constraints<T> {
    type Item = &'a Constraint<T>;
    type IntoIter = std::slice::Iter<'a, Constraint<T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

// ============================================================================
// TESTS
// ============================================================================
