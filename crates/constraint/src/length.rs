//! Length bounds for strings, collections and anything else with a length.
//!
//! Lengths are always integers, so strict bounds are converted to inclusive
//! ones as soon as they are applied: `< 5` becomes `<= 4`.

use std::fmt::Debug;

use serde_json::{Number, Value};

use crate::atomic::Constraint;
use crate::error::{ConstraintError, Result};
use crate::grouped::Grouped;

// ============================================================================
// LENGTH BOUND ARGUMENT
// ============================================================================

/// A value that may be used as a length bound.
///
/// Integer primitives convert directly (negative values are rejected).
/// Floats and strings are accepted as arguments so that dynamically typed
/// input, e.g. a JSON schema fragment, reports a
/// [`ConstraintError::NonIntegerBound`] instead of being coerced.
pub trait LengthBound: Debug {
    /// Converts to a length, or explains why this value is not one.
    fn to_length(&self) -> Result<usize>;
}

impl<B: LengthBound + ?Sized> LengthBound for &B {
    fn to_length(&self) -> Result<usize> {
        (**self).to_length()
    }
}

macro_rules! unsigned_bound {
    ($($ty:ty),*) => {$(
        impl LengthBound for $ty {
            fn to_length(&self) -> Result<usize> {
                usize::try_from(*self).map_err(|_| ConstraintError::Unsatisfiable {
                    reason: format!("{self} does not fit in usize"),
                })
            }
        }
    )*};
}

macro_rules! signed_bound {
    ($($ty:ty),*) => {$(
        impl LengthBound for $ty {
            fn to_length(&self) -> Result<usize> {
                if *self < 0 {
                    return Err(ConstraintError::NegativeLength { got: *self as i128 });
                }
                usize::try_from(*self).map_err(|_| ConstraintError::Unsatisfiable {
                    reason: format!("{self} does not fit in usize"),
                })
            }
        }
    )*};
}

macro_rules! non_integer_bound {
    ($($ty:ty => $name:literal),*) => {$(
        impl LengthBound for $ty {
            fn to_length(&self) -> Result<usize> {
                Err(ConstraintError::non_integer(self, $name))
            }
        }
    )*};
}

unsigned_bound!(u8, u16, u32, u64, u128);
signed_bound!(i8, i16, i32, i64, isize);
non_integer_bound!(f32 => "f32", f64 => "f64", str => "str", String => "String", char => "char", bool => "bool");

impl LengthBound for usize {
    fn to_length(&self) -> Result<usize> {
        Ok(*self)
    }
}

impl LengthBound for Number {
    fn to_length(&self) -> Result<usize> {
        if let Some(n) = self.as_u64() {
            return n.to_length();
        }
        if let Some(n) = self.as_i64() {
            return n.to_length();
        }
        Err(ConstraintError::non_integer(self, "float"))
    }
}

impl LengthBound for Value {
    fn to_length(&self) -> Result<usize> {
        match self {
            Value::Number(n) => n.to_length(),
            Value::Null => Err(ConstraintError::non_integer(self, "null")),
            Value::Bool(_) => Err(ConstraintError::non_integer(self, "bool")),
            Value::String(_) => Err(ConstraintError::non_integer(self, "string")),
            Value::Array(_) => Err(ConstraintError::non_integer(self, "array")),
            Value::Object(_) => Err(ConstraintError::non_integer(self, "object")),
        }
    }
}

// ============================================================================
// LENGTH
// ============================================================================

/// `min_length <= len(value) <= max_length`, with an optional upper bound.
///
/// A `Length` is always consistent: every constructor and narrowing rejects
/// `min_length > max_length` with [`ConstraintError::InvertedLength`].
///
/// Narrowing is monotonic. Each call keeps the tighter of the existing bound
/// and the new one, so a length never widens.
///
/// # Examples
///
/// ```
/// use nebula_constraint::{Constraint, Grouped, Length, LEN};
///
/// let username = LEN.min_len(3).unwrap().max_len(20).unwrap();
/// assert_eq!(username, Length::between(3, 20).unwrap());
///
/// let facts: Vec<_> = <Length as Grouped<String>>::expand(&username).collect();
/// assert_eq!(facts, vec![Constraint::MinLength(3), Constraint::MaxLength(20)]);
///
/// // Loosening is a no-op.
/// assert_eq!(username.max_len(50).unwrap(), username);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Length {
    min_length: usize,
    max_length: Option<usize>,
}

impl Length {
    /// Creates a length constraint, rejecting `min > max`.
    pub fn new(min_length: usize, max_length: Option<usize>) -> Result<Self> {
        if let Some(max) = max_length
            && min_length > max
        {
            return Err(ConstraintError::InvertedLength {
                min: min_length,
                max,
            });
        }
        Ok(Self {
            min_length,
            max_length,
        })
    }

    /// No length constraint at all.
    #[must_use]
    pub fn unbounded() -> Self {
        Self::default()
    }

    /// `len(value) >= min`.
    #[must_use]
    pub fn at_least(min: usize) -> Self {
        Self {
            min_length: min,
            max_length: None,
        }
    }

    /// `len(value) <= max`.
    #[must_use]
    pub fn at_most(max: usize) -> Self {
        Self {
            min_length: 0,
            max_length: Some(max),
        }
    }

    /// `len(value) == n`.
    #[must_use]
    pub fn exactly(n: usize) -> Self {
        Self {
            min_length: n,
            max_length: Some(n),
        }
    }

    /// `min <= len(value) <= max`.
    pub fn between(min: usize, max: usize) -> Result<Self> {
        Self::new(min, Some(max))
    }

    /// Inclusive minimum; `0` means no lower bound.
    pub fn min_length(&self) -> usize {
        self.min_length
    }

    /// Inclusive maximum, if any.
    pub fn max_length(&self) -> Option<usize> {
        self.max_length
    }

    /// Whether this constrains nothing.
    pub fn is_unbounded(&self) -> bool {
        self.min_length == 0 && self.max_length.is_none()
    }

    /// Narrows to `len(value) < n`, i.e. `len(value) <= n - 1`.
    pub fn shorter_than(&self, n: impl LengthBound) -> Result<Self> {
        let n = n.to_length()?;
        let max = n.checked_sub(1).ok_or_else(|| ConstraintError::Unsatisfiable {
            reason: "no length is shorter than 0".to_owned(),
        })?;
        self.narrowed(self.min_length, Some(self.tighter_max(max)))
    }

    /// Narrows to `len(value) <= n`.
    pub fn max_len(&self, n: impl LengthBound) -> Result<Self> {
        let n = n.to_length()?;
        self.narrowed(self.min_length, Some(self.tighter_max(n)))
    }

    /// Narrows to `len(value) >= n`.
    pub fn min_len(&self, n: impl LengthBound) -> Result<Self> {
        let n = n.to_length()?;
        self.narrowed(self.min_length.max(n), self.max_length)
    }

    /// Narrows to `len(value) > n`, i.e. `len(value) >= n + 1`.
    pub fn longer_than(&self, n: impl LengthBound) -> Result<Self> {
        let n = n.to_length()?;
        let min = n.checked_add(1).ok_or_else(|| ConstraintError::Unsatisfiable {
            reason: format!("no length is longer than {n}"),
        })?;
        self.narrowed(self.min_length.max(min), self.max_length)
    }

    /// Narrows to `len(value) == n`.
    pub fn exact_len(&self, n: impl LengthBound) -> Result<Self> {
        let n = n.to_length()?;
        self.narrowed(self.min_length.max(n), Some(self.tighter_max(n)))
    }

    /// Whether this is exactly `len(value) == n`.
    ///
    /// The dynamic counterpart of `length == n`: fails with
    /// [`ConstraintError::NonIntegerBound`] if `n` is not an integer.
    pub fn matches_exact(&self, n: impl LengthBound) -> Result<bool> {
        Ok(*self == n.to_length()?)
    }

    fn tighter_max(&self, max: usize) -> usize {
        self.max_length.map_or(max, |current| current.min(max))
    }

    fn narrowed(&self, min: usize, max: Option<usize>) -> Result<Self> {
        Self::new(min, max).inspect_err(|err| {
            tracing::debug!(length = ?self, min, ?max, %err, "rejected length narrowing");
        })
    }
}

impl PartialEq<usize> for Length {
    fn eq(&self, other: &usize) -> bool {
        self.min_length == *other && self.max_length == Some(*other)
    }
}

impl PartialEq<Length> for usize {
    fn eq(&self, other: &Length) -> bool {
        other == self
    }
}

impl<T> Grouped<T> for Length {
    fn expand(&self) -> impl Iterator<Item = Constraint<T>> {
        let min = (self.min_length > 0).then_some(Constraint::MinLength(self.min_length));
        let max = self.max_length.map(Constraint::MaxLength);
        min.into_iter().chain(max)
    }
}

// ============================================================================
// TESTS
// ============================================================================
