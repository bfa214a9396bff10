//! # nebula-constraint
//!
//! Declarative constraint metadata for Nebula schemas.
//!
//! Constraints describe rules on values ("greater than 0", "at most 20
//! characters", "timezone-aware") without enforcing them. Validators and
//! schema generators read the metadata and decide what to do with it.
//!
//! ## Quick Start
//!
//! ```rust
//! use nebula_constraint::prelude::*;
//!
//! // "0 < value <= 100"
//! let score = VALUE.greater_than(0).at_most(100)?;
//!
//! // "3 <= len(value) <= 20"
//! let username = LEN.min_len(3)?.max_len(20)?;
//!
//! let facts: Vec<_> = score.expand().collect();
//! assert_eq!(facts, vec![Constraint::gt(0), Constraint::le(100)]);
//!
//! let name_rules = Constraints::<String>::new().with_grouped(&username);
//! assert_eq!(name_rules.as_slice(), &[Constraint::MinLength(3), Constraint::MaxLength(20)]);
//! # Ok::<(), ConstraintError>(())
//! ```
//!
//! ## Model
//!
//! - **Atomic**: [`Constraint`], one fact each: ordering bounds, `MultipleOf`,
//!   length bounds, [`TimezoneRequirement`] and [`Predicate`].
//! - **Grouped**: anything implementing [`Grouped`] expands into atomic
//!   constraints. [`Interval`] and [`Length`] are the built-in ones.
//! - **Builders**: [`VALUE`] and [`LEN`] turn a single comparison into a fresh
//!   [`Interval`] or [`Length`], which can then be narrowed.
//!
//! Narrowing never mutates. An interval rejects a second bound on the same
//! side with [`ConstraintError::Conflict`]; a length keeps the tighter bound.

pub mod atomic;
pub mod builder;
pub mod error;
pub mod grouped;
pub mod interpretation;
pub mod interval;
pub mod length;
pub mod predicate;
pub mod prelude;
pub mod timezone;

pub use atomic::{Constraint, ConstraintKind};
pub use builder::{LEN, LengthBuilder, NumericBuilder, VALUE};
pub use error::{ConstraintError, Result};
pub use grouped::{Constraints, Grouped};
pub use interval::{
    Interval, at_least, at_most, between, exactly, exclusive_between, greater_than, less_than,
};
pub use length::{Length, LengthBound};
pub use predicate::Predicate;
pub use timezone::TimezoneRequirement;
