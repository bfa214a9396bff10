//! Prelude module for convenient imports.
//!
//! Provides a single `use nebula_constraint::prelude::*;` import that brings
//! in the constraint types, the builders and the named constructors.
//!
//! # Examples
//!
//! ```
//! use nebula_constraint::prelude::*;
//!
//! let age = Constraints::new().with_grouped(&between(0u8, 150));
//! let name = Constraints::<String>::new().with_grouped(&LEN.min_len(1).unwrap());
//! assert_eq!(age.len(), 2);
//! assert_eq!(name.len(), 1);
//! ```

// ============================================================================
// MODEL: Atomic constraints and their payloads
// ============================================================================

pub use crate::atomic::{Constraint, ConstraintKind};
pub use crate::predicate::Predicate;
pub use crate::timezone::TimezoneRequirement;

// ============================================================================
// GROUPED: Composite constraints and flattening
// ============================================================================

pub use crate::grouped::{Constraints, Grouped};
pub use crate::interval::{
    Interval, at_least, at_most, between, exactly, exclusive_between, greater_than, less_than,
};
pub use crate::length::{Length, LengthBound};

// ============================================================================
// BUILDERS
// ============================================================================

pub use crate::builder::{LEN, LengthBuilder, NumericBuilder, VALUE};

// ============================================================================
// ERRORS
// ============================================================================

pub use crate::error::ConstraintError;
