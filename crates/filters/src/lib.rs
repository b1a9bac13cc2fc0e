//! Filter composition for the title catalog.
//!
//! This crate provides:
//! - FilterField, the fixed set of fields that can be constrained
//! - Constraint, a predicate on one field (substring, exact set, comparison)
//! - Filter trait and FilterPipeline for chaining filters
//! - ConstraintSet, the session's active constraints
//!
//! ## Architecture
//! A ConstraintSet holds at most one Constraint per field. Applying it
//! builds a FilterPipeline with one stage per constraint and runs the base
//! table through it, so a row survives only if it satisfies every
//! constraint.
//!
//! ## Example Usage
//! ```ignore
//! use filters::{ComparisonOp, ConstraintSet, FilterField};
//!
//! let mut constraints = ConstraintSet::new();
//! constraints.add_substring(FilterField::Title, "love");
//! constraints.add_comparison(FilterField::ReleaseYear, ComparisonOp::Greater, 2015.0);
//!
//! let view = constraints.apply(store.table())?;
//! ```

pub mod error;
pub mod field;
pub mod traits;
pub mod constraint;
pub mod filter_pipeline;
pub mod constraint_set;

// Re-export main types
pub use constraint::{ComparisonOp, Constraint};
pub use constraint_set::ConstraintSet;
pub use error::{FilterError, Result};
pub use field::{FieldKind, FilterField};
pub use filter_pipeline::FilterPipeline;
pub use traits::Filter;
