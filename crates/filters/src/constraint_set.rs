//! ConstraintSet: the active filters of a session.
//!
//! Holds at most one constraint per field. Adding a constraint for a field
//! replaces the previous one, and every listing follows the declaration
//! order of [`FilterField`].

use crate::constraint::{ComparisonOp, Constraint};
use crate::error::Result;
use crate::field::FilterField;
use crate::filter_pipeline::FilterPipeline;
use data_loader::{Table, Value};
use std::collections::BTreeMap;
use tracing::debug;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ConstraintSet {
    constraints: BTreeMap<FilterField, Constraint>,
}

impl ConstraintSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the constraint for its field, returning the one it replaced
    pub fn set(&mut self, constraint: Constraint) -> Option<Constraint> {
        debug!("Setting filter {}: {}", constraint.field(), constraint);
        self.constraints.insert(constraint.field(), constraint)
    }

    /// Case-insensitive substring constraint. Empty text matches every
    /// non-missing cell.
    pub fn add_substring(&mut self, field: FilterField, text: impl Into<String>) {
        self.set(Constraint::Substring {
            field,
            text: text.into(),
        });
    }

    /// Exact-match constraint on a single chosen value
    pub fn add_exact(&mut self, field: FilterField, value: Value) {
        self.set(Constraint::ExactSet {
            field,
            allowed: vec![value],
        });
    }

    pub fn add_comparison(&mut self, field: FilterField, op: ComparisonOp, value: f64) {
        self.set(Constraint::Comparison { field, op, value });
    }

    /// Parse `op` and `number` and set a comparison constraint.
    ///
    /// On a parse error the set is left untouched, so an existing constraint
    /// for `field` survives.
    pub fn add_comparison_from_input(&mut self, field: FilterField, op: &str, number: &str) -> Result<()> {
        let constraint = Constraint::parse_comparison(field, op, number)?;
        self.set(constraint);
        Ok(())
    }

    /// Drop the constraint for `field`, if any
    pub fn remove(&mut self, field: FilterField) -> Option<Constraint> {
        let removed = self.constraints.remove(&field);
        if removed.is_some() {
            debug!("Removed filter {}", field);
        }
        removed
    }

    pub fn get(&self, field: FilterField) -> Option<&Constraint> {
        self.constraints.get(&field)
    }

    /// Active constraints in declaration order
    pub fn active(&self) -> impl Iterator<Item = (FilterField, &Constraint)> + '_ {
        self.constraints.iter().map(|(field, c)| (*field, c))
    }

    /// Fields that currently have a constraint, in declaration order
    pub fn fields(&self) -> Vec<FilterField> {
        self.constraints.keys().copied().collect()
    }

    pub fn len(&self) -> usize {
        self.constraints.len()
    }

    pub fn is_empty(&self) -> bool {
        self.constraints.is_empty()
    }

    /// One pipeline stage per active constraint, in declaration order
    pub fn pipeline(&self) -> FilterPipeline {
        self.constraints
            .values()
            .cloned()
            .fold(FilterPipeline::new(), |pipeline, c| pipeline.add_filter(c))
    }

    /// The filtered view of `table`: rows that satisfy every constraint.
    ///
    /// Recomputed from scratch on every call.
    pub fn apply(&self, table: &Table) -> Result<Table> {
        self.pipeline().apply(table.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::FilterError;

    #[test]
    fn test_one_constraint_per_field() {
        let mut set = ConstraintSet::new();
        set.add_substring(FilterField::Title, "love");
        set.add_substring(FilterField::Title, "heat");

        assert_eq!(set.len(), 1);
        assert_eq!(
            set.get(FilterField::Title),
            Some(&Constraint::Substring {
                field: FilterField::Title,
                text: "heat".into()
            })
        );
    }

    #[test]
    fn test_active_in_declaration_order() {
        let mut set = ConstraintSet::new();
        set.add_comparison(FilterField::ReleaseYear, ComparisonOp::Greater, 2000.0);
        set.add_exact(FilterField::Rating, Value::Text("PG".into()));
        set.add_substring(FilterField::ShowId, "s1");

        let fields: Vec<_> = set.active().map(|(f, _)| f).collect();
        assert_eq!(
            fields,
            vec![FilterField::ShowId, FilterField::Rating, FilterField::ReleaseYear]
        );
        assert_eq!(set.fields(), fields);
        assert_eq!(set.pipeline().len(), 3);
    }

    #[test]
    fn test_bad_comparison_keeps_previous() {
        let mut set = ConstraintSet::new();
        set.add_comparison(FilterField::ReleaseYear, ComparisonOp::Less, 1990.0);

        let err = set
            .add_comparison_from_input(FilterField::ReleaseYear, ">", "nineteen")
            .unwrap_err();
        assert!(matches!(err, FilterError::InvalidNumber { .. }));

        let err = set
            .add_comparison_from_input(FilterField::ReleaseYear, "~", "2000")
            .unwrap_err();
        assert!(matches!(err, FilterError::InvalidOperator { .. }));

        assert_eq!(
            set.get(FilterField::ReleaseYear),
            Some(&Constraint::Comparison {
                field: FilterField::ReleaseYear,
                op: ComparisonOp::Less,
                value: 1990.0
            })
        );
    }

    #[test]
    fn test_remove_missing_field_is_noop() {
        let mut set = ConstraintSet::new();
        assert_eq!(set.remove(FilterField::Cast), None);
        assert!(set.is_empty());
    }
}
