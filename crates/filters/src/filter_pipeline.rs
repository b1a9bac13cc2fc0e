//! The FilterPipeline chains filters with logical AND.

use crate::error::Result;
use crate::traits::Filter;
use data_loader::Table;
use tracing;

/// Chains multiple filters together into a processing pipeline.
///
/// A row survives only if every filter keeps it. Since each stage just drops
/// rows, the order of stages affects the log output but not the result.
///
/// ## Usage
/// ```ignore
/// let pipeline = FilterPipeline::new()
///     .add_filter(Constraint::Substring { field: FilterField::Title, text: "love".into() })
///     .add_filter(Constraint::ExactSet { field: FilterField::Rating, allowed: vec![rating] });
///
/// let filtered = pipeline.apply(table.clone())?;
/// ```
pub struct FilterPipeline {
    filters: Vec<Box<dyn Filter>>,
}

impl FilterPipeline {
    /// Create a new empty FilterPipeline.
    pub fn new() -> Self {
        Self {
            filters: Vec::new(),
        }
    }

    /// Add a filter to the pipeline (builder pattern).
    pub fn add_filter(mut self, filter: impl Filter + 'static) -> Self {
        self.filters.push(Box::new(filter));
        self
    }

    pub fn len(&self) -> usize {
        self.filters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.filters.is_empty()
    }

    /// Apply all filters in sequence to the table.
    ///
    /// # Returns
    /// * `Ok(Table)` - The rows left after all filters
    /// * `Err` - If any filter fails
    pub fn apply(&self, table: Table) -> Result<Table> {
        let mut current = table;
        for filter in &self.filters {
            tracing::debug!(
                "Applying filter: {} (input rows: {})",
                filter.name(),
                current.len()
            );
            current = filter.apply(current)?;
            tracing::debug!(
                "Filter applied: {} (output rows: {})",
                filter.name(),
                current.len()
            );
        }
        Ok(current)
    }
}

impl Default for FilterPipeline {
    fn default() -> Self {
        Self::new()
    }
}
