//! Core trait for the filtering pipeline.
//!
//! Anything that narrows a table row by row implements `Filter`, so
//! constraints can be chained in a `FilterPipeline`.

use crate::error::Result;
use data_loader::Table;

/// A row-level filter over a table.
///
/// Filters take ownership of the table and return the surviving rows in
/// their original order. They never add or modify rows.
pub trait Filter: Send + Sync {
    /// Returns the name of this filter (for logging/debugging)
    fn name(&self) -> &str;

    /// Apply this filter to a table.
    ///
    /// # Returns
    /// * `Ok(Table)` - The rows that satisfy the filter
    /// * `Err` - If the table lacks a column the filter needs
    fn apply(&self, table: Table) -> Result<Table>;
}
