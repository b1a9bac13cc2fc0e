//! TableStore: the loaded base table and the read-only queries on it.
//!
//! Loading runs in three steps:
//! 1. Parse the CSV file (see [`parser`])
//! 2. Check the header carries every column the filters rely on
//! 3. Normalize missing `director`, `cast` and `country` values to ""

use crate::error::{DataLoadError, Result};
use crate::parser;
use crate::types::*;
use std::path::{Path, PathBuf};
use tracing::info;

/// Owns the base table for the whole session
#[derive(Debug, Clone)]
pub struct TableStore {
    source: PathBuf,
    table: Table,
}

impl TableStore {
    /// Load and prepare the catalog at `path`
    pub fn load(path: &Path) -> Result<Self> {
        info!("Loading catalog from {}", path.display());

        let table = parser::parse_csv(path)?;
        let store = Self::from_table(path, table)?;

        info!(
            "Loaded {} rows with {} columns",
            store.table.len(),
            store.table.columns().len()
        );
        Ok(store)
    }

    /// Wrap an already parsed table, applying the same checks as `load`
    pub fn from_table(source: impl Into<PathBuf>, mut table: Table) -> Result<Self> {
        let source = source.into();

        validate_columns(&table, &source)?;
        for column in NORMALIZED_COLUMNS {
            table.fill_missing(column, &Value::Text(String::new()))?;
        }

        Ok(Self { source, table })
    }

    /// Path the table was loaded from
    pub fn source(&self) -> &Path {
        &self.source
    }

    /// Column names in file order
    pub fn columns(&self) -> &[String] {
        self.table.columns()
    }

    /// The unmodified base table
    pub fn table(&self) -> &Table {
        &self.table
    }

    /// Rows whose title contains `text`, ignoring case
    pub fn find_by_title(&self, text: &str) -> Result<Table> {
        self.table.find_by_title(text)
    }

    /// Distinct observed values of `column`, used to offer exact-match choices
    pub fn distinct_values(&self, column: &str) -> Result<Vec<Value>> {
        self.table.distinct_values(column)
    }
}

fn validate_columns(table: &Table, source: &Path) -> Result<()> {
    for column in REQUIRED_COLUMNS {
        if table.column_index(column).is_none() {
            return Err(DataLoadError::MissingColumn {
                file: source.display().to_string(),
                column: column.to_string(),
            });
        }
    }
    Ok(())
}
