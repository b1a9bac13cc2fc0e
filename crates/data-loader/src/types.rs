//! Core domain types for the title catalog.
//!
//! A `Table` is an ordered list of `Row`s sharing one schema (the ordered
//! column names). Rows store their values positionally, so every lookup by
//! column name goes through the owning table.

use crate::error::{DataLoadError, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;

// =============================================================================
// Well-known columns
// =============================================================================

/// Column searched by `find_by_title`
pub const TITLE_COLUMN: &str = "title";

/// Columns every catalog file must provide
pub const REQUIRED_COLUMNS: [&str; 7] = [
    "show_id",
    "title",
    "director",
    "cast",
    "country",
    "rating",
    "release_year",
];

/// Columns whose missing values are replaced by an empty string at load time
pub const NORMALIZED_COLUMNS: [&str; 3] = ["director", "cast", "country"];

// =============================================================================
// Values
// =============================================================================

/// A single cell.
///
/// The variant is decided per column when the file is loaded, see
/// [`ColumnType`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Value {
    /// Empty cell in the source file
    Missing,
    Text(String),
    Integer(i64),
    Float(f64),
}

impl Value {
    pub fn is_missing(&self) -> bool {
        matches!(self, Value::Missing)
    }

    /// Numeric view of the cell. Text and missing cells have none.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Integer(i) => Some(*i as f64),
            Value::Float(f) => Some(*f),
            Value::Text(_) | Value::Missing => None,
        }
    }

    /// Case-insensitive substring test against the rendered cell.
    ///
    /// Missing cells read as "", so only the empty needle matches them.
    pub fn contains_ignore_case(&self, needle: &str) -> bool {
        match self {
            Value::Missing => needle.is_empty(),
            Value::Text(s) => contains_ignore_case(s, needle),
            other => contains_ignore_case(&other.to_string(), needle),
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Missing => Ok(()),
            Value::Text(s) => write!(f, "{s}"),
            Value::Integer(i) => write!(f, "{i}"),
            // Debug keeps the fractional part, so 7.0 stays "7.0"
            Value::Float(x) => write!(f, "{x:?}"),
        }
    }
}

/// Case-insensitive substring match. The empty needle matches everything.
pub fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}

/// Storage type inferred for a whole column
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ColumnType {
    Integer,
    Float,
    Text,
}

impl ColumnType {
    /// Pick the narrowest type that fits every non-empty cell.
    ///
    /// A column with no values at all is treated as text.
    pub fn infer<'a>(cells: impl IntoIterator<Item = &'a str>) -> Self {
        let mut seen_any = false;
        let mut all_int = true;
        let mut all_float = true;

        for cell in cells.into_iter().filter(|c| !c.is_empty()) {
            seen_any = true;
            if all_int && cell.parse::<i64>().is_err() {
                all_int = false;
            }
            if cell.parse::<f64>().is_err() {
                all_float = false;
                break;
            }
        }

        match (seen_any, all_int, all_float) {
            (true, true, _) => ColumnType::Integer,
            (true, false, true) => ColumnType::Float,
            _ => ColumnType::Text,
        }
    }

    /// Convert a raw cell into a value of this column's type.
    ///
    /// Returns `None` if the cell doesn't fit, which can't happen for cells
    /// that took part in `infer`.
    pub fn parse_cell(&self, cell: &str) -> Option<Value> {
        if cell.is_empty() {
            return Some(Value::Missing);
        }
        match self {
            ColumnType::Integer => cell.parse().ok().map(Value::Integer),
            ColumnType::Float => cell.parse().ok().map(Value::Float),
            ColumnType::Text => Some(Value::Text(cell.to_string())),
        }
    }
}

// =============================================================================
// Rows and tables
// =============================================================================

/// One record, values ordered like the owning table's columns
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Row {
    values: Vec<Value>,
}

impl Row {
    pub fn new(values: Vec<Value>) -> Self {
        Self { values }
    }

    pub fn values(&self) -> &[Value] {
        &self.values
    }

    pub fn get(&self, index: usize) -> Option<&Value> {
        self.values.get(index)
    }
}

impl From<Vec<Value>> for Row {
    fn from(values: Vec<Value>) -> Self {
        Self::new(values)
    }
}

/// An ordered set of rows sharing a fixed schema.
///
/// Every operation that derives a new table (filtering, projection, search)
/// keeps the original row order.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Table {
    columns: Vec<String>,
    rows: Vec<Row>,
}

impl Table {
    /// Build a table, checking that each row has one value per column.
    ///
    /// Line numbers in the error count the header as line 1.
    pub fn new(columns: Vec<String>, rows: Vec<Row>) -> Result<Self> {
        for (idx, row) in rows.iter().enumerate() {
            if row.values.len() != columns.len() {
                return Err(DataLoadError::FieldCountMismatch {
                    expected: columns.len(),
                    found: row.values.len(),
                    line: idx as u64 + 2,
                });
            }
        }
        Ok(Self { columns, rows })
    }

    /// A table with the given schema and no rows
    pub fn empty(columns: Vec<String>) -> Self {
        Self {
            columns,
            rows: Vec::new(),
        }
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c == name)
    }

    /// Like `column_index`, but a missing column is an error
    pub fn require_column(&self, name: &str) -> Result<usize> {
        self.column_index(name)
            .ok_or_else(|| DataLoadError::UnknownColumn {
                column: name.to_string(),
            })
    }

    /// Value of `column` in `row`, if both exist
    pub fn value<'a>(&self, row: &'a Row, column: &str) -> Option<&'a Value> {
        self.column_index(column).and_then(|idx| row.get(idx))
    }

    /// Keep only the rows for which `keep` returns true
    pub fn retain_rows(mut self, keep: impl FnMut(&Row) -> bool) -> Self {
        self.rows.retain(keep);
        self
    }

    /// Project the table onto `columns`, in the order given
    pub fn select(&self, columns: &[&str]) -> Result<Table> {
        let indices = columns
            .iter()
            .map(|c| self.require_column(c))
            .collect::<Result<Vec<_>>>()?;

        let rows = self
            .rows
            .iter()
            .map(|row| {
                Row::new(
                    indices
                        .iter()
                        .map(|&i| row.values[i].clone())
                        .collect(),
                )
            })
            .collect();

        Ok(Table {
            columns: columns.iter().map(|c| c.to_string()).collect(),
            rows,
        })
    }

    /// Rows whose title contains `text`, ignoring case.
    ///
    /// No match is an empty table, not an error.
    pub fn find_by_title(&self, text: &str) -> Result<Table> {
        let idx = self.require_column(TITLE_COLUMN)?;
        Ok(self
            .clone()
            .retain_rows(|row| row.values[idx].contains_ignore_case(text)))
    }

    /// Distinct non-missing values of `column` in first-seen order
    pub fn distinct_values(&self, column: &str) -> Result<Vec<Value>> {
        let idx = self.require_column(column)?;
        let mut seen = HashSet::new();
        let mut values = Vec::new();

        for value in self.rows.iter().map(|r| &r.values[idx]) {
            if value.is_missing() {
                continue;
            }
            // f64 isn't Hash, so dedupe on the rendered form plus the variant
            let key = (std::mem::discriminant(value), value.to_string());
            if seen.insert(key) {
                values.push(value.clone());
            }
        }
        Ok(values)
    }

    /// Replace every missing value in `column` with `with`
    pub fn fill_missing(&mut self, column: &str, with: &Value) -> Result<()> {
        let idx = self.require_column(column)?;
        for row in &mut self.rows {
            if row.values[idx].is_missing() {
                row.values[idx] = with.clone();
            }
        }
        Ok(())
    }
}
