//! Single-field constraints and how they test a cell.

use crate::error::{FilterError, Result};
use crate::field::FilterField;
use crate::traits::Filter;
use data_loader::{Table, Value};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Operator of a comparison constraint
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ComparisonOp {
    Less,
    Equal,
    Greater,
}

impl ComparisonOp {
    pub const ALL: [ComparisonOp; 3] = [ComparisonOp::Less, ComparisonOp::Equal, ComparisonOp::Greater];

    pub fn symbol(&self) -> &'static str {
        match self {
            ComparisonOp::Less => "<",
            ComparisonOp::Equal => "=",
            ComparisonOp::Greater => ">",
        }
    }

    /// `lhs <op> rhs`
    pub fn evaluate(&self, lhs: f64, rhs: f64) -> bool {
        match self {
            ComparisonOp::Less => lhs < rhs,
            ComparisonOp::Equal => lhs == rhs,
            ComparisonOp::Greater => lhs > rhs,
        }
    }
}

impl fmt::Display for ComparisonOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

impl FromStr for ComparisonOp {
    type Err = FilterError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim() {
            "<" => Ok(ComparisonOp::Less),
            "=" => Ok(ComparisonOp::Equal),
            ">" => Ok(ComparisonOp::Greater),
            other => Err(FilterError::InvalidOperator {
                input: other.to_string(),
            }),
        }
    }
}

/// A predicate on one field of a row
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Constraint {
    /// Cell contains `text`, ignoring case
    Substring { field: FilterField, text: String },
    /// Cell equals one of `allowed`
    ExactSet {
        field: FilterField,
        allowed: Vec<Value>,
    },
    /// Numeric cell compares to `value` per `op`
    Comparison {
        field: FilterField,
        op: ComparisonOp,
        value: f64,
    },
}

impl Constraint {
    pub fn field(&self) -> FilterField {
        match self {
            Constraint::Substring { field, .. }
            | Constraint::ExactSet { field, .. }
            | Constraint::Comparison { field, .. } => *field,
        }
    }

    /// Parse an operator and a number as typed by the user
    pub fn parse_comparison(field: FilterField, op: &str, number: &str) -> Result<Self> {
        let op = op.parse()?;
        let value = number
            .trim()
            .parse::<f64>()
            .ok()
            .filter(|v| v.is_finite())
            .ok_or_else(|| FilterError::InvalidNumber {
                input: number.trim().to_string(),
            })?;

        Ok(Constraint::Comparison { field, op, value })
    }

    /// Test a single cell.
    ///
    /// Missing cells only satisfy an empty substring. Comparisons only look
    /// at numeric cells.
    pub fn matches(&self, cell: &Value) -> bool {
        match self {
            Constraint::Substring { text, .. } => cell.contains_ignore_case(text),
            Constraint::ExactSet { allowed, .. } => allowed.contains(cell),
            Constraint::Comparison { op, value, .. } => cell
                .as_f64()
                .is_some_and(|lhs| op.evaluate(lhs, *value)),
        }
    }
}

impl fmt::Display for Constraint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Constraint::Substring { text, .. } => write!(f, "contains \"{text}\""),
            Constraint::ExactSet { allowed, .. } => {
                let values = allowed
                    .iter()
                    .map(|v| v.to_string())
                    .collect::<Vec<_>>()
                    .join(", ");
                write!(f, "one of [{values}]")
            }
            Constraint::Comparison { op, value, .. } => write!(f, "{op} {value}"),
        }
    }
}

impl Filter for Constraint {
    fn name(&self) -> &str {
        self.field().column()
    }

    fn apply(&self, table: Table) -> Result<Table> {
        let column = self.field().column();
        let idx = table
            .column_index(column)
            .ok_or_else(|| FilterError::UnknownColumn {
                column: column.to_string(),
            })?;

        Ok(table.retain_rows(|row| row.get(idx).is_some_and(|cell| self.matches(cell))))
    }
}
