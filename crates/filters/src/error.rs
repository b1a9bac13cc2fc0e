//! Error types for building and applying constraints.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum FilterError {
    /// Comparison operator other than `<`, `=` or `>`
    #[error("Invalid operator: '{input}' (expected <, = or >)")]
    InvalidOperator { input: String },

    /// Comparison value that isn't a number
    #[error("Invalid number: '{input}'")]
    InvalidNumber { input: String },

    /// The table being filtered lacks the constrained column
    #[error("Column '{column}' not found in table")]
    UnknownColumn { column: String },
}

pub type Result<T> = std::result::Result<T, FilterError>;
