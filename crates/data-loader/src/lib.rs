//! # Data Loader Crate
//!
//! This crate loads the title catalog from CSV, holds it in memory and
//! writes derived tables back out.
//!
//! ## Main Components
//!
//! - **types**: Core domain types (Value, Row, Table, ColumnType)
//! - **parser**: Parse CSV files into a Table
//! - **store**: TableStore, the validated and normalized base table
//! - **writer**: Export a Table to CSV
//! - **error**: Error types for loading and exporting
//!
//! ## Example Usage
//!
//! ```ignore
//! use data_loader::{TableStore, writer};
//! use std::path::Path;
//!
//! let store = TableStore::load(Path::new("netflix_titles.csv"))?;
//! println!("Columns are: {:?}", store.columns());
//!
//! let matches = store.find_by_title("love")?;
//! writer::write_csv(&matches, &writer::with_csv_extension("love"))?;
//! ```

// Public modules
pub mod error;
pub mod types;
pub mod parser;
pub mod store;
pub mod writer;

// Re-export commonly used types for convenience
pub use error::{DataLoadError, Result};
pub use store::TableStore;
pub use types::{
    contains_ignore_case,
    ColumnType,
    Row,
    Table,
    Value,
    NORMALIZED_COLUMNS,
    REQUIRED_COLUMNS,
    TITLE_COLUMN,
};
pub use writer::{with_csv_extension, write_csv};
