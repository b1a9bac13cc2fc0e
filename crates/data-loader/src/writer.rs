//! CSV export.
//!
//! Output keeps the table's column order and writes the header row first.
//! Missing values become empty fields.

use crate::error::{DataLoadError, Result};
use crate::types::Table;
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::info;

/// Append `.csv` to `name` unless it already ends with it.
///
/// The check is case-sensitive: `out.CSV` becomes `out.CSV.csv`.
pub fn with_csv_extension(name: &str) -> PathBuf {
    if name.ends_with(".csv") {
        PathBuf::from(name)
    } else {
        PathBuf::from(format!("{name}.csv"))
    }
}

/// Write `table` to `path`, replacing any existing file
pub fn write_csv(table: &Table, path: &Path) -> Result<()> {
    let to_write_error = |reason: String| DataLoadError::WriteError {
        path: path.display().to_string(),
        reason,
    };

    let file = std::fs::File::create(path).map_err(|e| to_write_error(e.to_string()))?;
    write_to(table, file).map_err(|e| to_write_error(e.to_string()))?;

    info!("Wrote {} rows to {}", table.len(), path.display());
    Ok(())
}

/// Write `table` as CSV to any writer
pub fn write_to<W: Write>(table: &Table, output: W) -> Result<()> {
    let mut writer = csv::Writer::from_writer(output);

    writer.write_record(table.columns())?;
    for row in table.rows() {
        writer.write_record(row.values().iter().map(|v| v.to_string()))?;
    }
    writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Row, Value};

    #[test]
    fn test_with_csv_extension() {
        assert_eq!(with_csv_extension("out"), PathBuf::from("out.csv"));
        assert_eq!(with_csv_extension("out.csv"), PathBuf::from("out.csv"));
        assert_eq!(with_csv_extension("dir/out.txt"), PathBuf::from("dir/out.txt.csv"));
    }

    #[test]
    fn test_write_to_keeps_column_order() {
        let table = Table::new(
            vec!["show_id".into(), "title".into(), "release_year".into()],
            vec![
                Row::new(vec![
                    Value::Text("s1".into()),
                    Value::Text("Blood & Water".into()),
                    Value::Integer(2021),
                ]),
                Row::new(vec![
                    Value::Text("s2".into()),
                    Value::Text("Kota, Factory".into()),
                    Value::Missing,
                ]),
            ],
        )
        .unwrap();

        let mut out = Vec::new();
        write_to(&table, &mut out).unwrap();

        let text = String::from_utf8(out).unwrap();
        assert_eq!(
            text,
            "show_id,title,release_year\ns1,Blood & Water,2021\ns2,\"Kota, Factory\",\n"
        );
    }

    #[test]
    fn test_float_cells_keep_fraction() {
        let csv = "title,score\nA,7.0\nB,6.5\n";
        let table = crate::parser::parse_reader(csv.as_bytes(), "scores.csv").unwrap();

        let mut out = Vec::new();
        write_to(&table, &mut out).unwrap();

        assert_eq!(String::from_utf8(out).unwrap(), csv);
    }

    #[test]
    fn test_write_csv_to_unwritable_path() {
        let table = Table::empty(vec!["title".into()]);
        let err = write_csv(&table, Path::new("no/such/dir/out.csv")).unwrap_err();
        assert!(matches!(err, DataLoadError::WriteError { .. }));
    }
}
