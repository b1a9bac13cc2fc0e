//! Parser for catalog CSV files.
//!
//! The first record is the header. Every following record must have the
//! same number of fields; a short or long record aborts the load with the
//! offending line number. Column types are inferred once all records are
//! read, see [`ColumnType::infer`].

use crate::error::{DataLoadError, Result};
use crate::types::*;
use std::fs::File;
use std::io::{BufReader, ErrorKind, Read};
use std::path::Path;

/// Parse a CSV file from disk into a `Table`
pub fn parse_csv(path: &Path) -> Result<Table> {
    let file = File::open(path).map_err(|e| match e.kind() {
        ErrorKind::NotFound => DataLoadError::FileNotFound {
            path: path.display().to_string(),
        },
        _ => DataLoadError::IoError(e),
    })?;

    parse_reader(BufReader::new(file), &path.display().to_string())
}

/// Parse CSV from any reader. `file_name` is only used in error messages.
pub fn parse_reader<R: Read>(input: R, file_name: &str) -> Result<Table> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(false)
        .from_reader(input);

    let columns: Vec<String> = reader
        .headers()
        .map_err(|e| csv_error(file_name, e))?
        .iter()
        .map(str::to_string)
        .collect();

    let mut records = Vec::new();
    for result in reader.records() {
        records.push(result.map_err(|e| csv_error(file_name, e))?);
    }

    let types: Vec<ColumnType> = (0..columns.len())
        .map(|col| ColumnType::infer(records.iter().map(|r| r.get(col).unwrap_or(""))))
        .collect();

    let mut rows = Vec::with_capacity(records.len());
    for (idx, record) in records.iter().enumerate() {
        let line_no = record
            .position()
            .map(|p| p.line())
            .unwrap_or(idx as u64 + 2);

        let values = record
            .iter()
            .zip(&types)
            .enumerate()
            .map(|(col, (cell, column_type))| {
                column_type
                    .parse_cell(cell)
                    .ok_or_else(|| DataLoadError::ParseError {
                        file: file_name.to_string(),
                        line: line_no,
                        reason: format!("Invalid value '{}' for column {}", cell, columns[col]),
                    })
            })
            .collect::<Result<Vec<_>>>()?;

        rows.push(Row::new(values));
    }

    Table::new(columns, rows)
}

/// Attach file and line context to the errors the csv crate can locate
fn csv_error(file_name: &str, err: csv::Error) -> DataLoadError {
    let located = match err.kind() {
        csv::ErrorKind::UnequalLengths {
            pos,
            expected_len,
            len,
        } => Some(DataLoadError::FieldCountMismatch {
            expected: *expected_len as usize,
            found: *len as usize,
            line: pos.as_ref().map(|p| p.line()).unwrap_or(0),
        }),
        csv::ErrorKind::Utf8 { pos, err } => Some(DataLoadError::ParseError {
            file: file_name.to_string(),
            line: pos.as_ref().map(|p| p.line()).unwrap_or(0),
            reason: err.to_string(),
        }),
        _ => None,
    };
    located.unwrap_or_else(|| DataLoadError::CsvError(err))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const SAMPLE: &str = "\
show_id,title,director,cast,country,rating,release_year
s1,Dick Johnson Is Dead,Kirsten Johnson,,United States,PG-13,2020
s2,Blood & Water,,\"Ama Qamata, Khosi Ngema\",South Africa,TV-MA,2021
";

    #[test]
    fn test_parse_reader_infers_types() {
        let table = parse_reader(SAMPLE.as_bytes(), "sample.csv").unwrap();

        assert_eq!(table.columns().len(), 7);
        assert_eq!(table.len(), 2);

        let row = &table.rows()[1];
        assert_eq!(table.value(row, "release_year"), Some(&Value::Integer(2021)));
        assert_eq!(table.value(row, "director"), Some(&Value::Missing));
        assert_eq!(
            table.value(row, "cast"),
            Some(&Value::Text("Ama Qamata, Khosi Ngema".to_string()))
        );
    }

    #[test]
    fn test_malformed_row_names_line() {
        let input = "show_id,title\ns1,Good\ns2,Bad,extra\n";
        let err = parse_reader(input.as_bytes(), "bad.csv").unwrap_err();

        match err {
            DataLoadError::FieldCountMismatch { expected, found, line } => {
                assert_eq!(expected, 2);
                assert_eq!(found, 3);
                assert_eq!(line, 3);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_missing_file() {
        let err = parse_csv(Path::new("definitely/not/here.csv")).unwrap_err();
        assert!(matches!(err, DataLoadError::FileNotFound { .. }));
    }

    #[test]
    fn test_parse_csv_from_disk() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(SAMPLE.as_bytes()).unwrap();

        let table = parse_csv(file.path()).unwrap();
        assert_eq!(table.len(), 2);
    }
}
