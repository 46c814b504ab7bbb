//! Workbooks read through calamine.

use std::path::Path;

use calamine::{Data, Reader, open_workbook_auto};
use scrub_model::{Dataset, HeaderSet, Row, Value};
use tracing::debug;

use super::header::{EMPTY_HEADER, make_unique};
use crate::error::{IngestError, Result};

/// Decodes the first worksheet of a workbook.
///
/// The first row holds the headers. Fully blank rows are skipped. Date cells
/// keep their serial day count as a number.
pub fn read_spreadsheet(path: &Path) -> Result<Dataset> {
    let spreadsheet_error = |message: String| IngestError::Spreadsheet {
        path: path.to_path_buf(),
        message,
    };
    let mut workbook = open_workbook_auto(path).map_err(|e| spreadsheet_error(e.to_string()))?;
    let range = workbook
        .worksheet_range_at(0)
        .ok_or_else(|| spreadsheet_error("workbook has no worksheets".to_string()))?
        .map_err(|e| spreadsheet_error(e.to_string()))?;

    let mut sheet_rows = range.rows();
    let header_row = sheet_rows.next().ok_or_else(|| IngestError::EmptyInput {
        path: path.to_path_buf(),
    })?;
    let names = header_row.iter().map(header_name).collect();
    let headers = HeaderSet::new(make_unique(names)).map_err(|source| IngestError::Model {
        path: path.to_path_buf(),
        source,
    })?;
    let width = headers.len();

    let rows: Vec<Row> = sheet_rows
        .filter(|cells| cells.iter().any(|cell| !matches!(cell, Data::Empty)))
        .map(|cells| {
            let mut values: Vec<Value> = cells.iter().take(width).map(cell_value).collect();
            values.resize(width, Value::Null);
            Row::new(values)
        })
        .collect();
    debug!(path = %path.display(), rows = rows.len(), columns = width, "read worksheet");

    Dataset::new(headers, rows).map_err(|source| IngestError::Model {
        path: path.to_path_buf(),
        source,
    })
}

fn header_name(cell: &Data) -> String {
    let name = match cell {
        Data::Empty => String::new(),
        Data::String(s) => s.trim().to_string(),
        other => other.to_string(),
    };
    if name.is_empty() {
        EMPTY_HEADER.to_string()
    } else {
        name
    }
}

/// Converts one worksheet cell to a dataset value.
pub(crate) fn cell_value(cell: &Data) -> Value {
    match cell {
        Data::Empty => Value::Null,
        Data::Int(i) => Value::Number(*i as f64),
        Data::Float(f) => Value::Number(*f),
        Data::String(s) => Value::text(s.as_str()),
        Data::DateTime(dt) => Value::Number(dt.as_f64()),
        Data::Bool(b) => Value::text(b.to_string()),
        other => Value::text(other.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cell_conversion() {
        assert_eq!(cell_value(&Data::Empty), Value::Null);
        assert_eq!(cell_value(&Data::Int(7)), Value::Number(7.0));
        assert_eq!(cell_value(&Data::Float(2.5)), Value::Number(2.5));
        assert_eq!(cell_value(&Data::String("x".into())), Value::text("x"));
        assert_eq!(cell_value(&Data::Bool(true)), Value::text("true"));
    }

    #[test]
    fn blank_header_cells_are_named() {
        assert_eq!(header_name(&Data::Empty), "__EMPTY");
        assert_eq!(header_name(&Data::String("  ".into())), "__EMPTY");
        assert_eq!(header_name(&Data::String("Region".into())), "Region");
        assert_eq!(header_name(&Data::Float(2023.0)), "2023");
    }

    #[test]
    fn missing_workbook_is_a_spreadsheet_error() {
        let err = read_spreadsheet(Path::new("does/not/exist.xlsx")).unwrap_err();
        assert!(matches!(err, IngestError::Spreadsheet { .. }));
        assert!(err.is_decode_failure());
    }
}
