//! Comma- and tab-delimited text.

use std::io::Read;
use std::path::Path;

use csv::ReaderBuilder;
use scrub_model::{Dataset, HeaderSet, Row, Value};

use super::header::{make_unique, strip_bom};
use crate::error::{IngestError, Result};

/// Decodes delimited text whose first record is the header.
///
/// Every cell is kept as text. Records shorter than the header leave their
/// trailing cells `Null`; extra fields are dropped. `path` only labels errors.
pub fn read_delimited<R: Read>(reader: R, delimiter: u8, path: &Path) -> Result<Dataset> {
    let mut reader = ReaderBuilder::new()
        .delimiter(delimiter)
        .has_headers(false)
        .flexible(true)
        .from_reader(reader);
    let parse_error = |e: csv::Error| IngestError::CsvParse {
        path: path.to_path_buf(),
        message: e.to_string(),
    };

    let mut records = reader.records();
    let header_record = records
        .next()
        .transpose()
        .map_err(parse_error)?
        .ok_or_else(|| IngestError::EmptyInput {
            path: path.to_path_buf(),
        })?;
    let names: Vec<String> = header_record
        .iter()
        .enumerate()
        .map(|(i, field)| (if i == 0 { strip_bom(field) } else { field }).to_string())
        .collect();
    let headers = HeaderSet::new(make_unique(names)).map_err(|source| IngestError::Model {
        path: path.to_path_buf(),
        source,
    })?;
    let width = headers.len();

    let mut rows = Vec::new();
    for record in records {
        let record = record.map_err(parse_error)?;
        let mut cells: Vec<Value> = record.iter().take(width).map(Value::text).collect();
        cells.resize(width, Value::Null);
        rows.push(Row::new(cells));
    }

    Dataset::new(headers, rows).map_err(|source| IngestError::Model {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn decode(text: &str, delimiter: u8) -> Result<Dataset> {
        read_delimited(text.as_bytes(), delimiter, Path::new("inline.csv"))
    }

    #[test]
    fn cells_are_text_and_short_rows_pad_with_null() {
        let data = decode("\u{feff}id,name\n1, ann \n2\n\n3,cy,extra\n", b',').unwrap();
        assert_eq!(data.headers().names(), ["id", "name"]);
        assert_eq!(data.len(), 3);
        assert_eq!(data.rows()[0].cells(), [Value::text("1"), Value::text(" ann ")]);
        assert_eq!(data.rows()[1].cells(), [Value::text("2"), Value::Null]);
        assert_eq!(data.rows()[2].cells(), [Value::text("3"), Value::text("cy")]);
    }

    #[test]
    fn tabs_and_quoted_fields() {
        let data = decode("a\tb\n\"x\ty\"\t\"\"\n", b'\t').unwrap();
        assert_eq!(data.rows()[0].cells(), [Value::text("x\ty"), Value::text("")]);
    }

    #[test]
    fn duplicate_headers_are_renamed() {
        let data = decode("v,v\n1,2\n", b',').unwrap();
        assert_eq!(data.headers().names(), ["v", "v_1"]);
    }

    #[test]
    fn empty_input_has_no_header() {
        assert!(matches!(decode("", b','), Err(IngestError::EmptyInput { .. })));
    }
}
