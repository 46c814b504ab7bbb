//! Encoders from dataset views to export files.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use csv::WriterBuilder;
use rust_xlsxwriter::{Workbook, Worksheet, XlsxError};
use scrub_model::{DatasetView, OutputFormat, Value};
use serde_json::{Map, Number, Value as JsonValue};
use tracing::info;

use crate::error::{IngestError, Result};

/// Largest integer an `f64` holds exactly.
const MAX_SAFE_INTEGER: f64 = 9_007_199_254_740_991.0;

/// Writes `view` as delimited text with a header row.
///
/// `Null` cells become empty fields and whole numbers carry no fraction.
pub fn write_delimited<W: Write>(view: &DatasetView<'_>, writer: W, delimiter: u8) -> Result<()> {
    let format = if delimiter == b'\t' {
        OutputFormat::Tsv
    } else {
        OutputFormat::Csv
    };
    let encode_error = |e: csv::Error| IngestError::Encode {
        format,
        message: e.to_string(),
    };
    let mut writer = WriterBuilder::new()
        .delimiter(delimiter)
        .from_writer(writer);
    writer
        .write_record(view.headers().iter())
        .map_err(encode_error)?;
    for row in view.rows() {
        writer
            .write_record(row.cells().iter().map(ToString::to_string))
            .map_err(encode_error)?;
    }
    writer.flush().map_err(|e| IngestError::Encode {
        format,
        message: e.to_string(),
    })
}

/// Writes `view` as a pretty-printed JSON array of objects in header order.
pub fn write_json<W: Write>(view: &DatasetView<'_>, writer: W) -> Result<()> {
    let records: Vec<JsonValue> = view
        .rows()
        .iter()
        .map(|row| {
            let object: Map<String, JsonValue> = view
                .headers()
                .iter()
                .zip(row.cells())
                .map(|(name, cell)| (name.to_string(), cell_to_json(cell)))
                .collect();
            JsonValue::Object(object)
        })
        .collect();
    serde_json::to_writer_pretty(writer, &records).map_err(|e| IngestError::Encode {
        format: OutputFormat::Json,
        message: e.to_string(),
    })
}

/// Writes `view` as a single-sheet xlsx workbook: a header row, then one
/// row per record. `Null` cells are left blank; numbers stay numeric.
pub fn write_xlsx<W: Write>(view: &DatasetView<'_>, mut writer: W) -> Result<()> {
    let mut workbook = Workbook::new();
    let sheet = workbook.add_worksheet();
    fill_sheet(sheet, view).map_err(xlsx_error)?;
    let bytes = workbook.save_to_buffer().map_err(xlsx_error)?;
    writer.write_all(&bytes).map_err(|e| IngestError::Encode {
        format: OutputFormat::Xlsx,
        message: e.to_string(),
    })
}

fn fill_sheet(
    sheet: &mut Worksheet,
    view: &DatasetView<'_>,
) -> std::result::Result<(), XlsxError> {
    for (col, name) in view.headers().iter().enumerate() {
        sheet.write_string(0, sheet_col(col)?, name)?;
    }
    for (index, row) in view.rows().iter().enumerate() {
        let sheet_row = u32::try_from(index + 1).map_err(|_| XlsxError::RowColumnLimitError)?;
        for (col, cell) in row.cells().iter().enumerate() {
            let col = sheet_col(col)?;
            match cell {
                Value::Null => {}
                Value::Number(v) if v.is_finite() => {
                    sheet.write_number(sheet_row, col, *v)?;
                }
                Value::Number(v) => {
                    sheet.write_string(sheet_row, col, v.to_string())?;
                }
                Value::Text(s) => {
                    sheet.write_string(sheet_row, col, s)?;
                }
            }
        }
    }
    Ok(())
}

fn sheet_col(index: usize) -> std::result::Result<u16, XlsxError> {
    u16::try_from(index).map_err(|_| XlsxError::RowColumnLimitError)
}

fn xlsx_error(e: XlsxError) -> IngestError {
    IngestError::Encode {
        format: OutputFormat::Xlsx,
        message: e.to_string(),
    }
}

/// Encodes `view` into `writer` in the requested format.
pub fn encode<W: Write>(view: &DatasetView<'_>, format: OutputFormat, writer: W) -> Result<()> {
    match format {
        OutputFormat::Csv => write_delimited(view, writer, b','),
        OutputFormat::Tsv => write_delimited(view, writer, b'\t'),
        OutputFormat::Json => write_json(view, writer),
        OutputFormat::Xlsx => write_xlsx(view, writer),
    }
}

/// Exports `view` to the file at `path`.
pub fn write_view(view: &DatasetView<'_>, format: OutputFormat, path: &Path) -> Result<()> {
    let write_error = |source| IngestError::Write {
        path: path.to_path_buf(),
        source,
    };
    let file = File::create(path).map_err(write_error)?;
    let mut writer = BufWriter::new(file);
    encode(view, format, &mut writer)?;
    writer.flush().map_err(write_error)?;
    info!(
        path = %path.display(),
        format = %format,
        rows = view.len(),
        "exported view"
    );
    Ok(())
}

fn cell_to_json(cell: &Value) -> JsonValue {
    match cell {
        Value::Null => JsonValue::Null,
        Value::Text(s) => JsonValue::String(s.clone()),
        Value::Number(v) if v.fract() == 0.0 && v.abs() <= MAX_SAFE_INTEGER => {
            JsonValue::Number(Number::from(*v as i64))
        }
        Value::Number(v) => Number::from_f64(*v).map_or(JsonValue::Null, JsonValue::Number),
    }
}
