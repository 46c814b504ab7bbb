//! Input format detection and export file naming.

use std::fmt;
use std::path::Path;

use scrub_model::OutputFormat;

use crate::error::{IngestError, Result};

/// Source formats the decoder understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InputFormat {
    Csv,
    Tsv,
    Json,
    /// Any workbook format the spreadsheet reader opens (xlsx, xls, ods, ...).
    Spreadsheet,
}

impl InputFormat {
    /// Picks the format from the file extension, case-insensitively.
    pub fn from_path(path: &Path) -> Result<Self> {
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase);
        match extension.as_deref() {
            Some("csv") => Ok(Self::Csv),
            Some("tsv") => Ok(Self::Tsv),
            Some("json") => Ok(Self::Json),
            Some("xlsx" | "xls" | "xlsm" | "xlsb" | "ods") => Ok(Self::Spreadsheet),
            _ => Err(IngestError::UnsupportedFormat {
                path: path.to_path_buf(),
            }),
        }
    }
}

impl fmt::Display for InputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Csv => "csv",
            Self::Tsv => "tsv",
            Self::Json => "json",
            Self::Spreadsheet => "spreadsheet",
        })
    }
}

/// Derives the export file name from the original one.
///
/// The last extension is dropped, `suffix` is appended and the extension of
/// `format` added: `sales.2023.csv` becomes `sales.2023_cleaned.json`.
pub fn export_file_name(original: &str, format: OutputFormat, suffix: &str) -> String {
    let stem = match original.rsplit_once('.') {
        Some((stem, ext)) if !ext.is_empty() && !ext.contains(['/', '\\']) => stem,
        _ => original,
    };
    format!("{stem}{suffix}.{}", format.extension())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_by_extension() {
        assert_eq!(InputFormat::from_path(Path::new("a.CSV")).unwrap(), InputFormat::Csv);
        assert_eq!(InputFormat::from_path(Path::new("a.tsv")).unwrap(), InputFormat::Tsv);
        assert_eq!(
            InputFormat::from_path(Path::new("dir/a.json")).unwrap(),
            InputFormat::Json
        );
        assert_eq!(
            InputFormat::from_path(Path::new("a.ods")).unwrap(),
            InputFormat::Spreadsheet
        );
        assert!(matches!(
            InputFormat::from_path(Path::new("a.txt")),
            Err(IngestError::UnsupportedFormat { .. })
        ));
        assert!(InputFormat::from_path(Path::new("noext")).is_err());
    }

    #[test]
    fn export_names() {
        assert_eq!(
            export_file_name("data.csv", OutputFormat::Csv, "_cleaned"),
            "data_cleaned.csv"
        );
        assert_eq!(
            export_file_name("sales.2023.xlsx", OutputFormat::Json, "_cleaned"),
            "sales.2023_cleaned.json"
        );
        assert_eq!(
            export_file_name("README", OutputFormat::Tsv, "_out"),
            "README_out.tsv"
        );
    }
}
