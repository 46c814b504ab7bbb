//! Configuration options for profiling, detection and export.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Target format for exporting a view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Comma-delimited text.
    #[default]
    Csv,
    /// Tab-delimited text.
    Tsv,
    /// Pretty-printed array of objects.
    Json,
    /// Spreadsheet workbook.
    Xlsx,
}

impl OutputFormat {
    /// File extension without the leading dot.
    pub const fn extension(&self) -> &'static str {
        match self {
            Self::Csv => "csv",
            Self::Tsv => "tsv",
            Self::Json => "json",
            Self::Xlsx => "xlsx",
        }
    }

    /// Parses a format name or extension, case-insensitively.
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().trim_start_matches('.').to_ascii_lowercase().as_str() {
            "csv" => Some(Self::Csv),
            "tsv" => Some(Self::Tsv),
            "json" => Some(Self::Json),
            "xlsx" | "excel" => Some(Self::Xlsx),
            _ => None,
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

/// How candidate date columns are detected.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DetectionOptions {
    /// Number of leading rows sampled per column.
    pub sample_rows: usize,
    /// A column qualifies when strictly more sampled values than this look like dates.
    pub min_matches: usize,
    /// Case-insensitive substrings that mark a column name as date-like.
    pub name_patterns: Vec<String>,
}

impl Default for DetectionOptions {
    fn default() -> Self {
        Self {
            sample_rows: 10,
            min_matches: 5,
            name_patterns: ["date", "year", "time", "dt"]
                .into_iter()
                .map(String::from)
                .collect(),
        }
    }
}

/// Export naming and format defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExportOptions {
    /// Appended to the original file stem, e.g. `data_cleaned.csv`.
    pub suffix: String,
    pub format: OutputFormat,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            suffix: "_cleaned".to_string(),
            format: OutputFormat::Csv,
        }
    }
}

/// Options controlling a cleaning session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineOptions {
    /// Rows shown by a preview.
    pub preview_rows: usize,
    /// Distinct values listed for a single column.
    pub value_list_limit: usize,
    pub detection: DetectionOptions,
    pub export: ExportOptions,
}

impl Default for EngineOptions {
    fn default() -> Self {
        Self {
            preview_rows: 10,
            value_list_limit: 200,
            detection: DetectionOptions::default(),
            export: ExportOptions::default(),
        }
    }
}

impl EngineOptions {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_preview_rows(mut self, rows: usize) -> Self {
        self.preview_rows = rows;
        self
    }

    #[must_use]
    pub fn with_export_format(mut self, format: OutputFormat) -> Self {
        self.export.format = format;
        self
    }
}
