//! Error types for decoding and exporting datasets.

use std::path::PathBuf;

use scrub_model::{ModelError, OutputFormat};
use thiserror::Error;

/// Errors that can occur while reading or writing dataset files.
#[derive(Debug, Error)]
pub enum IngestError {
    // === File System Errors ===
    /// Input file does not exist.
    #[error("file not found: {path}")]
    FileNotFound { path: PathBuf },

    /// Failed to read the input file.
    #[error("failed to read file {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Failed to write the export file.
    #[error("failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    // === Format Errors ===
    /// The file extension is not one we can decode.
    #[error("unsupported file format: {path}")]
    UnsupportedFormat { path: PathBuf },

    // === Parsing Errors ===
    /// Malformed delimited text.
    #[error("failed to parse {path}: {message}")]
    CsvParse { path: PathBuf, message: String },

    /// Malformed JSON.
    #[error("failed to parse JSON {path}: {message}")]
    JsonParse { path: PathBuf, message: String },

    /// Well-formed JSON that is not a non-empty array of objects.
    #[error("unexpected JSON layout in {path}: {reason}")]
    JsonShape { path: PathBuf, reason: String },

    /// The workbook could not be opened or read.
    #[error("failed to read spreadsheet {path}: {message}")]
    Spreadsheet { path: PathBuf, message: String },

    /// No header row could be found.
    #[error("file has no header row: {path}")]
    EmptyInput { path: PathBuf },

    /// Decoded rows do not form a valid dataset.
    #[error("invalid dataset in {path}: {source}")]
    Model {
        path: PathBuf,
        #[source]
        source: ModelError,
    },

    // === Encoding Errors ===
    /// Serialization of a view failed.
    #[error("failed to encode {format}: {message}")]
    Encode {
        format: OutputFormat,
        message: String,
    },
}

impl IngestError {
    /// True for errors raised while decoding an input file.
    ///
    /// A decode failure means no dataset was produced; nothing partial is
    /// ever returned.
    pub fn is_decode_failure(&self) -> bool {
        !matches!(self, Self::Write { .. } | Self::Encode { .. })
    }

    pub(crate) fn read(path: &std::path::Path, source: std::io::Error) -> Self {
        if source.kind() == std::io::ErrorKind::NotFound {
            Self::FileNotFound {
                path: path.to_path_buf(),
            }
        } else {
            Self::FileRead {
                path: path.to_path_buf(),
                source,
            }
        }
    }
}

/// Result type for ingestion operations.
pub type Result<T> = std::result::Result<T, IngestError>;
