//! Reading and writing datasets for the scrub cleaning assistant.
//!
//! # Features
//!
//! - **Decoding**: CSV, TSV, JSON arrays of objects and spreadsheets into a
//!   [`scrub_model::Dataset`]
//! - **Encoding**: CSV, TSV, JSON and xlsx export of a
//!   [`scrub_model::DatasetView`]
//! - **Naming**: export file names derived from the input name
//!
//! # Example
//!
//! ```ignore
//! use std::path::Path;
//! use scrub_ingest::{read_dataset, write_view, export_file_name};
//! use scrub_model::OutputFormat;
//!
//! let data = read_dataset(Path::new("orders.csv"))?;
//! let name = export_file_name("orders.csv", OutputFormat::Json, "_cleaned");
//! write_view(&data.view(), OutputFormat::Json, Path::new(&name))?;
//! ```

mod decode;
mod encode;
mod error;
mod format;

// === Error Types ===
pub use error::{IngestError, Result};

// === Decoding ===
pub use decode::{
    EMPTY_HEADER, make_unique, read_dataset, read_delimited, read_json, read_spreadsheet,
};

// === Encoding ===
pub use encode::{encode, write_delimited, write_json, write_view, write_xlsx};

// === Formats ===
pub use format::{InputFormat, export_file_name};
