//! Data model for the scrub tabular cleaning assistant.
//!
//! - [`value`]: cell values and structural keys used for equality
//! - [`dataset`]: header sets, rows, owned datasets and borrowed views
//! - [`metrics`]: per-column quality metrics
//! - [`suggestion`]: cleaning suggestions and their stable ids
//! - [`options`]: engine configuration

pub mod dataset;
pub mod error;
pub mod metrics;
pub mod options;
pub mod suggestion;
pub mod value;

pub use dataset::{Dataset, DatasetView, HeaderSet, Row};
pub use error::{ModelError, Result};
pub use metrics::{ColumnMetrics, InferredType, QualityReport};
pub use options::{DetectionOptions, EngineOptions, ExportOptions, OutputFormat};
pub use suggestion::{
    FILL_MISSING_PREFIX, REMOVE_DUPLICATES_ID, Suggestion, SuggestionKind,
    TRIM_WHITESPACE_PREFIX,
};
pub use value::{CellKey, RowKey, Value, parse_number};
