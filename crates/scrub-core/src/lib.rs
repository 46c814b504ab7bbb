//! Profiling, suggestion and versioned-mutation engine for tabular data.
//!
//! The engine works on an in-memory [`scrub_model::Dataset`]:
//!
//! - [`inference`] and [`profile`]: column type inference and quality metrics
//! - [`suggestions`] and [`operations`]: anomaly detection and the pure
//!   transforms that fix it
//! - [`history`]: snapshot-based undo
//! - [`datetime`], [`filter`] and [`detection`]: date parsing, date-range
//!   views and date column heuristics
//! - [`session`]: the controller that owns one loaded file's state
//!
//! Every operation is synchronous and never modifies its input.

pub mod datetime;
pub mod detection;
pub mod error;
pub mod filter;
pub mod history;
pub mod inference;
pub mod operations;
pub mod profile;
pub mod redaction;
pub mod session;
pub mod suggestions;

pub use detection::{detect_date_columns, name_suggests_date};
pub use error::{CoreError, Result};
pub use filter::{DateRange, filter_by_date_range};
pub use history::{History, HistoryEntry};
pub use inference::classify;
pub use operations::{apply_kind, fill_missing, remove_duplicates, trim_whitespace};
pub use profile::profile;
pub use redaction::{redact_value, set_log_data_enabled};
pub use session::{
    AUTO_CLEAN_LABEL, ApplyOutcome, CleaningSession, ColumnValues, RowCounts, UndoOutcome,
};
pub use suggestions::derive_suggestions;
