//! Error types for the cleaning engine.

use thiserror::Error;

/// Errors reported by engine operations.
///
/// Empty results (no suggestions, no duplicates, no matching rows) are not
/// errors; neither is a cell that fails to parse as a date.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CoreError {
    /// Undo requested with nothing to undo.
    #[error("nothing to undo")]
    EmptyHistory,

    /// A date filter was requested without a column or without both bounds,
    /// or with bounds that are not dates.
    #[error("invalid filter: {reason}")]
    InvalidFilterRequest { reason: String },

    /// No suggestion with this id is on offer.
    #[error("unknown suggestion: {id}")]
    UnknownSuggestion { id: String },

    /// The column is not part of the header set.
    #[error("column '{column}' not found")]
    UnknownColumn { column: String },
}

impl CoreError {
    pub(crate) fn invalid_filter(reason: impl Into<String>) -> Self {
        Self::InvalidFilterRequest {
            reason: reason.into(),
        }
    }

    pub(crate) fn unknown_column(column: &str) -> Self {
        Self::UnknownColumn {
            column: column.to_string(),
        }
    }
}

/// Result type for engine operations.
pub type Result<T> = std::result::Result<T, CoreError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        assert_eq!(CoreError::EmptyHistory.to_string(), "nothing to undo");
        assert_eq!(
            CoreError::unknown_column("age").to_string(),
            "column 'age' not found"
        );
        assert_eq!(
            CoreError::invalid_filter("missing end date").to_string(),
            "invalid filter: missing end date"
        );
    }
}
