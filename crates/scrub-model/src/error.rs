use thiserror::Error;

/// Errors raised while assembling a dataset from decoded parts.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ModelError {
    #[error("duplicate column name: {name}")]
    DuplicateHeader { name: String },
    #[error("row {row} has {found} cells, expected {expected}")]
    RowWidth {
        row: usize,
        expected: usize,
        found: usize,
    },
}

pub type Result<T> = std::result::Result<T, ModelError>;
