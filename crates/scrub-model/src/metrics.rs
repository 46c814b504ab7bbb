//! Column quality metrics produced by the profiler.

use std::fmt;

use serde::Serialize;

use crate::value::Value;

/// Classification of a column's non-missing values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum InferredType {
    Numeric,
    Text,
    Mixed,
}

impl InferredType {
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Numeric => "Numeric",
            Self::Text => "Text",
            Self::Mixed => "Mixed",
        }
    }
}

impl fmt::Display for InferredType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Quality metrics for one column of a dataset view.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ColumnMetrics {
    /// Column name.
    pub column: String,
    /// Number of rows the metrics were computed over.
    pub total_rows: usize,
    /// Null or empty-string cells.
    pub missing_count: usize,
    /// `missing_count / total_rows * 100`, rounded to two decimals.
    pub missing_percentage: f64,
    /// Distinct non-missing values.
    pub unique_count: usize,
    pub inferred_type: InferredType,
    /// The raw values, one per row, in view order.
    #[serde(skip)]
    pub sample_values: Vec<Value>,
}

impl ColumnMetrics {
    pub fn non_missing_count(&self) -> usize {
        self.total_rows - self.missing_count
    }

    /// Missing percentage formatted with two decimals, e.g. `"33.33"`.
    pub fn missing_percentage_label(&self) -> String {
        format!("{:.2}", self.missing_percentage)
    }
}

/// Result of profiling a view: either per-column metrics or nothing to show.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "state", content = "columns", rename_all = "snake_case")]
pub enum QualityReport {
    /// The view has no rows.
    NoData,
    /// Metrics in header order.
    Columns(Vec<ColumnMetrics>),
}

impl QualityReport {
    pub fn is_no_data(&self) -> bool {
        matches!(self, Self::NoData)
    }

    pub fn columns(&self) -> &[ColumnMetrics] {
        match self {
            Self::NoData => &[],
            Self::Columns(columns) => columns,
        }
    }

    pub fn get(&self, column: &str) -> Option<&ColumnMetrics> {
        self.columns().iter().find(|m| m.column == column)
    }
}
