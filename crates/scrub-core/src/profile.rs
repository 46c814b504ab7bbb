//! Per-column quality metrics over a dataset view.

use std::collections::HashSet;

use scrub_model::{ColumnMetrics, DatasetView, QualityReport, Value};
use tracing::debug;

use crate::inference::classify;

/// Profiles every column of `view` in header order.
///
/// An empty view yields [`QualityReport::NoData`], even when headers exist.
pub fn profile(view: &DatasetView<'_>) -> QualityReport {
    if view.is_empty() {
        return QualityReport::NoData;
    }
    let columns: Vec<ColumnMetrics> = view
        .headers()
        .iter()
        .enumerate()
        .map(|(index, name)| profile_column(name, view.column_values(index).cloned().collect()))
        .collect();
    debug!(
        rows = view.len(),
        columns = columns.len(),
        "profiled view"
    );
    QualityReport::Columns(columns)
}

/// Computes metrics for one column from its full value sequence.
pub fn profile_column(column: &str, values: Vec<Value>) -> ColumnMetrics {
    let total_rows = values.len();
    let mut missing_count = 0usize;
    let mut distinct = HashSet::new();
    for value in &values {
        if value.is_missing() {
            missing_count += 1;
        } else {
            distinct.insert(value.key());
        }
    }
    ColumnMetrics {
        column: column.to_string(),
        total_rows,
        missing_count,
        missing_percentage: missing_percentage(missing_count, total_rows),
        unique_count: distinct.len(),
        inferred_type: classify(&values),
        sample_values: values,
    }
}

/// `missing / total * 100` rounded to two decimals; zero for an empty column.
pub fn missing_percentage(missing: usize, total: usize) -> f64 {
    if total == 0 {
        return 0.0;
    }
    let raw = missing as f64 / total as f64 * 100.0;
    (raw * 100.0).round() / 100.0
}
