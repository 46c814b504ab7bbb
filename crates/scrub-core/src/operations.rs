//! Cleaning operations.
//!
//! Each operation reads a dataset and returns a new one; the input is never
//! modified. All of them are no-ops on data that is already clean.

use std::collections::{HashMap, HashSet};

use scrub_model::{Dataset, InferredType, SuggestionKind, Value};
use tracing::debug;

use crate::error::{CoreError, Result};
use crate::inference::classify;
use crate::redaction::redact_value;

/// Keeps the first occurrence of every distinct row, preserving order.
pub fn remove_duplicates(dataset: &Dataset) -> Dataset {
    let mut seen = HashSet::with_capacity(dataset.len());
    let mut cleaned = dataset.clone();
    cleaned.retain_rows(|row| seen.insert(row.key()));
    debug!(
        removed = dataset.len() - cleaned.len(),
        remaining = cleaned.len(),
        "removed duplicate rows"
    );
    cleaned
}

/// Replaces missing cells of `column` with the column mean or mode.
///
/// Numeric columns get the mean of their present values formatted with two
/// decimals (as text, e.g. `"15.00"`). Text and mixed columns get the mode.
/// A column with no present values is filled with `"0.00"`.
pub fn fill_missing(dataset: &Dataset, column: &str) -> Result<Dataset> {
    let index = column_index(dataset, column)?;
    let present: Vec<&Value> = dataset
        .rows()
        .iter()
        .map(|row| row.get(index))
        .filter(|v| !v.is_missing())
        .collect();
    let fill = fill_value(&present);

    let mut cleaned = dataset.clone();
    let mut filled = 0usize;
    for row in cleaned.rows_mut() {
        if row.get(index).is_missing() {
            row.set(index, fill.clone());
            filled += 1;
        }
    }
    debug!(
        column,
        filled,
        fill_value = redact_value(&fill.to_string()),
        "filled missing values"
    );
    Ok(cleaned)
}

/// Trims leading and trailing whitespace from every text cell of `column`.
pub fn trim_whitespace(dataset: &Dataset, column: &str) -> Result<Dataset> {
    let index = column_index(dataset, column)?;
    let mut cleaned = dataset.clone();
    let mut trimmed = 0usize;
    for row in cleaned.rows_mut() {
        let replacement = match row.get(index) {
            Value::Text(s) if s.trim() != s => Value::text(s.trim()),
            _ => continue,
        };
        row.set(index, replacement);
        trimmed += 1;
    }
    debug!(column, trimmed, "trimmed whitespace");
    Ok(cleaned)
}

/// Runs the operation behind a suggestion.
pub fn apply_kind(dataset: &Dataset, kind: &SuggestionKind) -> Result<Dataset> {
    match kind {
        SuggestionKind::RemoveDuplicates => Ok(remove_duplicates(dataset)),
        SuggestionKind::FillMissing { column } => fill_missing(dataset, column),
        SuggestionKind::TrimWhitespace { column } => trim_whitespace(dataset, column),
    }
}

/// The value used to fill missing cells, given the present ones.
pub fn fill_value(present: &[&Value]) -> Value {
    if present.is_empty() {
        return Value::text(format_two_decimals(0.0));
    }
    match classify(present.iter().copied()) {
        InferredType::Numeric => Value::text(format_two_decimals(mean(present))),
        InferredType::Text | InferredType::Mixed => mode(present.iter().copied())
            .cloned()
            .unwrap_or_default(),
    }
}

/// Arithmetic mean of the numeric readings of `values`.
pub fn mean(values: &[&Value]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    let sum: f64 = values.iter().filter_map(|v| v.numeric_value()).sum();
    sum / values.len() as f64
}

/// Most frequent value; the first value to reach the highest count wins and
/// is not displaced by a later value that merely ties it.
pub fn mode<'a, I>(values: I) -> Option<&'a Value>
where
    I: IntoIterator<Item = &'a Value>,
{
    let mut counts = HashMap::new();
    let mut best = None;
    let mut best_count = 0usize;
    for value in values {
        let count = counts.entry(value.key()).or_insert(0usize);
        *count += 1;
        if *count > best_count {
            best_count = *count;
            best = Some(value);
        }
    }
    best
}

// Halves round away from zero ("1.125" -> "1.13"); `{:.2}` alone would
// round them to even. Tiny negative means print as "0.00", not "-0.00".
fn format_two_decimals(value: f64) -> String {
    let rounded = (value * 100.0).round() / 100.0;
    let normalized = if rounded == 0.0 { 0.0 } else { rounded };
    format!("{normalized:.2}")
}

fn column_index(dataset: &Dataset, column: &str) -> Result<usize> {
    dataset
        .column_index(column)
        .ok_or_else(|| CoreError::unknown_column(column))
}
