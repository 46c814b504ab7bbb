//! Heuristic detection of date-valued columns.

use scrub_model::{DetectionOptions, HeaderSet, Row};

use crate::datetime::parse_cell_date;

/// True if `name` contains one of the configured patterns, ignoring case.
pub fn name_suggests_date(name: &str, patterns: &[String]) -> bool {
    let name = name.to_lowercase();
    patterns
        .iter()
        .any(|pattern| name.contains(&pattern.to_lowercase()))
}

/// Returns the columns that look date-valued, in header order.
///
/// A column qualifies by name, or when more than `min_matches` of the first
/// `sample_rows` rows hold a date in either supported encoding.
pub fn detect_date_columns(
    headers: &HeaderSet,
    rows: &[Row],
    options: &DetectionOptions,
) -> Vec<String> {
    let sample = &rows[..rows.len().min(options.sample_rows)];
    headers
        .iter()
        .enumerate()
        .filter(|(index, name)| {
            name_suggests_date(name, &options.name_patterns) || {
                let matches = sample
                    .iter()
                    .filter(|row| parse_cell_date(row.get(*index)).is_some())
                    .count();
                matches > options.min_matches
            }
        })
        .map(|(_, name)| name.to_string())
        .collect()
}
