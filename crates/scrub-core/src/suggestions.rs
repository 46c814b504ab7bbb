//! Derivation of cleaning suggestions from the full working dataset.

use std::collections::HashSet;

use scrub_model::{Dataset, Suggestion, SuggestionKind, Value};
use tracing::debug;

/// Number of rows whose canonical key repeats an earlier row.
pub fn count_duplicates(dataset: &Dataset) -> usize {
    let mut seen = HashSet::with_capacity(dataset.len());
    dataset
        .rows()
        .iter()
        .filter(|row| !seen.insert(row.key()))
        .count()
}

/// Returns true if any text value differs from its trimmed form.
pub fn has_untrimmed_text<'a, I>(values: I) -> bool
where
    I: IntoIterator<Item = &'a Value>,
{
    values
        .into_iter()
        .filter_map(Value::as_text)
        .any(|s| s.trim() != s)
}

/// Scans `dataset` and returns the applicable suggestions.
///
/// The duplicate check comes first, followed by the missing-value and
/// whitespace checks for each column in header order. The result is empty
/// when the dataset is clean.
pub fn derive_suggestions(dataset: &Dataset) -> Vec<Suggestion> {
    let mut suggestions = Vec::new();

    let duplicates = count_duplicates(dataset);
    if duplicates > 0 {
        suggestions.push(describe(&SuggestionKind::RemoveDuplicates, duplicates));
    }

    let view = dataset.view();
    for (index, column) in dataset.headers().iter().enumerate() {
        let missing = view.column_values(index).filter(|v| v.is_missing()).count();
        if missing > 0 {
            let kind = SuggestionKind::FillMissing {
                column: column.to_string(),
            };
            suggestions.push(describe(&kind, missing));
        }
        if has_untrimmed_text(view.column_values(index)) {
            let kind = SuggestionKind::TrimWhitespace {
                column: column.to_string(),
            };
            suggestions.push(describe(&kind, 0));
        }
    }

    debug!(
        rows = dataset.len(),
        duplicates,
        suggestion_count = suggestions.len(),
        "derived suggestions"
    );
    suggestions
}

/// Builds the user-facing text for a suggestion; `count` is the number of
/// duplicate rows or missing cells it addresses.
fn describe(kind: &SuggestionKind, count: usize) -> Suggestion {
    match kind {
        SuggestionKind::RemoveDuplicates => Suggestion::new(
            kind.clone(),
            "Remove Duplicate Rows",
            format!("Found and can remove {count} duplicate rows."),
            format!("Remove {count} duplicates"),
        ),
        SuggestionKind::FillMissing { column } => Suggestion::new(
            kind.clone(),
            format!("Handle Missing Values in \"{column}\""),
            format!(
                "This column has {count} missing values. You can fill them with the mean \
                 (for numeric) or mode (for text)."
            ),
            "Fill Missing Values",
        ),
        SuggestionKind::TrimWhitespace { column } => Suggestion::new(
            kind.clone(),
            format!("Trim Whitespace in \"{column}\""),
            "Some values in this column have leading or trailing whitespace.",
            "Trim Whitespace",
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(suggestions: &[Suggestion]) -> Vec<&str> {
        suggestions.iter().map(|s| s.id.as_str()).collect()
    }

    #[test]
    fn clean_dataset_has_no_suggestions() {
        let data = Dataset::from_rows(
            ["a", "b"],
            vec![
                vec![Value::text("x"), Value::Number(1.0)],
                vec![Value::text("y"), Value::Number(2.0)],
            ],
        )
        .unwrap();
        assert!(derive_suggestions(&data).is_empty());
    }

    #[test]
    fn order_is_duplicates_then_header_order() {
        let data = Dataset::from_rows(
            ["name", "age"],
            vec![
                vec![Value::text(" ann"), Value::Null],
                vec![Value::text(" ann"), Value::Null],
                vec![Value::text(""), Value::Number(3.0)],
            ],
        )
        .unwrap();
        let suggestions = derive_suggestions(&data);
        assert_eq!(
            ids(&suggestions),
            vec![
                "remove-duplicates",
                "fill-missing-name",
                "trim-whitespace-name",
                "fill-missing-age",
            ]
        );
        assert_eq!(
            suggestions[0].description,
            "Found and can remove 1 duplicate rows."
        );
        assert_eq!(suggestions[0].action_label, "Remove 1 duplicates");
        assert!(suggestions[1].description.starts_with("This column has 1 missing values."));
        assert_eq!(suggestions[2].column.as_deref(), Some("name"));
    }

    #[test]
    fn duplicates_respect_value_types() {
        let data = Dataset::from_rows(
            ["a"],
            vec![
                vec![Value::Number(1.0)],
                vec![Value::text("1")],
                vec![Value::Null],
                vec![Value::text("")],
            ],
        )
        .unwrap();
        assert_eq!(count_duplicates(&data), 0);
    }

    #[test]
    fn numbers_are_never_untrimmed() {
        assert!(!has_untrimmed_text(&[Value::Number(1.0), Value::text("a")]));
        assert!(has_untrimmed_text(&[Value::text("a\t")]));
    }
}
