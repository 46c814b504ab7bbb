//! Terminal renderings of reports, suggestions and previews.

use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use scrub_core::{ApplyOutcome, ColumnValues, RowCounts, UndoOutcome};
use scrub_model::{DatasetView, InferredType, QualityReport, Suggestion, Value};

pub const NO_DATA_MESSAGE: &str = "No data to display";
pub const CLEAN_MESSAGE: &str = "Your data looks clean";

/// Quality metrics table, or the no-data message for an empty view.
pub fn render_quality(report: &QualityReport) -> String {
    if report.is_no_data() {
        return NO_DATA_MESSAGE.to_string();
    }
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Column"),
        header_cell("Type"),
        header_cell("Missing"),
        header_cell("Missing %"),
        header_cell("Unique"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 2, CellAlignment::Right);
    align_column(&mut table, 3, CellAlignment::Right);
    align_column(&mut table, 4, CellAlignment::Right);
    for metrics in report.columns() {
        table.add_row(vec![
            Cell::new(&metrics.column).add_attribute(Attribute::Bold),
            type_cell(metrics.inferred_type),
            count_cell(metrics.missing_count, Color::Yellow),
            Cell::new(format!("{}%", metrics.missing_percentage_label())),
            Cell::new(metrics.unique_count),
        ]);
    }
    table.to_string()
}

/// Suggestion table, or the clean-data message when there is nothing to do.
pub fn render_suggestions(suggestions: &[Suggestion]) -> String {
    if suggestions.is_empty() {
        return CLEAN_MESSAGE.to_string();
    }
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Id"),
        header_cell("Suggestion"),
        header_cell("Details"),
        header_cell("Action"),
        header_cell("Status"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 4, CellAlignment::Center);
    for suggestion in suggestions {
        let status = if suggestion.applied {
            Cell::new("applied").fg(Color::Green)
        } else {
            dim_cell("pending")
        };
        table.add_row(vec![
            Cell::new(&suggestion.id).fg(Color::Blue),
            Cell::new(&suggestion.title).add_attribute(Attribute::Bold),
            Cell::new(&suggestion.description),
            Cell::new(&suggestion.action_label),
            status,
        ]);
    }
    table.to_string()
}

/// The rows of `view` as a table, missing cells dimmed.
pub fn render_preview(view: &DatasetView<'_>) -> String {
    if view.is_empty() {
        return NO_DATA_MESSAGE.to_string();
    }
    let mut table = Table::new();
    table.set_header(view.headers().iter().map(header_cell).collect::<Vec<_>>());
    apply_table_style(&mut table);
    for row in view.rows() {
        table.add_row(row.cells().iter().map(value_cell).collect::<Vec<_>>());
    }
    table.to_string()
}

pub fn render_row_counts(counts: RowCounts) -> String {
    format!("Showing {} of {} rows", counts.shown, counts.total)
}

/// Numbered list of undoable steps, oldest first.
pub fn render_history(labels: &[&str]) -> String {
    if labels.is_empty() {
        return "No changes yet".to_string();
    }
    labels
        .iter()
        .enumerate()
        .map(|(i, label)| format!("{}. {label}", i + 1))
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn render_values(values: &ColumnValues) -> String {
    let mut lines: Vec<String> = values
        .values
        .iter()
        .map(|value| format!("  {}", display_value(value)))
        .collect();
    let summary = if values.is_truncated() {
        format!(
            "Showing first {} of {} distinct values in \"{}\"",
            values.values.len(),
            values.distinct_count,
            values.column
        )
    } else {
        format!(
            "{} distinct values in \"{}\"",
            values.distinct_count, values.column
        )
    };
    lines.insert(0, summary);
    lines.join("\n")
}

pub fn render_dates(columns: &[String]) -> String {
    if columns.is_empty() {
        return "No date columns detected".to_string();
    }
    columns
        .iter()
        .map(|column| format!("  {column}"))
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn render_outcome(outcome: &ApplyOutcome) -> String {
    match outcome {
        ApplyOutcome::Applied {
            label,
            rows_before,
            rows_after,
            ..
        } => format!("Applied: {label} ({rows_before} -> {rows_after} rows)"),
        ApplyOutcome::AlreadyApplied { id } => format!("Already applied: {id}"),
        ApplyOutcome::NothingPending => "Nothing to apply".to_string(),
    }
}

pub fn render_undo(outcome: &UndoOutcome) -> String {
    format!("Undid: {} ({} rows)", outcome.label, outcome.rows)
}

/// Text shown for a cell; missing cells read `(empty)`.
pub fn display_value(value: &Value) -> String {
    if value.is_missing() {
        "(empty)".to_string()
    } else {
        value.to_string()
    }
}

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn type_cell(inferred: InferredType) -> Cell {
    let color = match inferred {
        InferredType::Numeric => Color::Green,
        InferredType::Text => Color::Blue,
        InferredType::Mixed => Color::Magenta,
    };
    Cell::new(inferred.label()).fg(color)
}

fn value_cell(value: &Value) -> Cell {
    match value {
        Value::Null => dim_cell(""),
        Value::Number(_) => Cell::new(value).set_alignment(CellAlignment::Right),
        Value::Text(s) => Cell::new(s),
    }
}

fn count_cell(count: usize, color: Color) -> Cell {
    if count > 0 {
        Cell::new(count).fg(color).add_attribute(Attribute::Bold)
    } else {
        dim_cell(count)
    }
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}

#[cfg(test)]
mod tests {
    use super::*;
    use scrub_model::{ColumnMetrics, SuggestionKind};

    #[test]
    fn empty_report_renders_message() {
        assert_eq!(render_quality(&QualityReport::NoData), NO_DATA_MESSAGE);
        assert_eq!(render_suggestions(&[]), CLEAN_MESSAGE);
    }

    #[test]
    fn quality_table_lists_columns() {
        let report = QualityReport::Columns(vec![ColumnMetrics {
            column: "age".into(),
            total_rows: 3,
            missing_count: 1,
            missing_percentage: 33.33,
            unique_count: 2,
            inferred_type: InferredType::Numeric,
            sample_values: Vec::new(),
        }]);
        let rendered = render_quality(&report);
        assert!(rendered.contains("age"));
        assert!(rendered.contains("Numeric"));
        assert!(rendered.contains("33.33%"));
    }

    #[test]
    fn suggestion_status_is_shown() {
        let mut suggestion = Suggestion::new(
            SuggestionKind::RemoveDuplicates,
            "Remove Duplicate Rows",
            "Found and can remove 1 duplicate rows.",
            "Remove 1 duplicates",
        );
        suggestion.applied = true;
        let rendered = render_suggestions(&[suggestion]);
        assert!(rendered.contains("remove-duplicates"));
        assert!(rendered.contains("applied"));
    }

    #[test]
    fn plain_text_renderings() {
        assert_eq!(
            render_row_counts(RowCounts { shown: 4, total: 10 }),
            "Showing 4 of 10 rows"
        );
        assert_eq!(render_history(&[]), "No changes yet");
        insta::assert_snapshot!(render_history(&["Trim Whitespace in \"a\"", "Applied Auto-Clean"]), @r###"
        1. Trim Whitespace in "a"
        2. Applied Auto-Clean
        "###);
        let values = ColumnValues {
            column: "city".into(),
            values: vec![Value::text("Oslo"), Value::Null],
            distinct_count: 3,
        };
        insta::assert_snapshot!(render_values(&values), @r###"
        Showing first 2 of 3 distinct values in "city"
          Oslo
          (empty)
        "###);
    }
}
