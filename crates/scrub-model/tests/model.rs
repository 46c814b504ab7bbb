//! Tests for scrub-model types.

use scrub_model::{
    ColumnMetrics, EngineOptions, InferredType, OutputFormat, QualityReport, Suggestion,
    SuggestionKind, Value,
};

fn metrics(column: &str, missing: usize, total: usize) -> ColumnMetrics {
    ColumnMetrics {
        column: column.to_string(),
        total_rows: total,
        missing_count: missing,
        missing_percentage: 0.0,
        unique_count: 0,
        inferred_type: InferredType::Mixed,
        sample_values: vec![Value::Null; total],
    }
}

#[test]
fn quality_report_lookup() {
    let report = QualityReport::Columns(vec![metrics("a", 1, 3), metrics("b", 0, 3)]);
    assert_eq!(report.get("a").map(ColumnMetrics::non_missing_count), Some(2));
    assert!(report.get("c").is_none());
    assert!(!report.is_no_data());
    assert!(QualityReport::NoData.columns().is_empty());
}

#[test]
fn missing_percentage_label_has_two_decimals() {
    let mut m = metrics("a", 1, 3);
    m.missing_percentage = 33.33;
    assert_eq!(m.missing_percentage_label(), "33.33");
    m.missing_percentage = 0.0;
    assert_eq!(m.missing_percentage_label(), "0.00");
}

#[test]
fn options_deserialize_partial_json() {
    let options: EngineOptions =
        serde_json::from_str(r#"{"preview_rows": 25, "export": {"format": "json"}}"#)
            .expect("deserialize options");
    assert_eq!(options.preview_rows, 25);
    assert_eq!(options.value_list_limit, 200);
    assert_eq!(options.export.format, OutputFormat::Json);
    assert_eq!(options.export.suffix, "_cleaned");
    assert_eq!(options.detection.sample_rows, 10);
}

#[test]
fn output_format_parse() {
    assert_eq!(OutputFormat::parse("CSV"), Some(OutputFormat::Csv));
    assert_eq!(OutputFormat::parse(".tsv"), Some(OutputFormat::Tsv));
    assert_eq!(OutputFormat::parse("excel"), Some(OutputFormat::Xlsx));
    assert_eq!(OutputFormat::parse("parquet"), None);
}

#[test]
fn suggestion_serializes() {
    let suggestion = Suggestion::new(
        SuggestionKind::TrimWhitespace {
            column: "name".into(),
        },
        "Trim Whitespace in \"name\"",
        "Some values in this column have leading or trailing whitespace.",
        "Trim Whitespace",
    );
    let json = serde_json::to_string(&suggestion).expect("serialize suggestion");
    let round: Suggestion = serde_json::from_str(&json).expect("deserialize suggestion");
    assert_eq!(round, suggestion);
}
