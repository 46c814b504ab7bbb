//! Property-based tests for the cleaning engine.

use proptest::prelude::*;
use scrub_core::{
    CleaningSession, derive_suggestions, profile, remove_duplicates, trim_whitespace,
};
use scrub_model::{Dataset, EngineOptions, Value};

const COLUMNS: [&str; 3] = ["name", "amount", "note"];

fn cell() -> impl Strategy<Value = Value> {
    prop_oneof![
        Just(Value::Null),
        Just(Value::text("")),
        (-50i32..50).prop_map(|n| Value::Number(f64::from(n))),
        "[ ]{0,2}[a-c1-3]{1,3}[ ]{0,2}".prop_map(Value::Text),
    ]
}

fn dataset() -> impl Strategy<Value = Dataset> {
    prop::collection::vec(prop::collection::vec(cell(), COLUMNS.len()), 0..24)
        .prop_map(|rows| Dataset::from_rows(COLUMNS, rows).unwrap())
}

proptest! {
    #[test]
    fn trim_is_idempotent(data in dataset()) {
        for column in COLUMNS {
            let once = trim_whitespace(&data, column).unwrap();
            let twice = trim_whitespace(&once, column).unwrap();
            prop_assert_eq!(once, twice);
        }
    }

    #[test]
    fn dedup_output_has_no_duplicates(data in dataset()) {
        let cleaned = remove_duplicates(&data);
        prop_assert!(cleaned.len() <= data.len());
        prop_assert_eq!(remove_duplicates(&cleaned), cleaned);
    }

    #[test]
    fn profiler_totals_add_up(data in dataset()) {
        let report = profile(&data.view());
        prop_assert_eq!(report.is_no_data(), data.is_empty());
        for metrics in report.columns() {
            prop_assert_eq!(metrics.total_rows, data.len());
            prop_assert_eq!(metrics.missing_count + metrics.non_missing_count(), data.len());
            prop_assert!(metrics.unique_count <= metrics.non_missing_count());
            prop_assert!((0.0..=100.0).contains(&metrics.missing_percentage));
        }
    }

    #[test]
    fn suggestions_are_deterministic(data in dataset()) {
        let ids = |d: &Dataset| -> Vec<String> {
            derive_suggestions(d).into_iter().map(|s| s.id).collect()
        };
        prop_assert_eq!(ids(&data), ids(&data));
    }

    #[test]
    fn undo_round_trip(data in dataset()) {
        let mut session = CleaningSession::new(data.clone(), EngineOptions::default());
        let ids: Vec<String> = session.suggestions().into_iter().map(|s| s.id).collect();
        for id in &ids {
            session.apply(id).unwrap();
        }
        prop_assert_eq!(session.history_labels().len(), ids.len());
        prop_assert!(session.pending().is_empty());

        for _ in &ids {
            session.undo().unwrap();
        }
        prop_assert_eq!(session.working(), &data);
        prop_assert_eq!(session.pending().len(), ids.len());
        prop_assert!(!session.can_undo());
    }

    #[test]
    fn cleaning_keeps_the_header_set(data in dataset()) {
        let mut session = CleaningSession::new(data.clone(), EngineOptions::default());
        session.apply_all().unwrap();
        prop_assert_eq!(session.working().headers(), data.headers());
        for row in session.working().rows() {
            prop_assert_eq!(row.len(), COLUMNS.len());
        }
    }
}
