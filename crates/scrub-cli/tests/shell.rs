//! Tests for the interactive cleaning shell.

use std::fs;
use std::io::Cursor;

use scrub_cli::shell::run_shell;
use scrub_core::CleaningSession;
use scrub_ingest::read_dataset;
use scrub_model::EngineOptions;
use tempfile::TempDir;

const ORDERS: &str = "\
id,customer,amount,order_date
1, Ann ,10,2023-01-05
1, Ann ,10,2023-01-05
2,Bob,,2023-02-11
3,Cy,20,2023-03-20
";

fn run(script: &str) -> (TempDir, String) {
    run_on(ORDERS, script)
}

fn run_on(contents: &str, script: &str) -> (TempDir, String) {
    let dir = TempDir::new().unwrap();
    let source = dir.path().join("orders.csv");
    fs::write(&source, contents).unwrap();
    let mut session =
        CleaningSession::new(read_dataset(&source).unwrap(), EngineOptions::default());
    let mut output = Vec::new();
    run_shell(&mut session, &source, Cursor::new(script), &mut output).unwrap();
    (dir, String::from_utf8(output).unwrap())
}

#[test]
fn apply_undo_and_history() {
    let (_dir, output) = run("apply remove-duplicates\napply remove-duplicates\nhistory\nundo\nhistory\nundo\nquit\n");
    assert!(output.contains("Showing 4 of 4 rows"));
    assert!(output.contains("Applied: Remove Duplicate Rows (4 -> 3 rows)"));
    assert!(output.contains("Already applied: remove-duplicates"));
    assert!(output.contains("1. Remove Duplicate Rows"));
    assert!(output.contains("Undid: Remove Duplicate Rows (4 rows)"));
    assert!(output.contains("No changes yet"));
    assert!(output.contains("error: nothing to undo"));
}

#[test]
fn filter_and_export() {
    let (dir, output) = run(
        "apply-all\nfilter order_date 2023-01-01 2023-02-28\nexport json\nclear-filter\n",
    );
    assert!(output.contains("Applied: Applied Auto-Clean (4 -> 3 rows)"));
    assert!(output.contains("Showing 2 of 3 rows"));
    assert!(output.contains("Showing 3 of 3 rows"));

    let exported = fs::read_to_string(dir.path().join("orders_cleaned.json")).unwrap();
    assert!(exported.contains("\"customer\": \"Ann\""));
    assert!(exported.contains("\"amount\": \"15.00\""));
    assert!(!exported.contains("Cy"));
}

#[test]
fn errors_do_not_end_the_session() {
    let (_dir, output) = run(
        "filter order_date 2023-01-01\nfilter order_date 2023-01-01 \"\"\nvalues nope\nbogus\ndates\n",
    );
    assert!(output.contains("error: unrecognised command or arguments: filter"));
    assert!(output.contains("Please select a column, a start date, and an end date."));
    assert!(output.contains("error: column 'nope' not found"));
    assert!(output.contains("error: unrecognised command or arguments: bogus"));
    assert!(output.contains("  order_date"));
}

#[test]
fn quoted_values_argument() {
    let (_dir, output) = run("values \"customer\"\n");
    assert!(output.contains("3 distinct values in \"customer\""));
    assert!(output.contains("   Ann "));
}

#[test]
fn refresh_offers_duplicates_created_by_trimming() {
    let contents = "id,customer\n1, Ann \n1, Ann \n1,Ann\n";
    let (_dir, output) = run_on(
        contents,
        "apply remove-duplicates\napply trim-whitespace-customer\napply remove-duplicates\nrefresh\napply remove-duplicates\n",
    );
    assert!(output.contains("Applied: Remove Duplicate Rows (3 -> 2 rows)"));
    assert!(output.contains("Already applied: remove-duplicates"));
    assert!(output.contains("Applied: Remove Duplicate Rows (2 -> 1 rows)"));
}
