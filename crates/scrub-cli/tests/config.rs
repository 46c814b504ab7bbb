//! Tests for loading engine settings from TOML.

use std::fs;

use scrub_cli::config::{DEFAULT_CONFIG_FILE, parse_options, resolve_options};
use scrub_model::{EngineOptions, OutputFormat};
use tempfile::TempDir;

#[test]
fn defaults_without_a_file() {
    let dir = TempDir::new().unwrap();
    let options = resolve_options(None, dir.path()).unwrap();
    assert_eq!(options, EngineOptions::default());
}

#[test]
fn working_directory_file_is_picked_up() {
    let dir = TempDir::new().unwrap();
    fs::write(
        dir.path().join(DEFAULT_CONFIG_FILE),
        "preview_rows = 3\n\n[export]\nformat = \"json\"\n",
    )
    .unwrap();
    let options = resolve_options(None, dir.path()).unwrap();
    assert_eq!(options.preview_rows, 3);
    assert_eq!(options.export.format, OutputFormat::Json);
    assert_eq!(options.export.suffix, "_cleaned");
    assert_eq!(options.value_list_limit, 200);
}

#[test]
fn explicit_path_wins_and_must_exist() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join(DEFAULT_CONFIG_FILE), "preview_rows = 3\n").unwrap();
    let explicit = dir.path().join("other.toml");
    fs::write(&explicit, "[detection]\nmin_matches = 2\n").unwrap();

    let options = resolve_options(Some(&explicit), dir.path()).unwrap();
    assert_eq!(options.preview_rows, 10);
    assert_eq!(options.detection.min_matches, 2);
    assert_eq!(options.detection.sample_rows, 10);

    let missing = dir.path().join("missing.toml");
    let err = resolve_options(Some(&missing), dir.path()).unwrap_err();
    assert!(format!("{err:#}").contains("missing.toml"));
}

#[test]
fn invalid_values_are_errors() {
    assert!(parse_options("preview_rows = \"ten\"").is_err());
    assert!(parse_options("[export]\nformat = \"pdf\"").is_err());
}
