//! Integration tests that exercise the loader against an on-disk fixture file.
//!
//! These complement the unit tests inside csv_loader.rs (which all use
//! inline string literals) by verifying that the full read-from-disk path
//! works end-to-end, including the batch report built on top of it.

use std::path::PathBuf;

use pretty_assertions::assert_eq;
use rust_decimal_macros::dec;
use solar_core::RevenueInputs;
use solar_ui::{AppConfig, app, csv_loader};

/// Path to the sample CSV shipped with the test fixtures.
fn fixture_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join("sample_scenarios.csv")
}

#[test]
fn test_load_fixture_file_succeeds() {
    let scenarios =
        csv_loader::load_from_file(&fixture_path()).expect("fixture file should load without error");

    // The fixture has exactly 4 rows.
    assert_eq!(scenarios.len(), 4);
}

#[test]
fn test_load_fixture_rows_in_file_order() {
    let scenarios = csv_loader::load_from_file(&fixture_path()).unwrap();

    let labels: Vec<&str> = scenarios.iter().map(|s| s.label.as_str()).collect();
    assert_eq!(
        labels,
        vec!["Calculator defaults", "Idle panels", "Full share", "Half share"]
    );
    assert_eq!(scenarios[0].inputs, RevenueInputs::default());
    assert_eq!(
        scenarios[2].inputs,
        RevenueInputs::new(dec!(10), dec!(150), dec!(100))
    );
}

#[test]
fn test_batch_report_matches_reference_figures() {
    let report = app::run_batch(&AppConfig::default(), &fixture_path()).unwrap();
    let lines: Vec<&str> = report.lines().collect();

    // Header plus one line per scenario.
    assert_eq!(lines.len(), 5);
    assert!(lines[1].contains("19,200 GNF") && lines[1].contains("230,400 GNF"));
    assert!(lines[2].contains("0 GNF"));
    assert!(lines[3].contains("45,000 GNF") && lines[3].contains("540,000 GNF"));
    assert!(lines[4].contains("22,500 GNF") && lines[4].contains("270,000 GNF"));
}

#[test]
fn test_batch_uses_configured_currency_unit() {
    let config = AppConfig {
        currency_unit: "XOF".to_string(),
        ..AppConfig::default()
    };

    let report = app::run_batch(&config, &fixture_path()).unwrap();

    assert!(report.contains("19,200 XOF"));
    assert!(!report.contains("GNF"));
}

#[test]
fn test_batch_missing_file_reports_path() {
    let missing = fixture_path().with_file_name("does_not_exist.csv");

    let err = app::run_batch(&AppConfig::default(), &missing).unwrap_err();

    assert!(format!("{err:#}").contains("does_not_exist.csv"));
}
