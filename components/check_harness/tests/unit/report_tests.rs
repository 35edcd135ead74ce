//! Unit tests for report generation

use check_harness::{CheckFailure, CheckReport, Outcome};

fn failure(description: &str) -> CheckFailure {
    CheckFailure {
        block: Some("countRealTypes".to_string()),
        description: description.to_string(),
        expected: Outcome::from(vec![("boolean", 3)]),
        actual: Outcome::from(vec![("boolean", 2)]),
    }
}

#[test]
fn test_new_report() {
    let report = CheckReport::new();
    assert_eq!(report.total, 0);
    assert_eq!(report.passed, 0);
    assert_eq!(report.failed, 0);
    assert_eq!(report.skipped, 0);
    assert!(report.failures.is_empty());
    assert!(report.is_success());
}

#[test]
fn test_pass_rate_excludes_skips() {
    let mut report = CheckReport::new();
    report.record_pass();
    report.record_failure(failure("x"));
    report.record_skip();
    assert_eq!(report.total, 3);
    assert!((report.pass_rate() - 50.0).abs() < 0.001);
}

#[test]
fn test_pass_rate_empty() {
    assert_eq!(CheckReport::new().pass_rate(), 0.0);
}

#[test]
fn test_detailed_summary_lists_failures() {
    let mut report = CheckReport::new();
    report.record_failure(failure("Count unique types"));
    let text = report.detailed_summary();
    assert!(text.contains("countRealTypes / Count unique types"));
    assert!(text.contains("Expected: [ [ 'boolean', 3 ] ]"));
    assert!(text.contains("Actual: [ [ 'boolean', 2 ] ]"));
}

#[test]
fn test_to_json() {
    let mut report = CheckReport::new();
    report.record_failure(failure("z"));
    let json: serde_json::Value = serde_json::from_str(&report.to_json().unwrap()).unwrap();
    assert_eq!(json["failed"], 1);
    assert_eq!(json["failures"][0]["description"], "z");
    assert_eq!(json["failures"][0]["expected"][0][0], "boolean");
    assert_eq!(json["failures"][0]["expected"][0][1], 3);
}
