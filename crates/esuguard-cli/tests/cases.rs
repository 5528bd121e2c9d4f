//! End-to-end CLI integration tests using case fixtures.
//!
//! Each fixture in `tests/fixtures/` is a TOML case file describing one set
//! of operating parameters. These tests run the CLI against each fixture and
//! verify:
//! 1. Exit code matches expected (0=safe/warning, 2=error, 1=invalid input)
//! 2. Console and JSON output carry the expected findings

use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::Value;
use std::path::PathBuf;
use tempfile::TempDir;

/// Helper to get a Command for the esuguard binary.
/// Wraps the deprecated cargo_bin to centralize the deprecation warning.
#[allow(deprecated)]
fn esuguard_cmd() -> Command {
    Command::cargo_bin("esuguard").expect("esuguard binary not found - run `cargo build` first")
}

/// Get the path to the test fixtures directory
fn fixtures_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .parent()
        .expect("esuguard-cli crate should have a parent directory")
        .parent()
        .expect("crates directory should have a parent (repo root)")
        .join("tests")
        .join("fixtures")
}

/// Run the CLI check command against a case fixture and return the JSON report.
fn run_check_on_case(fixture_name: &str) -> (i32, Value) {
    let case_path = fixtures_dir().join(fixture_name);
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let report_path = temp_dir.path().join("report.json");

    let output = esuguard_cmd()
        .arg("--case")
        .arg(&case_path)
        .arg("check")
        .arg("--report-out")
        .arg(&report_path)
        .output()
        .expect("Failed to run command");

    let exit_code = output.status.code().unwrap_or(-1);

    let report_content = std::fs::read_to_string(&report_path).expect("Failed to read report");
    let report: Value = serde_json::from_str(&report_content).expect("Failed to parse report JSON");

    (exit_code, report)
}

fn finding_codes(report: &Value) -> Vec<String> {
    report["findings"]
        .as_array()
        .expect("findings should be an array")
        .iter()
        .map(|f| f["code"].as_str().expect("code should be a string").to_string())
        .collect()
}

// ============================================================================
// Case fixture tests
// ============================================================================

#[test]
fn case_clean_is_safe() {
    let (exit_code, report) = run_check_on_case("clean.toml");

    assert_eq!(exit_code, 0, "clean case should exit with 0 (safe)");
    assert_eq!(report["schema"], "esuguard.report.v1");
    assert_eq!(report["status"], "safe");
    assert!(finding_codes(&report).is_empty());
}

#[test]
fn case_pediatric_overpower_blocks() {
    let (exit_code, report) = run_check_on_case("pediatric_overpower.toml");

    assert_eq!(exit_code, 2, "pediatric overpower should exit with 2 (error)");
    assert_eq!(report["status"], "error");
    assert_eq!(finding_codes(&report), vec!["power_exceeds_max"]);

    // 85 W only blocks because the cut ceiling derates from 120 to 84.
    assert_eq!(report["data"]["pediatric"], true);
    assert_eq!(report["data"]["max_power_watts"], 84.0);
    assert_eq!(report["data"]["recommended_power_watts"], 56.0);
}

#[test]
fn case_multi_violation_accumulates_all_errors() {
    let (exit_code, report) = run_check_on_case("multi_violation.toml");

    assert_eq!(exit_code, 2);
    assert_eq!(report["status"], "error");

    // All four categories fire, in check order, with no warnings alongside.
    assert_eq!(
        finding_codes(&report),
        vec![
            "power_exceeds_max",
            "activation_too_long",
            "impedance_very_high",
            "rem_poor_contact",
        ]
    );
    let severities: Vec<&str> = report["findings"]
        .as_array()
        .unwrap()
        .iter()
        .map(|f| f["severity"].as_str().unwrap())
        .collect();
    assert!(severities.iter().all(|s| *s == "error"));
}

#[test]
fn case_poor_pad_unmonitored_warns_but_does_not_block() {
    let (exit_code, report) = run_check_on_case("poor_pad_unmonitored.toml");

    assert_eq!(exit_code, 0, "warnings display but do not block");
    assert_eq!(report["status"], "warning");
    assert_eq!(finding_codes(&report), vec!["poor_contact_unmonitored"]);
}

#[test]
fn case_invalid_mode_is_rejected_before_evaluation() {
    let case_path = fixtures_dir().join("invalid_mode.toml");

    esuguard_cmd()
        .arg("--case")
        .arg(&case_path)
        .arg("check")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("invalid input"))
        .stderr(predicate::str::contains("unknown energy mode"));
}

// ============================================================================
// CLI behavior tests
// ============================================================================

#[test]
fn console_output_annotates_warnings_and_errors() {
    esuguard_cmd()
        .arg("check")
        .arg("--power")
        .arg("90")
        .assert()
        .success()
        .stdout(predicate::str::contains("⚠ Power above recommended level"))
        .stdout(predicate::str::contains("STATUS: WARNING"));

    esuguard_cmd()
        .arg("check")
        .arg("--power")
        .arg("130")
        .assert()
        .code(2)
        .stdout(predicate::str::contains("⛔ Power exceeds maximum safe limit"))
        .stdout(predicate::str::contains("STATUS: ERROR"));
}

#[test]
fn bare_check_uses_reference_defaults() {
    esuguard_cmd()
        .arg("check")
        .assert()
        .success()
        .stdout(predicate::str::contains("STATUS: SAFE"));
}

#[test]
fn overrides_win_over_case_file() {
    let case_path = fixtures_dir().join("clean.toml");
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let report_path = temp_dir.path().join("report.json");

    esuguard_cmd()
        .arg("--case")
        .arg(&case_path)
        .arg("check")
        .arg("--power")
        .arg("130")
        .arg("--report-out")
        .arg(&report_path)
        .assert()
        .code(2);

    let report: Value =
        serde_json::from_str(&std::fs::read_to_string(&report_path).unwrap()).unwrap();
    assert_eq!(finding_codes(&report), vec!["power_exceeds_max"]);
}

#[test]
fn check_command_creates_output_file() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let report_path = temp_dir.path().join("subdir").join("report.json");

    esuguard_cmd()
        .arg("check")
        .arg("--report-out")
        .arg(&report_path)
        .assert()
        .success();

    assert!(report_path.exists(), "Report file should be created");
}

#[test]
fn check_with_markdown_output() {
    let case_path = fixtures_dir().join("multi_violation.toml");
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let report_path = temp_dir.path().join("report.json");
    let md_path = temp_dir.path().join("report.md");

    esuguard_cmd()
        .arg("--case")
        .arg(&case_path)
        .arg("check")
        .arg("--report-out")
        .arg(&report_path)
        .arg("--write-markdown")
        .arg("--markdown-out")
        .arg(&md_path)
        .assert()
        .code(2);

    assert!(report_path.exists(), "JSON report should be created");
    assert!(md_path.exists(), "Markdown report should be created");

    let md_content =
        std::fs::read_to_string(&md_path).expect("failed to read generated markdown file");
    assert!(
        md_content.contains("Status: **ERROR**"),
        "Markdown should contain verdict"
    );
    assert!(
        md_content.contains("Power exceeds maximum safe limit"),
        "Markdown should contain finding"
    );
}

#[test]
fn md_command_renders_from_report() {
    // First, create a report
    let case_path = fixtures_dir().join("poor_pad_unmonitored.toml");
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let report_path = temp_dir.path().join("report.json");

    esuguard_cmd()
        .arg("--case")
        .arg(&case_path)
        .arg("check")
        .arg("--report-out")
        .arg(&report_path)
        .assert()
        .success();

    // Then, render markdown from it
    let output = esuguard_cmd()
        .arg("md")
        .arg("--report")
        .arg(&report_path)
        .output()
        .expect("Failed to run md command");

    assert!(output.status.success(), "md command should succeed");
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(
        stdout.contains("Status: **WARNING**"),
        "Should contain verdict"
    );
    assert!(
        stdout.contains("Poor return pad contact"),
        "Should contain finding"
    );
}

#[test]
fn explain_command_shows_check_info() {
    let output = esuguard_cmd()
        .arg("explain")
        .arg("generator.power")
        .output()
        .expect("Failed to run explain command");

    assert!(output.status.success(), "explain command should succeed");
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("derated"), "Should explain pediatric derating");
}

#[test]
fn explain_command_shows_code_info() {
    let output = esuguard_cmd()
        .arg("explain")
        .arg("rem_poor_contact")
        .output()
        .expect("Failed to run explain command");

    assert!(output.status.success(), "explain command should succeed");
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(
        stdout.contains("Return Electrode Monitoring"),
        "Should explain the REM interlock"
    );
}

#[test]
fn explain_unknown_returns_error() {
    esuguard_cmd()
        .arg("explain")
        .arg("nonexistent_check")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Available check_ids"));
}

#[test]
fn version_flag_works() {
    esuguard_cmd()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("0.1.0"));
}

#[test]
fn missing_case_file_returns_error() {
    esuguard_cmd()
        .arg("--case")
        .arg("/nonexistent/path/to/case.toml")
        .arg("check")
        .assert()
        .failure();
}
