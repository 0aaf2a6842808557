//! CLI and basic command tests

mod common;

use common::{relcalc, write_fixture, FOO_RECORDS, SIMPLE_RECORDS};
use predicates::prelude::*;
use tempfile::TempDir;

// ============================================================================
// CLI Basic Tests
// ============================================================================

#[test]
fn test_help_displays() {
    relcalc()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("reliability prediction"));
}

#[test]
fn test_version_displays() {
    relcalc()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("relcalc"));
}

#[test]
fn test_unknown_command_fails() {
    relcalc()
        .arg("unknown-command")
        .assert()
        .failure()
        .stderr(predicate::str::contains("error"));
}

// ============================================================================
// Predict Command Tests
// ============================================================================

#[test]
fn test_predict_table_output() {
    let tmp = TempDir::new().unwrap();
    let records = write_fixture(&tmp, "records.yml", SIMPLE_RECORDS);

    relcalc()
        .arg("predict")
        .arg(&records)
        .assert()
        .success()
        .stdout(predicate::str::contains("HR ACTIVE"))
        .stdout(predicate::str::contains("switch"))
        .stdout(predicate::str::contains("resistor"));
}

#[test]
fn test_predict_json_output_carries_rates() {
    let tmp = TempDir::new().unwrap();
    let records = write_fixture(&tmp, "records.yml", SIMPLE_RECORDS);

    let output = relcalc()
        .arg("predict")
        .arg(&records)
        .args(["--format", "json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let parsed: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let rows = parsed.as_array().unwrap();
    assert_eq!(rows.len(), 2);
    // Toggle switch part count in ground benign: 0.001 * piQ 1.0.
    let switch_hr = rows[0]["hazard_rate_active"].as_f64().unwrap();
    assert!((switch_hr - 0.001).abs() < 1.0e-12);
    // Ground active to ground dormant switch ratio is 0.4.
    let switch_dormant = rows[0]["hazard_rate_dormant"].as_f64().unwrap();
    assert!((switch_dormant - 0.0004).abs() < 1.0e-12);
}

#[test]
fn test_predict_warns_on_unknown_environment() {
    let tmp = TempDir::new().unwrap();
    let records = write_fixture(
        &tmp,
        "records.yml",
        "- hardware_id: 5\n  category: relay\n  subcategory_id: 1\n  type_id: 1\n  \
         quality_id: 1\n  environment_active_id: 99\n  hazard_rate_method_id: 1\n",
    );

    relcalc()
        .arg("predict")
        .arg(&records)
        .assert()
        .success()
        .stderr(predicate::str::contains("ERROR"))
        .stderr(predicate::str::contains("hardware ID: 5"));
}

#[test]
fn test_predict_missing_file_fails() {
    relcalc()
        .arg("predict")
        .arg("no-such-file.yml")
        .assert()
        .failure()
        .stderr(predicate::str::contains("no-such-file.yml"));
}

#[test]
fn test_predict_with_custom_limits_flags_overstress() {
    let tmp = TempDir::new().unwrap();
    let records = write_fixture(
        &tmp,
        "records.yml",
        "- hardware_id: 3\n  category: switch\n  subcategory_id: 1\n  quality_id: 1\n  \
         environment_active_id: 3\n  environment_dormant_id: 2\n  hazard_rate_method_id: 1\n  \
         current_operating: 0.6\n  current_rated: 1.0\n  power_rated: 1.0\n  voltage_rated: 28.0\n",
    );
    let limits = write_fixture(
        &tmp,
        "limits.yml",
        "switch: [0.5, 0.9, 1.0, 1.0, 1.0, 1.0, 0.0, 0.0, 125.0, 125.0]\n",
    );

    relcalc()
        .arg("predict")
        .arg(&records)
        .arg("--limits")
        .arg(&limits)
        .assert()
        .success()
        .stdout(predicate::str::contains("yes"))
        .stderr(predicate::str::contains("Operating current > 50.0% rated current"));
}

// ============================================================================
// Goals Command Tests
// ============================================================================

#[test]
fn test_goals_from_hazard_rate() {
    relcalc()
        .args([
            "goals",
            "--measure",
            "hazard-rate",
            "--value",
            "0.001",
            "--mission-time",
            "100",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("mtbf"))
        .stdout(predicate::str::contains("1000"));
}

#[test]
fn test_goals_rejects_out_of_domain_reliability() {
    relcalc()
        .args([
            "goals",
            "--measure",
            "reliability",
            "--value",
            "1.5",
            "--mission-time",
            "100",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("ERROR"));
}

#[test]
fn test_goals_yaml_round_trip() {
    let output = relcalc()
        .args([
            "goals",
            "--measure",
            "mtbf",
            "--value",
            "1000",
            "--mission-time",
            "100",
            "--format",
            "yaml",
        ])
        .output()
        .unwrap();
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("hazard_rate: 0.001"));
}

// ============================================================================
// Allocate Command Tests
// ============================================================================

#[test]
fn test_allocate_equal_spreads_goal() {
    let tmp = TempDir::new().unwrap();
    let records = write_fixture(
        &tmp,
        "children.yml",
        "- hardware_id: 1\n  mission_time: 100.0\n- hardware_id: 2\n  mission_time: 100.0\n",
    );

    let output = relcalc()
        .arg("allocate")
        .arg(&records)
        .args(["--method", "equal", "--goal", "0.95", "--format", "json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let rows: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let r0 = rows[0]["reliability_alloc"].as_f64().unwrap();
    let r1 = rows[1]["reliability_alloc"].as_f64().unwrap();
    assert!((r0 * r1 - 0.95).abs() < 1.0e-9);
}

#[test]
fn test_allocate_foo_computes_cumulative_weight() {
    let tmp = TempDir::new().unwrap();
    let records = write_fixture(&tmp, "children.yml", FOO_RECORDS);

    let output = relcalc()
        .arg("allocate")
        .arg(&records)
        .args(["--method", "foo", "--goal", "0.000617", "--format", "json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let rows: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(rows[0]["weight_factor"].as_f64().unwrap(), 324.0);
    assert_eq!(rows[1]["weight_factor"].as_f64().unwrap(), 600.0);
    let pct = rows[0]["percent_weight_factor"].as_f64().unwrap();
    assert!((pct - 324.0 / 924.0).abs() < 1.0e-12);
    // Excluded children receive no share.
    assert_eq!(rows[2]["hazard_rate_alloc"].as_f64().unwrap(), 0.0);
}

#[test]
fn test_allocate_mission_time_override() {
    let tmp = TempDir::new().unwrap();
    let records = write_fixture(
        &tmp,
        "children.yml",
        "- hardware_id: 1\n  mission_time: 1.0\n",
    );

    let output = relcalc()
        .arg("allocate")
        .arg(&records)
        .args([
            "--method",
            "arinc",
            "--goal",
            "0.001",
            "--mission-time",
            "100",
            "--format",
            "json",
        ])
        .output()
        .unwrap();
    assert!(output.status.success());

    let rows: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let r = rows[0]["reliability_alloc"].as_f64().unwrap();
    assert!((r - (-0.1f64).exp()).abs() < 1.0e-12);
}
