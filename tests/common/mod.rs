//! Shared test helpers for integration tests
//!
//! This module provides common utilities used across all test files.

#![allow(dead_code)]

use assert_cmd::cargo;
use assert_cmd::Command;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

/// Helper to get a relcalc command
pub fn relcalc() -> Command {
    Command::new(cargo::cargo_bin!("relcalc"))
}

/// Write a YAML fixture into a temp directory and return its path
pub fn write_fixture(tmp: &TempDir, name: &str, content: &str) -> PathBuf {
    let path = tmp.path().join(name);
    fs::write(&path, content).unwrap();
    path
}

/// A record file with one part-count toggle switch and one part-count
/// carbon composition resistor, both in ground benign conditions.
pub const SIMPLE_RECORDS: &str = "\
- hardware_id: 1
  category: switch
  subcategory_id: 1
  quality_id: 1
  environment_active_id: 1
  environment_dormant_id: 2
  hazard_rate_method_id: 1
  current_rated: 1.0
  power_rated: 1.0
  voltage_rated: 28.0
- hardware_id: 2
  category: resistor
  subcategory_id: 1
  quality_id: 1
  environment_active_id: 1
  environment_dormant_id: 2
  hazard_rate_method_id: 1
  current_rated: 1.0
  power_rated: 0.25
  voltage_rated: 200.0
";

/// Three FOO-scored allocation children (weights 324, 600, and an
/// excluded record).
pub const FOO_RECORDS: &str = "\
- hardware_id: 10
  mission_time: 100.0
  int_factor: 6
  soa_factor: 2
  op_time_factor: 9
  env_factor: 3
- hardware_id: 11
  mission_time: 100.0
  int_factor: 5
  soa_factor: 6
  op_time_factor: 4
  env_factor: 5
- hardware_id: 12
  included: false
  mission_time: 100.0
";
