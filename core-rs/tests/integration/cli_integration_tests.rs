//! Integration tests for the blastr binary
//!
//! Exercise argument handling, exit codes and output files end to end.

use std::fs;
use std::path::Path;
use std::process::{Command, Output};
use tempfile::TempDir;

const CONFIG: &str = r#"{
  "resources": ["/data/sensitive.txt", "/config/database.yml", "/logs/app.log"],
  "permissions": {
    "john.doe": {"/data/sensitive.txt": "read"},
    "administrators": {"/config/database.yml": "write"}
  },
  "criticality": {
    "/data/sensitive.txt": "high",
    "/config/database.yml": "medium"
  }
}"#;

fn blastr(dir: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_blastr"))
        .current_dir(dir)
        .env_remove("RUST_LOG")
        .args(args)
        .output()
        .expect("Failed to run blastr")
}

fn setup() -> TempDir {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("config.json"), CONFIG).unwrap();
    temp
}

#[test]
fn test_table_output_uses_default_config_path() {
    let temp = setup();
    let output = blastr(temp.path(), &["--user", "jane.smith"]);

    assert!(output.status.success(), "stderr: {}", String::from_utf8_lossy(&output.stderr));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Potential Impact of Compromised Identity"));
    assert!(stdout.contains("/config/database.yml"));
    assert!(!stdout.contains("/data/sensitive.txt"));
}

#[test]
fn test_json_output_and_output_file() {
    let temp = setup();
    let output = blastr(
        temp.path(),
        &["--user", "jane.smith", "--format", "json", "--output", "output.json"],
    );
    assert!(output.status.success());

    let stdout: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(
        stdout,
        serde_json::json!([{"resource": "/config/database.yml", "criticality": "medium"}])
    );

    let saved: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(temp.path().join("output.json")).unwrap()).unwrap();
    assert_eq!(saved, stdout);
}

#[test]
fn test_explain_shows_grant_paths() {
    let temp = setup();
    let output = blastr(temp.path(), &["--user", "jane.smith", "--explain", "--no-color"]);
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("write via group administrators"));
    assert!(stdout.contains("denied"));
}

#[test]
fn test_membership_file_replaces_builtin_directory() {
    let temp = setup();
    fs::write(temp.path().join("groups.json"), r#"{"sam": ["administrators"]}"#).unwrap();

    let output = blastr(
        temp.path(),
        &["--user", "sam", "--directory", "groups.json", "--format", "json"],
    );
    assert!(output.status.success());
    let stdout: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(stdout[0]["resource"], "/config/database.yml");

    // jane.smith is only an administrator in the builtin directory
    let output = blastr(
        temp.path(),
        &["--user", "jane.smith", "--directory", "groups.json", "--format", "json"],
    );
    let stdout: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(stdout, serde_json::json!([]));
}

#[test]
fn test_missing_config_exits_non_zero() {
    let temp = TempDir::new().unwrap();
    let output = blastr(temp.path(), &["--user", "jane.smith", "--config", "absent.json"]);

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Configuration file not found"));
}

#[test]
fn test_malformed_config_exits_non_zero() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("config.json"), "not json at all").unwrap();

    let output = blastr(temp.path(), &["--user", "jane.smith"]);
    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).contains("Malformed configuration"));
}

#[test]
fn test_validation_failure_exits_non_zero() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("config.json"), r#"{"resources": "oops"}"#).unwrap();

    let output = blastr(temp.path(), &["--user", "jane.smith"]);
    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).contains("Resources must be a list"));
}

#[test]
fn test_unwritable_output_is_only_a_warning() {
    let temp = setup();
    let output = blastr(
        temp.path(),
        &["--user", "john.doe", "--output", "no-such-dir/output.json"],
    );

    assert!(output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("Results were not saved"));
}

#[test]
fn test_user_argument_is_required() {
    let temp = setup();
    let output = blastr(temp.path(), &[]);
    assert!(!output.status.success());
    assert_eq!(output.status.code(), Some(2));
}
