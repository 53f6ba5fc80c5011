//! Tests for the `vlab-timeline` binary
//!
//! Every test runs the binary inside its own temporary working directory so
//! the default relative output path never touches the source tree.

use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use tempfile::tempdir;

const DEFAULT_OUTPUT: &str = "Virtual_Lab_Timeline_August_November_2024.xlsx";

fn fixtures_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures")
}

fn vlab_timeline_binary() -> PathBuf {
    PathBuf::from(env!("CARGO_BIN_EXE_vlab-timeline"))
}

fn run(dir: &Path, args: &[&str]) -> Output {
    Command::new(vlab_timeline_binary())
        .args(args)
        .current_dir(dir)
        .env_remove("VLAB_TIMELINE_OUTPUT")
        .env_remove("RUST_LOG")
        .output()
        .expect("Failed to execute vlab-timeline")
}

fn assert_xlsx(path: &Path) {
    assert!(path.exists(), "{} should exist", path.display());
    let bytes = fs::read(path).unwrap();
    assert_eq!(&bytes[0..2], b"PK", "XLSX is a ZIP container");
}

#[test]
fn no_arguments_writes_default_file() {
    let dir = tempdir().unwrap();

    let output = run(dir.path(), &[]);

    assert!(output.status.success(), "Command should succeed");
    assert_xlsx(&dir.path().join(DEFAULT_OUTPUT));

    let stdout = String::from_utf8_lossy(&output.stdout);
    let lines: Vec<&str> = stdout.lines().collect();
    let created = format!("Excel file created successfully: {DEFAULT_OUTPUT}");
    assert_eq!(
        lines,
        vec![
            created.as_str(),
            "Total Person-Days: 198",
            "Average Number of Engineers: 1.9",
        ]
    );
}

#[test]
fn export_to_explicit_path() {
    let dir = tempdir().unwrap();
    let target = dir.path().join("timeline.xlsx");

    let output = run(dir.path(), &["export", "--output", target.to_str().unwrap()]);

    assert!(output.status.success());
    assert_xlsx(&target);
    assert!(!dir.path().join(DEFAULT_OUTPUT).exists());

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains(&format!("Excel file created successfully: {}", target.display())));
}

#[test]
fn output_from_environment() {
    let dir = tempdir().unwrap();

    let output = Command::new(vlab_timeline_binary())
        .current_dir(dir.path())
        .env("VLAB_TIMELINE_OUTPUT", "from_env.xlsx")
        .output()
        .expect("Failed to execute vlab-timeline");

    assert!(output.status.success());
    assert_xlsx(&dir.path().join("from_env.xlsx"));
}

#[test]
fn export_with_frozen_header() {
    let dir = tempdir().unwrap();

    let output = run(dir.path(), &["export", "--freeze-header"]);

    assert!(output.status.success());
    assert_xlsx(&dir.path().join(DEFAULT_OUTPUT));
}

#[test]
fn missing_directory_fails() {
    let dir = tempdir().unwrap();
    let target = dir.path().join("no_such_dir").join("timeline.xlsx");

    let output = run(dir.path(), &["--output", target.to_str().unwrap()]);

    assert!(!output.status.success(), "Write into a missing directory should fail");
    assert!(!target.exists());
    assert!(output.stdout.is_empty(), "No status lines on failure");

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Failed to write"), "stderr: {stderr}");
}

#[test]
fn config_file_sets_output() {
    let dir = tempdir().unwrap();
    let config = fixtures_dir().join("rollout.toml");

    let output = run(dir.path(), &["--config", config.to_str().unwrap()]);

    assert!(output.status.success());
    assert_xlsx(&dir.path().join("rollout.xlsx"));
}

#[test]
fn output_flag_overrides_config_file() {
    let dir = tempdir().unwrap();
    let config = fixtures_dir().join("rollout.toml");

    let output = run(
        dir.path(),
        &["--config", config.to_str().unwrap(), "--output", "override.xlsx"],
    );

    assert!(output.status.success());
    assert_xlsx(&dir.path().join("override.xlsx"));
    assert!(!dir.path().join("rollout.xlsx").exists());
}

#[test]
fn invalid_config_fails() {
    let dir = tempdir().unwrap();
    let config = fixtures_dir().join("bad_sheet_name.toml");

    let output = run(dir.path(), &["--config", config.to_str().unwrap()]);

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Invalid sheet name"), "stderr: {stderr}");
}

#[test]
fn summary_does_not_write_file() {
    let dir = tempdir().unwrap();

    let output = run(dir.path(), &["summary"]);

    assert!(output.status.success());
    assert!(!dir.path().join(DEFAULT_OUTPUT).exists());

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Total Person-Days: 198"));
    assert!(stdout.contains("Average Number of Engineers: 1.9"));
}

#[test]
fn summary_as_json() {
    let dir = tempdir().unwrap();
    let config = fixtures_dir().join("rollout.toml");

    let output = run(
        dir.path(),
        &["summary", "--format", "json", "--config", config.to_str().unwrap()],
    );

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("\"total_person_days\": 198"));
    assert!(stdout.contains("\"average_engineers\": \"1.9\""));
    assert!(stdout.contains("\"sheet_name\": \"Rollout\""));
}
