use std::{fs, path::PathBuf};

use assert_cmd::Command;
use catchcompare::config::CONFIG_ENV_VAR;
use tempfile::TempDir;

const SEQUENTIAL_TABLE: &str = "Name|Catchment_Area|Wall_Clock\nSequential_baseline|1000.0|10.0\n";
const PARALLEL_TABLE: &str = "Name|Area|Wall_Clock\n4_threads|1000.0001|2.6\n8_threads|999.0|1.5\n";

#[test]
fn test_cli_end_to_end_report() {
    let dir = TempDir::new().expect("tempdir");
    let seq = write_table(&dir, "sequential.csv", SEQUENTIAL_TABLE);
    let par = write_table(&dir, "parallel.csv", PARALLEL_TABLE);
    let assert = command().args([&seq, &par]).assert().success();
    let stdout = String::from_utf8_lossy(&assert.get_output().stdout).to_string();
    assert!(stdout.contains("4_threads"));
    assert!(stdout.contains("8_threads"));
    assert!(stdout.contains("FAILED"));
    assert!(stdout.contains("3.85×"));
    assert!(stdout.contains("6.67×"));
    assert!(stdout.contains("Best configuration: 8_threads"));
}

#[test]
fn test_cli_keeps_stderr_quiet_for_messy_rows() {
    let dir = TempDir::new().expect("tempdir");
    let seq = write_table(&dir, "sequential.csv", SEQUENTIAL_TABLE);
    let par = write_table(
        &dir,
        "parallel.csv",
        "Name|Area|Wall_Clock\n4_threads|1000.0001|2.6\n8_threads|999.0|oops\n",
    );
    let assert = command().args([&seq, &par]).assert().success();
    let output = assert.get_output();
    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    assert!(stdout.contains("N/A"));
    assert!(stdout.contains("Area mismatch!"));
    assert!(output.stderr.is_empty(), "{}", String::from_utf8_lossy(&output.stderr));
}

#[test]
fn test_cli_usage_on_wrong_argument_count() {
    let assert = command().arg("only_one.csv").assert().code(1);
    let stdout = String::from_utf8_lossy(&assert.get_output().stdout).to_string();
    assert!(stdout.contains("Usage:"));

    command().assert().code(1);
    command().args(["a", "b", "c"]).assert().code(1);
}

#[test]
fn test_cli_missing_sequential_file() {
    let dir = TempDir::new().expect("tempdir");
    let seq = dir.path().join("nope.csv");
    let par = dir.path().join("also_missing.csv");
    let assert = command()
        .args([seq.to_str().unwrap(), par.to_str().unwrap()])
        .assert()
        .code(1);
    let stderr = String::from_utf8_lossy(&assert.get_output().stderr).to_string();
    assert!(stderr.contains("nope.csv"));
    assert!(!stderr.contains("also_missing.csv"));
}

#[test]
fn test_cli_missing_parallel_file() {
    let dir = TempDir::new().expect("tempdir");
    let seq = write_table(&dir, "sequential.csv", SEQUENTIAL_TABLE);
    let par = dir.path().join("parallel.csv");
    let assert = command()
        .args([seq.as_str(), par.to_str().unwrap()])
        .assert()
        .code(1);
    let stderr = String::from_utf8_lossy(&assert.get_output().stderr).to_string();
    assert!(stderr.contains("Parallel file not found"));
}

#[test]
fn test_cli_malformed_table_exits_with_error() {
    let dir = TempDir::new().expect("tempdir");
    let seq = write_table(&dir, "sequential.csv", "");
    let par = write_table(&dir, "parallel.csv", PARALLEL_TABLE);
    let assert = command().args([&seq, &par]).assert().code(1);
    let stderr = String::from_utf8_lossy(&assert.get_output().stderr).to_string();
    assert!(stderr.contains("parse error"));
}

#[test]
fn test_cli_reads_tolerance_from_config_file() {
    let dir = TempDir::new().expect("tempdir");
    let seq = write_table(&dir, "sequential.csv", SEQUENTIAL_TABLE);
    let par = write_table(&dir, "parallel.csv", PARALLEL_TABLE);
    let config = write_table(&dir, "audit.json", r#"{ "tolerance": 0.01 }"#);
    let assert = command()
        .env(CONFIG_ENV_VAR, &config)
        .args([&seq, &par])
        .assert()
        .success();
    let stdout = String::from_utf8_lossy(&assert.get_output().stdout).to_string();
    assert!(stdout.contains("PASSED"));
}

fn command() -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_catchcompare"));
    cmd.env_remove(CONFIG_ENV_VAR).env_remove("RUST_LOG");
    cmd
}

fn write_table(dir: &TempDir, name: &str, contents: &str) -> String {
    let path: PathBuf = dir.path().join(name);
    fs::write(&path, contents).expect("write table");
    path.to_string_lossy().into_owned()
}
