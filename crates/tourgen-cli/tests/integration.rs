//! Integration tests for tourgen-cli.
//!
//! Tests spawn the `tourgen` binary and check its stdout, exit status, and
//! config-file handling.

use std::process::Command;
use tempfile::TempDir;

/// Helper to get the path to the `tourgen` binary built by cargo.
fn tourgen_bin() -> Command {
    Command::new(env!("CARGO_BIN_EXE_tourgen"))
}

// ---------------------------------------------------------------------------
// tourgen generate
// ---------------------------------------------------------------------------

#[test]
fn cli_generate_text_summary() {
    let output = tourgen_bin()
        .args(["generate", "-n", "3", "--seed", "1"])
        .output()
        .expect("failed to run tourgen generate");

    assert!(output.status.success(), "tourgen generate failed");
    let stdout = String::from_utf8_lossy(&output.stdout);
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines.len(), 3, "got: {stdout}");
    assert!(lines[0].starts_with("#0"), "got: {}", lines[0]);
    assert!(lines.iter().all(|l| l.contains("tour=")));
}

#[test]
fn cli_generate_fixed_scenario_json() {
    let output = tourgen_bin()
        .args([
            "generate", "-n", "2", "--seed", "5", "--nodes", "4", "5", "--weights", "1", "2",
            "--format", "json",
        ])
        .output()
        .expect("failed to run tourgen generate");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    for line in stdout.lines() {
        let value: serde_json::Value = serde_json::from_str(line).expect("valid JSON line");
        assert_eq!(value["nodes"], 4);
        assert_eq!(value["edges"], 6);
        assert_eq!(value["tour_weight"], 4);
        assert_eq!(value["tour"].as_array().unwrap().len(), 4);
    }
    assert_eq!(stdout.lines().count(), 2);
}

#[test]
fn cli_generate_same_seed_same_output() {
    let run = || {
        tourgen_bin()
            .args(["generate", "-n", "4", "--seed", "99"])
            .output()
            .expect("failed to run tourgen generate")
            .stdout
    };
    assert_eq!(run(), run());
}

#[test]
fn cli_generate_inverted_range_fails() {
    let output = tourgen_bin()
        .args(["generate", "--weights", "10", "1"])
        .output()
        .expect("failed to run tourgen generate");

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("invalid weight range"), "got: {stderr}");
}

#[test]
fn cli_generate_from_config_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("batch.toml");
    std::fs::write(
        &path,
        "count = 2\nseed = 3\nnode_range = [2, 3]\nweight_range = [6, 7]\n",
    )
    .unwrap();

    let output = tourgen_bin()
        .args(["generate", "--format", "json", "--config"])
        .arg(&path)
        .output()
        .expect("failed to run tourgen generate");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert_eq!(stdout.lines().count(), 2);
    for line in stdout.lines() {
        let value: serde_json::Value = serde_json::from_str(line).unwrap();
        assert_eq!(value["nodes"], 2);
        assert_eq!(value["tour_weight"], 6);
    }
}

// ---------------------------------------------------------------------------
// tourgen config
// ---------------------------------------------------------------------------

#[test]
fn cli_config_default_prints_toml() {
    let output = tourgen_bin()
        .args(["config", "default"])
        .output()
        .expect("failed to run tourgen config default");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("count = 32"), "got: {stdout}");
    assert!(stdout.contains("[solver]"), "got: {stdout}");
}

#[test]
fn cli_config_init_then_check() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("init.toml");

    let init = tourgen_bin()
        .args(["config", "init"])
        .arg(&path)
        .output()
        .unwrap();
    assert!(init.status.success());
    assert!(path.exists());

    let again = tourgen_bin()
        .args(["config", "init"])
        .arg(&path)
        .output()
        .unwrap();
    assert!(!again.status.success(), "init must not overwrite without --force");

    let check = tourgen_bin()
        .args(["config", "check"])
        .arg(&path)
        .output()
        .unwrap();
    assert!(check.status.success());
    assert!(String::from_utf8_lossy(&check.stdout).starts_with("OK:"));
}
