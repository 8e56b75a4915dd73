//! CLI Output Tests
//!
//! Tests for what the binary writes:
//! - stdout carries exactly one JSON envelope per invocation
//! - Configuration logs go to stderr, never stdout
//! - Failures write an error envelope and exit non-zero

use serde_json::Value;
use std::fs;
use std::path::Path;
use std::process::{Command, Output};
use tempfile::TempDir;

// =============================================================================
// Helper Functions
// =============================================================================

fn config_dir() -> TempDir {
    let temp = TempDir::new().unwrap();
    fs::write(
        temp.path().join("device.json"),
        r#"{
            "data_key": "device",
            "engine_type": "DeviceDetectionCloudEngine",
            "kind": "cloud",
            "properties": [
                {"name": "ismobile", "type": "bool", "datatierswherepresent": ["lite"]},
                {"name": "browsername", "type": "string", "datatierswherepresent": ["lite"]}
            ]
        }"#,
    )
    .unwrap();
    temp
}

fn run(config_dir: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_pipeline-engines"))
        .args(args)
        .arg("--config-dir")
        .arg(config_dir)
        .output()
        .unwrap()
}

fn single_envelope(output: &Output) -> Value {
    let stdout = String::from_utf8(output.stdout.clone()).unwrap();
    assert_eq!(stdout.lines().count(), 1, "stdout was: {}", stdout);
    serde_json::from_str(&stdout).unwrap()
}

// =============================================================================
// Success Tests
// =============================================================================

/// Diagnosis prints one envelope; configuration logs stay on stderr.
#[test]
fn test_diagnose_stdout_is_one_envelope() {
    let temp = config_dir();
    let output = run(
        temp.path(),
        &["diagnose", "--element", "device", "--property", "hardwarename"],
    );

    assert!(output.status.success());
    let envelope = single_envelope(&output);
    assert_eq!(envelope["status"], "ok");
    assert_eq!(
        envelope["data"]["message"],
        "Property 'hardwarename' not found in data for element 'device'. \
This is because your resource key does not include access to this property. \
Properties that are included for this key under 'device' are browsername, ismobile. \
For more details on resource keys, see our explainer: \
https://51degrees.com/documentation/4.1/_info__resourcekeys.html"
    );

    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("ENGINE_CONFIG_LOADED"));
}

/// Verbose mode adds TRACE lines to stderr only.
#[test]
fn test_verbose_keeps_stdout_clean() {
    let temp = config_dir();
    let output = run(
        temp.path(),
        &["--verbose", "diagnose", "--element", "device", "--property", "ismobile"],
    );

    assert!(output.status.success());
    assert_eq!(single_envelope(&output)["status"], "ok");

    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("PROPERTY_MISSING"));
}

// =============================================================================
// Failure Tests
// =============================================================================

/// Unknown element writes an error envelope and exits non-zero.
#[test]
fn test_unknown_element_writes_error_envelope() {
    let temp = config_dir();
    let output = run(temp.path(), &["properties", "--element", "nope"]);

    assert!(!output.status.success());
    let envelope = single_envelope(&output);
    assert_eq!(envelope["status"], "error");
    assert_eq!(envelope["code"], "PIPE_CLI_CONFIG_ERROR");
    assert_eq!(
        envelope["message"],
        "PIPE_UNKNOWN_ENGINE: No engine is registered for this element [element nope]"
    );
}
