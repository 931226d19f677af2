#![cfg(feature = "cli")]

use std::process::Command;

fn rpcguard() -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_rpcguard"));
    cmd.arg("--log-level").arg("error");
    cmd
}

#[test]
fn conforming_value_exits_zero() {
    let output = rpcguard()
        .args(["--format", "json", "check", "\"0x20\"", "--type", "hex-string"])
        .output()
        .expect("check should run");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("check-report.schema.json"));
    assert!(stdout.contains("\"conforms\":true"));
}

#[test]
fn mismatch_exits_data_invalid_with_diagnosis() {
    let output = rpcguard()
        .args(["--format", "json", "check", "2", "--type", "string"])
        .output()
        .expect("check should run");

    assert_eq!(output.status.code(), Some(60));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("\"conforms\":false"));
    assert!(stdout.contains("is an invalid value"));
    assert!(stdout.contains("More information: "));
}

#[test]
fn union_accepts_when_any_branch_matches() {
    let output = rpcguard()
        .args(["check", "2", "--type", "number,string"])
        .output()
        .expect("check should run");

    assert!(output.status.success());
}

#[test]
fn union_rejects_when_no_branch_matches() {
    let output = rpcguard()
        .args(["check", "[2]", "--type", "number,string"])
        .output()
        .expect("check should run");

    assert_eq!(output.status.code(), Some(60));
}

#[test]
fn fractional_value_fails_integer_checks() {
    let output = rpcguard()
        .args(["check", "2.222", "--type", "uint"])
        .output()
        .expect("check should run");

    assert_eq!(output.status.code(), Some(60));

    let output = rpcguard()
        .args(["check", "2.0", "--type", "uint"])
        .output()
        .expect("check should run");

    assert!(output.status.success());
}

#[test]
fn unknown_descriptor_is_usage_error() {
    let output = rpcguard()
        .args(["check", "2", "--type", "uint16"])
        .output()
        .expect("check should run");

    assert_eq!(output.status.code(), Some(64));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("unknown type descriptor"));
}

#[test]
fn unparsable_value_is_data_invalid() {
    let output = rpcguard()
        .args(["check", "{not-json", "--type", "object"])
        .output()
        .expect("check should run");

    assert_eq!(output.status.code(), Some(60));
}

#[test]
fn value_can_come_from_a_file() {
    let dir = std::env::temp_dir().join(format!(
        "rpcguard-check-{}-{}",
        std::process::id(),
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .expect("time should be after epoch")
            .as_nanos()
    ));
    std::fs::create_dir_all(&dir).expect("temp dir should be creatable");
    let path = dir.join("value.json");
    std::fs::write(&path, "[1, 2, 3]").expect("value file should be writable");

    let output = rpcguard()
        .args(["check", "--file"])
        .arg(&path)
        .args(["--type", "array"])
        .output()
        .expect("check should run");

    assert!(output.status.success());
    let _ = std::fs::remove_dir_all(&dir);
}
