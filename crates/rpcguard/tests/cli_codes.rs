#![cfg(feature = "cli")]

use std::process::Command;

fn rpcguard() -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_rpcguard"));
    cmd.arg("--log-level").arg("error");
    cmd
}

#[test]
fn codes_lists_the_whole_table() {
    let output = rpcguard()
        .args(["--format", "json", "codes"])
        .output()
        .expect("codes should run");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("error-codes.schema.json"));
    for code in ["-32700", "-32600", "-32601", "-32602", "-32603", "-32000", "-32001", "-32002", "-32003"] {
        assert!(stdout.contains(code), "missing {code}");
    }
}

#[test]
fn codes_filter_shows_one_entry() {
    let output = rpcguard()
        .args(["--format", "json", "codes", "--code", "-32602"])
        .output()
        .expect("codes should run");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Invalid params"));
    assert!(!stdout.contains("Parse error"));
}

#[test]
fn unreserved_code_is_usage_error() {
    let output = rpcguard()
        .args(["codes", "--code", "5"])
        .output()
        .expect("codes should run");

    assert_eq!(output.status.code(), Some(64));
}

#[test]
fn version_prints_package_version() {
    let output = rpcguard()
        .arg("version")
        .output()
        .expect("version should run");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn envinfo_reports_schema_id() {
    let output = rpcguard()
        .args(["--format", "json", "envinfo"])
        .output()
        .expect("envinfo should run");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("envinfo.schema.json"));
}
