//! Integration tests for session gating and the Brújula

mod common;

use common::{campus, stdout_json, write_config};
use predicates::prelude::*;
use tempfile::tempdir;

#[test]
fn test_benefits_requires_session() {
    let dir = tempdir().unwrap();
    campus(dir.path())
        .arg("benefits")
        .assert()
        .code(2)
        .stderr(predicate::str::contains("sign-in required"));
}

#[test]
fn test_benefits_fail_open_without_role_record() {
    let dir = tempdir().unwrap();
    campus(dir.path())
        .args(["--user", "ana", "benefits"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Descuento en Bubble"));
}

#[test]
fn test_benefits_denied_for_free_role() {
    let dir = tempdir().unwrap();
    write_config(dir.path(), "[access.roles]\nana = \"free\"\n");
    campus(dir.path())
        .args(["--user", "ana", "benefits"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("premium"));
}

#[test]
fn test_benefits_bad_role_record_fails_open() {
    let dir = tempdir().unwrap();
    write_config(dir.path(), "[access.roles]\nana = \"owner\"\n");

    campus(dir.path())
        .args(["--user", "zoe", "benefits"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Descuento en Bubble"));

    campus(dir.path())
        .args(["--user", "ana", "benefits"])
        .assert()
        .success();
}

#[test]
fn test_benefits_fallback_role_is_configurable() {
    let dir = tempdir().unwrap();
    write_config(dir.path(), "[access]\nfallback_role = \"free\"\n");
    campus(dir.path())
        .args(["--user", "ana", "benefits"])
        .assert()
        .code(1);

    write_config(
        dir.path(),
        "[access]\nfallback_role = \"free\"\n\n[access.roles]\nana = \"admin\"\n",
    );
    let output = campus(dir.path())
        .args(["--format", "json", "--user", "ana:ana@example.com", "benefits"])
        .output()
        .unwrap();
    assert!(output.status.success());
    let json = stdout_json(&output);
    assert_eq!(json["role"], "admin");
    assert_eq!(json["user"], "ana");
}

#[test]
fn test_user_from_environment() {
    let dir = tempdir().unwrap();
    campus(dir.path())
        .env("CAMPUS_USER", "luis")
        .arg("benefits")
        .assert()
        .success();
}

#[test]
fn test_compass_requires_session() {
    let dir = tempdir().unwrap();
    campus(dir.path())
        .args(["compass", "qué es un webhook"])
        .assert()
        .code(2);
}

#[test]
fn test_compass_missing_credential() {
    let dir = tempdir().unwrap();
    let output = campus(dir.path())
        .args(["--format", "json", "--user", "ana", "compass", "qué", "es", "un", "webhook"])
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(1));

    let reply = stdout_json(&output);
    assert_eq!(reply["error_type"], "missing_credential");
    let err: serde_json::Value = serde_json::from_slice(&output.stderr).unwrap();
    assert_eq!(err["error"]["compass_error_type"], "missing_credential");
}

#[test]
fn test_compass_query_too_long() {
    let dir = tempdir().unwrap();
    let query = "a".repeat(501);
    let output = campus(dir.path())
        .args(["--format", "json", "--user", "ana", "compass", "--api-key", "k"])
        .arg(&query)
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(1));
    assert_eq!(stdout_json(&output)["error_type"], "invalid_request");
}

#[test]
fn test_compass_unreachable_upstream() {
    let dir = tempdir().unwrap();
    write_config(
        dir.path(),
        "[compass]\nendpoint = \"http://127.0.0.1:9/v1beta\"\napi_key = \"shared\"\n",
    );
    let output = campus(dir.path())
        .args(["--format", "json", "--user", "ana", "compass", "-m", "path", "automatizar"])
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(1));
    assert_eq!(stdout_json(&output)["error_type"], "network");
}

#[test]
fn test_compass_blank_query_is_usage_error() {
    let dir = tempdir().unwrap();
    campus(dir.path())
        .args(["--user", "ana", "compass", "  "])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("type a question first"));
}
