//! Integration tests for CLI configuration assembly.
//!
//! Responsibilities:
//! - Verify source precedence: files in order, environment, then `--set` overrides.
//! - Verify placeholder options (`--start-delimiter`, `--ignore-unresolved`).
//! - Verify text and JSON output.

mod common;

use common::{upconfig_cmd, write_fixture};
use predicates::prelude::*;
use tempfile::TempDir;

#[test]
fn test_later_file_overrides_earlier_file() {
    let temp_dir = TempDir::new().unwrap();
    let base = write_fixture(temp_dir.path(), "base.properties", "name=base\nport=80\n");
    let local = write_fixture(temp_dir.path(), "local.properties", "name=local\n");

    upconfig_cmd()
        .arg("--file")
        .arg(&base)
        .arg("--file")
        .arg(&local)
        .assert()
        .success()
        .stdout("name=local\nport=80\n");
}

#[test]
fn test_placeholders_resolved_in_output() {
    let temp_dir = TempDir::new().unwrap();
    let file = write_fixture(
        temp_dir.path(),
        "app.properties",
        "key1=value1\nkey2=${${key3}}__${key1}\nkey3=key1\n",
    );

    upconfig_cmd()
        .arg("-f")
        .arg(&file)
        .arg("key2")
        .assert()
        .success()
        .stdout("value1__value1\n");
}

#[test]
fn test_custom_delimiters() {
    let temp_dir = TempDir::new().unwrap();
    let file = write_fixture(
        temp_dir.path(),
        "app.properties",
        "key1=value1\nkey2=((((key3))))__((key1))\nkey3=key1\n",
    );

    upconfig_cmd()
        .arg("-f")
        .arg(&file)
        .args(["--start-delimiter", "((", "--end-delimiter", "))", "key2"])
        .assert()
        .success()
        .stdout("value1__value1\n");
}

#[test]
fn test_set_overrides_everything() {
    let temp_dir = TempDir::new().unwrap();
    let file = write_fixture(temp_dir.path(), "app.properties", "host=file\nurl=http://${host}\n");

    upconfig_cmd()
        .arg("-f")
        .arg(&file)
        .args(["--set", "host=cli", "url"])
        .assert()
        .success()
        .stdout("http://cli\n");
}

#[test]
fn test_env_snapshot_with_normalization() {
    let temp_dir = TempDir::new().unwrap();
    let file = write_fixture(temp_dir.path(), "app.properties", "db.host=file\n");

    upconfig_cmd()
        .env("UPCFGCLI_DB_HOST", "from-env")
        .arg("-f")
        .arg(&file)
        .args([
            "--env",
            "--env-prefix",
            "UPCFGCLI_",
            "--lowercase-env",
            "--underscore-to-dot",
            "--output",
            "json",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"upcfgcli.db.host\": \"from-env\""))
        .stdout(predicate::str::contains("\"db.host\": \"file\""));
}

#[test]
fn test_ignore_unresolved_keeps_tokens() {
    upconfig_cmd()
        .args([
            "--set",
            "key2=${${key3}}__${key1}",
            "--set",
            "key3=key1",
            "--ignore-unresolved",
            "key2",
        ])
        .assert()
        .success()
        .stdout("${key1}__${key1}\n");
}

#[test]
fn test_dotenv_file_as_source() {
    let temp_dir = TempDir::new().unwrap();
    let dotenv = write_fixture(temp_dir.path(), "app.env", "APP_NAME=demo\n");

    upconfig_cmd()
        .arg("--dotenv")
        .arg(&dotenv)
        .arg("APP_NAME")
        .assert()
        .success()
        .stdout("demo\n");
}

#[test]
fn test_json_output_is_valid() {
    let output = upconfig_cmd()
        .args(["--set", "a=1", "--set", "b=${a}2", "--output", "json"])
        .output()
        .unwrap();

    assert!(output.status.success());
    let parsed: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(parsed["a"], "1");
    assert_eq!(parsed["b"], "12");
}
