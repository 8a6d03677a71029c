//! Integration tests for the customize command

use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

mod common;
use common::domset_cmd;

fn create_source(temp: &TempDir, name: &str, content: &str) {
    let dir = temp.path().join("data");
    fs::create_dir_all(&dir).unwrap();
    fs::write(dir.join(name), content).unwrap();
}

#[test]
fn test_customize_removes_excluded_includes() {
    let temp = TempDir::new().unwrap();
    create_source(&temp, "main", "google.com\ninclude:ads@ads\ninclude:cn\n");
    fs::write(
        temp.path().join("custom.json"),
        r#"{"exclude_includes": [{"from_file": "main", "exclude": ["ads"]}]}"#,
    )
    .unwrap();

    domset_cmd()
        .arg("customize")
        .arg(temp.path().join("data"))
        .arg("--config")
        .arg(temp.path().join("custom.json"))
        .assert()
        .success()
        .stdout(predicate::str::contains("Cleaned main: removed 1 include lines"));

    let contents = fs::read_to_string(temp.path().join("data/main")).unwrap();
    assert_eq!(contents, "google.com\ninclude:cn\n");
}

#[test]
fn test_customize_missing_config_skips() {
    let temp = TempDir::new().unwrap();
    create_source(&temp, "main", "google.com\n");

    domset_cmd()
        .arg("customize")
        .arg(temp.path().join("data"))
        .arg("--config")
        .arg(temp.path().join("absent.json"))
        .assert()
        .success()
        .stdout(predicate::str::contains("Customization file not found"));
}

#[test]
fn test_customize_malformed_config_exits_3() {
    let temp = TempDir::new().unwrap();
    create_source(&temp, "main", "google.com\n");
    fs::write(
        temp.path().join("custom.json"),
        r#"{"exclude_includes": [{"from_file": "main", "exclude": []}]}"#,
    )
    .unwrap();

    domset_cmd()
        .arg("customize")
        .arg(temp.path().join("data"))
        .arg("--config")
        .arg(temp.path().join("custom.json"))
        .assert()
        .failure()
        .code(3)
        .stderr(predicate::str::contains("exclude_includes[0].exclude"));
}

#[test]
fn test_customize_missing_source_dir_exits_2() {
    let temp = TempDir::new().unwrap();

    domset_cmd()
        .arg("customize")
        .arg(temp.path().join("ghost"))
        .assert()
        .failure()
        .code(2);
}
