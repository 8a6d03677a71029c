//! Integration tests for the filelist command

use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

mod common;
use common::domset_cmd;

#[test]
fn test_filelist_generates_listing() {
    let temp = TempDir::new().unwrap();
    let release = temp.path().join("release");
    fs::create_dir_all(&release).unwrap();
    fs::write(release.join("test.txt"), "# Source: x\n\n.a.com\n.b.com\n").unwrap();
    fs::write(release.join("test@cn.txt"), "# Source: x\n\n.a.com\n").unwrap();

    domset_cmd()
        .arg("filelist")
        .arg(&release)
        .arg(temp.path().join("page"))
        .arg("--repo-name")
        .arg("owner/repo")
        .assert()
        .success()
        .stdout(predicate::str::contains("Listed 2 files"));

    let js = fs::read_to_string(temp.path().join("page/fileList.js")).unwrap();
    assert!(js.contains("const repoName = \"owner/repo\";"));
    assert!(js.contains("\"name\":\"test.txt\""));
    assert!(js.contains("\"name\":\"test@cn.txt\""));
    assert!(js.contains("\"lines\":2"));
}

#[test]
fn test_filelist_copies_index_template() {
    let temp = TempDir::new().unwrap();
    let release = temp.path().join("release");
    fs::create_dir_all(&release).unwrap();
    fs::write(release.join("test.txt"), ".a.com\n").unwrap();
    fs::write(temp.path().join("index.html"), "<html></html>").unwrap();

    domset_cmd()
        .arg("filelist")
        .arg(&release)
        .arg(temp.path().join("page"))
        .arg("--index")
        .arg(temp.path().join("index.html"))
        .assert()
        .success()
        .stdout(predicate::str::contains("Copied index.html"));

    assert!(temp.path().join("page/index.html").exists());
}

#[test]
fn test_filelist_missing_release_dir_exits_2() {
    let temp = TempDir::new().unwrap();

    domset_cmd()
        .arg("filelist")
        .arg(temp.path().join("ghost"))
        .arg(temp.path().join("page"))
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("Release directory not found"));
}
