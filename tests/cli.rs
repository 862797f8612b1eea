//! End-to-end tests against fake device directories

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::os::unix::fs::symlink;
use std::path::Path;
use tempfile::TempDir;

fn lsmountable() -> Command {
    Command::cargo_bin("lsmountable").unwrap()
}

fn fake_dev() -> TempDir {
    tempfile::tempdir().unwrap()
}

/// A regular file: opens fine, but the size ioctl is rejected
fn regular(dir: &Path, name: &str) {
    fs::write(dir.join(name), b"").unwrap();
}

/// A dangling symlink: cannot be opened at all
fn dangling(dir: &Path, name: &str) {
    symlink(dir.join("does-not-exist"), dir.join(name)).unwrap();
}

#[test]
fn missing_device_directory_exits_1() {
    let dir = fake_dev();
    lsmountable()
        .arg("--dev-root")
        .arg(dir.path().join("missing"))
        .assert()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("Cannot list device directory"));
}

#[test]
fn no_candidates_exits_2() {
    let dir = fake_dev();
    for name in ["sda", "sda1", "sda2", "null", "tty0", "sr0"] {
        regular(dir.path(), name);
    }

    lsmountable()
        .arg("--dev-root")
        .arg(dir.path())
        .assert()
        .code(2)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("No devices found"));
}

#[test]
fn unopenable_device_exits_3() {
    let dir = fake_dev();
    regular(dir.path(), "sda");
    dangling(dir.path(), "sdb");

    lsmountable()
        .arg("-d")
        .arg(dir.path())
        .assert()
        .code(3)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("Cannot open device"));
}

#[test]
fn size_query_failure_exits_4() {
    let dir = fake_dev();
    regular(dir.path(), "sdc");

    lsmountable()
        .arg("-d")
        .arg(dir.path())
        .assert()
        .code(4)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("Cannot get size"));
}

#[test]
fn drive_is_superseded_by_its_partition() {
    let dir = fake_dev();
    // sdb has a partition, so only the (broken) sdb1 is ever opened
    regular(dir.path(), "sdb");
    dangling(dir.path(), "sdb1");

    lsmountable()
        .arg("-d")
        .arg(dir.path())
        .assert()
        .code(3)
        .stderr(predicate::str::contains("sdb1"));
}

#[test]
fn skip_unreadable_continues_past_failures() {
    let dir = fake_dev();
    dangling(dir.path(), "sdb");
    regular(dir.path(), "sdc");

    lsmountable()
        .arg("-d")
        .arg(dir.path())
        .arg("--skip-unreadable")
        .assert()
        .success()
        .stdout(predicate::str::is_empty());
}

#[test]
fn skip_unreadable_json_is_empty_array() {
    let dir = fake_dev();
    dangling(dir.path(), "sdd1");

    let output = lsmountable()
        .arg("-d")
        .arg(dir.path())
        .args(["-s", "--format", "json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value, serde_json::json!([]));
}

#[test]
fn quiet_suppresses_diagnostic() {
    let dir = fake_dev();
    lsmountable()
        .arg("--dev-root")
        .arg(dir.path())
        .arg("--quiet")
        .assert()
        .code(2)
        .stderr(predicate::str::is_empty());
}

#[test]
fn config_file_sets_device_root() {
    let dir = fake_dev();
    let config = dir.path().join("lsmountable.toml");
    fs::write(
        &config,
        format!("dev_root = {:?}\n", dir.path().join("missing")),
    )
    .unwrap();

    lsmountable().arg("--config").arg(&config).assert().code(1);
}

#[test]
fn flag_overrides_config_file() {
    let dir = fake_dev();
    let devs = fake_dev();
    let config = dir.path().join("lsmountable.toml");
    fs::write(
        &config,
        format!("dev_root = {:?}\n", dir.path().join("missing")),
    )
    .unwrap();

    lsmountable()
        .arg("--config")
        .arg(&config)
        .arg("--dev-root")
        .arg(devs.path())
        .assert()
        .code(2);
}

#[test]
fn invalid_config_file_exits_64() {
    let dir = fake_dev();
    let config = dir.path().join("lsmountable.toml");
    fs::write(&config, "format = \"yaml\"\n").unwrap();

    lsmountable()
        .arg("--config")
        .arg(&config)
        .assert()
        .code(64)
        .stderr(predicate::str::contains("Cannot load config file"));
}

#[test]
fn unknown_flag_exits_64() {
    lsmountable().arg("--bogus").assert().code(64);
}

#[test]
fn help_exits_0() {
    lsmountable()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("EXIT CODES"));
}
