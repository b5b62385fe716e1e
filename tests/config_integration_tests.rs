use std::fs;

use predicates::prelude::*;
use tempfile::TempDir;

mod common;
use common::cmd;

#[test]
fn init_creates_config_file() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join(".seo-guard.toml");

    cmd()
        .arg("init")
        .arg("--output")
        .arg(&config_path)
        .assert()
        .success()
        .stdout(predicate::str::contains("Created configuration file"));

    assert!(config_path.exists());
}

#[test]
fn init_refuses_to_overwrite_without_force() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join(".seo-guard.toml");
    fs::write(&config_path, "# existing\n").unwrap();

    cmd()
        .arg("init")
        .arg("--output")
        .arg(&config_path)
        .assert()
        .code(2)
        .stderr(predicate::str::contains("already exists"));
}

#[test]
fn init_overwrites_with_force() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join(".seo-guard.toml");
    fs::write(&config_path, "# existing\n").unwrap();

    cmd()
        .arg("init")
        .arg("--output")
        .arg(&config_path)
        .arg("--force")
        .assert()
        .success();

    let content = fs::read_to_string(&config_path).unwrap();
    assert!(content.contains("[analysis]"));
}

#[test]
fn generated_config_validates() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join(".seo-guard.toml");

    cmd()
        .arg("init")
        .arg("--output")
        .arg(&config_path)
        .assert()
        .success();

    cmd()
        .arg("config")
        .arg("validate")
        .arg("--config")
        .arg(&config_path)
        .assert()
        .success()
        .stdout(predicate::str::contains("Configuration is valid"));
}

#[test]
fn config_validate_rejects_malformed_toml() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("broken.toml");
    fs::write(&config_path, "not = = toml").unwrap();

    cmd()
        .arg("config")
        .arg("validate")
        .arg("--config")
        .arg(&config_path)
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Configuration error"));
}

#[test]
fn config_validate_rejects_bad_glob() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("bad-glob.toml");
    fs::write(&config_path, "[scan]\nexclude = [\"[bad\"]\n").unwrap();

    cmd()
        .arg("config")
        .arg("validate")
        .arg("--config")
        .arg(&config_path)
        .assert()
        .code(2);
}

#[test]
fn config_validate_missing_file() {
    cmd()
        .arg("config")
        .arg("validate")
        .arg("--config")
        .arg("no-such-config.toml")
        .assert()
        .code(2)
        .stderr(predicate::str::contains("not found"));
}

#[test]
fn config_show_text() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("show.toml");
    fs::write(
        &config_path,
        "[checks]\n\"faq-schema\" = false\n\n[analysis]\nstrict = true\n",
    )
    .unwrap();

    cmd()
        .arg("config")
        .arg("show")
        .arg("--config")
        .arg(&config_path)
        .assert()
        .success()
        .stdout(predicate::str::contains("faq-schema = false"))
        .stdout(predicate::str::contains("strict = true"));
}

#[test]
fn config_show_json() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("show.toml");
    fs::write(&config_path, "[analysis]\nstrict = true\n").unwrap();

    let output = cmd()
        .arg("config")
        .arg("show")
        .arg("--config")
        .arg(&config_path)
        .arg("--format")
        .arg("json")
        .output()
        .unwrap();

    let parsed: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(parsed["analysis"]["strict"], true);
}

#[test]
fn checks_lists_catalogue() {
    cmd()
        .arg("checks")
        .assert()
        .success()
        .stdout(predicate::str::contains("title-length"))
        .stdout(predicate::str::contains("ai-structure"));
}
