//! Integration tests for the config command

#![allow(deprecated)]

use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

mod common;
use common::moodmeter_cmd;

#[test]
fn test_config_list_defaults() {
    let temp = TempDir::new().unwrap();

    moodmeter_cmd(temp.path())
        .arg("config")
        .arg("--list")
        .assert()
        .success()
        .stdout(predicate::str::contains("first_run = true"))
        .stdout(predicate::str::contains("default_mood = Happy"));

    // Reading does not create the file
    assert!(!temp.path().join("config.toml").exists());
}

#[test]
fn test_config_set_default_mood() {
    let temp = TempDir::new().unwrap();

    moodmeter_cmd(temp.path())
        .args(["config", "default_mood", "tired"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Set default_mood = tired"));

    let content = fs::read_to_string(temp.path().join("config.toml")).unwrap();
    assert!(content.contains("default_mood = \"tired\""));

    moodmeter_cmd(temp.path())
        .args(["config", "default_mood"])
        .assert()
        .success()
        .stdout("Tired\n");
}

#[test]
fn test_config_invalid_mood_fails() {
    let temp = TempDir::new().unwrap();

    moodmeter_cmd(temp.path())
        .args(["config", "default_mood", "grumpy"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("Invalid mood: 'grumpy'"));
}

#[test]
fn test_config_unknown_key_fails() {
    let temp = TempDir::new().unwrap();

    moodmeter_cmd(temp.path())
        .args(["config", "colour", "blue"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Unknown config key"));
}

#[test]
fn test_config_created_read_only() {
    let temp = TempDir::new().unwrap();

    moodmeter_cmd(temp.path())
        .args(["config", "created", "2024-01-01T00:00:00Z"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("read-only"));
}

#[test]
fn test_explicit_config_path() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("custom").join("mood.toml");

    moodmeter_cmd(temp.path())
        .arg("--config")
        .arg(&path)
        .args(["config", "first_run", "false"])
        .assert()
        .success();

    assert!(path.exists());
    assert!(!temp.path().join("config.toml").exists());
}

#[test]
fn test_malformed_config_reports_path() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("config.toml"), "first_run = \"maybe\"").unwrap();

    moodmeter_cmd(temp.path())
        .args(["config", "--list"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Failed to parse"))
        .stderr(predicate::str::contains("--config"));
}
