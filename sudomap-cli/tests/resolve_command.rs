//! Integration tests for the `resolve` command.

mod common;

use common::TestEnv;
use predicates::prelude::*;

#[test]
fn test_resolve_human_output_by_default() {
    let env = TestEnv::new();
    let root = env.standard_layout();

    env.command()
        .arg("resolve")
        .arg(&root)
        .assert()
        .success()
        .stdout(predicate::str::contains("Files (3):"))
        .stdout(predicate::str::contains("sudoers.local"))
        .stdout(predicate::str::contains("10-base"))
        .stdout(predicate::str::contains("Include directories (1):"));
}

#[test]
fn test_resolve_plain_output() {
    let env = TestEnv::new();
    let root = env.standard_layout();

    let assert = env
        .command()
        .args(["resolve", "--format", "plain"])
        .arg(&root)
        .assert()
        .success();

    let stdout = String::from_utf8(assert.get_output().stdout.clone()).unwrap();
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines.len(), 3);
    assert!(lines.iter().all(|line| line.starts_with('/')));
}

#[test]
fn test_resolve_json_output() {
    let env = TestEnv::new();
    let root = env.standard_layout();

    let assert = env
        .command()
        .args(["resolve", "--format", "json"])
        .arg(&root)
        .assert()
        .success();

    let stdout = String::from_utf8(assert.get_output().stdout.clone()).unwrap();
    let value: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(value["files"].as_array().unwrap().len(), 3);
    assert_eq!(value["directories"].as_array().unwrap().len(), 1);
}

#[test]
fn test_resolve_csv_output() {
    let env = TestEnv::new();
    let root = env.standard_layout();

    let assert = env
        .command()
        .args(["resolve", "--format", "csv"])
        .arg(&root)
        .assert()
        .success();

    let stdout = String::from_utf8(assert.get_output().stdout.clone()).unwrap();
    let mut lines = stdout.lines();
    assert_eq!(lines.next(), Some("kind,path"));
    let rest: Vec<&str> = lines.collect();
    assert_eq!(rest.len(), 4);
    assert_eq!(rest.iter().filter(|l| l.starts_with("file,")).count(), 3);
    assert_eq!(
        rest.iter().filter(|l| l.starts_with("directory,")).count(),
        1
    );
}

#[test]
fn test_resolve_missing_root_exits_2() {
    let env = TestEnv::new();

    env.command()
        .arg("resolve")
        .arg(env.path("absent"))
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("Error:"));
}

#[test]
fn test_resolve_missing_include_warns_but_succeeds() {
    let env = TestEnv::new();
    let root = env.file("sudoers", "#include missing.conf\n");

    env.command()
        .arg("resolve")
        .arg(&root)
        .assert()
        .success()
        .stdout(predicate::str::contains("Files (1):"))
        .stderr(predicate::str::contains("WARN"))
        .stderr(predicate::str::contains("missing.conf"));
}

#[test]
fn test_resolve_max_depth_flag() {
    let env = TestEnv::new();
    let root = env.file("a0", "#include a1\n");
    env.file("a1", "#include a2\n");
    env.file("a2", "");

    env.command()
        .args(["resolve", "--max-depth", "1"])
        .arg(&root)
        .assert()
        .success()
        .stdout(predicate::str::contains("Files (2):"))
        .stderr(predicate::str::contains("depth limit"));
}

#[test]
fn test_resolve_root_prefix_reanchors() {
    let env = TestEnv::new();
    // A staged tree holding /etc/sudoers under the fixture base
    env.file("staged/etc/sudoers", "#include sudoers.local\n");
    env.file("staged/etc/sudoers.local", "");

    env.command()
        .args(["resolve", "/etc/sudoers", "--root-prefix"])
        .arg(env.path("staged"))
        .assert()
        .success()
        .stdout(predicate::str::contains("staged/etc/sudoers"))
        .stdout(predicate::str::contains("staged/etc/sudoers.local"));
}

#[test]
fn test_resolve_uses_config_file() {
    let env = TestEnv::new();
    let root = env.standard_layout();
    let config = env.file("config.yaml", "output_format: plain\n");

    let assert = env
        .command()
        .arg("--config")
        .arg(&config)
        .arg("resolve")
        .arg(&root)
        .assert()
        .success();

    let stdout = String::from_utf8(assert.get_output().stdout.clone()).unwrap();
    assert!(!stdout.contains("Files ("));
    assert_eq!(stdout.lines().count(), 3);
}

#[test]
fn test_resolve_format_flag_beats_config() {
    let env = TestEnv::new();
    let root = env.standard_layout();
    let config = env.file("config.yaml", "output_format: json\n");

    env.command()
        .arg("--config")
        .arg(&config)
        .args(["resolve", "--format", "human"])
        .arg(&root)
        .assert()
        .success()
        .stdout(predicate::str::contains("Files (3):"));
}

#[test]
fn test_resolve_invalid_config_exits_7() {
    let env = TestEnv::new();
    let root = env.standard_layout();
    let config = env.file("config.yaml", "max_depth: [broken\n");

    env.command()
        .arg("--config")
        .arg(&config)
        .arg("resolve")
        .arg(&root)
        .assert()
        .failure()
        .code(7)
        .stderr(predicate::str::contains("Configuration error"));
}
