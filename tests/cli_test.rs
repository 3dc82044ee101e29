//! CLI surface tests.
//!
//! These avoid the `run` command's side effects; they exercise argument
//! parsing, config discovery, `list`, `init`, and `completions`.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn rigup() -> Command {
    Command::cargo_bin("rigup").unwrap()
}

#[test]
fn help_lists_subcommands() {
    rigup()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("run"))
        .stdout(predicate::str::contains("list"))
        .stdout(predicate::str::contains("init"))
        .stdout(predicate::str::contains("completions"));
}

#[test]
fn version_prints() {
    rigup()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("rigup"));
}

#[test]
fn missing_config_exits_with_prerequisite_code() {
    let temp = TempDir::new().unwrap();
    rigup()
        .current_dir(temp.path())
        .args(["list", "--config", "/definitely/not/here.yml"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("configuration not found"));
}

#[test]
fn run_without_config_exits_with_prerequisite_code() {
    let temp = TempDir::new().unwrap();
    rigup()
        .current_dir(temp.path())
        .env("HOME", temp.path())
        .env_remove("XDG_CONFIG_HOME")
        .assert()
        .code(2)
        .stderr(predicate::str::contains("configuration not found"));
}

#[test]
fn invalid_yaml_exits_with_prerequisite_code() {
    let temp = TempDir::new().unwrap();
    let config = temp.path().join("rigup.yml");
    std::fs::write(&config, "packages: [not, a, mapping]").unwrap();

    rigup()
        .args(["list", "--config"])
        .arg(&config)
        .assert()
        .code(2)
        .stderr(predicate::str::contains("failed to parse"));
}

#[test]
fn invalid_setting_value_exits_with_prerequisite_code() {
    let temp = TempDir::new().unwrap();
    let config = temp.path().join("rigup.yml");
    std::fs::write(
        &config,
        "settings:\n  - { domain: d, key: k, type: int, value: fast }\n",
    )
    .unwrap();

    rigup()
        .args(["list", "--config"])
        .arg(&config)
        .assert()
        .code(2)
        .stderr(predicate::str::contains("invalid configuration"));
}

#[test]
fn list_previews_the_plan() {
    let temp = TempDir::new().unwrap();
    let config = temp.path().join("rigup.yml");
    std::fs::write(
        &config,
        "packages:\n  formulae: [git]\n  casks: [raycast]\nrestart: false\n",
    )
    .unwrap();

    rigup()
        .args(["list", "--config"])
        .arg(&config)
        .assert()
        .success()
        .stdout(predicate::str::contains("Install Homebrew formulae"))
        .stdout(predicate::str::contains("Install Homebrew casks"))
        .stdout(predicate::str::contains("optional"))
        .stdout(predicate::str::contains("mandatory"))
        .stdout(predicate::str::contains("Restart now").not());
}

#[test]
fn init_writes_a_loadable_starter_config() {
    let temp = TempDir::new().unwrap();

    rigup()
        .current_dir(temp.path())
        .arg("init")
        .assert()
        .success();

    let written = temp.path().join("rigup.yml");
    assert!(written.is_file());

    // The starter config round-trips through `list`.
    rigup()
        .args(["list", "--config"])
        .arg(&written)
        .assert()
        .success()
        .stdout(predicate::str::contains("Install Homebrew"));
}

#[test]
fn init_refuses_to_overwrite() {
    let temp = TempDir::new().unwrap();
    std::fs::write(temp.path().join("rigup.yml"), "restart: false\n").unwrap();

    rigup()
        .current_dir(temp.path())
        .arg("init")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("refusing to overwrite"));
}

#[test]
fn completions_emit_a_script() {
    rigup()
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("rigup"));
}
