//! Integration tests for the taskq CLI

use assert_cmd::cargo;
use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

/// Get a Command for the taskq binary, isolated from the user's config.
fn taskq(home: &TempDir) -> Command {
    let mut cmd = Command::new(cargo::cargo_bin!("taskq"));
    cmd.env("HOME", home.path())
        .env("XDG_CONFIG_HOME", home.path().join(".config"))
        .env_remove("TASKQ_LOCALE")
        .env_remove("RUST_LOG");
    cmd
}

/// Session flags that keep stdout free of escapes and pauses.
const QUIET: [&str; 3] = ["--no-color", "--no-clear", "--no-pause"];

#[test]
fn test_help() {
    let home = TempDir::new().unwrap();
    taskq(&home)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Interactive terminal task manager"));
}

#[test]
fn test_version() {
    let home = TempDir::new().unwrap();
    taskq(&home)
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("0.1.0"));
}

#[test]
fn test_exit_from_menu() {
    let home = TempDir::new().unwrap();
    taskq(&home)
        .args(QUIET)
        .write_stdin("0\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("- 0.  Exit"))
        .stdout(predicate::str::contains("Selected option: "));
}

#[test]
fn test_end_of_input_exits_cleanly() {
    let home = TempDir::new().unwrap();
    taskq(&home).args(QUIET).write_stdin("").assert().success();
}

#[test]
fn test_run_subcommand() {
    let home = TempDir::new().unwrap();
    taskq(&home)
        .arg("run")
        .args(QUIET)
        .write_stdin("0\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("TODO LIST"));
}

#[test]
fn test_complete_and_list_scenario() {
    let home = TempDir::new().unwrap();
    let script = [
        "1", "Buy milk", "medium", // add
        "1", "File taxes", "critical", // add
        "2",  // complete next (Buy milk)
        "5",  // show next pending
        "6",  // list all
        "0",
    ]
    .join("\n")
        + "\n";

    let assert = taskq(&home).args(QUIET).write_stdin(script).assert().success();
    let stdout = String::from_utf8(assert.get_output().stdout.clone()).unwrap();

    assert!(stdout.contains("Critical - File taxes - Pending"));

    let pending_at = stdout.find("Pending (1)").expect("pending section");
    let completed_at = stdout.find("Completed (1)").expect("completed section");
    assert!(pending_at < completed_at);

    let listing = &stdout[pending_at..];
    let taxes_at = listing.find("File taxes").unwrap();
    let milk_at = listing.find("Buy milk").unwrap();
    assert!(taxes_at < milk_at);
}

#[test]
fn test_empty_queue_notices() {
    let home = TempDir::new().unwrap();
    taskq(&home)
        .args(QUIET)
        .write_stdin("6\n7\n8\n0\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("There are no tasks in the queue."))
        .stdout(predicate::str::contains("There are no pending tasks in the queue."))
        .stdout(predicate::str::contains(
            "There are no completed tasks in the queue.",
        ));
}

#[test]
fn test_clear_then_show_first() {
    let home = TempDir::new().unwrap();
    taskq(&home)
        .args(QUIET)
        .write_stdin("1\nBuy milk\nlow\n10\n4\n0\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("There are no tasks to show."));
}

#[test]
fn test_portuguese_locale_flag() {
    let home = TempDir::new().unwrap();
    taskq(&home)
        .args(QUIET)
        .args(["--locale", "pt"])
        .write_stdin("1\nPagar contas\nmédia\n4\n0\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Opção selecionada: "))
        .stdout(predicate::str::contains("Média - Pagar contas - Pendente"));
}

#[test]
fn test_locale_from_env() {
    let home = TempDir::new().unwrap();
    taskq(&home)
        .env("TASKQ_LOCALE", "portuguese")
        .args(QUIET)
        .write_stdin("0\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("- 0.  Sair"));
}

#[test]
fn test_config_file_is_applied() {
    let home = TempDir::new().unwrap();
    let path = home.path().join("taskq.json");
    fs::write(
        &path,
        r#"{"locale": "portuguese", "color": false, "clear_screen": false, "pause_after_action": false}"#,
    )
    .unwrap();

    taskq(&home)
        .arg("--config")
        .arg(&path)
        .write_stdin("0\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Sair"))
        .stdout(predicate::str::contains("\x1B[2J").not());
}

#[test]
fn test_user_config_dir_is_searched() {
    let home = TempDir::new().unwrap();
    let dir = home.path().join(".config").join("taskq");
    fs::create_dir_all(&dir).unwrap();
    fs::write(dir.join("config.json"), r#"{"locale": "portuguese"}"#).unwrap();

    taskq(&home)
        .args(["config", "show", "--json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"portuguese\""));
}

#[test]
fn test_missing_config_file_fails() {
    let home = TempDir::new().unwrap();
    taskq(&home)
        .arg("--config")
        .arg(home.path().join("nope.json"))
        .write_stdin("0\n")
        .assert()
        .failure()
        .code(6)
        .stderr(predicate::str::contains("Missing required file"));
}

#[test]
fn test_invalid_config_file_fails() {
    let home = TempDir::new().unwrap();
    let path = home.path().join("bad.json");
    fs::write(&path, "{ nope").unwrap();

    taskq(&home)
        .arg("--config")
        .arg(&path)
        .arg("run")
        .assert()
        .failure()
        .code(7)
        .stderr(predicate::str::contains("invalid JSON"));
}

#[test]
fn test_config_show_defaults() {
    let home = TempDir::new().unwrap();
    taskq(&home)
        .args(["config", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("locale:"))
        .stdout(predicate::str::contains("english"));
}

#[test]
fn test_config_paths() {
    let home = TempDir::new().unwrap();
    taskq(&home)
        .args(["config", "paths"])
        .assert()
        .success()
        .stdout(predicate::str::contains("taskq/config.json"))
        .stdout(predicate::str::contains("not found"));
}
