use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;
mod test_env;

fn setup_test_env() -> (TempDir, std::sync::MutexGuard<'static, ()>) {
    let guard = test_env::lock_test_env();
    let temp_dir = TempDir::new().unwrap();
    (temp_dir, guard)
}

fn get_cmd(temp_dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("somnoplot").unwrap();
    cmd.env("HOME", temp_dir.path());
    cmd.env_remove("SOMNOPLOT_DATA");
    cmd.current_dir(temp_dir.path());
    cmd
}

#[test]
fn test_missing_data_file() {
    let (temp_dir, _guard) = setup_test_env();

    get_cmd(&temp_dir)
        .args(["--data", "/nonexistent/assessments.csv", "show", "age"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicates::str::contains("Error:"));

    drop(temp_dir);
}

#[test]
fn test_non_numeric_cell() {
    let (temp_dir, _guard) = setup_test_env();
    let path = temp_dir.path().join("bad.csv");
    fs::write(&path, "age,BMI\n23,21.5\n31,n/a\n").unwrap();

    get_cmd(&temp_dir)
        .args(["--data", path.to_str().unwrap(), "show", "age"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicates::str::contains("invalid number 'n/a'"));

    drop(temp_dir);
}

#[test]
fn test_header_only_table() {
    let (temp_dir, _guard) = setup_test_env();
    let path = temp_dir.path().join("empty.csv");
    fs::write(&path, "age,BMI\n").unwrap();

    get_cmd(&temp_dir)
        .args(["--data", path.to_str().unwrap(), "show", "age"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicates::str::contains("empty"));

    drop(temp_dir);
}

#[test]
fn test_unknown_subcommand() {
    let (temp_dir, _guard) = setup_test_env();

    get_cmd(&temp_dir)
        .args(["frobnicate"])
        .assert()
        .failure();

    drop(temp_dir);
}

#[test]
fn test_version_flag() {
    let (temp_dir, _guard) = setup_test_env();

    get_cmd(&temp_dir)
        .args(["--version"])
        .assert()
        .success()
        .stdout(predicates::str::contains("somnoplot"));

    drop(temp_dir);
}

#[test]
fn test_help_lists_commands() {
    let (temp_dir, _guard) = setup_test_env();

    get_cmd(&temp_dir)
        .args(["--help"])
        .assert()
        .success()
        .stdout(predicates::str::contains("hyp"))
        .stdout(predicates::str::contains("show"))
        .stdout(predicates::str::contains("report"));

    drop(temp_dir);
}
