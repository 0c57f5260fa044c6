//! Integration tests for CLI

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

fn aitk(cwd: &Path, home: &Path) -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("aitk"));
    cmd.current_dir(cwd)
        .env("HOME", home)
        .env_remove("XDG_CONFIG_HOME")
        .env_remove("AITK_LISTING_STYLE")
        .env_remove("AITK_IGNORE_FILE_NAME");
    cmd
}

#[test]
fn test_cli_version() {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("aitk"));
    cmd.arg("--version");
    cmd.assert().success().stdout(predicate::str::contains("aitk"));
}

#[test]
fn test_cli_help() {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("aitk"));
    cmd.arg("--help");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("ls"))
        .stdout(predicate::str::contains("cat"))
        .stdout(predicate::str::contains("types"));
}

#[test]
fn test_ls_rejects_invalid_style() {
    let work = TempDir::new().expect("work");
    let home = TempDir::new().expect("home");
    aitk(work.path(), home.path())
        .args(["ls", "--style", "sideways"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid style 'sideways'"));
}

#[test]
fn test_invalid_root_is_reported_and_skipped() {
    let work = TempDir::new().expect("work");
    let home = TempDir::new().expect("home");
    fs::create_dir(work.path().join("proj")).expect("mkdir");
    fs::write(work.path().join("proj/main.ts"), "export {}\n").expect("write");

    aitk(work.path(), home.path())
        .args(["ls", "does/not/exist", "proj"])
        .assert()
        .success()
        .stderr(predicate::str::contains("Error: \"does/not/exist\" is not a valid directory."))
        .stdout("main.ts\n");
}

#[test]
fn test_roots_render_in_argument_order() {
    let work = TempDir::new().expect("work");
    let home = TempDir::new().expect("home");
    for name in ["a", "b"] {
        fs::create_dir(work.path().join(name)).expect("mkdir");
        fs::write(work.path().join(name).join(format!("{name}.txt")), name).expect("write");
    }

    aitk(work.path(), home.path())
        .args(["ls", "--style", "flat", "b", "a"])
        .assert()
        .success()
        .stdout("- b/b.txt\n- a/a.txt\n");
}

#[test]
fn test_no_dirs_walks_current_directory() {
    let work = TempDir::new().expect("work");
    let home = TempDir::new().expect("home");
    fs::create_dir(work.path().join("src")).expect("mkdir");
    fs::write(work.path().join("src/lib.ts"), "").expect("write");
    fs::write(work.path().join("README.md"), "").expect("write");

    aitk(work.path(), home.path())
        .args(["ls", "--sort"])
        .assert()
        .success()
        .stdout("README.md\nsrc/\n└─ lib.ts\n");
}

#[test]
fn test_home_ignore_file_applies_everywhere() {
    let work = TempDir::new().expect("work");
    let home = TempDir::new().expect("home");
    fs::write(home.path().join(".aitkignore"), "*.log\n").expect("write");
    fs::create_dir(work.path().join("logs")).expect("mkdir");
    fs::write(work.path().join("logs/app.log"), "noise").expect("write");
    fs::write(work.path().join("logs/keep.txt"), "keep").expect("write");

    aitk(work.path(), home.path())
        .args(["ls", "--style", "flat", "logs"])
        .assert()
        .success()
        .stdout("- logs/keep.txt\n");

    aitk(work.path(), home.path())
        .args(["ls", "--style", "flat", "--sort", "--no-home-ignore", "logs"])
        .assert()
        .success()
        .stdout("- logs/app.log\n- logs/keep.txt\n");
}

#[test]
fn test_project_config_sets_listing_style() {
    let work = TempDir::new().expect("work");
    let home = TempDir::new().expect("home");
    fs::write(work.path().join("aitk.toml"), "listing_style = \"flat\"\n").expect("write");
    fs::create_dir(work.path().join("proj")).expect("mkdir");
    fs::write(work.path().join("proj/x.txt"), "x").expect("write");

    aitk(work.path(), home.path())
        .args(["ls", "proj"])
        .assert()
        .success()
        .stdout("- proj/x.txt\n");
}

#[test]
fn test_missing_config_file_fails() {
    let work = TempDir::new().expect("work");
    let home = TempDir::new().expect("home");
    aitk(work.path(), home.path())
        .args(["--config", "missing.toml", "ls"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to load configuration"));
}
