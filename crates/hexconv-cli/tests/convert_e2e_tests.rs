//! End-to-end tests for `hexconv local`
//!
//! These tests run the binary against temporary folders and cover:
//! - Decoding hex files into the destination folder
//! - Skipping entries converted by an earlier run
//! - Reporting malformed files without stopping the batch
//! - Fatal setup errors and exit codes

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

/// Binary with a clean environment, run from `cwd`
fn hexconv(cwd: &Path) -> Command {
    let mut cmd = Command::cargo_bin("hexconv").unwrap();
    cmd.current_dir(cwd)
        .env("NO_COLOR", "1")
        .env_remove("HEXCONV_LOG_LEVEL")
        .env_remove("HEXCONV_LOG_OUTPUT");
    cmd
}

fn source_with(files: &[(&str, &str)]) -> TempDir {
    let dir = TempDir::new().unwrap();
    for (name, content) in files {
        fs::write(dir.path().join(name), content).unwrap();
    }
    dir
}

#[test]
fn test_local_converts_files() {
    let src = source_with(&[("a.hex", "48 65 6c 6c 6f\n"), ("b.hex", "4869")]);
    let work = TempDir::new().unwrap();
    let dest = work.path().join("out");

    hexconv(work.path())
        .arg("local")
        .arg(src.path())
        .arg(&dest)
        .assert()
        .success()
        .stdout(predicate::str::contains("a.hex"))
        .stdout(predicate::str::contains("2 converted, 0 skipped, 0 failed"));

    assert_eq!(fs::read_to_string(dest.join("a.txt")).unwrap(), "Hello");
    assert_eq!(fs::read_to_string(dest.join("b.txt")).unwrap(), "Hi");
}

#[test]
fn test_local_skips_existing_output() {
    let src = source_with(&[("a.hex", "48656c6c6f")]);
    let dest = TempDir::new().unwrap();
    fs::write(dest.path().join("a.txt"), "kept").unwrap();

    hexconv(dest.path())
        .arg("local")
        .arg(src.path())
        .arg(dest.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("a.hex skipped: already converted"))
        .stdout(predicate::str::contains("0 converted, 1 skipped, 0 failed"));

    assert_eq!(fs::read_to_string(dest.path().join("a.txt")).unwrap(), "kept");
}

#[test]
fn test_local_second_run_skips_everything() {
    let src = source_with(&[("a.hex", "41"), ("b.hex", "42")]);
    let dest = TempDir::new().unwrap();

    for expected in ["2 converted, 0 skipped", "0 converted, 2 skipped"] {
        hexconv(dest.path())
            .arg("local")
            .arg(src.path())
            .arg(dest.path())
            .assert()
            .success()
            .stdout(predicate::str::contains(expected));
    }
}

#[test]
fn test_local_reports_malformed_and_continues() {
    let src = source_with(&[("bad.hex", "48656c6c6"), ("good.hex", "4869")]);
    let dest = TempDir::new().unwrap();

    hexconv(dest.path())
        .arg("local")
        .arg(src.path())
        .arg(dest.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("bad.hex failed: malformed hex"))
        .stdout(predicate::str::contains("1 converted, 0 skipped, 1 failed"));

    assert!(!dest.path().join("bad.txt").exists());
    assert_eq!(fs::read_to_string(dest.path().join("good.txt")).unwrap(), "Hi");
}

#[test]
fn test_local_missing_source_is_fatal() {
    let work = TempDir::new().unwrap();

    hexconv(work.path())
        .arg("local")
        .arg(work.path().join("missing"))
        .arg(work.path().join("out"))
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Cannot list source folder"));
}

#[test]
fn test_local_destination_setup_failure_is_fatal() {
    let src = source_with(&[("a.hex", "41")]);
    let work = TempDir::new().unwrap();
    let blocker = work.path().join("file");
    fs::write(&blocker, "not a folder").unwrap();

    hexconv(work.path())
        .arg("local")
        .arg(src.path())
        .arg(&blocker)
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Cannot create destination folder"));
}

#[test]
fn test_missing_arguments_exit_code() {
    let work = TempDir::new().unwrap();

    hexconv(work.path()).arg("local").assert().code(2);
}

#[test]
fn test_markdown_help() {
    let work = TempDir::new().unwrap();

    hexconv(work.path())
        .arg("--markdown-help")
        .assert()
        .success()
        .stdout(predicate::str::contains("# Command-Line Help for `hexconv`"))
        .stdout(predicate::str::contains("hexconv sheets"));
}
