// Shared test helpers for integration tests
#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};
use tempfile::{tempdir, TempDir};

/// Creates a temporary working directory containing an empty `tests` directory.
/// Returns the guard and the path of the `tests` directory.
pub fn setup_tests_dir() -> (TempDir, PathBuf) {
    let temp_dir = tempdir().expect("Failed to create temporary directory");
    let tests_dir = temp_dir.path().join("tests");
    fs::create_dir_all(&tests_dir).expect("Failed to create tests directory");
    (temp_dir, tests_dir)
}

/// Writes a shell script into `dir` that exits with `code`.
/// Run with `sh <file>`, it stands in for a test file the compiler
/// accepts (`0`) or rejects (anything else).
pub fn write_script(dir: &Path, name: &str, code: i32) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, format!("exit {}\n", code)).expect("Failed to write script");
    path
}

/// Writes a script that appends its own name to `log` before exiting with `code`.
pub fn write_logging_script(dir: &Path, name: &str, log: &Path, code: i32) -> PathBuf {
    let path = dir.join(name);
    let content = format!("echo {} >> '{}'\nexit {}\n", name, log.display(), code);
    fs::write(&path, content).expect("Failed to write script");
    path
}
