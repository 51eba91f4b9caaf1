//! # Command Module Unit Tests / Command 模块单元测试
//!
//! Tests for child invocation and exit code mapping.
//!
//! 测试子进程调用和退出码映射。

mod common;

use langin_tests::infra::command::{
    run_inherited, spawn_error_code, EXIT_NOT_EXECUTABLE, EXIT_NOT_FOUND,
};
use std::io;
use std::path::Path;

fn args(words: &[&str]) -> Vec<String> {
    words.iter().map(|w| w.to_string()).collect()
}

#[cfg(test)]
mod spawn_error_tests {
    use super::*;

    #[test]
    fn test_not_found_maps_to_127() {
        let err = io::Error::new(io::ErrorKind::NotFound, "missing");
        assert_eq!(spawn_error_code(&err), EXIT_NOT_FOUND);
    }

    #[test]
    fn test_other_errors_map_to_126() {
        let err = io::Error::new(io::ErrorKind::PermissionDenied, "denied");
        assert_eq!(spawn_error_code(&err), EXIT_NOT_EXECUTABLE);
    }

    #[tokio::test]
    async fn test_missing_program_is_a_failing_result() {
        let result = run_inherited(
            "this_command_definitely_does_not_exist_12345",
            &[],
            Path::new("./tests/a.lang"),
        )
        .await;
        assert_eq!(result.exit_code, EXIT_NOT_FOUND);
        assert!(result.is_failure());
    }

    #[tokio::test]
    async fn test_empty_program_is_a_failing_result() {
        let result = run_inherited("", &[], Path::new("./tests/a.lang")).await;
        assert!(result.is_failure());
    }
}

#[cfg(all(test, unix))]
mod run_inherited_tests {
    use super::*;
    use crate::common::{setup_tests_dir, write_script};

    #[tokio::test]
    async fn test_exit_code_is_captured() {
        let (_guard, tests_dir) = setup_tests_dir();
        let ok = write_script(&tests_dir, "ok.sh", 0);
        let bad = write_script(&tests_dir, "bad.sh", 42);

        assert_eq!(run_inherited("sh", &[], &ok).await.exit_code, 0);
        assert_eq!(run_inherited("sh", &[], &bad).await.exit_code, 42);
    }

    #[tokio::test]
    async fn test_file_is_passed_as_one_argument() {
        let (_guard, tests_dir) = setup_tests_dir();
        // A name that would split or expand if it went through a shell
        let script = write_script(&tests_dir, "two words $HOME.sh", 7);

        let result = run_inherited("sh", &[], &script).await;
        assert_eq!(result.exit_code, 7);
    }

    #[tokio::test]
    async fn test_fixed_arguments_come_before_the_file() {
        let (_guard, tests_dir) = setup_tests_dir();
        let script = write_script(&tests_dir, "ok.sh", 0);

        // `sh -e <file>`: the fixed argument must precede the file path
        let result = run_inherited("sh", &args(&["-e"]), &script).await;
        assert_eq!(result.exit_code, 0);
    }

    #[tokio::test]
    async fn test_signal_termination_maps_to_shell_code() {
        let (_guard, tests_dir) = setup_tests_dir();
        let path = tests_dir.join("killed.sh");
        std::fs::write(&path, "kill -9 $$\n").unwrap();

        let result = run_inherited("sh", &[], &path).await;
        assert_eq!(result.exit_code, 128 + 9);
    }
}
