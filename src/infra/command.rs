//! # Command Execution Module / 命令执行模块
//!
//! Spawns the runner for one test file and turns its exit status into a
//! `RunResult`.
//!
//! 为单个测试文件派生运行器，并将其退出状态转换为 `RunResult`。

use colored::*;
use std::io;
use std::path::Path;
use std::process::ExitStatus;

use crate::core::models::RunResult;

/// Exit code a POSIX shell reports when the program cannot be found.
pub const EXIT_NOT_FOUND: i32 = 127;
/// Exit code a POSIX shell reports when the program cannot be executed.
pub const EXIT_NOT_EXECUTABLE: i32 = 126;

/// Spawns `program` with `args` and then `file` as its last argument,
/// inheriting the standard streams, and waits for it to finish.
/// The file path is passed as a single argument and never goes through a shell.
///
/// # Arguments
/// * `program` - The runner program, e.g. `cargo`.
/// * `args` - The runner's fixed arguments, e.g. `run`.
/// * `file` - The test file to run.
///
/// # Returns
/// The `RunResult` of the child. A spawn failure is not an error here: it is
/// reported on stderr and turned into a failing result, like a shell would.
///
/// 派生 `program` 并在 `args` 之后将 `file` 作为最后一个参数追加，继承标准流并等待其结束。
/// 文件路径作为单个参数传递，从不经过 shell。
/// 派生失败不会作为错误返回：它会在 stderr 上报告并转换为失败结果。
pub async fn run_inherited(program: &str, args: &[String], file: &Path) -> RunResult {
    let status = tokio::process::Command::new(program)
        .args(args)
        .arg(file)
        .status()
        .await;

    match status {
        Ok(status) => RunResult::new(exit_code_of(status)),
        Err(e) => {
            eprintln!(
                "{} `{}`: {}",
                "Failed to spawn".yellow(),
                program,
                e
            );
            RunResult::new(spawn_error_code(&e))
        }
    }
}

/// Maps an exit status to an integer code.
/// Signal terminations become `128 + signal` on Unix; anything else
/// without a code becomes `-1`.
///
/// 将退出状态映射为整数退出码。
pub fn exit_code_of(status: ExitStatus) -> i32 {
    if let Some(code) = status.code() {
        return code;
    }

    #[cfg(unix)]
    {
        use std::os::unix::process::ExitStatusExt;
        if let Some(signal) = status.signal() {
            return 128 + signal;
        }
    }

    -1
}

/// Maps a spawn error to the code a shell would have reported for it.
pub fn spawn_error_code(error: &io::Error) -> i32 {
    match error.kind() {
        io::ErrorKind::NotFound => EXIT_NOT_FOUND,
        _ => EXIT_NOT_EXECUTABLE,
    }
}
