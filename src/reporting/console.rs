//! # Console Reporting Module / 控制台报告模块
//!
//! This module formats and prints the harness's three possible output lines.
//! The lines are printed as plain text, never styled.
//!
//! 此模块格式化并打印测试工具的三种可能输出。输出为纯文本，不带样式。

use std::path::Path;

use crate::core::{
    config::HarnessConfig,
    models::{RunOutcome, Tally},
};

/// Prefix shared by every line the harness prints.
pub const PREFIX: &str = "[TESTS]";

/// The diagnostic printed when a non-file entry aborts the pass.
///
/// ```text
/// [TESTS]: unknown file `./tests/sub`
/// ```
pub fn unknown_file_message(path: &Path) -> String {
    format!("{}: unknown file `{}`", PREFIX, path.display())
}

/// The summary printed when no test file failed.
///
/// ```text
/// [TESTS]: successfully ran all tests in `./tests`
/// ```
pub fn success_message(tests_dir: &Path) -> String {
    format!(
        "{}: successfully ran all tests in `{}`",
        PREFIX,
        tests_dir.display()
    )
}

/// The summary printed when at least one test file failed.
/// Only the most recent failing path is named, whatever the count.
///
/// ```text
/// [TESTS]: failed with `2` error(s) in `./tests/bad.lang`
/// ```
///
/// 至少有一个测试文件失败时打印的摘要。无论失败数量多少，只列出最近一次失败的路径。
pub fn failure_message(tally: &Tally) -> String {
    let last = tally
        .last_failing_path()
        .map(|p| p.display().to_string())
        .unwrap_or_default();
    format!(
        "{}: failed with `{}` error(s) in `{}`",
        PREFIX,
        tally.failure_count(),
        last
    )
}

/// Returns the line that ends a pass with the given outcome.
/// 返回给定结果对应的结束行。
pub fn outcome_message(outcome: &RunOutcome, config: &HarnessConfig) -> String {
    match outcome {
        RunOutcome::Aborted { path } => unknown_file_message(path),
        RunOutcome::Completed(tally) if tally.is_clean() => success_message(config.tests_dir()),
        RunOutcome::Completed(tally) => failure_message(tally),
    }
}

/// Prints the line that ends a pass to stdout.
///
/// 将结束行打印到标准输出。
pub fn print_outcome(outcome: &RunOutcome, config: &HarnessConfig) {
    println!("{}", outcome_message(outcome, config));
}
