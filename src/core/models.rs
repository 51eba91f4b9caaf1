//! # Data Models Module / 数据模型模块
//!
//! This module defines the data structures that flow through a harness pass:
//! the entries discovered in the tests directory, the result of running one
//! of them, the running failure tally and the final outcome.
//!
//! 此模块定义了执行流程中使用的数据结构：
//! 测试目录中发现的条目、运行单个条目的结果、累计的失败统计以及最终结果。

use std::path::{Path, PathBuf};

/// One filesystem entry found directly inside the tests directory.
/// 在测试目录中直接发现的一个文件系统条目。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TestEntry {
    /// The tests directory joined with the entry name, e.g. `./tests/add.lang`.
    /// 测试目录与条目名称拼接后的路径，例如 `./tests/add.lang`。
    pub path: PathBuf,
    /// Whether the entry was a regular file when it was classified.
    /// Symlinks are followed; an entry that cannot be stat'ed is not a file.
    /// 分类时该条目是否为普通文件。会跟随符号链接；无法获取元数据的条目不是文件。
    pub is_file: bool,
}

impl TestEntry {
    pub fn new(path: PathBuf, is_file: bool) -> Self {
        Self { path, is_file }
    }
}

/// The result of running the runner command against one test file.
/// 对单个测试文件运行命令的结果。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunResult {
    /// Exit code of the child. Signals and spawn failures are mapped to the
    /// codes a POSIX shell would report (`128 + signal`, `127`, `126`).
    /// 子进程的退出码。信号和派生失败会映射为 POSIX shell 报告的退出码。
    pub exit_code: i32,
}

impl RunResult {
    pub fn new(exit_code: i32) -> Self {
        Self { exit_code }
    }

    pub fn is_failure(&self) -> bool {
        self.exit_code != 0
    }
}

/// Running failure count for a single harness pass.
///
/// Only the most recent failing path is reported in the summary line, but
/// every failing path is kept in `failing_paths` in the order the files ran.
///
/// 单次执行流程的失败计数。
/// 摘要中只报告最近一次失败的路径，但所有失败路径都按运行顺序保存在 `failing_paths` 中。
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Tally {
    processed: usize,
    failure_count: usize,
    last_failing_path: Option<PathBuf>,
    failing_paths: Vec<PathBuf>,
}

impl Tally {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records the result of one invocation.
    /// 记录一次调用的结果。
    pub fn record(&mut self, path: &Path, result: RunResult) {
        self.processed += 1;
        if result.is_failure() {
            self.failure_count += 1;
            self.last_failing_path = Some(path.to_path_buf());
            self.failing_paths.push(path.to_path_buf());
        }
    }

    /// Number of files the runner was invoked on.
    pub fn processed(&self) -> usize {
        self.processed
    }

    pub fn failure_count(&self) -> usize {
        self.failure_count
    }

    /// The path of the most recent failing file, `None` while nothing failed.
    pub fn last_failing_path(&self) -> Option<&Path> {
        self.last_failing_path.as_deref()
    }

    /// Every failing path, in invocation order.
    pub fn failing_paths(&self) -> &[PathBuf] {
        &self.failing_paths
    }

    pub fn is_clean(&self) -> bool {
        self.failure_count == 0
    }
}

/// How a harness pass ended.
/// 执行流程的结束方式。
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunOutcome {
    /// Every entry was a file and was run; the tally holds the failures.
    /// 所有条目都是文件并已运行；统计中包含失败信息。
    Completed(Tally),
    /// A non-file entry was found and the pass stopped right there.
    /// 发现了非文件条目，流程立即停止。
    Aborted {
        /// The offending entry / 出错的条目
        path: PathBuf,
    },
}

impl RunOutcome {
    /// Exit code of the harness process itself. Failing test files do not
    /// affect it; only an aborted pass does.
    ///
    /// 测试工具进程自身的退出码。失败的测试文件不影响它，只有中止的流程才会。
    pub fn exit_code(&self) -> u8 {
        match self {
            RunOutcome::Completed(_) => 0,
            RunOutcome::Aborted { .. } => 1,
        }
    }

    pub fn tally(&self) -> Option<&Tally> {
        match self {
            RunOutcome::Completed(tally) => Some(tally),
            RunOutcome::Aborted { .. } => None,
        }
    }

    pub fn is_aborted(&self) -> bool {
        matches!(self, RunOutcome::Aborted { .. })
    }
}
