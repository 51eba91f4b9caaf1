//! # Harness Settings / 工具设置
//!
//! The harness is intentionally fixed: it always reads `./tests` and always
//! runs `cargo run <file>`. These settings live in one struct so the library
//! can be pointed elsewhere from tests.
//!
//! 测试工具是固定的：它总是读取 `./tests` 并运行 `cargo run <file>`。
//! 这些设置集中在一个结构体中，以便测试时可以指向其他位置。

use anyhow::{bail, Result};
use std::path::{Path, PathBuf};

/// Directory scanned for test inputs, relative to the working directory.
/// 扫描测试输入的目录，相对于当前工作目录。
pub const DEFAULT_TESTS_DIR: &str = "./tests";

/// Command template each test file is appended to.
/// 每个测试文件追加到其后的命令模板。
pub const DEFAULT_RUNNER: &str = "cargo run";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HarnessConfig {
    /// Directory whose immediate entries are the test inputs.
    /// 其直接条目即为测试输入的目录。
    pub tests_dir: PathBuf,
    /// The runner command template, e.g. `cargo run`. The test file path
    /// is passed as one extra argument after the template's own words.
    /// 运行器命令模板，例如 `cargo run`。测试文件路径作为额外的参数追加在模板之后。
    pub runner: String,
}

impl Default for HarnessConfig {
    fn default() -> Self {
        Self {
            tests_dir: PathBuf::from(DEFAULT_TESTS_DIR),
            runner: DEFAULT_RUNNER.to_string(),
        }
    }
}

impl HarnessConfig {
    pub fn new(tests_dir: impl Into<PathBuf>, runner: impl Into<String>) -> Self {
        Self {
            tests_dir: tests_dir.into(),
            runner: runner.into(),
        }
    }

    pub fn tests_dir(&self) -> &Path {
        &self.tests_dir
    }

    /// Splits the runner template into a program and its arguments.
    ///
    /// # Returns
    /// The program to spawn and the template's remaining words.
    /// Fails if the template cannot be tokenised or is empty.
    ///
    /// 将运行器模板拆分为程序及其参数。
    /// 如果模板无法解析或为空，则返回错误。
    pub fn runner_command(&self) -> Result<(String, Vec<String>)> {
        let mut parts = shlex::split(&self.runner)
            .ok_or_else(|| anyhow::anyhow!("Failed to parse runner command: {}", self.runner))?;

        if parts.is_empty() {
            bail!("Empty runner command after parsing.");
        }

        let program = parts.remove(0);
        Ok((program, parts))
    }
}
