//! # Harness Execution Module / 执行流程模块
//!
//! This module runs a single pass over the tests directory: classify each
//! entry, run every file through the runner command one at a time, and
//! collect the failures into a [`Tally`].
//!
//! 此模块对测试目录执行单次遍历：对每个条目分类，
//! 逐个通过运行器命令运行每个文件，并将失败收集到 [`Tally`] 中。

use anyhow::Result;

use crate::{
    core::{
        config::HarnessConfig,
        models::{RunOutcome, Tally},
    },
    infra::{command, fs},
};

/// The main entry point for a harness pass.
///
/// Children run strictly one after another and inherit the standard streams.
/// The first entry that is not a regular file stops the pass immediately,
/// before any later entry is run.
///
/// # Arguments
/// * `config` - Tests directory and runner command to use
///
/// # Returns
/// The `RunOutcome` of the pass. Fails only if the tests directory cannot be
/// read or the runner command cannot be parsed.
///
/// 执行流程的主入口。
/// 子进程严格依次运行并继承标准流。第一个非普通文件条目会立即停止流程。
pub async fn run_suite(config: &HarnessConfig) -> Result<RunOutcome> {
    let (program, args) = config.runner_command()?;
    let paths = fs::list_entry_paths(config.tests_dir())?;

    let mut tally = Tally::new();
    for path in paths {
        // Stat at use, not at listing time
        let entry = fs::classify(path);
        if !entry.is_file {
            return Ok(RunOutcome::Aborted { path: entry.path });
        }

        let result = command::run_inherited(&program, &args, &entry.path).await;
        tally.record(&entry.path, result);
    }

    Ok(RunOutcome::Completed(tally))
}
