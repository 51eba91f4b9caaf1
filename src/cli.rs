// src/cli.rs
use anyhow::Result;
use clap::Command;
use std::process::ExitCode;

use crate::{
    core::{config::HarnessConfig, execution::run_suite},
    reporting::console::print_outcome,
};

/// Builds the command line definition.
/// The harness takes no arguments and has no help or version flags:
/// whatever is on the command line, the pass runs.
pub fn build_cli() -> Command {
    Command::new("langin-tests")
        .about(env!("CARGO_PKG_DESCRIPTION"))
        .disable_help_flag(true)
        .disable_version_flag(true)
        .ignore_errors(true)
}

/// Runs the harness once over `./tests` and reports the outcome on stdout.
/// Command-line arguments are accepted and ignored.
///
/// 对 `./tests` 执行一次测试流程，并在标准输出上报告结果。命令行参数会被接受并忽略。
pub async fn run() -> Result<ExitCode> {
    // Parse errors are discarded; they must never stop the pass
    let _ = build_cli().try_get_matches();

    let config = HarnessConfig::default();
    let outcome = run_suite(&config).await?;
    print_outcome(&outcome, &config);

    Ok(ExitCode::from(outcome.exit_code()))
}
