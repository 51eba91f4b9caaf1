//! # Langin Test Harness Library / Langin 测试工具库
//!
//! This library drives the langin test suite: it walks the `./tests` directory,
//! runs every file through `cargo run`, tallies the failures and prints a
//! one-line summary.
//!
//! 此库驱动 langin 测试套件：遍历 `./tests` 目录，
//! 通过 `cargo run` 运行每个文件，统计失败次数并打印一行摘要。
//!
//! ## Modules / 模块
//!
//! - `core` - Harness settings, data models and the harness pass
//! - `infra` - Directory enumeration and child process invocation
//! - `reporting` - Console summary lines
//! - `cli` - Command-line entry point
//!
//! - `core` - 工具设置、数据模型和执行流程
//! - `infra` - 目录枚举和子进程调用
//! - `reporting` - 控制台摘要输出
//! - `cli` - 命令行入口

pub mod cli;
pub mod core;
pub mod infra;
pub mod reporting;

// Re-export commonly used items
pub use crate::core::config;
pub use crate::core::execution;
pub use crate::core::models;
