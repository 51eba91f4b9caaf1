//! # Core Module / 核心模块
//!
//! This module contains the core functionality of the harness,
//! including its settings, data models and the harness pass itself.
//!
//! 此模块包含测试工具的核心功能，
//! 包括设置、数据模型以及执行流程本身。

pub mod config;
pub mod execution;
pub mod models;

// Re-exports
pub use config::HarnessConfig;
pub use execution::run_suite;
pub use models::{RunOutcome, Tally};
