//! # Infrastructure Module / 基础设施模块
//!
//! This module provides the infrastructure services of the harness:
//! child process invocation and file system enumeration.
//!
//! 此模块为测试工具提供基础设施服务：
//! 子进程调用和文件系统枚举。

pub mod command;
pub mod fs;
