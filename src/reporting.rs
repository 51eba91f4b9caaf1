//! # Reporting Module / 报告模块
//!
//! This module prints the single line that ends every harness pass.
//!
//! 此模块打印每次执行流程结束时的单行输出。

pub mod console;

// Re-export common reporting functions
pub use console::print_outcome;
