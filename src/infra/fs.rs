//! # File System Operations Module / 文件系统操作模块
//!
//! This module enumerates the tests directory and classifies its entries.
//!
//! 此模块枚举测试目录并对其条目进行分类。

use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

use crate::core::models::TestEntry;

/// Lists the immediate entries of a directory as full paths.
/// Each path is `dir` joined with the entry name, so `./tests` yields
/// paths like `./tests/add.lang`. No recursion, no sorting: the order is
/// whatever the filesystem returns.
///
/// # Arguments
/// * `dir` - Directory to list
///
/// # Returns
/// The entry paths, or an error if the directory cannot be read
///
/// 列出目录的直接条目，返回完整路径。不递归，不排序。
pub fn list_entry_paths(dir: &Path) -> Result<Vec<PathBuf>> {
    let read_dir = fs::read_dir(dir)
        .with_context(|| format!("Failed to read tests directory: {}", dir.display()))?;

    read_dir
        .map(|entry| {
            let entry = entry
                .with_context(|| format!("Failed to read entry in: {}", dir.display()))?;
            Ok(dir.join(entry.file_name()))
        })
        .collect()
}

/// Classifies a path as a regular file or not.
/// Symlinks are followed, and a path whose metadata cannot be read
/// (e.g. a dangling symlink) is not a file.
pub fn classify(path: PathBuf) -> TestEntry {
    let is_file = fs::metadata(&path)
        .map(|meta| meta.is_file())
        .unwrap_or(false);
    TestEntry::new(path, is_file)
}
