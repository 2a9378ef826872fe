//! # 样本目录收集器
//!
//! 收集包含 aims.out 的样本目录列表。
//!
//! ## 功能
//! - 按前缀匹配根目录下的一级子目录
//! - 从列表文件读取路径，取其所在目录
//!
//! ## 依赖关系
//! - 被 `commands/polarizability.rs` 调用
//! - 使用 `walkdir` 遍历目录

use crate::error::{AimskitError, Result};

use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// 收集 root 下名称以 prefix 开头的子目录（按名称排序）
pub fn folders_with_prefix(root: &Path, prefix: &str) -> Result<Vec<PathBuf>> {
    if !root.is_dir() {
        return Err(AimskitError::DirectoryNotFound {
            path: root.display().to_string(),
        });
    }

    let mut folders: Vec<PathBuf> = WalkDir::new(root)
        .min_depth(1)
        .max_depth(1)
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.file_type().is_dir())
        .filter(|e| {
            e.file_name()
                .to_str()
                .map_or(false, |name| name.starts_with(prefix))
        })
        .map(|e| e.path().to_path_buf())
        .collect();

    folders.sort();
    Ok(folders)
}

/// 从列表文件读取样本目录
pub fn folders_from_list(list: &Path) -> Result<Vec<PathBuf>> {
    let content = fs::read_to_string(list).map_err(|e| AimskitError::FileReadError {
        path: list.display().to_string(),
        source: e,
    })?;

    Ok(folders_from_list_content(&content))
}

/// 每行一个文件路径，取其父目录；空行忽略，无父目录时为当前目录
pub fn folders_from_list_content(content: &str) -> Vec<PathBuf> {
    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(|line| match Path::new(line).parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
            _ => PathBuf::from("."),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_folders_from_list_content() {
        let content = "md_sample_1/aims.out\n\n  runs/md_sample_7/aims.out  \naims.out\n";
        let folders = folders_from_list_content(content);
        assert_eq!(
            folders,
            vec![
                PathBuf::from("md_sample_1"),
                PathBuf::from("runs/md_sample_7"),
                PathBuf::from("."),
            ]
        );
    }

    #[test]
    fn test_folders_with_prefix() {
        let dir = tempfile::tempdir().unwrap();
        for name in ["md_sample_2", "md_sample_1", "other", "md_sample_3/nested"] {
            fs::create_dir_all(dir.path().join(name)).unwrap();
        }
        fs::write(dir.path().join("md_sample_file"), "not a folder").unwrap();

        let folders = folders_with_prefix(dir.path(), "md_sample_").unwrap();
        let names: Vec<String> = folders
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().to_string())
            .collect();
        assert_eq!(names, vec!["md_sample_1", "md_sample_2", "md_sample_3"]);
    }

    #[test]
    fn test_folders_with_prefix_missing_root() {
        let dir = tempfile::tempdir().unwrap();
        let err = folders_with_prefix(&dir.path().join("missing"), "md_").unwrap_err();
        assert!(matches!(err, AimskitError::DirectoryNotFound { .. }));
    }
}
