//! # 统一错误处理模块
//!
//! 定义 aimskit 的所有错误类型，使用 `thiserror` 派生。
//!
//! ## 依赖关系
//! - 被所有其他模块使用
//! - 无外部模块依赖

use thiserror::Error;

/// aimskit 统一错误类型
#[derive(Error, Debug)]
pub enum AimskitError {
    // ─────────────────────────────────────────────────────────────
    // I/O 错误
    // ─────────────────────────────────────────────────────────────
    #[error("Failed to read file: {path}")]
    FileReadError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write file: {path}")]
    FileWriteError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Directory not found: {path}")]
    DirectoryNotFound { path: String },

    #[error("File not found: {path}")]
    FileNotFound { path: String },

    // ─────────────────────────────────────────────────────────────
    // 解析错误
    // ─────────────────────────────────────────────────────────────
    #[error("Failed to parse {format} file: {path}\nReason: {reason}")]
    ParseError {
        format: String,
        path: String,
        reason: String,
    },

    /// 原子数 / 晶格矢量数与逐步重复的数据块不一致
    #[error("Inconsistent data: {0}")]
    InconsistentData(String),

    // ─────────────────────────────────────────────────────────────
    // 参数错误
    // ─────────────────────────────────────────────────────────────
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    // ─────────────────────────────────────────────────────────────
    // 其他
    // ─────────────────────────────────────────────────────────────
    #[error("{0}")]
    Other(String),
}

impl AimskitError {
    /// 为 aims.out 解析构造错误
    pub fn aims_parse(path: &str, reason: impl Into<String>) -> Self {
        AimskitError::ParseError {
            format: "aims.out".to_string(),
            path: path.to_string(),
            reason: reason.into(),
        }
    }
}

/// Result 类型别名
pub type Result<T> = std::result::Result<T, AimskitError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_error_message() {
        let err = AimskitError::aims_parse("run/aims.out", "line 12: bad float");
        let msg = err.to_string();
        assert!(msg.contains("aims.out file: run/aims.out"));
        assert!(msg.contains("line 12: bad float"));
    }
}
