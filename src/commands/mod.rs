//! # 命令执行模块
//!
//! 实现各子命令的业务逻辑。
//!
//! ## 依赖关系
//! - 被 `main.rs` 调用
//! - 使用 `cli/`, `parsers/`, `models/`, `batch/`, `utils/`
//! - 子模块: history, polarizability

pub mod history;
pub mod polarizability;

use crate::cli::Commands;
use crate::error::Result;

/// 执行命令
pub fn run(cmd: Commands) -> Result<()> {
    match cmd {
        Commands::History(args) => history::execute(args),
        Commands::Polarizability(args) => polarizability::execute(args),
    }
}
