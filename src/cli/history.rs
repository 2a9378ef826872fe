//! # history 子命令 CLI 定义
//!
//! 从 aims.out 提取结构优化历史（结构 + 受力）并写为 extxyz
//!
//! ## 依赖关系
//! - 被 `cli/mod.rs` 使用
//! - 参数传递给 `commands/history.rs`

use clap::Args;
use std::path::PathBuf;

/// history 子命令参数
#[derive(Args, Debug)]
pub struct HistoryArgs {
    /// FHI-aims output file of the geometry optimization
    #[arg(short, long, default_value = "aims.out", env = "AIMSKIT_INPUT")]
    pub input: PathBuf,

    /// Output extxyz trajectory
    #[arg(short, long, default_value = "geom_optim_history.extxyz")]
    pub output: PathBuf,

    /// Print a table of energy and maximum force per step
    #[arg(short, long, default_value_t = false)]
    pub summary: bool,
}
