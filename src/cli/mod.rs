//! # CLI 模块
//!
//! 使用 `clap` 定义命令行参数和子命令。
//!
//! ## 命令结构
//! - `history`: 结构优化历史 -> extxyz
//! - `polarizability`: 极化率样本 -> 训练集
//!
//! ## 依赖关系
//! - 被 `main.rs` 使用
//! - 子模块: history, polarizability

pub mod history;
pub mod polarizability;

use clap::{Parser, Subcommand};

/// aimskit - FHI-aims 输出到机器学习训练数据的转换工具
#[derive(Parser)]
#[command(name = "aimskit")]
#[command(version)]
#[command(about = "Convert FHI-aims output into extxyz training data", long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

/// 可用的子命令
#[derive(Subcommand)]
pub enum Commands {
    /// Extract geometries and forces of a geometry optimization into an extxyz trajectory
    #[command(visible_alias = "geom-history")]
    History(history::HistoryArgs),

    /// Collect geometries and polarizabilities from sample folders into a training file
    #[command(visible_alias = "aims2train")]
    Polarizability(polarizability::PolarizabilityArgs),
}
