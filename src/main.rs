//! # aimskit - FHI-aims 输出转换工具
//!
//! 将 FHI-aims 的 aims.out 中的结构、受力与极化率整理为
//! 机器学习势训练所用的 extxyz 文件。
//!
//! ## 子命令
//! - `history` - 结构优化历史 (结构 + 受力) -> extxyz 轨迹
//! - `polarizability` - 样本目录中的极化率 -> train.xyz
//!
//! ## 依赖关系
//! ```text
//! main.rs
//!   ├── cli/        (命令行参数定义)
//!   ├── commands/   (命令执行逻辑)
//!   │     ├── parsers/   (aims.out 解析 / extxyz 写出)
//!   │     ├── batch/     (样本收集、抽样与并行处理)
//!   │     └── models/    (数据模型)
//!   ├── utils/      (工具函数)
//!   └── error.rs    (错误处理)
//! ```

mod batch;
mod cli;
mod commands;
mod error;
mod models;
mod parsers;
mod utils;

use clap::Parser;
use cli::Cli;

fn main() {
    // Initialize colored output for Windows compatibility
    #[cfg(windows)]
    colored::control::set_virtual_terminal(true).ok();

    let cli = Cli::parse();

    if let Err(e) = commands::run(cli.command) {
        utils::output::print_error(&format!("{}", e));
        std::process::exit(1);
    }
}
