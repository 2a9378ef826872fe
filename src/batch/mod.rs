//! # 批量处理模块
//!
//! 提供样本目录的收集、抽样与并行处理能力。
//!
//! ## 功能
//! - 按前缀或列表文件收集样本目录
//! - 无放回随机抽样
//! - 并行处理
//! - 进度反馈与统计
//!
//! ## 依赖关系
//! - 被 `commands/polarizability.rs` 使用
//! - 使用 `rayon` 进行并行处理
//! - 使用 `indicatif` 显示进度

pub mod collector;
pub mod runner;
pub mod sampler;

pub use runner::{BatchResult, BatchRunner, ProcessResult};
