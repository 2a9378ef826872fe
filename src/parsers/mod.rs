//! # 解析器模块
//!
//! 提供 FHI-aims 输出解析器与 extxyz 写出器。
//!
//! ## 依赖关系
//! - 被 `commands/` 模块使用
//! - 使用 `models/` 数据模型
//! - 子模块: aims_out, extxyz

pub mod aims_out;
pub mod extxyz;

#[cfg(test)]
pub(crate) mod testdata;
