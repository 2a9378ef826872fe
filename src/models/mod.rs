//! # 数据模型模块
//!
//! 定义结构帧与 aims.out 扫描结果的数据模型。
//!
//! ## 依赖关系
//! - 被 `parsers/` 和 `commands/` 使用
//! - 子模块: structure, calculation

pub mod calculation;
pub mod structure;

pub use calculation::AimsOutput;
pub use structure::{Atom, Frame, Lattice};
