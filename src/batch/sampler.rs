//! # 随机抽样
//!
//! 从样本目录中无放回地均匀抽取指定数量。
//!
//! ## 依赖关系
//! - 被 `commands/polarizability.rs` 调用
//! - 使用 `rand`

use crate::error::{AimskitError, Result};

use rand::rngs::StdRng;
use rand::SeedableRng;

/// 无放回抽取 count 个元素，count 为 0 时返回全部（保持原顺序）
///
/// 抽样结果按抽中的先后排列；给定 seed 时结果可复现。
pub fn choose<T>(items: Vec<T>, count: usize, seed: Option<u64>) -> Result<Vec<T>> {
    if count == 0 {
        return Ok(items);
    }
    if count > items.len() {
        return Err(AimskitError::InvalidArgument(format!(
            "Cannot sample {} of {} available folders without replacement",
            count,
            items.len()
        )));
    }

    let mut rng = match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let indices = rand::seq::index::sample(&mut rng, items.len(), count).into_vec();
    let mut slots: Vec<Option<T>> = items.into_iter().map(Some).collect();
    Ok(indices
        .into_iter()
        .filter_map(|i| slots[i].take())
        .collect())
}
