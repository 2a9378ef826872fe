//! # 批量执行器
//!
//! 并行处理样本目录。
//!
//! ## 功能
//! - 基于 rayon 的并行迭代，结果保持输入顺序
//! - 进度条显示，逐项的跳过/失败消息在进度条挂起时打印
//! - 成功/跳过/失败统计
//!
//! ## 依赖关系
//! - 被 `commands/polarizability.rs` 调用
//! - 使用 `utils/progress.rs` 创建进度条
//! - 使用 `rayon` 进行并行计算

use crate::error::{AimskitError, Result};
use crate::utils::{output, progress};

use rayon::prelude::*;
use std::path::{Path, PathBuf};

/// 单个目录处理结果
#[derive(Debug, Clone)]
pub enum ProcessResult<T> {
    /// 处理成功
    Success(T),
    /// 跳过（如文件不存在）
    Skipped(String),
    /// 处理失败
    Failed(String, String), // (文件路径, 错误信息)
}

/// 批量处理结果统计
#[derive(Debug, Default)]
pub struct BatchResult {
    /// 成功数量
    pub success: usize,
    /// 跳过原因
    pub skipped: Vec<String>,
    /// 失败详情
    pub failures: Vec<(String, String)>,
}

impl BatchResult {
    /// 合并处理结果，成功时返回其数据
    pub fn merge<T>(&mut self, result: ProcessResult<T>) -> Option<T> {
        match result {
            ProcessResult::Success(value) => {
                self.success += 1;
                Some(value)
            }
            ProcessResult::Skipped(reason) => {
                self.skipped.push(reason);
                None
            }
            ProcessResult::Failed(path, err) => {
                self.failures.push((path, err));
                None
            }
        }
    }

    /// 总处理数量
    pub fn total(&self) -> usize {
        self.success + self.skipped.len() + self.failures.len()
    }
}

/// 批量执行器
pub struct BatchRunner {
    /// 并行作业数
    jobs: usize,
}

impl BatchRunner {
    /// 创建新的批量执行器，jobs 为 0 时使用全部 CPU
    pub fn new(jobs: usize) -> Self {
        let jobs = if jobs == 0 { num_cpus::get() } else { jobs };
        Self { jobs }
    }

    /// 并行处理目录列表，结果与输入一一对应
    pub fn run<T, F>(&self, folders: &[PathBuf], processor: F) -> Result<Vec<ProcessResult<T>>>
    where
        T: Send,
        F: Fn(&Path) -> ProcessResult<T> + Sync + Send,
    {
        let pb = progress::create_progress_bar(folders.len() as u64, "Parsing");

        // 配置 rayon 线程池
        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(self.jobs)
            .build()
            .map_err(|e| AimskitError::Other(format!("Failed to build thread pool: {}", e)))?;

        let results: Vec<ProcessResult<T>> = pool.install(|| {
            folders
                .par_iter()
                .map(|folder| {
                    let result = processor(folder.as_path());
                    match &result {
                        ProcessResult::Skipped(reason) => pb.suspend(|| output::print_skip(reason)),
                        ProcessResult::Failed(path, err) => {
                            pb.suspend(|| output::print_error(&format!("{}: {}", path, err)))
                        }
                        ProcessResult::Success(_) => {}
                    }
                    pb.inc(1);
                    result
                })
                .collect()
        });

        pb.finish_and_clear();
        Ok(results)
    }
}
