//! # polarizability 命令实现
//!
//! 读取样本目录中 aims.out 的最终结构与极化率张量，追加写入训练集。
//!
//! ## 功能
//! - 按前缀或列表文件收集样本目录
//! - 可选无放回随机抽样
//! - 并行解析 aims.out
//! - 写出 REF_polarizability 与 REF_dipole（可选占位偶极）
//!
//! ## 依赖关系
//! - 使用 `cli/polarizability.rs` 定义的参数
//! - 使用 `batch/`, `parsers/aims_out.rs`, `parsers/extxyz.rs`
//! - 使用 `utils/output.rs`

use crate::batch::{collector, sampler, BatchResult, BatchRunner, ProcessResult};
use crate::cli::polarizability::PolarizabilityArgs;
use crate::error::Result;
use crate::models::{AimsOutput, Frame};
use crate::parsers::{aims_out, extxyz};
use crate::utils::output;

use std::path::Path;

/// 训练集中的极化率键
pub const POLARIZABILITY_KEY: &str = "REF_polarizability";
/// 训练集中的偶极键
pub const DIPOLE_KEY: &str = "REF_dipole";
/// 未计算偶极时写出的占位值
pub const FAKE_DIPOLE: [f64; 3] = [1.0, 2.0, 3.0];

/// 执行 polarizability 命令
pub fn execute(args: PolarizabilityArgs) -> Result<()> {
    output::print_header("Building Polarizability Training Set");

    let folders = match &args.list {
        Some(list) => {
            output::print_info(&format!(
                "Reading {} files in paths given in '{}'",
                args.inputfile.display(),
                list.display()
            ));
            collector::folders_from_list(list)?
        }
        None => {
            output::print_info(&format!(
                "Reading {} files in folders with prefix '{}' under '{}'",
                args.inputfile.display(),
                args.prefix,
                args.root.display()
            ));
            collector::folders_with_prefix(&args.root, &args.prefix)?
        }
    };

    let found = folders.len();
    let chosen = sampler::choose(folders, args.samples, args.seed)?;
    if chosen.is_empty() {
        output::print_warning("No sample folders found.");
        return Ok(());
    }

    output::print_field("Sample folders", found);
    output::print_field("Selected", chosen.len());
    if let Some(seed) = args.seed {
        output::print_field("Seed", seed);
    }
    output::print_info(&format!(
        "Writing '{}' with a total of {} samples",
        args.outputfile.display(),
        chosen.len()
    ));

    let fake_dipole = !args.no_fake_dipole;
    let inputfile = args.inputfile.as_path();
    let runner = BatchRunner::new(args.jobs);
    let results = runner.run(&chosen, |folder| {
        load_sample(&folder.join(inputfile), fake_dipole)
    })?;

    let mut summary = BatchResult::default();
    let frames: Vec<Frame> = results
        .into_iter()
        .filter_map(|result| summary.merge(result))
        .collect();

    extxyz::write_extxyz(&args.outputfile, &frames, !args.overwrite)?;

    output::print_done(&format!(
        "Wrote {} of {} sample(s) to '{}' ({} skipped, {} failed)",
        summary.success,
        summary.total(),
        args.outputfile.display(),
        summary.skipped.len(),
        summary.failures.len()
    ));

    Ok(())
}

/// 处理单个样本的 aims.out
fn load_sample(path: &Path, fake_dipole: bool) -> ProcessResult<Frame> {
    if !path.exists() {
        return ProcessResult::Skipped(format!("{} not found", path.display()));
    }

    let result = aims_out::parse_aims_output(path)
        .and_then(|aims| training_frame(&aims, fake_dipole));

    match result {
        Ok(Some(frame)) => ProcessResult::Success(frame),
        Ok(None) => ProcessResult::Skipped(format!(
            "File {} contains no polarizability",
            path.display()
        )),
        Err(e) => ProcessResult::Failed(path.display().to_string(), e.to_string()),
    }
}

/// 由扫描结果构造训练帧；无极化率时返回 None
///
/// 文件中有偶极时写出真实偶极，否则按 `fake_dipole` 写出占位值。
pub fn training_frame(aims: &AimsOutput, fake_dipole: bool) -> Result<Option<Frame>> {
    let polarizability = match aims.polarizability_flat() {
        Some(p) => p,
        None => return Ok(None),
    };

    let mut frame = aims.final_frame()?;
    frame.set_info(POLARIZABILITY_KEY, polarizability);

    match aims.dipole {
        Some(dipole) => frame.set_info(DIPOLE_KEY, dipole.to_vec()),
        None if fake_dipole => frame.set_info(DIPOLE_KEY, FAKE_DIPOLE.to_vec()),
        None => {}
    }

    Ok(Some(frame))
}
