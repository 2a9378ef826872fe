//! # history 命令实现
//!
//! 从结构优化的 aims.out 中提取每一步的结构与受力，写为 extxyz 轨迹。
//!
//! ## 功能
//! - 扫描 aims.out 中的晶格矢量、原子与受力块
//! - 每个受力块对应一帧
//! - 可选打印每步能量与最大受力表格
//!
//! ## 依赖关系
//! - 使用 `cli/history.rs` 定义的参数
//! - 使用 `parsers/aims_out.rs`, `parsers/extxyz.rs`
//! - 使用 `utils/output.rs`

use crate::cli::history::HistoryArgs;
use crate::error::{AimskitError, Result};
use crate::models::Frame;
use crate::parsers::{aims_out, extxyz};
use crate::utils::output;

use tabled::{Table, Tabled};

/// 优化历史表格行
#[derive(Debug, Clone, Tabled)]
struct StepRow {
    #[tabled(rename = "Step")]
    step: usize,
    #[tabled(rename = "Energy (eV)")]
    energy: String,
    #[tabled(rename = "ΔE (eV)")]
    delta_e: String,
    #[tabled(rename = "Max |F| (eV/Å)")]
    max_force: String,
}

/// 执行 history 命令
pub fn execute(args: HistoryArgs) -> Result<()> {
    output::print_header("Extracting Geometry Optimization History");

    if !args.input.exists() {
        return Err(AimskitError::FileNotFound {
            path: args.input.display().to_string(),
        });
    }

    output::print_info(&format!("Reading '{}'", args.input.display()));
    let aims = aims_out::parse_aims_output(&args.input)?;
    output::print_field("Atoms", aims.n_atoms.unwrap_or(0));
    output::print_field("Lattice vectors", aims.n_lattice_vectors);
    output::print_field("Geometries", aims.geometry_count());
    output::print_field("Force blocks", aims.forces.len());

    let frames = aims.trajectory()?;

    if frames.is_empty() {
        output::print_warning("No 'Total atomic forces' blocks found; the output will be empty.");
    }

    extxyz::write_extxyz(&args.output, &frames, false)?;
    output::print_success(&format!("Trajectory saved to '{}'", args.output.display()));

    if args.summary && !frames.is_empty() {
        println!("{}", Table::new(step_rows(&frames)));
    }

    output::print_info(&format!("Geometry optimization steps: {}", frames.len()));
    output::print_done(&format!(
        "Wrote {} frame(s) to '{}'",
        frames.len(),
        args.output.display()
    ));

    Ok(())
}

/// 生成表格数据，ΔE 相对第一步
fn step_rows(frames: &[Frame]) -> Vec<StepRow> {
    let reference = frames.first().and_then(|f| f.energy);

    frames
        .iter()
        .enumerate()
        .map(|(i, frame)| StepRow {
            step: i + 1,
            energy: fmt_optional(frame.energy, 6),
            delta_e: match (frame.energy, reference) {
                (Some(e), Some(e0)) => format!("{:.6}", e - e0),
                _ => "-".to_string(),
            },
            max_force: fmt_optional(frame.max_force(), 4),
        })
        .collect()
}

fn fmt_optional(value: Option<f64>, precision: usize) -> String {
    value
        .map(|v| format!("{:.*}", precision, v))
        .unwrap_or_else(|| "-".to_string())
}
