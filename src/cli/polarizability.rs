//! # polarizability 子命令 CLI 定义
//!
//! 读取样本目录中 aims.out 的结构与极化率，生成训练集 train.xyz
//!
//! ## 依赖关系
//! - 被 `cli/mod.rs` 使用
//! - 参数传递给 `commands/polarizability.rs`

use clap::Args;
use std::path::PathBuf;

/// polarizability 子命令参数
#[derive(Args, Debug)]
pub struct PolarizabilityArgs {
    /// Name of the FHI-aims output file inside each sample folder
    #[arg(short, long, default_value = "aims.out")]
    pub inputfile: PathBuf,

    /// Output training file (extxyz); frames are appended
    #[arg(short, long, default_value = "train.xyz")]
    pub outputfile: PathBuf,

    /// Prefix of the sample folders
    #[arg(short, long, default_value = "md_sample_")]
    pub prefix: String,

    /// Directory searched for prefixed sample folders
    #[arg(long, default_value = ".")]
    pub root: PathBuf,

    /// Total number of geometries to sample (0 = all)
    #[arg(short = 'n', long, default_value_t = 0)]
    pub samples: usize,

    /// Seed for reproducible sampling
    #[arg(long)]
    pub seed: Option<u64>,

    /// Do not write the placeholder REF_dipole when no dipole was computed.
    /// Keep the placeholder and set dipole_weight to 0 when training MACE.
    #[arg(short = 'k', long, default_value_t = false)]
    pub no_fake_dipole: bool,

    /// File with a list of aims.out paths to read (overrides --prefix)
    #[arg(short, long)]
    pub list: Option<PathBuf>,

    /// Number of parallel jobs (0 = auto)
    #[arg(short, long, default_value_t = 0)]
    pub jobs: usize,

    /// Truncate the output file instead of appending to it
    #[arg(long, default_value_t = false)]
    pub overwrite: bool,
}
