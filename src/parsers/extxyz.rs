//! # extxyz 格式写出器
//!
//! 将结构帧写为扩展 XYZ 格式。
//!
//! ## extxyz 格式说明
//! ```text
//! 2
//! Lattice="0.0 2.715 2.715 2.715 0.0 2.715 2.715 2.715 0.0" Properties=species:S:1:pos:R:3:forces:R:3 energy=-15783.4 pbc="T T T"
//! Si  0.0  0.0  0.0  -0.1  0.0  0.0
//! Si  1.3575  1.3575  1.3575  0.1  0.0  0.0
//! ```
//!
//! ## 依赖关系
//! - 被 `commands/` 模块使用
//! - 使用 `models/structure.rs`

use crate::error::{AimskitError, Result};
use crate::models::Frame;
use std::fs::OpenOptions;
use std::io::{BufWriter, Write};
use std::path::Path;

/// 转换为 extxyz 格式的一条记录
pub fn to_extxyz_string(frame: &Frame) -> String {
    let mut result = String::new();
    result.push_str(&format!("{}\n", frame.atoms.len()));
    result.push_str(&comment_line(frame));
    result.push('\n');

    let forces = frame.forces.as_ref().filter(|_| has_complete_forces(frame));
    for (i, atom) in frame.atoms.iter().enumerate() {
        result.push_str(&format!(
            "{}\t{:.8}\t{:.8}\t{:.8}",
            atom.species, atom.position[0], atom.position[1], atom.position[2]
        ));
        if let Some(f) = forces.and_then(|forces| forces.get(i)) {
            result.push_str(&format!("\t{:.8}\t{:.8}\t{:.8}", f[0], f[1], f[2]));
        }
        result.push('\n');
    }

    result
}

/// 注释行：晶格、属性列、能量、附加信息与周期性
fn comment_line(frame: &Frame) -> String {
    let mut fields = Vec::new();

    if let Some(lattice) = &frame.lattice {
        // extxyz 的 Lattice 固定 9 个数，非周期方向由 pbc 标记
        let values: Vec<f64> = lattice.cell().iter().flatten().copied().collect();
        fields.push(format!("Lattice=\"{}\"", join_values(&values)));
    }

    let mut properties = String::from("Properties=species:S:1:pos:R:3");
    if has_complete_forces(frame) {
        properties.push_str(":forces:R:3");
    }
    fields.push(properties);

    if let Some(energy) = frame.energy {
        fields.push(format!("energy={:.8}", energy));
    }

    for (key, values) in &frame.info {
        fields.push(format!("{}=\"{}\"", key, join_values(values)));
    }

    let pbc: Vec<&str> = frame
        .pbc()
        .iter()
        .map(|&p| if p { "T" } else { "F" })
        .collect();
    fields.push(format!("pbc=\"{}\"", pbc.join(" ")));

    fields.join(" ")
}

/// 只有每个原子都有受力时才写出 forces 列
fn has_complete_forces(frame: &Frame) -> bool {
    frame
        .forces
        .as_ref()
        .map_or(false, |forces| forces.len() == frame.atoms.len())
}

fn join_values(values: &[f64]) -> String {
    values
        .iter()
        .map(|v| format!("{:.8}", v))
        .collect::<Vec<_>>()
        .join(" ")
}

/// 写出多帧到文件
///
/// `append` 为 true 时追加到已有文件末尾，否则覆盖。
pub fn write_extxyz(path: &Path, frames: &[Frame], append: bool) -> Result<()> {
    let write_err = |e| AimskitError::FileWriteError {
        path: path.display().to_string(),
        source: e,
    };

    let mut options = OpenOptions::new();
    options.create(true);
    if append {
        options.append(true);
    } else {
        options.write(true).truncate(true);
    }

    let file = options.open(path).map_err(write_err)?;
    let mut writer = BufWriter::new(file);
    for frame in frames {
        writer
            .write_all(to_extxyz_string(frame).as_bytes())
            .map_err(write_err)?;
    }
    writer.flush().map_err(write_err)?;

    Ok(())
}
