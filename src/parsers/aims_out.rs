//! # FHI-aims aims.out 输出解析器
//!
//! 单遍扫描 aims.out，定位标记行并提取相邻的数值字段。
//!
//! ## 识别的标记
//! ```text
//!   | Number of atoms                   :        2
//!   | Number of lattice vectors         :        3
//!   lattice_vector         0.00000000        2.71500000        2.71500000
//!             atom         0.00000000        0.00000000        0.00000000  Si
//!   | Total energy corrected        :         -15783.401 eV
//!   | Total dipole moment [eAng]          :    0.1    0.2    0.3
//!   Total atomic forces (unitary forces cleaned) [eV/Ang]:
//!   |    1         -0.1E+00          0.0E+00          0.0E+00
//!   Polarizability (Bohr^3) :
//!   DFPT for dielectric_constant:
//! ```
//! 受力块为标记后的 N 行（取第 2~4 列），极化率块为标记后的 3 行（取第 0~2 列）。
//!
//! ## 依赖关系
//! - 被 `commands/history.rs`, `commands/polarizability.rs` 使用
//! - 使用 `models/calculation.rs`

use crate::error::{AimskitError, Result};
use crate::models::{AimsOutput, Atom};
use regex::Regex;
use std::fs;
use std::path::Path;

const FORCES_MARKER: &str = "Total atomic forces";
const POLARIZABILITY_MARKERS: [&str; 2] =
    ["Polarizability (Bohr^3) :", "DFPT for dielectric_constant:"];

/// 需要正则提取数值的标记行
struct Markers {
    n_atoms: Regex,
    n_lattice_vectors: Regex,
    energy: Regex,
    dipole: Regex,
}

impl Markers {
    fn new() -> Result<Self> {
        Ok(Markers {
            n_atoms: compile(r"Number of atoms\s*:\s*(\d+)")?,
            n_lattice_vectors: compile(r"Number of lattice vectors\s*:\s*(\d+)")?,
            energy: compile(r"Total energy corrected\s*:\s*(\S+)\s+eV")?,
            dipole: compile(r"Total dipole moment \[eAng\]\s*:\s*(\S+)\s+(\S+)\s+(\S+)")?,
        })
    }
}

fn compile(pattern: &str) -> Result<Regex> {
    Regex::new(pattern).map_err(|e| AimskitError::Other(format!("Invalid marker pattern: {}", e)))
}

/// 解析 aims.out 文件
pub fn parse_aims_output(path: &Path) -> Result<AimsOutput> {
    let content = fs::read_to_string(path).map_err(|e| AimskitError::FileReadError {
        path: path.display().to_string(),
        source: e,
    })?;

    scan_aims_output(&content, &path.display().to_string())
}

/// 从字符串内容扫描 aims.out
///
/// `source` 仅用于错误信息。
pub fn scan_aims_output(content: &str, source: &str) -> Result<AimsOutput> {
    let markers = Markers::new()?;
    let lines: Vec<&str> = content.lines().collect();
    let mut output = AimsOutput::default();

    for (i, line) in lines.iter().enumerate() {
        if let Some(caps) = markers.n_atoms.captures(line) {
            output.n_atoms = Some(parse_number(&caps[1], i, source)?);
        }

        if let Some(caps) = markers.n_lattice_vectors.captures(line) {
            output.n_lattice_vectors = parse_number(&caps[1], i, source)?;
        }

        if let Some(caps) = markers.energy.captures(line) {
            output.energies.push(parse_number(&caps[1], i, source)?);
        }

        if let Some(caps) = markers.dipole.captures(line) {
            output.dipole = Some([
                parse_number(&caps[1], i, source)?,
                parse_number(&caps[2], i, source)?,
                parse_number(&caps[3], i, source)?,
            ]);
        }

        let fields: Vec<&str> = line.split_whitespace().collect();
        match fields.first() {
            Some(&"lattice_vector") => {
                output
                    .lattice_vectors
                    .push(parse_vec3(&fields, 1, i, source)?);
            }
            Some(&"atom") => {
                let position = parse_vec3(&fields, 1, i, source)?;
                let species = fields.get(4).ok_or_else(|| {
                    AimskitError::aims_parse(
                        source,
                        format!("line {}: atom line has no species", i + 1),
                    )
                })?;
                output.atoms.push(Atom::new(*species, position));
            }
            _ => {}
        }

        if line.contains(FORCES_MARKER) {
            let n_atoms = output.n_atoms.ok_or_else(|| {
                AimskitError::aims_parse(
                    source,
                    format!(
                        "line {}: forces found before 'Number of atoms'",
                        i + 1
                    ),
                )
            })?;
            let block = read_block(&lines, i, n_atoms, 2, source)?;
            output.forces.push(block);
        }

        if POLARIZABILITY_MARKERS.iter().any(|m| line.contains(m)) {
            let block = read_block(&lines, i, 3, 0, source)?;
            output.polarizability = Some([block[0], block[1], block[2]]);
        }
    }

    Ok(output)
}

/// 读取标记行之后的 count 行，每行从 column 列开始取 3 个数
fn read_block(
    lines: &[&str],
    marker: usize,
    count: usize,
    column: usize,
    source: &str,
) -> Result<Vec<[f64; 3]>> {
    let block = lines.get(marker + 1..marker + 1 + count).ok_or_else(|| {
        AimskitError::aims_parse(
            source,
            format!(
                "line {}: expected {} lines after '{}', file ends early",
                marker + 1,
                count,
                lines[marker].trim()
            ),
        )
    })?;

    block
        .iter()
        .enumerate()
        .map(|(k, line)| {
            let fields: Vec<&str> = line.split_whitespace().collect();
            parse_vec3(&fields, column, marker + 1 + k, source)
        })
        .collect()
}

/// 从字段 start 开始解析三个浮点数
fn parse_vec3(fields: &[&str], start: usize, line_idx: usize, source: &str) -> Result<[f64; 3]> {
    let values = fields.get(start..start + 3).ok_or_else(|| {
        AimskitError::aims_parse(
            source,
            format!(
                "line {}: expected 3 numbers at column {}, got '{}'",
                line_idx + 1,
                start,
                fields.join(" ")
            ),
        )
    })?;

    Ok([
        parse_number(values[0], line_idx, source)?,
        parse_number(values[1], line_idx, source)?,
        parse_number(values[2], line_idx, source)?,
    ])
}

fn parse_number<T: std::str::FromStr>(token: &str, line_idx: usize, source: &str) -> Result<T> {
    token.parse().map_err(|_| {
        AimskitError::aims_parse(
            source,
            format!("line {}: invalid number '{}'", line_idx + 1, token),
        )
    })
}
