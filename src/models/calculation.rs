//! # FHI-aims 计算输出数据模型
//!
//! 存储一次扫描 aims.out 得到的原始数据，并按计算步组装为结构帧。
//!
//! ## 步与数据块的对应
//! 文件中每个几何步重复 N 个 `atom` 行与 M 个 `lattice_vector` 行，
//! 第 s 步占用原子行 `[s*N, s*N+N)` 与晶格行 `[s*M, s*M+M)`。
//! 第一步来自 aims.out 开头对 geometry.in 的原样回显。
//!
//! ## 依赖关系
//! - 被 `parsers/aims_out.rs` 填充
//! - 被 `commands/history.rs`, `commands/polarizability.rs` 使用
//! - 使用 `models/structure.rs`

use super::{Atom, Frame, Lattice};
use crate::error::{AimskitError, Result};

/// aims.out 扫描结果
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AimsOutput {
    /// 声明的原子数 (`Number of atoms`)
    pub n_atoms: Option<usize>,

    /// 声明的晶格矢量数 (`Number of lattice vectors`)，分子体系为 0
    pub n_lattice_vectors: usize,

    /// 所有 `lattice_vector` 行，按文件顺序
    pub lattice_vectors: Vec<[f64; 3]>,

    /// 所有 `atom` 行，按文件顺序
    pub atoms: Vec<Atom>,

    /// 每个 `Total atomic forces` 块 (eV/Å)
    pub forces: Vec<Vec<[f64; 3]>>,

    /// 每次 `Total energy corrected` (eV)
    pub energies: Vec<f64>,

    /// 最后一次输出的总偶极矩 (eÅ)
    pub dipole: Option<[f64; 3]>,

    /// 极化率张量 (Bohr^3)，后出现的块覆盖先出现的
    pub polarizability: Option<[[f64; 3]; 3]>,
}

impl AimsOutput {
    /// 完整几何步的数量
    pub fn geometry_count(&self) -> usize {
        match self.n_atoms {
            Some(n) if n > 0 => self.atoms.len() / n,
            _ => 0,
        }
    }

    /// 组装优化轨迹：每个受力块对应一帧
    pub fn trajectory(&self) -> Result<Vec<Frame>> {
        if self.forces.is_empty() {
            return Ok(Vec::new());
        }
        let n_atoms = self.declared_atoms()?;

        self.forces
            .iter()
            .enumerate()
            .map(|(step, forces)| {
                let mut frame = self.geometry_at(step, n_atoms)?;
                frame.forces = Some(forces.clone());
                frame.energy = self.energies.get(step).copied();
                Ok(frame)
            })
            .collect()
    }

    /// 最终结构：最后一个完整几何步，附带最后的受力与能量
    pub fn final_frame(&self) -> Result<Frame> {
        let n_atoms = self.declared_atoms()?;
        let steps = self.geometry_count();
        if steps == 0 {
            return Err(AimskitError::InconsistentData(format!(
                "expected {} atom lines, found {}",
                n_atoms,
                self.atoms.len()
            )));
        }

        let start = (steps - 1) * n_atoms;
        let mut frame = Frame::new(self.atoms[start..start + n_atoms].to_vec());

        let m = self.n_lattice_vectors;
        if m > 0 {
            let lattice_steps = self.lattice_vectors.len() / m;
            if lattice_steps == 0 {
                return Err(AimskitError::InconsistentData(format!(
                    "expected {} lattice_vector lines, found {}",
                    m,
                    self.lattice_vectors.len()
                )));
            }
            let start = (lattice_steps - 1) * m;
            frame.lattice = Some(Lattice::from_vectors(
                self.lattice_vectors[start..start + m].to_vec(),
            ));
        }

        frame.forces = self.forces.last().cloned();
        frame.energy = self.energies.last().copied();
        Ok(frame)
    }

    /// 极化率张量按行展平
    pub fn polarizability_flat(&self) -> Option<Vec<f64>> {
        self.polarizability
            .map(|t| t.iter().flat_map(|row| row.iter().copied()).collect())
    }

    fn declared_atoms(&self) -> Result<usize> {
        match self.n_atoms {
            Some(n) if n > 0 => Ok(n),
            _ => Err(AimskitError::InconsistentData(
                "'Number of atoms' was not found".to_string(),
            )),
        }
    }

    /// 第 step 个几何步的原子与晶格
    fn geometry_at(&self, step: usize, n_atoms: usize) -> Result<Frame> {
        let atoms = self
            .atoms
            .get(step * n_atoms..(step + 1) * n_atoms)
            .ok_or_else(|| {
                AimskitError::InconsistentData(format!(
                    "geometry for step {} is missing ({} atom lines for {} atoms per step)",
                    step + 1,
                    self.atoms.len(),
                    n_atoms
                ))
            })?;
        let mut frame = Frame::new(atoms.to_vec());

        let m = self.n_lattice_vectors;
        if m > 0 {
            let vectors = self
                .lattice_vectors
                .get(step * m..(step + 1) * m)
                .ok_or_else(|| {
                    AimskitError::InconsistentData(format!(
                        "lattice for step {} is missing ({} lattice_vector lines for {} per step)",
                        step + 1,
                        self.lattice_vectors.len(),
                        m
                    ))
                })?;
            frame.lattice = Some(Lattice::from_vectors(vectors.to_vec()));
        }

        Ok(frame)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn two_step_output() -> AimsOutput {
        AimsOutput {
            n_atoms: Some(2),
            n_lattice_vectors: 1,
            lattice_vectors: vec![[4.0, 0.0, 0.0], [4.1, 0.0, 0.0], [4.1, 0.0, 0.0]],
            atoms: vec![
                Atom::new("H", [0.0, 0.0, 0.0]),
                Atom::new("H", [0.74, 0.0, 0.0]),
                Atom::new("H", [0.0, 0.0, 0.0]),
                Atom::new("H", [0.72, 0.0, 0.0]),
                Atom::new("H", [0.0, 0.0, 0.0]),
                Atom::new("H", [0.71, 0.0, 0.0]),
            ],
            forces: vec![
                vec![[0.5, 0.0, 0.0], [-0.5, 0.0, 0.0]],
                vec![[0.1, 0.0, 0.0], [-0.1, 0.0, 0.0]],
            ],
            energies: vec![-31.0, -31.2],
            dipole: None,
            polarizability: None,
        }
    }

    #[test]
    fn test_trajectory_pairs_geometry_with_forces() {
        let frames = two_step_output().trajectory().unwrap();
        assert_eq!(frames.len(), 2);

        assert_eq!(frames[0].atoms[1].position, [0.74, 0.0, 0.0]);
        assert_eq!(frames[1].atoms[1].position, [0.72, 0.0, 0.0]);
        assert_eq!(frames[1].forces.as_ref().unwrap()[0], [0.1, 0.0, 0.0]);
        assert_eq!(frames[1].energy, Some(-31.2));
        assert_eq!(
            frames[1].lattice.as_ref().unwrap().vectors,
            vec![[4.1, 0.0, 0.0]]
        );
    }

    #[test]
    fn test_trajectory_missing_geometry() {
        let mut output = two_step_output();
        output.atoms.truncate(3);
        let err = output.trajectory().unwrap_err();
        assert!(err.to_string().contains("step 2"));
    }

    #[test]
    fn test_trajectory_without_forces_is_empty() {
        let mut output = two_step_output();
        output.forces.clear();
        assert!(output.trajectory().unwrap().is_empty());
    }

    #[test]
    fn test_final_frame_uses_last_geometry() {
        let frame = two_step_output().final_frame().unwrap();
        assert_eq!(frame.atoms.len(), 2);
        assert_eq!(frame.atoms[1].position, [0.71, 0.0, 0.0]);
        assert_eq!(frame.forces.as_ref().unwrap()[1], [-0.1, 0.0, 0.0]);
        assert_eq!(frame.energy, Some(-31.2));
    }

    #[test]
    fn test_final_frame_molecule_has_no_lattice() {
        let mut output = two_step_output();
        output.n_lattice_vectors = 0;
        output.lattice_vectors.clear();
        let frame = output.final_frame().unwrap();
        assert!(frame.lattice.is_none());
    }

    #[test]
    fn test_final_frame_requires_atom_count() {
        let mut output = two_step_output();
        output.n_atoms = None;
        assert!(output.final_frame().is_err());
    }

    #[test]
    fn test_polarizability_flat_is_row_major() {
        let mut output = two_step_output();
        output.polarizability = Some([[1.0, 2.0, 3.0], [4.0, 5.0, 6.0], [7.0, 8.0, 9.0]]);
        assert_eq!(
            output.polarizability_flat().unwrap(),
            vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0]
        );
    }
}
