//! # 结构帧数据模型
//!
//! 定义 extxyz 输出的一帧：原子、可选晶格、可选受力与附加信息。
//!
//! ## 依赖关系
//! - 被 `parsers/` 和 `commands/` 使用
//! - 无外部模块依赖

/// 晶格（0~3 个晶格矢量）
///
/// 分子体系没有晶格矢量；表面模型等可能只有部分方向周期性。
#[derive(Debug, Clone, PartialEq)]
pub struct Lattice {
    /// 晶格矢量，行向量表示 a, b, c（单位 Å）
    pub vectors: Vec<[f64; 3]>,
}

impl Lattice {
    /// 从晶格矢量创建
    pub fn from_vectors(vectors: Vec<[f64; 3]>) -> Self {
        Lattice { vectors }
    }

    /// 3x3 晶胞矩阵，缺失的晶格矢量以零行补齐
    pub fn cell(&self) -> [[f64; 3]; 3] {
        let mut cell = [[0.0; 3]; 3];
        for (row, vector) in cell.iter_mut().zip(&self.vectors) {
            *row = *vector;
        }
        cell
    }

    /// 各方向的周期性：第 i 个矢量存在即视为第 i 方向周期
    pub fn pbc(&self) -> [bool; 3] {
        let mut flags = [false; 3];
        for flag in flags.iter_mut().take(self.vectors.len()) {
            *flag = true;
        }
        flags
    }
}

/// 原子信息
#[derive(Debug, Clone, PartialEq)]
pub struct Atom {
    /// 元素符号
    pub species: String,

    /// 笛卡尔坐标 [x, y, z] (Å)
    pub position: [f64; 3],
}

impl Atom {
    pub fn new(species: impl Into<String>, position: [f64; 3]) -> Self {
        Atom {
            species: species.into(),
            position,
        }
    }
}

/// extxyz 中的一帧
#[derive(Debug, Clone, PartialEq)]
pub struct Frame {
    /// 原子列表
    pub atoms: Vec<Atom>,

    /// 晶格，分子体系为 None
    pub lattice: Option<Lattice>,

    /// 每原子受力 (eV/Å)
    pub forces: Option<Vec<[f64; 3]>>,

    /// 总能量 (eV)
    pub energy: Option<f64>,

    /// 附加的每帧信息，按插入顺序输出（如 REF_polarizability）
    pub info: Vec<(String, Vec<f64>)>,
}

impl Frame {
    pub fn new(atoms: Vec<Atom>) -> Self {
        Frame {
            atoms,
            lattice: None,
            forces: None,
            energy: None,
            info: Vec::new(),
        }
    }

    /// 设置附加信息，同名键会被替换
    pub fn set_info(&mut self, key: impl Into<String>, values: Vec<f64>) {
        let key = key.into();
        match self.info.iter_mut().find(|(k, _)| *k == key) {
            Some(entry) => entry.1 = values,
            None => self.info.push((key, values)),
        }
    }

    /// 获取附加信息
    #[cfg(test)]
    pub fn info(&self, key: &str) -> Option<&[f64]> {
        self.info
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_slice())
    }

    /// 周期性标记，无晶格时全部为 false
    pub fn pbc(&self) -> [bool; 3] {
        self.lattice
            .as_ref()
            .map(|l| l.pbc())
            .unwrap_or([false; 3])
    }

    /// 最大原子受力模长
    pub fn max_force(&self) -> Option<f64> {
        self.forces.as_ref().and_then(|forces| {
            forces
                .iter()
                .map(|f| (f[0] * f[0] + f[1] * f[1] + f[2] * f[2]).sqrt())
                .fold(None, |acc: Option<f64>, norm| {
                    Some(acc.map_or(norm, |m| m.max(norm)))
                })
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lattice_pbc_full_and_partial() {
        let bulk = Lattice::from_vectors(vec![[5.0, 0.0, 0.0], [0.0, 5.0, 0.0], [0.0, 0.0, 5.0]]);
        assert_eq!(bulk.pbc(), [true, true, true]);

        let slab = Lattice::from_vectors(vec![[5.0, 0.0, 0.0], [0.0, 5.0, 0.0]]);
        assert_eq!(slab.pbc(), [true, true, false]);
    }

    #[test]
    fn test_cell_pads_missing_vectors() {
        let slab = Lattice::from_vectors(vec![[5.0, 0.0, 0.0], [0.0, 5.0, 0.0]]);
        assert_eq!(
            slab.cell(),
            [[5.0, 0.0, 0.0], [0.0, 5.0, 0.0], [0.0, 0.0, 0.0]]
        );
    }

    #[test]
    fn test_frame_without_lattice_is_not_periodic() {
        let frame = Frame::new(vec![Atom::new("H", [0.0, 0.0, 0.0])]);
        assert_eq!(frame.pbc(), [false, false, false]);
    }

    #[test]
    fn test_set_info_replaces_existing_key() {
        let mut frame = Frame::new(vec![]);
        frame.set_info("REF_dipole", vec![1.0, 2.0, 3.0]);
        frame.set_info("REF_polarizability", vec![0.0; 9]);
        frame.set_info("REF_dipole", vec![0.1, 0.2, 0.3]);

        assert_eq!(frame.info.len(), 2);
        assert_eq!(frame.info[0].0, "REF_dipole");
        assert_eq!(frame.info("REF_dipole"), Some(&[0.1, 0.2, 0.3][..]));
    }

    #[test]
    fn test_max_force() {
        let mut frame = Frame::new(vec![
            Atom::new("O", [0.0, 0.0, 0.0]),
            Atom::new("H", [0.96, 0.0, 0.0]),
        ]);
        assert_eq!(frame.max_force(), None);

        frame.forces = Some(vec![[3.0, 4.0, 0.0], [0.0, 0.0, -1.0]]);
        let max = frame.max_force().unwrap();
        assert!((max - 5.0).abs() < 1e-12);
    }
}
