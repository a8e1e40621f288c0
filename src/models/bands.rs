//! # 能带数据模型
//!
//! 存储 EIGENVAL 中的本征值与 k 点，以及 OUTCAR 中提取的自旋数和费米能。
//!
//! ## 依赖关系
//! - 被 `parsers/eigenval.rs`, `parsers/outcar.rs` 构造
//! - 被 `plot/band.rs` 使用

use clap::ValueEnum;

/// OUTCAR 摘要信息
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OutcarSummary {
    /// 自旋通道数 (ISPIN, 1 或 2)
    pub nspin: usize,

    /// 费米能 (eV)
    pub efermi: f64,
}

impl Default for OutcarSummary {
    fn default() -> Self {
        OutcarSummary {
            nspin: 1,
            efermi: 0.0,
        }
    }
}

/// 高对称方向，决定横轴使用 k 点的哪个分量
#[derive(Debug, Clone, Copy, ValueEnum, PartialEq, Eq, Default)]
pub enum Direction {
    X,
    Y,
    #[default]
    Z,
}

impl Direction {
    /// k 点坐标分量序号
    pub fn index(self) -> usize {
        match self {
            Direction::X => 0,
            Direction::Y => 1,
            Direction::Z => 2,
        }
    }
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Direction::X => write!(f, "x"),
            Direction::Y => write!(f, "y"),
            Direction::Z => write!(f, "z"),
        }
    }
}

/// 本征值表，按 (band, k-point, spin) 索引
#[derive(Debug, Clone, PartialEq)]
pub struct EigenvalueTable {
    /// k 点坐标
    pub kpoints: Vec<[f64; 3]>,

    nbands: usize,
    nspin: usize,
    values: Vec<f64>,
}

impl EigenvalueTable {
    /// 创建全零表格
    pub fn zeros(nbands: usize, kpoints: Vec<[f64; 3]>, nspin: usize) -> Self {
        let len = nbands * kpoints.len() * nspin;
        EigenvalueTable {
            kpoints,
            nbands,
            nspin,
            values: vec![0.0; len],
        }
    }

    pub fn nbands(&self) -> usize {
        self.nbands
    }

    pub fn nkpts(&self) -> usize {
        self.kpoints.len()
    }

    pub fn nspin(&self) -> usize {
        self.nspin
    }

    fn offset(&self, band: usize, kpt: usize, spin: usize) -> usize {
        (band * self.nkpts() + kpt) * self.nspin + spin
    }

    pub fn get(&self, band: usize, kpt: usize, spin: usize) -> f64 {
        self.values[self.offset(band, kpt, spin)]
    }

    pub fn set(&mut self, band: usize, kpt: usize, spin: usize, value: f64) {
        let i = self.offset(band, kpt, spin);
        self.values[i] = value;
    }

    /// 所有本征值减去费米能
    pub fn shift(&mut self, efermi: f64) {
        for v in self.values.iter_mut() {
            *v -= efermi;
        }
    }

    /// 某一自旋通道下单条能带沿 k 点的能量
    pub fn band(&self, band: usize, spin: usize) -> Vec<f64> {
        (0..self.nkpts()).map(|k| self.get(band, k, spin)).collect()
    }

    /// 所选方向上的 k 点坐标分量
    pub fn kpoint_axis(&self, direction: Direction) -> Vec<f64> {
        let i = direction.index();
        self.kpoints.iter().map(|k| k[i]).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout_and_shift() {
        let kpts = vec![[0.0, 0.0, 0.0], [0.0, 0.0, 0.5]];
        let mut table = EigenvalueTable::zeros(3, kpts, 2);
        for b in 0..3 {
            for k in 0..2 {
                for s in 0..2 {
                    table.set(b, k, s, (b * 100 + k * 10 + s) as f64);
                }
            }
        }
        assert_eq!(table.get(2, 1, 1), 211.0);
        assert_eq!(table.band(1, 0), vec![100.0, 110.0]);

        table.shift(10.0);
        assert_eq!(table.get(2, 1, 1), 201.0);
        assert_eq!(table.get(0, 0, 0), -10.0);
    }

    #[test]
    fn test_kpoint_axis() {
        let kpts = vec![[0.1, 0.2, 0.3], [0.4, 0.5, 0.6]];
        let table = EigenvalueTable::zeros(1, kpts, 1);
        assert_eq!(table.kpoint_axis(Direction::X), vec![0.1, 0.4]);
        assert_eq!(table.kpoint_axis(Direction::Z), vec![0.3, 0.6]);
    }
}
