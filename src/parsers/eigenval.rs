//! # VASP EIGENVAL 解析器
//!
//! 解析 VASP 本征值输出文件 EIGENVAL。
//!
//! ## EIGENVAL 格式说明
//! ```text
//!     2    2    1    1          # 前 5 行为固定头部，跳过
//!   0.1e+02 ...
//!   ...
//!   CAR
//!  unknown system
//!    16    40    24             # NELECT, NKPTS, NBANDS
//!                               # 空行
//!   0.0 0.0 0.0 0.025           # k 点坐标 + 权重
//!     1   -5.1234   -5.1200     # 能带序号 + 各自旋通道本征值
//!   ...
//! ```
//!
//! ## 依赖关系
//! - 被 `plot/band.rs` 使用
//! - 使用 `models/bands.rs`

use crate::error::{PlotFigError, Result};
use crate::models::EigenvalueTable;
use std::fs;
use std::path::Path;

const PREAMBLE_LINES: usize = 5;

/// 解析 EIGENVAL 文件
pub fn parse_eigenval_file(path: &Path, nspin: usize) -> Result<EigenvalueTable> {
    let content = fs::read_to_string(path).map_err(|e| PlotFigError::FileReadError {
        path: path.display().to_string(),
        source: e,
    })?;

    parse_eigenval_content(&content, nspin, &path.display().to_string())
}

/// 从字符串内容解析 EIGENVAL
pub fn parse_eigenval_content(
    content: &str,
    nspin: usize,
    source_name: &str,
) -> Result<EigenvalueTable> {
    let mut lines = content.lines().enumerate().skip(PREAMBLE_LINES);
    let err = |reason: String| PlotFigError::parse("eigenval", source_name, reason);

    let mut next_line = |what: &str| {
        lines
            .next()
            .ok_or_else(|| err(format!("unexpected end of file while reading {}", what)))
    };

    // 第 6 行: NELECT NKPTS NBANDS
    let (header_no, header) = next_line("header")?;
    let counts: Vec<usize> = header
        .split_whitespace()
        .skip(1)
        .take(2)
        .map(|s| s.parse::<usize>())
        .collect::<std::result::Result<_, _>>()
        .map_err(|_| err(format!("invalid k-point/band counts at line {}", header_no + 1)))?;
    if counts.len() < 2 {
        return Err(err(format!(
            "missing k-point/band counts at line {}",
            header_no + 1
        )));
    }
    let (nkpts, nbands) = (counts[0], counts[1]);

    // 头部计数不可信，容器随读取增长
    let mut kpoints: Vec<[f64; 3]> = Vec::new();
    let mut raw: Vec<Vec<f64>> = Vec::new();

    for ik in 0..nkpts {
        next_line("k-point separator")?;

        let (line_no, kline) = next_line("k-point coordinates")?;
        let coords = parse_floats(kline, 3)
            .ok_or_else(|| err(format!("invalid k-point {} at line {}", ik + 1, line_no + 1)))?;
        kpoints.push([coords[0], coords[1], coords[2]]);

        for ib in 0..nbands {
            let (line_no, bline) = next_line("band energies")?;
            let values = parse_floats(bline, 1 + nspin).ok_or_else(|| {
                err(format!(
                    "expected band index and {} eigenvalue(s) for band {} at line {}",
                    nspin,
                    ib + 1,
                    line_no + 1
                ))
            })?;
            raw.push(values[1..1 + nspin].to_vec());
        }
    }

    let mut table = EigenvalueTable::zeros(nbands, kpoints, nspin);
    for ik in 0..nkpts {
        for ib in 0..nbands {
            for (is, value) in raw[ik * nbands + ib].iter().enumerate() {
                table.set(ib, ik, is, *value);
            }
        }
    }

    Ok(table)
}

/// 解析一行中的前 `count` 个浮点数，不足或非数值时返回 None
fn parse_floats(line: &str, count: usize) -> Option<Vec<f64>> {
    let values: Vec<f64> = line
        .split_whitespace()
        .take(count)
        .map(|s| s.parse().ok())
        .collect::<Option<_>>()?;
    (values.len() == count).then_some(values)
}
