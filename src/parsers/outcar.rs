//! # VASP OUTCAR 解析器
//!
//! 解析 VASP 计算输出文件 OUTCAR，提取自旋数 (ISPIN) 和费米能 (E-fermi)。
//!
//! 单次顺序扫描：ISPIN 在 E-fermi 之前出现，遇到第一条 E-fermi 即停止。
//!
//! ## 依赖关系
//! - 被 `plot/band.rs` 使用
//! - 使用 `models/bands.rs`

use crate::error::{PlotFigError, Result};
use crate::models::OutcarSummary;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};

const ISPIN_PREFIX: &str = "   ISPIN";
const EFERMI_PREFIX: &str = " E-fermi";

/// 由 EIGENVAL 路径推出同目录下的 OUTCAR 路径
///
/// 文件名中的 `EIGENVAL` 替换为 `OUTCAR`；不含该字样时取同目录 `OUTCAR`。
pub fn companion_outcar_path(eigenval: &Path) -> PathBuf {
    let name = eigenval
        .file_name()
        .and_then(|n| n.to_str())
        .filter(|n| n.contains("EIGENVAL"))
        .map(|n| n.replace("EIGENVAL", "OUTCAR"))
        .unwrap_or_else(|| "OUTCAR".to_string());

    match eigenval.parent() {
        Some(dir) => dir.join(name),
        None => PathBuf::from(name),
    }
}

/// 解析 VASP OUTCAR 文件
pub fn parse_outcar(path: &Path) -> Result<OutcarSummary> {
    let file = File::open(path).map_err(|_| PlotFigError::FileNotFound {
        path: path.display().to_string(),
    })?;

    let reader = BufReader::new(file);
    let lines = reader.lines().map(|line| {
        line.map_err(|e| PlotFigError::FileReadError {
            path: path.display().to_string(),
            source: e,
        })
    });

    scan_outcar(lines, &path.display().to_string())
}

/// 从字符串内容解析 OUTCAR
#[cfg(test)]
pub fn parse_outcar_content(content: &str, source_name: &str) -> Result<OutcarSummary> {
    scan_outcar(content.lines().map(|l| Ok(l.to_string())), source_name)
}

fn scan_outcar<I>(lines: I, source_name: &str) -> Result<OutcarSummary>
where
    I: Iterator<Item = Result<String>>,
{
    let mut summary = OutcarSummary::default();

    for line in lines {
        let line = line?;

        // "   ISPIN  =      2    spin polarized calculation?"
        if line.starts_with(ISPIN_PREFIX) {
            let nspin: usize = third_field(&line)
                .and_then(|s| s.parse().ok())
                .ok_or_else(|| {
                    PlotFigError::parse("outcar", source_name, format!("bad ISPIN line: {}", line.trim()))
                })?;
            if nspin != 1 && nspin != 2 {
                return Err(PlotFigError::parse(
                    "outcar",
                    source_name,
                    format!("ISPIN must be 1 or 2, found {}", nspin),
                ));
            }
            summary.nspin = nspin;
        // " E-fermi :  -1.2345     XC(G=0):  -8.1234     alpha+bet : -5.4321"
        } else if line.starts_with(EFERMI_PREFIX) {
            summary.efermi = third_field(&line)
                .and_then(|s| s.parse().ok())
                .ok_or_else(|| {
                    PlotFigError::parse("outcar", source_name, format!("bad E-fermi line: {}", line.trim()))
                })?;
            break;
        }
    }

    Ok(summary)
}

fn third_field(line: &str) -> Option<&str> {
    line.split_whitespace().nth(2)
}

#[cfg(test)]
mod tests {
    use super::*;

    const OUTCAR: &str = "\
 vasp.6.3.0 18Jan22 (build Mar 11 2022) complex
   ISPIN  =      2    spin polarized calculation?
   NELECT =      16.0000    total number of electrons
 E-fermi :   5.1234     XC(G=0):  -8.1234     alpha+bet : -5.4321
 E-fermi :   9.9999     XC(G=0):  -8.1234     alpha+bet : -5.4321
";

    #[test]
    fn test_parse_outcar_content() {
        let summary = parse_outcar_content(OUTCAR, "OUTCAR").unwrap();
        assert_eq!(summary.nspin, 2);
        // 第一条 E-fermi 生效
        assert!((summary.efermi - 5.1234).abs() < 1e-12);
    }

    #[test]
    fn test_scan_stops_at_fermi_energy() {
        let content = " E-fermi :  -1.5000\n   ISPIN  =      2    spin polarized\n";
        let summary = parse_outcar_content(content, "OUTCAR").unwrap();
        assert_eq!(summary.nspin, 1);
        assert!((summary.efermi + 1.5).abs() < 1e-12);
    }

    #[test]
    fn test_defaults_when_absent() {
        let summary = parse_outcar_content("nothing useful here\n", "OUTCAR").unwrap();
        assert_eq!(summary, OutcarSummary::default());
    }

    #[test]
    fn test_invalid_spin_rejected() {
        let content = "   ISPIN  =      3    spin polarized calculation?\n";
        assert!(parse_outcar_content(content, "OUTCAR").is_err());
    }

    #[test]
    fn test_prefix_must_match_exactly() {
        // 缩进不同的行不参与匹配
        let content = "ISPIN = 2\n  E-fermi : 3.0\n";
        let summary = parse_outcar_content(content, "OUTCAR").unwrap();
        assert_eq!(summary, OutcarSummary::default());
    }

    #[test]
    fn test_companion_outcar_path() {
        assert_eq!(
            companion_outcar_path(Path::new("calc/band/EIGENVAL")),
            PathBuf::from("calc/band/OUTCAR")
        );
        assert_eq!(
            companion_outcar_path(Path::new("run/EIGENVAL.spin")),
            PathBuf::from("run/OUTCAR.spin")
        );
        assert_eq!(
            companion_outcar_path(Path::new("run/eig.dat")),
            PathBuf::from("run/OUTCAR")
        );
    }

    #[test]
    fn test_missing_outcar_is_not_found() {
        let path = std::env::temp_dir().join("plot_fig_missing_dir").join("OUTCAR");
        match parse_outcar(&path) {
            Err(PlotFigError::FileNotFound { path: p }) => assert!(p.contains("OUTCAR")),
            other => panic!("unexpected result: {:?}", other),
        }
    }
}
