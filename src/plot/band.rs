//! # 能带图
//!
//! 读取 EIGENVAL 与同目录 OUTCAR，以费米能为零点绘制能带结构。
//!
//! 高对称点标签固定为 Γ 和 X，仅标在横轴两端，不做对称性分析。
//!
//! ## 依赖关系
//! - 被 `commands/band.rs` 调用
//! - 使用 `parsers/eigenval.rs`, `parsers/outcar.rs`
//! - 使用 `plot/canvas.rs`, `plot/colors.rs`

use crate::error::{PlotFigError, Result};
use crate::models::{Direction, EigenvalueTable, OutcarSummary};
use crate::parsers::{eigenval, outcar};
use crate::plot::canvas::{pad_range, Output, PlotCanvas, Stroke};
use crate::plot::colors::extend_colors;

use plotters::style::RGBColor;
use std::path::Path;

const SPIN_UP_COLOR: RGBColor = RGBColor(255, 0, 0);
const SPIN_DOWN_COLOR: RGBColor = RGBColor(0, 0, 255);
const SINGLE_SPIN_COLOR: RGBColor = RGBColor(0, 0, 0);

/// 能带图选项
#[derive(Debug, Clone)]
pub struct BandPlotOptions {
    pub direction: Direction,
    /// 费米能以下的能量范围 (eV)
    pub below_fermi: f64,
    /// 费米能以上的能量范围 (eV)
    pub above_fermi: f64,
    /// 各自旋通道的颜色
    pub colors: Option<Vec<RGBColor>>,
}

impl Default for BandPlotOptions {
    fn default() -> Self {
        BandPlotOptions {
            direction: Direction::Z,
            below_fermi: 5.0,
            above_fermi: 5.0,
            colors: None,
        }
    }
}

/// 已对齐费米能的能带数据
#[derive(Debug, Clone)]
pub struct BandData {
    pub summary: OutcarSummary,
    pub eigenvalues: EigenvalueTable,
}

/// 读取 EIGENVAL 及其 OUTCAR，并将本征值平移到费米能为零
pub fn load_band_data(eigenval_path: &Path) -> Result<BandData> {
    let outcar_path = outcar::companion_outcar_path(eigenval_path);
    if !outcar_path.is_file() {
        return Err(PlotFigError::FileNotFound {
            path: outcar_path.display().to_string(),
        });
    }

    let summary = outcar::parse_outcar(&outcar_path)?;
    let mut eigenvalues = eigenval::parse_eigenval_file(eigenval_path, summary.nspin)?;
    if eigenvalues.nkpts() == 0 {
        return Err(PlotFigError::parse(
            "eigenval",
            &eigenval_path.display().to_string(),
            "no k-points found",
        ));
    }
    eigenvalues.shift(summary.efermi);

    Ok(BandData {
        summary,
        eigenvalues,
    })
}

/// 构建能带图画布
pub fn build_band_canvas(data: &BandData, options: &BandPlotOptions) -> PlotCanvas {
    let table = &data.eigenvalues;
    let nspin = table.nspin();

    let mut canvas = PlotCanvas::band_structure("Band Structure", "k-points", "E - E_F (eV)");

    let colors = match &options.colors {
        Some(given) => extend_colors(given.clone(), nspin),
        None if nspin == 2 => vec![SPIN_UP_COLOR, SPIN_DOWN_COLOR],
        None => vec![SINGLE_SPIN_COLOR],
    };

    let kx = table.kpoint_axis(options.direction);
    for (ispin, color) in colors.iter().enumerate().take(nspin) {
        for ib in 0..table.nbands() {
            canvas.add_line(
                &kx,
                &table.band(ib, ispin),
                Stroke::solid(*color, 1.0).alpha(0.8),
                None,
            );
        }
    }

    // 费米能级
    canvas.add_hline(0.0, Stroke::dashed(SINGLE_SPIN_COLOR, 0.5).alpha(0.5));

    let mut first = kx.first().copied().unwrap_or(0.0);
    let mut last = kx.last().copied().unwrap_or(1.0);
    // 所选分量在路径两端相同时展宽横轴
    if first == last {
        (first, last) = pad_range(first, last);
    }
    canvas.set_xlim(first, last);
    canvas.set_ylim(-options.below_fermi, options.above_fermi);
    canvas.set_xticks(vec![(first, "Γ".to_string()), (last, "X".to_string())]);

    canvas
}

/// 绘制能带图
pub fn plot_band_structure(
    eigenval_path: &Path,
    output: &Output,
    options: &BandPlotOptions,
) -> Result<BandData> {
    let data = load_band_data(eigenval_path)?;
    let canvas = build_band_canvas(&data, options);
    canvas.render(output)?;
    Ok(data)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::plot::canvas::Element;
    use std::fs;
    use std::path::PathBuf;

    const OUTCAR: &str = "\
   ISPIN  =      2    spin polarized calculation?
 E-fermi :   1.0000     XC(G=0):  -8.1234     alpha+bet : -5.4321
";

    const EIGENVAL: &str = "\
    2    2    1    2
  0.1102616E+02  0.2500000E-09  0.2500000E-09  0.2500000E-09  0.5000000E-15
  1.000000000000000E-004
  CAR
 unknown system
    8     3     2

  0.0000000E+00  0.0000000E+00  0.0000000E+00  0.3333333E+00
    1       -5.000000      -4.500000
    2        2.000000       2.500000

  0.0000000E+00  0.0000000E+00  0.2500000E+00  0.3333333E+00
    1       -4.000000      -3.500000
    2        3.000000       3.500000

  0.0000000E+00  0.0000000E+00  0.5000000E+00  0.3333333E+00
    1       -3.000000      -2.500000
    2        4.000000       4.500000
";

    fn fixture_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("plot_fig_band_{}_{}", name, std::process::id()));
        fs::create_dir_all(&dir).unwrap();
        dir
    }

    fn sample_data(nspin: usize) -> BandData {
        let kpts = vec![[0.0, 0.0, 0.0], [0.0, 0.1, 0.5]];
        let mut eigenvalues = EigenvalueTable::zeros(2, kpts, nspin);
        eigenvalues.set(1, 1, 0, 2.0);
        BandData {
            summary: OutcarSummary { nspin, efermi: 0.0 },
            eigenvalues,
        }
    }

    #[test]
    fn test_load_shifts_by_fermi_energy() {
        let dir = fixture_dir("load");
        fs::write(dir.join("EIGENVAL"), EIGENVAL).unwrap();
        fs::write(dir.join("OUTCAR"), OUTCAR).unwrap();

        let data = load_band_data(&dir.join("EIGENVAL")).unwrap();
        let raw = eigenval::parse_eigenval_content(EIGENVAL, 2, "EIGENVAL").unwrap();

        assert_eq!(data.summary.nspin, 2);
        for ib in 0..raw.nbands() {
            for ik in 0..raw.nkpts() {
                for is in 0..2 {
                    let expected = raw.get(ib, ik, is) - 1.0;
                    assert!((data.eigenvalues.get(ib, ik, is) - expected).abs() < 1e-12);
                }
            }
        }

        fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn test_missing_outcar_is_reported() {
        let dir = fixture_dir("no_outcar");
        fs::write(dir.join("EIGENVAL"), EIGENVAL).unwrap();

        match load_band_data(&dir.join("EIGENVAL")) {
            Err(PlotFigError::FileNotFound { path }) => assert!(path.ends_with("OUTCAR")),
            other => panic!("unexpected result: {:?}", other),
        }

        fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn test_canvas_has_one_line_per_band_and_spin() {
        let canvas = build_band_canvas(&sample_data(2), &BandPlotOptions::default());
        let lines: Vec<_> = canvas
            .elements()
            .iter()
            .filter_map(|e| match e {
                Element::Line { stroke, points, .. } => Some((stroke.color, points.clone())),
                _ => None,
            })
            .collect();
        assert_eq!(lines.len(), 4);
        assert_eq!(lines[0].0, SPIN_UP_COLOR);
        assert_eq!(lines[3].0, SPIN_DOWN_COLOR);
        // 默认沿 z 方向
        assert_eq!(lines[1].1, vec![(0.0, 0.0), (0.5, 2.0)]);
    }

    #[test]
    fn test_canvas_limits_and_labels() {
        let options = BandPlotOptions {
            direction: Direction::Y,
            below_fermi: 3.0,
            above_fermi: 2.0,
            colors: None,
        };
        let canvas = build_band_canvas(&sample_data(1), &options);
        assert_eq!(canvas.x_range(), (0.0, 0.1));
        assert_eq!(canvas.y_range(), (-3.0, 2.0));
        let ticks = canvas.x_ticks().unwrap();
        assert_eq!(ticks[0].1, "Γ");
        assert_eq!(ticks[1].1, "X");
        assert!(canvas.elements().iter().any(|e| matches!(
            e,
            Element::HLine { y, stroke } if *y == 0.0 && stroke.dashed
        )));
        let line_colors: Vec<_> = canvas
            .elements()
            .iter()
            .filter_map(|e| match e {
                Element::Line { stroke, .. } => Some(stroke.color),
                _ => None,
            })
            .collect();
        assert_eq!(line_colors, vec![SINGLE_SPIN_COLOR; 2]);
    }

    #[test]
    fn test_short_color_list_is_extended() {
        let options = BandPlotOptions {
            colors: Some(vec![RGBColor(1, 2, 3)]),
            ..BandPlotOptions::default()
        };
        let canvas = build_band_canvas(&sample_data(2), &options);
        let last = canvas
            .elements()
            .iter()
            .filter_map(|e| match e {
                Element::Line { stroke, .. } => Some(stroke.color),
                _ => None,
            })
            .last();
        assert_eq!(last, Some(crate::plot::colors::TAB10[0]));
    }

    #[test]
    fn test_constant_axis_is_widened() {
        // 两端 x 分量都为 0
        let options = BandPlotOptions {
            direction: Direction::X,
            ..BandPlotOptions::default()
        };
        let canvas = build_band_canvas(&sample_data(1), &options);
        assert_eq!(canvas.x_range(), (-0.5, 0.5));
        let ticks = canvas.x_ticks().unwrap();
        assert!(ticks[0].0 < ticks[1].0);
    }

    #[test]
    fn test_plot_writes_png_and_svg() {
        let dir = fixture_dir("render");
        fs::write(dir.join("EIGENVAL"), EIGENVAL).unwrap();
        fs::write(dir.join("OUTCAR"), OUTCAR).unwrap();

        for name in ["band.png", "band.svg"] {
            let out = dir.join(name);
            let data = plot_band_structure(
                &dir.join("EIGENVAL"),
                &Output::Save(out.clone()),
                &BandPlotOptions::default(),
            )
            .unwrap();
            assert_eq!(data.eigenvalues.nkpts(), 3);
            assert!(fs::metadata(&out).unwrap().len() > 0, "{}", name);
        }

        fs::remove_dir_all(&dir).ok();
    }
}
