//! # 投影态密度 (PDOS) 图
//!
//! 按绘图类型选择固定列布局，分别绘制自旋向上/向下曲线，并在向上大于向下的区域填充。
//!
//! ## 列布局（第 0 列为能量）
//! | 类型       | 自旋向上列        | 自旋向下列        | 标签                              |
//! |------------|-------------------|-------------------|-----------------------------------|
//! | `spdDOS`   | 1, 3, 5           | 2, 4, 6           | s, p, d                           |
//! | `totalDOS` | 1                 | 2                 | Total DOS                         |
//! | `PDOS`     | 1, 3, ..., 17     | 2, 4, ..., 18     | s, px, py, pz, dxy, ..., dz2      |
//!
//! ## 依赖关系
//! - 被 `commands/pdos.rs` 调用
//! - 使用 `parsers/table.rs`, `models/table.rs`
//! - 使用 `plot/canvas.rs`, `plot/colors.rs`

use crate::error::{PlotFigError, Result};
use crate::models::DataTable;
use crate::parsers::{read_table, TableOptions};
use crate::plot::canvas::{Output, PlotCanvas, Stroke};
use crate::plot::colors::extend_colors;

use clap::ValueEnum;
use plotters::style::RGBColor;
use std::path::{Path, PathBuf};
use std::str::FromStr;

const BLACK: RGBColor = RGBColor(0, 0, 0);

/// PDOS 绘图类型
#[derive(Debug, Clone, Copy, ValueEnum, PartialEq, Eq, Default)]
pub enum PdosKind {
    /// s, p, d resolved DOS
    #[default]
    #[value(name = "spdDOS")]
    SpdDos,
    /// Total DOS
    #[value(name = "totalDOS")]
    TotalDos,
    /// Fully l,m-resolved DOS
    #[value(name = "PDOS")]
    Pdos,
}

/// 某一绘图类型的固定列布局
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PdosLayout {
    pub up_columns: &'static [usize],
    pub down_columns: &'static [usize],
    pub labels: &'static [&'static str],
    pub fill: bool,
}

impl PdosLayout {
    pub fn components(&self) -> usize {
        self.labels.len()
    }
}

const SPD_LAYOUT: PdosLayout = PdosLayout {
    up_columns: &[1, 3, 5],
    down_columns: &[2, 4, 6],
    labels: &["s", "p", "d"],
    fill: true,
};

const TOTAL_LAYOUT: PdosLayout = PdosLayout {
    up_columns: &[1],
    down_columns: &[2],
    labels: &["Total DOS"],
    fill: true,
};

const LM_LAYOUT: PdosLayout = PdosLayout {
    up_columns: &[1, 3, 5, 7, 9, 11, 13, 15, 17],
    down_columns: &[2, 4, 6, 8, 10, 12, 14, 16, 18],
    labels: &["s", "px", "py", "pz", "dxy", "dxz", "dyz", "dx2-y2", "dz2"],
    fill: true,
};

impl PdosKind {
    pub fn layout(self) -> PdosLayout {
        match self {
            PdosKind::SpdDos => SPD_LAYOUT,
            PdosKind::TotalDos => TOTAL_LAYOUT,
            PdosKind::Pdos => LM_LAYOUT,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            PdosKind::SpdDos => "spdDOS",
            PdosKind::TotalDos => "totalDOS",
            PdosKind::Pdos => "PDOS",
        }
    }
}

impl FromStr for PdosKind {
    type Err = PlotFigError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "spdDOS" => Ok(PdosKind::SpdDos),
            "totalDOS" => Ok(PdosKind::TotalDos),
            "PDOS" => Ok(PdosKind::Pdos),
            other => Err(PlotFigError::UnknownPlotType(other.to_string())),
        }
    }
}

impl std::fmt::Display for PdosKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// PDOS 绘图选项
#[derive(Debug, Clone)]
pub struct PdosPlotOptions {
    pub kind: PdosKind,
    pub emin: f64,
    pub emax: f64,
    pub colors: Option<Vec<RGBColor>>,
    /// 曲线透明度，填充区域使用其一半
    pub alpha: f64,
}

impl Default for PdosPlotOptions {
    fn default() -> Self {
        PdosPlotOptions {
            kind: PdosKind::SpdDos,
            emin: -10.0,
            emax: 10.0,
            colors: None,
            alpha: 0.8,
        }
    }
}

/// 默认输出文件名：`<输入文件名去扩展名>_pdos.png`
pub fn default_output_path(input: &Path) -> PathBuf {
    let stem = input
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("output");
    PathBuf::from(format!("{}_pdos.png", stem))
}

/// 构建 PDOS 画布
pub fn build_pdos_canvas(table: &DataTable, options: &PdosPlotOptions) -> Result<PlotCanvas> {
    let layout = options.kind.layout();
    let data = table.filter_range(0, options.emin, options.emax)?;
    let energy = data.column(0)?;

    let mut canvas = PlotCanvas::new("PDOS", "Energy (eV)", "PDOS (a. u./eV)");

    let colors = extend_colors(
        options.colors.clone().unwrap_or_default(),
        layout.components(),
    );

    let components = layout
        .up_columns
        .iter()
        .zip(layout.down_columns)
        .zip(layout.labels)
        .zip(&colors);

    for (((&up_col, &down_col), label), &color) in components {
        let up = data.column(up_col)?;
        let down = data.column(down_col)?;
        let stroke = Stroke::solid(color, 2.0).alpha(options.alpha);

        canvas.add_line(&energy, &up, stroke, Some(label.to_string()));
        canvas.add_line(&energy, &down, stroke, Some(format!("{} (down)", label)));

        if layout.fill {
            canvas.fill_between(&energy, &up, &down, color, options.alpha / 2.0);
        }
    }

    if options.emin <= 0.0 && 0.0 <= options.emax {
        canvas.add_vline(0.0, Stroke::dashed(BLACK, 1.5));
        canvas.annotate("Fermi Level", 0.1, 0.9, 10.0);
    }

    canvas.add_hline(0.0, Stroke::solid(BLACK, 1.0));
    canvas.legend();

    Ok(canvas)
}

/// 绘制 PDOS 图，返回能量窗口内的数据点数
pub fn plot_pdos(input: &Path, output: &Output, options: &PdosPlotOptions) -> Result<usize> {
    let table = read_table(
        input,
        TableOptions {
            header: true,
            skip_first_row: true,
        },
    )?;
    let canvas = build_pdos_canvas(&table, options)?;
    canvas.render(output)?;
    Ok(table.filter_range(0, options.emin, options.emax)?.n_rows())
}
