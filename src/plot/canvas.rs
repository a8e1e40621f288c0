//! # 绘图画布
//!
//! 保存一张图的标题、坐标轴标签和图元列表，最后统一用 `plotters` 渲染。
//!
//! ## 功能
//! - 折线、散点、水平/垂直参考线、两曲线间填充、文字标注、图例
//! - 300 DPI 输出，按扩展名选择 PNG 或 SVG
//! - 可在系统图片查看器中直接显示
//!
//! ## 依赖关系
//! - 被 `plot/band.rs`, `plot/pdos.rs`, `plot/delta_g.rs` 使用
//! - 使用 `plotters` 渲染图表

use crate::error::{PlotFigError, Result};

use plotters::coord::cartesian::Cartesian2d;
use plotters::coord::types::RangedCoordf64;
use plotters::coord::Shift;
use plotters::prelude::*;
use plotters::series::DashedLineSeries;
use plotters::style::text_anchor::{HPos, Pos, VPos};
use std::ffi::OsString;
use std::path::{Path, PathBuf};
use std::process::Command;

/// 输出分辨率
pub const DPI: f64 = 300.0;

const FONT: &str = "sans-serif";

/// 默认图幅 (英寸)
const DEFAULT_SIZE: (f64, f64) = (6.4, 4.8);

/// 能带图图幅 (英寸)
const BAND_SIZE: (f64, f64) = (8.0, 6.0);

/// 自动坐标范围的留白比例
const AUTO_MARGIN: f64 = 0.05;

/// 磅值换算为像素
fn pt(points: f64) -> f64 {
    points * DPI / 72.0
}

fn px(points: f64) -> u32 {
    pt(points).round().max(1.0) as u32
}

fn plot_err<E: std::fmt::Debug>(e: E) -> PlotFigError {
    PlotFigError::PlotError(format!("{:?}", e))
}

/// 输出方式：保存到文件或直接显示
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Output {
    Save(PathBuf),
    Show,
}

/// 线条样式
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Stroke {
    pub color: RGBColor,
    /// 线宽 (磅)
    pub width: f64,
    pub alpha: f64,
    pub dashed: bool,
}

impl Stroke {
    pub fn solid(color: RGBColor, width: f64) -> Self {
        Stroke {
            color,
            width,
            alpha: 1.0,
            dashed: false,
        }
    }

    pub fn dashed(color: RGBColor, width: f64) -> Self {
        Stroke {
            dashed: true,
            ..Stroke::solid(color, width)
        }
    }

    pub fn alpha(mut self, alpha: f64) -> Self {
        self.alpha = alpha;
        self
    }

    fn shape(&self) -> ShapeStyle {
        self.color.mix(self.alpha).stroke_width(px(self.width))
    }
}

/// 图元
#[derive(Debug, Clone, PartialEq)]
pub enum Element {
    Line {
        points: Vec<(f64, f64)>,
        stroke: Stroke,
        /// 圆形标记直径 (磅)
        marker: Option<f64>,
        label: Option<String>,
    },
    Scatter {
        point: (f64, f64),
        color: RGBColor,
        /// 标记面积 (磅²)
        size: f64,
        label: Option<String>,
    },
    HLine {
        y: f64,
        stroke: Stroke,
    },
    VLine {
        x: f64,
        stroke: Stroke,
    },
    Fill {
        polygons: Vec<Vec<(f64, f64)>>,
        color: RGBColor,
        alpha: f64,
    },
    /// 横坐标为数据坐标，纵坐标为轴高度的比例
    Annotation {
        text: String,
        x: f64,
        y_frac: f64,
        size: f64,
    },
}

/// 绘图画布
#[derive(Debug, Clone, PartialEq)]
pub struct PlotCanvas {
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    pub grid: bool,
    /// 图幅 (英寸)
    pub size: (f64, f64),

    x_limits: Option<(f64, f64)>,
    y_limits: Option<(f64, f64)>,
    x_ticks: Option<Vec<(f64, String)>>,
    elements: Vec<Element>,
    legend: bool,
}

impl PlotCanvas {
    /// 创建带标题和坐标轴标签的画布
    pub fn new(title: &str, x_label: &str, y_label: &str) -> Self {
        PlotCanvas {
            title: title.to_string(),
            x_label: x_label.to_string(),
            y_label: y_label.to_string(),
            grid: false,
            size: DEFAULT_SIZE,
            x_limits: None,
            y_limits: None,
            x_ticks: None,
            elements: Vec::new(),
            legend: false,
        }
    }

    /// 能带图画布：更大的图幅和浅色网格
    pub fn band_structure(title: &str, x_label: &str, y_label: &str) -> Self {
        PlotCanvas {
            grid: true,
            size: BAND_SIZE,
            ..PlotCanvas::new(title, x_label, y_label)
        }
    }

    pub fn elements(&self) -> &[Element] {
        &self.elements
    }

    pub fn has_legend(&self) -> bool {
        self.legend
    }

    pub fn x_ticks(&self) -> Option<&[(f64, String)]> {
        self.x_ticks.as_deref()
    }

    // ─────────────────────────────────────────────────────────────
    // 图元
    // ─────────────────────────────────────────────────────────────

    pub fn add_line(&mut self, x: &[f64], y: &[f64], stroke: Stroke, label: Option<String>) {
        self.elements.push(Element::Line {
            points: zip_points(x, y),
            stroke,
            marker: None,
            label,
        });
    }

    /// 带圆形标记的折线
    pub fn add_marked_line(
        &mut self,
        x: &[f64],
        y: &[f64],
        stroke: Stroke,
        marker: f64,
        label: Option<String>,
    ) {
        self.elements.push(Element::Line {
            points: zip_points(x, y),
            stroke,
            marker: Some(marker),
            label,
        });
    }

    pub fn add_scatter(&mut self, point: (f64, f64), color: RGBColor, size: f64, label: &str) {
        self.elements.push(Element::Scatter {
            point,
            color,
            size,
            label: Some(label.to_string()),
        });
    }

    pub fn add_hline(&mut self, y: f64, stroke: Stroke) {
        self.elements.push(Element::HLine { y, stroke });
    }

    pub fn add_vline(&mut self, x: f64, stroke: Stroke) {
        self.elements.push(Element::VLine { x, stroke });
    }

    /// 在 `upper > lower` 的区域内填充两曲线之间，交点处线性插值
    pub fn fill_between(
        &mut self,
        x: &[f64],
        upper: &[f64],
        lower: &[f64],
        color: RGBColor,
        alpha: f64,
    ) {
        let polygons = fill_regions(x, upper, lower);
        if !polygons.is_empty() {
            self.elements.push(Element::Fill {
                polygons,
                color,
                alpha,
            });
        }
    }

    pub fn annotate(&mut self, text: &str, x: f64, y_frac: f64, size: f64) {
        self.elements.push(Element::Annotation {
            text: text.to_string(),
            x,
            y_frac,
            size,
        });
    }

    pub fn legend(&mut self) {
        self.legend = true;
    }

    // ─────────────────────────────────────────────────────────────
    // 坐标轴
    // ─────────────────────────────────────────────────────────────

    pub fn set_xlim(&mut self, min: f64, max: f64) {
        self.x_limits = Some((min, max));
    }

    pub fn set_ylim(&mut self, min: f64, max: f64) {
        self.y_limits = Some((min, max));
    }

    /// 用自定义标签替换横轴数值刻度
    pub fn set_xticks(&mut self, ticks: Vec<(f64, String)>) {
        self.x_ticks = Some(ticks);
    }

    /// 实际使用的横轴范围
    pub fn x_range(&self) -> (f64, f64) {
        self.x_limits.unwrap_or_else(|| {
            let (lo, hi) = self.data_bounds(|e| match e {
                Element::VLine { x, .. } => vec![*x],
                Element::HLine { .. } | Element::Annotation { .. } => Vec::new(),
                other => points_of(other).iter().map(|p| p.0).collect(),
            });
            pad_range(lo, hi)
        })
    }

    /// 实际使用的纵轴范围
    pub fn y_range(&self) -> (f64, f64) {
        self.y_limits.unwrap_or_else(|| {
            let (lo, hi) = self.data_bounds(|e| match e {
                Element::HLine { y, .. } => vec![*y],
                Element::VLine { .. } | Element::Annotation { .. } => Vec::new(),
                other => points_of(other).iter().map(|p| p.1).collect(),
            });
            pad_range(lo, hi)
        })
    }

    fn data_bounds<F>(&self, values: F) -> (f64, f64)
    where
        F: Fn(&Element) -> Vec<f64>,
    {
        self.elements
            .iter()
            .flat_map(|e| values(e))
            .filter(|v| v.is_finite())
            .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| {
                (lo.min(v), hi.max(v))
            })
    }

    // ─────────────────────────────────────────────────────────────
    // 输出
    // ─────────────────────────────────────────────────────────────

    /// 按输出方式保存或显示
    pub fn render(&self, output: &Output) -> Result<()> {
        match output {
            Output::Save(path) => self.save(path),
            Output::Show => self.show(),
        }
    }

    /// 保存为图片，扩展名为 `.svg` 时输出 SVG，否则输出 PNG
    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(dir) = path.parent().filter(|d| !d.as_os_str().is_empty()) {
            if !dir.is_dir() {
                return Err(PlotFigError::FileWriteError {
                    path: path.display().to_string(),
                    source: std::io::Error::new(
                        std::io::ErrorKind::NotFound,
                        format!("directory '{}' does not exist", dir.display()),
                    ),
                });
            }
        }

        let size = self.pixel_size();
        if is_svg(path) {
            let root = SVGBackend::new(path, size).into_drawing_area();
            self.draw(&root)?;
            root.present().map_err(plot_err)?;
        } else {
            let root = BitMapBackend::new(path, size).into_drawing_area();
            self.draw(&root)?;
            root.present().map_err(plot_err)?;
        }
        Ok(())
    }

    /// 渲染到临时 PNG 并用系统图片查看器打开
    pub fn show(&self) -> Result<()> {
        let path = std::env::temp_dir().join(format!(
            "plot_fig_{}_{}.png",
            std::process::id(),
            slug(&self.title)
        ));
        self.save(&path)?;
        open_in_viewer(&path)
    }

    fn pixel_size(&self) -> (u32, u32) {
        (
            (self.size.0 * DPI).round() as u32,
            (self.size.1 * DPI).round() as u32,
        )
    }

    /// 绘制图表的核心逻辑
    fn draw<DB: DrawingBackend>(&self, root: &DrawingArea<DB, Shift>) -> Result<()>
    where
        DB::ErrorType: 'static,
    {
        root.fill(&WHITE).map_err(plot_err)?;

        let (x_lo, x_hi) = self.x_range();
        let (y_lo, y_hi) = self.y_range();

        let mut chart = ChartBuilder::on(root)
            .caption(&self.title, (FONT, pt(12.0)).into_font())
            .margin(px(6.0))
            .x_label_area_size(px(28.0))
            .y_label_area_size(px(36.0))
            .build_cartesian_2d(x_lo..x_hi, y_lo..y_hi)
            .map_err(plot_err)?;

        let blank = |_: &f64| String::new();
        let mut mesh = chart.configure_mesh();
        mesh.x_desc(self.x_label.as_str())
            .y_desc(self.y_label.as_str())
            .label_style((FONT, pt(9.0)))
            .axis_desc_style((FONT, pt(10.0)));
        if self.grid {
            mesh.bold_line_style(BLACK.mix(0.12))
                .light_line_style(TRANSPARENT);
        } else {
            mesh.disable_mesh();
        }
        if self.x_ticks().is_some() {
            mesh.x_label_formatter(&blank);
        }
        mesh.draw().map_err(plot_err)?;

        for element in &self.elements {
            match element {
                Element::Line {
                    points,
                    stroke,
                    marker,
                    label,
                } => {
                    let style = stroke.shape();
                    let anno = if stroke.dashed {
                        chart
                            .draw_series(DashedLineSeries::new(
                                points.iter().copied(),
                                px(3.7 * stroke.width),
                                px(1.6 * stroke.width),
                                style,
                            ))
                            .map_err(plot_err)?
                    } else {
                        chart
                            .draw_series(LineSeries::new(points.iter().copied(), style))
                            .map_err(plot_err)?
                    };
                    if let Some(label) = label {
                        anno.label(label.as_str()).legend(move |(x, y)| {
                            PathElement::new(vec![(x - 12, y), (x + 12, y)], style)
                        });
                    }
                    if let Some(diameter) = marker {
                        let radius = px(diameter / 2.0);
                        let fill = stroke.color.mix(stroke.alpha).filled();
                        chart
                            .draw_series(points.iter().map(|p| Circle::new(*p, radius, fill)))
                            .map_err(plot_err)?;
                    }
                }
                Element::Scatter {
                    point,
                    color,
                    size,
                    label,
                } => {
                    let radius = px(size.sqrt() / 2.0);
                    let fill = color.filled();
                    let anno = chart
                        .draw_series(std::iter::once(Circle::new(*point, radius, fill)))
                        .map_err(plot_err)?;
                    if let Some(label) = label {
                        anno.label(label.as_str())
                            .legend(move |(x, y)| Circle::new((x, y), radius, fill));
                    }
                }
                Element::HLine { y, stroke } => {
                    draw_segment(&mut chart, [(x_lo, *y), (x_hi, *y)], stroke)?;
                }
                Element::VLine { x, stroke } => {
                    draw_segment(&mut chart, [(*x, y_lo), (*x, y_hi)], stroke)?;
                }
                Element::Fill {
                    polygons,
                    color,
                    alpha,
                } => {
                    let style = color.mix(*alpha).filled();
                    chart
                        .draw_series(
                            polygons
                                .iter()
                                .map(|poly| Polygon::new(poly.clone(), style)),
                        )
                        .map_err(plot_err)?;
                }
                Element::Annotation {
                    text,
                    x,
                    y_frac,
                    size,
                } => {
                    let y = y_lo + y_frac * (y_hi - y_lo);
                    chart
                        .draw_series(std::iter::once(Text::new(
                            text.clone(),
                            (*x, y),
                            (FONT, pt(*size)).into_font().color(&BLACK),
                        )))
                        .map_err(plot_err)?;
                }
            }
        }

        // 自定义横轴刻度标签
        if let Some(ticks) = self.x_ticks() {
            let style = (FONT, pt(10.0))
                .into_font()
                .color(&BLACK)
                .pos(Pos::new(HPos::Center, VPos::Top));
            for (value, label) in ticks {
                let (bx, by) = chart.backend_coord(&(*value, y_lo));
                root.draw(&Text::new(label.clone(), (bx, by + px(4.0) as i32), style.clone()))
                    .map_err(plot_err)?;
            }
        }

        if self.has_legend() {
            chart
                .configure_series_labels()
                .position(SeriesLabelPosition::UpperRight)
                .label_font((FONT, pt(9.0)))
                .background_style(WHITE.mix(0.8))
                .border_style(BLACK)
                .draw()
                .map_err(plot_err)?;
        }

        Ok(())
    }
}

fn draw_segment<DB: DrawingBackend>(
    chart: &mut ChartContext<'_, DB, Cartesian2d<RangedCoordf64, RangedCoordf64>>,
    ends: [(f64, f64); 2],
    stroke: &Stroke,
) -> Result<()>
where
    DB::ErrorType: 'static,
{
    let style = stroke.shape();
    if stroke.dashed {
        chart
            .draw_series(DashedLineSeries::new(
                ends,
                px(3.7 * stroke.width),
                px(1.6 * stroke.width),
                style,
            ))
            .map_err(plot_err)?;
    } else {
        chart
            .draw_series(std::iter::once(PathElement::new(ends.to_vec(), style)))
            .map_err(plot_err)?;
    }
    Ok(())
}

fn zip_points(x: &[f64], y: &[f64]) -> Vec<(f64, f64)> {
    x.iter().copied().zip(y.iter().copied()).collect()
}

fn points_of(element: &Element) -> Vec<(f64, f64)> {
    match element {
        Element::Line { points, .. } => points.clone(),
        Element::Scatter { point, .. } => vec![*point],
        Element::Fill { polygons, .. } => polygons.iter().flatten().copied().collect(),
        Element::HLine { .. } | Element::VLine { .. } | Element::Annotation { .. } => Vec::new(),
    }
}

/// 数据范围两端各留 5% 空白；无数据时为 [0, 1]
pub(crate) fn pad_range(lo: f64, hi: f64) -> (f64, f64) {
    if !lo.is_finite() || !hi.is_finite() {
        return (0.0, 1.0);
    }
    if hi - lo == 0.0 {
        let half = if lo == 0.0 { 0.5 } else { lo.abs() * AUTO_MARGIN };
        return (lo - half, hi + half);
    }
    let margin = (hi - lo) * AUTO_MARGIN;
    (lo - margin, hi + margin)
}

/// 计算 `upper > lower` 的连续区间，返回每段的闭合多边形
///
/// 区间端点处两曲线的交点按线性插值给出。
pub fn fill_regions(x: &[f64], upper: &[f64], lower: &[f64]) -> Vec<Vec<(f64, f64)>> {
    let n = x.len().min(upper.len()).min(lower.len());
    let mut regions = Vec::new();
    let mut top: Vec<(f64, f64)> = Vec::new();
    let mut bottom: Vec<(f64, f64)> = Vec::new();

    let crossing = |i: usize| {
        let d0 = upper[i - 1] - lower[i - 1];
        let d1 = upper[i] - lower[i];
        let t = d0 / (d0 - d1);
        (
            x[i - 1] + t * (x[i] - x[i - 1]),
            lower[i - 1] + t * (lower[i] - lower[i - 1]),
        )
    };

    for i in 0..n {
        if upper[i] > lower[i] {
            if top.is_empty() && i > 0 {
                top.push(crossing(i));
            }
            top.push((x[i], upper[i]));
            bottom.push((x[i], lower[i]));
        } else if !top.is_empty() {
            top.push(crossing(i));
            top.extend(bottom.drain(..).rev());
            regions.push(std::mem::take(&mut top));
        }
    }

    if !top.is_empty() {
        top.extend(bottom.drain(..).rev());
        regions.push(top);
    }

    regions
}

fn is_svg(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|e| e.eq_ignore_ascii_case("svg"))
        .unwrap_or(false)
}

fn slug(title: &str) -> String {
    title
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() { c.to_ascii_lowercase() } else { '_' })
        .collect()
}

/// 调用系统图片查看器
fn open_in_viewer(path: &Path) -> Result<()> {
    let (program, mut args): (&str, Vec<OsString>) = if cfg!(target_os = "macos") {
        ("open", Vec::new())
    } else if cfg!(windows) {
        ("cmd", vec!["/C".into(), "start".into(), "".into()])
    } else {
        ("xdg-open", Vec::new())
    };
    args.push(path.as_os_str().to_os_string());

    let out = Command::new(program)
        .args(&args)
        .output()
        .map_err(|_| PlotFigError::CommandNotFound {
            command: program.to_string(),
        })?;

    if !out.status.success() {
        return Err(PlotFigError::CommandFailed {
            command: program.to_string(),
            stderr: String::from_utf8_lossy(&out.stderr).to_string(),
        });
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fill_regions_single_crossing() {
        let x = [0.0, 1.0, 2.0, 3.0];
        let upper = [1.0, 1.0, -1.0, -1.0];
        let lower = [0.0; 4];
        let regions = fill_regions(&x, &upper, &lower);
        assert_eq!(regions.len(), 1);
        assert_eq!(
            regions[0],
            vec![(0.0, 1.0), (1.0, 1.0), (1.5, 0.0), (1.0, 0.0), (0.0, 0.0)]
        );
    }

    #[test]
    fn test_fill_regions_two_segments() {
        let x = [0.0, 1.0, 2.0, 3.0, 4.0];
        let upper = [2.0, 0.0, 0.0, 2.0, 2.0];
        let lower = [1.0; 5];
        let regions = fill_regions(&x, &upper, &lower);
        assert_eq!(regions.len(), 2);
        // 第二段从 x = 2.5 的交点开始
        assert_eq!(regions[1][0], (2.5, 1.0));
        assert_eq!(regions[1].last(), Some(&(3.0, 1.0)));
        assert_eq!(regions[1].len(), 5);
    }

    #[test]
    fn test_fill_regions_none_when_never_above() {
        let regions = fill_regions(&[0.0, 1.0], &[0.0, 0.0], &[1.0, 1.0]);
        assert!(regions.is_empty());
    }

    #[test]
    fn test_auto_range_pads_data() {
        let mut canvas = PlotCanvas::new("t", "x", "y");
        canvas.add_line(&[0.0, 10.0], &[-1.0, 1.0], Stroke::solid(BLACK, 1.0), None);
        let (x0, x1) = canvas.x_range();
        assert!((x0 + 0.5).abs() < 1e-12 && (x1 - 10.5).abs() < 1e-12);
        let (y0, y1) = canvas.y_range();
        assert!((y0 + 1.1).abs() < 1e-12 && (y1 - 1.1).abs() < 1e-12);
    }

    #[test]
    fn test_reference_lines_only_extend_their_axis() {
        let mut canvas = PlotCanvas::new("t", "x", "y");
        canvas.add_line(&[1.0, 2.0], &[1.0, 2.0], Stroke::solid(BLACK, 1.0), None);
        canvas.add_hline(0.0, Stroke::solid(BLACK, 1.0));
        let (y0, _) = canvas.y_range();
        assert!(y0 < 0.0);
        let (x0, _) = canvas.x_range();
        assert!(x0 > 0.0);
    }

    #[test]
    fn test_explicit_limits_win() {
        let mut canvas = PlotCanvas::band_structure("t", "x", "y");
        canvas.add_line(&[0.0, 1.0], &[-20.0, 20.0], Stroke::solid(BLACK, 1.0), None);
        canvas.set_xlim(0.0, 1.0);
        canvas.set_ylim(-5.0, 5.0);
        assert_eq!(canvas.x_range(), (0.0, 1.0));
        assert_eq!(canvas.y_range(), (-5.0, 5.0));
        assert!(canvas.grid);
        assert_eq!(canvas.pixel_size(), (2400, 1800));
    }

    #[test]
    fn test_empty_canvas_range() {
        let canvas = PlotCanvas::new("t", "x", "y");
        assert_eq!(canvas.x_range(), (0.0, 1.0));
        assert_eq!(canvas.pixel_size(), (1920, 1440));
    }

    #[test]
    fn test_save_into_missing_directory_fails() {
        let canvas = PlotCanvas::new("t", "x", "y");
        let path = std::env::temp_dir()
            .join("plot_fig_no_such_dir")
            .join("out.png");
        assert!(matches!(
            canvas.save(&path),
            Err(PlotFigError::FileWriteError { .. })
        ));
    }

    #[test]
    fn test_svg_extension_detection() {
        assert!(is_svg(Path::new("band.SVG")));
        assert!(!is_svg(Path::new("band.png")));
        assert!(!is_svg(Path::new("band")));
    }

    #[test]
    fn test_save_renders_every_element_kind() {
        let dir = std::env::temp_dir().join(format!("plot_fig_canvas_{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();

        let x = [0.0, 1.0, 2.0, 3.0];
        let mut canvas = PlotCanvas::band_structure("All elements", "x", "y");
        canvas.add_line(&x, &[0.0, 1.0, -1.0, 0.5], Stroke::solid(RED, 1.0), Some("a".into()));
        canvas.add_line(&x, &[0.5, 0.5, 0.5, 0.5], Stroke::dashed(BLUE, 1.0).alpha(0.5), None);
        canvas.add_marked_line(&x, &[1.0, 0.0, 1.0, 0.0], Stroke::solid(BLACK, 2.0), 8.0, None);
        canvas.add_scatter((1.0, 1.0), GREEN, 100.0, "point");
        canvas.add_hline(0.0, Stroke::dashed(BLACK, 0.5));
        canvas.add_vline(1.5, Stroke::solid(BLACK, 1.0));
        canvas.fill_between(&x, &[1.0, 1.0, -1.0, 1.0], &[0.0; 4], RED, 0.4);
        canvas.annotate("label", 0.1, 0.9, 10.0);
        canvas.set_xticks(vec![(0.0, "Γ".to_string()), (3.0, "X".to_string())]);
        canvas.legend();

        for name in ["all.png", "all.svg"] {
            let path = dir.join(name);
            canvas.save(&path).unwrap();
            assert!(std::fs::metadata(&path).unwrap().len() > 0, "{}", name);
        }

        std::fs::remove_dir_all(&dir).ok();
    }
}
