//! # 反应能量曲线 (ΔG)
//!
//! 绘制反应坐标-自由能曲线，标注反应物、产物和过渡态（能量最大点）。
//!
//! ## 依赖关系
//! - 被 `commands/delta_g.rs` 调用
//! - 使用 `parsers/table.rs`, `plot/canvas.rs`

use crate::error::{PlotFigError, Result};
use crate::models::DataTable;
use crate::parsers::{read_table, TableOptions};
use crate::plot::canvas::{Output, PlotCanvas, Stroke};

use plotters::style::RGBColor;
use std::path::Path;

const LINE_COLOR: RGBColor = RGBColor(0, 0, 255);
const REACTANT_COLOR: RGBColor = RGBColor(0, 128, 0);
const PRODUCT_COLOR: RGBColor = RGBColor(255, 0, 0);
const TS_COLOR: RGBColor = RGBColor(191, 0, 191);

/// 标注点面积 (磅²)
const MARKER_AREA: f64 = 100.0;

/// 反应能量曲线数据
#[derive(Debug, Clone, PartialEq)]
pub struct EnergyProfile {
    pub coordinates: Vec<f64>,
    pub energies: Vec<f64>,
}

/// 关键点的行号
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProfileMarkers {
    pub reactant: usize,
    pub product: usize,
    pub transition_state: usize,
}

impl EnergyProfile {
    /// 从两列表格（反应坐标、ΔG）构造
    pub fn from_table(table: &DataTable, source_name: &str) -> Result<Self> {
        if table.is_empty() {
            return Err(PlotFigError::parse(
                "delta_G",
                source_name,
                "no data rows found",
            ));
        }
        Ok(EnergyProfile {
            coordinates: table.column(0)?,
            energies: table.column(1)?,
        })
    }

    /// 首行为反应物，末行为产物，能量最大（并列时取首个）为过渡态
    pub fn markers(&self) -> ProfileMarkers {
        let transition_state = self
            .energies
            .iter()
            .enumerate()
            .fold(0, |best, (i, e)| if *e > self.energies[best] { i } else { best });

        ProfileMarkers {
            reactant: 0,
            product: self.energies.len().saturating_sub(1),
            transition_state,
        }
    }

    pub fn point(&self, index: usize) -> (f64, f64) {
        (self.coordinates[index], self.energies[index])
    }
}

/// 构建 ΔG 画布
pub fn build_delta_g_canvas(profile: &EnergyProfile) -> PlotCanvas {
    let mut canvas = PlotCanvas::new("Reaction Energy Profile", "Reaction Coordinate", "ΔG (eV)");

    canvas.add_marked_line(
        &profile.coordinates,
        &profile.energies,
        Stroke::solid(LINE_COLOR, 2.0),
        8.0,
        None,
    );

    let markers = profile.markers();
    canvas.add_scatter(profile.point(markers.reactant), REACTANT_COLOR, MARKER_AREA, "Reactant");
    canvas.add_scatter(profile.point(markers.product), PRODUCT_COLOR, MARKER_AREA, "Product");
    canvas.add_scatter(
        profile.point(markers.transition_state),
        TS_COLOR,
        MARKER_AREA,
        "Transition State",
    );

    canvas.legend();
    canvas
}

/// 绘制 ΔG 图，返回读取到的曲线供调用方汇报
pub fn plot_delta_g(input: &Path, output: &Output) -> Result<EnergyProfile> {
    let table = read_table(input, TableOptions::default())?;
    let profile = EnergyProfile::from_table(&table, &input.display().to_string())?;
    build_delta_g_canvas(&profile).render(output)?;
    Ok(profile)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::plot::canvas::Element;

    fn profile(energies: &[f64]) -> EnergyProfile {
        EnergyProfile {
            coordinates: (0..energies.len()).map(|i| i as f64).collect(),
            energies: energies.to_vec(),
        }
    }

    #[test]
    fn test_markers() {
        let markers = profile(&[0.0, 2.0, 5.0, 1.0]).markers();
        assert_eq!(
            markers,
            ProfileMarkers {
                reactant: 0,
                product: 3,
                transition_state: 2,
            }
        );
    }

    #[test]
    fn test_maximum_at_endpoint_coincides() {
        let markers = profile(&[3.0, 1.0, 2.0]).markers();
        assert_eq!(markers.transition_state, markers.reactant);

        // 并列最大值取第一个
        let markers = profile(&[0.0, 4.0, 4.0, 1.0]).markers();
        assert_eq!(markers.transition_state, 1);
    }

    #[test]
    fn test_canvas_scatter_labels() {
        let canvas = build_delta_g_canvas(&profile(&[0.0, 2.0, 5.0, 1.0]));
        let scatters: Vec<_> = canvas
            .elements()
            .iter()
            .filter_map(|e| match e {
                Element::Scatter { point, label, color, .. } => {
                    Some((*point, label.clone().unwrap_or_default(), *color))
                }
                _ => None,
            })
            .collect();
        assert_eq!(
            scatters,
            vec![
                ((0.0, 0.0), "Reactant".to_string(), REACTANT_COLOR),
                ((3.0, 1.0), "Product".to_string(), PRODUCT_COLOR),
                ((2.0, 5.0), "Transition State".to_string(), TS_COLOR),
            ]
        );
        assert!(matches!(
            canvas.elements()[0],
            Element::Line { marker: Some(_), .. }
        ));
        assert!(canvas.has_legend());
    }

    #[test]
    fn test_from_table_requires_rows_and_two_columns() {
        let empty = DataTable::from_rows(Vec::new(), None).unwrap();
        assert!(matches!(
            EnergyProfile::from_table(&empty, "dg.dat"),
            Err(PlotFigError::ParseError { .. })
        ));

        let single = DataTable::from_rows(vec![vec![0.0], vec![1.0]], None).unwrap();
        assert!(matches!(
            EnergyProfile::from_table(&single, "dg.dat"),
            Err(PlotFigError::ColumnOutOfRange { index: 1, .. })
        ));
    }

    #[test]
    fn test_plot_delta_g_writes_image() {
        let dir = std::env::temp_dir().join(format!("plot_fig_dg_{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        let input = dir.join("dG.dat");
        std::fs::write(&input, "0 0.0\n1 0.8\n2 0.3\n3 -0.4\n").unwrap();

        let out = dir.join("delta_G.svg");
        let profile = plot_delta_g(&input, &Output::Save(out.clone())).unwrap();
        assert_eq!(profile.markers().transition_state, 1);
        assert!(std::fs::metadata(&out).unwrap().len() > 0);

        std::fs::remove_dir_all(&dir).ok();
    }
}
