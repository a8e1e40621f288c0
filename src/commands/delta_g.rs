//! # delta_G 命令实现
//!
//! 绘制反应能量曲线并打印关键点表格。
//!
//! ## 依赖关系
//! - 使用 `cli/delta_g.rs` 定义的参数
//! - 使用 `plot/delta_g.rs`
//! - 使用 `utils/output.rs`

use crate::cli::delta_g::DeltaGArgs;
use crate::error::Result;
use crate::plot::delta_g;
use crate::plot::Output;
use crate::utils::output;

use tabled::{Table, Tabled};

#[derive(Tabled)]
struct PointRow {
    #[tabled(rename = "Point")]
    name: &'static str,
    #[tabled(rename = "Index")]
    index: usize,
    #[tabled(rename = "Coordinate")]
    coordinate: String,
    #[tabled(rename = "ΔG (eV)")]
    energy: String,
}

/// 执行 ΔG 绘图
pub fn execute(args: DeltaGArgs) -> Result<()> {
    output::print_header("Reaction Energy Profile");
    output::print_info(&format!("Reading '{}'", args.input_file.display()));

    let target = Output::Save(args.output.clone());
    let profile = delta_g::plot_delta_g(&args.input_file, &target)?;
    let markers = profile.markers();

    let rows: Vec<PointRow> = [
        ("Reactant", markers.reactant),
        ("Transition State", markers.transition_state),
        ("Product", markers.product),
    ]
    .into_iter()
    .map(|(name, index)| {
        let (x, y) = profile.point(index);
        PointRow {
            name,
            index,
            coordinate: format!("{:.3}", x),
            energy: format!("{:.4}", y),
        }
    })
    .collect();
    println!("{}", Table::new(&rows));

    let (_, g_reactant) = profile.point(markers.reactant);
    let (_, g_ts) = profile.point(markers.transition_state);
    let (_, g_product) = profile.point(markers.product);
    output::print_info(&format!("Barrier: {:.4} eV", g_ts - g_reactant));
    output::print_info(&format!("Reaction energy: {:.4} eV", g_product - g_reactant));

    super::report_output("ΔG plot", &target);
    Ok(())
}
