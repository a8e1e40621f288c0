//! # band 命令实现
//!
//! ## 依赖关系
//! - 使用 `cli/band.rs` 定义的参数
//! - 使用 `plot/band.rs`
//! - 使用 `utils/output.rs`

use crate::cli::band::BandArgs;
use crate::error::Result;
use crate::plot::band::{self, BandPlotOptions};
use crate::utils::output;

use tabled::{Table, Tabled};

#[derive(Tabled)]
struct SummaryRow {
    #[tabled(rename = "Quantity")]
    quantity: &'static str,
    #[tabled(rename = "Value")]
    value: String,
}

/// 执行能带绘图
pub fn execute(args: BandArgs) -> Result<()> {
    output::print_header("Band Structure");
    output::print_info(&format!("Reading '{}'", args.input_file.display()));

    let target = args.output();
    let options = BandPlotOptions {
        direction: args.direction,
        below_fermi: args.below,
        above_fermi: args.above,
        colors: args.colors,
    };

    let data = band::plot_band_structure(&args.input_file, &target, &options)?;

    let rows = vec![
        SummaryRow {
            quantity: "ISPIN",
            value: data.summary.nspin.to_string(),
        },
        SummaryRow {
            quantity: "E-fermi (eV)",
            value: format!("{:.4}", data.summary.efermi),
        },
        SummaryRow {
            quantity: "k-points",
            value: data.eigenvalues.nkpts().to_string(),
        },
        SummaryRow {
            quantity: "bands",
            value: data.eigenvalues.nbands().to_string(),
        },
        SummaryRow {
            quantity: "direction",
            value: options.direction.to_string(),
        },
    ];
    println!("{}", Table::new(&rows));

    super::report_output("Band structure", &target);
    Ok(())
}
