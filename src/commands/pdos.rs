//! # pdos 命令实现
//!
//! ## 依赖关系
//! - 使用 `cli/pdos.rs` 定义的参数
//! - 使用 `plot/pdos.rs`
//! - 使用 `utils/output.rs`

use crate::cli::pdos::PdosArgs;
use crate::error::Result;
use crate::plot::pdos::{self, PdosPlotOptions};
use crate::plot::Output;
use crate::utils::output;

/// 执行 PDOS 绘图
pub fn execute(args: PdosArgs) -> Result<()> {
    output::print_header("Projected Density of States");

    let output_path = args
        .output
        .clone()
        .unwrap_or_else(|| pdos::default_output_path(&args.input_file));

    output::print_info(&format!(
        "Plotting {} from '{}' in [{}, {}] eV",
        args.pdos_type,
        args.input_file.display(),
        args.emin,
        args.emax
    ));
    if args.emin > args.emax {
        output::print_warning("emin is greater than emax; the energy window is empty");
    }

    let options = PdosPlotOptions {
        kind: args.pdos_type,
        emin: args.emin,
        emax: args.emax,
        colors: Some(args.colors),
        alpha: args.alpha,
    };

    let target = Output::Save(output_path);
    let points = pdos::plot_pdos(&args.input_file, &target, &options)?;
    if points == 0 {
        output::print_warning("No data points inside the energy window");
    } else {
        output::print_info(&format!("Plotted {} energy points", points));
    }

    super::report_output("PDOS plot", &target);
    Ok(())
}
