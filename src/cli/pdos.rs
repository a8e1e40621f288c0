//! # pdos 子命令 CLI 定义
//!
//! 从空白分隔的 PDOS 数据文件绘制投影态密度图。
//!
//! ## 依赖关系
//! - 被 `cli/mod.rs` 使用
//! - 参数传递给 `commands/pdos.rs`

use crate::plot::colors::{parse_color_arg, PDOS_PASTEL};
use crate::plot::pdos::PdosKind;

use clap::Args;
use plotters::style::RGBColor;
use std::path::PathBuf;

/// pdos 子命令参数
#[derive(Args, Debug)]
pub struct PdosArgs {
    /// The data file of PDOS
    pub input_file: PathBuf,

    /// Output image file (default: <input name>_pdos.png)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Minimum energy for PDOS (eV)
    #[arg(long, default_value_t = -10.0, allow_negative_numbers = true)]
    pub emin: f64,

    /// Maximum energy for PDOS (eV)
    #[arg(long, default_value_t = 10.0, allow_negative_numbers = true)]
    pub emax: f64,

    /// Type of PDOS to plot
    #[arg(long, alias = "pdos_type", value_enum, default_value = "spdDOS")]
    pub pdos_type: PdosKind,

    /// Colors for PDOS components; missing ones are filled from the tab10 palette
    #[arg(long, num_args = 1.., value_parser = parse_color_arg, default_values = PDOS_PASTEL)]
    pub colors: Vec<RGBColor>,

    /// Transparency level for PDOS curves (fills use half of it)
    #[arg(long, default_value_t = 0.8)]
    pub alpha: f64,
}
