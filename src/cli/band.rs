//! # band 子命令 CLI 定义
//!
//! 从 VASP EIGENVAL（及同目录 OUTCAR）绘制能带图。
//!
//! ## 依赖关系
//! - 被 `cli/mod.rs` 使用
//! - 参数传递给 `commands/band.rs`

use crate::models::Direction;
use crate::plot::colors::parse_color_arg;
use crate::plot::Output;

use clap::Args;
use plotters::style::RGBColor;
use std::path::PathBuf;

/// band 子命令参数
#[derive(Args, Debug)]
pub struct BandArgs {
    /// Input EIGENVAL file (OUTCAR is read from the same directory)
    pub input_file: PathBuf,

    /// Output image file (.png or .svg)
    #[arg(short, long, default_value = "band.png")]
    pub output: PathBuf,

    /// High symmetry direction used for the horizontal axis
    #[arg(long, value_enum, default_value = "z")]
    pub direction: Direction,

    /// Energy range below Fermi level (eV)
    #[arg(long, default_value_t = 5.0, allow_negative_numbers = true)]
    pub below: f64,

    /// Energy range above Fermi level (eV)
    #[arg(long, default_value_t = 5.0, allow_negative_numbers = true)]
    pub above: f64,

    /// Colors for each spin channel (e.g. r b, or '#d62728')
    #[arg(long, num_args = 1.., value_parser = parse_color_arg)]
    pub colors: Option<Vec<RGBColor>>,

    /// Show the plot in an image viewer instead of saving it
    #[arg(long, default_value_t = false)]
    pub show: bool,
}

impl BandArgs {
    pub fn output(&self) -> Output {
        if self.show {
            Output::Show
        } else {
            Output::Save(self.output.clone())
        }
    }
}
