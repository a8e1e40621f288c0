//! # delta_G 子命令 CLI 定义
//!
//! ## 依赖关系
//! - 被 `cli/mod.rs` 使用
//! - 参数传递给 `commands/delta_g.rs`

use clap::Args;
use std::path::PathBuf;

/// delta_G 子命令参数
#[derive(Args, Debug)]
pub struct DeltaGArgs {
    /// Two-column data file: reaction coordinate, ΔG (eV)
    pub input_file: PathBuf,

    /// Output image file (.png or .svg)
    #[arg(short, long, default_value = "delta_G.png")]
    pub output: PathBuf,
}
