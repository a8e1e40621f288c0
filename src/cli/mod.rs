//! # CLI 模块
//!
//! 使用 `clap` 定义命令行参数和子命令。
//!
//! ## 命令结构
//! - `band`: 能带图 (EIGENVAL + OUTCAR)
//! - `pdos`: 投影态密度图
//! - `delta_G`: 反应能量曲线
//!
//! ## 依赖关系
//! - 被 `main.rs` 使用
//! - 子模块: band, pdos, delta_g

pub mod band;
pub mod delta_g;
pub mod pdos;

use clap::{Parser, Subcommand};

/// 帮助信息末尾的版本说明
pub const EPILOG: &str = concat!(
    "The current version (v",
    env!("CARGO_PKG_VERSION"),
    ") may contain bugs. Please report problems at:\n\n\t",
    env!("CARGO_PKG_REPOSITORY"),
);

/// plot_fig - DFT 计算结果绘图工具
#[derive(Parser)]
#[command(name = "plot_fig")]
#[command(author = env!("CARGO_PKG_AUTHORS"))]
#[command(version)]
#[command(about = "Plotting tools for DFT calculation results", long_about = None)]
#[command(after_help = EPILOG)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

/// 可用的子命令
#[derive(Subcommand)]
pub enum Commands {
    /// Plot band structure from a VASP EIGENVAL file
    Band(band::BandArgs),

    /// Plot projected density of states
    Pdos(pdos::PdosArgs),

    /// Plot a reaction free-energy profile
    #[command(name = "delta_G", alias = "delta-g")]
    DeltaG(delta_g::DeltaGArgs),
}
