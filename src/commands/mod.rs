//! # 命令执行模块
//!
//! 实现各子命令的业务逻辑。
//!
//! ## 依赖关系
//! - 被 `main.rs` 调用
//! - 使用 `cli/`, `plot/`, `utils/`
//! - 子模块: band, pdos, delta_g

pub mod band;
pub mod delta_g;
pub mod pdos;

use crate::cli::Commands;
use crate::error::Result;
use crate::plot::Output;
use crate::utils::output;

/// 执行命令
pub fn run(cmd: Commands) -> Result<()> {
    match cmd {
        Commands::Band(args) => band::execute(args),
        Commands::Pdos(args) => pdos::execute(args),
        Commands::DeltaG(args) => delta_g::execute(args),
    }
}

/// 汇报输出结果
fn report_output(what: &str, target: &Output) {
    match target {
        Output::Save(path) => {
            output::print_success(&format!("{} saved to '{}'", what, path.display()))
        }
        Output::Show => output::print_success(&format!("{} opened in image viewer", what)),
    }
}
