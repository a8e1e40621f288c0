//! # 绘图模块
//!
//! 提供能带图、PDOS 图和反应能量曲线的绘制。
//!
//! ## 子模块
//! - `canvas`: 画布与 `plotters` 渲染
//! - `colors`: 调色板与颜色解析
//! - `band`: 能带图
//! - `pdos`: 投影态密度图
//! - `delta_g`: 反应能量曲线
//!
//! ## 依赖关系
//! - 被 `commands/` 使用
//! - 使用 `parsers/`, `models/`

pub mod band;
pub mod canvas;
pub mod colors;
pub mod delta_g;
pub mod pdos;

pub use canvas::Output;
