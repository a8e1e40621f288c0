//! # 数据模型模块
//!
//! 定义能带、费米能和数值表格的数据模型。
//!
//! ## 依赖关系
//! - 被 `parsers/` 和 `plot/` 使用
//! - 子模块: bands, table

pub mod bands;
pub mod table;

pub use bands::{Direction, EigenvalueTable, OutcarSummary};
pub use table::DataTable;
