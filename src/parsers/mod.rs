//! # 解析器模块
//!
//! 提供 VASP 输出文件和通用数值表格的解析器。
//!
//! ## 依赖关系
//! - 被 `plot/` 模块使用
//! - 使用 `models/` 数据模型
//! - 子模块: eigenval, outcar, table

pub mod eigenval;
pub mod outcar;
pub mod table;

pub use table::{read_table, TableOptions};
