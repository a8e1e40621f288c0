//! # 空白分隔数值表格解析器
//!
//! 读取 PDOS、ΔG 等以空格/制表符分隔的数值文本文件。
//!
//! ## 格式说明
//! ```text
//! #Energy  s-up  s-down  ...   # '#' 之后为注释
//! -10.000  0.001  0.002  ...
//! ```
//!
//! ## 依赖关系
//! - 被 `plot/pdos.rs`, `plot/delta_g.rs` 使用
//! - 使用 `models/table.rs`

use crate::error::{PlotFigError, Result};
use crate::models::DataTable;
use std::fs;
use std::path::Path;

const COMMENT_MARKER: char = '#';

/// 表格读取选项
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TableOptions {
    /// 将第一条有效行作为列名
    pub header: bool,

    /// 无条件跳过文件第一行
    pub skip_first_row: bool,
}

/// 读取表格文件
pub fn read_table(path: &Path, options: TableOptions) -> Result<DataTable> {
    let content = fs::read_to_string(path).map_err(|e| PlotFigError::FileReadError {
        path: path.display().to_string(),
        source: e,
    })?;

    parse_table(&content, options, &path.display().to_string())
}

/// 从字符串内容解析表格
pub fn parse_table(content: &str, options: TableOptions, source_name: &str) -> Result<DataTable> {
    let skip = usize::from(options.skip_first_row);

    let mut names: Option<Vec<String>> = None;
    let mut rows: Vec<Vec<f64>> = Vec::new();
    let mut width: Option<usize> = None;

    for (line_no, raw) in content.lines().enumerate().skip(skip) {
        let line = match raw.find(COMMENT_MARKER) {
            Some(pos) => &raw[..pos],
            None => raw,
        };
        if line.trim().is_empty() {
            continue;
        }

        if options.header && names.is_none() {
            names = Some(line.split_whitespace().map(str::to_string).collect());
            continue;
        }

        let row = line
            .split_whitespace()
            .map(|tok| {
                tok.parse::<f64>().map_err(|_| {
                    PlotFigError::parse(
                        "table",
                        source_name,
                        format!("non-numeric value '{}' at line {}", tok, line_no + 1),
                    )
                })
            })
            .collect::<Result<Vec<f64>>>()?;

        match width {
            None => width = Some(row.len()),
            Some(w) if w != row.len() => {
                return Err(PlotFigError::parse(
                    "table",
                    source_name,
                    format!(
                        "expected {} fields at line {}, found {}",
                        w,
                        line_no + 1,
                        row.len()
                    ),
                ));
            }
            _ => {}
        }

        rows.push(row);
    }

    DataTable::from_rows(rows, names)
}
