//! # 数值表格数据模型
//!
//! 存储从空白分隔文本文件读取的矩形数值表格，按列序号访问。
//!
//! ## 依赖关系
//! - 被 `parsers/table.rs` 构造
//! - 被 `plot/pdos.rs`, `plot/delta_g.rs` 使用

use crate::error::{PlotFigError, Result};

/// 矩形数值表格
#[derive(Debug, Clone, PartialEq, Default)]
pub struct DataTable {
    /// 表头列名（若读取时消耗了表头行）
    pub names: Option<Vec<String>>,

    rows: Vec<Vec<f64>>,
    width: usize,
}

impl DataTable {
    /// 从行数据构造表格，所有行必须等宽
    pub fn from_rows(rows: Vec<Vec<f64>>, names: Option<Vec<String>>) -> Result<Self> {
        let width = rows.first().map(|r| r.len()).unwrap_or(0);
        if let Some(i) = rows.iter().position(|r| r.len() != width) {
            return Err(PlotFigError::InvalidArgument(format!(
                "row {} has {} values, expected {}",
                i,
                rows[i].len(),
                width
            )));
        }
        Ok(DataTable { names, rows, width })
    }

    pub fn n_rows(&self) -> usize {
        self.rows.len()
    }

    pub fn n_cols(&self) -> usize {
        self.width
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// 按序号取出一列
    pub fn column(&self, index: usize) -> Result<Vec<f64>> {
        self.check_column(index)?;
        Ok(self.rows.iter().map(|r| r[index]).collect())
    }

    /// 能量窗口过滤：保留 `column` 列数值落在闭区间 [min, max] 内的行
    ///
    /// 不修改原表格。`min > max` 时返回空表。
    pub fn filter_range(&self, column: usize, min: f64, max: f64) -> Result<DataTable> {
        self.check_column(column)?;
        let rows = self
            .rows
            .iter()
            .filter(|r| r[column] >= min && r[column] <= max)
            .cloned()
            .collect();
        Ok(DataTable {
            names: self.names.clone(),
            rows,
            width: self.width,
        })
    }

    fn check_column(&self, index: usize) -> Result<()> {
        if index >= self.width {
            return Err(PlotFigError::ColumnOutOfRange {
                index,
                width: self.width,
            });
        }
        Ok(())
    }
}
