//! # 统一错误处理模块
//!
//! 定义 plot_fig 的所有错误类型，使用 `thiserror` 派生。
//!
//! ## 依赖关系
//! - 被所有其他模块使用
//! - 无外部模块依赖

use thiserror::Error;

/// plot_fig 统一错误类型
#[derive(Error, Debug)]
pub enum PlotFigError {
    // ─────────────────────────────────────────────────────────────
    // I/O 错误
    // ─────────────────────────────────────────────────────────────
    #[error("Failed to read file: {path}")]
    FileReadError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write file: {path}")]
    FileWriteError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Cannot read OUTCAR file at {path}")]
    FileNotFound { path: String },

    // ─────────────────────────────────────────────────────────────
    // 解析错误
    // ─────────────────────────────────────────────────────────────
    #[error("Failed to parse {format} file: {path}\nReason: {reason}")]
    ParseError {
        format: String,
        path: String,
        reason: String,
    },

    #[error("Column index {index} is out of range for a table with {width} columns")]
    ColumnOutOfRange { index: usize, width: usize },

    // ─────────────────────────────────────────────────────────────
    // 查找/参数错误
    // ─────────────────────────────────────────────────────────────
    #[error("Unknown plot type '{0}' (expected one of: spdDOS, totalDOS, PDOS)")]
    UnknownPlotType(String),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    // ─────────────────────────────────────────────────────────────
    // 外部命令错误
    // ─────────────────────────────────────────────────────────────
    #[error("External command '{command}' not found in PATH")]
    CommandNotFound { command: String },

    #[error("External command failed: {command}\n{stderr}")]
    CommandFailed { command: String, stderr: String },

    // ─────────────────────────────────────────────────────────────
    // 绘图错误
    // ─────────────────────────────────────────────────────────────
    #[error("Failed to render plot: {0}")]
    PlotError(String),
}

impl PlotFigError {
    /// 构造解析错误的便捷函数
    pub fn parse(format: &str, path: &str, reason: impl Into<String>) -> Self {
        PlotFigError::ParseError {
            format: format.to_string(),
            path: path.to_string(),
            reason: reason.into(),
        }
    }
}

/// Result 类型别名
pub type Result<T> = std::result::Result<T, PlotFigError>;
