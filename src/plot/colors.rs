//! # 颜色工具
//!
//! 提供默认调色板 (tab10) 以及用户颜色字符串解析。
//!
//! ## 依赖关系
//! - 被 `plot/band.rs`, `plot/pdos.rs`, `cli/` 使用
//! - 使用 `plotters` 的 RGBColor

use crate::error::{PlotFigError, Result};
use plotters::style::RGBColor;

/// tab10 分类调色板
pub const TAB10: [RGBColor; 10] = [
    RGBColor(0x1f, 0x77, 0xb4),
    RGBColor(0xff, 0x7f, 0x0e),
    RGBColor(0x2c, 0xa0, 0x2c),
    RGBColor(0xd6, 0x27, 0x28),
    RGBColor(0x94, 0x67, 0xbd),
    RGBColor(0x8c, 0x56, 0x4b),
    RGBColor(0xe3, 0x77, 0xc2),
    RGBColor(0x7f, 0x7f, 0x7f),
    RGBColor(0xbc, 0xbd, 0x22),
    RGBColor(0x17, 0xbe, 0xcf),
];

/// PDOS 的默认浅色配色
pub const PDOS_PASTEL: [&str; 9] = [
    "#fdebaa", "#edc3a5", "#dbe4fb", "#abd1bc", "#e3bbed", "#cccc99", "#bed0f9", "#fcb6a5",
    "#f1f1f1",
];

/// 生成 `n` 个默认颜色，超过 10 个时循环使用
pub fn default_colors(n: usize) -> Vec<RGBColor> {
    (0..n).map(|i| TAB10[i % TAB10.len()]).collect()
}

/// 用户颜色不足 `required` 个时，用默认颜色补齐（用户颜色在前）
pub fn extend_colors(mut given: Vec<RGBColor>, required: usize) -> Vec<RGBColor> {
    if given.len() < required {
        let missing = required - given.len();
        given.extend(default_colors(missing));
    }
    given
}

/// 解析颜色字符串
///
/// 支持 `#rrggbb`、`#rgb`、matplotlib 单字母缩写、`tab:*` 名称和常见颜色名。
pub fn parse_color(input: &str) -> Result<RGBColor> {
    let s = input.trim().to_lowercase();

    if let Some(hex) = s.strip_prefix('#') {
        return parse_hex(hex).ok_or_else(|| invalid(input));
    }

    let color = match s.as_str() {
        "b" | "blue" => RGBColor(0, 0, 255),
        "g" => RGBColor(0, 128, 0),
        "r" | "red" => RGBColor(255, 0, 0),
        "c" | "cyan" => RGBColor(0, 191, 191),
        "m" | "magenta" => RGBColor(191, 0, 191),
        "y" | "yellow" => RGBColor(191, 191, 0),
        "k" | "black" => RGBColor(0, 0, 0),
        "w" | "white" => RGBColor(255, 255, 255),
        "green" => RGBColor(0, 128, 0),
        "orange" => RGBColor(255, 165, 0),
        "purple" => RGBColor(128, 0, 128),
        "brown" => RGBColor(165, 42, 42),
        "pink" => RGBColor(255, 192, 203),
        "gray" | "grey" => RGBColor(128, 128, 128),
        "navy" => RGBColor(0, 0, 128),
        "olive" => RGBColor(128, 128, 0),
        "teal" => RGBColor(0, 128, 128),
        "tab:blue" => TAB10[0],
        "tab:orange" => TAB10[1],
        "tab:green" => TAB10[2],
        "tab:red" => TAB10[3],
        "tab:purple" => TAB10[4],
        "tab:brown" => TAB10[5],
        "tab:pink" => TAB10[6],
        "tab:gray" | "tab:grey" => TAB10[7],
        "tab:olive" => TAB10[8],
        "tab:cyan" => TAB10[9],
        _ => return Err(invalid(input)),
    };

    Ok(color)
}

/// clap 的 value_parser 适配
pub fn parse_color_arg(input: &str) -> std::result::Result<RGBColor, String> {
    parse_color(input).map_err(|e| e.to_string())
}

fn parse_hex(hex: &str) -> Option<RGBColor> {
    if !hex.is_ascii() {
        return None;
    }
    let expanded: String = match hex.len() {
        3 => hex.chars().flat_map(|c| [c, c]).collect(),
        6 => hex.to_string(),
        _ => return None,
    };
    let r = u8::from_str_radix(&expanded[0..2], 16).ok()?;
    let g = u8::from_str_radix(&expanded[2..4], 16).ok()?;
    let b = u8::from_str_radix(&expanded[4..6], 16).ok()?;
    Some(RGBColor(r, g, b))
}

fn invalid(input: &str) -> PlotFigError {
    PlotFigError::InvalidArgument(format!(
        "unrecognized color '{}' (use a name like 'red', a code like 'k', or '#rrggbb')",
        input
    ))
}
