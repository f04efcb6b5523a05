//! Excel生成（CLI版）
//!
//! 共通ライブラリの excel_core でバッファを作り、ファイルに保存する

use crate::error::{CoopMenuError, Result};
use coop_menu_common::export::excel_core::generate_excel_buffer;
use coop_menu_common::ReportRow;
use std::path::Path;

/// シート名に使えない文字
const INVALID_SHEET_CHARS: [char; 7] = ['[', ']', ':', '*', '?', '/', '\\'];
/// シート名の最大長
const MAX_SHEET_NAME_CHARS: usize = 31;

pub fn generate_excel(rows: &[ReportRow], output_path: &Path, cafeteria: &str) -> Result<()> {
    let sheet_name = sheet_name_for(cafeteria);
    let buffer = generate_excel_buffer(rows, &sheet_name)
        .map_err(|e| CoopMenuError::ExcelGeneration(e.to_string()))?;

    if let Some(parent) = output_path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    std::fs::write(output_path, buffer)?;

    Ok(())
}

/// 식당名からシート名を作る（空なら "식단"）
pub fn sheet_name_for(cafeteria: &str) -> String {
    let name: String = cafeteria
        .chars()
        .filter(|c| !INVALID_SHEET_CHARS.contains(c))
        .take(MAX_SHEET_NAME_CHARS)
        .collect();
    let name = name.trim().trim_matches('\'').to_string();

    if name.is_empty() {
        "식단".to_string()
    } else {
        name
    }
}
