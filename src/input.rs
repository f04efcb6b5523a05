//! 入力の読み込み
//!
//! - リクエストJSON（year, cafeteria, rawText, selectedMeals）
//! - 献立テキストファイル
//! - コマンドラインの選択指定 `mon:breakfast,tue:lunch_1`

use crate::error::{CoopMenuError, Result};
use coop_menu_common::{MenuRequest, SelectionEntry};
use std::path::Path;

/// リクエストJSONを読み込む
pub fn load_request(path: &Path) -> Result<MenuRequest> {
    if !path.exists() {
        return Err(CoopMenuError::FileNotFound(path.display().to_string()));
    }

    let content = std::fs::read_to_string(path)?;
    let request: MenuRequest = serde_json::from_str(&content)?;
    Ok(request)
}

/// 献立テキストを読み込む
pub fn read_raw_text(path: &Path) -> Result<String> {
    if !path.exists() {
        return Err(CoopMenuError::FileNotFound(path.display().to_string()));
    }

    Ok(std::fs::read_to_string(path)?)
}

/// 選択指定をパースする
///
/// カンマまたは空白区切りの `曜日:끼니`。順序はそのまま保持する。
pub fn parse_selection_list(list: &str) -> Result<Vec<SelectionEntry>> {
    list.split(|c: char| c == ',' || c.is_whitespace())
        .filter(|token| !token.is_empty())
        .map(parse_selection)
        .collect()
}

/// `mon:lunch_1` 1件をパース
pub fn parse_selection(token: &str) -> Result<SelectionEntry> {
    let (day, meal) = token
        .split_once(':')
        .ok_or_else(|| CoopMenuError::InvalidSelection(token.to_string()))?;

    let day = day.trim();
    let meal = meal.trim();
    if day.is_empty() || meal.is_empty() {
        return Err(CoopMenuError::InvalidSelection(token.to_string()));
    }

    Ok(SelectionEntry::new(day, meal))
}
