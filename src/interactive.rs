//! 対話式끼니選択モジュール
//!
//! 解析できたメニューごとに `曜日:끼니` を入力させ、選択リストを作る。
//! 件数はメニュー数と必ず一致する。

use crate::error::{CoopMenuError, Result};
use crate::input::parse_selection;
use chrono::{Datelike, NaiveDate};
use coop_menu_common::dates::weekday_abbr;
use coop_menu_common::{MealSlot, MenuItem, SelectionEntry};
use dialoguer::Input;

/// 入力1件の解釈結果
#[derive(Debug, PartialEq)]
pub enum SelectionAnswer {
    /// 選択を確定
    Entry(SelectionEntry),
    /// 入力を中断
    Quit,
}

/// ヘッダの日付を候補表示用の文字列にする（`mon(03/04)`）
pub fn describe_dates(dates: &[NaiveDate]) -> Vec<String> {
    dates
        .iter()
        .map(|d| format!("{}({:02}/{:02})", weekday_abbr(d.weekday()), d.month(), d.day()))
        .collect()
}

/// 入力文字列を解釈する
///
/// - `mon:lunch_1` … そのまま
/// - `lunch_2` … 曜日は前回と同じ
/// - 空 / `r` … 前回と同じ
/// - `q` … 中断
pub fn resolve_answer(answer: &str, prev: Option<&SelectionEntry>) -> Result<SelectionAnswer> {
    let trimmed = answer.trim();

    match (trimmed, prev) {
        ("q" | "Q", _) => Ok(SelectionAnswer::Quit),
        ("" | "r", Some(prev)) => Ok(SelectionAnswer::Entry(prev.clone())),
        ("" | "r", None) => Err(CoopMenuError::InvalidSelection(
            "이전 선택이 없습니다".to_string(),
        )),
        (text, Some(prev)) if !text.contains(':') => Ok(SelectionAnswer::Entry(
            SelectionEntry::new(prev.day.clone(), MealSlot::from(text)),
        )),
        (text, _) => Ok(SelectionAnswer::Entry(parse_selection(text)?)),
    }
}

/// 対話式で選択リストを入力
pub fn prompt_selections(items: &[MenuItem], dates: &[NaiveDate]) -> Result<Vec<SelectionEntry>> {
    eprintln!("📋 메뉴 {}개에 대한 끼니를 입력합니다", items.len());
    eprintln!("---");
    eprintln!("입력: [요일:끼니] 예) mon:breakfast  [끼니만] 같은 요일  [Enter/r] 이전과 같음  [q] 중단");
    if !dates.is_empty() {
        eprintln!("날짜: {}", describe_dates(dates).join(", "));
    }
    eprintln!("---\n");

    let mut selections: Vec<SelectionEntry> = Vec::with_capacity(items.len());

    for (count, item) in items.iter().enumerate() {
        eprintln!(
            "[{}/{}] {} (식단가 {}, 식수 {})",
            count + 1,
            items.len(),
            item.name,
            item.price,
            item.eaters
        );

        loop {
            let input: String = Input::new()
                .with_prompt("끼니")
                .allow_empty(true)
                .interact_text()
                .map_err(|e| CoopMenuError::Prompt(e.to_string()))?;

            match resolve_answer(&input, selections.last()) {
                Ok(SelectionAnswer::Entry(entry)) => {
                    eprintln!("  → {}:{}\n", entry.day, entry.meal);
                    selections.push(entry);
                    break;
                }
                Ok(SelectionAnswer::Quit) => {
                    return Err(CoopMenuError::Prompt("사용자가 입력을 중단했습니다".to_string()));
                }
                Err(e) => eprintln!("  ✗ {}", e),
            }
        }
    }

    Ok(selections)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_describe_dates() {
        let dates = [
            NaiveDate::from_ymd_opt(2024, 3, 4).unwrap(),
            NaiveDate::from_ymd_opt(2024, 3, 5).unwrap(),
        ];
        assert_eq!(describe_dates(&dates), vec!["mon(03/04)", "tue(03/05)"]);
    }

    #[test]
    fn test_resolve_full_answer() {
        let answer = resolve_answer("tue:lunch_3", None).unwrap();
        assert_eq!(answer, SelectionAnswer::Entry(SelectionEntry::new("tue", "lunch_3")));
    }

    #[test]
    fn test_resolve_meal_only_reuses_day() {
        let prev = SelectionEntry::new("wed", "lunch_1");
        let answer = resolve_answer("lunch_2", Some(&prev)).unwrap();
        assert_eq!(answer, SelectionAnswer::Entry(SelectionEntry::new("wed", "lunch_2")));
    }

    #[test]
    fn test_resolve_repeat() {
        let prev = SelectionEntry::new("wed", "dinner");
        assert_eq!(
            resolve_answer("", Some(&prev)).unwrap(),
            SelectionAnswer::Entry(prev.clone())
        );
        assert_eq!(
            resolve_answer("r", Some(&prev)).unwrap(),
            SelectionAnswer::Entry(prev.clone())
        );
        assert!(resolve_answer("", None).is_err());
    }

    #[test]
    fn test_resolve_quit() {
        assert_eq!(resolve_answer("q", None).unwrap(), SelectionAnswer::Quit);
    }

    #[test]
    fn test_resolve_meal_only_without_prev_is_error() {
        assert!(resolve_answer("lunch_2", None).is_err());
    }
}
