//! 選択끼니とメニューの突き合わせ

use crate::dates::{week_of_month, weekday_name};
use crate::types::{MenuItem, MenuRecord, SelectionEntry};
use chrono::{Datelike, NaiveDate};
use std::fmt;

/// 選択数とメニュー数の不一致
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CountMismatch {
    /// 選択された끼니の数
    pub selected: usize,
    /// 解析されたメニューの数
    pub parsed: usize,
}

impl fmt::Display for CountMismatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "에러: 선택한 끼니 개수({})와 파싱된 메뉴 개수({})가 다릅니다.",
            self.selected, self.parsed
        )
    }
}

/// 曜日コード（mon, tue, …）に一致する最初の日付
pub fn find_date_for_day(dates: &[NaiveDate], day: &str) -> Option<NaiveDate> {
    dates
        .iter()
        .copied()
        .find(|d| weekday_name(d.weekday()).starts_with(day))
}

/// 選択とメニューを位置で対応付け、日付を曜日で引く
///
/// 件数が違えば何も作らずに `CountMismatch` を返す。
/// 曜日に一致する日付がない選択は黙って飛ばす。
pub fn match_selections(
    year: i32,
    cafeteria: &str,
    dates: &[NaiveDate],
    items: &[MenuItem],
    selections: &[SelectionEntry],
) -> Result<Vec<MenuRecord>, CountMismatch> {
    if items.len() != selections.len() {
        return Err(CountMismatch {
            selected: selections.len(),
            parsed: items.len(),
        });
    }

    let records = selections
        .iter()
        .zip(items)
        .filter_map(|(selection, item)| {
            let date = find_date_for_day(dates, &selection.day)?;
            Some(MenuRecord {
                year,
                date,
                week_of_month: week_of_month(date),
                cafeteria: cafeteria.to_string(),
                meal: selection.meal.clone(),
                item: item.clone(),
            })
        })
        .collect();

    Ok(records)
}
