//! レコードの並べ替えとタブ区切り出力
//!
//! 出力列（スプレッドシート貼り付け用）:
//! 年, 月, 日, 曜日, 週, 식당, 끼니, 코너, 구분, 메뉴명, 식단가, 원가, (空欄), 식수

use crate::dates::weekday_abbr;
use crate::types::{DishType, MenuRecord};
use chrono::Datelike;

/// 列見出し（Excel出力で使用）
pub const REPORT_HEADERS: [&str; 14] = [
    "년도", "월", "일", "요일", "주차", "식당", "끼니", "코너", "구분", "메뉴명", "식단가", "원가",
    "비고", "식수",
];

/// 出力1行分
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportRow {
    pub year: i32,
    pub month: u32,
    pub day: u32,
    pub weekday: &'static str,
    pub week_of_month: u32,
    pub cafeteria: String,
    pub meal_label: String,
    pub corner: &'static str,
    pub dish_type: &'static str,
    pub name: String,
    pub price: u32,
    pub cost: u32,
    pub eaters: u32,
}

impl ReportRow {
    pub fn from_record(record: &MenuRecord) -> Self {
        Self {
            year: record.year,
            month: record.date.month(),
            day: record.date.day(),
            weekday: weekday_abbr(record.date.weekday()),
            week_of_month: record.week_of_month,
            cafeteria: record.cafeteria.clone(),
            meal_label: record.meal.korean_label().to_string(),
            corner: record.meal.corner_label(),
            dish_type: DishType::classify(&record.item.name).label(),
            name: record.item.name.clone(),
            price: record.item.price,
            cost: record.item.cost,
            eaters: record.item.eaters,
        }
    }

    /// タブ区切り1行（改行付き）
    ///
    /// 원가 と 식수 の間の空欄は取り込み先シートの列に合わせたもの。
    pub fn to_tsv_line(&self) -> String {
        format!(
            "{}\t{}\t{}\t{}\t{}\t{}\t{}\t{}\t{}\t{}\t{}\t{}\t\t{}\n",
            self.year,
            self.month,
            self.day,
            self.weekday,
            self.week_of_month,
            self.cafeteria,
            self.meal_label,
            self.corner,
            self.dish_type,
            self.name,
            self.price,
            self.cost,
            self.eaters,
        )
    }
}

/// 日付 → 끼니順 で安定ソート
pub fn sort_records(records: &mut [MenuRecord]) {
    records.sort_by_key(|r| (r.date, r.meal.rank()));
}

pub fn to_rows(records: &[MenuRecord]) -> Vec<ReportRow> {
    records.iter().map(ReportRow::from_record).collect()
}

/// レコード列をタブ区切りテキストにする（0件なら空文字）
pub fn render_report(records: &[MenuRecord]) -> String {
    records
        .iter()
        .map(|r| ReportRow::from_record(r).to_tsv_line())
        .collect()
}
