//! 変換パイプライン
//!
//! 生テキスト → 日付 / メニュー → 選択と突き合わせ → ソート → タブ区切り

use crate::assembler::parse_menu_items;
use crate::dates::extract_dates_from_header;
use crate::error::Result;
use crate::matcher::{match_selections, CountMismatch};
use crate::report::{render_report, sort_records};
use crate::types::{MenuRecord, MenuRequest, SelectionEntry};

/// 変換結果
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Conversion {
    /// ソート済みレコード
    Records(Vec<MenuRecord>),
    /// 選択数とメニュー数が合わない
    CountMismatch(CountMismatch),
}

impl Conversion {
    /// 文字列出力（不一致の場合はエラーメッセージ）
    pub fn render(&self) -> String {
        match self {
            Conversion::Records(records) => render_report(records),
            Conversion::CountMismatch(mismatch) => mismatch.to_string(),
        }
    }
}

/// リクエストを変換する
///
/// # Errors
/// 日付ヘッダに存在しない月日があれば `Error::InvalidDate`
pub fn convert_request(request: &MenuRequest) -> Result<Conversion> {
    convert_parts(
        request.year,
        &request.cafeteria,
        &request.raw_text,
        &request.selected_meals,
    )
}

/// 変換してテキストを返す
///
/// 件数不一致は `Ok` のメッセージ文字列として返る。
pub fn convert(
    year: i32,
    cafeteria: &str,
    raw_text: &str,
    selections: &[SelectionEntry],
) -> Result<String> {
    Ok(convert_parts(year, cafeteria, raw_text, selections)?.render())
}

fn convert_parts(
    year: i32,
    cafeteria: &str,
    raw_text: &str,
    selections: &[SelectionEntry],
) -> Result<Conversion> {
    let dates = extract_dates_from_header(year, raw_text)?;
    let items = parse_menu_items(raw_text);

    match match_selections(year, cafeteria, &dates, &items, selections) {
        Ok(mut records) => {
            sort_records(&mut records);
            Ok(Conversion::Records(records))
        }
        Err(mismatch) => Ok(Conversion::CountMismatch(mismatch)),
    }
}
