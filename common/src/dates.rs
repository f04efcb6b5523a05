//! 日付ヘッダの抽出
//!
//! `03/04(월) 03/05(화) ...` のような行から、指定年の日付列を作る。

use crate::error::{Error, Result};
use chrono::{Datelike, NaiveDate, Weekday};
use regex::Regex;

lazy_static::lazy_static! {
    // 行内のどこかに MM/DD を含む
    static ref DATE_LINE_RE: Regex = Regex::new(r"[0-9]{2}/[0-9]{2}").unwrap();
    // トークン先頭の MM/DD（後続の "(월)" 等は無視）
    static ref DATE_TOKEN_RE: Regex = Regex::new(r"^([0-9]{2})/([0-9]{2})").unwrap();
}

/// ヘッダ行から日付を抽出する
///
/// 出現順（行順→トークン順）のまま返す。ソート・重複除去はしない。
///
/// # Errors
/// 年月日が暦上存在しない（範囲外の年を含む）トークンがあれば `Error::InvalidDate`
pub fn extract_dates_from_header(year: i32, raw_text: &str) -> Result<Vec<NaiveDate>> {
    let mut dates = Vec::new();

    for line in raw_text.lines() {
        if !DATE_LINE_RE.is_match(line) {
            continue;
        }

        for token in line.split_whitespace() {
            let Some(caps) = DATE_TOKEN_RE.captures(token) else {
                continue;
            };
            // 2桁の数字なのでパースは失敗しない
            let month: u32 = caps[1].parse().unwrap_or(0);
            let day: u32 = caps[2].parse().unwrap_or(0);

            let date = NaiveDate::from_ymd_opt(year, month, day).ok_or_else(|| Error::InvalidDate {
                token: token.to_string(),
                year,
                month,
                day,
            })?;
            dates.push(date);
        }
    }

    Ok(dates)
}

/// 曜日の英語名（小文字）
pub fn weekday_name(weekday: Weekday) -> &'static str {
    match weekday {
        Weekday::Mon => "monday",
        Weekday::Tue => "tuesday",
        Weekday::Wed => "wednesday",
        Weekday::Thu => "thursday",
        Weekday::Fri => "friday",
        Weekday::Sat => "saturday",
        Weekday::Sun => "sunday",
    }
}

/// 曜日の3文字略称（mon, tue, …）
pub fn weekday_abbr(weekday: Weekday) -> &'static str {
    &weekday_name(weekday)[..3]
}

/// 月内の週番号（1日〜7日が第1週）
pub fn week_of_month(date: NaiveDate) -> u32 {
    (date.day() - 1) / 7 + 1
}
