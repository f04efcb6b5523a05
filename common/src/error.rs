//! エラー型定義

use thiserror::Error;

/// 共通エラー型
#[derive(Error, Debug)]
pub enum Error {
    /// 日付ヘッダのトークンが暦上ありえない月日を指している
    #[error("날짜 헤더 오류: {token} ({year}년 {month}월 {day}일은 존재하지 않습니다)")]
    InvalidDate {
        token: String,
        year: i32,
        month: u32,
        day: u32,
    },

    #[error("Excel error: {0}")]
    Excel(String),
}

/// Result型エイリアス
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_invalid_date() {
        let error = Error::InvalidDate {
            token: "13/40(월)".to_string(),
            year: 2024,
            month: 13,
            day: 40,
        };
        let display = format!("{}", error);
        assert!(display.contains("13/40(월)"));
        assert!(display.contains("2024년 13월 40일"));
    }

    #[test]
    fn test_error_display_excel() {
        let error = Error::Excel("시트 이름 오류".to_string());
        assert_eq!(format!("{}", error), "Excel error: 시트 이름 오류");
    }
}
