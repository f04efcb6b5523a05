//! Coop Menu Common Library
//!
//! 学生食堂の週間献立テキストをタブ区切りレポートに変換するコア。
//! CLIから利用される型と変換処理。

pub mod types;
pub mod error;
pub mod dates;
pub mod sections;
pub mod assembler;
pub mod matcher;
pub mod report;
pub mod convert;
pub mod export;

pub use types::{DishType, MealSlot, MenuItem, MenuRecord, MenuRequest, SelectionEntry};
pub use error::{Error, Result};
pub use dates::extract_dates_from_header;
pub use assembler::parse_menu_items;
pub use matcher::CountMismatch;
pub use report::{render_report, ReportRow, REPORT_HEADERS};
pub use convert::{convert, convert_request, Conversion};
