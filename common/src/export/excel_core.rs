//! Excel生成（共通ライブラリ）
//!
//! タブ区切りと同じ列構成で1シートに書き出す

use crate::error::{Error, Result};
use crate::report::{ReportRow, REPORT_HEADERS};
use rust_xlsxwriter::*;

/// 列幅（文字数）
const COLUMN_WIDTHS: [f64; 14] = [
    6.0, 4.0, 4.0, 5.0, 5.0, 12.0, 6.0, 9.0, 6.0, 28.0, 8.0, 8.0, 6.0, 6.0,
];

/// Excelをバッファに生成
///
/// # Arguments
/// * `rows` - 出力行
/// * `sheet_name` - シート名（通常は식당名）
pub fn generate_excel_buffer(rows: &[ReportRow], sheet_name: &str) -> Result<Vec<u8>> {
    let mut workbook = Workbook::new();

    let header_format = Format::new()
        .set_bold()
        .set_background_color(Color::RGB(0xF5F5F5))
        .set_align(FormatAlign::Center)
        .set_border(FormatBorder::Thin)
        .set_border_color(Color::RGB(0xAAAAAA));

    let worksheet = workbook.add_worksheet();
    worksheet
        .set_name(sheet_name)
        .map_err(|e| Error::Excel(format!("시트 이름 설정 오류: {}", e)))?;

    for (col, width) in COLUMN_WIDTHS.iter().enumerate() {
        worksheet
            .set_column_width(col as u16, *width)
            .map_err(|e| Error::Excel(format!("열 너비 설정 오류: {}", e)))?;
    }

    for (col, header) in REPORT_HEADERS.iter().enumerate() {
        worksheet
            .write_string_with_format(0, col as u16, *header, &header_format)
            .map_err(|e| Error::Excel(format!("머리글 쓰기 오류: {}", e)))?;
    }
    worksheet
        .set_freeze_panes(1, 0)
        .map_err(|e| Error::Excel(format!("틀 고정 오류: {}", e)))?;

    for (i, row) in rows.iter().enumerate() {
        write_row(worksheet, i as u32 + 1, row)
            .map_err(|e| Error::Excel(format!("{}행 쓰기 오류: {}", i + 1, e)))?;
    }

    workbook
        .save_to_buffer()
        .map_err(|e| Error::Excel(format!("Excel 저장 오류: {}", e)))
}

fn write_row(worksheet: &mut Worksheet, r: u32, row: &ReportRow) -> std::result::Result<(), XlsxError> {
    worksheet.write_number(r, 0, row.year)?;
    worksheet.write_number(r, 1, row.month)?;
    worksheet.write_number(r, 2, row.day)?;
    worksheet.write_string(r, 3, row.weekday)?;
    worksheet.write_number(r, 4, row.week_of_month)?;
    worksheet.write_string(r, 5, &row.cafeteria)?;
    worksheet.write_string(r, 6, &row.meal_label)?;
    worksheet.write_string(r, 7, row.corner)?;
    worksheet.write_string(r, 8, row.dish_type)?;
    worksheet.write_string(r, 9, &row.name)?;
    worksheet.write_number(r, 10, row.price)?;
    worksheet.write_number(r, 11, row.cost)?;
    // 12列目（비고）は空欄
    worksheet.write_number(r, 13, row.eaters)?;
    Ok(())
}
