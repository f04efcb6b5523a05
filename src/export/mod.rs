pub mod excel;

use crate::cli::OutputFormat;
use crate::error::Result;
use coop_menu_common::report::to_rows;
use coop_menu_common::{render_report, MenuRecord};
use std::path::{Path, PathBuf};

/// 出力先パスを決める（フォルダ・拡張子なしなら `<title>.<ext>` を付ける）
pub fn output_path_for_format(output: &Path, title: &str, format: OutputFormat) -> PathBuf {
    if output.is_dir() || output.extension().is_none() {
        output.join(format!("{}.{}", title, format.extension()))
    } else {
        output.to_path_buf()
    }
}

/// レコードをファイルに書き出す
///
/// # Returns
/// 実際に書き出したパス
pub fn export_records(
    records: &[MenuRecord],
    format: OutputFormat,
    output: &Path,
    title: &str,
    cafeteria: &str,
) -> Result<PathBuf> {
    let output_path = output_path_for_format(output, title, format);

    match format {
        OutputFormat::Tsv => {
            if let Some(parent) = output_path.parent() {
                if !parent.as_os_str().is_empty() {
                    std::fs::create_dir_all(parent)?;
                }
            }
            std::fs::write(&output_path, render_report(records))?;
        }
        OutputFormat::Excel => {
            excel::generate_excel(&to_rows(records), &output_path, cafeteria)?;
        }
    }

    Ok(output_path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_output_path_for_directory() {
        let dir = tempdir().unwrap();
        let path = output_path_for_format(dir.path(), "학생회관", OutputFormat::Excel);
        assert_eq!(path, dir.path().join("학생회관.xlsx"));
    }

    #[test]
    fn test_output_path_with_extension() {
        let path = output_path_for_format(Path::new("out/report.txt"), "x", OutputFormat::Tsv);
        assert_eq!(path, PathBuf::from("out/report.txt"));
    }

    #[test]
    fn test_export_empty_tsv() {
        let dir = tempdir().unwrap();
        let path = export_records(&[], OutputFormat::Tsv, &dir.path().join("a.tsv"), "a", "식당").unwrap();
        assert_eq!(std::fs::read_to_string(path).unwrap(), "");
    }
}
