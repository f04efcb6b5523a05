//! フォルダ内のリクエストJSONを一括変換
//!
//! リクエストごとに独立して変換する（rayonで並列）。
//! 1件の失敗は他のリクエストに影響しない。

use crate::cli::OutputFormat;
use crate::error::{CoopMenuError, Result};
use crate::export::export_records;
use crate::input::load_request;
use coop_menu_common::{convert_request, Conversion};
use rayon::prelude::*;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

const REQUEST_EXTENSIONS: &[&str] = &["json", "JSON"];

/// 1件分の変換結果
#[derive(Debug)]
pub struct BatchOutcome {
    pub request: PathBuf,
    pub result: Result<BatchSuccess>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BatchSuccess {
    /// 出力ファイル
    pub output: PathBuf,
    /// 出力行数
    pub rows: usize,
}

/// フォルダ直下のリクエストJSONを列挙（ファイル名順）
pub fn scan_requests(folder: &Path) -> Result<Vec<PathBuf>> {
    if !folder.is_dir() {
        return Err(CoopMenuError::FolderNotFound(folder.display().to_string()));
    }

    let mut requests: Vec<PathBuf> = WalkDir::new(folder)
        .max_depth(1)  // 直下のみ（再帰しない）
        .into_iter()
        .filter_map(|e| e.ok())
        .map(|e| e.into_path())
        .filter(|path| path.is_file())
        .filter(|path| {
            path.extension()
                .map(|ext| REQUEST_EXTENSIONS.iter().any(|&e| e == ext.to_string_lossy()))
                .unwrap_or(false)
        })
        .collect();

    requests.sort_by(|a, b| a.file_name().cmp(&b.file_name()));

    Ok(requests)
}

/// リクエスト1件を変換して書き出す
pub fn convert_file(
    request_path: &Path,
    output_dir: Option<&Path>,
    format: OutputFormat,
) -> Result<BatchSuccess> {
    let request = load_request(request_path)?;

    let records = match convert_request(&request)? {
        Conversion::Records(records) => records,
        Conversion::CountMismatch(mismatch) => return Err(mismatch.into()),
    };

    let stem = request_path
        .file_stem()
        .map(|s| s.to_string_lossy().to_string())
        .unwrap_or_else(|| request.cafeteria.clone());
    let dir = output_dir
        .or_else(|| request_path.parent())
        .unwrap_or_else(|| Path::new("."));
    let target = dir.join(format!("{}.{}", stem, format.extension()));

    let output = export_records(&records, format, &target, &stem, &request.cafeteria)?;

    Ok(BatchSuccess {
        output,
        rows: records.len(),
    })
}

/// 複数リクエストを並列変換（結果は入力順）
pub fn convert_batch(
    requests: &[PathBuf],
    output_dir: Option<&Path>,
    format: OutputFormat,
) -> Vec<BatchOutcome> {
    requests
        .par_iter()
        .map(|request| BatchOutcome {
            request: request.clone(),
            result: convert_file(request, output_dir, format),
        })
        .collect()
}
