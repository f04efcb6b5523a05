use clap::{Parser, Subcommand};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "coop-menu")]
#[command(about = "학생식당 주간 식단표를 스프레드시트용 탭 구분 데이터로 변환", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// 詳細ログを出力
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// 献立テキストを1件変換
    Convert {
        /// リクエストJSON（year, cafeteria, rawText, selectedMeals）
        #[arg(short, long, conflicts_with_all = ["input", "selections"])]
        request: Option<PathBuf>,

        /// 貼り付けた献立テキストファイル
        #[arg(short, long)]
        input: Option<PathBuf>,

        /// 選択끼니（例: "mon:breakfast,mon:lunch_1,tue:dinner"）
        #[arg(short, long)]
        selections: Option<String>,

        /// 年（省略時は今年）
        #[arg(short, long)]
        year: Option<i32>,

        /// 식당名（省略時は設定値）
        #[arg(short, long)]
        cafeteria: Option<String>,

        /// 選択끼니を対話的に入力
        #[arg(long, conflicts_with = "selections")]
        interactive: bool,

        /// 出力形式 (tsv/excel)
        #[arg(short, long)]
        format: Option<OutputFormat>,

        /// 出力ファイル（TSVは省略時に標準出力）
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// フォルダ内のリクエストJSONを一括変換
    Batch {
        /// リクエストJSONのフォルダ
        #[arg(required = true)]
        folder: PathBuf,

        /// 出力先フォルダ（省略時はリクエストと同じ場所）
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// 出力形式 (tsv/excel)
        #[arg(short, long)]
        format: Option<OutputFormat>,
    },

    /// 設定を表示/編集
    Config {
        /// 既定の식당名を設定
        #[arg(long)]
        set_cafeteria: Option<String>,

        /// 既定の出力形式を設定
        #[arg(long)]
        set_format: Option<OutputFormat>,

        /// 設定を表示
        #[arg(long)]
        show: bool,
    },
}

/// 出力形式
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// タブ区切りテキスト
    #[default]
    Tsv,
    /// Excel (.xlsx)
    Excel,
}

impl OutputFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            OutputFormat::Tsv => "tsv",
            OutputFormat::Excel => "xlsx",
        }
    }
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "tsv" | "text" | "txt" => Ok(OutputFormat::Tsv),
            "excel" | "xlsx" => Ok(OutputFormat::Excel),
            _ => Err(format!("Unknown format: {}. Use tsv or excel", s)),
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Tsv => write!(f, "tsv"),
            OutputFormat::Excel => write!(f, "excel"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_output_format_from_str() {
        assert_eq!("tsv".parse::<OutputFormat>(), Ok(OutputFormat::Tsv));
        assert_eq!("XLSX".parse::<OutputFormat>(), Ok(OutputFormat::Excel));
        assert!("pdf".parse::<OutputFormat>().is_err());
    }

    #[test]
    fn test_parse_convert_args() {
        let cli = Cli::try_parse_from([
            "coop-menu",
            "convert",
            "-i",
            "menu.txt",
            "-s",
            "mon:breakfast",
            "-y",
            "2024",
            "-c",
            "학생회관",
        ])
        .unwrap();

        match cli.command {
            Commands::Convert { input, selections, year, cafeteria, format, .. } => {
                assert_eq!(input, Some(PathBuf::from("menu.txt")));
                assert_eq!(selections.as_deref(), Some("mon:breakfast"));
                assert_eq!(year, Some(2024));
                assert_eq!(cafeteria.as_deref(), Some("학생회관"));
                assert!(format.is_none());
            }
            _ => panic!("Expected Convert"),
        }
    }

    #[test]
    fn test_request_conflicts_with_input() {
        let result = Cli::try_parse_from([
            "coop-menu", "convert", "-r", "req.json", "-i", "menu.txt",
        ]);
        assert!(result.is_err());
    }
}
