use chrono::Datelike;
use clap::Parser;
use coop_menu::{batch, cli, config, error, export, input, interactive};
use cli::{Cli, Commands, OutputFormat};
use config::Config;
use coop_menu_common::{
    convert_request, extract_dates_from_header, parse_menu_items, render_report, Conversion,
    MenuRequest,
};
use error::{CoopMenuError, Result};
use std::path::{Path, PathBuf};

fn main() {
    // Debug 表記ではなくメッセージ本文を出して終了コード1
    if let Err(e) = run() {
        eprintln!("{}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let config = Config::load()?;

    match cli.command {
        Commands::Convert { request, input, selections, year, cafeteria, interactive, format, output } => {
            // 標準出力はレポート用なので進捗は stderr に出す
            eprintln!("🍱 coop-menu - 식단표 변환\n");

            let request = match request {
                Some(path) => {
                    eprintln!("[1/3] 요청 파일 읽는 중: {}", path.display());
                    let mut request = input::load_request(&path)?;
                    if let Some(year) = year {
                        request.year = year;
                    }
                    if let Some(cafeteria) = cafeteria {
                        request.cafeteria = cafeteria;
                    }
                    request
                }
                None => {
                    let input_path = input.ok_or_else(|| {
                        CoopMenuError::MissingInput("--input 또는 --request 를 지정하세요".into())
                    })?;
                    eprintln!("[1/3] 식단표 읽는 중: {}", input_path.display());
                    build_request(&config, &input_path, selections.as_deref(), year, cafeteria, interactive)?
                }
            };

            if request.cafeteria.trim().is_empty() {
                eprintln!("⚠ 식당 이름이 비어 있습니다 (--cafeteria 또는 config --set-cafeteria)");
            }

            eprintln!("[2/3] 변환 중...");
            let records = match convert_request(&request)? {
                Conversion::Records(records) => records,
                Conversion::CountMismatch(mismatch) => return Err(mismatch.into()),
            };
            if cli.verbose {
                eprintln!("  연도: {} / 식당: {}", request.year, request.cafeteria);
                eprintln!("  파싱된 메뉴: {}개 / 선택한 끼니: {}개", records.len(), request.selected_meals.len());
            }
            eprintln!("✔ {}행 생성\n", records.len());

            let format = format.unwrap_or(config.default_format);
            eprintln!("[3/3] 출력 중... ({})", format);

            match (format, output) {
                (OutputFormat::Tsv, None) => {
                    print!("{}", render_report(&records));
                }
                (format, output) => {
                    let output = output.unwrap_or_else(|| PathBuf::from("."));
                    let title = export::excel::sheet_name_for(&request.cafeteria);
                    let written = export::export_records(&records, format, &output, &title, &request.cafeteria)?;
                    eprintln!("✔ 저장: {}", written.display());
                }
            }

            eprintln!("\n✅ 변환 완료");
        }

        Commands::Batch { folder, output, format } => {
            println!("📂 coop-menu - 일괄 변환\n");

            println!("[1/2] 요청 파일 검색 중...");
            let requests = batch::scan_requests(&folder)?;
            println!("✔ {}개의 요청 파일\n", requests.len());

            if requests.is_empty() {
                return Err(CoopMenuError::FileNotFound(format!(
                    "{} 안에 .json 요청 파일이 없습니다",
                    folder.display()
                )));
            }

            let format = format.unwrap_or(config.default_format);
            println!("[2/2] 변환 중... ({})", format);
            let outcomes = batch::convert_batch(&requests, output.as_deref(), format);

            let mut failed = 0;
            for outcome in &outcomes {
                match &outcome.result {
                    Ok(success) => {
                        if cli.verbose {
                            println!("  ✔ {} → {} ({}행)", outcome.request.display(), success.output.display(), success.rows);
                        }
                    }
                    Err(e) => {
                        failed += 1;
                        eprintln!("  ✗ {}: {}", outcome.request.display(), e);
                    }
                }
            }

            println!("\n성공 {} / 실패 {}", outcomes.len() - failed, failed);
            if failed > 0 {
                return Err(CoopMenuError::BatchFailed(failed));
            }
            println!("✅ 일괄 변환 완료");
        }

        Commands::Config { set_cafeteria, set_format, show } => {
            let mut config = config;

            if let Some(name) = set_cafeteria {
                config.set_cafeteria(name)?;
                println!("✔ 기본 식당을 설정했습니다");
            }

            if let Some(format) = set_format {
                config.set_format(format)?;
                println!("✔ 기본 출력 형식을 설정했습니다");
            }

            if show {
                println!("설정:");
                println!("  경로: {}", Config::config_path()?.display());
                println!("  기본 식당: {}", config.cafeteria().unwrap_or_else(|| "미설정".to_string()));
                println!("  기본 출력 형식: {}", config.default_format);
            }
        }
    }

    Ok(())
}

/// テキストファイルとオプションからリクエストを組み立てる
fn build_request(
    config: &Config,
    input_path: &Path,
    selections: Option<&str>,
    year: Option<i32>,
    cafeteria: Option<String>,
    interactive: bool,
) -> Result<MenuRequest> {
    let raw_text = input::read_raw_text(input_path)?;
    let year = year.unwrap_or_else(|| chrono::Local::now().year());
    let cafeteria = cafeteria.or_else(|| config.cafeteria()).unwrap_or_default();

    let selected_meals = if interactive {
        let dates = extract_dates_from_header(year, &raw_text)?;
        let items = parse_menu_items(&raw_text);
        interactive::prompt_selections(&items, &dates)?
    } else {
        let list = selections.ok_or_else(|| {
            CoopMenuError::MissingInput("--selections 또는 --interactive 를 지정하세요".into())
        })?;
        input::parse_selection_list(list)?
    };

    Ok(MenuRequest {
        year,
        cafeteria,
        raw_text,
        selected_meals,
    })
}
