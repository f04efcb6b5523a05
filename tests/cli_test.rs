//! バイナリ実行テスト
//!
//! 失敗時に利用者が見るメッセージと終了コードを検証

use std::path::Path;
use std::process::{Command, Output};
use tempfile::tempdir;

fn run_convert(home: &Path, request: &Path) -> Output {
    Command::new(env!("CARGO_BIN_EXE_coop-menu"))
        .env("HOME", home)
        .env_remove("COOP_MENU_CAFETERIA")
        .arg("convert")
        .arg("--request")
        .arg(request)
        .output()
        .expect("Failed to run coop-menu")
}

#[test]
fn test_convert_count_mismatch_shows_message() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("mismatch.json");
    std::fs::write(
        &path,
        r#"{"year":2024,"cafeteria":"학생회관","rawText":"03/04\n조식\n■ 죽\n비율 1","selectedMeals":[]}"#,
    )
    .unwrap();

    let output = run_convert(dir.path(), &path);
    let stderr = String::from_utf8_lossy(&output.stderr);

    assert!(!output.status.success());
    assert!(
        stderr.contains("에러: 선택한 끼니 개수(0)와 파싱된 메뉴 개수(1)가 다릅니다."),
        "stderr: {}",
        stderr
    );
    assert!(!stderr.contains("CountMismatch {"), "stderr: {}", stderr);
    assert!(output.stdout.is_empty());
}

#[test]
fn test_convert_invalid_date_shows_message() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("invalid.json");
    std::fs::write(
        &path,
        r#"{"year":2023,"cafeteria":"학생회관","rawText":"02/29(목)\n조식\n■ 죽\n비율 1","selectedMeals":[{"day":"thu","meal":"breakfast"}]}"#,
    )
    .unwrap();

    let output = run_convert(dir.path(), &path);
    let stderr = String::from_utf8_lossy(&output.stderr);

    assert!(!output.status.success());
    assert!(stderr.contains("2023년 2월 29일은 존재하지 않습니다"), "stderr: {}", stderr);
    assert!(!stderr.contains("InvalidDate {"), "stderr: {}", stderr);
}

#[test]
fn test_convert_success_writes_report_to_stdout() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("ok.json");
    std::fs::write(
        &path,
        r#"{"year":2024,"cafeteria":"학생회관","rawText":"03/04(월)\n조식\n■ 죽\n식단가 3000\n비율 1","selectedMeals":[{"day":"mon","meal":"breakfast"}]}"#,
    )
    .unwrap();

    let output = run_convert(dir.path(), &path);
    let stdout = String::from_utf8_lossy(&output.stdout);

    assert!(output.status.success(), "stderr: {}", String::from_utf8_lossy(&output.stderr));
    assert_eq!(stdout.lines().count(), 1);
    assert!(stdout.contains("죽"));
}

#[test]
fn test_convert_verbose_reports_counts() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("ok.json");
    std::fs::write(
        &path,
        r#"{"year":2024,"cafeteria":"학생회관","rawText":"03/04(월)\n조식\n■ 죽\n비율 1\n중식\n■ 비빔밥\n비율 1","selectedMeals":[{"day":"mon","meal":"breakfast"},{"day":"mon","meal":"lunch_1"}]}"#,
    )
    .unwrap();

    let output = Command::new(env!("CARGO_BIN_EXE_coop-menu"))
        .env("HOME", dir.path())
        .env_remove("COOP_MENU_CAFETERIA")
        .args(["--verbose", "convert", "--request"])
        .arg(&path)
        .output()
        .expect("Failed to run coop-menu");
    let stderr = String::from_utf8_lossy(&output.stderr);

    assert!(output.status.success(), "stderr: {}", stderr);
    assert!(stderr.contains("파싱된 메뉴: 2개 / 선택한 끼니: 2개"), "stderr: {}", stderr);
    assert!(stderr.contains("연도: 2024 / 식당: 학생회관"), "stderr: {}", stderr);
}
