//! 끼니別セクションの解析
//!
//! 貼り付けられた献立テキストを 조식/중식/석식/매점 の見出しで区切り、
//! セクションごとに以下を抽出する。
//!
//! 1. 代表メニュー: 空行区切りのブロックごとに最初の `■` 行
//! 2. 数値セット: 칼로리〜비율 の行をまとめた (식단가, 원가, 식수)
//!
//! 매점 セクションと 그린샐러드 を含むセクションは丸ごと対象外。

use regex::Regex;

/// セクション見出し
pub const SECTION_MARKERS: [&str; 4] = ["조식", "중식", "석식", "매점"];

/// 代表メニュー行の記号
pub const ITEM_GLYPH: &str = "■";

const SNACK_SHOP: &str = "매점";
const GREEN_SALAD: &str = "그린샐러드";

/// 数値セットを構成する行の見出し
const NUMBER_KEYWORDS: [&str; 5] = ["칼로리", "식수", "원가", "식단가", "비율"];
/// セット終端の見出し
const SET_TERMINATOR: &str = "비율";

const PRICE_KEY: &str = "식단가";
const COST_KEY: &str = "원가";
const EATERS_KEY: &str = "식수";

lazy_static::lazy_static! {
    static ref MARKER_RE: Regex = Regex::new(&SECTION_MARKERS.join("|")).unwrap();
    static ref BLANK_LINE_RE: Regex = Regex::new(r"\n\s*\n").unwrap();
    static ref PAREN_RE: Regex = Regex::new(r"\(.*?\)").unwrap();
    static ref TRAILING_NUMBER_RE: Regex = Regex::new(r"\s*[0-9]+$").unwrap();
}

/// 数値セット（식단가 / 원가 / 식수）
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NumericSet {
    pub price: u32,
    pub cost: u32,
    pub eaters: u32,
}

/// 1セクション分の抽出結果
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MenuSection {
    /// 代表メニュー名（抽出順）
    pub names: Vec<String>,
    /// 数値セット（抽出順）
    pub numbers: Vec<NumericSet>,
}

/// テキストを見出し直前で分割する
///
/// 最初の見出しより前のテキストはセクションとして扱わない。
pub fn split_sections(raw_text: &str) -> Vec<&str> {
    let starts: Vec<usize> = MARKER_RE.find_iter(raw_text).map(|m| m.start()).collect();

    starts
        .iter()
        .enumerate()
        .map(|(i, &start)| {
            let end = starts.get(i + 1).copied().unwrap_or(raw_text.len());
            &raw_text[start..end]
        })
        .collect()
}

/// 対象外セクションの判定（매점 / 그린샐러드）
pub fn is_excluded_section(section: &str) -> bool {
    section.starts_with(SNACK_SHOP) || section.contains(GREEN_SALAD)
}

/// 全セクションを解析する
///
/// 空・対象外のセクションは結果に含めない。
pub fn parse_sections(raw_text: &str) -> Vec<MenuSection> {
    split_sections(raw_text)
        .into_iter()
        .map(str::trim)
        .filter(|section| !section.is_empty())
        .filter(|section| !is_excluded_section(section))
        .map(|section| MenuSection {
            names: extract_representative_names(section),
            numbers: extract_numeric_sets(section),
        })
        .collect()
}

/// ブロックごとの代表メニューを抽出
pub fn extract_representative_names(section: &str) -> Vec<String> {
    let mut names = Vec::new();

    for block in BLANK_LINE_RE.split(section) {
        let first_item = block
            .lines()
            .map(str::trim)
            .find(|line| line.starts_with(ITEM_GLYPH));

        if let Some(line) = first_item {
            let name = clean_item_name(line);
            if !name.contains(GREEN_SALAD) {
                names.push(name);
            }
        }
    }

    names
}

/// 代表メニュー行からメニュー名を取り出す
///
/// `■ 된장찌개(소)(대두) 2` → `된장찌개`
pub fn clean_item_name(line: &str) -> String {
    let without_glyph = line.replace(ITEM_GLYPH, "");
    let without_parens = PAREN_RE.replace_all(&without_glyph, "");
    let without_number = TRAILING_NUMBER_RE.replace(&without_parens, "");
    without_number.trim().to_string()
}

/// 칼로리〜비율 の行を数値セットとして抽出
///
/// 비율 行でセットを確定する。비율 で閉じられない末尾の行は捨てる。
pub fn extract_numeric_sets(section: &str) -> Vec<NumericSet> {
    let mut sets = Vec::new();
    let mut buffer: Vec<&str> = Vec::new();

    for line in section.lines().map(str::trim) {
        if !NUMBER_KEYWORDS.iter().any(|k| line.starts_with(k)) {
            continue;
        }
        buffer.push(line);

        if line.starts_with(SET_TERMINATOR) {
            sets.push(NumericSet {
                price: extract_value(&buffer, PRICE_KEY),
                cost: extract_value(&buffer, COST_KEY),
                eaters: extract_value(&buffer, EATERS_KEY),
            });
            buffer.clear();
        }
    }

    sets
}

/// キーを含む最初の行の数字を取り出す（見つからない・読めない場合は0）
fn extract_value(lines: &[&str], key: &str) -> u32 {
    lines
        .iter()
        .find(|line| line.contains(key))
        .map(|line| parse_digits(line))
        .unwrap_or(0)
}

/// 数字以外を除去して整数化（`5,000원` → 5000）
///
/// `i32::MAX` を超える値は0として扱う。
fn parse_digits(text: &str) -> u32 {
    let digits: String = text.chars().filter(|c| c.is_ascii_digit()).collect();
    digits
        .parse::<i32>()
        .ok()
        .and_then(|value| u32::try_from(value).ok())
        .unwrap_or(0)
}
