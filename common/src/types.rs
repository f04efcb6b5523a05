//! 献立表変換の型定義
//!
//! - MealSlot: 끼니（朝食/昼食コーナー/夕食）の区分
//! - MenuItem: 代表メニュー1件と数値セット
//! - SelectionEntry / MenuRequest: 呼び出し側の入力
//! - MenuRecord: 日付と突き合わせ済みのレコード

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

/// 끼니区分
///
/// 未知の値は `Other` としてそのまま保持し、出力時もそのまま表示する。
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum MealSlot {
    Breakfast,
    Lunch,
    Lunch1,
    Lunch2,
    Lunch3,
    Lunch4,
    Lunch5A,
    Lunch5B,
    Dinner,
    Other(String),
}

impl MealSlot {
    /// 入力値の文字列表現
    pub fn as_str(&self) -> &str {
        match self {
            MealSlot::Breakfast => "breakfast",
            MealSlot::Lunch => "lunch",
            MealSlot::Lunch1 => "lunch_1",
            MealSlot::Lunch2 => "lunch_2",
            MealSlot::Lunch3 => "lunch_3",
            MealSlot::Lunch4 => "lunch_4",
            MealSlot::Lunch5A => "lunch_5a",
            MealSlot::Lunch5B => "lunch_5b",
            MealSlot::Dinner => "dinner",
            MealSlot::Other(raw) => raw,
        }
    }

    /// 並び順（朝=1, 昼=2, 夕=3, 不明=99）
    pub fn rank(&self) -> u32 {
        match self {
            MealSlot::Breakfast => 1,
            MealSlot::Lunch
            | MealSlot::Lunch1
            | MealSlot::Lunch2
            | MealSlot::Lunch3
            | MealSlot::Lunch4
            | MealSlot::Lunch5A
            | MealSlot::Lunch5B => 2,
            MealSlot::Dinner => 3,
            MealSlot::Other(_) => 99,
        }
    }

    /// 韓国語の끼니名
    pub fn korean_label(&self) -> &str {
        match self {
            MealSlot::Breakfast => "조식",
            MealSlot::Dinner => "석식",
            MealSlot::Other(raw) => raw,
            _ => "중식",
        }
    }

    /// コーナー名（番号なしは1コーナー扱い）
    pub fn corner_label(&self) -> &'static str {
        match self {
            MealSlot::Lunch2 => "2코너",
            MealSlot::Lunch3 => "3코너",
            MealSlot::Lunch4 => "4코너",
            MealSlot::Lunch5A => "5코너(A)",
            MealSlot::Lunch5B => "5코너(B)",
            _ => "1코너",
        }
    }
}

impl From<&str> for MealSlot {
    fn from(value: &str) -> Self {
        match value {
            "breakfast" => MealSlot::Breakfast,
            "lunch" => MealSlot::Lunch,
            "lunch_1" => MealSlot::Lunch1,
            "lunch_2" => MealSlot::Lunch2,
            "lunch_3" => MealSlot::Lunch3,
            "lunch_4" => MealSlot::Lunch4,
            "lunch_5a" => MealSlot::Lunch5A,
            "lunch_5b" => MealSlot::Lunch5B,
            "dinner" => MealSlot::Dinner,
            other => MealSlot::Other(other.to_string()),
        }
    }
}

impl From<String> for MealSlot {
    fn from(value: String) -> Self {
        MealSlot::from(value.as_str())
    }
}

impl From<MealSlot> for String {
    fn from(slot: MealSlot) -> Self {
        match slot {
            MealSlot::Other(raw) => raw,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for MealSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// 料理区分
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DishType {
    /// 국밥
    Gukbap,
    /// 백반
    Baekban,
}

impl DishType {
    /// メニュー名から判定
    pub fn classify(name: &str) -> Self {
        if name.contains("국밥") {
            DishType::Gukbap
        } else {
            DishType::Baekban
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            DishType::Gukbap => "국밥",
            DishType::Baekban => "백반",
        }
    }
}

/// 代表メニューと数値セット
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuItem {
    pub name: String,   // 메뉴명
    pub price: u32,     // 식단가
    pub cost: u32,      // 원가
    pub eaters: u32,    // 식수
}

/// 選択された끼니（曜日 + 区分）
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectionEntry {
    /// mon, tue, wed … の3文字
    pub day: String,
    pub meal: MealSlot,
}

impl SelectionEntry {
    pub fn new(day: impl Into<String>, meal: impl Into<MealSlot>) -> Self {
        Self {
            day: day.into(),
            meal: meal.into(),
        }
    }
}

/// 変換リクエスト
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MenuRequest {
    pub year: i32,
    pub cafeteria: String,
    pub raw_text: String,
    #[serde(default)]
    pub selected_meals: Vec<SelectionEntry>,
}

/// 日付と突き合わせ済みのレコード
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuRecord {
    pub year: i32,
    pub date: NaiveDate,
    pub week_of_month: u32,
    pub cafeteria: String,
    pub meal: MealSlot,
    pub item: MenuItem,
}
