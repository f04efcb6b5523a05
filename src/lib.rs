//! coop-menu
//!
//! 学生食堂の週間献立テキストをスプレッドシート用データに変換するCLIのライブラリ部。
//! 変換ロジック本体は coop_menu_common にある。

pub mod cli;
pub mod config;
pub mod error;
pub mod input;
pub mod interactive;
pub mod batch;
pub mod export;
