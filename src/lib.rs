//! mc-lang-table
//!
//! Minecraft 翻訳データのビューア/クイズアプリのコア実装。
//! 翻訳キーから短縮コードを導出する Code Mapper と、
//! 翻訳テーブルを各種交換フォーマットへ変換する Export Engine を提供する。

pub mod code_map;
pub mod export;
pub mod input;
pub mod quiz;
mod test_utils;

// 主要な型を再エクスポート
pub use export::{
    ExportDocument,
    ExportFormat,
    ExportOutput,
    MISSING_VALUE,
    TranslationRow,
};
