//! テスト用ユーティリティ関数
//!
//! 複数のテストモジュールで使用される共通のヘルパー関数を提供します。
#![cfg(test)]

use crate::export::{
    ExportDocument,
    TranslationRow,
};

/// テスト用の TranslationRow を作成する
///
/// # Arguments
/// * `key` - 翻訳キー
/// * `values` - (言語コード, 翻訳値) のペア
pub(crate) fn row(key: &str, values: &[(&str, &str)]) -> TranslationRow {
    TranslationRow {
        key: key.to_string(),
        values: values
            .iter()
            .map(|(language, value)| ((*language).to_string(), (*value).to_string()))
            .collect(),
    }
}

/// テスト用の 2 行 × 2 言語のドキュメントを作成する
///
/// `block.dirt` の `zh_cn` だけ値が欠けている（プレースホルダ置換の確認用）。
pub(crate) fn sample_document() -> ExportDocument {
    ExportDocument {
        languages: vec!["en_us".to_string(), "zh_cn".to_string()],
        rows: vec![
            row("block.stone", &[("en_us", "Stone"), ("zh_cn", "石头")]),
            row("block.dirt", &[("en_us", "Dirt")]),
        ],
    }
}
