//! Tabular export engine.
//!
//! Serializes an in-memory translation table into one of five interchange
//! formats. The formats form a closed variant set behind [`ExportFormat`];
//! adding a format means adding a variant and its renderer, nothing else.

mod csv;
mod json;
mod tsv;
mod xlsx;
mod xml;

use std::collections::HashMap;

use thiserror::Error;

/// 欠けている翻訳値の代わりに出力する全角疑問符
///
/// すべてのフォーマットで一律にこのグリフを使う（空文字列や null にしない）。
pub const MISSING_VALUE: &str = "？";

/// One translation key with its localized values. A language without a
/// value is simply absent from `values`; substitution happens at export
/// time, not here.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TranslationRow {
    /// キー名（例: `block.stone`）
    pub key: String,

    /// 言語コード → 翻訳値のマッピング
    pub values: HashMap<String, String>,
}

impl TranslationRow {
    /// Returns the value for `language`, or [`MISSING_VALUE`] if the row
    /// has no value for it.
    #[must_use]
    pub fn value_for(&self, language: &str) -> &str {
        self.values.get(language).map_or(MISSING_VALUE, String::as_str)
    }
}

/// The immutable table handed to one export operation: the rows plus the
/// ordered list of language columns to include. Column order is exactly
/// `languages`; row order is exactly `rows`. Filtering and sorting are the
/// caller's business.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExportDocument {
    /// 出力する言語コード（この順序のまま列になる）
    pub languages: Vec<String>,

    /// 出力する行（この順序のまま出力される）
    pub rows: Vec<TranslationRow>,
}

/// Errors that may occur while serializing a document.
#[derive(Error, Debug)]
pub enum ExportError {
    /// Error while building the XLSX workbook
    #[error("failed to build XLSX workbook: {0}")]
    Xlsx(#[from] rust_xlsxwriter::XlsxError),
    /// Error while serializing the JSON document
    #[error("failed to serialize JSON document: {0}")]
    Json(#[from] serde_json::Error),
}

/// Output of one export operation. Text formats stay `String`; XLSX is an
/// in-memory workbook buffer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExportOutput {
    Text(String),
    Binary(Vec<u8>),
}

impl ExportOutput {
    /// バイト列として取り出す（ファイル書き込みやダウンロード配信用）
    #[must_use]
    pub fn into_bytes(self) -> Vec<u8> {
        match self {
            Self::Text(text) => text.into_bytes(),
            Self::Binary(bytes) => bytes,
        }
    }

    /// テキストフォーマットの場合のみ文字列を返す
    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(text) => Some(text),
            Self::Binary(_) => None,
        }
    }
}

/// The five supported interchange formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ExportFormat {
    Tsv,
    Csv,
    Json,
    Xml,
    Xlsx,
}

impl ExportFormat {
    /// すべてのフォーマット（一括エクスポート用）
    pub const ALL: [Self; 5] = [Self::Tsv, Self::Csv, Self::Json, Self::Xml, Self::Xlsx];

    /// Get the file extension for this format
    #[must_use]
    pub const fn extension(self) -> &'static str {
        match self {
            Self::Tsv => "tsv",
            Self::Csv => "csv",
            Self::Json => "json",
            Self::Xml => "xml",
            Self::Xlsx => "xlsx",
        }
    }

    /// Get the MIME type the delivery layer should use for this format
    #[must_use]
    pub const fn mime_type(self) -> &'static str {
        match self {
            Self::Tsv => "text/tab-separated-values;charset=utf-8",
            Self::Csv => "text/csv;charset=utf-8",
            Self::Json => "application/json;charset=utf-8",
            Self::Xml => "application/xml;charset=utf-8",
            Self::Xlsx => "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet",
        }
    }

    /// Parse a format from its file extension
    #[must_use]
    pub fn from_extension(extension: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|format| format.extension() == extension)
    }

    /// ダウンロードファイル名。`all` は無フィルタの一括エクスポート
    /// （`table_all.*`）を指す
    #[must_use]
    pub fn file_name(self, all: bool) -> String {
        if all {
            format!("table_all.{}", self.extension())
        } else {
            format!("table.{}", self.extension())
        }
    }

    /// Serializes `doc` into this format's exact byte layout.
    ///
    /// Pure: no file or network I/O happens here, delivery is the caller's
    /// responsibility.
    ///
    /// # Errors
    /// - XLSX ワークブックの構築エラー
    /// - JSON シリアライズエラー
    pub fn serialize(self, doc: &ExportDocument) -> Result<ExportOutput, ExportError> {
        match self {
            Self::Tsv => Ok(ExportOutput::Text(tsv::render(doc))),
            Self::Csv => Ok(ExportOutput::Text(csv::render(doc))),
            Self::Json => Ok(ExportOutput::Text(json::render(doc)?)),
            Self::Xml => Ok(ExportOutput::Text(xml::render(doc))),
            Self::Xlsx => Ok(ExportOutput::Binary(xlsx::render(doc)?)),
        }
    }
}
