//! 言語ファイルの読み込みとドキュメント組み立て
//!
//! 言語ファイルはキー → 翻訳値のフラットな JSON オブジェクト。
//! 正準言語ファイルのキー順がそのまま行順になる。

use std::collections::HashMap;
use std::path::{
    Path,
    PathBuf,
};

use thiserror::Error;

use super::languages::CANONICAL_LANGUAGE;
use crate::export::{
    ExportDocument,
    TranslationRow,
};

/// Errors that may occur while loading source assets.
#[derive(Error, Debug)]
pub enum AssetError {
    /// Error when a language file cannot be read
    #[error("failed to read language file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// Error when a language file is not valid JSON
    #[error("failed to parse language file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    /// Error when a language file value is not a string
    #[error("language file {path} has a non-string value for key {key:?}")]
    NonStringValue { path: PathBuf, key: String },
}

/// 読み込み済みの言語ファイル。ファイル内のキー順を保持する。
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LanguageFile {
    keys: Vec<String>,
    values: HashMap<String, String>,
}

impl LanguageFile {
    /// ファイル内の出現順のキー
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.keys.iter().map(String::as_str)
    }

    /// Returns the localized value for `key`, if present.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }

    /// エントリ数
    #[must_use]
    pub fn len(&self) -> usize {
        self.keys.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }
}

/// 1 つの言語ファイルを読み込む
///
/// # Errors
/// - ファイル読み込みエラー
/// - JSON パースエラー（オブジェクト以外、文字列以外の値を含む）
pub fn load_language_file(path: &Path) -> Result<LanguageFile, AssetError> {
    tracing::debug!("Loading language file: {}", path.display());

    let content = std::fs::read_to_string(path)
        .map_err(|source| AssetError::Io { path: path.to_path_buf(), source })?;
    let entries: serde_json::Map<String, serde_json::Value> = serde_json::from_str(&content)
        .map_err(|source| AssetError::Parse { path: path.to_path_buf(), source })?;

    let mut keys = Vec::with_capacity(entries.len());
    let mut values = HashMap::with_capacity(entries.len());
    for (key, value) in entries {
        let Some(text) = value.as_str() else {
            return Err(AssetError::NonStringValue { path: path.to_path_buf(), key });
        };
        values.insert(key.clone(), text.to_string());
        keys.push(key);
    }

    Ok(LanguageFile { keys, values })
}

/// 言語ディレクトリから [`ExportDocument`] を組み立てる
///
/// `dir` 直下の `{言語コード}.json` を `languages` の順に読み込む。
/// 行は正準言語（`en_us`）ファイルのキー順。値が無い言語は行に
/// 含めず、プレースホルダ置換はエクスポート時に行う。
///
/// # Errors
/// - いずれかの言語ファイルの読み込み・パースエラー（生成は中断）
pub fn build_document(dir: &Path, languages: &[&str]) -> Result<ExportDocument, AssetError> {
    let mut files: HashMap<String, LanguageFile> = HashMap::with_capacity(languages.len() + 1);
    for language in languages {
        let file = load_language_file(&dir.join(format!("{language}.json")))?;
        files.insert((*language).to_string(), file);
    }
    if !files.contains_key(CANONICAL_LANGUAGE) {
        let file = load_language_file(&dir.join(format!("{CANONICAL_LANGUAGE}.json")))?;
        files.insert(CANONICAL_LANGUAGE.to_string(), file);
    }

    let canonical = files.get(CANONICAL_LANGUAGE).cloned().unwrap_or_default();

    let rows = canonical
        .keys()
        .map(|key| {
            let values = languages
                .iter()
                .filter_map(|language| {
                    let value = files.get(*language)?.get(key)?;
                    Some(((*language).to_string(), value.to_string()))
                })
                .collect();
            TranslationRow { key: key.to_string(), values }
        })
        .collect();

    Ok(ExportDocument {
        languages: languages.iter().map(|language| (*language).to_string()).collect(),
        rows,
    })
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::indexing_slicing)]
mod tests {
    use std::fs;

    use googletest::prelude::*;
    use rstest::rstest;
    use tempfile::TempDir;

    use super::*;
    use crate::export::MISSING_VALUE;

    /// `load_language_file`: キー順を保って読み込む
    #[rstest]
    fn test_load_language_file_preserves_order() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("en_us.json");
        fs::write(&path, r#"{"block.stone": "Stone", "block.dirt": "Dirt", "block.sand": "Sand"}"#)
            .unwrap();

        let file = load_language_file(&path).unwrap();

        let keys: Vec<&str> = file.keys().collect();
        assert_that!(keys, elements_are![eq("block.stone"), eq("block.dirt"), eq("block.sand")]);
        assert_that!(file.get("block.dirt"), eq(Some("Dirt")));
        assert_that!(file.get("block.air"), eq(None));
    }

    /// `load_language_file`: ファイルが無い場合はエラー
    #[rstest]
    fn test_load_language_file_missing() {
        let temp_dir = TempDir::new().unwrap();

        let result = load_language_file(&temp_dir.path().join("en_us.json"));

        assert_that!(matches!(result, Err(AssetError::Io { .. })), eq(true));
    }

    /// `load_language_file`: JSON パースエラー
    #[rstest]
    fn test_load_language_file_invalid_json() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("en_us.json");
        fs::write(&path, "invalid json").unwrap();

        let result = load_language_file(&path);

        assert_that!(matches!(result, Err(AssetError::Parse { .. })), eq(true));
    }

    /// `load_language_file`: 文字列以外の値は不正なアセット
    #[rstest]
    fn test_load_language_file_non_string_value() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("en_us.json");
        fs::write(&path, r#"{"block.stone": 1}"#).unwrap();

        let result = load_language_file(&path);

        assert_that!(matches!(result, Err(AssetError::NonStringValue { .. })), eq(true));
    }

    /// `build_document`: 正準言語のキー順で行を組み立て、欠損は
    /// 行の値に含めない（エクスポート時にプレースホルダになる）
    #[rstest]
    fn test_build_document_from_language_dir() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(
            temp_dir.path().join("en_us.json"),
            r#"{"block.stone": "Stone", "block.dirt": "Dirt"}"#,
        )
        .unwrap();
        fs::write(temp_dir.path().join("zh_cn.json"), r#"{"block.stone": "石头"}"#).unwrap();

        let doc = build_document(temp_dir.path(), &["en_us", "zh_cn"]).unwrap();

        assert_that!(doc.languages, elements_are![eq("en_us"), eq("zh_cn")]);
        assert_that!(doc.rows.len(), eq(2));
        assert_that!(doc.rows[0].key, eq("block.stone"));
        assert_that!(doc.rows[0].value_for("zh_cn"), eq("石头"));
        assert_that!(doc.rows[1].key, eq("block.dirt"));
        assert_that!(doc.rows[1].values.contains_key("zh_cn"), eq(false));
        assert_that!(doc.rows[1].value_for("zh_cn"), eq(MISSING_VALUE));
    }

    /// `build_document`: 言語ファイルが 1 つでも欠けると失敗する
    #[rstest]
    fn test_build_document_missing_language_file() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join("en_us.json"), r#"{"block.stone": "Stone"}"#).unwrap();

        let result = build_document(temp_dir.path(), &["en_us", "zh_cn"]);

        assert_that!(matches!(result, Err(AssetError::Io { .. })), eq(true));
    }
}
