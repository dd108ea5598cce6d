//! クイズ識別子の検証
//!
//! クイズリンクは 10 個の短縮コードを連結した 30 文字の識別子を運ぶ。
//! 実行時は永続化された逆引きマップ（`id.json`）を読み取り専用で使い、
//! 各セグメントが既知のキーに対応するかだけを確かめる。

use std::collections::HashMap;

use serde::{
    Deserialize,
    Serialize,
};

use crate::code_map::CODE_LENGTH;

/// 1 つのクイズ識別子に含まれるセグメント数
pub const SEGMENT_COUNT: usize = 10;

/// クイズ識別子の全長（文字数）
pub const QUIZ_ID_LENGTH: usize = CODE_LENGTH * SEGMENT_COUNT;

/// Persisted short-code → translation-key lookup, loaded from the
/// generated `id.json` asset. Read-only at runtime; regeneration happens
/// offline via [`crate::code_map::build_reverse_map`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ReverseMap {
    entries: HashMap<String, String>,
}

impl ReverseMap {
    /// 逆引きマップアセット（JSON オブジェクト）をパースする
    ///
    /// # Errors
    /// - JSON パースエラー（オブジェクト以外、文字列以外の値を含む）
    pub fn from_json_str(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Returns the translation key a short code resolves to, if any.
    #[must_use]
    pub fn key_for(&self, code: &str) -> Option<&str> {
        self.entries.get(code).map(String::as_str)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// クイズ識別子を 3 文字ずつのセグメントに分割し、各セグメントを
    /// 翻訳キーに解決する。長さが 30 文字でない、ASCII 以外を含む、
    /// または未知のセグメントを含む場合は `None`。
    ///
    /// 順序や重複には制約を課さない。
    #[must_use]
    pub fn resolve_quiz_id(&self, id: &str) -> Option<Vec<&str>> {
        if id.len() != QUIZ_ID_LENGTH || !id.is_ascii() {
            return None;
        }
        id.as_bytes()
            .chunks(CODE_LENGTH)
            .map(|segment| self.key_for(std::str::from_utf8(segment).ok()?))
            .collect()
    }

    /// [`resolve_quiz_id`](Self::resolve_quiz_id) の真偽値版。
    /// 不正な入力でもパニックせず false を返す。
    #[must_use]
    pub fn is_valid_quiz_id(&self, id: &str) -> bool {
        self.resolve_quiz_id(id).is_some()
    }
}

impl FromIterator<(String, String)> for ReverseMap {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        Self { entries: iter.into_iter().collect() }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::indexing_slicing)]
mod tests {
    use googletest::prelude::*;
    use rstest::rstest;

    use super::*;
    use crate::code_map::{
        build_reverse_map,
        derive_code,
    };

    fn sample_map() -> ReverseMap {
        let map = build_reverse_map(["block.stone", "block.dirt"]).unwrap();
        map.into_iter()
            .map(|(code, key)| (code, key.as_str().unwrap().to_string()))
            .collect()
    }

    /// 既知のコード 10 個からなる 30 文字の識別子は有効
    #[rstest]
    fn test_valid_quiz_id() {
        let map = sample_map();
        let stone = derive_code("block.stone");
        let dirt = derive_code("block.dirt");

        let id: String = (0..SEGMENT_COUNT)
            .map(|i| if i % 2 == 0 { stone.as_str() } else { dirt.as_str() })
            .collect();

        assert_that!(id.len(), eq(QUIZ_ID_LENGTH));
        assert_that!(map.is_valid_quiz_id(&id), eq(true));

        let keys = map.resolve_quiz_id(&id).unwrap();
        assert_that!(keys.len(), eq(SEGMENT_COUNT));
        assert_that!(keys[0], eq("block.stone"));
        assert_that!(keys[1], eq("block.dirt"));
    }

    /// 長さが 30 文字以外は無効
    #[rstest]
    #[case::empty("")]
    #[case::too_short("AAA")]
    #[case::off_by_one("AAAAAAAAAAAAAAAAAAAAAAAAAAAAA")]
    #[case::too_long("AAAAAAAAAAAAAAAAAAAAAAAAAAAAAAA")]
    fn test_invalid_length(#[case] id: &str) {
        assert_that!(sample_map().is_valid_quiz_id(id), eq(false));
    }

    /// 未知のセグメントを 1 つでも含むと無効
    #[rstest]
    fn test_unknown_segment_rejected() {
        let map = sample_map();
        let stone = derive_code("block.stone");

        let mut id = stone.repeat(SEGMENT_COUNT - 1);
        id.push_str("@@@");

        assert_that!(id.len(), eq(QUIZ_ID_LENGTH));
        assert_that!(map.is_valid_quiz_id(&id), eq(false));
    }

    /// ASCII 以外を含む入力はパニックせず無効になる
    #[rstest]
    fn test_non_ascii_rejected() {
        let map = sample_map();

        // 30 文字だがバイト長は異なる
        let id = "あ".repeat(QUIZ_ID_LENGTH);

        assert_that!(map.is_valid_quiz_id(&id), eq(false));
    }

    /// `from_json_str`: 生成済みアセットの形式をそのまま読める
    #[rstest]
    fn test_from_json_str() {
        let map =
            ReverseMap::from_json_str(r#"{"abc": "block.stone", "xyz": "block.dirt"}"#).unwrap();

        assert_that!(map.len(), eq(2));
        assert_that!(map.key_for("abc"), eq(Some("block.stone")));
        assert_that!(map.key_for("zzz"), eq(None));
    }

    /// `from_json_str`: 不正な JSON はエラー
    #[rstest]
    fn test_from_json_str_invalid() {
        assert_that!(ReverseMap::from_json_str("not json").is_err(), eq(true));
    }
}
