//! JSON レンダラ

use serde_json::{
    Map,
    Value,
};

use super::{
    ExportDocument,
    ExportError,
};

/// キー → { 言語コード → 値 } のネストしたオブジェクト。
/// 2 スペースインデントで整形し、行の入力順を保つ。
pub(super) fn render(doc: &ExportDocument) -> Result<String, ExportError> {
    let mut root = Map::with_capacity(doc.rows.len());

    for row in &doc.rows {
        let mut entry = Map::with_capacity(doc.languages.len());
        for language in &doc.languages {
            entry.insert(language.clone(), Value::String(row.value_for(language).to_string()));
        }
        root.insert(row.key.clone(), Value::Object(entry));
    }

    Ok(serde_json::to_string_pretty(&Value::Object(root))?)
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::indexing_slicing)]
mod tests {
    use googletest::prelude::*;
    use rstest::rstest;

    use super::*;
    use crate::export::MISSING_VALUE;
    use crate::test_utils::sample_document;

    /// 出力をパースし直すと、元の値か（欠損なら）プレースホルダが
    /// すべての行 × 言語で得られる
    #[rstest]
    fn test_render_round_trips() {
        let doc = sample_document();

        let output = render(&doc).unwrap();
        let parsed: Value = serde_json::from_str(&output).unwrap();

        for row in &doc.rows {
            for language in &doc.languages {
                let expected =
                    row.values.get(language).map_or(MISSING_VALUE, String::as_str);
                assert_that!(parsed[&row.key][language].as_str().unwrap(), eq(expected));
            }
        }
    }

    /// 2 スペースインデントで整形される
    #[rstest]
    fn test_render_is_pretty_printed() {
        let output = render(&sample_document()).unwrap();

        assert_that!(output, contains_substring("{\n  \"block.stone\": {\n    \"en_us\": \"Stone\""));
    }

    /// 行の順序が JSON オブジェクトのキー順に残る
    #[rstest]
    fn test_render_preserves_row_order() {
        let output = render(&sample_document()).unwrap();

        let stone = output.find("block.stone").unwrap();
        let dirt = output.find("block.dirt").unwrap();
        assert_that!(stone < dirt, eq(true));
    }
}
