//! XML レンダラ

use super::ExportDocument;

/// XML の予約 5 文字を名前付き実体参照に置換する
/// （属性値とテキストノードの両方に適用）
fn escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '&' => escaped.push_str("&amp;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&apos;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// ルート `<translations>`、行ごとに `key` 属性付きの `<entry>`、
/// 言語コードと同名の子要素にテキスト値を持つドキュメント
pub(super) fn render(doc: &ExportDocument) -> String {
    let mut xml = String::from("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n<translations>");

    for row in &doc.rows {
        xml.push_str(&format!("\n  <entry key=\"{}\">", escape(&row.key)));
        for language in &doc.languages {
            xml.push_str(&format!(
                "\n    <{language}>{}</{language}>",
                escape(row.value_for(language))
            ));
        }
        xml.push_str("\n  </entry>");
    }

    xml.push_str("\n</translations>");
    xml
}
