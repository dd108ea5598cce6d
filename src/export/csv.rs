//! CSV レンダラ

use super::ExportDocument;

/// 標準的な CSV クオート: 全フィールドを二重引用符で囲み、
/// フィールド内の `"` は `""` に倍加する
fn quote(field: &str) -> String {
    format!("\"{}\"", field.replace('"', "\"\""))
}

/// TSV と同じ列構成のカンマ区切りテキスト
pub(super) fn render(doc: &ExportDocument) -> String {
    let mut lines = Vec::with_capacity(doc.rows.len() + 1);

    let mut header = vec!["key".to_string()];
    header.extend(doc.languages.iter().cloned());
    lines.push(header.join(","));

    for row in &doc.rows {
        let mut fields = vec![quote(&row.key)];
        fields.extend(doc.languages.iter().map(|language| quote(row.value_for(language))));
        lines.push(fields.join(","));
    }

    lines.join("\n")
}
