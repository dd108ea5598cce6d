//! TSV レンダラ
//!
//! タブ・改行のエスケープは行わない（入力がクリーンである前提の
//! 既知の制限）。

use super::ExportDocument;

/// ヘッダ行 `key` + 言語列、以降 1 行 1 エントリのタブ区切りテキスト
pub(super) fn render(doc: &ExportDocument) -> String {
    let mut lines = Vec::with_capacity(doc.rows.len() + 1);

    let mut header = vec!["key".to_string()];
    header.extend(doc.languages.iter().cloned());
    lines.push(header.join("\t"));

    for row in &doc.rows {
        let mut fields = vec![row.key.clone()];
        fields.extend(doc.languages.iter().map(|language| row.value_for(language).to_string()));
        lines.push(fields.join("\t"));
    }

    lines.join("\n")
}
