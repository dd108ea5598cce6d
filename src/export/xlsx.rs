//! XLSX レンダラ

use rust_xlsxwriter::Workbook;

use super::{
    ExportDocument,
    ExportError,
};

/// TSV と同じ行列配置の単一シート（シート名 `translations`）を
/// インメモリのワークブックとして構築する
#[allow(clippy::cast_possible_truncation)]
pub(super) fn render(doc: &ExportDocument) -> Result<Vec<u8>, ExportError> {
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();
    worksheet.set_name("translations")?;

    worksheet.write_string(0, 0, "key")?;
    for (column, language) in doc.languages.iter().enumerate() {
        worksheet.write_string(0, (column + 1) as u16, language.as_str())?;
    }

    for (index, row) in doc.rows.iter().enumerate() {
        let row_number = (index + 1) as u32;
        worksheet.write_string(row_number, 0, row.key.as_str())?;
        for (column, language) in doc.languages.iter().enumerate() {
            worksheet.write_string(row_number, (column + 1) as u16, row.value_for(language))?;
        }
    }

    Ok(workbook.save_to_buffer()?)
}
