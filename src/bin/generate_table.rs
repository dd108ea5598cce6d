//! 翻訳テーブルアセットのオフライン生成
//!
//! 言語ディレクトリからドキュメントを組み立て、指定フォーマット
//! （既定は TSV、`public/table.tsv`）で書き出す。

use std::path::PathBuf;
use std::process::ExitCode;

use mc_lang_table::export::{
    ExportError,
    ExportFormat,
};
use mc_lang_table::input::{
    self,
    AssetError,
    TABLE_LANGUAGES,
};
use thiserror::Error;

#[derive(Error, Debug)]
enum GenerateError {
    #[error(transparent)]
    Asset(#[from] AssetError),
    #[error(transparent)]
    Export(#[from] ExportError),
    #[error("unknown export format {0:?} (expected one of: tsv, csv, json, xml, xlsx)")]
    UnknownFormat(String),
    #[error("failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

fn run() -> Result<(), GenerateError> {
    let mut args = std::env::args().skip(1);
    let lang_dir =
        args.next().map_or_else(|| PathBuf::from("assets/mc_lang/valid"), PathBuf::from);
    let format = match args.next() {
        Some(name) => ExportFormat::from_extension(&name)
            .ok_or_else(|| GenerateError::UnknownFormat(name))?,
        None => ExportFormat::Tsv,
    };
    let output = args.next().map_or_else(
        || PathBuf::from("public").join(format.file_name(false)),
        PathBuf::from,
    );

    let doc = input::build_document(&lang_dir, &TABLE_LANGUAGES)?;
    tracing::info!("Loaded {} rows across {} languages", doc.rows.len(), doc.languages.len());

    let rendered = format.serialize(&doc)?;

    // 完成した内容を一度に書き込む（失敗時に部分的な出力を残さない）
    if let Some(parent) = output.parent() {
        std::fs::create_dir_all(parent)
            .map_err(|source| GenerateError::Write { path: output.clone(), source })?;
    }
    std::fs::write(&output, rendered.into_bytes())
        .map_err(|source| GenerateError::Write { path: output.clone(), source })?;

    tracing::info!("Table file generated successfully: {}", output.display());
    Ok(())
}

fn main() -> ExitCode {
    tracing_subscriber::fmt().init();

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!("Error generating table file: {err}");
            ExitCode::FAILURE
        }
    }
}
