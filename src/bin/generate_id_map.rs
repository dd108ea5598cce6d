//! 逆引きマップアセット（`id.json`）のオフライン生成
//!
//! 正準言語ファイルの全キーから短縮コードを導出し、
//! コード → キーの JSON オブジェクトを書き出す。

use std::path::PathBuf;
use std::process::ExitCode;

use mc_lang_table::code_map::{
    self,
    CodeMapError,
};
use mc_lang_table::input::{
    self,
    AssetError,
};
use thiserror::Error;

#[derive(Error, Debug)]
enum GenerateError {
    #[error(transparent)]
    Asset(#[from] AssetError),
    #[error(transparent)]
    CodeMap(#[from] CodeMapError),
    #[error("failed to serialize ID mapping: {0}")]
    Serialize(#[from] serde_json::Error),
    #[error("failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

fn run() -> Result<(), GenerateError> {
    let mut args = std::env::args().skip(1);
    let source = args
        .next()
        .map_or_else(|| PathBuf::from("assets/mc_lang/valid/en_us.json"), PathBuf::from);
    let output = args.next().map_or_else(|| PathBuf::from("assets/data/id.json"), PathBuf::from);

    let canonical = input::load_language_file(&source)?;
    let map = code_map::build_reverse_map(canonical.keys())?;
    let json = serde_json::to_string_pretty(&map)?;

    // 完成した内容を一度に書き込む（失敗時に部分的な出力を残さない）
    if let Some(parent) = output.parent() {
        std::fs::create_dir_all(parent)
            .map_err(|source| GenerateError::Write { path: output.clone(), source })?;
    }
    std::fs::write(&output, json)
        .map_err(|source| GenerateError::Write { path: output.clone(), source })?;

    tracing::info!("ID mapping file generated successfully: {}", output.display());
    Ok(())
}

fn main() -> ExitCode {
    tracing_subscriber::fmt().init();

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!("Error generating ID mapping file: {err}");
            ExitCode::FAILURE
        }
    }
}
