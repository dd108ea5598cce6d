//! 翻訳ソースアセットの読み込み

mod languages;
mod loader;

pub use languages::{
    CANONICAL_LANGUAGE,
    SUPPORTED_LANGUAGES,
    TABLE_LANGUAGES,
    is_supported,
};
pub use loader::{
    AssetError,
    LanguageFile,
    build_document,
    load_language_file,
};
