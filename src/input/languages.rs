//! サポートする言語コードの定義

/// 正準言語。この言語ファイルのキー集合と順序が、コード生成と
/// テーブル生成の権威あるキー集合になる。
pub const CANONICAL_LANGUAGE: &str = "en_us";

/// ビューアが言語ファイルを持つすべてのロケール
pub const SUPPORTED_LANGUAGES: [&str; 17] = [
    "en_us", "zh_cn", "zh_hk", "zh_tw", "lzh", "ja_jp", "ko_kr", "vi_vn", "de_de", "es_es",
    "fr_fr", "it_it", "nl_nl", "pt_br", "ru_ru", "th_th", "uk_ua",
];

/// 生成するテーブルアセットに含める列のサブセット
pub const TABLE_LANGUAGES: [&str; 8] =
    ["en_us", "zh_cn", "zh_hk", "zh_tw", "lzh", "ja_jp", "ko_kr", "vi_vn"];

/// Checks if a language code is one of the supported locales.
#[must_use]
pub fn is_supported(code: &str) -> bool {
    SUPPORTED_LANGUAGES.contains(&code)
}
