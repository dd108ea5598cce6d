//! 翻訳キーから共有用の短縮コードを導出するモジュール
//!
//! 翻訳キーの SHA-256 ハッシュを base62 表現に変換し、先頭の固定長だけを
//! クイズリンク用の識別子として使う。コードはキーの純粋関数なので、
//! 逆引きマップはキャッシュであり、キー集合からいつでも再生成できる。

use sha2::{
    Digest,
    Sha256,
};
use thiserror::Error;

/// Base62 alphabet. Remainders of the repeated division index into this
/// table, so the symbol order is part of the code format.
pub const BASE62_ALPHABET: &str =
    "ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789";

/// クイズリンクで使う短縮コードの長さ
pub const CODE_LENGTH: usize = 3;

/// Errors that may occur while building the reverse map.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CodeMapError {
    /// Two keys derived the same short code. Truncating to a few base62
    /// characters makes this unlikely but possible; the caller decides the
    /// resolution policy (longer codes, abort, or namespacing).
    #[error("short code {code:?} collides: already maps to {existing_key:?}, also derived from {new_key:?}")]
    Collision { code: String, existing_key: String, new_key: String },
}

/// SHA-256 ダイジェストをビッグエンディアンの多倍長整数とみなして
/// base62 の桁列（上位桁が先頭）に変換する
#[allow(clippy::cast_possible_truncation)] // acc / 62 < 256 のため常に u8 に収まる
fn base62_digits(digest: &[u8]) -> String {
    let alphabet = BASE62_ALPHABET.as_bytes();
    let mut quotient = digest.to_vec();
    let mut digits: Vec<char> = Vec::new();

    while quotient.iter().any(|&byte| byte != 0) {
        let mut remainder: u32 = 0;
        for byte in &mut quotient {
            let acc = (remainder << 8) | u32::from(*byte);
            *byte = (acc / 62) as u8;
            remainder = acc % 62;
        }
        // remainder < 62 のため必ずアルファベット内
        let digit = alphabet.get(remainder as usize).copied().map_or('A', char::from);
        digits.push(digit);
    }

    digits.iter().rev().collect()
}

/// Derives a short code of exactly `length` characters from a translation
/// key: SHA-256 over the UTF-8 key, base62-encoded, left-padded with the
/// alphabet zero symbol `A`, truncated to the leading `length` characters.
///
/// Deterministic across runs. The empty string is a legal input and hashes
/// normally. Codes are best-effort unique, not cryptographically unique.
#[must_use]
pub fn derive_code_with_length(key: &str, length: usize) -> String {
    let digest = Sha256::digest(key.as_bytes());
    let natural = base62_digits(&digest);
    let padded = format!("{natural:A>length$}");
    padded.chars().take(length).collect()
}

/// [`derive_code_with_length`] with the quiz-link default of
/// [`CODE_LENGTH`] characters.
#[must_use]
pub fn derive_code(key: &str) -> String {
    derive_code_with_length(key, CODE_LENGTH)
}

/// すべてのキーに [`derive_code`] を適用し、コード → キーの逆引きマップを
/// 入力順を保ったまま構築する
///
/// # Returns
/// - `Ok(map)`: 生成された逆引きマップ（JSON オブジェクトとして永続化可能）
/// - `Err(CodeMapError::Collision)`: 同じコードが二つのキーから導出された
///
/// # Errors
/// - コード衝突。暗黙の上書きはせず、解決方針は呼び出し側に委ねる
pub fn build_reverse_map<I, S>(
    keys: I,
) -> Result<serde_json::Map<String, serde_json::Value>, CodeMapError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut map = serde_json::Map::new();

    for key in keys {
        let key = key.as_ref();
        let code = derive_code(key);
        tracing::debug!("Code: {code} -> Key: {key}");

        if let Some(previous) = map.insert(code.clone(), serde_json::Value::String(key.to_string()))
        {
            let existing_key = previous.as_str().unwrap_or_default().to_string();
            return Err(CodeMapError::Collision {
                code,
                existing_key,
                new_key: key.to_string(),
            });
        }
    }

    tracing::info!("Derived {} short codes", map.len());
    Ok(map)
}
