//! reverse モジュール
//!
//! Katakana → Vietnamese: romanization and dictionary lookup.

pub mod decomposer;
pub mod romanizer;

/// 再エクスポート
pub use decomposer::ReverseDecomposer;
pub use romanizer::katakana_to_romaji;
