//! lexicon モジュール
pub mod index;
pub mod lexicon_manager;

/// 再エクスポート
pub use index::DictionaryIndex;
pub use lexicon_manager::{DEFAULT_GIVEN_NAME_FILES, LexiconManager, SYLLABLE_FILE, default_data_dir};
