//! エラー定義

use std::io;
use std::path::PathBuf;
use std::sync::Arc;
use thiserror::Error;

/// 設定（VietKanaConfig）関連のエラー
#[derive(Debug, Error, Clone)]
#[non_exhaustive]
pub enum ConfigError {
  /// search.min_result_count < 1
  #[error("search.min_result_count は 1 以上である必要があります: actual={actual}")]
  InvalidMinResultCount {
    /// 実際に指定された値
    actual: usize,
  },

  /// search.default_result_count が [min, max] の範囲外
  #[error(
    "search.default_result_count は {min}〜{max} の範囲で指定してください: actual={actual}"
  )]
  InvalidDefaultResultCount {
    /// search.min_result_count
    min: usize,
    /// search.max_result_count
    max: usize,
    /// 実際に指定された値
    actual: usize,
  },

  /// search.max_result_count < search.min_result_count
  #[error(
    "search.max_result_count は search.min_result_count 以上である必要があります: \
     min={min}, max={max}"
  )]
  InvalidMaxResultCount {
    /// search.min_result_count
    min: usize,
    /// search.max_result_count
    max: usize,
  },

  /// lexicon.data_dir がディレクトリではない
  #[error("lexicon.data_dir がディレクトリではありません: path={path:?}")]
  InvalidLexiconDataDir {
    /// 不正なパス
    path: PathBuf,
  },

  /// 設定ファイルの読み込み失敗
  #[error("設定ファイルの読み込みに失敗しました: path={path:?}, error={source}")]
  Read {
    /// 設定ファイルのパス
    path: PathBuf,
    /// 元となった IO エラー
    #[source]
    source: Arc<io::Error>,
  },

  /// 設定 JSON の解析失敗
  #[error("設定 JSON の解析に失敗しました: {0}")]
  Parse(Arc<serde_json::Error>),
}

/// 逆方向辞書（音節リスト・名前リスト）関連のエラー
#[derive(Debug, Error, Clone)]
#[non_exhaustive]
pub enum LexiconError {
  /// デフォルトのデータディレクトリーが見つからない
  #[error("辞書データディレクトリーが見つかりません")]
  DataDirNotFound,

  /// 指定されたデータディレクトリーが存在しない
  #[error("辞書データディレクトリーが存在しません: {0}")]
  DataDirMissing(PathBuf),

  /// 音節リスト（syllables.txt）が存在しない
  #[error("音節リストが見つかりません: {0}")]
  MissingSyllableFile(PathBuf),

  /// 辞書ファイルの読み込み失敗
  #[error("辞書ファイルの読み込みに失敗しました: path={path:?}, error={source}")]
  Read {
    /// 読み込もうとしたパス
    path: PathBuf,
    /// 元となった IO エラー
    #[source]
    source: Arc<io::Error>,
  },

  /// 音節リストが空
  #[error("音節リストが空です: {0}")]
  EmptySyllableList(PathBuf),
}

/// 上書きルール関連のエラー
#[derive(Debug, Error, Clone)]
#[non_exhaustive]
pub enum RuleError {
  /// ルールファイルの読み込み失敗
  #[error("ルールファイルの読み込みに失敗しました: path={path:?}, error={source}")]
  Read {
    /// ルールファイルのパス
    path: PathBuf,
    /// 元となった IO エラー
    #[source]
    source: Arc<io::Error>,
  },

  /// ルール JSON の解析失敗
  #[error("ルール JSON の解析に失敗しました: {0}")]
  Parse(Arc<serde_json::Error>),

  /// 音節キーが空のルール
  #[error("上書きルールの音節キーが空です")]
  EmptyKey,

  /// 断片リストが空のルール
  #[error("上書きルールに断片がありません: vi={vi}")]
  EmptyFragments {
    /// 対象の音節キー
    vi: String,
  },
}

/// 翻字処理のエラー
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum TransliterationError {
  /// 正規化後の入力が空
  #[error("入力が空です")]
  EmptyInput,
}

/// 外部リランカー関連のエラー
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum RerankError {
  /// リランカーが利用できない
  #[error("リランカーが利用できません: {0}")]
  Unavailable(String),

  /// リランカーの応答が不正
  #[error("リランカーの応答が不正です: {0}")]
  InvalidResponse(String),
}

/// 統合エラー
/// 本クレートの外部に公開するエラー用 API はこのエラーを返すこと
/// `VietKanaResult<T>` = `Result<T, VietKanaError>` として使用する
#[derive(Debug, Error, Clone)]
#[non_exhaustive]
pub enum VietKanaError {
  /// 設定エラー
  #[error(transparent)]
  Config(#[from] ConfigError),

  /// 辞書関連エラー
  #[error(transparent)]
  Lexicon(#[from] LexiconError),

  /// ルール関連エラー
  #[error(transparent)]
  Rule(#[from] RuleError),

  /// 翻字エラー
  #[error(transparent)]
  Transliteration(#[from] TransliterationError),
}

/// vietkana クレートの標準 Result 型エイリアス
pub type VietKanaResult<T> = Result<T, VietKanaError>;
