//! vietkana 人名翻字ライブラリー
//!
//! Transliterates Vietnamese personal names into Katakana and back, producing several ranked
//! candidate renderings with a per-syllable breakdown.

/// 設定モジュール - VietKanaConfig 等の設定構造体を定義
pub mod config;

/// エンジンモジュール - 双方向の候補生成エントリーポイント
pub mod engine;

/// エラーモジュール - VietKanaError, VietKanaResult 等のエラー型を定義
pub mod errors;

/// 順方向モジュール - 音節分解とカタカナ断片の合成
pub mod forward;

/// ラティスモジュール - ビームサーチによる候補組み立て
pub mod lattice;

/// 辞書モジュール - 逆方向用の音節辞書・名前リストの管理
pub mod lexicon;

/// ログモジュール - tracing-subscriber の初期化
pub mod logging;

/// データモデルモジュール - Candidate, Breakdown, Preset 等のデータ構造を定義
pub mod models;

/// 逆方向モジュール - カタカナのローマ字化と辞書照合
pub mod reverse;

/// ルールモジュール - 音素テーブルと上書きルール
pub mod rules;

/// サービスモジュール - VietKanaService 等の上位レベル API を提供
pub mod service;

/// テキストモジュール - 正規化・声調除去・トークン分割
pub mod text;

/// 再エクスポート
pub use config::VietKanaConfig;
pub use engine::{Engine, Transliteration};
pub use errors::{VietKanaError, VietKanaResult};
pub use models::{Breakdown, Candidate, Direction, FragmentOrigin, Preset};
pub use service::VietKanaService;
