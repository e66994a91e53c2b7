// crates/vietkana/src/service.rs

//! VietKanaService: vietkana クレートの統合ファサード。
//!
//! - 規則テーブル (RuleSet) - 組み込み + 上書きファイル
//! - 逆方向辞書 (LexiconManager / DictionaryIndex)
//! - 候補生成エンジン (Engine)
//!
//! 呼び出し側のパイプライン（利用者が以前選んだ表記の差し込み、外部リランカーによる
//! スコア付け）もここで行う。永続化とリランカー本体は trait の向こう側にあり、本クレートの
//! 範囲外。

use std::cmp::Reverse;
use std::collections::HashMap;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::config::VietKanaConfig;
use crate::engine::{Engine, Transliteration};
use crate::errors::error_definition::{RerankError, VietKanaResult};
use crate::lexicon::LexiconManager;
use crate::models::{Breakdown, Candidate, Direction, Preset};
use crate::rules::RuleSet;
use crate::text::{normalize_text, strip_tones};

/// Minimum number of candidates sent to the re-ranker.
pub const MIN_RERANK_CANDIDATES: usize = 24;

/// Minimum number of candidates kept before the final score sort.
pub const MIN_SCORED_CANDIDATES: usize = 40;

/// Score given to candidates the re-ranker did not rate.
pub const NEUTRAL_SCORE: u8 = 50;

/// Highest score a re-ranker may assign.
pub const MAX_SCORE: u8 = 100;

// ─────────────────────────────────────────────────────────────────────────────
// Preference store
// ─────────────────────────────────────────────────────────────────────────────

/// Key of a remembered rendering choice.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PreferenceKey {
  /// Normalized input (see [`normalized_key`])
  pub normalized: String,
  /// プリセット
  pub preset: Preset,
  /// 変換方向
  pub direction: Direction,
}

impl PreferenceKey {
  /// Constructor for PreferenceKey
  pub fn new(normalized: impl Into<String>, preset: Preset, direction: Direction) -> Self {
    Self {
      normalized: normalized.into(),
      preset,
      direction,
    }
  }
}

/// Source of renderings a user chose earlier.
pub trait PreferenceStore {
  /// The most recent choice for `key`, if any.
  fn preferred(&self, key: &PreferenceKey) -> Option<String>;
}

/// Process-local preference store.
#[derive(Debug, Clone, Default)]
pub struct InMemoryPreferences {
  entries: HashMap<PreferenceKey, String>,
}

impl InMemoryPreferences {
  /// Constructor for InMemoryPreferences
  pub fn new() -> Self {
    Self::default()
  }

  /// Records a choice; a later choice for the same key replaces the earlier one.
  pub fn remember(&mut self, key: PreferenceKey, chosen: impl Into<String>) {
    self.entries.insert(key, chosen.into());
  }

  /// Number of remembered keys.
  pub fn len(&self) -> usize {
    self.entries.len()
  }

  /// `true` when nothing is remembered.
  pub fn is_empty(&self) -> bool {
    self.entries.is_empty()
  }
}

impl PreferenceStore for InMemoryPreferences {
  fn preferred(&self, key: &PreferenceKey) -> Option<String> {
    self.entries.get(key).cloned()
  }
}

// ─────────────────────────────────────────────────────────────────────────────
// Re-ranker
// ─────────────────────────────────────────────────────────────────────────────

/// Input handed to a re-ranker.
#[derive(Debug, Clone, Serialize)]
pub struct RerankRequest<'a> {
  /// Input after whitespace normalization
  pub original: &'a str,
  /// Normalized key of the input
  pub normalized: &'a str,
  /// プリセット
  pub preset: Preset,
  /// 変換方向
  pub direction: Direction,
  /// Candidate texts in current order
  pub candidates: Vec<String>,
  /// Number of results the caller wants
  pub result_count: usize,
}

/// One rating returned by a re-ranker.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RankedCandidate {
  /// Candidate text (must match a submitted candidate exactly)
  pub text: String,
  /// 0–100, higher is better (values above 100 are clamped)
  pub score: u8,
  /// Short explanation
  #[serde(default)]
  pub explanation: String,
}

/// External scorer of candidate lists. It only rates candidates, it never adds new ones.
pub trait Reranker {
  /// Rates the submitted candidates.
  fn rerank(&self, request: &RerankRequest<'_>) -> Result<Vec<RankedCandidate>, RerankError>;
}

// ─────────────────────────────────────────────────────────────────────────────
// Request / response
// ─────────────────────────────────────────────────────────────────────────────

/// Conversion request.
#[derive(Debug, Clone, Deserialize)]
pub struct ConvertRequest {
  /// Raw input
  pub input: String,
  /// 変換方向
  pub direction: Direction,
  /// Preset (`search.default_preset` if omitted)
  #[serde(default)]
  pub preset: Option<Preset>,
  /// Number of results (`search.default_result_count` if omitted, clamped otherwise)
  #[serde(default)]
  pub result_count: Option<usize>,
}

/// Final, scored candidate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScoredCandidate {
  /// Candidate text
  pub text: String,
  /// Re-ranker score, or the neutral score
  pub score: u8,
  /// Re-ranker explanation (empty when unrated)
  pub explanation: String,
  /// Per-syllable breakdown (empty for a spliced preference not produced by the engine)
  pub breakdown: Vec<Breakdown>,
}

/// Conversion response.
#[derive(Debug, Clone, Serialize)]
pub struct ConvertResponse {
  /// Input after whitespace normalization
  pub original: String,
  /// Normalized key of the input
  pub normalized: String,
  /// プリセット
  pub preset: Preset,
  /// 変換方向
  pub direction: Direction,
  /// `true` when a re-ranker answered successfully
  pub reranked: bool,
  /// At most `result_count` candidates, best first
  pub results: Vec<ScoredCandidate>,
}

/// Normalized key of an input.
///
/// - Vietnamese → Katakana: tone-stripped, lowercased, whitespace collapsed
/// - Katakana → Vietnamese: whitespace collapsed
pub fn normalized_key(direction: Direction, input: &str) -> String {
  let collapsed = normalize_text(input);
  match direction {
    Direction::ViToJa => strip_tones(&collapsed).to_lowercase(),
    Direction::JaToVi => collapsed,
  }
}

// ─────────────────────────────────────────────────────────────────────────────
// Service
// ─────────────────────────────────────────────────────────────────────────────

/// vietkana クレートの統合ファサード。
#[derive(Debug, Clone)]
pub struct VietKanaService {
  engine: Engine,
  config: VietKanaConfig,
}

impl VietKanaService {
  /// 初期化（規則テーブル構築 + 逆方向辞書ロード + Engine 構築）
  ///
  /// # 処理フロー
  /// 1. 設定の妥当性を検証
  /// 2. 組み込み規則と上書きファイルから RuleSet を構築
  /// 3. LexiconManager で辞書をロード（読み取り専用インデックスを構築）
  ///
  /// # エラー
  /// - 設定が不正
  /// - 上書きファイルの読み込み・解析失敗
  /// - 辞書ディレクトリーが無い、音節リストが無い・空
  pub fn init(config: &VietKanaConfig) -> VietKanaResult<Self> {
    config.validate()?;

    let rules = Arc::new(RuleSet::load(config.override_file())?);

    let files = config.given_name_files().to_vec();
    let lexicon = match config.lexicon_data_dir() {
      Some(dir) => LexiconManager::from_dir(dir, files, Arc::clone(&rules))?,
      None => LexiconManager::with_default_dir(files, Arc::clone(&rules))?,
    };
    let index = lexicon.load()?;

    Ok(Self::with_engine(Engine::new(rules, index), config.clone()))
  }

  /// Wraps an already built engine.
  pub fn with_engine(engine: Engine, config: VietKanaConfig) -> Self {
    Self { engine, config }
  }

  /// エンジン
  pub fn engine(&self) -> &Engine {
    &self.engine
  }

  /// 設定
  pub fn config(&self) -> &VietKanaConfig {
    &self.config
  }

  /// Key under which a choice for `input` should be remembered.
  pub fn preference_key(&self, direction: Direction, preset: Preset, input: &str) -> PreferenceKey {
    PreferenceKey::new(normalized_key(direction, input), preset, direction)
  }

  /// Raw engine output with configuration defaults and clamping applied.
  pub fn transliterate(
    &self,
    direction: Direction,
    text: &str,
    preset: Option<Preset>,
    result_count: Option<usize>,
  ) -> VietKanaResult<Transliteration> {
    let preset = preset.unwrap_or(self.config.default_preset());
    let n = self.config.clamp_result_count(result_count);
    Ok(self.engine.transliterate(direction, text, preset, n)?)
  }

  /// Full pipeline: generate, splice the remembered choice, re-rank, return the best `n`.
  ///
  /// A missing or failing re-ranker is not an error; every candidate then gets the neutral
  /// score and the engine order is kept.
  pub fn convert(
    &self,
    request: &ConvertRequest,
    preferences: Option<&dyn PreferenceStore>,
    reranker: Option<&dyn Reranker>,
  ) -> VietKanaResult<ConvertResponse> {
    let direction = request.direction;
    let preset = request.preset.unwrap_or(self.config.default_preset());
    let n = self.config.clamp_result_count(request.result_count);

    let original = normalize_text(&request.input);
    let normalized = normalized_key(direction, &original);

    let generated = self.engine.transliterate(direction, &original, preset, n)?;
    let mut candidates = generated.candidates;

    let key = PreferenceKey::new(normalized.as_str(), preset, direction);
    if let Some(chosen) = preferences.and_then(|store| store.preferred(&key)) {
      debug!(normalized = %normalized, chosen = %chosen, "Splicing preferred rendering");
      splice_preferred(&mut candidates, chosen);
    }

    let (ratings, reranked) = match reranker {
      Some(reranker) => {
        let rerank_request = RerankRequest {
          original: &original,
          normalized: &normalized,
          preset,
          direction,
          candidates: candidates
            .iter()
            .take(MIN_RERANK_CANDIDATES.max(n * 2))
            .map(|c| c.text.clone())
            .collect(),
          result_count: n,
        };
        match reranker.rerank(&rerank_request) {
          Ok(ranked) => (index_ratings(ranked), true),
          Err(e) => {
            warn!(error = %e, "Re-ranker failed, keeping engine order");
            (HashMap::new(), false)
          }
        }
      }
      None => (HashMap::new(), false),
    };

    let mut results: Vec<ScoredCandidate> = candidates
      .into_iter()
      .take(MIN_SCORED_CANDIDATES.max(n * 4))
      .map(|candidate| {
        let (score, explanation) = match ratings.get(&candidate.text) {
          Some(r) => (r.score.min(MAX_SCORE), r.explanation.clone()),
          None => (NEUTRAL_SCORE, String::new()),
        };
        ScoredCandidate {
          text: candidate.text,
          score,
          explanation,
          breakdown: candidate.breakdown,
        }
      })
      .collect();

    // stable: equal scores keep engine order
    results.sort_by_key(|r| Reverse(r.score));
    results.truncate(n);

    Ok(ConvertResponse {
      original,
      normalized,
      preset,
      direction,
      reranked,
      results,
    })
  }
}

/// Moves `chosen` to the front, or inserts it with an empty breakdown when the engine did not
/// produce it.
fn splice_preferred(candidates: &mut Vec<Candidate>, chosen: String) {
  match candidates.iter().position(|c| c.text == chosen) {
    Some(pos) => {
      let found = candidates.remove(pos);
      candidates.insert(0, found);
    }
    None => candidates.insert(
      0,
      Candidate {
        text: chosen,
        breakdown: Vec::new(),
      },
    ),
  }
}

/// Ratings keyed by exact text; a later rating of the same text replaces an earlier one.
fn index_ratings(ranked: Vec<RankedCandidate>) -> HashMap<String, RankedCandidate> {
  ranked.into_iter().map(|r| (r.text.clone(), r)).collect()
}

// ─────────────────────────────────────────────────────────────────────────────
// Test Module
// ─────────────────────────────────────────────────────────────────────────────
