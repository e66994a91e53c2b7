//! Engine: 双方向の候補生成エントリーポイント。
//!
//! 規則テーブルと逆方向辞書は初期化済みの読み取り専用データとして `Arc` で共有する。
//! リクエストごとの状態（トークン・ビーム・内訳）はすべて関数ローカルで、I/O は行わない。

use std::sync::Arc;

use serde::Serialize;
use tracing::debug;

use crate::errors::error_definition::TransliterationError;
use crate::forward::ForwardSynthesizer;
use crate::lattice::{BeamAssembler, ForwardScorer, PathScorer, ReverseScorer};
use crate::lexicon::DictionaryIndex;
use crate::models::{Candidate, Direction, LatticeColumn, Preset};
use crate::reverse::ReverseDecomposer;
use crate::rules::RuleSet;
use crate::text::{normalize_text, split_katakana_tokens, tokenize_vietnamese};

/// Result of one transliteration call.
#[derive(Debug, Clone, Serialize)]
pub struct Transliteration {
  /// 変換方向
  pub direction: Direction,
  /// 使用したプリセット
  pub preset: Preset,
  /// 入力トークン（入力表記のまま）
  pub tokens: Vec<String>,
  /// トークンごとの断片候補
  pub lattice: Vec<LatticeColumn>,
  /// 重複除去済みの候補（ビーム順）
  pub candidates: Vec<Candidate>,
  /// ビームサーチ中の最大ビーム長
  pub peak_beam_len: usize,
}

/// 候補生成エンジン
#[derive(Debug, Clone)]
pub struct Engine {
  rules: Arc<RuleSet>,
  index: Arc<DictionaryIndex>,
}

impl Engine {
  /// Constructor for Engine
  pub fn new(rules: Arc<RuleSet>, index: Arc<DictionaryIndex>) -> Self {
    Self { rules, index }
  }

  /// 規則テーブル
  pub fn rules(&self) -> &RuleSet {
    &self.rules
  }

  /// 逆方向辞書
  pub fn index(&self) -> &DictionaryIndex {
    &self.index
  }

  /// ベトナム語 → カタカナ
  ///
  /// # エラー
  /// - 正規化後にトークンが残らない場合 `TransliterationError::EmptyInput`
  pub fn forward(
    &self,
    text: &str,
    preset: Preset,
    result_count: usize,
  ) -> Result<Transliteration, TransliterationError> {
    let tokens = tokenize_vietnamese(text);
    if tokens.is_empty() {
      return Err(TransliterationError::EmptyInput);
    }

    let synthesizer = ForwardSynthesizer::new(&self.rules);
    let lattice: Vec<LatticeColumn> =
      tokens.iter().map(|token| synthesizer.synthesize(token, preset)).collect();
    let originals = tokens.iter().map(|t| t.original().to_string()).collect();

    Ok(assemble(Direction::ViToJa, preset, originals, lattice, result_count, &ForwardScorer))
  }

  /// カタカナ → ベトナム語
  ///
  /// # エラー
  /// - 正規化後にトークンが残らない場合 `TransliterationError::EmptyInput`
  pub fn reverse(
    &self,
    text: &str,
    preset: Preset,
    result_count: usize,
  ) -> Result<Transliteration, TransliterationError> {
    let tokens = split_katakana_tokens(&normalize_text(text));
    if tokens.is_empty() {
      return Err(TransliterationError::EmptyInput);
    }

    let decomposer = ReverseDecomposer::new(&self.index);
    let lattice: Vec<LatticeColumn> =
      tokens.iter().map(|token| decomposer.decompose(token, preset)).collect();

    Ok(assemble(Direction::JaToVi, preset, tokens, lattice, result_count, &ReverseScorer))
  }

  /// 方向を指定して変換する
  pub fn transliterate(
    &self,
    direction: Direction,
    text: &str,
    preset: Preset,
    result_count: usize,
  ) -> Result<Transliteration, TransliterationError> {
    match direction {
      Direction::ViToJa => self.forward(text, preset, result_count),
      Direction::JaToVi => self.reverse(text, preset, result_count),
    }
  }
}

fn assemble(
  direction: Direction,
  preset: Preset,
  tokens: Vec<String>,
  lattice: Vec<LatticeColumn>,
  result_count: usize,
  scorer: &dyn PathScorer,
) -> Transliteration {
  let assembly =
    BeamAssembler::new(result_count).assemble(&lattice, scorer, direction.separator());

  debug!(
    %direction,
    %preset,
    tokens = tokens.len(),
    candidates = assembly.candidates.len(),
    peak_beam_len = assembly.peak_beam_len,
    "Transliteration assembled"
  );

  Transliteration {
    direction,
    preset,
    tokens,
    lattice,
    candidates: assembly.candidates,
    peak_beam_len: assembly.peak_beam_len,
  }
}

// ─────────────────────────────────────────────────────────────────────────────
// Test Module
// ─────────────────────────────────────────────────────────────────────────────
