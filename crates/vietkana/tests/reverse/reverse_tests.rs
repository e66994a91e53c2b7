//! reverse 用のテスト
//! カタカナ → ベトナム語方向の統合テスト

use std::sync::Arc;

use vietkana::engine::Engine;
use vietkana::errors::TransliterationError;
use vietkana::lexicon::DictionaryIndex;
use vietkana::models::{FragmentOrigin, Preset};
use vietkana::reverse::katakana_to_romaji;
use vietkana::rules::RuleSet;

const SYLLABLES: &[&str] = &[
  "nguyễn", "trần", "lê", "phạm", "thị", "văn", "lan", "lân", "mai", "hương", "tuấn", "anh",
  "minh", "quang", "hải", "đức",
];

const GIVEN_NAMES: &[&str] = &["Lan", "Mai", "Hương", "Tuấn", "Anh", "Minh", "Hải", "Đức"];

fn engine() -> Engine {
  let rules = Arc::new(RuleSet::builtin());
  let index = Arc::new(DictionaryIndex::build(SYLLABLES, GIVEN_NAMES, &rules));
  Engine::new(rules, index)
}

/// 辞書に無いトークンはローマ字化そのままの候補 1 つになり、低信頼として印が付く。
#[test]
fn unattested_token_yields_single_unverified_candidate() {
  let romaji = katakana_to_romaji("ズキ");
  let out = engine().reverse("ズキ", Preset::Naturalness, 10).unwrap();

  assert_eq!(out.candidates.len(), 1);
  let candidate = &out.candidates[0];
  assert_eq!(candidate.text, romaji);
  assert_eq!(candidate.breakdown.len(), 1);
  assert_eq!(candidate.breakdown[0].origin, FragmentOrigin::Unverified);
  assert!(candidate.has_low_confidence());
}

/// 区切りだけの入力は EmptyInput になる。
#[test]
fn separator_only_input_is_rejected() {
  let err = engine().reverse(" ・・ ", Preset::Stability, 10).unwrap_err();
  assert_eq!(err, TransliterationError::EmptyInput);
}

/// 名前リストにある表記が辞書のみの表記より先に来る。
#[test]
fn given_names_rank_first() {
  let out = engine().reverse("ラン", Preset::Stability, 10).unwrap();
  let texts: Vec<&str> = out.candidates.iter().map(|c| c.text.as_str()).collect();

  assert_eq!(texts, vec!["Lan", "Lân"]);
  assert_eq!(out.candidates[0].breakdown[0].origin, FragmentOrigin::GivenName);
  assert_eq!(out.candidates[1].breakdown[0].origin, FragmentOrigin::Dictionary);
}

/// 音節リストに無くても、ローマ字化が名前リストと一致すれば名前として扱われる。
#[test]
fn romanization_matching_given_name_is_not_unverified() {
  let rules = Arc::new(RuleSet::builtin());
  let index = Arc::new(DictionaryIndex::build(["lan"], ["Mai"], &rules));
  let out = Engine::new(rules, index).reverse("マイ", Preset::Stability, 5).unwrap();

  assert_eq!(out.candidates[0].text, "Mai");
  assert_eq!(out.candidates[0].breakdown[0].origin, FragmentOrigin::GivenName);
  assert!(!out.candidates[0].has_low_confidence());
}

/// 未確認のトークンは確認済みトークンと混在しても候補を壊さない。
#[test]
fn unverified_token_mixes_with_attested_ones() {
  let out = engine().reverse("グエン・ズキ", Preset::Stability, 5).unwrap();
  assert_eq!(out.candidates[0].text, "Nguyễn zuki");
  assert!(out.candidates[0].has_low_confidence());
  assert_eq!(out.candidates[0].breakdown[0].origin, FragmentOrigin::Dictionary);
}

/// 辞書にある名前は、順方向の上位候補を逆変換すると元の表記が候補に現れる。
#[test]
fn round_trip_recovers_attested_names() {
  let engine = engine();

  for name in ["Nguyễn Thị Lan", "Trần Văn Tuấn", "Lê Minh Hải", "Phạm Quang Đức"] {
    for preset in Preset::ALL {
      let forward = engine.forward(name, preset, 10).unwrap();
      for candidate in forward.candidates.iter().take(3) {
        let back = engine.reverse(&candidate.text, preset, 30).unwrap();
        assert!(
          back.candidates.iter().any(|c| c.text == name),
          "{name} → {} → {:?}",
          candidate.text,
          back.candidates.iter().map(|c| c.text.as_str()).collect::<Vec<_>>()
        );
      }
    }
  }
}

/// 同じ入力に対して同じ結果を返す。
#[test]
fn repeated_calls_are_deterministic() {
  let engine = engine();
  let first = engine.reverse("チャン・ティ・マイ", Preset::SourceCloseness, 10).unwrap();
  let second = engine.reverse("チャン・ティ・マイ", Preset::SourceCloseness, 10).unwrap();
  assert_eq!(first.candidates, second.candidates);
  assert!(!first.candidates.is_empty());
}
