//! forward 用のテスト
//! ベトナム語 → カタカナ方向の統合テスト

use std::collections::HashSet;
use std::sync::Arc;

use vietkana::engine::Engine;
use vietkana::errors::TransliterationError;
use vietkana::forward::ForwardSynthesizer;
use vietkana::lattice::beam_width;
use vietkana::lexicon::DictionaryIndex;
use vietkana::models::{FragmentOrigin, Preset};
use vietkana::rules::{RuleOverride, RuleOverrides, RuleSet};
use vietkana::text::SyllableToken;

fn engine_with(rules: RuleSet) -> Engine {
  Engine::new(Arc::new(rules), Arc::new(DictionaryIndex::default()))
}

fn engine() -> Engine {
  engine_with(RuleSet::builtin())
}

/// "lan" は流音規則でラ行が選ばれ、全候補がラで始まる。
#[test]
fn lan_with_stability_starts_with_ra() {
  let out = engine().forward("lan", Preset::Stability, 10).unwrap();

  assert!(!out.candidates.is_empty());
  for candidate in &out.candidates {
    assert!(candidate.text.starts_with('ラ'), "unexpected candidate: {}", candidate.text);
  }
}

/// 空入力は EmptyInput になり候補は生成されない。
#[test]
fn empty_input_is_rejected() {
  for input in ["", "   ", "\t\n"] {
    let err = engine().forward(input, Preset::Stability, 10).unwrap_err();
    assert_eq!(err, TransliterationError::EmptyInput);
  }
}

/// 上書き規則は音韻合成より優先され、プリセットに関係なく同一になる。
#[test]
fn override_beats_phonology() {
  let custom = RuleOverrides::new(vec![RuleOverride {
    vi: "Lan".to_string(),
    kana: vec!["ランー".to_string()],
  }])
  .unwrap();
  let engine = engine_with(RuleSet::with_custom_overrides(custom));

  for preset in Preset::ALL {
    let out = engine.forward("Lan", preset, 10).unwrap();
    assert_eq!(out.candidates.len(), 1);
    assert_eq!(out.candidates[0].text, "ランー");
    assert_eq!(out.candidates[0].breakdown[0].origin, FragmentOrigin::RuleOverride);
  }
}

/// プリセットが緩くなるほどトークンごとの断片数は増える（減らない）。
#[test]
fn preset_fragment_counts_are_monotonic() {
  let rules = RuleSet::builtin();
  let synth = ForwardSynthesizer::new(&rules);

  for word in ["Quyết", "Nghĩa", "Người", "Khánh", "Phương", "Xuân", "Tuấn"] {
    let token = SyllableToken::new(word);
    let counts: Vec<usize> =
      Preset::ALL.iter().map(|p| synth.synthesize(&token, *p).fragments.len()).collect();
    assert!(counts[0] <= counts[1] && counts[1] <= counts[2], "{word}: {counts:?}");
    assert!(counts[0] <= 4 && counts[1] <= 6 && counts[2] <= 8, "{word}: {counts:?}");
  }
}

/// 候補テキストに重複はない。
#[test]
fn candidate_texts_are_unique() {
  let out = engine().forward("Nguyễn Quyết Thắng", Preset::SourceCloseness, 30).unwrap();
  let mut seen = HashSet::new();
  for candidate in &out.candidates {
    assert!(seen.insert(candidate.text.clone()), "duplicate: {}", candidate.text);
  }
}

/// 同じ入力に対して同じ結果を返す。
#[test]
fn repeated_calls_are_deterministic() {
  let engine = engine();
  let first = engine.forward("Phạm Nhật Vượng", Preset::Naturalness, 12).unwrap();
  let second = engine.forward("Phạm Nhật Vượng", Preset::Naturalness, 12).unwrap();

  let texts = |t: &vietkana::Transliteration| -> Vec<String> {
    t.candidates.iter().map(|c| c.text.clone()).collect()
  };
  assert_eq!(texts(&first), texts(&second));
  assert_eq!(first.candidates, second.candidates);
}

/// ビーム長は max(120, n × 16) を超えない。
#[test]
fn beam_never_exceeds_width() {
  let engine = engine();
  let name = "Quyết Khánh Phương Xuân Tuấn Nghĩa";
  for n in [1, 3, 10, 30] {
    let out = engine.forward(name, Preset::SourceCloseness, n).unwrap();
    assert!(out.peak_beam_len <= beam_width(n), "n={n}: {}", out.peak_beam_len);
    assert!(out.candidates.len() <= n * 5);
  }
}

/// 各候補は音節ごとの内訳を持ち、選ばれた断片は候補一覧に含まれる。
#[test]
fn breakdown_matches_candidate_text() {
  let out = engine().forward("Trần Thị Mai", Preset::Naturalness, 10).unwrap();

  for candidate in &out.candidates {
    assert_eq!(candidate.breakdown.len(), 3);
    let joined: Vec<&str> = candidate.breakdown.iter().map(|b| b.chosen.as_str()).collect();
    assert_eq!(candidate.text, joined.join("・"));
    for b in &candidate.breakdown {
      assert!(b.alternatives.contains(&b.chosen));
    }
  }
  assert_eq!(out.candidates[0].breakdown[0].syllable, "tran");
}

/// 合成できない入力でも候補は 1 つ以上あり、低信頼として扱われる。
#[test]
fn unmappable_token_still_yields_candidate() {
  let out = engine().forward("2024", Preset::Stability, 5).unwrap();
  assert_eq!(out.candidates.len(), 1);
  assert_eq!(out.candidates[0].text, "2024");
  assert!(out.candidates[0].has_low_confidence());
}
