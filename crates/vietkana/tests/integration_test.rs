//! VietKanaService の統合テスト
//!
//! 一時ディレクトリーに辞書ファイル・上書きルール・設定を用意し、初期化から変換までを通す。

use std::fs;
use std::path::Path;

use serde_json::json;
use tempfile::TempDir;

use vietkana::errors::{ConfigError, LexiconError, RerankError, RuleError};
use vietkana::service::{
  ConvertRequest, InMemoryPreferences, RankedCandidate, RerankRequest, Reranker,
};
use vietkana::{Direction, Preset, VietKanaConfig, VietKanaError, VietKanaService};

// ─── Fixtures ───────────────────────────────────────────────────────────

fn write_lexicon(dir: &Path) {
  fs::write(
    dir.join("syllables.txt"),
    "nguyễn\ntrần\nthị\nvăn\nlan\nlân\nmai\nhương\ntuấn\nminh\n",
  )
  .unwrap();
  fs::write(dir.join("girl.txt"), "Lan\nMai\nHương\n").unwrap();
  fs::write(dir.join("boy_one_word.txt"), "Tuấn\nMinh\n").unwrap();
}

fn config_for(dir: &Path, extra: serde_json::Value) -> VietKanaConfig {
  let mut value = json!({
    "lexicon": { "data_dir": dir },
    "search": { "default_result_count": 5 },
    "logging": { "level": "debug" }
  });
  if let (Some(base), Some(extra)) = (value.as_object_mut(), extra.as_object()) {
    for (k, v) in extra {
      base.insert(k.clone(), v.clone());
    }
  }
  VietKanaConfig::from_json_str(&value.to_string()).unwrap()
}

fn service(dir: &TempDir) -> VietKanaService {
  write_lexicon(dir.path());
  VietKanaService::init(&config_for(dir.path(), json!({}))).unwrap()
}

fn request(input: &str, direction: Direction) -> ConvertRequest {
  ConvertRequest {
    input: input.to_string(),
    direction,
    preset: None,
    result_count: None,
  }
}

/// Prefers the longest candidate text.
struct LengthReranker;

impl Reranker for LengthReranker {
  fn rerank(&self, request: &RerankRequest<'_>) -> Result<Vec<RankedCandidate>, RerankError> {
    Ok(
      request
        .candidates
        .iter()
        .map(|text| RankedCandidate {
          text: text.clone(),
          score: text.chars().count().min(100) as u8,
          explanation: "length".to_string(),
        })
        .collect(),
    )
  }
}

struct BrokenReranker;

impl Reranker for BrokenReranker {
  fn rerank(&self, _request: &RerankRequest<'_>) -> Result<Vec<RankedCandidate>, RerankError> {
    Err(RerankError::InvalidResponse("not json".to_string()))
  }
}

// ─── Initialization ─────────────────────────────────────────────────────

/// 設定ファイルから初期化できる。
#[test]
fn init_from_config_file() {
  let dir = TempDir::new().unwrap();
  write_lexicon(dir.path());
  let config_path = dir.path().join("vietkana.json");
  fs::write(&config_path, json!({ "lexicon": { "data_dir": dir.path() } }).to_string()).unwrap();

  let config = VietKanaConfig::from_path(&config_path).unwrap();
  let service = VietKanaService::init(&config).unwrap();
  assert_eq!(service.engine().index().syllable_count(), 10);
  assert_eq!(service.engine().index().given_name_count(), 5);
}

/// 音節リストが無いと Lexicon エラーになる。
#[test]
fn init_fails_without_syllable_list() {
  let dir = TempDir::new().unwrap();
  let err = VietKanaService::init(&config_for(dir.path(), json!({}))).unwrap_err();
  assert!(
    matches!(err, VietKanaError::Lexicon(LexiconError::MissingSyllableFile(_))),
    "unexpected error: {err:?}"
  );
}

/// 不正な設定は Config エラーになる。
#[test]
fn init_fails_on_invalid_config() {
  let dir = TempDir::new().unwrap();
  write_lexicon(dir.path());
  let config = config_for(dir.path(), json!({ "search": { "min_result_count": 0 } }));
  let err = VietKanaService::init(&config).unwrap_err();
  assert!(matches!(err, VietKanaError::Config(ConfigError::InvalidMinResultCount { .. })));
}

/// 壊れた上書きルールファイルは Rule エラーになる。
#[test]
fn init_fails_on_malformed_override_file() {
  let dir = TempDir::new().unwrap();
  write_lexicon(dir.path());
  let rules_path = dir.path().join("overrides.json");
  fs::write(&rules_path, "{ not json").unwrap();

  let config = config_for(dir.path(), json!({ "rules": { "override_file": rules_path } }));
  let err = VietKanaService::init(&config).unwrap_err();
  assert!(matches!(err, VietKanaError::Rule(RuleError::Parse(_))));
}

// ─── Conversion ─────────────────────────────────────────────────────────

/// 上書きルールファイルの内容が組み込み規則より優先され、逆方向の辞書にも反映される。
#[test]
fn override_file_applies_to_both_directions() {
  let dir = TempDir::new().unwrap();
  write_lexicon(dir.path());
  let rules_path = dir.path().join("overrides.json");
  fs::write(&rules_path, json!([{ "vi": "Lân", "kana": ["ルン"] }]).to_string()).unwrap();

  let config = config_for(dir.path(), json!({ "rules": { "override_file": rules_path } }));
  let service = VietKanaService::init(&config).unwrap();

  let forward = service.convert(&request("Lân", Direction::ViToJa), None, None).unwrap();
  assert_eq!(forward.results[0].text, "ルン");

  let reverse = service.convert(&request("ルン", Direction::JaToVi), None, None).unwrap();
  assert!(reverse.results.iter().any(|r| r.text == "Lân"));
}

/// 順方向と逆方向の変換がどちらも結果を返す。
#[test]
fn convert_both_directions() {
  let dir = TempDir::new().unwrap();
  let service = service(&dir);

  let forward = service.convert(&request("Trần Thị Mai", Direction::ViToJa), None, None).unwrap();
  assert_eq!(forward.normalized, "tran thi mai");
  assert_eq!(forward.results[0].text, "チャン・ティ・マイ");
  assert!(forward.results.len() <= 5);

  let reverse =
    service.convert(&request("チャン・ティ・マイ", Direction::JaToVi), None, None).unwrap();
  assert_eq!(reverse.results[0].text, "Trần Thị Mai");
  assert!(!reverse.results[0].breakdown.is_empty());
}

/// 以前選ばれた表記が先頭に差し込まれる。
#[test]
fn remembered_choice_is_spliced_first() {
  let dir = TempDir::new().unwrap();
  let service = service(&dir);

  let mut prefs = InMemoryPreferences::new();
  let key = service.preference_key(Direction::ViToJa, Preset::Stability, "trần  thị MAI");
  prefs.remember(key, "チャン・ティー・マイ");

  let resp =
    service.convert(&request("Trần Thị Mai", Direction::ViToJa), Some(&prefs), None).unwrap();
  assert_eq!(resp.results[0].text, "チャン・ティー・マイ");
  assert_eq!(resp.results.iter().filter(|r| r.text == "チャン・ティー・マイ").count(), 1);
}

/// リランカーのスコアで並び替えられる。
#[test]
fn reranker_reorders_results() {
  let dir = TempDir::new().unwrap();
  let service = service(&dir);

  let mut req = request("Văn", Direction::ViToJa);
  req.preset = Some(Preset::SourceCloseness);
  let resp = service.convert(&req, None, Some(&LengthReranker)).unwrap();

  assert!(resp.reranked);
  assert_eq!(resp.results[0].text, "ヴァン");
  assert_eq!(resp.results[0].score, 3);
  assert_eq!(resp.results[0].explanation, "length");
}

/// リランカーが失敗しても変換は成功し、中立スコアになる。
#[test]
fn broken_reranker_degrades_gracefully() {
  let dir = TempDir::new().unwrap();
  let service = service(&dir);

  let resp =
    service.convert(&request("ラン", Direction::JaToVi), None, Some(&BrokenReranker)).unwrap();
  assert!(!resp.reranked);
  assert_eq!(resp.results[0].text, "Lan");
  assert!(resp.results.iter().all(|r| r.score == 50));
}

/// 空入力はエラーになる。
#[test]
fn empty_input_is_an_error() {
  let dir = TempDir::new().unwrap();
  let service = service(&dir);

  let err = service.convert(&request("  ", Direction::JaToVi), None, None).unwrap_err();
  assert!(matches!(err, VietKanaError::Transliteration(_)));
}
