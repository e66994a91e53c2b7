//! In-memory reverse dictionary.
//!
//! Four lookups are built once from the syllable list and the given-name lists:
//!
//! | index            | key                                  | value                       |
//! |------------------|--------------------------------------|-----------------------------|
//! | syllable index   | tone-stripped lowercase (`thang`)    | surface forms (`thắng`, …)  |
//! | given names      | lowercase surface form               | (membership only)           |
//! | given-name keys  | tone-stripped lowercase (`mai`)      | given-name surface forms    |
//! | reading index    | Katakana fragment (`タン`)           | surface forms rendering it  |
//!
//! The reading index is the inverse of the forward synthesizer over every attested syllable, so a
//! Katakana fragment produced by the forward direction finds its way back to its source.

use std::collections::{HashMap, HashSet};

use crate::forward::ForwardSynthesizer;
use crate::rules::RuleSet;
use crate::text::{SyllableToken, normalize_text, strip_tones};

/// Read-only reverse dictionary, shared via `Arc`.
#[derive(Debug, Clone, Default)]
pub struct DictionaryIndex {
  syllables: HashMap<String, Vec<String>>,
  given_names: HashSet<String>,
  given_name_keys: HashMap<String, Vec<String>>,
  readings: HashMap<String, Vec<String>>,
  syllable_count: usize,
}

impl DictionaryIndex {
  /// Builds the index from raw list entries.
  ///
  /// Entries are trimmed and lowercased; blank entries are ignored and duplicates keep their
  /// first position.
  pub fn build<S, G>(syllables: S, given_names: G, rules: &RuleSet) -> Self
  where
    S: IntoIterator,
    S::Item: AsRef<str>,
    G: IntoIterator,
    G::Item: AsRef<str>,
  {
    let mut seen = HashSet::new();
    let surfaces: Vec<String> = syllables
      .into_iter()
      .map(|s| normalize_text(s.as_ref()).to_lowercase())
      .filter(|s| !s.is_empty())
      .filter(|s| seen.insert(s.clone()))
      .collect();

    let mut by_key: HashMap<String, Vec<String>> = HashMap::new();
    for surface in &surfaces {
      by_key.entry(strip_tones(surface)).or_default().push(surface.clone());
    }

    let synthesizer = ForwardSynthesizer::new(rules);
    let mut readings: HashMap<String, Vec<String>> = HashMap::new();
    for surface in &surfaces {
      for kana in synthesizer.all_renderings(&SyllableToken::new(surface.as_str())) {
        let forms = readings.entry(kana).or_default();
        if !forms.contains(surface) {
          forms.push(surface.clone());
        }
      }
    }

    let mut names = HashSet::new();
    let mut given_name_keys: HashMap<String, Vec<String>> = HashMap::new();
    for name in given_names {
      let name = normalize_text(name.as_ref()).to_lowercase();
      if !name.is_empty() && names.insert(name.clone()) {
        given_name_keys.entry(strip_tones(&name)).or_default().push(name);
      }
    }

    Self {
      syllables: by_key,
      given_names: names,
      given_name_keys,
      readings,
      syllable_count: surfaces.len(),
    }
  }

  /// Surface forms whose tone-stripped key equals `key` (lowercased before lookup).
  pub fn lookup(&self, key: &str) -> &[String] {
    self.syllables.get(&key.to_lowercase()).map_or(&[], Vec::as_slice)
  }

  /// Attested surface forms whose forward renderings include exactly `kana`.
  pub fn lookup_reading(&self, kana: &str) -> &[String] {
    self.readings.get(kana).map_or(&[], Vec::as_slice)
  }

  /// Given-name surface forms whose tone-stripped key equals `key`, whether or not they are in
  /// the syllable list.
  pub fn lookup_given_names(&self, key: &str) -> &[String] {
    self.given_name_keys.get(&key.to_lowercase()).map_or(&[], Vec::as_slice)
  }

  /// Case-insensitive given-name check.
  pub fn is_given_name(&self, surface: &str) -> bool {
    self.given_names.contains(&surface.to_lowercase())
  }

  /// `true` if the surface form is in the syllable list.
  pub fn is_attested(&self, surface: &str) -> bool {
    let surface = surface.to_lowercase();
    self.lookup(&strip_tones(&surface)).contains(&surface)
  }

  /// Number of distinct syllables.
  pub fn syllable_count(&self) -> usize {
    self.syllable_count
  }

  /// Number of distinct given names.
  pub fn given_name_count(&self) -> usize {
    self.given_names.len()
  }

  /// Number of distinct Katakana readings.
  pub fn reading_count(&self) -> usize {
    self.readings.len()
  }

  /// `true` when no syllable is loaded.
  pub fn is_empty(&self) -> bool {
    self.syllable_count == 0
  }
}
