//! Vietnamese syllable → Katakana fragment alternatives.

use tracing::debug;

use crate::forward::decomposer::{Decomposition, decompose};
use crate::models::{Fragment, FragmentOrigin, LatticeColumn, Preset};
use crate::rules::RuleSet;
use crate::text::{SyllableToken, collapse_long_vowel_runs};

/// Liquid onsets whose rendering depends on the following vowel.
const LIQUID_ONSETS: [&str; 2] = ["l", "r"];

/// Ra-row kana for a liquid onset, selected by how the nucleus starts. Checked in order.
const LIQUID_ROWS: &[(&[&str], &str)] = &[
  (&["a", "ă", "â", "oa", "oe"], "ラ"),
  (&["i", "y", "ia", "ya", "iê", "yê", "uy", "uyê"], "リ"),
  (&["e", "ê"], "レ"),
  (&["o", "ô", "ơ", "uô", "ươ"], "ロ"),
];

/// Ra-row kana used when no row matches (u, ư, ua, ưa, ...).
const LIQUID_DEFAULT: &str = "ル";

/// Fragment synthesizer over a shared rule set.
#[derive(Debug, Clone, Copy)]
pub struct ForwardSynthesizer<'r> {
  rules: &'r RuleSet,
}

impl<'r> ForwardSynthesizer<'r> {
  /// Constructor for ForwardSynthesizer
  pub fn new(rules: &'r RuleSet) -> Self {
    Self { rules }
  }

  /// Produces the preset-truncated alternatives for one token.
  ///
  /// The returned column is never empty: when nothing can be synthesized the tone-stripped
  /// token itself is the only alternative.
  pub fn synthesize(&self, token: &SyllableToken, preset: Preset) -> LatticeColumn {
    let stripped = token.stripped();

    let fragments = if let Some(fixed) = self.rules.overrides().lookup(stripped) {
      to_fragments(fixed.iter().cloned(), FragmentOrigin::RuleOverride)
    } else {
      let kept = apply_preset(self.phonological(token.shaped()), preset);
      to_fragments(kept, FragmentOrigin::Phonology)
    };

    let fragments = if fragments.is_empty() {
      vec![Fragment::new(stripped, FragmentOrigin::Literal)]
    } else {
      fragments
    };

    debug!(
      syllable = %stripped,
      origin = ?fragments[0].origin,
      fragments = fragments.len(),
      "Synthesized syllable"
    );

    LatticeColumn {
      syllable: stripped.to_string(),
      fragments,
    }
  }

  /// Every rendering the rules can produce for a token, before preset truncation.
  ///
  /// Override entries are returned verbatim. May be empty.
  pub fn all_renderings(&self, token: &SyllableToken) -> Vec<String> {
    match self.rules.overrides().lookup(token.stripped()) {
      Some(fixed) => fixed.to_vec(),
      None => self.phonological(token.shaped()),
    }
  }

  /// Deduplicated phonological combinations in generation order.
  fn phonological(&self, shaped: &str) -> Vec<String> {
    let Decomposition {
      onset,
      nucleus,
      coda,
    } = decompose(self.rules, shaped);
    let coda_alts = self.rules.codas().alternatives_or_empty(coda);

    let combined: Vec<String> = if LIQUID_ONSETS.contains(&onset) {
      let row = liquid_row(nucleus);
      coda_alts.iter().map(|c| format!("{row}{c}")).collect()
    } else {
      let onset_alts = self.rules.onsets().alternatives_or_empty(onset);
      let nucleus_alts = self.nucleus_alternatives(nucleus);
      let mut out = Vec::with_capacity(onset_alts.len() * nucleus_alts.len() * coda_alts.len());
      for o in &onset_alts {
        for n in &nucleus_alts {
          for c in &coda_alts {
            out.push(format!("{o}{n}{c}"));
          }
        }
      }
      out
    };

    dedup_preserving_order(
      combined
        .into_iter()
        .map(|s| collapse_long_vowel_runs(&s))
        .filter(|s| !s.is_empty()),
    )
  }

  /// Nucleus alternatives: the longest table prefix, with any leftover characters mapped one by
  /// one and appended; or a single per-character mapping when no prefix matches.
  fn nucleus_alternatives(&self, nucleus: &str) -> Vec<String> {
    let table = self.rules.nuclei();
    let alts = match table.longest_prefix(nucleus) {
      Some(hit) => {
        let tail = table.map_per_character(&nucleus[hit.pattern().len()..]);
        hit.fragments().iter().map(|f| format!("{f}{tail}")).collect()
      }
      None => {
        let mapped = table.map_per_character(nucleus);
        if mapped.is_empty() { Vec::new() } else { vec![mapped] }
      }
    };
    if alts.is_empty() { vec![String::new()] } else { alts }
  }
}

/// Selects the single ra-row kana for a liquid onset from the start of the nucleus.
pub fn liquid_row(nucleus: &str) -> &'static str {
  LIQUID_ROWS
    .iter()
    .find(|(starts, _)| starts.iter().any(|s| nucleus.starts_with(*s)))
    .map_or(LIQUID_DEFAULT, |(_, kana)| *kana)
}

/// Preset truncation.
///
/// - `Stability`: stable sort by character length, keep 4
/// - `Naturalness`: keep the first 6
/// - `SourceCloseness`: keep the first 8
pub fn apply_preset(mut alternatives: Vec<String>, preset: Preset) -> Vec<String> {
  if preset == Preset::Stability {
    alternatives.sort_by_key(|s| s.chars().count());
  }
  alternatives.truncate(preset.fragment_limit());
  alternatives
}

fn dedup_preserving_order<I>(items: I) -> Vec<String>
where
  I: IntoIterator<Item = String>,
{
  let mut seen = std::collections::HashSet::new();
  items.into_iter().filter(|s| seen.insert(s.clone())).collect()
}

fn to_fragments<I>(texts: I, origin: FragmentOrigin) -> Vec<Fragment>
where
  I: IntoIterator<Item = String>,
{
  texts.into_iter().map(|t| Fragment::new(t, origin)).collect()
}
