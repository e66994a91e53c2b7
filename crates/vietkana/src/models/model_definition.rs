//! Data Model Definition
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Tuning profile controlling how many fragment alternatives survive per syllable.
///
/// The short aliases (`hoso`, `tunenhat`, `ganamviet`) are the names used by existing clients
/// and are accepted wherever a preset is parsed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Preset {
  /// Stable, document-friendly renderings (fewest, shortest fragments)
  #[serde(alias = "hoso")]
  Stability,
  /// Renderings that read naturally to Japanese speakers
  #[serde(alias = "tunenhat")]
  Naturalness,
  /// Renderings that stay close to the Vietnamese sound (most fragments)
  #[serde(alias = "ganamviet")]
  SourceCloseness,
}

impl Preset {
  /// All presets, from the most to the least restrictive.
  pub const ALL: [Preset; 3] = [Preset::Stability, Preset::Naturalness, Preset::SourceCloseness];

  /// Returns the canonical preset name.
  pub fn code(&self) -> &'static str {
    match self {
      Preset::Stability => "stability",
      Preset::Naturalness => "naturalness",
      Preset::SourceCloseness => "source-closeness",
    }
  }

  /// Maximum number of fragment alternatives kept per syllable.
  ///
  /// - `Stability`: 4
  /// - `Naturalness`: 6
  /// - `SourceCloseness`: 8
  pub fn fragment_limit(&self) -> usize {
    match self {
      Preset::Stability => 4,
      Preset::Naturalness => 6,
      Preset::SourceCloseness => 8,
    }
  }
}

impl fmt::Display for Preset {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{}", self.code())
  }
}

impl FromStr for Preset {
  type Err = String;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    match s.trim().to_lowercase().as_str() {
      "stability" | "hoso" => Ok(Self::Stability),
      "naturalness" | "tunenhat" => Ok(Self::Naturalness),
      "source-closeness" | "ganamviet" => Ok(Self::SourceCloseness),
      _ => Err(format!(
        "Unknown preset: {}. Valid values: stability, naturalness, source-closeness",
        s
      )),
    }
  }
}

/// Transliteration direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Direction {
  /// Vietnamese → Katakana
  #[serde(alias = "vi2ja")]
  ViToJa,
  /// Katakana → Vietnamese
  #[serde(alias = "ja2vi")]
  JaToVi,
}

impl Direction {
  /// Returns the direction code.
  pub fn code(&self) -> &'static str {
    match self {
      Direction::ViToJa => "vi-to-ja",
      Direction::JaToVi => "ja-to-vi",
    }
  }

  /// Separator placed between syllables of a whole-name candidate.
  ///
  /// - Katakana output: `"・"` (middle dot)
  /// - Vietnamese output: `" "`
  pub fn separator(&self) -> &'static str {
    match self {
      Direction::ViToJa => "・",
      Direction::JaToVi => " ",
    }
  }
}

impl fmt::Display for Direction {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{}", self.code())
  }
}

/// Where a fragment alternative came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FragmentOrigin {
  /// Verbatim entry of the rule-override table
  RuleOverride,
  /// Synthesized from onset / nucleus / coda tables
  Phonology,
  /// Last resort: the tone-stripped token itself
  Literal,
  /// Attested surface form that is also a known given name
  GivenName,
  /// Attested surface form from the syllable dictionary
  Dictionary,
  /// Romanization with no attested Vietnamese syllable behind it
  Unverified,
}

impl FragmentOrigin {
  /// `true` for origins that signal a best-effort result.
  pub fn is_low_confidence(&self) -> bool {
    matches!(self, FragmentOrigin::Literal | FragmentOrigin::Unverified)
  }
}

/// One rendering alternative for a single syllable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Fragment {
  /// Rendered text
  pub text: String,
  /// Provenance of the rendering
  pub origin: FragmentOrigin,
}

impl Fragment {
  /// Constructor for Fragment
  pub fn new(text: impl Into<String>, origin: FragmentOrigin) -> Self {
    Self {
      text: text.into(),
      origin,
    }
  }
}

/// One column of the lattice: a syllable and its ordered alternatives (first = preferred).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LatticeColumn {
  /// Syllable key shown in breakdowns (tone-stripped for Vietnamese input)
  pub syllable: String,
  /// Ordered, non-empty list of alternatives
  pub fragments: Vec<Fragment>,
}

impl LatticeColumn {
  /// Texts of all alternatives, in order.
  pub fn alternative_texts(&self) -> Vec<String> {
    self.fragments.iter().map(|f| f.text.clone()).collect()
  }

  /// Breakdown record for the alternative at `rank` (`None` if out of range).
  pub fn breakdown(&self, rank: usize) -> Option<Breakdown> {
    self.fragments.get(rank).map(|chosen| Breakdown {
      syllable: self.syllable.clone(),
      chosen: chosen.text.clone(),
      alternatives: self.alternative_texts(),
      origin: chosen.origin,
    })
  }
}

/// Per-syllable explanation attached to a whole-name candidate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Breakdown {
  /// Syllable key
  pub syllable: String,
  /// Fragment used by this candidate
  pub chosen: String,
  /// All alternatives that were available for the syllable
  pub alternatives: Vec<String>,
  /// Provenance of `chosen`
  pub origin: FragmentOrigin,
}

impl Breakdown {
  /// `true` when the chosen fragment is a best-effort result.
  pub fn is_low_confidence(&self) -> bool {
    self.origin.is_low_confidence()
  }
}

/// Whole-name candidate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Candidate {
  /// Joined rendering of the full name
  pub text: String,
  /// One breakdown record per syllable (empty for spliced user preferences)
  #[serde(default)]
  pub breakdown: Vec<Breakdown>,
}

impl Candidate {
  /// `true` if any syllable of the candidate is low-confidence.
  pub fn has_low_confidence(&self) -> bool {
    self.breakdown.iter().any(Breakdown::is_low_confidence)
  }
}

// ─────────────────────────────────────────────────────────────────────────────
// Test Module
// ─────────────────────────────────────────────────────────────────────────────
