//! Katakana token → Vietnamese surface-form alternatives.

use tracing::debug;

use crate::lexicon::DictionaryIndex;
use crate::models::{Fragment, FragmentOrigin, LatticeColumn, Preset};
use crate::reverse::romanizer::katakana_to_romaji;
use crate::text::capitalize_syllable;

/// Dictionary-backed decomposer for the Katakana → Vietnamese direction.
#[derive(Debug, Clone, Copy)]
pub struct ReverseDecomposer<'d> {
  index: &'d DictionaryIndex,
}

impl<'d> ReverseDecomposer<'d> {
  /// Constructor for ReverseDecomposer
  pub fn new(index: &'d DictionaryIndex) -> Self {
    Self { index }
  }

  /// Produces the alternatives for one Katakana token.
  ///
  /// Attested surface forms come from three lookups, in this order:
  /// 1. the romanization as a tone-stripped syllable key
  /// 2. the token itself in the reading index
  /// 3. the romanization as a tone-stripped given-name key (names missing from the syllable list)
  ///
  /// Given names are moved to the front, the list is capped at the preset limit and shown
  /// title-cased. Without any hit the only alternative is the raw romanization (or the token
  /// itself when nothing romanizes), marked unverified.
  pub fn decompose(&self, token: &str, preset: Preset) -> LatticeColumn {
    let romaji = katakana_to_romaji(token);

    let mut surfaces: Vec<&str> = Vec::new();
    let hits = self
      .index
      .lookup(&romaji)
      .iter()
      .chain(self.index.lookup_reading(token))
      .chain(self.index.lookup_given_names(&romaji));
    for surface in hits {
      if !surfaces.contains(&surface.as_str()) {
        surfaces.push(surface);
      }
    }

    let (given, others): (Vec<&str>, Vec<&str>) =
      surfaces.into_iter().partition(|s| self.index.is_given_name(s));

    let mut fragments: Vec<Fragment> = given
      .into_iter()
      .map(|s| (s, FragmentOrigin::GivenName))
      .chain(others.into_iter().map(|s| (s, FragmentOrigin::Dictionary)))
      .take(preset.fragment_limit())
      .map(|(s, origin)| Fragment::new(capitalize_syllable(s), origin))
      .collect();

    if fragments.is_empty() {
      let fallback = if romaji.is_empty() { token.to_string() } else { romaji.clone() };
      fragments.push(Fragment::new(fallback, FragmentOrigin::Unverified));
    }

    debug!(
      token,
      romaji = %romaji,
      origin = ?fragments[0].origin,
      fragments = fragments.len(),
      "Decomposed katakana token"
    );

    LatticeColumn {
      syllable: token.to_string(),
      fragments,
    }
  }
}
