//! lattice モジュール
//!
//! Beam-search assembly of per-syllable alternatives into whole-name candidates, and the path
//! scorers used by each direction.

pub mod beam;

/// 再エクスポート
pub use beam::{Assembly, BeamAssembler, PathScorer, beam_width};

use crate::models::{Fragment, FragmentOrigin};

/// Bonus for picking the preferred (first) alternative of a column.
pub const FIRST_CHOICE_BONUS: i32 = 120;

/// Scorer for Katakana output.
///
/// | condition                        | score |
/// |----------------------------------|-------|
/// | first alternative                | +120  |
/// | fragment longer than 10 chars    | −80   |
/// | fragment of 2 chars or fewer     | −40   |
#[derive(Debug, Clone, Copy, Default)]
pub struct ForwardScorer;

impl ForwardScorer {
  const LONG_FRAGMENT_CHARS: usize = 10;
  const LONG_FRAGMENT_PENALTY: i32 = 80;
  const SHORT_FRAGMENT_CHARS: usize = 2;
  const SHORT_FRAGMENT_PENALTY: i32 = 40;
}

impl PathScorer for ForwardScorer {
  fn local_score(&self, rank: usize, fragment: &Fragment) -> i32 {
    let mut score = if rank == 0 { FIRST_CHOICE_BONUS } else { 0 };
    let chars = fragment.text.chars().count();
    if chars > Self::LONG_FRAGMENT_CHARS {
      score -= Self::LONG_FRAGMENT_PENALTY;
    }
    if chars <= Self::SHORT_FRAGMENT_CHARS {
      score -= Self::SHORT_FRAGMENT_PENALTY;
    }
    score
  }
}

/// Scorer for Vietnamese output: attested syllables win, known given names win more.
#[derive(Debug, Clone, Copy, Default)]
pub struct ReverseScorer;

impl ReverseScorer {
  const GIVEN_NAME_BONUS: i32 = 400;
  const DICTIONARY_BONUS: i32 = 200;
  const UNVERIFIED_PENALTY: i32 = 600;
}

impl PathScorer for ReverseScorer {
  fn local_score(&self, rank: usize, fragment: &Fragment) -> i32 {
    let first = if rank == 0 { FIRST_CHOICE_BONUS } else { 0 };
    let origin = match fragment.origin {
      FragmentOrigin::GivenName => Self::GIVEN_NAME_BONUS,
      FragmentOrigin::Dictionary => Self::DICTIONARY_BONUS,
      FragmentOrigin::Unverified => -Self::UNVERIFIED_PENALTY,
      _ => 0,
    };
    first + origin
  }
}
