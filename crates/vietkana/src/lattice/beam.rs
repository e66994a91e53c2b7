//! Beam search over per-syllable fragment alternatives.
//!
//! The full cross product of alternatives grows exponentially with the number of syllables, so
//! only the best `width` partial paths survive each step.

use std::collections::HashSet;

use tracing::{debug, warn};

use crate::models::{Breakdown, Candidate, Fragment, LatticeColumn};

/// Lower bound of the beam width.
pub const MIN_BEAM_WIDTH: usize = 120;

/// Beam width per requested result.
pub const BEAM_WIDTH_PER_RESULT: usize = 16;

/// Paths emitted per requested result (before text deduplication).
pub const PATHS_PER_RESULT: usize = 5;

/// Local score of choosing one alternative.
///
/// Scores are integers; higher is better.
pub trait PathScorer {
  /// Score contribution of picking `fragment`, the alternative at position `rank` of its column.
  fn local_score(&self, rank: usize, fragment: &Fragment) -> i32;
}

/// `max(120, result_count × 16)`
pub fn beam_width(result_count: usize) -> usize {
  MIN_BEAM_WIDTH.max(result_count.saturating_mul(BEAM_WIDTH_PER_RESULT))
}

/// Partial whole-name path.
#[derive(Debug, Clone)]
struct BeamItem {
  score: i32,
  breakdown: Vec<Breakdown>,
}

/// Output of one assembly run.
#[derive(Debug, Clone)]
pub struct Assembly {
  /// Candidates in beam order, unique by text
  pub candidates: Vec<Candidate>,
  /// Largest beam size observed at any syllable boundary
  pub peak_beam_len: usize,
  /// Beam width that was enforced
  pub width: usize,
}

/// Beam-search assembler for a requested number of results.
#[derive(Debug, Clone, Copy)]
pub struct BeamAssembler {
  result_count: usize,
}

impl BeamAssembler {
  /// Constructor for BeamAssembler (`result_count` is treated as at least 1)
  pub fn new(result_count: usize) -> Self {
    Self {
      result_count: result_count.max(1),
    }
  }

  /// Beam width enforced after every syllable.
  pub fn width(&self) -> usize {
    beam_width(self.result_count)
  }

  /// Number of final paths considered before deduplication.
  pub fn output_limit(&self) -> usize {
    self.result_count.saturating_mul(PATHS_PER_RESULT)
  }

  /// Combines the columns into whole-name candidates joined by `separator`.
  pub fn assemble<S>(&self, columns: &[LatticeColumn], scorer: &S, separator: &str) -> Assembly
  where
    S: PathScorer + ?Sized,
  {
    let width = self.width();
    let mut beam = vec![BeamItem {
      score: 0,
      breakdown: Vec::with_capacity(columns.len()),
    }];
    let mut peak_beam_len = beam.len();

    for (index, column) in columns.iter().enumerate() {
      if column.fragments.is_empty() {
        warn!(index, syllable = %column.syllable, "Skipping syllable without alternatives");
        continue;
      }

      // one record per alternative, shared by every path that picks it
      let choices: Vec<(i32, Breakdown)> = column
        .fragments
        .iter()
        .enumerate()
        .filter_map(|(rank, fragment)| {
          column.breakdown(rank).map(|record| (scorer.local_score(rank, fragment), record))
        })
        .collect();

      let mut next = Vec::with_capacity(beam.len() * choices.len());
      for item in &beam {
        for (local, record) in &choices {
          let mut breakdown = item.breakdown.clone();
          breakdown.push(record.clone());
          next.push(BeamItem {
            score: item.score + local,
            breakdown,
          });
        }
      }

      // stable: equal scores keep generation order
      next.sort_by(|a, b| b.score.cmp(&a.score));
      next.truncate(width);
      peak_beam_len = peak_beam_len.max(next.len());

      debug!(index, syllable = %column.syllable, beam = next.len(), width, "Beam step");
      beam = next;
    }

    let mut seen = HashSet::new();
    let candidates = beam
      .into_iter()
      .take(self.output_limit())
      .map(|item| Candidate {
        text: item.breakdown.iter().map(|b| b.chosen.as_str()).collect::<Vec<_>>().join(separator),
        breakdown: item.breakdown,
      })
      .filter(|candidate| seen.insert(candidate.text.clone()))
      .collect();

    Assembly {
      candidates,
      peak_beam_len,
      width,
    }
  }
}
