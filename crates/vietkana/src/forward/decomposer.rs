//! Onset / nucleus / coda segmentation of one syllable.

use crate::rules::RuleSet;

/// Result of segmenting a shape-preserved lowercase syllable.
///
/// `onset + nucleus + coda` always equals the input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Decomposition<'a> {
  /// Matched onset pattern, empty if none
  pub onset: &'a str,
  /// Remainder between onset and coda (may be empty or the whole token)
  pub nucleus: &'a str,
  /// Matched coda pattern, empty if none
  pub coda: &'a str,
}

/// Greedy segmentation: the onset is taken first from the front, then the coda from the end of
/// what remains. Not globally optimal; table order decides.
pub fn decompose<'a>(rules: &RuleSet, token: &'a str) -> Decomposition<'a> {
  let onset_len = rules.onsets().longest_prefix(token).map_or(0, |r| r.pattern().len());
  let (onset, rest) = token.split_at(onset_len);

  let coda_len = rules.codas().longest_suffix(rest).map_or(0, |r| r.pattern().len());
  let (nucleus, coda) = rest.split_at(rest.len() - coda_len);

  Decomposition {
    onset,
    nucleus,
    coda,
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn parts(token: &str) -> (String, String, String) {
    let rules = RuleSet::builtin();
    let d = decompose(&rules, token);
    (d.onset.to_string(), d.nucleus.to_string(), d.coda.to_string())
  }

  fn triple(o: &str, n: &str, c: &str) -> (String, String, String) {
    (o.to_string(), n.to_string(), c.to_string())
  }

  #[test]
  fn digraph_onsets_win_over_single_letters() {
    assert_eq!(parts("nghia"), triple("ngh", "ia", ""));
    assert_eq!(parts("nhung"), triple("nh", "u", "ng"));
    assert_eq!(parts("trang"), triple("tr", "a", "ng"));
    assert_eq!(parts("giang"), triple("gi", "a", "ng"));
  }

  #[test]
  fn coda_taken_from_remainder() {
    assert_eq!(parts("lan"), triple("l", "a", "n"));
    assert_eq!(parts("thanh"), triple("th", "a", "nh"));
    assert_eq!(parts("ngươi"), triple("ng", "ươi", ""));
    assert_eq!(parts("thăng"), triple("th", "ă", "ng"));
  }

  #[test]
  fn missing_onset_or_coda_is_empty() {
    assert_eq!(parts("anh"), triple("", "a", "nh"));
    assert_eq!(parts("ai"), triple("", "ai", ""));
    assert_eq!(parts("123"), triple("", "123", ""));
    assert_eq!(parts(""), triple("", "", ""));
  }

  #[test]
  fn onset_can_consume_whole_token() {
    assert_eq!(parts("ng"), triple("ng", "", ""));
  }
}
