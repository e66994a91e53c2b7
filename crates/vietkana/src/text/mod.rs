//! text モジュール
pub mod normalize;

/// 再エクスポート
pub use normalize::{
  LONG_VOWEL_MARK, MIDDLE_DOT, capitalize_syllable, collapse_long_vowel_runs, normalize_text,
  split_katakana_tokens, split_words, strip_tone_marks_only, strip_tones,
};

/// A single whitespace-delimited unit of a Vietnamese name.
///
/// Immutable once built; all three forms are derived eagerly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyllableToken {
  original: String,
  /// Lowercase, all diacritics removed, `đ` folded (rule-override and breakdown key)
  stripped: String,
  /// Lowercase, tone marks removed, vowel shape kept (phoneme table input)
  shaped: String,
}

impl SyllableToken {
  /// Builds the token forms from one input word.
  pub fn new(original: impl Into<String>) -> Self {
    let original = original.into();
    let stripped = strip_tones(&original).to_lowercase();
    let shaped: String = strip_tone_marks_only(&original)
      .to_lowercase()
      .chars()
      .filter(|c| !c.is_whitespace())
      .collect();
    Self {
      original,
      stripped,
      shaped,
    }
  }

  /// Text as written by the user.
  pub fn original(&self) -> &str {
    &self.original
  }

  /// Tone-stripped lowercase form.
  pub fn stripped(&self) -> &str {
    &self.stripped
  }

  /// Shape-preserving lowercase form.
  pub fn shaped(&self) -> &str {
    &self.shaped
  }
}

/// Tokenizes Vietnamese input (already normalized or raw).
pub fn tokenize_vietnamese(input: &str) -> Vec<SyllableToken> {
  split_words(&normalize_text(input)).into_iter().map(SyllableToken::new).collect()
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn syllable_token_forms() {
    let token = SyllableToken::new("Thắng");
    assert_eq!(token.original(), "Thắng");
    assert_eq!(token.stripped(), "thang");
    assert_eq!(token.shaped(), "thăng");
  }

  #[test]
  fn tokenize_vietnamese_empty_input() {
    assert!(tokenize_vietnamese(" \t ").is_empty());
    assert_eq!(tokenize_vietnamese("Lê  Lan").len(), 2);
  }
}
