//! Text normalization and tokenization for both scripts.
//!
//! All functions are total: empty or whitespace-only input yields an empty string or an empty
//! token list, which the entry points reject as invalid input.

use unicode_normalization::UnicodeNormalization;

/// Katakana middle dot used between name parts.
pub const MIDDLE_DOT: char = '・';

/// Katakana prolonged sound mark.
pub const LONG_VOWEL_MARK: char = 'ー';

/// Combining marks that carry Vietnamese tone: grave, acute, tilde, hook above, dot below.
const TONE_MARKS: [char; 5] = ['\u{0300}', '\u{0301}', '\u{0303}', '\u{0309}', '\u{0323}'];

/// Trims, collapses whitespace runs to a single space and applies NFC.
pub fn normalize_text(input: &str) -> String {
  input.split_whitespace().collect::<Vec<_>>().join(" ").nfc().collect()
}

/// Removes every combining diacritic (U+0300..U+036F) and folds `đ`/`Đ` to `d`/`D`.
///
/// Case is preserved.
pub fn strip_tones(input: &str) -> String {
  input
    .nfd()
    .filter(|c| !is_combining_diacritic(*c))
    .map(|c| match c {
      'đ' => 'd',
      'Đ' => 'D',
      other => other,
    })
    .nfc()
    .collect()
}

/// Removes only the five tone marks, keeping vowel-quality diacritics (ă â ê ô ơ ư).
pub fn strip_tone_marks_only(input: &str) -> String {
  input.nfd().filter(|c| !TONE_MARKS.contains(c)).nfc().collect()
}

/// Splits Vietnamese input on whitespace.
pub fn split_words(input: &str) -> Vec<String> {
  input.split_whitespace().map(str::to_string).collect()
}

/// Splits Katakana input on the middle dot and/or whitespace.
pub fn split_katakana_tokens(input: &str) -> Vec<String> {
  input
    .split(|c: char| c == MIDDLE_DOT || c.is_whitespace())
    .filter(|s| !s.is_empty())
    .map(str::to_string)
    .collect()
}

/// Collapses any run of `ー` into a single mark.
pub fn collapse_long_vowel_runs(input: &str) -> String {
  let mut out = String::with_capacity(input.len());
  let mut previous_was_mark = false;
  for c in input.chars() {
    if c == LONG_VOWEL_MARK {
      if previous_was_mark {
        continue;
      }
      previous_was_mark = true;
    } else {
      previous_was_mark = false;
    }
    out.push(c);
  }
  out
}

/// Upper-cases the first character of a syllable (name display style).
pub fn capitalize_syllable(syllable: &str) -> String {
  let mut chars = syllable.chars();
  match chars.next() {
    Some(first) => first.to_uppercase().chain(chars).collect(),
    None => String::new(),
  }
}

fn is_combining_diacritic(c: char) -> bool {
  ('\u{0300}'..='\u{036F}').contains(&c)
}
