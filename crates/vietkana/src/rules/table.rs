//! Ordered phoneme tables with longest-match lookup.
//!
//! Entry order is significant and is never changed after construction. Among the entries that
//! apply at a position the longest pattern wins; on equal length the earlier entry wins, so a
//! duplicated pattern further down the table is never reached.

/// One `(pattern, fragments)` entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PhonemeRule {
  pattern: String,
  /// Pattern length in characters (not bytes)
  width: usize,
  fragments: Vec<String>,
}

impl PhonemeRule {
  /// Constructor for PhonemeRule
  pub fn new<I, S>(pattern: impl Into<String>, fragments: I) -> Self
  where
    I: IntoIterator<Item = S>,
    S: Into<String>,
  {
    let pattern = pattern.into();
    let width = pattern.chars().count();
    Self {
      pattern,
      width,
      fragments: fragments.into_iter().map(Into::into).collect(),
    }
  }

  /// Matched orthographic pattern.
  pub fn pattern(&self) -> &str {
    &self.pattern
  }

  /// Target fragments, first = preferred.
  pub fn fragments(&self) -> &[String] {
    &self.fragments
  }

  /// First (preferred) fragment, if any.
  pub fn preferred(&self) -> Option<&str> {
    self.fragments.first().map(String::as_str)
  }
}

/// Ordered list of phoneme rules.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PhonemeTable {
  rules: Vec<PhonemeRule>,
}

impl PhonemeTable {
  /// Builds a table from static `(pattern, fragments)` pairs, keeping their order.
  pub fn from_entries(entries: &[(&str, &[&str])]) -> Self {
    Self {
      rules: entries
        .iter()
        .map(|(pattern, fragments)| PhonemeRule::new(*pattern, fragments.iter().copied()))
        .collect(),
    }
  }

  /// Entries in table order.
  pub fn rules(&self) -> &[PhonemeRule] {
    &self.rules
  }

  /// Number of entries (duplicates included).
  pub fn len(&self) -> usize {
    self.rules.len()
  }

  /// `true` if the table has no entries.
  pub fn is_empty(&self) -> bool {
    self.rules.is_empty()
  }

  /// Longest entry whose pattern is a prefix of `input`.
  pub fn longest_prefix(&self, input: &str) -> Option<&PhonemeRule> {
    self.longest_by(|pattern| input.starts_with(pattern))
  }

  /// Longest entry whose pattern is a suffix of `input`.
  pub fn longest_suffix(&self, input: &str) -> Option<&PhonemeRule> {
    self.longest_by(|pattern| input.ends_with(pattern))
  }

  /// First entry whose pattern equals `pattern` exactly.
  pub fn exact(&self, pattern: &str) -> Option<&PhonemeRule> {
    self.rules.iter().find(|rule| rule.pattern == pattern)
  }

  /// Fragments for an exact pattern, or `[""]` when the pattern is empty or unknown.
  pub fn alternatives_or_empty(&self, pattern: &str) -> Vec<String> {
    if pattern.is_empty() {
      return vec![String::new()];
    }
    self
      .exact(pattern)
      .map(|rule| rule.fragments.clone())
      .unwrap_or_else(|| vec![String::new()])
  }

  /// Maps `input` one character at a time to the preferred fragment of the best entry for that
  /// character. Unmapped characters contribute nothing.
  pub fn map_per_character(&self, input: &str) -> String {
    let mut buf = [0u8; 4];
    input
      .chars()
      .filter_map(|c| {
        let single: &str = c.encode_utf8(&mut buf);
        self.longest_prefix(single).and_then(PhonemeRule::preferred).map(str::to_string)
      })
      .collect()
  }

  fn longest_by<F>(&self, applies: F) -> Option<&PhonemeRule>
  where
    F: Fn(&str) -> bool,
  {
    let mut best: Option<&PhonemeRule> = None;
    for rule in &self.rules {
      if rule.pattern.is_empty() || !applies(&rule.pattern) {
        continue;
      }
      // strictly longer only: equal width keeps the earlier entry
      if best.is_none_or(|b| rule.width > b.width) {
        best = Some(rule);
      }
    }
    best
  }
}
