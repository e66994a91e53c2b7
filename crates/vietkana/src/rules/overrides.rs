//! Rule-override table: tone-stripped syllable → verbatim fragment list.

use std::collections::HashMap;
use std::path::Path;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::errors::RuleError;
use crate::text::strip_tones;

/// One override entry as stored in an override file.
///
/// ```json
/// [{ "vi": "nguyen", "kana": ["グエン"] }]
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleOverride {
  /// Syllable key (normalized to tone-stripped lowercase on load)
  pub vi: String,
  /// Fragments, first = preferred
  pub kana: Vec<String>,
}

/// Ordered override entries with exact-key lookup. The first entry for a key wins.
#[derive(Debug, Clone, Default)]
pub struct RuleOverrides {
  entries: Vec<RuleOverride>,
  by_key: HashMap<String, usize>,
}

impl RuleOverrides {
  /// Builds the table from entries, validating and normalizing each key.
  ///
  /// # Errors
  /// - `RuleError::EmptyKey` if a key is blank
  /// - `RuleError::EmptyFragments` if an entry has no fragments
  pub fn new(entries: Vec<RuleOverride>) -> Result<Self, RuleError> {
    let mut table = Self::default();
    for entry in entries {
      table.push(entry)?;
    }
    Ok(table)
  }

  /// Builds the table from static `(key, fragments)` pairs.
  pub(crate) fn from_static(entries: &[(&str, &[&str])]) -> Self {
    let mut table = Self::default();
    for (vi, kana) in entries {
      table.insert_normalized(RuleOverride {
        vi: (*vi).to_string(),
        kana: kana.iter().map(|k| (*k).to_string()).collect(),
      });
    }
    table
  }

  /// Parses a JSON array of override entries.
  ///
  /// # Errors
  /// `RuleError::Parse` on malformed JSON, plus the validation errors of [`RuleOverrides::new`].
  pub fn from_json_str(json: &str) -> Result<Self, RuleError> {
    let entries: Vec<RuleOverride> =
      serde_json::from_str(json).map_err(|e| RuleError::Parse(Arc::new(e)))?;
    Self::new(entries)
  }

  /// Reads and parses an override file.
  ///
  /// # Errors
  /// `RuleError::Read` if the file cannot be read, plus the errors of
  /// [`RuleOverrides::from_json_str`].
  pub fn load_file(path: &Path) -> Result<Self, RuleError> {
    let json = std::fs::read_to_string(path).map_err(|e| RuleError::Read {
      path: path.to_path_buf(),
      source: Arc::new(e),
    })?;
    Self::from_json_str(&json)
  }

  /// Looks up the fragments for a tone-stripped lowercase syllable.
  pub fn lookup(&self, stripped: &str) -> Option<&[String]> {
    self.by_key.get(stripped).map(|&i| self.entries[i].kana.as_slice())
  }

  /// Appends all entries of `other` after the entries of `self`.
  ///
  /// Keys already present in `self` keep their current fragments.
  pub fn extend_with(&mut self, other: RuleOverrides) {
    for entry in other.entries {
      self.insert_normalized(entry);
    }
  }

  /// Number of distinct keys.
  pub fn len(&self) -> usize {
    self.by_key.len()
  }

  /// `true` if there are no entries.
  pub fn is_empty(&self) -> bool {
    self.by_key.is_empty()
  }

  fn push(&mut self, entry: RuleOverride) -> Result<(), RuleError> {
    let key = normalize_key(&entry.vi);
    if key.is_empty() {
      return Err(RuleError::EmptyKey);
    }
    if entry.kana.iter().all(|k| k.trim().is_empty()) {
      return Err(RuleError::EmptyFragments { vi: key });
    }
    self.insert_normalized(entry);
    Ok(())
  }

  fn insert_normalized(&mut self, entry: RuleOverride) {
    let key = normalize_key(&entry.vi);
    if self.by_key.contains_key(&key) {
      return;
    }
    let kana = entry.kana.into_iter().map(|k| k.trim().to_string()).filter(|k| !k.is_empty());
    self.by_key.insert(key.clone(), self.entries.len());
    self.entries.push(RuleOverride {
      vi: key,
      kana: kana.collect(),
    });
  }
}

fn normalize_key(vi: &str) -> String {
  strip_tones(vi.trim()).to_lowercase()
}
