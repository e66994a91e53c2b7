//! rules モジュール
//!
//! Read-only rule data shared by every request: the three phoneme tables and the override table.

pub mod builtin;
pub mod overrides;
pub mod table;

use std::path::Path;

use tracing::info;

use crate::errors::RuleError;

/// 再エクスポート
pub use overrides::{RuleOverride, RuleOverrides};
pub use table::{PhonemeRule, PhonemeTable};

/// Complete rule set consumed by the forward synthesizer.
///
/// Built once and shared behind an `Arc`; never mutated afterwards.
#[derive(Debug, Clone)]
pub struct RuleSet {
  onsets: PhonemeTable,
  nuclei: PhonemeTable,
  codas: PhonemeTable,
  overrides: RuleOverrides,
}

impl RuleSet {
  /// Rule set made of the built-in tables only.
  pub fn builtin() -> Self {
    Self {
      onsets: PhonemeTable::from_entries(builtin::ONSETS),
      nuclei: PhonemeTable::from_entries(builtin::NUCLEI),
      codas: PhonemeTable::from_entries(builtin::CODAS),
      overrides: RuleOverrides::from_static(builtin::OVERRIDES),
    }
  }

  /// Built-in tables with `custom` overrides placed in front of the built-in ones.
  pub fn with_custom_overrides(custom: RuleOverrides) -> Self {
    let mut rules = Self::builtin();
    let mut overrides = custom;
    overrides.extend_with(rules.overrides);
    rules.overrides = overrides;
    rules
  }

  /// Built-in tables plus the overrides of an optional JSON file.
  ///
  /// # Errors
  /// Propagates [`RuleOverrides::load_file`] errors.
  pub fn load(override_file: Option<&Path>) -> Result<Self, RuleError> {
    let rules = match override_file {
      Some(path) => {
        let custom = RuleOverrides::load_file(path)?;
        info!(path = %path.display(), entries = custom.len(), "Loaded custom rule overrides");
        Self::with_custom_overrides(custom)
      }
      None => Self::builtin(),
    };
    Ok(rules)
  }

  /// Onset table.
  pub fn onsets(&self) -> &PhonemeTable {
    &self.onsets
  }

  /// Nucleus table.
  pub fn nuclei(&self) -> &PhonemeTable {
    &self.nuclei
  }

  /// Coda table.
  pub fn codas(&self) -> &PhonemeTable {
    &self.codas
  }

  /// Override table.
  pub fn overrides(&self) -> &RuleOverrides {
    &self.overrides
  }
}

impl Default for RuleSet {
  fn default() -> Self {
    Self::builtin()
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn builtin_tables_are_populated() {
    let rules = RuleSet::builtin();
    assert_eq!(rules.onsets().len(), builtin::ONSETS.len());
    assert_eq!(rules.codas().len(), 8);
    assert!(rules.overrides().lookup("nguyen").is_some());
    assert!(rules.overrides().lookup("lan").is_none());
  }

  #[test]
  fn duplicated_nucleus_patterns_are_preserved() {
    // known data quirk: "ươ" appears three times, "uyê" and "ia" twice
    let rules = RuleSet::builtin();
    let count = |p: &str| rules.nuclei().rules().iter().filter(|r| r.pattern() == p).count();
    assert_eq!(count("ươ"), 3);
    assert_eq!(count("uyê"), 2);
    assert_eq!(count("ia"), 2);

    let first = rules.nuclei().longest_prefix("ươ").unwrap();
    assert_eq!(first.fragments().len(), 3);
    assert_eq!(first.fragments()[2], "ウー");
    let ia = rules.nuclei().longest_prefix("ia").unwrap();
    assert_eq!(ia.fragments(), &["イア".to_string(), "ヤ".to_string()]);
  }

  #[test]
  fn custom_overrides_take_precedence() {
    let custom = RuleOverrides::from_static(&[("nguyen", &["ウィン"])]);
    let rules = RuleSet::with_custom_overrides(custom);
    assert_eq!(rules.overrides().lookup("nguyen").unwrap(), &["ウィン".to_string()]);
    assert!(rules.overrides().lookup("tran").is_some());
  }

  #[test]
  fn load_without_file_is_builtin() {
    let rules = RuleSet::load(None).unwrap();
    assert_eq!(rules.overrides().len(), RuleSet::builtin().overrides().len());
  }
}
