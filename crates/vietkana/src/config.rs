// crates/vietkana/src/config.rs

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use serde::Deserialize;

use crate::errors::ConfigError;
use crate::lexicon::DEFAULT_GIVEN_NAME_FILES;
use crate::models::Preset;

/// Top-level configuration for vietkana.
///
/// Every section is optional in JSON; omitted sections take their defaults.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct VietKanaConfig {
  /// [lexicon] section
  pub lexicon: LexiconConfig,
  /// [rules] section
  pub rules: RulesConfig,
  /// [search] section
  pub search: SearchConfig,
  /// [logging] section
  pub logging: LoggingConfig,
}

/// [lexicon] section configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LexiconConfig {
  /// Directory holding `syllables.txt` and the given-name lists.
  ///
  /// If omitted it becomes `None`, and the OS data directory is used by `LexiconManager`.
  pub data_dir: Option<PathBuf>,
  /// Given-name list files relative to `data_dir` (missing files are skipped)
  pub given_name_files: Vec<String>,
}

impl Default for LexiconConfig {
  fn default() -> Self {
    Self {
      data_dir: None,
      given_name_files: DEFAULT_GIVEN_NAME_FILES.iter().map(|s| s.to_string()).collect(),
    }
  }
}

/// [rules] section configuration.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RulesConfig {
  /// JSON file of extra syllable overrides (`[{"vi": "...", "kana": ["..."]}]`)
  pub override_file: Option<PathBuf>,
}

/// [search] section configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
  /// Result count used when a request does not specify one
  pub default_result_count: usize,
  /// Lower clamp for requested result counts
  pub min_result_count: usize,
  /// Upper clamp for requested result counts
  pub max_result_count: usize,
  /// Preset used when a request does not specify one
  pub default_preset: Preset,
}

impl Default for SearchConfig {
  fn default() -> Self {
    Self {
      default_result_count: 10,
      min_result_count: 3,
      max_result_count: 30,
      default_preset: Preset::Stability,
    }
  }
}

/// [logging] section configuration.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
  /// Log level: "trace" | "debug" | "info" | "warn" | "error"
  pub level: LogLevel,
}

/// Log level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
  /// trace
  Trace,

  /// debug
  Debug,

  /// info
  #[default]
  Info,

  /// warn
  Warn,

  ///error
  Error,
}

impl LogLevel {
  /// Directive string understood by `EnvFilter`.
  pub fn as_str(&self) -> &'static str {
    match self {
      LogLevel::Trace => "trace",
      LogLevel::Debug => "debug",
      LogLevel::Info => "info",
      LogLevel::Warn => "warn",
      LogLevel::Error => "error",
    }
  }
}

// ===== Loading =====

impl VietKanaConfig {
  /// Parses a configuration from a JSON string (not validated).
  pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
    serde_json::from_str(json).map_err(|e| ConfigError::Parse(Arc::new(e)))
  }

  /// Reads and parses a JSON configuration file (not validated).
  pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
    let path = path.as_ref();
    let json = fs::read_to_string(path).map_err(|e| ConfigError::Read {
      path: path.to_path_buf(),
      source: Arc::new(e),
    })?;
    Self::from_json_str(&json)
  }
}

// ===== Accessor Methods =====

impl VietKanaConfig {
  /// Returns the configured lexicon data directory.
  ///
  /// `None` if unspecified; the actual path is then decided by `LexiconManager`.
  pub fn lexicon_data_dir(&self) -> Option<&Path> {
    self.lexicon.data_dir.as_deref()
  }

  /// Returns the given-name list file names.
  pub fn given_name_files(&self) -> &[String] {
    &self.lexicon.given_name_files
  }

  /// Returns the rule override file, if any.
  pub fn override_file(&self) -> Option<&Path> {
    self.rules.override_file.as_deref()
  }

  /// Returns the default result count.
  pub fn default_result_count(&self) -> usize {
    self.search.default_result_count
  }

  /// Returns the minimum result count.
  pub fn min_result_count(&self) -> usize {
    self.search.min_result_count
  }

  /// Returns the maximum result count.
  pub fn max_result_count(&self) -> usize {
    self.search.max_result_count
  }

  /// Returns the default preset.
  pub fn default_preset(&self) -> Preset {
    self.search.default_preset
  }

  /// Returns the log level.
  pub fn log_level(&self) -> LogLevel {
    self.logging.level
  }

  /// Resolves a requested result count.
  ///
  /// `None` → `default_result_count`, otherwise clamped into `[min, max]`.
  pub fn clamp_result_count(&self, requested: Option<usize>) -> usize {
    match requested {
      None => self.search.default_result_count,
      Some(n) => n.clamp(self.search.min_result_count, self.search.max_result_count),
    }
  }

  /// Validates the configuration.
  ///
  /// # Validation Items
  /// - `search.min_result_count` >= 1
  /// - `search.max_result_count` >= `search.min_result_count`
  /// - `search.default_result_count` is within `[min, max]`
  /// - `lexicon.data_dir` is an existing directory when given
  ///
  /// # Errors
  /// Returns the corresponding `ConfigError` if validation fails.
  pub fn validate(&self) -> Result<(), ConfigError> {
    let SearchConfig {
      default_result_count: default,
      min_result_count: min,
      max_result_count: max,
      ..
    } = self.search;

    if min < 1 {
      return Err(ConfigError::InvalidMinResultCount { actual: min });
    }

    if max < min {
      return Err(ConfigError::InvalidMaxResultCount { min, max });
    }

    if !(min..=max).contains(&default) {
      return Err(ConfigError::InvalidDefaultResultCount {
        min,
        max,
        actual: default,
      });
    }

    if let Some(data_dir) = &self.lexicon.data_dir {
      if !data_dir.is_dir() {
        return Err(ConfigError::InvalidLexiconDataDir {
          path: data_dir.clone(),
        });
      }
    }

    Ok(())
  }
}

// ─────────────────────────────────────────────────────────────────────────────
// Test Module
// ─────────────────────────────────────────────────────────────────────────────
