//! Lexicon Management Module
//!
//! Loads the Vietnamese syllable list and the given-name lists from a data directory and builds
//! the reverse dictionary index. Loading happens once; later calls share the same `Arc`.
//!
//! Expected layout:
//!
//! ```text
//! <data_dir>/
//!   syllables.txt        required, one syllable per line
//!   boy.txt              optional given-name lists
//!   girl.txt
//!   boy_one_word.txt
//!   girl_one_word.txt
//! ```

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::{Arc, OnceLock};

use tracing::{debug, info};

use crate::errors::error_definition::LexiconError;
use crate::lexicon::index::DictionaryIndex;
use crate::rules::RuleSet;

/// File name of the syllable list.
pub const SYLLABLE_FILE: &str = "syllables.txt";

/// Given-name list files read when present.
pub const DEFAULT_GIVEN_NAME_FILES: [&str; 4] =
  ["boy.txt", "girl.txt", "boy_one_word.txt", "girl_one_word.txt"];

/// Reverse dictionary manager
pub struct LexiconManager {
  /// Directory holding the list files
  data_dir: PathBuf,

  /// Given-name list file names, relative to `data_dir`
  given_name_files: Vec<String>,

  /// Rules used to derive the reading index
  rules: Arc<RuleSet>,

  /// Loaded index (initialized only once; a load error is cached as well)
  index: OnceLock<Result<Arc<DictionaryIndex>, LexiconError>>,
}

impl LexiconManager {
  /// Constructor for LexiconManager over an explicit data directory
  pub fn from_dir<P: AsRef<Path>>(
    data_dir: P,
    given_name_files: Vec<String>,
    rules: Arc<RuleSet>,
  ) -> Result<Self, LexiconError> {
    let data_dir = data_dir.as_ref().to_path_buf();

    if !data_dir.is_dir() {
      return Err(LexiconError::DataDirMissing(data_dir));
    }

    Ok(Self {
      data_dir,
      given_name_files,
      rules,
      index: OnceLock::new(),
    })
  }

  /// Constructor for LexiconManager over the OS data directory (see [`default_data_dir`])
  pub fn with_default_dir(
    given_name_files: Vec<String>,
    rules: Arc<RuleSet>,
  ) -> Result<Self, LexiconError> {
    Self::from_dir(default_data_dir()?, given_name_files, rules)
  }

  /// Returns the data directory
  pub fn data_dir(&self) -> &Path {
    &self.data_dir
  }

  /// Load the dictionary index
  /// - Reads the list files on the first call
  /// - Returns a clone of the `Arc` from the second call onwards
  /// - If the first call fails, the error is cached and returned every time
  pub fn load(&self) -> Result<Arc<DictionaryIndex>, LexiconError> {
    self.index.get_or_init(|| self.load_inner().map(Arc::new)).clone()
  }

  fn load_inner(&self) -> Result<DictionaryIndex, LexiconError> {
    let syllable_path = self.data_dir.join(SYLLABLE_FILE);
    if !syllable_path.is_file() {
      return Err(LexiconError::MissingSyllableFile(syllable_path));
    }

    let syllables = read_lines(&syllable_path)?;
    if syllables.is_empty() {
      return Err(LexiconError::EmptySyllableList(syllable_path));
    }

    let mut given_names = Vec::new();
    for name in &self.given_name_files {
      let path = self.data_dir.join(name);
      if !path.is_file() {
        debug!(path = %path.display(), "Given-name list not found, skipping");
        continue;
      }
      given_names.extend(read_lines(&path)?);
    }

    let index = DictionaryIndex::build(&syllables, &given_names, &self.rules);

    info!(
      data_dir = %self.data_dir.display(),
      syllables = index.syllable_count(),
      given_names = index.given_name_count(),
      readings = index.reading_count(),
      "Lexicon loaded"
    );

    Ok(index)
  }
}

/// Returns the default data directory according to the OS
///
/// | OS      | Example Path                                        |
/// |---------|-----------------------------------------------------|
/// | Linux   | `~/.local/share/vietkana/vi`                        |
/// | macOS   | `~/Library/Application Support/vietkana/vi`         |
/// | Windows | `C:\Users\{user}\AppData\Roaming\vietkana\vi`       |
pub fn default_data_dir() -> Result<PathBuf, LexiconError> {
  let base = dirs::data_dir().ok_or(LexiconError::DataDirNotFound)?;

  Ok(base.join("vietkana").join("vi"))
}

/// Non-blank, trimmed lines of a UTF-8 file.
fn read_lines(path: &Path) -> Result<Vec<String>, LexiconError> {
  let text = fs::read_to_string(path).map_err(|e| LexiconError::Read {
    path: path.to_path_buf(),
    source: Arc::new(e),
  })?;

  Ok(text.lines().map(str::trim).filter(|l| !l.is_empty()).map(str::to_string).collect())
}

/// Manual `Debug` implementation for `LexiconManager`
///
/// Shows only whether the index is loaded, not its contents.
impl fmt::Debug for LexiconManager {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("LexiconManager")
      .field("data_dir", &self.data_dir)
      .field("given_name_files", &self.given_name_files)
      .field("index_initialized", &self.index.get().is_some())
      .finish()
  }
}

// ─────────────────────────────────────────────────────────────────────────────
// Test Module
// ─────────────────────────────────────────────────────────────────────────────
