use crate::core::error::{ConfigError, NotesError, NotesResult, ResultExt};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Default changelog location, relative to the working directory
pub const DEFAULT_CHANGELOG: &str = "CHANGELOG.md";

/// Optional project configuration for changelog-notes
/// Searched in order: changelog-notes.toml, .changelog-notes.toml, .config/changelog-notes.toml
///
/// # Example
///
/// ```toml
/// changelog = "docs/CHANGELOG.md"
/// notes = "RELEASE_NOTES.md"
///
/// [heading]
/// prefix = "^## \\[?"
/// suffix = "[\\] ]"
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct NotesConfig {
  /// Changelog to read
  #[serde(default)]
  pub changelog: Option<PathBuf>,

  /// Where to write the extracted notes
  #[serde(default)]
  pub notes: Option<PathBuf>,

  #[serde(default)]
  pub heading: HeadingConfig,
}

/// Release heading pattern overrides
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct HeadingConfig {
  #[serde(default)]
  pub prefix: Option<String>,
  #[serde(default)]
  pub suffix: Option<String>,
}

impl NotesConfig {
  /// Find config file in search order
  pub fn find_config_path(path: &Path) -> Option<PathBuf> {
    let candidates = vec![
      path.join("changelog-notes.toml"),
      path.join(".changelog-notes.toml"),
      path.join(".config").join("changelog-notes.toml"),
    ];

    candidates.into_iter().find(|p| p.exists())
  }

  /// Load the config found under `dir`, or defaults if there is none
  pub fn discover(dir: &Path) -> NotesResult<Self> {
    match Self::find_config_path(dir) {
      Some(path) => Self::load(&path),
      None => Ok(Self::default()),
    }
  }

  /// Load an explicit config file, which must exist
  pub fn load(config_path: &Path) -> NotesResult<Self> {
    if !config_path.exists() {
      return Err(NotesError::Config(ConfigError::NotFound {
        path: config_path.to_path_buf(),
      }));
    }

    let content = fs::read_to_string(config_path)
      .with_context(|| format!("Failed to read config from {}", config_path.display()))?;
    Self::parse(&content).map_err(|reason| {
      NotesError::Config(ConfigError::Parse {
        path: config_path.to_path_buf(),
        reason,
      })
    })
  }

  fn parse(content: &str) -> Result<Self, String> {
    toml_edit::de::from_str(content).map_err(|e| e.to_string().trim().to_string())
  }
}
