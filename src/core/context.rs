//! Resolved settings for one extraction run
//!
//! Values are layered: built-in defaults, then the config file, then CLI
//! flags / action inputs. Everything is validated here so a bad setting
//! fails before the changelog is opened.

use crate::changelog::HeadingRule;
use crate::core::config::{DEFAULT_CHANGELOG, NotesConfig};
use crate::core::error::{ConfigError, NotesResult};
use crate::utils::non_empty;
use std::path::{Path, PathBuf};

/// Raw values from the command line (or `INPUT_*` environment variables)
#[derive(Debug, Clone, Default)]
pub struct ExtractArgs {
  pub changelog: Option<String>,
  pub notes: Option<String>,
  pub version: Option<String>,
  pub heading_prefix: Option<String>,
  pub heading_suffix: Option<String>,
  pub config: Option<PathBuf>,
}

/// Everything needed to extract and publish one release's notes
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractContext {
  pub changelog: PathBuf,
  pub notes: Option<PathBuf>,
  pub version: String,
  pub rule: HeadingRule,
}

impl ExtractContext {
  /// Resolve arguments against the config file found in `root`
  ///
  /// Relative paths from the config file are taken relative to `root`.
  pub fn resolve(root: &Path, args: ExtractArgs) -> NotesResult<Self> {
    let config = match &args.config {
      Some(path) => NotesConfig::load(&root.join(path))?,
      None => NotesConfig::discover(root)?,
    };
    Self::from_layers(root, config, args)
  }

  fn from_layers(root: &Path, config: NotesConfig, args: ExtractArgs) -> NotesResult<Self> {
    let version = non_empty(args.version).ok_or_else(|| ConfigError::MissingField {
      field: "release-version".to_string(),
    })?;

    let changelog = non_empty(args.changelog)
      .map(PathBuf::from)
      .or(config.changelog)
      .unwrap_or_else(|| PathBuf::from(DEFAULT_CHANGELOG));

    let notes = non_empty(args.notes).map(PathBuf::from).or(config.notes);

    let defaults = HeadingRule::default();
    let prefix = non_empty(args.heading_prefix)
      .or(config.heading.prefix)
      .unwrap_or_else(|| defaults.prefix().to_string());
    let suffix = non_empty(args.heading_suffix)
      .or(config.heading.suffix)
      .unwrap_or_else(|| defaults.suffix().to_string());

    Ok(Self {
      changelog: root.join(changelog),
      notes: notes.map(|p| root.join(p)),
      version,
      rule: HeadingRule::new(prefix, suffix)?,
    })
  }
}
