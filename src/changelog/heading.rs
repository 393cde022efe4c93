//! Release heading recognition
//!
//! A heading rule is a pair of regex fragments. Glued around an escaped
//! version literal they recognize one specific release heading; the prefix
//! on its own recognizes any release heading.

use crate::core::error::{ConfigError, NotesResult};
use regex::Regex;

/// Default release heading prefix: a `##` heading, optionally followed by `[`
pub const DEFAULT_HEADING_PREFIX: &str = r"^## \[?";

/// Default release heading suffix: the version must end at `]` or a space
pub const DEFAULT_HEADING_SUFFIX: &str = r"[\] ]";

/// Pattern fragments surrounding the version in a release heading
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeadingRule {
  prefix: String,
  suffix: String,
}

impl HeadingRule {
  /// Build a rule, rejecting empty fragments
  pub fn new(prefix: impl Into<String>, suffix: impl Into<String>) -> NotesResult<Self> {
    let prefix = prefix.into();
    let suffix = suffix.into();

    if prefix.is_empty() {
      return Err(
        ConfigError::MissingField {
          field: "release-heading-prefix".to_string(),
        }
        .into(),
      );
    }
    if suffix.is_empty() {
      return Err(
        ConfigError::MissingField {
          field: "release-heading-suffix".to_string(),
        }
        .into(),
      );
    }

    Ok(Self { prefix, suffix })
  }

  pub fn prefix(&self) -> &str {
    &self.prefix
  }

  pub fn suffix(&self) -> &str {
    &self.suffix
  }

  /// Pattern for the heading of `version`, or for any heading when `None`
  pub fn pattern(&self, version: Option<&str>) -> String {
    match version {
      Some(version) => format!("{}{}{}", self.prefix, regex::escape(version), self.suffix),
      None => self.prefix.clone(),
    }
  }
}

impl Default for HeadingRule {
  fn default() -> Self {
    Self {
      prefix: DEFAULT_HEADING_PREFIX.to_string(),
      suffix: DEFAULT_HEADING_SUFFIX.to_string(),
    }
  }
}

/// Compiled release heading predicate
#[derive(Debug, Clone)]
pub struct HeadingMatcher {
  regex: Regex,
}

impl HeadingMatcher {
  /// Compile a matcher for `version`'s heading, or for any release heading
  pub fn compile(rule: &HeadingRule, version: Option<&str>) -> NotesResult<Self> {
    let pattern = rule.pattern(version);
    let regex = Regex::new(&pattern).map_err(|e| ConfigError::InvalidPattern {
      pattern: pattern.clone(),
      reason: e.to_string(),
    })?;
    Ok(Self { regex })
  }

  /// Does the pattern match anywhere in `line`
  pub fn matches(&self, line: &str) -> bool {
    self.regex.is_match(line)
  }
}
