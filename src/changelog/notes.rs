//! Release notes built from an extraction result
//!
//! This is where "not found" and "empty" become errors. The scanner itself
//! reports both as plain data.

use crate::changelog::extractor::ExtractionResult;
use crate::core::error::{NotesResult, ReleaseError, ResultExt};
use std::fs;
use std::path::Path;

/// Trimmed, non-empty notes for one release
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReleaseNotes {
  version: String,
  text: String,
}

impl ReleaseNotes {
  /// Classify a scan outcome
  pub fn from_extraction(version: &str, result: &ExtractionResult) -> NotesResult<Self> {
    if !result.found {
      return Err(
        ReleaseError::NotFound {
          version: version.to_string(),
        }
        .into(),
      );
    }

    let text = result.notes();
    if text.is_empty() {
      return Err(
        ReleaseError::Empty {
          version: version.to_string(),
        }
        .into(),
      );
    }

    Ok(Self {
      version: version.to_string(),
      text,
    })
  }

  pub fn version(&self) -> &str {
    &self.version
  }

  pub fn as_str(&self) -> &str {
    &self.text
  }

  /// Write the notes verbatim, returning the number of bytes written
  pub fn write_to(&self, path: &Path) -> NotesResult<usize> {
    fs::write(path, &self.text).with_context(|| format!("Failed to write release notes to {}", path.display()))?;
    Ok(self.text.len())
  }
}
