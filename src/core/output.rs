//! GitHub Actions step outputs
//!
//! Outputs are appended to the file named by `GITHUB_OUTPUT` using the
//! heredoc form, which allows multi-line values:
//!
//! ```text
//! release-notes<<ghadelimiter_0123abcd...
//! ...notes...
//! ghadelimiter_0123abcd...
//! ```

use crate::core::error::{NotesError, NotesResult, ResultExt};
use sha2::{Digest, Sha256};
use std::env;
use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};

/// Output name for the extracted notes
pub const RELEASE_NOTES_OUTPUT: &str = "release-notes";

/// Append-only sink for step outputs
#[derive(Debug, Clone)]
pub struct StepOutputs {
  path: PathBuf,
}

impl StepOutputs {
  /// Outputs file from the runner environment, if any
  pub fn from_env() -> Option<Self> {
    env::var_os("GITHUB_OUTPUT")
      .filter(|v| !v.is_empty())
      .map(|path| Self::new(PathBuf::from(path)))
  }

  pub fn new(path: PathBuf) -> Self {
    Self { path }
  }

  pub fn path(&self) -> &Path {
    &self.path
  }

  /// Append `name=value` as a heredoc block
  pub fn set(&self, name: &str, value: &str) -> NotesResult<()> {
    let block = format_output(name, value)?;
    let mut file = OpenOptions::new()
      .create(true)
      .append(true)
      .open(&self.path)
      .with_context(|| format!("Failed to open step outputs file {}", self.path.display()))?;
    file
      .write_all(block.as_bytes())
      .with_context(|| format!("Failed to write step output '{}'", name))?;
    Ok(())
  }
}

/// Render one heredoc output block
fn format_output(name: &str, value: &str) -> NotesResult<String> {
  let delimiter = delimiter_for(value);
  if name.contains(&delimiter) || value.contains(&delimiter) {
    return Err(NotesError::message(format!(
      "Unexpected input: output '{}' contains its own delimiter",
      name
    )));
  }
  Ok(format!("{name}<<{delimiter}\n{value}\n{delimiter}\n"))
}

/// Delimiter derived from the value's digest
fn delimiter_for(value: &str) -> String {
  let digest = Sha256::digest(value.as_bytes());
  let hex: String = digest.iter().take(12).map(|b| format!("{:02x}", b)).collect();
  format!("ghadelimiter_{}", hex)
}
