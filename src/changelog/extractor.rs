//! Release section extraction
//!
//! A single forward pass over the changelog lines driven by three states:
//!
//! - **Searching**: skip lines until the target release heading matches
//! - **Extracting**: collect lines until any release heading matches
//! - **Finished**: stop reading
//!
//! Running out of input while extracting means the target was the last
//! release in the document and is folded into `Finished`.

use crate::changelog::heading::{HeadingMatcher, HeadingRule};
use crate::core::error::{ConfigError, NotesError, NotesResult};
use serde::Serialize;
use std::io;
use tracing::{debug, info};

/// Scanner state for a single extraction run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScanState {
  Searching,
  Extracting,
  Finished,
}

/// Lines collected for one release plus scan statistics
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExtractionResult {
  /// Body lines, untrimmed, in source order
  pub lines: Vec<String>,
  /// Lines read from the source, including the heading that ended the scan
  pub lines_processed: usize,
  /// Whether the target heading was seen
  pub found: bool,
}

impl ExtractionResult {
  /// Body joined with `\n` and trimmed
  pub fn notes(&self) -> String {
    self.lines.join("\n").trim().to_string()
  }
}

/// Extracts one release's body from a sequence of changelog lines
#[derive(Debug, Clone)]
pub struct ReleaseExtractor {
  version: String,
  target: HeadingMatcher,
  next: HeadingMatcher,
}

impl ReleaseExtractor {
  /// Validate inputs and compile both heading matchers
  pub fn new(version: impl Into<String>, rule: &HeadingRule) -> NotesResult<Self> {
    let version = version.into();
    if version.is_empty() {
      return Err(
        ConfigError::MissingField {
          field: "release-version".to_string(),
        }
        .into(),
      );
    }

    let target = HeadingMatcher::compile(rule, Some(&version))?;
    let next = HeadingMatcher::compile(rule, None)?;

    Ok(Self { version, target, next })
  }

  /// Scan `lines` once, stopping at the heading after the target release
  ///
  /// A read error aborts the scan; nothing after the failing line is read.
  /// The error carries no path; `ChangelogSource::extract` fills it in.
  pub fn extract<I>(&self, lines: I) -> NotesResult<ExtractionResult>
  where
    I: IntoIterator<Item = io::Result<String>>,
  {
    let mut body = Vec::new();
    let mut processed = 0usize;
    let mut state = ScanState::Searching;
    let mut lines = lines.into_iter();

    info!("Searching for release \"{}\":", self.version);

    while state != ScanState::Finished {
      let Some(line) = lines.next() else {
        break;
      };
      let line = line.map_err(|source| NotesError::SourceRead { path: None, source })?;
      processed += 1;

      state = match state {
        ScanState::Searching => {
          debug!("> {}", line);
          if self.target.matches(&line) {
            info!("Found release heading at line {}: {}", processed, line);
            info!("Extracting notes for release \"{}\":", self.version);
            ScanState::Extracting
          } else {
            ScanState::Searching
          }
        }
        ScanState::Extracting => {
          if self.next.matches(&line) {
            info!("Found next release heading at line {}, stopping.", processed);
            ScanState::Finished
          } else {
            debug!(">> {}", line);
            body.push(line);
            ScanState::Extracting
          }
        }
        ScanState::Finished => ScanState::Finished,
      };
    }

    let state = match state {
      ScanState::Searching => {
        info!("-> End of file reached, stopping.");
        ScanState::Searching
      }
      ScanState::Extracting => {
        info!("-> End of file reached, stopping.");
        ScanState::Finished
      }
      ScanState::Finished => ScanState::Finished,
    };

    let found = match state {
      ScanState::Searching => false,
      ScanState::Extracting | ScanState::Finished => true,
    };

    if found {
      info!("Finished extracting notes for release \"{}\":", self.version);
      info!("-> {} line(s) extracted, {} processed", body.len(), processed);
    }

    Ok(ExtractionResult {
      lines: body,
      lines_processed: processed,
      found,
    })
  }
}

/// One-shot extraction with freshly compiled matchers
pub fn extract<I>(lines: I, version: &str, rule: &HeadingRule) -> NotesResult<ExtractionResult>
where
  I: IntoIterator<Item = io::Result<String>>,
{
  ReleaseExtractor::new(version, rule)?.extract(lines)
}
