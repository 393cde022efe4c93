//! Changelog file as a line source
//!
//! The file handle lives inside `ChangelogSource` and is closed when the
//! source is dropped, whichever way the scan ends.
//!
//! Lines end at `\n`, `\r\n` or a lone `\r`, so changelogs saved with
//! classic Mac line endings split the same way as Unix and Windows ones.

use crate::changelog::extractor::{self, ExtractionResult};
use crate::changelog::heading::HeadingRule;
use crate::core::error::{NotesError, NotesResult, ResultExt};
use std::collections::VecDeque;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::{Path, PathBuf};

/// An open changelog, read forward once
pub struct ChangelogSource {
  path: PathBuf,
  reader: BufReader<File>,
}

impl ChangelogSource {
  /// Open the changelog for reading
  pub fn open(path: &Path) -> NotesResult<Self> {
    let file = File::open(path).with_context(|| format!("Failed to open changelog {}", path.display()))?;
    Ok(Self {
      path: path.to_path_buf(),
      reader: BufReader::new(file),
    })
  }

  /// Lines without their terminators
  pub fn lines(self) -> SourceLines<BufReader<File>> {
    SourceLines::new(self.reader)
  }

  /// Extract `version` from this changelog, consuming the source
  ///
  /// Read errors name the changelog path.
  pub fn extract(self, version: &str, rule: &HeadingRule) -> NotesResult<ExtractionResult> {
    let path = self.path.clone();
    extractor::extract(self.lines(), version, rule).map_err(|err| match err {
      NotesError::SourceRead { path: None, source } => NotesError::SourceRead {
        path: Some(path),
        source,
      },
      other => other,
    })
  }
}

/// Iterator over lines split at `\n`, `\r\n` and `\r`
///
/// Reads one `\n`-terminated chunk at a time; a chunk holding lone `\r`
/// breaks yields several lines.
pub struct SourceLines<R> {
  reader: R,
  pending: VecDeque<String>,
}

impl<R: BufRead> SourceLines<R> {
  pub fn new(reader: R) -> Self {
    Self {
      reader,
      pending: VecDeque::new(),
    }
  }

  fn read_chunk(&mut self) -> io::Result<bool> {
    let mut buf = Vec::new();
    if self.reader.read_until(b'\n', &mut buf)? == 0 {
      return Ok(false);
    }

    if buf.last() == Some(&b'\n') {
      buf.pop();
    }
    if buf.last() == Some(&b'\r') {
      buf.pop();
    }

    let chunk = String::from_utf8(buf).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
    self.pending.extend(chunk.split('\r').map(str::to_string));
    Ok(true)
  }
}

impl<R: BufRead> Iterator for SourceLines<R> {
  type Item = io::Result<String>;

  fn next(&mut self) -> Option<Self::Item> {
    if let Some(line) = self.pending.pop_front() {
      return Some(Ok(line));
    }

    match self.read_chunk() {
      Ok(true) => self.pending.pop_front().map(Ok),
      Ok(false) => None,
      Err(e) => Some(Err(e)),
    }
  }
}
