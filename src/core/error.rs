//! Error types for changelog-notes with contextual messages and exit codes
//!
//! Every error maps to an exit code and, where it helps, a short suggestion
//! printed after the message.

use std::fmt;
use std::io;
use std::path::PathBuf;

/// Exit codes for changelog-notes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
  /// User error (config, invalid args, release missing from changelog)
  User = 1,
  /// System error (I/O)
  System = 2,
}

impl ExitCode {
  /// Convert to i32 for process exit
  pub fn as_i32(self) -> i32 {
    self as i32
  }
}

/// Main error type for changelog-notes
#[derive(Debug)]
pub enum NotesError {
  /// Configuration errors (detected before scanning)
  Config(ConfigError),

  /// The requested release could not be turned into notes
  Release(ReleaseError),

  /// The changelog failed while being read line by line
  SourceRead { path: Option<PathBuf>, source: io::Error },

  /// I/O errors, optionally with what was being attempted
  Io { context: Option<String>, source: io::Error },

  /// Generic error with message and optional context
  Message {
    message: String,
    context: Option<String>,
    help: Option<String>,
  },
}

impl NotesError {
  /// Create a simple error message
  pub fn message(msg: impl Into<String>) -> Self {
    NotesError::Message {
      message: msg.into(),
      context: None,
      help: None,
    }
  }

  /// Add context to an existing error
  pub fn context(self, ctx: impl Into<String>) -> Self {
    let ctx_str = ctx.into();
    match self {
      NotesError::Message { message, context, help } => NotesError::Message {
        message,
        context: Some(context.map(|c| format!("{}\n{}", ctx_str, c)).unwrap_or(ctx_str)),
        help,
      },
      NotesError::Io { context, source } => NotesError::Io {
        context: Some(context.map(|c| format!("{}\n{}", ctx_str, c)).unwrap_or(ctx_str)),
        source,
      },
      _ => self,
    }
  }

  /// Get the appropriate exit code for this error
  pub fn exit_code(&self) -> ExitCode {
    match self {
      NotesError::Config(_) => ExitCode::User,
      NotesError::Release(_) => ExitCode::User,
      NotesError::SourceRead { .. } => ExitCode::System,
      NotesError::Io { .. } => ExitCode::System,
      NotesError::Message { .. } => ExitCode::User,
    }
  }

  /// Get contextual help message for this error
  pub fn help_message(&self) -> Option<String> {
    match self {
      NotesError::Config(e) => e.help_message(),
      NotesError::Release(e) => e.help_message(),
      NotesError::Message { help, .. } => help.clone(),
      _ => None,
    }
  }
}

impl fmt::Display for NotesError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      NotesError::Config(e) => write!(f, "{}", e),
      NotesError::Release(e) => write!(f, "{}", e),
      NotesError::SourceRead { path: Some(path), source } => {
        write!(f, "Failed to read changelog {}: {}", path.display(), source)
      }
      NotesError::SourceRead { path: None, source } => write!(f, "Failed to read changelog: {}", source),
      NotesError::Io { context: Some(ctx), source } => write!(f, "{}\nI/O error: {}", ctx, source),
      NotesError::Io { context: None, source } => write!(f, "I/O error: {}", source),
      NotesError::Message { message, context, .. } => {
        write!(f, "{}", message)?;
        if let Some(ctx) = context {
          write!(f, "\n{}", ctx)?;
        }
        Ok(())
      }
    }
  }
}

impl std::error::Error for NotesError {
  fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
    match self {
      NotesError::Io { source, .. } | NotesError::SourceRead { source, .. } => Some(source),
      _ => None,
    }
  }
}

impl From<io::Error> for NotesError {
  fn from(err: io::Error) -> Self {
    NotesError::Io {
      context: None,
      source: err,
    }
  }
}

impl From<ConfigError> for NotesError {
  fn from(err: ConfigError) -> Self {
    NotesError::Config(err)
  }
}

impl From<ReleaseError> for NotesError {
  fn from(err: ReleaseError) -> Self {
    NotesError::Release(err)
  }
}

impl From<serde_json::Error> for NotesError {
  fn from(err: serde_json::Error) -> Self {
    NotesError::message(format!("JSON error: {}", err))
  }
}

/// Configuration-related errors
#[derive(Debug)]
pub enum ConfigError {
  /// Explicit config file does not exist
  NotFound { path: PathBuf },

  /// Config file exists but is not valid
  Parse { path: PathBuf, reason: String },

  /// Missing or empty required value
  MissingField { field: String },

  /// Heading pattern does not compile
  InvalidPattern { pattern: String, reason: String },
}

impl ConfigError {
  fn help_message(&self) -> Option<String> {
    match self {
      ConfigError::MissingField { field } if field == "release-version" => {
        Some("Pass --release-version <VERSION> or set the `release-version` action input.".to_string())
      }
      ConfigError::MissingField { field } if field.starts_with("release-heading") => Some(format!(
        "Leave `{}` unset to use the default Markdown heading pattern.",
        field
      )),
      ConfigError::InvalidPattern { .. } => Some(
        "Heading prefix and suffix are regular expressions; escape literal characters such as `[` or `(`.".to_string(),
      ),
      ConfigError::NotFound { .. } => {
        Some("Create the file or drop --config to use changelog-notes.toml from the current directory.".to_string())
      }
      _ => None,
    }
  }
}

impl fmt::Display for ConfigError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      ConfigError::NotFound { path } => {
        write!(f, "Config file not found: {}", path.display())
      }
      ConfigError::Parse { path, reason } => {
        write!(f, "Failed to parse config from {}: {}", path.display(), reason)
      }
      ConfigError::MissingField { field } => {
        write!(f, "Missing required value: {}", field)
      }
      ConfigError::InvalidPattern { pattern, reason } => {
        write!(f, "Invalid release heading pattern '{}': {}", pattern, reason)
      }
    }
  }
}

/// Outcomes of a successful scan that still cannot produce release notes
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReleaseError {
  /// The target heading never appeared
  NotFound { version: String },

  /// The heading appeared but nothing but whitespace followed it
  Empty { version: String },
}

impl ReleaseError {
  fn help_message(&self) -> Option<String> {
    match self {
      ReleaseError::NotFound { version } => Some(format!(
        "Check that the changelog has a heading like `## [{}]` or adjust the heading prefix/suffix.",
        version
      )),
      ReleaseError::Empty { .. } => Some("Add notes below the release heading before publishing.".to_string()),
    }
  }
}

impl fmt::Display for ReleaseError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      ReleaseError::NotFound { version } => {
        write!(f, "No release notes found for version \"{}\"!", version)
      }
      ReleaseError::Empty { version } => {
        write!(f, "Release notes for version \"{}\" are empty!", version)
      }
    }
  }
}

/// Result type alias for changelog-notes
pub type NotesResult<T> = Result<T, NotesError>;

/// Helper trait to add context to Results
pub trait ResultExt<T> {
  /// Add context to an error result
  fn context(self, ctx: impl Into<String>) -> NotesResult<T>;

  /// Add context using a closure (lazy evaluation)
  fn with_context<F>(self, f: F) -> NotesResult<T>
  where
    F: FnOnce() -> String;
}

impl<T, E> ResultExt<T> for Result<T, E>
where
  E: Into<NotesError>,
{
  fn context(self, ctx: impl Into<String>) -> NotesResult<T> {
    self.map_err(|e| e.into().context(ctx))
  }

  fn with_context<F>(self, f: F) -> NotesResult<T>
  where
    F: FnOnce() -> String,
  {
    self.map_err(|e| e.into().context(f()))
  }
}

/// Pretty-print an error to stderr with help text
///
/// Under GitHub Actions an `::error::` workflow command is emitted as well so
/// the failure is annotated on the run.
pub fn print_error(error: &NotesError) {
  eprintln!("\n❌ {}\n", error);

  if let Some(help) = error.help_message() {
    eprintln!("💡 Help: {}\n", help);
  }

  if crate::utils::is_github_actions() {
    println!("::error::{}", crate::utils::escape_workflow_data(&error.to_string()));
  }
}
