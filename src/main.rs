mod changelog;
mod commands;
mod core;
mod utils;

use clap::Parser;
use crate::core::context::ExtractArgs;
use crate::core::error::{NotesError, print_error};
use std::io::IsTerminal;
use std::path::PathBuf;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Extract the notes for one release from a CHANGELOG
///
/// Every option can also be supplied as a GitHub Actions input
/// (`INPUT_<NAME>` environment variable). Empty values count as unset.
#[derive(Parser)]
#[command(name = "changelog-notes")]
#[command(version, about, long_about = None)]
#[command(styles = get_styles())]
struct Cli {
  /// Release to extract, compared literally against headings (e.g. v1.5.5)
  #[arg(long, env = "INPUT_RELEASE-VERSION")]
  release_version: Option<String>,

  /// Changelog to read [default: CHANGELOG.md]
  #[arg(long, env = "INPUT_CHANGELOG-FILE")]
  changelog_file: Option<String>,

  /// File to write the release notes to
  #[arg(long, env = "INPUT_RELEASE-NOTES-FILE")]
  release_notes_file: Option<String>,

  /// Regex placed before the version in a release heading [default: "^## \[?"]
  #[arg(long, env = "INPUT_RELEASE-HEADING-PREFIX", allow_hyphen_values = true)]
  release_heading_prefix: Option<String>,

  /// Regex placed after the version in a release heading [default: "[\] ]"]
  #[arg(long, env = "INPUT_RELEASE-HEADING-SUFFIX", allow_hyphen_values = true)]
  release_heading_suffix: Option<String>,

  /// Config file (default: changelog-notes.toml in the current directory, if present)
  #[arg(long)]
  config: Option<PathBuf>,

  /// Output the scan result and notes as JSON
  #[arg(long)]
  json: bool,

  /// Log every scanned line
  #[arg(short, long)]
  verbose: bool,
}

impl Cli {
  fn extract_args(&self) -> ExtractArgs {
    ExtractArgs {
      changelog: self.changelog_file.clone(),
      notes: self.release_notes_file.clone(),
      version: self.release_version.clone(),
      heading_prefix: self.release_heading_prefix.clone(),
      heading_suffix: self.release_heading_suffix.clone(),
      config: self.config.clone(),
    }
  }
}

fn get_styles() -> clap::builder::Styles {
  clap::builder::Styles::styled()
    .usage(
      anstyle::Style::new()
        .bold()
        .underline()
        .fg_color(Some(anstyle::Color::Ansi(anstyle::AnsiColor::Yellow))),
    )
    .header(
      anstyle::Style::new()
        .bold()
        .underline()
        .fg_color(Some(anstyle::Color::Ansi(anstyle::AnsiColor::Yellow))),
    )
    .literal(anstyle::Style::new().fg_color(Some(anstyle::Color::Ansi(anstyle::AnsiColor::Green))))
    .invalid(
      anstyle::Style::new()
        .bold()
        .fg_color(Some(anstyle::Color::Ansi(anstyle::AnsiColor::Red))),
    )
    .error(
      anstyle::Style::new()
        .bold()
        .fg_color(Some(anstyle::Color::Ansi(anstyle::AnsiColor::Red))),
    )
    .placeholder(anstyle::Style::new().fg_color(Some(anstyle::Color::Ansi(anstyle::AnsiColor::White))))
}

/// Log to stderr so stdout carries only the notes
fn init_tracing(verbose: bool) {
  let default = if verbose {
    "changelog_notes=debug"
  } else {
    "changelog_notes=info"
  };
  let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

  tracing_subscriber::registry()
    .with(filter)
    .with(
      tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .with_target(false)
        .without_time(),
    )
    .init();
}

fn main() {
  let cli = Cli::parse();
  init_tracing(cli.verbose);

  if let Err(err) = commands::run_extract(cli.extract_args(), cli.json) {
    handle_error(err);
  }
}

fn handle_error(err: NotesError) -> ! {
  tracing::error!("Extracting release notes failed!");
  print_error(&err);
  std::process::exit(err.exit_code().as_i32());
}
