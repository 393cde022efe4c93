//! Test helpers for integration tests

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use tempfile::TempDir;

pub const BASE_URL: &str = "https://example.local/org/repo";

/// Versions present in every fixture changelog, newest first
pub const VERSIONS: &[&str] = &["v2.5.0", "v2.0.2", "v1.5.5", "v1.0.0", "v0.5.0"];

const COMMIT_TYPES: &[&str] = &[
  "Features",
  "Bug Fixes",
  "Refactoring",
  "Testing",
  "Continuous Integration",
  "Documentation",
  "Miscellaneous",
];

/// Release heading styles seen in the wild
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeadingStyle {
  /// `## v1.0.0 - *2025-01-15*`
  Plain,
  /// `## [v1.0.0](https://.../compare/v1.0.0..HEAD) - *2025-01-15*`
  Linked,
}

/// One release in a fixture changelog
#[derive(Debug, Clone)]
pub struct Release {
  pub version: String,
  pub date: String,
  pub notes: String,
}

/// A generated changelog with known release notes
#[derive(Debug, Clone)]
pub struct Changelog {
  pub style: HeadingStyle,
  pub releases: Vec<Release>,
}

impl Changelog {
  /// Build a changelog for `versions` with deterministic notes
  pub fn new(versions: &[&str], style: HeadingStyle) -> Self {
    let releases = versions
      .iter()
      .enumerate()
      .map(|(i, version)| Release {
        version: version.to_string(),
        date: format!("2025-0{}-15", 9 - i.min(8)),
        notes: make_release_notes(version, i),
      })
      .collect();
    Self { style, releases }
  }

  pub fn find_release(&self, version: &str) -> Option<&Release> {
    self.releases.iter().find(|r| r.version == version)
  }

  pub fn render(&self) -> String {
    let mut lines = Vec::new();
    hn(1, "Changelog", &mut lines);
    for release in &self.releases {
      let title = match self.style {
        HeadingStyle::Plain => format!("{} - *{}*", release.version, release.date),
        HeadingStyle::Linked => format!(
          "[{v}]({}/compare/{v}..HEAD) - *{}*",
          BASE_URL,
          release.date,
          v = release.version
        ),
      };
      hn(2, &title, &mut lines);
      lines.push(release.notes.clone());
      lines.push(String::new());
    }
    lines.join("\n")
  }
}

fn hn(level: usize, title: &str, output: &mut Vec<String>) {
  output.push(format!("{} {}", "#".repeat(level), title));
  output.push(String::new());
}

fn make_release_notes(version: &str, seed: usize) -> String {
  let num_categories = 1 + (seed * 3) % COMMIT_TYPES.len();
  let min_commits = 1 + seed % 5;
  let mut lines = Vec::new();
  let mut count = 0;

  for (i, commit_type) in COMMIT_TYPES.iter().take(num_categories).enumerate() {
    hn(3, commit_type, &mut lines);
    for _ in 0..(min_commits + i % 4) {
      count += 1;
      let sha = format!("{:08x}", (seed + 1) * 7919 + count * 104_729);
      lines.push(format!("- Change summary {} -- [{sha}]({}/commit/{sha})", count, BASE_URL));
    }
    lines.push(String::new());
  }

  lines.push(format!(
    "The more detailed changelog for {v} can be found [here]({}/compare/{v}..HEAD).",
    BASE_URL,
    v = version
  ));

  lines.join("\n").trim().to_string()
}

/// A scratch directory to run the binary in
pub struct TestWorkspace {
  _root: TempDir,
  pub path: PathBuf,
}

impl TestWorkspace {
  pub fn new() -> Result<Self> {
    let root = TempDir::new()?;
    let path = root.path().to_path_buf();
    Ok(Self { _root: root, path })
  }

  /// Workspace with `CHANGELOG.md` rendered from `changelog`
  pub fn with_changelog(changelog: &Changelog) -> Result<Self> {
    let ws = Self::new()?;
    ws.write_file("CHANGELOG.md", &changelog.render())?;
    Ok(ws)
  }

  pub fn write_file(&self, path: &str, content: &str) -> Result<()> {
    let full = self.path.join(path);
    if let Some(parent) = full.parent() {
      std::fs::create_dir_all(parent)?;
    }
    std::fs::write(full, content)?;
    Ok(())
  }

  pub fn file_exists(&self, path: &str) -> bool {
    self.path.join(path).exists()
  }

  pub fn read_file(&self, path: &str) -> Result<String> {
    Ok(std::fs::read_to_string(self.path.join(path))?)
  }
}

/// Command for the binary with a clean runner environment
pub fn notes_command(cwd: &Path, args: &[&str]) -> Command {
  let mut cmd = Command::new(env!("CARGO_BIN_EXE_changelog-notes"));
  cmd.current_dir(cwd).args(args);
  for var in [
    "GITHUB_ACTIONS",
    "GITHUB_OUTPUT",
    "RUST_LOG",
    "INPUT_CHANGELOG-FILE",
    "INPUT_RELEASE-NOTES-FILE",
    "INPUT_RELEASE-VERSION",
    "INPUT_RELEASE-HEADING-PREFIX",
    "INPUT_RELEASE-HEADING-SUFFIX",
  ] {
    cmd.env_remove(var);
  }
  cmd
}

/// Run changelog-notes, failing if it exits non-zero
pub fn run_notes(cwd: &Path, args: &[&str]) -> Result<Output> {
  let output = notes_command(cwd, args).output().context("Failed to run changelog-notes")?;

  if !output.status.success() {
    let stderr = String::from_utf8_lossy(&output.stderr);
    let stdout = String::from_utf8_lossy(&output.stdout);
    anyhow::bail!(
      "changelog-notes failed: {}\nstdout: {}\nstderr: {}",
      args.join(" "),
      stdout,
      stderr
    );
  }

  Ok(output)
}

/// Run changelog-notes expecting failure, returning its output
pub fn run_notes_failing(cwd: &Path, args: &[&str]) -> Result<Output> {
  let output = notes_command(cwd, args).output().context("Failed to run changelog-notes")?;

  if output.status.success() {
    anyhow::bail!(
      "changelog-notes unexpectedly succeeded: {}\nstdout: {}",
      args.join(" "),
      String::from_utf8_lossy(&output.stdout)
    );
  }

  Ok(output)
}
