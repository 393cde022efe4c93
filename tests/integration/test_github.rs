//! Integration tests for running as a GitHub Actions step

use crate::helpers::{Changelog, HeadingStyle, TestWorkspace, VERSIONS, notes_command};
use anyhow::Result;

#[test]
fn test_inputs_from_environment() -> Result<()> {
  let changelog = Changelog::new(VERSIONS, HeadingStyle::Linked);
  let ws = TestWorkspace::new()?;
  ws.write_file("docs/CHANGELOG.md", &changelog.render())?;

  let output = notes_command(&ws.path, &[])
    .env("INPUT_CHANGELOG-FILE", "docs/CHANGELOG.md")
    .env("INPUT_RELEASE-VERSION", "v2.0.2")
    .env("INPUT_RELEASE-NOTES-FILE", "out.md")
    .env("INPUT_RELEASE-HEADING-PREFIX", "")
    .env("INPUT_RELEASE-HEADING-SUFFIX", "")
    .output()?;

  assert!(
    output.status.success(),
    "stderr: {}",
    String::from_utf8_lossy(&output.stderr)
  );
  let release = changelog.find_release("v2.0.2").expect("fixture has the release");
  assert_eq!(ws.read_file("out.md")?, release.notes);

  Ok(())
}

#[test]
fn test_flags_override_environment() -> Result<()> {
  let changelog = Changelog::new(VERSIONS, HeadingStyle::Plain);
  let ws = TestWorkspace::with_changelog(&changelog)?;

  let output = notes_command(&ws.path, &["--release-version", "v1.0.0"])
    .env("INPUT_RELEASE-VERSION", "v2.5.0")
    .output()?;

  assert!(output.status.success());
  let release = changelog.find_release("v1.0.0").expect("fixture has the release");
  assert_eq!(String::from_utf8(output.stdout)?, format!("{}\n", release.notes));

  Ok(())
}

#[test]
fn test_step_output_is_written() -> Result<()> {
  let changelog = Changelog::new(VERSIONS, HeadingStyle::Plain);
  let ws = TestWorkspace::with_changelog(&changelog)?;
  ws.write_file("github_output", "previous=value\n")?;

  let output = notes_command(&ws.path, &["--release-version", "v1.5.5"])
    .env("GITHUB_OUTPUT", ws.path.join("github_output"))
    .output()?;
  assert!(output.status.success());

  let content = ws.read_file("github_output")?;
  let release = changelog.find_release("v1.5.5").expect("fixture has the release");

  let (before, block) = content
    .split_once("release-notes<<")
    .expect("release-notes output block");
  assert_eq!(before, "previous=value\n");

  let (delimiter, rest) = block.split_once('\n').expect("delimiter line");
  assert!(delimiter.starts_with("ghadelimiter_"));
  assert_eq!(rest, format!("{}\n{}\n", release.notes, delimiter));

  Ok(())
}

#[test]
fn test_no_step_output_on_failure() -> Result<()> {
  let ws = TestWorkspace::with_changelog(&Changelog::new(VERSIONS, HeadingStyle::Plain))?;
  ws.write_file("github_output", "")?;

  let output = notes_command(&ws.path, &["--release-version", "v9.9.9"])
    .env("GITHUB_OUTPUT", ws.path.join("github_output"))
    .output()?;

  assert!(!output.status.success());
  assert_eq!(ws.read_file("github_output")?, "");

  Ok(())
}

#[test]
fn test_failure_is_annotated() -> Result<()> {
  let ws = TestWorkspace::with_changelog(&Changelog::new(VERSIONS, HeadingStyle::Plain))?;

  let output = notes_command(&ws.path, &["--release-version", "v9.9.9"])
    .env("GITHUB_ACTIONS", "true")
    .output()?;

  assert_eq!(output.status.code(), Some(1));
  let stdout = String::from_utf8_lossy(&output.stdout);
  assert!(
    stdout.contains("::error::No release notes found for version \"v9.9.9\"!"),
    "unexpected stdout: {}",
    stdout
  );

  Ok(())
}
