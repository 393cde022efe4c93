//! Extract command implementation
//!
//! Reads the changelog, slices out the requested release and publishes the
//! notes: stdout always, the notes file and `GITHUB_OUTPUT` when configured.

use crate::changelog::{ChangelogSource, ExtractionResult, ReleaseNotes};
use crate::core::context::{ExtractArgs, ExtractContext};
use crate::core::error::NotesResult;
use crate::core::output::{RELEASE_NOTES_OUTPUT, StepOutputs};
use serde::Serialize;
use std::env;
use tracing::{info, warn};

/// Machine-readable summary printed with `--json`
#[derive(Debug, Serialize)]
struct ExtractReport<'a> {
  version: &'a str,
  #[serde(flatten)]
  result: &'a ExtractionResult,
  notes: &'a str,
}

/// Run the extract command
pub fn run_extract(args: ExtractArgs, json: bool) -> NotesResult<()> {
  let workspace_root = env::current_dir()?;
  let ctx = ExtractContext::resolve(&workspace_root, args)?;

  info!("Processing changelog \"{}\"...", ctx.changelog.display());

  let result = scan(&ctx)?;
  let notes = ReleaseNotes::from_extraction(&ctx.version, &result)?;

  if let Some(path) = &ctx.notes {
    info!("Writing release notes to \"{}\":", path.display());
    let written = notes.write_to(path)?;
    info!("-> {} byte(s) written", written);
  } else {
    warn!("Skipped writing release notes. No output file specified!");
  }

  if let Some(outputs) = StepOutputs::from_env() {
    outputs.set(RELEASE_NOTES_OUTPUT, notes.as_str())?;
    info!("Set output '{}' in {}", RELEASE_NOTES_OUTPUT, outputs.path().display());
  }

  if json {
    let report = ExtractReport {
      version: notes.version(),
      result: &result,
      notes: notes.as_str(),
    };
    println!("{}", serde_json::to_string_pretty(&report)?);
  } else {
    println!("{}", notes.as_str());
  }

  Ok(())
}

/// Scan the changelog once; the file is closed before this returns
fn scan(ctx: &ExtractContext) -> NotesResult<ExtractionResult> {
  ChangelogSource::open(&ctx.changelog)?.extract(&ctx.version, &ctx.rule)
}
