//! Small helpers for talking to the GitHub Actions runner

use std::env;

/// True when running inside a GitHub Actions job
pub fn is_github_actions() -> bool {
  env::var("GITHUB_ACTIONS").is_ok_and(|v| v == "true")
}

/// Drop empty strings
///
/// The runner passes unset action inputs as empty strings, so an empty value
/// means "not provided".
pub fn non_empty(value: Option<String>) -> Option<String> {
  value.filter(|v| !v.is_empty())
}

/// Escape a message for use in a workflow command (`::error::...`)
pub fn escape_workflow_data(data: &str) -> String {
  data.replace('%', "%25").replace('\r', "%0D").replace('\n', "%0A")
}
