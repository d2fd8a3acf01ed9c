//! Git log fetching

use std::process::{Command, Stdio};

use tracing::{debug, info, instrument};

use clh_core::GitError;

use crate::Result;

/// Fetch the raw log text for a commit range by running `git log <from>..<to>`.
///
/// Either bound may be empty; the range is passed through to git verbatim
/// and its interpretation of an empty bound applies. The combined stdout is
/// returned as one multi-line string.
#[instrument]
pub fn fetch_log(from: &str, to: &str) -> Result<String> {
    let range = format!("{}..{}", from, to);
    info!(range = %range, "fetching git log");

    let output = Command::new("git")
        .arg("log")
        .arg(&range)
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .output()
        .map_err(GitError::SpawnFailed)?;

    if !output.status.success() {
        return Err(GitError::LogFailed {
            range,
            stderr: String::from_utf8_lossy(&output.stderr).trim_end().to_string(),
        });
    }

    let data = String::from_utf8_lossy(&output.stdout).to_string();
    debug!(bytes = data.len(), "git log fetched");

    Ok(data)
}
