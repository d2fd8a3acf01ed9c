//! Error types for clh

use std::path::PathBuf;
use thiserror::Error;

/// Git-related errors
#[derive(Debug, Error)]
pub enum GitError {
    /// The git binary could not be spawned
    #[error("failed to run git: {0}")]
    SpawnFailed(#[source] std::io::Error),

    /// git log exited with a non-zero status
    #[error("git log {range} failed: {stderr}")]
    LogFailed { range: String, stderr: String },
}

/// Changelog-related errors
#[derive(Debug, Error)]
pub enum ChangelogError {
    /// Failed to write the changelog file
    #[error("failed to write changelog to {path}: {source}")]
    WriteFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
