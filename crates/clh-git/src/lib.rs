//! clh git - git history access for changelog curation
//!
//! This crate shells out to the git CLI for commit history and parses the
//! textual log into structured commit records.

mod log;
mod splitter;
pub mod types;

pub use log::fetch_log;
pub use splitter::split_log;
pub use types::CommitRecord;

/// Result type for git operations
pub type Result<T> = std::result::Result<T, clh_core::GitError>;
