//! Git types

use serde::{Deserialize, Serialize};

/// One parsed entry from the textual git log.
///
/// All fields are kept as the raw text git printed them, after the line
/// prefix (`commit `, `Author: `, `Date: `) is stripped and the remainder
/// left-trimmed. The message keeps one trailing newline per accumulated
/// line.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommitRecord {
    /// Commit identifier
    pub commit: String,
    /// Author name and email
    pub author: String,
    /// Commit date, as git formatted it
    pub date: String,
    /// Commit message body, left-trimmed lines joined with newlines
    pub message: String,
}

impl CommitRecord {
    /// Copy of this record with a replacement message
    pub fn with_message(&self, message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            ..self.clone()
        }
    }
}
