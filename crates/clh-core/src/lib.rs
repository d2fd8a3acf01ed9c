//! clh core - shared error types
//!
//! This crate holds the error hierarchy shared by the git and changelog
//! crates.

pub mod error;

pub use error::{ChangelogError, GitError};
