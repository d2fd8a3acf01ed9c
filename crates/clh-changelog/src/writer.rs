//! Changelog output
//!
//! Writes a rendered block to stdout or prepends it to the changelog file.

use std::path::Path;

use tracing::{info, instrument, warn};

use clh_core::ChangelogError;

/// Name of the changelog file in the working directory
pub const CHANGELOG_FILE: &str = "CHANGELOG";

/// Where a rendered changelog block goes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputTarget {
    /// Print the block to standard output
    Stdout,
    /// Prepend the block to the changelog file
    Disk,
}

/// Prepend a block to the file at `path`, creating it if absent.
///
/// Existing content is preserved below the new block; nothing is truncated.
#[instrument(skip(block), fields(path = %path.display(), block_len = block.len()))]
pub fn prepend(path: &Path, block: &str) -> Result<(), ChangelogError> {
    let existing = match std::fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => String::new(),
        Err(e) => {
            return Err(ChangelogError::WriteFailed {
                path: path.to_path_buf(),
                source: e,
            })
        }
    };

    let combined = format!("{}{}", block, existing);
    std::fs::write(path, combined).map_err(|e| ChangelogError::WriteFailed {
        path: path.to_path_buf(),
        source: e,
    })?;

    info!("changelog prepended");
    Ok(())
}

/// Deliver the rendered block to the chosen target.
///
/// A disk failure is not fatal: the error is reported and the block is
/// printed to stdout instead, so the content survives the failed write.
pub fn write_block(block: &str, target: OutputTarget) {
    match target {
        OutputTarget::Stdout => println!("{}", block),
        OutputTarget::Disk => {
            if let Err(e) = prepend(Path::new(CHANGELOG_FILE), block) {
                warn!(error = %e, "changelog write failed, falling back to stdout");
                eprintln!(
                    "There was a problem writing the changelog out. \
                     Here it is in case it did not write to disk."
                );
                println!("{}", block);
            }
        }
    }
}
