//! clh changelog - rendering and output for curated changelog entries
//!
//! This crate formats an accepted set of commit records into a dated
//! Markdown section and writes it to stdout or prepends it to a changelog
//! file.

mod renderer;
mod writer;

pub use renderer::render;
pub use writer::{prepend, write_block, OutputTarget, CHANGELOG_FILE};
