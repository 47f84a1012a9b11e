//! Content loaders for reading game data from files.
//!
//! Every loader reads one file and hands back arena-core types. Parse and I/O
//! failures carry the offending path in their context.

pub mod config;
pub mod factory;
pub mod names;

pub use config::ConfigLoader;
pub use factory::ContentFactory;
pub use names::{NameParts, NamePartsLoader};

use std::path::Path;

use anyhow::Context;

/// Common result type for loaders.
pub type LoadResult<T> = anyhow::Result<T>;

/// Helper function to read file contents.
pub(crate) fn read_file(path: &Path) -> LoadResult<String> {
    std::fs::read_to_string(path).with_context(|| format!("Failed to read file {}", path.display()))
}
