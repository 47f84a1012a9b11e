//! Name-part list loader.

use std::path::Path;

use anyhow::Context;
use arena_core::NameGenerator;
use serde::{Deserialize, Serialize};

use crate::loaders::{LoadResult, read_file};

/// The two lists a name is built from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NameParts {
    pub prefixes: Vec<String>,
    pub suffixes: Vec<String>,
}

impl NameParts {
    /// Builds a generator over these lists, shuffled by `seed`.
    pub fn generator(&self, seed: u64) -> LoadResult<NameGenerator> {
        Ok(NameGenerator::new(&self.prefixes, &self.suffixes, seed)?)
    }
}

/// Loader for [`NameParts`] from RON files.
pub struct NamePartsLoader;

impl NamePartsLoader {
    /// Load name parts, checking the lists are usable by [`NameGenerator`].
    pub fn load(path: &Path) -> LoadResult<NameParts> {
        let content = read_file(path)?;
        let parts: NameParts = ron::from_str(&content)
            .with_context(|| format!("Failed to parse name parts RON {}", path.display()))?;
        parts
            .generator(0)
            .with_context(|| format!("Invalid name parts {}", path.display()))?;
        Ok(parts)
    }
}
