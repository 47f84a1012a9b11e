//! Content factory for loading everything from one data directory.

use std::path::{Path, PathBuf};

use arena_core::{ArenaConfig, NameGenerator};

use crate::loaders::{ConfigLoader, LoadResult, NameParts, NamePartsLoader};

/// Content factory that loads all game content from a data directory.
///
/// # Directory Structure
///
/// ```text
/// data_dir/
/// ├── arena.toml
/// └── names.ron
/// ```
pub struct ContentFactory {
    data_dir: PathBuf,
}

impl ContentFactory {
    pub const CONFIG_FILE: &'static str = "arena.toml";
    pub const NAMES_FILE: &'static str = "names.ron";

    /// Creates a new content factory pointing to a data directory.
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    /// Load balance tables from `arena.toml`.
    pub fn load_config(&self) -> LoadResult<ArenaConfig> {
        ConfigLoader::load(&self.data_dir.join(Self::CONFIG_FILE))
    }

    /// Load name-part lists from `names.ron`.
    pub fn load_name_parts(&self) -> LoadResult<NameParts> {
        NamePartsLoader::load(&self.data_dir.join(Self::NAMES_FILE))
    }

    /// Load `names.ron` and build a generator shuffled by `seed`.
    pub fn name_generator(&self, seed: u64) -> LoadResult<NameGenerator> {
        self.load_name_parts()?.generator(seed)
    }

    /// Returns the data directory path.
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }
}
