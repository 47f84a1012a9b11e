//! Content directory resolution
//!
//! Picks the data directory in order of precedence:
//! 1. `--data-dir` on the command line
//! 2. `ARENA_DATA_DIR` in the environment (or `.env`)
//! 3. The data bundled with the content crate

use anyhow::{Result, bail};
use std::path::{Path, PathBuf};

/// Environment variable overriding the content directory.
pub const DATA_DIR_ENV: &str = "ARENA_DATA_DIR";

/// Data directory shipped with `arena-content`.
pub fn bundled_data_dir() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("..")
        .join("game")
        .join("content")
        .join("data")
}

/// Resolve the content directory and check that it exists.
pub fn content_dir(explicit: Option<PathBuf>) -> Result<PathBuf> {
    let dir = explicit
        .or_else(|| std::env::var_os(DATA_DIR_ENV).map(PathBuf::from))
        .unwrap_or_else(bundled_data_dir);

    if !dir.is_dir() {
        bail!(
            "Content directory not found: {}\n\nHint: pass --data-dir or set {}",
            dir.display(),
            DATA_DIR_ENV
        );
    }

    tracing::debug!(dir = %dir.display(), "using content directory");
    Ok(dir)
}
