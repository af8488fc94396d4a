//! Content loaders for reading game data from files.
//!
//! Loaders convert TOML files into game-core types; the built-in tables in
//! [`crate::tables`] are used whenever no file is supplied.

pub mod config;
pub mod spawns;

pub use config::ConfigLoader;
pub use spawns::SpawnLoader;

use std::path::Path;

/// Common result type for loaders.
pub type LoadResult<T> = anyhow::Result<T>;

/// Helper function to read file contents.
pub(crate) fn read_file(path: &Path) -> LoadResult<String> {
    std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("Failed to read file {}: {}", path.display(), e))
}
