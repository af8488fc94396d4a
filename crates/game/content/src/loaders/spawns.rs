//! Spawn table loader.

use std::path::Path;

use game_core::SpawnEntry;

use crate::loaders::{LoadResult, read_file};

#[derive(serde::Deserialize)]
struct SpawnFile {
    #[serde(rename = "spawn", default)]
    entries: Vec<SpawnEntry>,
}

/// Loads an alternative spawn table from TOML (`[[spawn]]` array of tables).
///
/// ```toml
/// [[spawn]]
/// archetype = 2
/// position = { x = 220.0, y = 350.0 }
/// direction = { dx = 0.0, dy = 1.0 }
/// ```
pub struct SpawnLoader;

impl SpawnLoader {
    pub fn load(path: &Path) -> LoadResult<Vec<SpawnEntry>> {
        let content = read_file(path)?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> LoadResult<Vec<SpawnEntry>> {
        let file: SpawnFile = toml::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse spawn TOML: {}", e))?;
        Ok(file.entries)
    }
}
