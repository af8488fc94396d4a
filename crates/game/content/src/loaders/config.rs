//! Game configuration loader.

use std::path::Path;

use game_core::GameConfig;

use crate::loaders::{LoadResult, read_file};

/// Loader for game configuration from TOML files.
///
/// Every field is optional; missing ones keep their [`GameConfig::default`]
/// value.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load config data from a TOML file.
    pub fn load(path: &Path) -> LoadResult<GameConfig> {
        let content = read_file(path)?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> LoadResult<GameConfig> {
        let config: GameConfig = toml::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse config TOML: {}", e))?;

        if config.tick_ms == 0 {
            anyhow::bail!("tick_ms must be positive");
        }
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use game_core::{Position, Size};

    use super::*;

    #[test]
    fn empty_file_yields_defaults() {
        let config = ConfigLoader::parse("").expect("empty TOML is valid");
        assert_eq!(config, GameConfig::default());
    }

    #[test]
    fn partial_overrides() {
        let config = ConfigLoader::parse(
            r#"
            starting_money = 30
            message_ttl_ms = 500

            [map_size]
            width = 800.0
            height = 600.0
            "#,
        )
        .expect("valid TOML");

        assert_eq!(config.starting_money, 30);
        assert_eq!(config.message_ttl_ms, 500);
        assert_eq!(config.map_size, Size::new(800.0, 600.0));
        assert_eq!(config.player_spawn, Position::new(1240.0, 600.0));
    }

    #[test]
    fn rejects_zero_tick() {
        assert!(ConfigLoader::parse("tick_ms = 0").is_err());
    }

    #[test]
    fn loads_from_disk() {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        writeln!(file, "player_max_shield = 50").expect("write");

        let config = ConfigLoader::load(file.path()).expect("readable");
        assert_eq!(config.player_max_shield, 50);
    }

    #[test]
    fn missing_file_is_an_error() {
        let err = ConfigLoader::load(Path::new("/nonexistent/sahara.toml")).unwrap_err();
        assert!(err.to_string().contains("Failed to read file"));
    }
}
