//! Client configuration read from the process environment.
use std::env;
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context;
use game_content::loaders::{ConfigLoader, SpawnLoader};
use game_core::GameConfig;
use runtime::{ItemOracleImpl, OracleManager, RuntimeConfig, TablesOracleImpl};

use crate::render::OutputFormat;

/// Everything the binary needs before building the runtime.
#[derive(Clone, Debug, Default)]
pub struct ClientConfig {
    pub runtime: RuntimeConfig,
    /// Alternative spawn table; the built-in one is used when unset.
    pub spawns_path: Option<PathBuf>,
    pub output: OutputFormat,
    /// Start in the world instead of the start menu.
    pub skip_menu: bool,
}

impl ClientConfig {
    /// Construct configuration from process environment variables.
    ///
    /// Environment variables:
    /// - `SAHARA_CONFIG` - TOML file overriding [`GameConfig`] fields
    /// - `SAHARA_SPAWNS` - TOML spawn table (`[[spawn]]` rows)
    /// - `SAHARA_OUTPUT` - `text` (default) or `json`
    /// - `SAHARA_SKIP_MENU` - Start directly in the world (default: false)
    /// - `SAHARA_COMMAND_BUFFER` - Runtime command queue size (default: 32)
    /// - `SAHARA_EVENT_BUFFER` - Per-topic event capacity (default: 100)
    pub fn from_env() -> anyhow::Result<Self> {
        let mut config = Self::default();

        if let Some(path) = env::var_os("SAHARA_CONFIG") {
            let path = PathBuf::from(path);
            config.runtime.game_config = ConfigLoader::load(&path)
                .with_context(|| format!("loading game config from {}", path.display()))?;
        }

        config.spawns_path = env::var_os("SAHARA_SPAWNS").map(PathBuf::from);

        if let Ok(output) = env::var("SAHARA_OUTPUT") {
            config.output = parse_output(&output)?;
        }

        if let Some(skip) = read_env_bool("SAHARA_SKIP_MENU") {
            config.skip_menu = skip;
        }

        if let Some(capacity) = read_env::<usize>("SAHARA_COMMAND_BUFFER") {
            config.runtime.command_buffer_size = capacity.max(1);
        }
        if let Some(capacity) = read_env::<usize>("SAHARA_EVENT_BUFFER") {
            config.runtime.event_buffer_size = capacity.max(1);
        }

        Ok(config)
    }

    pub fn game_config(&self) -> &GameConfig {
        &self.runtime.game_config
    }

    /// Content oracles, with the spawn table swapped when one is configured.
    pub fn oracles(&self) -> anyhow::Result<OracleManager> {
        let mut tables = TablesOracleImpl::from_content();
        if let Some(path) = &self.spawns_path {
            let spawns = SpawnLoader::load(path)
                .with_context(|| format!("loading spawn table from {}", path.display()))?;
            tracing::info!("Loaded {} spawn rows from {}", spawns.len(), path.display());
            tables = tables.with_spawn_table(spawns);
        }

        Ok(OracleManager::new(
            Arc::new(ItemOracleImpl::from_content()),
            Arc::new(tables),
        ))
    }
}

fn parse_output(value: &str) -> anyhow::Result<OutputFormat> {
    value
        .parse()
        .with_context(|| format!("unknown SAHARA_OUTPUT value {value:?}"))
}

fn read_env<T>(key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    parse_value(key, &env::var(key).ok()?)
}

/// Parses `raw`, warning and falling back to the default when malformed.
fn parse_value<T>(key: &str, raw: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    let parsed = raw.trim().parse().ok();
    if parsed.is_none() {
        tracing::warn!("Ignoring malformed {}={:?}", key, raw);
    }
    parsed
}

fn read_env_bool(key: &str) -> Option<bool> {
    parse_bool(key, &env::var(key).ok()?)
}

fn parse_bool(key: &str, raw: &str) -> Option<bool> {
    match raw.trim().to_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Some(true),
        "false" | "0" | "no" | "off" => Some(false),
        _ => {
            tracing::warn!("Ignoring malformed {}={:?}", key, raw);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use std::error::Error;
    use std::io::Write;

    use game_core::TablesOracle;

    use super::*;

    #[test]
    fn default_config_uses_builtin_content() {
        let config = ClientConfig::default();
        let oracles = config.oracles().unwrap();

        assert_eq!(config.output, OutputFormat::Text);
        assert_eq!(config.game_config(), &GameConfig::default());
        assert_eq!(oracles.tables().spawn_table().len(), 3);
    }

    #[test]
    fn spawn_file_replaces_the_table() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(
            br#"[[spawn]]
archetype = 1
position = { x = 5.0, y = 5.0 }
direction = { dx = 1.0, dy = 0.0 }
"#,
        )
        .unwrap();

        let config = ClientConfig {
            spawns_path: Some(file.path().to_path_buf()),
            ..ClientConfig::default()
        };
        let oracles = config.oracles().unwrap();
        assert_eq!(oracles.tables().spawn_table().len(), 1);
    }

    #[test]
    fn output_format_errors_name_the_variable() {
        assert_eq!(parse_output("JSON").unwrap(), OutputFormat::Json);

        let error = parse_output("xml").unwrap_err();
        assert!(error.to_string().contains("SAHARA_OUTPUT"));
        assert!(error.source().is_some());
    }

    #[test]
    fn malformed_values_fall_back_to_defaults() {
        assert_eq!(parse_value::<usize>("SAHARA_COMMAND_BUFFER", " 64 "), Some(64));
        assert_eq!(parse_value::<usize>("SAHARA_COMMAND_BUFFER", "lots"), None);

        assert_eq!(parse_bool("SAHARA_SKIP_MENU", "Yes"), Some(true));
        assert_eq!(parse_bool("SAHARA_SKIP_MENU", "0"), Some(false));
        assert_eq!(parse_bool("SAHARA_SKIP_MENU", "maybe"), None);
    }

    #[test]
    fn missing_spawn_file_is_reported() {
        let config = ClientConfig {
            spawns_path: Some(PathBuf::from("/nonexistent/spawns.toml")),
            ..ClientConfig::default()
        };
        let error = config.oracles().unwrap_err();
        assert!(error.to_string().contains("loading spawn table"));
    }
}
