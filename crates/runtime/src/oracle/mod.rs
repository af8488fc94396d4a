//! Runtime wrappers around static game content oracles.
//!
//! These implementations expose `game-core` oracle traits and bundle them into
//! an [`OracleManager`] so the runtime can build [`game_core::Env`] snapshots
//! on demand. The data is immutable at runtime; dynamic state lives in
//! [`game_core::GameState`].
mod items;
mod tables;

use game_core::{Env, GameEnv};
use std::sync::Arc;

pub use items::ItemOracleImpl;
pub use tables::TablesOracleImpl;

/// Manages all oracle implementations and provides unified access
#[derive(Debug, Clone)]
pub struct OracleManager {
    pub(crate) items: Arc<ItemOracleImpl>,
    pub(crate) tables: Arc<TablesOracleImpl>,
}

impl OracleManager {
    /// Creates a new oracle manager
    pub fn new(items: Arc<ItemOracleImpl>, tables: Arc<TablesOracleImpl>) -> Self {
        Self { items, tables }
    }

    /// Oracles over the built-in desert content.
    pub fn from_content() -> Self {
        Self::new(
            Arc::new(ItemOracleImpl::from_content()),
            Arc::new(TablesOracleImpl::from_content()),
        )
    }

    /// Converts oracle manager into GameEnv for game-core
    pub fn as_game_env(&self) -> GameEnv<'_> {
        Env::with_all(self.items.as_ref(), self.tables.as_ref()).into_game_env()
    }

    pub fn items(&self) -> &ItemOracleImpl {
        &self.items
    }

    pub fn tables(&self) -> &TablesOracleImpl {
        &self.tables
    }
}
