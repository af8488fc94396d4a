//! Traits describing read-only game content.
//!
//! Oracles expose the item catalog and the fixed rule tables (hostile
//! archetypes, spawn table, shop catalog, combat amounts). The [`Env`]
//! aggregate bundles them so the engine can access everything it needs
//! without hard coupling to concrete implementations.
mod error;
mod items;
mod tables;

pub use error::OracleError;
pub use items::{ArmorData, ConsumableEffect, ItemDefinition, ItemKind, ItemOracle, WeaponData};
pub use tables::{CombatRules, HostileArchetype, ShopEntry, SpawnEntry, TablesOracle};

/// Aggregates read-only oracles required by the engine.
pub struct Env<'a, I, T>
where
    I: ItemOracle + ?Sized,
    T: TablesOracle + ?Sized,
{
    items: Option<&'a I>,
    tables: Option<&'a T>,
}

impl<I, T> Clone for Env<'_, I, T>
where
    I: ItemOracle + ?Sized,
    T: TablesOracle + ?Sized,
{
    fn clone(&self) -> Self {
        *self
    }
}

// Only references are stored, so the env is copyable even over trait objects.
impl<I, T> Copy for Env<'_, I, T>
where
    I: ItemOracle + ?Sized,
    T: TablesOracle + ?Sized,
{
}

pub type GameEnv<'a> = Env<'a, dyn ItemOracle + 'a, dyn TablesOracle + 'a>;

impl<'a, I, T> Env<'a, I, T>
where
    I: ItemOracle + ?Sized,
    T: TablesOracle + ?Sized,
{
    pub fn new(items: Option<&'a I>, tables: Option<&'a T>) -> Self {
        Self { items, tables }
    }

    pub fn with_all(items: &'a I, tables: &'a T) -> Self {
        Self::new(Some(items), Some(tables))
    }

    pub fn empty() -> Self {
        Self {
            items: None,
            tables: None,
        }
    }

    /// Returns the ItemOracle, or an error if not available.
    ///
    /// # Errors
    ///
    /// Returns `OracleError::ItemsNotAvailable` if no items oracle was provided.
    pub fn items(&self) -> Result<&'a I, OracleError> {
        self.items.ok_or(OracleError::ItemsNotAvailable)
    }

    /// Returns the TablesOracle, or an error if not available.
    ///
    /// # Errors
    ///
    /// Returns `OracleError::TablesNotAvailable` if no tables oracle was provided.
    pub fn tables(&self) -> Result<&'a T, OracleError> {
        self.tables.ok_or(OracleError::TablesNotAvailable)
    }
}

impl<'a, I, T> Env<'a, I, T>
where
    I: ItemOracle + 'a,
    T: TablesOracle + 'a,
{
    /// Erases the concrete oracle types.
    pub fn into_game_env(self) -> GameEnv<'a> {
        Env {
            items: self.items.map(|items| items as &'a dyn ItemOracle),
            tables: self.tables.map(|tables| tables as &'a dyn TablesOracle),
        }
    }
}
