//! Static game content and file loaders.
//!
//! This crate houses the fixed tables of the desert map (items, shop catalog,
//! hostile archetypes, spawn table, combat amounts) and TOML loaders for the
//! tunable parts:
//! - Game configuration (map bounds, player box, shop zone, starting money)
//! - Alternative spawn tables
//!
//! Content is consumed by runtime oracles and never appears in game state.

pub mod tables;

#[cfg(feature = "loaders")]
pub mod loaders;

#[cfg(feature = "loaders")]
pub use loaders::{ConfigLoader, SpawnLoader};
