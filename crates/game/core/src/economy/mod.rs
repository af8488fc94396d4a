//! Inventory, purse and shop transactions.
//!
//! Item semantics come from a single source, [`crate::env::ItemOracle`],
//! consulted by both [`purchase`] and [`consume`]. Money changes in exactly
//! two places: [`purchase`] debits, [`award`] credits.
mod consume;
mod error;
mod inventory;
mod shop;

pub use consume::{AppliedEffect, EffectOutcome, consume};
pub use error::EconomyError;
pub use inventory::{Inventory, Purse};
pub use shop::{Receipt, award, best_weapon, purchase};
