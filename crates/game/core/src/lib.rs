//! Deterministic encounter and progression rules.
//!
//! `game-core` defines the canonical rules (stat arithmetic, economy, encounter
//! trigger, combat resolver, hostile roster) and exposes pure APIs that the
//! runtime and offline tools share. All state mutation flows through
//! [`engine::GameEngine`], and supporting crates depend on the types
//! re-exported here.
pub mod action;
pub mod combat;
pub mod config;
pub mod economy;
pub mod encounter;
pub mod engine;
pub mod env;
pub mod error;
pub mod state;
pub mod stats;
pub mod world;

#[cfg(test)]
mod testing;

pub use action::{Intent, IntentKind, TickInput};
pub use combat::{
    ActionEffect, ActionReport, CombatError, CombatPhase, EncounterSession, HostileStrike,
    PlayerAction, Resolution,
};
pub use config::GameConfig;
pub use economy::{
    AppliedEffect, EconomyError, EffectOutcome, Inventory, Purse, Receipt, award, best_weapon,
    consume, purchase,
};
pub use encounter::{EncounterTrigger, check_encounter};
pub use engine::{EngineError, GameEngine, GameEvent, IntentError, TickOutcome};
pub use env::{
    ArmorData, CombatRules, ConsumableEffect, Env, GameEnv, HostileArchetype, ItemDefinition,
    ItemKind, ItemOracle, OracleError, ShopEntry, SpawnEntry, TablesOracle, WeaponData,
};
pub use error::{ErrorSeverity, GameError};
pub use state::{
    ArchetypeId, BoundingBox, Direction, EntityId, GameState, HostileView, InitializationError,
    ItemHandle, Mode, PlayerState, Position, RenderSnapshot, ResourceMeter, ShopLine, Size, Tick,
    TransientMessage,
};
pub use stats::{DamageReport, StatBlock};
pub use world::{Hostile, Roster};
