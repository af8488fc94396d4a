//! Authoritative game state representation.
//!
//! This module owns the data structures that describe the player, the roster,
//! the active encounter and the status line. Runtime layers clone or query
//! this state but mutate it exclusively through the engine.
mod error;
mod snapshot;
pub mod types;

pub use error::InitializationError;
pub use snapshot::{HostileView, RenderSnapshot, ShopLine};
pub use types::{
    ArchetypeId, BoundingBox, Direction, EntityId, ItemHandle, Position, ResourceMeter, Size, Tick,
};

use crate::combat::EncounterSession;
use crate::config::GameConfig;
use crate::economy::{Inventory, Purse};
use crate::encounter::EncounterTrigger;
use crate::env::TablesOracle;
use crate::stats::StatBlock;
use crate::world::Roster;

/// Top-level screen the game is in.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum Mode {
    /// Title screen, waiting for a start intent.
    #[default]
    Menu,
    /// Free roaming on the map.
    World,
    /// Inside an encounter.
    Combat,
}

/// Everything the player owns. Persists for the whole session.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PlayerState {
    pub stats: StatBlock,
    /// Top-left corner of the player's collision box.
    pub position: Position,
    pub inventory: Inventory,
    pub purse: Purse,
}

impl PlayerState {
    /// Full health, empty shield, starting money, standing on the spawn point.
    pub fn fresh(config: &GameConfig) -> Self {
        Self {
            stats: StatBlock::new(config.player_max_health, config.player_max_shield, 0),
            position: config.player_spawn,
            inventory: Inventory::empty(),
            purse: Purse::new(config.starting_money),
        }
    }
}

/// Short-lived status line shown by the renderer.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TransientMessage {
    pub text: String,
    pub expires_at: Tick,
}

impl TransientMessage {
    pub fn is_expired(&self, now: Tick) -> bool {
        now >= self.expires_at
    }
}

/// Canonical snapshot of the deterministic game state.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GameState {
    pub config: GameConfig,
    pub mode: Mode,
    /// Milliseconds since the state was created.
    pub clock: Tick,
    pub player: PlayerState,
    pub roster: Roster,
    /// Present only while `mode == Combat`.
    pub combat: Option<EncounterSession>,
    pub trigger: EncounterTrigger,
    /// Whether the player's box overlaps the shop zone.
    pub shop_open: bool,
    pub message: Option<TransientMessage>,
    /// Set once the world has been built; cleared by a defeat so the next
    /// start rebuilds it.
    world_ready: bool,
}

impl GameState {
    /// Title-screen state: no world yet, the first start intent builds it.
    pub fn new(config: GameConfig) -> Self {
        let player = PlayerState::fresh(&config);
        Self {
            config,
            mode: Mode::Menu,
            clock: Tick::ZERO,
            player,
            roster: Roster::empty(),
            combat: None,
            trigger: EncounterTrigger::default(),
            shop_open: false,
            message: None,
            world_ready: false,
        }
    }

    /// A game already in progress: fresh player, roster spawned from the
    /// spawn table, mode `World`.
    pub fn new_game(
        config: GameConfig,
        tables: &(impl TablesOracle + ?Sized),
    ) -> Result<Self, InitializationError> {
        let mut state = Self::new(config);
        state.reset_world(tables)?;
        state.mode = Mode::World;
        Ok(state)
    }

    pub fn world_ready(&self) -> bool {
        self.world_ready
    }

    /// Rebuilds the player and the roster; the clock keeps running.
    pub fn reset_world(
        &mut self,
        tables: &(impl TablesOracle + ?Sized),
    ) -> Result<(), InitializationError> {
        self.roster = Roster::spawn(&tables.spawn_table(), tables)?;
        self.player = PlayerState::fresh(&self.config);
        self.combat = None;
        self.trigger.reset();
        self.shop_open = self.player_box().intersects(&self.config.shop_zone);
        self.world_ready = true;
        Ok(())
    }

    /// Marks the world as spent so the next start rebuilds it.
    pub(crate) fn discard_world(&mut self) {
        self.world_ready = false;
    }

    pub fn player_box(&self) -> BoundingBox {
        self.config.player_box(self.player.position)
    }

    /// Replaces the status line; it expires after `message_ttl_ms`.
    pub fn post_message(&mut self, text: impl Into<String>) {
        self.message = Some(TransientMessage {
            text: text.into(),
            expires_at: self.clock + self.config.message_ttl_ms,
        });
    }

    /// Drops the status line once its lifetime has elapsed.
    pub fn expire_message(&mut self) {
        if self
            .message
            .as_ref()
            .is_some_and(|message| message.is_expired(self.clock))
        {
            self.message = None;
        }
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(GameConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::TestTables;

    #[test]
    fn new_game_spawns_world() {
        let state = GameState::new_game(GameConfig::default(), &TestTables).expect("valid tables");

        assert_eq!(state.mode, Mode::World);
        assert_eq!(state.roster.len(), 2);
        assert_eq!(state.player.purse.money(), 10_000);
        assert_eq!(state.player.stats.health.current, 100);
        assert_eq!(state.player.stats.shield.current, 0);
        assert_eq!(state.player.position, Position::new(1240.0, 600.0));
        assert!(!state.shop_open);
        assert!(state.world_ready());
    }

    #[test]
    fn title_state_has_no_world() {
        let state = GameState::default();
        assert_eq!(state.mode, Mode::Menu);
        assert!(state.roster.is_empty());
        assert!(!state.world_ready());
    }

    #[test]
    fn messages_expire_after_their_lifetime() {
        let mut state = GameState::default();
        state.post_message("hello");

        state.clock = Tick(1_999);
        state.expire_message();
        assert!(state.message.is_some());

        state.clock = Tick(2_000);
        state.expire_message();
        assert!(state.message.is_none());
    }
}
