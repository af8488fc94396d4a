//! Tick scheduling and intent dispatch.
//!
//! The [`GameEngine`] is the authoritative reducer for [`GameState`]. One call
//! to [`GameEngine::step`] advances the clock, moves the roster, runs the
//! encounter trigger, resolves combat and finally applies inventory or shop
//! intents, all synchronously. Player mistakes come back as
//! [`GameEvent::IntentRejected`]; only broken content aborts a step.
mod combat;
mod errors;
mod events;
mod world;

pub use errors::{EngineError, IntentError};
pub use events::GameEvent;

use crate::action::{Intent, IntentKind, TickInput};
use crate::env::{GameEnv, TablesOracle};
use crate::state::{ArchetypeId, GameState, Mode, Position, RenderSnapshot, Tick};

/// Everything that happened during one step.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct TickOutcome {
    /// Clock value after the step.
    pub clock: Tick,
    pub events: Vec<GameEvent>,
    /// Intents ignored because their per-tick slot was already taken.
    pub dropped: usize,
}

/// Game engine driving the encounter and progression rules.
pub struct GameEngine<'a> {
    state: &'a mut GameState,
}

impl<'a> GameEngine<'a> {
    pub fn new(state: &'a mut GameState) -> Self {
        Self { state }
    }

    /// Advances the game by one tick, consuming at most one intent per slot.
    ///
    /// # Errors
    ///
    /// Returns `EngineError` only when an oracle is missing or the content
    /// tables are inconsistent.
    pub fn step(
        &mut self,
        env: GameEnv<'_>,
        intents: &[Intent],
    ) -> Result<TickOutcome, EngineError> {
        let input = TickInput::from_intents(intents);
        let mut events = Vec::new();

        self.state.clock = self.state.clock + self.state.config.tick_ms;
        self.state.expire_message();

        match self.state.mode {
            Mode::Menu => self.step_menu(env, &input, &mut events)?,
            Mode::World => self.step_world(env, &input, &mut events)?,
            Mode::Combat => self.step_combat(env, &input, &mut events)?,
        }

        Ok(TickOutcome {
            clock: self.state.clock,
            events,
            dropped: input.dropped,
        })
    }

    /// Position report from the movement layer, outside of a step.
    ///
    /// Only accepted while roaming; refreshes the shop-open flag.
    pub fn set_player_position(
        &mut self,
        position: Position,
    ) -> Result<Vec<GameEvent>, IntentError> {
        if self.state.mode != Mode::World {
            return Err(IntentError::InvalidTransition {
                mode: self.state.mode,
                intent: IntentKind::Move,
            });
        }

        let mut events = Vec::new();
        self.move_player(position, &mut events);
        Ok(events)
    }

    pub fn snapshot(&self, env: GameEnv<'_>) -> RenderSnapshot {
        RenderSnapshot::capture(self.state, env)
    }

    fn step_menu(
        &mut self,
        env: GameEnv<'_>,
        input: &TickInput,
        events: &mut Vec<GameEvent>,
    ) -> Result<(), EngineError> {
        self.reject_outside(Mode::Menu, input, events);
        if !input.start {
            return Ok(());
        }

        if !self.state.world_ready() {
            self.state.reset_world(env.tables()?)?;
        }
        self.change_mode(Mode::World, events);
        self.refresh_shop(events);
        Ok(())
    }

    /// Rejects the intents that make no sense in `mode`.
    fn reject_outside(&mut self, mode: Mode, input: &TickInput, events: &mut Vec<GameEvent>) {
        let mut invalid = Vec::new();
        if input.start && mode != Mode::Menu {
            invalid.push(IntentKind::StartGame);
        }
        if input.movement.is_some() && mode != Mode::World {
            invalid.push(IntentKind::Move);
        }
        if input.combat.is_some() && mode == Mode::Menu {
            invalid.push(IntentKind::Combat);
        }
        if let Some(item) = input.item.filter(|_| mode == Mode::Menu) {
            invalid.push(item.kind());
        }

        for intent in invalid {
            self.reject(intent, IntentError::InvalidTransition { mode, intent }, events);
        }
    }

    fn reject(&mut self, intent: IntentKind, error: IntentError, events: &mut Vec<GameEvent>) {
        self.state.post_message(error.to_string());
        events.push(GameEvent::IntentRejected { intent, error });
    }

    fn change_mode(&mut self, to: Mode, events: &mut Vec<GameEvent>) {
        let from = self.state.mode;
        if from != to {
            self.state.mode = to;
            events.push(GameEvent::ModeChanged { from, to });
        }
    }

    /// Shop is open while roaming with the player's box over the shop zone.
    fn refresh_shop(&mut self, events: &mut Vec<GameEvent>) {
        let open = self.state.mode == Mode::World
            && self.state.player_box().intersects(&self.state.config.shop_zone);
        if open == self.state.shop_open {
            return;
        }

        self.state.shop_open = open;
        events.push(if open {
            GameEvent::ShopOpened
        } else {
            GameEvent::ShopClosed
        });
    }

    fn move_player(&mut self, position: Position, events: &mut Vec<GameEvent>) {
        self.state.player.position = position;
        self.refresh_shop(events);
    }
}

fn hostile_name(tables: &(impl TablesOracle + ?Sized), archetype: ArchetypeId) -> &'static str {
    tables
        .archetype(archetype)
        .map_or("the hostile", |row| row.name)
}
