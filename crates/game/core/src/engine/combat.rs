//! Combat mode: hostile turns, player actions and encounter resolution.

use super::{EngineError, GameEngine, GameEvent, IntentError, hostile_name};
use crate::action::{Intent, IntentKind, TickInput};
use crate::combat::{
    ActionEffect, CombatError, CombatPhase, EncounterSession, PlayerAction, Resolution,
};
use crate::economy;
use crate::env::{GameEnv, OracleError};
use crate::state::{EntityId, Mode};
use crate::stats::DamageReport;

impl GameEngine<'_> {
    /// Engages `hostile` outside of the trigger, e.g. from a scripted event.
    ///
    /// # Errors
    ///
    /// `AlreadyEngaged` while a session exists, `UnknownHostile` when the id
    /// is not in the roster.
    pub fn start_encounter(
        &mut self,
        env: GameEnv<'_>,
        hostile: EntityId,
    ) -> Result<Vec<GameEvent>, CombatError> {
        let mut events = Vec::new();
        self.engage(env, hostile, &mut events)?;
        Ok(events)
    }

    pub(super) fn engage(
        &mut self,
        env: GameEnv<'_>,
        id: EntityId,
        events: &mut Vec<GameEvent>,
    ) -> Result<(), CombatError> {
        if let Some(session) = &self.state.combat {
            return Err(CombatError::AlreadyEngaged(session.hostile()));
        }
        let hostile = self
            .state
            .roster
            .get(id)
            .ok_or(CombatError::UnknownHostile(id))?;

        let session = EncounterSession::start(hostile, self.state.clock);
        let archetype = hostile.archetype;
        let name = env
            .tables()
            .map_or("a hostile", |tables| hostile_name(tables, archetype));

        self.state.combat = Some(session);
        events.push(GameEvent::EncounterStarted {
            hostile: id,
            archetype,
        });
        self.change_mode(Mode::Combat, events);
        self.refresh_shop(events);
        self.state.post_message(format!("{name} attacks!"));
        Ok(())
    }

    pub(super) fn step_combat(
        &mut self,
        env: GameEnv<'_>,
        input: &TickInput,
        events: &mut Vec<GameEvent>,
    ) -> Result<(), EngineError> {
        self.reject_outside(Mode::Combat, input, events);

        let engaged = self.state.combat.as_ref().map(EncounterSession::hostile);
        let bounds = self.state.config.map_size;
        self.state.roster.tick(bounds, engaged);

        // Fleeing leaves before the pending strike lands.
        if input.combat != Some(PlayerAction::Flee) {
            self.hostile_turn(env, events)?;
        }
        if self.state.mode == Mode::Combat {
            self.apply_combat_intents(env, input, events)
        } else {
            self.reject_after_encounter(input, events);
            Ok(())
        }
    }

    /// Refuses the combat and item intents of a step whose encounter ended
    /// before the player could act. The resolution message stays on screen.
    fn reject_after_encounter(&self, input: &TickInput, events: &mut Vec<GameEvent>) {
        let mode = self.state.mode;
        let leftovers = input
            .combat
            .map(|_| IntentKind::Combat)
            .into_iter()
            .chain(input.item.map(|item| item.kind()));
        events.extend(leftovers.map(|intent| GameEvent::IntentRejected {
            intent,
            error: IntentError::InvalidTransition { mode, intent },
        }));
    }

    /// Player action first, then the item intent, each routed by the mode
    /// the game is in at that moment.
    pub(super) fn apply_combat_intents(
        &mut self,
        env: GameEnv<'_>,
        input: &TickInput,
        events: &mut Vec<GameEvent>,
    ) -> Result<(), EngineError> {
        if let Some(action) = input.combat {
            self.player_action(env, action, events)?;
        }

        match (input.item, self.state.mode) {
            (Some(item), Mode::Combat) => self.apply_combat_item(env, item, events),
            (Some(item), Mode::World) => self.apply_world_item(env, item, events),
            (Some(item), mode) => {
                let intent = item.kind();
                self.reject(intent, IntentError::InvalidTransition { mode, intent }, events);
                Ok(())
            }
            (None, _) => Ok(()),
        }
    }

    /// The automatic strike owed from the previous step, if any.
    fn hostile_turn(
        &mut self,
        env: GameEnv<'_>,
        events: &mut Vec<GameEvent>,
    ) -> Result<(), EngineError> {
        let tables = env.tables()?;
        let state = &mut *self.state;
        let Some(session) = state.combat.as_mut() else {
            return Ok(());
        };
        if session.phase() != CombatPhase::HostileTurn {
            return Ok(());
        }
        let Some(hostile) = state.roster.get(session.hostile()) else {
            self.abandon_encounter(events);
            return Ok(());
        };

        // The phase was checked above, so the session cannot refuse the strike.
        let strike = match session.hostile_turn(&mut state.player.stats, hostile) {
            Ok(strike) => strike,
            Err(error) => {
                self.reject(IntentKind::Combat, error.into(), events);
                return Ok(());
            }
        };
        let name = hostile_name(tables, hostile.archetype);

        self.state.post_message(strike_message(name, &strike.damage));
        events.push(GameEvent::HostileAttacked(strike));
        if let Some(resolution) = strike.phase.resolution() {
            self.finish_encounter(env, strike.hostile, resolution, events)?;
        }
        Ok(())
    }

    fn player_action(
        &mut self,
        env: GameEnv<'_>,
        action: PlayerAction,
        events: &mut Vec<GameEvent>,
    ) -> Result<(), EngineError> {
        let items = env.items()?;
        let tables = env.tables()?;
        let rules = tables.combat_rules();

        let state = &mut *self.state;
        let Some(session) = state.combat.as_mut() else {
            let error = IntentError::InvalidTransition {
                mode: state.mode,
                intent: IntentKind::Combat,
            };
            self.reject(IntentKind::Combat, error, events);
            return Ok(());
        };
        let id = session.hostile();
        let Some(hostile) = state.roster.get_mut(id) else {
            self.abandon_encounter(events);
            return Ok(());
        };

        let result = session.player_action(
            action,
            &mut state.player.stats,
            &state.player.inventory,
            hostile,
            rules,
            items,
        );
        let name = hostile_name(tables, hostile.archetype);

        match result {
            Ok(report) => {
                if let Some(text) = action_message(name, report.effect) {
                    self.state.post_message(text);
                }
                events.push(GameEvent::PlayerActed {
                    hostile: id,
                    report,
                });
                if let Some(resolution) = report.phase.resolution() {
                    self.finish_encounter(env, id, resolution, events)?;
                }
            }
            Err(error) => self.reject(IntentKind::Combat, error.into(), events),
        }
        Ok(())
    }

    fn apply_combat_item(
        &mut self,
        env: GameEnv<'_>,
        intent: Intent,
        events: &mut Vec<GameEvent>,
    ) -> Result<(), EngineError> {
        let Intent::UseItem(index) = intent else {
            let error = IntentError::InvalidTransition {
                mode: Mode::Combat,
                intent: intent.kind(),
            };
            self.reject(intent.kind(), error, events);
            return Ok(());
        };

        let items = env.items()?;
        let state = &mut *self.state;
        let Some(session) = state.combat.as_mut() else {
            return Ok(());
        };

        match session.use_item(index, &mut state.player.inventory, &mut state.player.stats, items) {
            Ok(outcome) => {
                self.state.post_message(outcome.message());
                events.push(GameEvent::ItemConsumed(outcome));
            }
            Err(error) => self.reject(IntentKind::UseItem, error.into(), events),
        }
        Ok(())
    }

    /// Applies the consequences of a resolved session and leaves combat.
    fn finish_encounter(
        &mut self,
        env: GameEnv<'_>,
        id: EntityId,
        resolution: Resolution,
        events: &mut Vec<GameEvent>,
    ) -> Result<(), EngineError> {
        let tables = env.tables()?;
        let archetype = self.state.roster.get(id).map(|hostile| hostile.archetype);
        let name = archetype.map_or("the hostile", |archetype| hostile_name(tables, archetype));
        let reward = match (resolution, archetype) {
            (Resolution::Victory, Some(archetype)) => {
                tables
                    .archetype(archetype)
                    .ok_or(OracleError::ArchetypeNotFound(archetype))?
                    .reward
            }
            _ => 0,
        };

        self.state.combat = None;
        let (text, next_mode) = match resolution {
            Resolution::Victory => {
                economy::award(reward, &mut self.state.player.purse);
                (format!("You defeated {name}! +{reward} coins"), Mode::World)
            }
            Resolution::Fled => {
                self.state.trigger.suppress(id);
                (format!("You fled from {name}."), Mode::World)
            }
            Resolution::Defeat => {
                self.state.discard_world();
                (format!("{name} defeated you..."), Mode::Menu)
            }
        };

        events.push(GameEvent::EncounterResolved {
            hostile: id,
            resolution,
            reward,
        });
        if resolution == Resolution::Victory && self.state.roster.remove(id).is_some() {
            events.push(GameEvent::HostileRemoved { hostile: id });
        }
        self.change_mode(next_mode, events);
        self.refresh_shop(events);
        self.state.post_message(text);
        Ok(())
    }

    /// Drops a session whose hostile vanished from the roster.
    fn abandon_encounter(&mut self, events: &mut Vec<GameEvent>) {
        self.state.combat = None;
        self.change_mode(Mode::World, events);
        self.refresh_shop(events);
    }
}

fn strike_message(name: &str, damage: &DamageReport) -> String {
    match (damage.absorbed, damage.health_lost) {
        (0, 0) => format!("{name} attacks but deals no damage."),
        (0, lost) => format!("{name} deals {} damage! Health -{lost}", damage.requested),
        (absorbed, 0) => format!("{name} deals {} damage! Shield -{absorbed}", damage.requested),
        (absorbed, lost) => format!(
            "{name} deals {} damage! Shield -{absorbed}, Health -{lost}",
            damage.requested
        ),
    }
}

fn action_message(name: &str, effect: ActionEffect) -> Option<String> {
    match effect {
        ActionEffect::Struck(damage) => {
            Some(format!("You deal {} damage to {name}.", damage.total()))
        }
        ActionEffect::Healed(amount) => Some(format!("You recover {amount} health.")),
        ActionEffect::ShieldReinforced(amount) => Some(format!("Your shield gains {amount}.")),
        ActionEffect::Fled => None,
    }
}
