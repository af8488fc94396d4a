//! Roaming mode: movement, roster, shop zone, encounter trigger.

use super::{EngineError, GameEngine, GameEvent, IntentError};
use crate::action::{Intent, IntentKind, TickInput};
use crate::economy;
use crate::env::GameEnv;
use crate::state::Mode;

impl GameEngine<'_> {
    pub(super) fn step_world(
        &mut self,
        env: GameEnv<'_>,
        input: &TickInput,
        events: &mut Vec<GameEvent>,
    ) -> Result<(), EngineError> {
        self.reject_outside(Mode::World, input, events);

        if let Some(position) = input.movement {
            self.move_player(position, events);
        }

        let bounds = self.state.config.map_size;
        self.state.roster.tick(bounds, None);
        self.refresh_shop(events);

        let player_box = self.state.player_box();
        let state = &mut *self.state;
        if let Some(hostile) = state.trigger.check(&player_box, &state.roster, false)
            && let Err(error) = self.engage(env, hostile, events)
        {
            self.reject(IntentKind::Move, error.into(), events);
        }

        // An encounter that just started takes this tick's combat and item intents.
        if self.state.mode == Mode::Combat {
            return self.apply_combat_intents(env, input, events);
        }

        if input.combat.is_some() {
            self.reject(
                IntentKind::Combat,
                IntentError::InvalidTransition {
                    mode: Mode::World,
                    intent: IntentKind::Combat,
                },
                events,
            );
        }
        if let Some(item) = input.item {
            self.apply_world_item(env, item, events)?;
        }
        Ok(())
    }

    /// Inventory use or purchase while roaming.
    pub(super) fn apply_world_item(
        &mut self,
        env: GameEnv<'_>,
        intent: Intent,
        events: &mut Vec<GameEvent>,
    ) -> Result<(), EngineError> {
        let items = env.items()?;
        let player = &mut self.state.player;

        let result = match intent {
            Intent::UseItem(index) => {
                economy::consume(index, &mut player.inventory, &mut player.stats, items)
                    .map(|outcome| (outcome.message(), GameEvent::ItemConsumed(outcome)))
                    .map_err(IntentError::from)
            }
            Intent::Buy(_) if !self.state.shop_open => Err(IntentError::ShopClosed),
            Intent::Buy(item) => economy::purchase(
                item,
                env.tables()?,
                items,
                &mut player.purse,
                &mut player.inventory,
            )
            .map(|receipt| (receipt.message(), GameEvent::ItemPurchased(receipt)))
            .map_err(IntentError::from),
            Intent::StartGame | Intent::Move(_) | Intent::Combat(_) => return Ok(()),
        };

        match result {
            Ok((text, event)) => {
                self.state.post_message(text);
                events.push(event);
            }
            Err(error) => self.reject(intent.kind(), error, events),
        }
        Ok(())
    }
}
