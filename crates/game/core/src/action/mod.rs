//! Abstract player intents consumed by the engine.
//!
//! The input layer (keyboard, gamepad, scripted tests) translates raw input
//! into [`Intent`] values; edge detection and key repeat stay on that side.
//! Each engine step accepts at most one intent per slot: session, movement,
//! combat, and item (inventory use and purchases share it).

use crate::combat::PlayerAction;
use crate::state::{ItemHandle, Position};

/// One thing the player wants to do this tick.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Intent {
    /// Leave the title menu (starting a new world if needed).
    StartGame,
    /// The movement layer placed the player at this position.
    Move(Position),
    Combat(PlayerAction),
    /// Use the inventory item at this index.
    UseItem(usize),
    Buy(ItemHandle),
}

/// Intent discriminant without payload, for error reporting.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum IntentKind {
    StartGame,
    Move,
    Combat,
    UseItem,
    Buy,
}

impl Intent {
    pub fn kind(&self) -> IntentKind {
        match self {
            Self::StartGame => IntentKind::StartGame,
            Self::Move(_) => IntentKind::Move,
            Self::Combat(_) => IntentKind::Combat,
            Self::UseItem(_) => IntentKind::UseItem,
            Self::Buy(_) => IntentKind::Buy,
        }
    }
}

/// The intents actually processed by one engine step.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TickInput {
    pub start: bool,
    pub movement: Option<Position>,
    pub combat: Option<PlayerAction>,
    /// Either `UseItem` or `Buy`.
    pub item: Option<Intent>,
    /// Intents ignored because their slot was already taken.
    pub dropped: usize,
}

impl TickInput {
    /// Keeps the first intent of each slot, in submission order.
    pub fn from_intents(intents: &[Intent]) -> Self {
        let mut input = Self::default();
        for intent in intents {
            let accepted = match *intent {
                Intent::StartGame if !input.start => {
                    input.start = true;
                    true
                }
                Intent::Move(position) if input.movement.is_none() => {
                    input.movement = Some(position);
                    true
                }
                Intent::Combat(action) if input.combat.is_none() => {
                    input.combat = Some(action);
                    true
                }
                Intent::UseItem(_) | Intent::Buy(_) if input.item.is_none() => {
                    input.item = Some(*intent);
                    true
                }
                _ => false,
            };
            if !accepted {
                input.dropped += 1;
            }
        }
        input
    }

    pub fn is_empty(&self) -> bool {
        !self.start && self.movement.is_none() && self.combat.is_none() && self.item.is_none()
    }
}
