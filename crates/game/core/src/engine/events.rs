use super::IntentError;
use crate::action::IntentKind;
use crate::combat::{ActionReport, HostileStrike, Resolution};
use crate::economy::{EffectOutcome, Receipt};
use crate::state::{ArchetypeId, EntityId, Mode};

/// Facts emitted by one engine step, in the order they happened.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum GameEvent {
    ModeChanged {
        from: Mode,
        to: Mode,
    },
    EncounterStarted {
        hostile: EntityId,
        archetype: ArchetypeId,
    },
    PlayerActed {
        hostile: EntityId,
        report: ActionReport,
    },
    HostileAttacked(HostileStrike),
    EncounterResolved {
        hostile: EntityId,
        resolution: Resolution,
        /// Money credited; zero unless the player won.
        reward: u32,
    },
    HostileRemoved {
        hostile: EntityId,
    },
    ShopOpened,
    ShopClosed,
    ItemPurchased(Receipt),
    ItemConsumed(EffectOutcome),
    IntentRejected {
        intent: IntentKind,
        error: IntentError,
    },
}

impl GameEvent {
    pub fn is_rejection(&self) -> bool {
        matches!(self, Self::IntentRejected { .. })
    }
}
