//! Combat errors.

use super::CombatPhase;
use crate::economy::EconomyError;
use crate::error::{ErrorSeverity, GameError};
use crate::state::EntityId;

/// Errors raised by the combat resolver.
///
/// None of them change the session: the phase, both stat blocks and the
/// inventory stay as they were.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum CombatError {
    /// Weapon attack requested without any weapon in the inventory.
    #[error("no weapon equipped")]
    NoWeaponEquipped,

    /// The action is not valid in the current phase.
    #[error("action not allowed during {phase}")]
    InvalidTransition { phase: CombatPhase },

    /// Player health and shield are both exhausted; only fleeing is possible.
    #[error("too exhausted to act, flee!")]
    PlayerExhausted,

    /// Encounter requested against a hostile that is not in the roster.
    #[error("hostile {0} is not in the world")]
    UnknownHostile(EntityId),

    /// An encounter is already running.
    #[error("already fighting {0}")]
    AlreadyEngaged(EntityId),

    /// One inventory item per player turn.
    #[error("an item was already used this turn")]
    ItemAlreadyUsed,

    #[error(transparent)]
    Economy(#[from] EconomyError),
}

impl GameError for CombatError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::NoWeaponEquipped | Self::PlayerExhausted | Self::ItemAlreadyUsed => {
                ErrorSeverity::Recoverable
            }
            Self::InvalidTransition { .. } | Self::UnknownHostile(_) => ErrorSeverity::Validation,
            Self::AlreadyEngaged(_) => ErrorSeverity::Internal,
            Self::Economy(err) => err.severity(),
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::NoWeaponEquipped => "NO_WEAPON_EQUIPPED",
            Self::InvalidTransition { .. } => "INVALID_TRANSITION",
            Self::PlayerExhausted => "PLAYER_EXHAUSTED",
            Self::UnknownHostile(_) => "UNKNOWN_HOSTILE",
            Self::AlreadyEngaged(_) => "ALREADY_ENGAGED",
            Self::ItemAlreadyUsed => "ITEM_ALREADY_USED",
            Self::Economy(err) => err.error_code(),
        }
    }
}
