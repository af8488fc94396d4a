use std::fmt;

/// Player commands accepted during [`super::CombatPhase::PlayerTurn`].
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
    strum::EnumIter,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum PlayerAction {
    /// Unarmed strike with the fixed basic damage.
    BasicAttack,
    /// Strike with the best weapon held; requires a weapon in the inventory.
    WeaponAttack,
    /// Built-in shield potion slot.
    UseShieldPotionSlot,
    /// Built-in heal potion slot.
    UseHealPotionSlot,
    /// Leave the encounter immediately.
    Flee,
}

/// How an encounter ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::AsRefStr)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum Resolution {
    Victory,
    Defeat,
    Fled,
}

/// Combat state machine.
///
/// ```text
/// Idle --start--> PlayerTurn --action--> HostileTurn --strike--> PlayerTurn ...
///                     |                      |
///                     +-- Flee / Victory ----+-- Flee / Defeat --> Resolved(_)
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CombatPhase {
    #[default]
    Idle,
    PlayerTurn,
    HostileTurn,
    Resolved(Resolution),
}

impl CombatPhase {
    pub fn resolution(self) -> Option<Resolution> {
        match self {
            Self::Resolved(resolution) => Some(resolution),
            _ => None,
        }
    }

    pub fn is_resolved(self) -> bool {
        matches!(self, Self::Resolved(_))
    }
}

impl fmt::Display for CombatPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Idle => f.write_str("idle"),
            Self::PlayerTurn => f.write_str("player turn"),
            Self::HostileTurn => f.write_str("hostile turn"),
            Self::Resolved(resolution) => write!(f, "resolved ({resolution})"),
        }
    }
}
