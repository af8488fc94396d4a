//! Spatial encounter trigger between the player and roaming hostiles.

use crate::state::{BoundingBox, EntityId};
use crate::world::Roster;

/// First hostile (in roster order) whose box overlaps `player_box`.
///
/// When several hostiles overlap at once the earliest spawned one wins.
pub fn check_encounter(player_box: &BoundingBox, roster: &Roster) -> Option<EntityId> {
    roster
        .iter()
        .find(|hostile| hostile.bounding_box().intersects(player_box))
        .map(|hostile| hostile.id)
}

/// Encounter gate with flee grace.
///
/// After a flee, the fled hostile cannot re-engage until the player's box has
/// stopped overlapping it at least once.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EncounterTrigger {
    suppressed: Option<EntityId>,
}

impl EncounterTrigger {
    pub fn suppressed(&self) -> Option<EntityId> {
        self.suppressed
    }

    pub fn suppress(&mut self, hostile: EntityId) {
        self.suppressed = Some(hostile);
    }

    pub fn reset(&mut self) {
        self.suppressed = None;
    }

    /// Returns the hostile to engage, if any. Always `None` while `in_combat`.
    pub fn check(
        &mut self,
        player_box: &BoundingBox,
        roster: &Roster,
        in_combat: bool,
    ) -> Option<EntityId> {
        if in_combat {
            return None;
        }

        if let Some(id) = self.suppressed {
            let still_touching = roster
                .get(id)
                .is_some_and(|hostile| hostile.bounding_box().intersects(player_box));
            if !still_touching {
                self.suppressed = None;
            }
        }

        roster
            .iter()
            .filter(|hostile| Some(hostile.id) != self.suppressed)
            .find(|hostile| hostile.bounding_box().intersects(player_box))
            .map(|hostile| hostile.id)
    }
}
