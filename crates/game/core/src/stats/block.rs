//! Health / shield / damage record and its clamped arithmetic.

use crate::state::ResourceMeter;

/// Amounts actually removed by [`StatBlock::apply_damage`].
///
/// UI layers use the split to phrase messages like "Shield -10, Health -5".
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DamageReport {
    /// Damage that was dealt before absorption.
    pub requested: u32,
    /// Portion soaked up by the shield.
    pub absorbed: u32,
    /// Portion subtracted from health.
    pub health_lost: u32,
}

impl DamageReport {
    /// Total amount removed from the block (shield + health).
    pub fn total(&self) -> u32 {
        self.absorbed + self.health_lost
    }
}

/// Numeric record of a single combatant.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StatBlock {
    pub health: ResourceMeter,
    pub shield: ResourceMeter,
    /// Base attack power (only meaningful for hostiles).
    pub damage: u32,
}

impl StatBlock {
    /// Creates a block at full health with an empty shield.
    ///
    /// `max_health` is raised to 1 if zero so a fresh combatant is never born defeated.
    pub fn new(max_health: u32, max_shield: u32, damage: u32) -> Self {
        Self {
            health: ResourceMeter::full(max_health.max(1)),
            shield: ResourceMeter::new(0, max_shield),
            damage,
        }
    }

    /// Overrides current values, clamping into `[0, max]`.
    pub fn with_current(mut self, health: u32, shield: u32) -> Self {
        self.health = ResourceMeter::new(health, self.health.maximum);
        self.shield = ResourceMeter::new(shield, self.shield.maximum);
        self
    }

    /// Shield absorbs first, the remainder is taken from health (clamped at 0).
    pub fn apply_damage(&mut self, amount: u32) -> DamageReport {
        let absorbed = self.shield.drain(amount);
        let health_lost = self.health.drain(amount - absorbed);
        DamageReport {
            requested: amount,
            absorbed,
            health_lost,
        }
    }

    /// Restores health up to the maximum. Returns the amount actually restored.
    pub fn heal(&mut self, amount: u32) -> u32 {
        self.health.restore(amount)
    }

    /// Adds shield up to the maximum. Returns the amount actually added.
    pub fn reinforce_shield(&mut self, amount: u32) -> u32 {
        self.shield.restore(amount)
    }

    /// Raises the shield ceiling. Returns the new maximum.
    pub fn increase_max_shield(&mut self, amount: u32) -> u32 {
        self.shield.maximum = self.shield.maximum.saturating_add(amount);
        self.shield.maximum
    }

    pub fn is_defeated(&self) -> bool {
        self.health.is_empty()
    }

    /// Health and shield both at zero: no offensive action may be taken.
    pub fn is_exhausted(&self) -> bool {
        self.health.is_empty() && self.shield.is_empty()
    }
}
