use super::{EconomyError, Inventory};
use crate::env::{ConsumableEffect, ItemKind, ItemOracle};
use crate::state::ItemHandle;
use crate::stats::StatBlock;

/// What a consumed item did to its target.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AppliedEffect {
    /// Health actually restored.
    Healed(u32),
    /// Shield points actually added.
    ShieldReinforced(u32),
    /// New shield ceiling after an armor piece.
    MaxShieldRaised(u32),
}

/// Result of [`consume`], carrying enough context for a status line.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct EffectOutcome {
    pub item: ItemHandle,
    pub name: &'static str,
    pub effect: AppliedEffect,
    /// Target stats after the effect.
    pub stats: StatBlock,
}

impl EffectOutcome {
    pub fn message(&self) -> String {
        match self.effect {
            AppliedEffect::Healed(amount) => format!(
                "{} used: +{} health ({})",
                self.name, amount, self.stats.health
            ),
            AppliedEffect::ShieldReinforced(amount) => format!(
                "{} used: +{} shield ({})",
                self.name, amount, self.stats.shield
            ),
            AppliedEffect::MaxShieldRaised(maximum) => {
                format!("{} equipped: max shield is now {}", self.name, maximum)
            }
        }
    }
}

/// Uses the item at `index`, applying its effect to `target` exactly once.
///
/// Weapons and handles without a catalog definition are rejected with
/// [`EconomyError::NotUsable`] and stay in the bag.
pub fn consume(
    index: usize,
    bag: &mut Inventory,
    target: &mut StatBlock,
    items: &(impl ItemOracle + ?Sized),
) -> Result<EffectOutcome, EconomyError> {
    let item = bag.get(index).ok_or(EconomyError::InvalidIndex {
        index,
        len: bag.len(),
    })?;
    let definition = items
        .definition(item)
        .ok_or(EconomyError::NotUsable { item, name: None })?;

    let effect = match definition.kind {
        ItemKind::Weapon(_) => {
            return Err(EconomyError::NotUsable {
                item,
                name: Some(definition.name),
            });
        }
        ItemKind::Consumable(ConsumableEffect::Heal(amount)) => {
            AppliedEffect::Healed(target.heal(amount))
        }
        ItemKind::Consumable(ConsumableEffect::ReinforceShield(amount)) => {
            AppliedEffect::ShieldReinforced(target.reinforce_shield(amount))
        }
        ItemKind::Armor(armor) => {
            AppliedEffect::MaxShieldRaised(target.increase_max_shield(armor.max_shield_bonus))
        }
    };
    bag.remove(index);

    Ok(EffectOutcome {
        item,
        name: definition.name,
        effect,
        stats: *target,
    })
}
