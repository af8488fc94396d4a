//! Render-facing view of the state.
//!
//! The snapshot owns plain strings and numbers so any front end (terminal,
//! JSON, a sprite renderer) can draw it without touching the oracles.

use super::{EntityId, GameState, ItemHandle, Mode, Position, Tick};
use crate::combat::CombatPhase;
use crate::env::GameEnv;
use crate::stats::StatBlock;

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HostileView {
    pub id: EntityId,
    pub name: String,
    pub stats: StatBlock,
}

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ShopLine {
    pub item: ItemHandle,
    pub name: String,
    pub price: u32,
    pub affordable: bool,
}

/// Everything a renderer needs for one frame.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RenderSnapshot {
    pub mode: Mode,
    pub clock: Tick,
    pub player: StatBlock,
    pub position: Position,
    /// The hostile being fought, in combat only.
    pub hostile: Option<HostileView>,
    /// `Idle` outside combat.
    pub phase: CombatPhase,
    /// Item names in inventory order; indices match `UseItem` intents.
    pub inventory: Vec<String>,
    pub money: u32,
    pub shop_open: bool,
    /// Catalog lines, populated while the shop is open.
    pub shop: Vec<ShopLine>,
    pub message: Option<String>,
}

impl RenderSnapshot {
    /// Builds the view. Missing oracles or catalog entries degrade to
    /// placeholder names instead of failing.
    pub fn capture(state: &GameState, env: GameEnv<'_>) -> Self {
        let item_name = |item: ItemHandle| -> String {
            env.items()
                .ok()
                .and_then(|items| items.definition(item))
                .map_or_else(|| item.to_string(), |definition| definition.name.to_owned())
        };

        let hostile = state.combat.as_ref().and_then(|session| {
            let hostile = state.roster.get(session.hostile())?;
            let name = env
                .tables()
                .ok()
                .and_then(|tables| tables.archetype(hostile.archetype))
                .map_or_else(|| hostile.archetype.to_string(), |row| row.name.to_owned());
            Some(HostileView {
                id: hostile.id,
                name,
                stats: hostile.stats,
            })
        });

        let shop = match (state.shop_open, env.tables()) {
            (true, Ok(tables)) => tables
                .shop_catalog()
                .into_iter()
                .map(|entry| ShopLine {
                    item: entry.item,
                    name: item_name(entry.item),
                    price: entry.price,
                    affordable: state.player.purse.can_afford(entry.price),
                })
                .collect(),
            _ => Vec::new(),
        };

        Self {
            mode: state.mode,
            clock: state.clock,
            player: state.player.stats,
            position: state.player.position,
            hostile,
            phase: state
                .combat
                .as_ref()
                .map_or(CombatPhase::Idle, |session| session.phase()),
            inventory: state.player.inventory.iter().map(item_name).collect(),
            money: state.player.purse.money(),
            shop_open: state.shop_open,
            shop,
            message: state.message.as_ref().map(|message| message.text.clone()),
        }
    }
}
