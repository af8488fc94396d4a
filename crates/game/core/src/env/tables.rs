use crate::state::{ArchetypeId, Direction, ItemHandle, Position, Size};

/// Oracle providing game rules and fixed content tables.
///
/// One archetype row per hostile name is consulted by spawn, combat and
/// reward logic alike; the shop catalog and combat amounts live here too.
pub trait TablesOracle: Send + Sync {
    fn combat_rules(&self) -> CombatRules;
    fn archetype(&self, id: ArchetypeId) -> Option<HostileArchetype>;
    fn spawn_table(&self) -> Vec<SpawnEntry>;
    fn shop_catalog(&self) -> Vec<ShopEntry>;

    /// Price of an item if the shop sells it.
    fn price_of(&self, item: ItemHandle) -> Option<u32> {
        self.shop_catalog()
            .into_iter()
            .find(|entry| entry.item == item)
            .map(|entry| entry.price)
    }
}

/// Fixed amounts for the player's combat actions.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CombatRules {
    /// Damage of the unarmed attack.
    pub basic_attack: u32,
    /// Shield restored by the shield-potion slot.
    pub shield_potion: u32,
    /// Health restored by the heal-potion slot.
    pub heal_potion: u32,
}

impl CombatRules {
    pub const fn new(basic_attack: u32, shield_potion: u32, heal_potion: u32) -> Self {
        Self {
            basic_attack,
            shield_potion,
            heal_potion,
        }
    }
}

/// One row of the hostile table.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct HostileArchetype {
    pub id: ArchetypeId,
    pub name: &'static str,
    pub max_health: u32,
    /// Fixed damage of the hostile's single attack.
    pub damage: u32,
    /// Pixels travelled per tick.
    pub speed: f32,
    /// Money credited to the player on victory.
    pub reward: u32,
    /// Sprite-derived collision box size.
    pub size: Size,
}

/// Where and how a hostile enters the world at init.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SpawnEntry {
    pub archetype: ArchetypeId,
    pub position: Position,
    pub direction: Direction,
}

impl SpawnEntry {
    pub const fn new(archetype: ArchetypeId, position: Position, direction: Direction) -> Self {
        Self {
            archetype,
            position,
            direction,
        }
    }
}

/// Immutable `{item, price}` pair of the shop catalog.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ShopEntry {
    pub item: ItemHandle,
    pub price: u32,
}

impl ShopEntry {
    pub const fn new(item: ItemHandle, price: u32) -> Self {
        Self { item, price }
    }
}
