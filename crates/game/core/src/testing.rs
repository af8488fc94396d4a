//! In-crate oracle fixtures mirroring the shipped content tables.

use crate::env::{
    ArmorData, CombatRules, ConsumableEffect, GameEnv, HostileArchetype, ItemDefinition, ItemKind,
    ItemOracle, ShopEntry, SpawnEntry, TablesOracle, WeaponData,
};
use crate::state::{ArchetypeId, Direction, ItemHandle, Position, Size};

pub const PLANTE_CURATIVE: ItemHandle = ItemHandle(1);
pub const POTION_MAGIQUE: ItemHandle = ItemHandle(2);
pub const EPEE: ItemHandle = ItemHandle(3);
pub const EPEE_AMELIOREE: ItemHandle = ItemHandle(4);
pub const ARMURE: ItemHandle = ItemHandle(5);

pub const SERPENT: ArchetypeId = ArchetypeId(1);
pub const SCORPION: ArchetypeId = ArchetypeId(2);

const ITEMS: [ItemDefinition; 5] = [
    ItemDefinition::new(
        PLANTE_CURATIVE,
        "Plante curative",
        ItemKind::Consumable(ConsumableEffect::Heal(50)),
    ),
    ItemDefinition::new(
        POTION_MAGIQUE,
        "Potion magique",
        ItemKind::Consumable(ConsumableEffect::ReinforceShield(10)),
    ),
    ItemDefinition::new(EPEE, "Épée", ItemKind::Weapon(WeaponData::new(1, 25))),
    ItemDefinition::new(
        EPEE_AMELIOREE,
        "Épée améliorée",
        ItemKind::Weapon(WeaponData::new(2, 50)),
    ),
    ItemDefinition::new(ARMURE, "Armure", ItemKind::Armor(ArmorData::new(30))),
];

const ARCHETYPES: [HostileArchetype; 2] = [
    HostileArchetype {
        id: SERPENT,
        name: "Serpent",
        max_health: 200,
        damage: 15,
        speed: 1.5,
        reward: 100,
        size: Size::new(72.0, 72.0),
    },
    HostileArchetype {
        id: SCORPION,
        name: "Scorpion",
        max_health: 100,
        damage: 10,
        speed: 2.0,
        reward: 50,
        size: Size::new(96.0, 96.0),
    },
];

pub struct TestItems;

impl ItemOracle for TestItems {
    fn definition(&self, handle: ItemHandle) -> Option<ItemDefinition> {
        ITEMS.iter().copied().find(|item| item.handle == handle)
    }

    fn find_by_name(&self, name: &str) -> Option<ItemDefinition> {
        ITEMS.iter().copied().find(|item| item.name == name)
    }

    fn all_definitions(&self) -> Vec<ItemDefinition> {
        ITEMS.to_vec()
    }
}

pub struct TestTables;

impl TablesOracle for TestTables {
    fn combat_rules(&self) -> CombatRules {
        CombatRules::new(10, 30, 50)
    }

    fn archetype(&self, id: ArchetypeId) -> Option<HostileArchetype> {
        ARCHETYPES.iter().copied().find(|row| row.id == id)
    }

    fn spawn_table(&self) -> Vec<SpawnEntry> {
        vec![
            SpawnEntry::new(SERPENT, Position::new(1300.0, 75.0), Direction::new(1.0, 0.0)),
            SpawnEntry::new(SCORPION, Position::new(220.0, 350.0), Direction::STILL),
        ]
    }

    fn shop_catalog(&self) -> Vec<ShopEntry> {
        vec![
            ShopEntry::new(PLANTE_CURATIVE, 50),
            ShopEntry::new(POTION_MAGIQUE, 25),
            ShopEntry::new(EPEE, 50),
            ShopEntry::new(EPEE_AMELIOREE, 150),
            ShopEntry::new(ARMURE, 50),
        ]
    }
}

pub fn env() -> GameEnv<'static> {
    GameEnv::with_all(&TestItems, &TestTables)
}
