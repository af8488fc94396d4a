//! Fixed content of the desert map.
//!
//! One row per hostile and one row per item: spawn, combat, reward, shop and
//! inventory logic all read these tables through the oracles.

use game_core::{
    ArchetypeId, ArmorData, CombatRules, ConsumableEffect, Direction, HostileArchetype,
    ItemDefinition, ItemHandle, ItemKind, Position, ShopEntry, Size, SpawnEntry, WeaponData,
};

// ===== items =====
pub const PLANTE_CURATIVE: ItemHandle = ItemHandle(1);
pub const POTION_MAGIQUE: ItemHandle = ItemHandle(2);
pub const EPEE: ItemHandle = ItemHandle(3);
pub const EPEE_AMELIOREE: ItemHandle = ItemHandle(4);
pub const ARMURE: ItemHandle = ItemHandle(5);
pub const BOTTE: ItemHandle = ItemHandle(6);
pub const CHAPEAU: ItemHandle = ItemHandle(7);

pub const ITEMS: [ItemDefinition; 7] = [
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
    ItemDefinition::new(BOTTE, "Botte", ItemKind::Armor(ArmorData::new(20))),
    ItemDefinition::new(CHAPEAU, "Chapeau", ItemKind::Armor(ArmorData::new(10))),
];

pub const SHOP_CATALOG: [ShopEntry; 7] = [
    ShopEntry::new(PLANTE_CURATIVE, 50),
    ShopEntry::new(POTION_MAGIQUE, 25),
    ShopEntry::new(EPEE, 50),
    ShopEntry::new(EPEE_AMELIOREE, 150),
    ShopEntry::new(ARMURE, 50),
    ShopEntry::new(BOTTE, 50),
    ShopEntry::new(CHAPEAU, 50),
];

// ===== hostiles =====
pub const SERPENT: ArchetypeId = ArchetypeId(1);
pub const SCORPION: ArchetypeId = ArchetypeId(2);
pub const HYENE: ArchetypeId = ArchetypeId(3);

pub const ARCHETYPES: [HostileArchetype; 3] = [
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
    HostileArchetype {
        id: HYENE,
        name: "Hyène",
        max_health: 400,
        damage: 20,
        speed: 1.0,
        reward: 200,
        size: Size::new(128.0, 96.0),
    },
];

pub const SPAWN_TABLE: [SpawnEntry; 3] = [
    SpawnEntry::new(SERPENT, Position::new(1300.0, 75.0), Direction::new(1.0, 0.0)),
    SpawnEntry::new(SCORPION, Position::new(220.0, 350.0), Direction::new(0.0, 1.0)),
    SpawnEntry::new(HYENE, Position::new(350.0, 650.0), Direction::new(-1.0, 1.0)),
];

// ===== combat =====
/// Punch 10, shield-potion slot 30, heal-potion slot 50.
pub const COMBAT_RULES: CombatRules = CombatRules::new(10, 30, 50);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_shop_entry_has_a_definition() {
        for entry in SHOP_CATALOG {
            assert!(
                ITEMS.iter().any(|item| item.handle == entry.item),
                "{} is sold but undefined",
                entry.item
            );
        }
    }

    #[test]
    fn every_spawn_row_has_an_archetype() {
        for entry in SPAWN_TABLE {
            assert!(ARCHETYPES.iter().any(|row| row.id == entry.archetype));
        }
    }

    #[test]
    fn item_names_are_unique() {
        for (index, item) in ITEMS.iter().enumerate() {
            assert!(ITEMS[index + 1..].iter().all(|other| other.name != item.name));
        }
    }
}
