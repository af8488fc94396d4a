//! [`game_core::TablesOracle`] over the hostile, spawn and shop tables.

use std::collections::HashMap;

use game_core::{ArchetypeId, CombatRules, HostileArchetype, ShopEntry, SpawnEntry, TablesOracle};

/// Rule tables held in memory; the spawn table can be swapped for a
/// scenario loaded from disk.
#[derive(Debug, Clone)]
pub struct TablesOracleImpl {
    rules: CombatRules,
    archetypes: HashMap<ArchetypeId, HostileArchetype>,
    spawns: Vec<SpawnEntry>,
    catalog: Vec<ShopEntry>,
}

impl TablesOracleImpl {
    pub fn new(
        rules: CombatRules,
        archetypes: impl IntoIterator<Item = HostileArchetype>,
        spawns: Vec<SpawnEntry>,
        catalog: Vec<ShopEntry>,
    ) -> Self {
        Self {
            rules,
            archetypes: archetypes.into_iter().map(|row| (row.id, row)).collect(),
            spawns,
            catalog,
        }
    }

    /// The built-in desert tables.
    pub fn from_content() -> Self {
        use game_content::tables;

        Self::new(
            tables::COMBAT_RULES,
            tables::ARCHETYPES,
            tables::SPAWN_TABLE.to_vec(),
            tables::SHOP_CATALOG.to_vec(),
        )
    }

    /// Replaces the spawn table used by the next world build.
    pub fn with_spawn_table(mut self, spawns: Vec<SpawnEntry>) -> Self {
        self.spawns = spawns;
        self
    }
}

impl TablesOracle for TablesOracleImpl {
    fn combat_rules(&self) -> CombatRules {
        self.rules
    }

    fn archetype(&self, id: ArchetypeId) -> Option<HostileArchetype> {
        self.archetypes.get(&id).copied()
    }

    fn spawn_table(&self) -> Vec<SpawnEntry> {
        self.spawns.clone()
    }

    fn shop_catalog(&self) -> Vec<ShopEntry> {
        self.catalog.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use game_content::tables::{ARMURE, HYENE, SERPENT};
    use game_core::{Direction, Position};

    #[test]
    fn content_tables_answer_lookups() {
        let oracle = TablesOracleImpl::from_content();

        assert_eq!(oracle.combat_rules(), CombatRules::new(10, 30, 50));
        assert_eq!(oracle.archetype(HYENE).map(|row| row.reward), Some(200));
        assert_eq!(oracle.price_of(ARMURE), Some(50));
        assert_eq!(oracle.spawn_table().len(), 3);
    }

    #[test]
    fn spawn_table_can_be_replaced() {
        let single = SpawnEntry::new(SERPENT, Position::new(10.0, 10.0), Direction::STILL);
        let oracle = TablesOracleImpl::from_content().with_spawn_table(vec![single]);

        assert_eq!(oracle.spawn_table(), vec![single]);
        assert!(oracle.archetype(HYENE).is_some());
    }
}
