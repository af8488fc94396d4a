//! Minimal [`game_core::ItemOracle`] backed by an in-memory map.
use game_core::{ItemDefinition, ItemHandle, ItemOracle};
use std::collections::HashMap;

/// ItemOracle implementation with static item definitions
#[derive(Debug, Clone)]
pub struct ItemOracleImpl {
    definitions: HashMap<ItemHandle, ItemDefinition>,
}

impl ItemOracleImpl {
    pub fn new() -> Self {
        Self {
            definitions: HashMap::new(),
        }
    }

    /// Every item of the built-in content.
    pub fn from_content() -> Self {
        let mut oracle = Self::new();
        for definition in game_content::tables::ITEMS {
            oracle.add_definition(definition);
        }
        oracle
    }

    /// Add an item definition
    pub fn add_definition(&mut self, def: ItemDefinition) {
        self.definitions.insert(def.handle, def);
    }
}

impl Default for ItemOracleImpl {
    fn default() -> Self {
        Self::new()
    }
}

impl ItemOracle for ItemOracleImpl {
    fn definition(&self, handle: ItemHandle) -> Option<ItemDefinition> {
        self.definitions.get(&handle).copied()
    }

    fn find_by_name(&self, name: &str) -> Option<ItemDefinition> {
        self.definitions
            .values()
            .find(|def| def.name.eq_ignore_ascii_case(name))
            .copied()
    }

    fn all_definitions(&self) -> Vec<ItemDefinition> {
        let mut definitions: Vec<_> = self.definitions.values().copied().collect();
        definitions.sort_by_key(|def| def.handle);
        definitions
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use game_content::tables::{EPEE, PLANTE_CURATIVE};

    #[test]
    fn content_items_are_listed_in_handle_order() {
        let oracle = ItemOracleImpl::from_content();
        let handles: Vec<_> = oracle.all_definitions().iter().map(|def| def.handle).collect();

        assert_eq!(handles.len(), game_content::tables::ITEMS.len());
        assert!(handles.windows(2).all(|pair| pair[0] < pair[1]));
    }

    #[test]
    fn lookup_by_name_ignores_ascii_case() {
        let oracle = ItemOracleImpl::from_content();
        assert_eq!(
            oracle.find_by_name("plante CURATIVE").map(|def| def.handle),
            Some(PLANTE_CURATIVE)
        );
        assert_eq!(oracle.find_by_name("Épée").map(|def| def.handle), Some(EPEE));
        assert!(oracle.find_by_name("Bouclier").is_none());
    }
}
