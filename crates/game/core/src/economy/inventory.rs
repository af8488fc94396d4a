//! Player-held collections: the item bag and the money purse.

use crate::state::ItemHandle;

/// Ordered multiset of held items (acquisition order, duplicates allowed).
#[derive(Clone, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Inventory {
    items: Vec<ItemHandle>,
}

impl Inventory {
    pub fn new(items: Vec<ItemHandle>) -> Self {
        Self { items }
    }

    pub fn empty() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<ItemHandle> {
        self.items.get(index).copied()
    }

    pub fn contains(&self, item: ItemHandle) -> bool {
        self.items.contains(&item)
    }

    pub fn iter(&self) -> impl Iterator<Item = ItemHandle> + '_ {
        self.items.iter().copied()
    }

    pub(crate) fn push(&mut self, item: ItemHandle) {
        self.items.push(item);
    }

    pub(crate) fn remove(&mut self, index: usize) -> Option<ItemHandle> {
        (index < self.items.len()).then(|| self.items.remove(index))
    }
}

/// Money balance of the player.
///
/// Only [`super::purchase`] debits and only [`super::award`] credits.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Purse {
    money: u32,
}

impl Purse {
    pub fn new(money: u32) -> Self {
        Self { money }
    }

    pub fn money(&self) -> u32 {
        self.money
    }

    pub fn can_afford(&self, price: u32) -> bool {
        self.money >= price
    }

    pub(crate) fn debit(&mut self, amount: u32) {
        debug_assert!(self.can_afford(amount));
        self.money -= amount;
    }

    pub(crate) fn credit(&mut self, amount: u32) {
        self.money = self.money.saturating_add(amount);
    }
}
