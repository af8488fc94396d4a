use crate::state::ItemHandle;

/// Read-only item catalog.
///
/// This is the single effect table of the game: both shop purchases and
/// inventory consumption consult it, so item semantics are defined once.
pub trait ItemOracle: Send + Sync {
    fn definition(&self, handle: ItemHandle) -> Option<ItemDefinition>;

    /// Looks an item up by its display name (exact match).
    fn find_by_name(&self, name: &str) -> Option<ItemDefinition>;

    /// Returns all item definitions available in this oracle.
    fn all_definitions(&self) -> Vec<ItemDefinition>;
}

/// Item definition with common fields and type-specific data.
///
/// # Design: Base + Kind Pattern
///
/// - Base struct holds common fields (handle, display name)
/// - `kind` enum holds type-specific data (weapon rank, consumable effect, armor bonus)
///
/// Capability checks match on `kind` exhaustively instead of comparing names.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ItemDefinition {
    pub handle: ItemHandle,
    pub name: &'static str,
    pub kind: ItemKind,
}

impl ItemDefinition {
    pub const fn new(handle: ItemHandle, name: &'static str, kind: ItemKind) -> Self {
        Self { handle, name, kind }
    }

    pub const fn weapon(&self) -> Option<WeaponData> {
        match self.kind {
            ItemKind::Weapon(data) => Some(data),
            _ => None,
        }
    }
}

/// Item type with type-specific data.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ItemKind {
    /// Single-use item applied to the owner's stat block.
    Consumable(ConsumableEffect),

    /// Weapon tier; owning one enables the weapon attack.
    Weapon(WeaponData),

    /// Armor piece; using it raises the shield ceiling permanently.
    Armor(ArmorData),
}

/// Consumable effects.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ConsumableEffect {
    /// Restore health.
    Heal(u32),

    /// Add shield points, up to the current shield ceiling.
    ReinforceShield(u32),
}

/// Weapon-specific data.
///
/// When several weapons are owned the highest `rank` is used.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WeaponData {
    pub rank: u8,
    pub damage: u32,
}

impl WeaponData {
    pub const fn new(rank: u8, damage: u32) -> Self {
        Self { rank, damage }
    }
}

/// Armor-specific data.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ArmorData {
    pub max_shield_bonus: u32,
}

impl ArmorData {
    pub const fn new(max_shield_bonus: u32) -> Self {
        Self { max_shield_bonus }
    }
}
