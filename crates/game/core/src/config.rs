use crate::state::{BoundingBox, Position, Size};

/// Game configuration constants and tunable parameters.
///
/// `Default` is the desert map: a 1920×1080 world, a 64×64
/// player box, the merchant stall in the top-left corner and a two-second
/// lifetime for status messages.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct GameConfig {
    /// Playable area; hostiles bounce off its edges.
    pub map_size: Size,
    /// Collision box of the player sprite.
    pub player_size: Size,
    /// Where the player stands when a new game starts.
    pub player_spawn: Position,
    /// Merchant area: the shop is open while the player's box overlaps it.
    pub shop_zone: BoundingBox,
    pub starting_money: u32,
    pub player_max_health: u32,
    pub player_max_shield: u32,
    /// Clock advance per engine step.
    pub tick_ms: u64,
    /// How long a transient message stays visible.
    pub message_ttl_ms: u64,
}

impl GameConfig {
    // ===== compile-time constants used as type parameters =====
    /// Maximum number of hostiles the roster can hold.
    pub const MAX_HOSTILES: usize = 16;

    // ===== runtime-tunable defaults =====
    pub const DEFAULT_MAP_SIZE: Size = Size::new(1920.0, 1080.0);
    pub const DEFAULT_PLAYER_SIZE: Size = Size::new(64.0, 64.0);
    pub const DEFAULT_PLAYER_SPAWN: Position = Position::new(1240.0, 600.0);
    pub const DEFAULT_SHOP_ZONE: BoundingBox =
        BoundingBox::new(Position::new(193.0, 9.0), Size::new(120.0, 120.0));
    pub const DEFAULT_STARTING_MONEY: u32 = 10_000;
    pub const DEFAULT_PLAYER_MAX_HEALTH: u32 = 100;
    pub const DEFAULT_PLAYER_MAX_SHIELD: u32 = 100;
    pub const DEFAULT_TICK_MS: u64 = 16;
    pub const DEFAULT_MESSAGE_TTL_MS: u64 = 2_000;

    pub fn new() -> Self {
        Self {
            map_size: Self::DEFAULT_MAP_SIZE,
            player_size: Self::DEFAULT_PLAYER_SIZE,
            player_spawn: Self::DEFAULT_PLAYER_SPAWN,
            shop_zone: Self::DEFAULT_SHOP_ZONE,
            starting_money: Self::DEFAULT_STARTING_MONEY,
            player_max_health: Self::DEFAULT_PLAYER_MAX_HEALTH,
            player_max_shield: Self::DEFAULT_PLAYER_MAX_SHIELD,
            tick_ms: Self::DEFAULT_TICK_MS,
            message_ttl_ms: Self::DEFAULT_MESSAGE_TTL_MS,
        }
    }

    pub fn with_starting_money(mut self, starting_money: u32) -> Self {
        self.starting_money = starting_money;
        self
    }

    /// Player collision box at `position`.
    pub fn player_box(&self, position: Position) -> BoundingBox {
        BoundingBox::new(position, self.player_size)
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new()
    }
}
