use arrayvec::ArrayVec;

use crate::config::GameConfig;
use crate::env::{SpawnEntry, TablesOracle};
use crate::state::{
    ArchetypeId, BoundingBox, Direction, EntityId, InitializationError, Position, Size,
};
use crate::stats::StatBlock;

/// A roaming non-player combatant.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Hostile {
    pub id: EntityId,
    pub archetype: ArchetypeId,
    pub stats: StatBlock,
    pub position: Position,
    pub direction: Direction,
    /// Pixels travelled per tick.
    pub speed: f32,
    pub size: Size,
}

impl Hostile {
    pub fn bounding_box(&self) -> BoundingBox {
        BoundingBox::new(self.position, self.size)
    }

    /// Advances one tick and bounces off the edges of `bounds`.
    ///
    /// The hostile's box is kept inside `[0, bounds - size]`: when a step
    /// leaves that range the offending direction component flips sign and the
    /// coordinate is clamped back to the edge.
    fn advance(&mut self, bounds: Size) {
        let max_x = (bounds.width - self.size.width).max(0.0);
        let max_y = (bounds.height - self.size.height).max(0.0);

        self.position.x += self.direction.dx * self.speed;
        self.position.y += self.direction.dy * self.speed;

        if self.position.x < 0.0 || self.position.x > max_x {
            self.direction.dx = -self.direction.dx;
            self.position.x = self.position.x.clamp(0.0, max_x);
        }
        if self.position.y < 0.0 || self.position.y > max_y {
            self.direction.dy = -self.direction.dy;
            self.position.y = self.position.y.clamp(0.0, max_y);
        }
    }
}

/// The set of hostiles currently in the world, kept in spawn order.
///
/// Spawn order doubles as the encounter tie-break order.
#[derive(Clone, Debug, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Roster {
    hostiles: ArrayVec<Hostile, { GameConfig::MAX_HOSTILES }>,
}

impl Roster {
    pub fn empty() -> Self {
        Self::default()
    }

    /// Builds the roster from the spawn table, numbering hostiles from
    /// [`EntityId::FIRST_HOSTILE`] in table order.
    pub fn spawn(
        table: &[SpawnEntry],
        tables: &(impl TablesOracle + ?Sized),
    ) -> Result<Self, InitializationError> {
        if table.len() > GameConfig::MAX_HOSTILES {
            return Err(InitializationError::RosterFull {
                max: GameConfig::MAX_HOSTILES,
                requested: table.len(),
            });
        }

        let mut hostiles = ArrayVec::new();
        for (offset, entry) in (0u32..).zip(table) {
            let archetype = tables
                .archetype(entry.archetype)
                .ok_or(InitializationError::UnknownArchetype(entry.archetype))?;

            hostiles.push(Hostile {
                id: EntityId(EntityId::FIRST_HOSTILE.0 + offset),
                archetype: archetype.id,
                stats: StatBlock::new(archetype.max_health, 0, archetype.damage),
                position: entry.position,
                direction: entry.direction,
                speed: archetype.speed,
                size: archetype.size,
            });
        }

        Ok(Self { hostiles })
    }

    /// Moves every hostile except the `engaged` one.
    pub fn tick(&mut self, bounds: Size, engaged: Option<EntityId>) {
        self.hostiles
            .iter_mut()
            .filter(|hostile| Some(hostile.id) != engaged)
            .for_each(|hostile| hostile.advance(bounds));
    }

    /// Removes a hostile by identity. Removing an absent id is a no-op.
    pub fn remove(&mut self, id: EntityId) -> Option<Hostile> {
        let index = self.hostiles.iter().position(|hostile| hostile.id == id)?;
        Some(self.hostiles.remove(index))
    }

    pub fn get(&self, id: EntityId) -> Option<&Hostile> {
        self.hostiles.iter().find(|hostile| hostile.id == id)
    }

    pub fn get_mut(&mut self, id: EntityId) -> Option<&mut Hostile> {
        self.hostiles.iter_mut().find(|hostile| hostile.id == id)
    }

    pub fn contains(&self, id: EntityId) -> bool {
        self.get(id).is_some()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Hostile> {
        self.hostiles.iter()
    }

    pub fn len(&self) -> usize {
        self.hostiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.hostiles.is_empty()
    }
}
