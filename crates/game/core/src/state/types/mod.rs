pub mod common;

pub use common::{
    ArchetypeId, BoundingBox, Direction, EntityId, ItemHandle, Position, ResourceMeter, Size, Tick,
};
