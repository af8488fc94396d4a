//! Topic-based event bus for runtime events.
//!
//! Every [`game_core::GameEvent`] produced by a tick is published to the
//! topic it belongs to, and consumers subscribe only to the topics they need.

mod bus;

pub use bus::{Event, EventBus, Topic};
