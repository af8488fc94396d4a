//! Topic-based event bus implementation.

use std::collections::HashMap;

use game_core::{GameEvent, Tick};
use serde::{Deserialize, Serialize};
use tokio::sync::broadcast;

/// Topics for event routing
#[derive(Debug, Clone, Copy, Hash, Eq, PartialEq, Serialize, Deserialize)]
pub enum Topic {
    /// Mode changes and rejected intents
    Session,
    /// Roster and shop zone changes
    World,
    /// Encounter start, turns and resolution
    Combat,
    /// Purchases and item use
    Economy,
}

impl Topic {
    pub const ALL: [Topic; 4] = [Topic::Session, Topic::World, Topic::Combat, Topic::Economy];

    pub fn of(event: &GameEvent) -> Self {
        match event {
            GameEvent::ModeChanged { .. } | GameEvent::IntentRejected { .. } => Topic::Session,
            GameEvent::HostileRemoved { .. } | GameEvent::ShopOpened | GameEvent::ShopClosed => {
                Topic::World
            }
            GameEvent::EncounterStarted { .. }
            | GameEvent::PlayerActed { .. }
            | GameEvent::HostileAttacked(_)
            | GameEvent::EncounterResolved { .. } => Topic::Combat,
            GameEvent::ItemPurchased(_) | GameEvent::ItemConsumed(_) => Topic::Economy,
        }
    }
}

/// A game event stamped with the clock of the tick that produced it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Event {
    pub clock: Tick,
    pub payload: GameEvent,
}

impl Event {
    pub fn new(clock: Tick, payload: GameEvent) -> Self {
        Self { clock, payload }
    }

    pub fn topic(&self) -> Topic {
        Topic::of(&self.payload)
    }
}

/// Topic-based event bus
///
/// Allows consumers to subscribe to specific topics and only receive
/// events they care about. Channels exist for every topic from construction
/// on, so subscribing never fails.
#[derive(Clone)]
pub struct EventBus {
    session: broadcast::Sender<Event>,
    world: broadcast::Sender<Event>,
    combat: broadcast::Sender<Event>,
    economy: broadcast::Sender<Event>,
}

impl EventBus {
    /// Creates a new event bus with default capacity for each topic
    pub fn new() -> Self {
        Self::with_capacity(100)
    }

    /// Creates a new event bus with specified capacity per topic
    pub fn with_capacity(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            session: broadcast::channel(capacity).0,
            world: broadcast::channel(capacity).0,
            combat: broadcast::channel(capacity).0,
            economy: broadcast::channel(capacity).0,
        }
    }

    fn sender(&self, topic: Topic) -> &broadcast::Sender<Event> {
        match topic {
            Topic::Session => &self.session,
            Topic::World => &self.world,
            Topic::Combat => &self.combat,
            Topic::Economy => &self.economy,
        }
    }

    /// Publish an event to its corresponding topic
    pub fn publish(&self, event: Event) {
        let topic = event.topic();
        if self.sender(topic).send(event).is_err() {
            // No subscribers for this topic - this is normal, not an error
            tracing::trace!("No subscribers for topic {:?}", topic);
        }
    }

    /// Subscribe to a specific topic
    ///
    /// Returns a receiver that will only receive events for that topic.
    pub fn subscribe(&self, topic: Topic) -> broadcast::Receiver<Event> {
        self.sender(topic).subscribe()
    }

    /// Subscribe to multiple topics
    pub fn subscribe_multiple(
        &self,
        topics: &[Topic],
    ) -> HashMap<Topic, broadcast::Receiver<Event>> {
        topics
            .iter()
            .map(|&topic| (topic, self.subscribe(topic)))
            .collect()
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use game_core::{EntityId, Mode};

    #[tokio::test]
    async fn events_reach_only_their_topic() {
        let bus = EventBus::with_capacity(8);
        let mut session = bus.subscribe(Topic::Session);
        let mut combat = bus.subscribe(Topic::Combat);

        bus.publish(Event::new(
            Tick(16),
            GameEvent::ModeChanged {
                from: Mode::Menu,
                to: Mode::World,
            },
        ));

        let event = session.recv().await.unwrap();
        assert_eq!(event.topic(), Topic::Session);
        assert_eq!(event.clock, Tick(16));
        assert!(combat.try_recv().is_err());
    }

    #[test]
    fn publishing_without_subscribers_is_fine() {
        let bus = EventBus::new();
        bus.publish(Event::new(
            Tick(0),
            GameEvent::HostileRemoved {
                hostile: EntityId(1),
            },
        ));
    }

    #[test]
    fn subscribe_multiple_covers_requested_topics() {
        let bus = EventBus::new();
        let receivers = bus.subscribe_multiple(&Topic::ALL);
        assert_eq!(receivers.len(), Topic::ALL.len());
    }
}
