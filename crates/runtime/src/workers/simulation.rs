//! Simulation worker that owns the authoritative [`game_core::GameState`].
//!
//! Receives commands from [`crate::RuntimeHandle`], steps the game via
//! [`game_core::GameEngine`], and publishes events to the EventBus.

use tokio::sync::{mpsc, oneshot};

use game_core::{GameEngine, GameEvent, GameState, Intent, Position, RenderSnapshot, Tick};
use tracing::{debug, info, warn};

use crate::api::{Result, StepReport};
use crate::events::{Event, EventBus};
use crate::oracle::OracleManager;

/// Commands that can be sent to the simulation worker
pub enum Command {
    /// Run one engine step with this frame's intents.
    Tick {
        intents: Vec<Intent>,
        reply: oneshot::Sender<Result<StepReport>>,
    },
    /// Apply a position report from the movement layer.
    SetPosition {
        position: Position,
        reply: oneshot::Sender<Result<Vec<GameEvent>>>,
    },
    /// Render state without stepping.
    Snapshot {
        reply: oneshot::Sender<RenderSnapshot>,
    },
    /// Query the current game state (read-only).
    QueryState { reply: oneshot::Sender<GameState> },
}

/// Background task that processes gameplay commands.
///
/// The worker does not own providers or handle I/O; the runtime decides
/// when to tick and with which intents.
pub struct SimulationWorker {
    state: GameState,
    oracles: OracleManager,
    command_rx: mpsc::Receiver<Command>,
    event_bus: EventBus,
}

impl SimulationWorker {
    pub fn new(
        state: GameState,
        oracles: OracleManager,
        command_rx: mpsc::Receiver<Command>,
        event_bus: EventBus,
    ) -> Self {
        info!(
            "SimulationWorker initialized in {} mode with {} hostiles",
            state.mode,
            state.roster.len()
        );

        Self {
            state,
            oracles,
            command_rx,
            event_bus,
        }
    }

    /// Main worker loop.
    pub async fn run(mut self) {
        loop {
            tokio::select! {
                Some(cmd) = self.command_rx.recv() => {
                    self.handle_command(cmd);
                }
                else => break,
            }
        }
        debug!("SimulationWorker stopped at clock {}", self.state.clock.0);
    }

    fn handle_command(&mut self, cmd: Command) {
        match cmd {
            Command::Tick { intents, reply } => {
                let result = self.handle_tick(&intents);
                if reply.send(result).is_err() {
                    debug!("Tick reply channel closed (caller dropped)");
                }
            }
            Command::SetPosition { position, reply } => {
                let result = self.handle_position(position);
                if reply.send(result).is_err() {
                    debug!("SetPosition reply channel closed (caller dropped)");
                }
            }
            Command::Snapshot { reply } => {
                let snapshot = RenderSnapshot::capture(&self.state, self.oracles.as_game_env());
                if reply.send(snapshot).is_err() {
                    debug!("Snapshot reply channel closed (caller dropped)");
                }
            }
            Command::QueryState { reply } => {
                if reply.send(self.state.clone()).is_err() {
                    debug!("QueryState reply channel closed (caller dropped)");
                }
            }
        }
    }

    fn handle_tick(&mut self, intents: &[Intent]) -> Result<StepReport> {
        let env = self.oracles.as_game_env();
        let mut engine = GameEngine::new(&mut self.state);

        let outcome = engine.step(env, intents).inspect_err(|error| {
            warn!("Engine step failed: {}", error);
        })?;
        let snapshot = engine.snapshot(env);

        if outcome.dropped > 0 {
            debug!(
                "Dropped {} surplus intents at clock {}",
                outcome.dropped, outcome.clock.0
            );
        }
        let rejected = outcome.events.iter().filter(|event| event.is_rejection()).count();
        if rejected > 0 {
            debug!("{} intents rejected at clock {}", rejected, outcome.clock.0);
        }
        self.publish(outcome.clock, &outcome.events);

        Ok(StepReport { outcome, snapshot })
    }

    fn handle_position(&mut self, position: Position) -> Result<Vec<GameEvent>> {
        let events = GameEngine::new(&mut self.state).set_player_position(position)?;
        self.publish(self.state.clock, &events);
        Ok(events)
    }

    fn publish(&self, clock: Tick, events: &[GameEvent]) {
        for event in events {
            log_event(event);
            self.event_bus.publish(Event::new(clock, event.clone()));
        }
    }
}

fn log_event(event: &GameEvent) {
    match event {
        GameEvent::ModeChanged { from, to } => info!("Mode changed: {} -> {}", from, to),
        GameEvent::EncounterStarted { hostile, archetype } => {
            info!("Encounter started with {:?} ({:?})", hostile, archetype);
        }
        GameEvent::EncounterResolved {
            hostile,
            resolution,
            reward,
        } => info!(
            "Encounter with {:?} resolved: {} (reward {})",
            hostile, resolution, reward
        ),
        GameEvent::ItemPurchased(receipt) => info!(
            "Purchased {} for {} ({} left)",
            receipt.name, receipt.price, receipt.remaining
        ),
        GameEvent::IntentRejected { intent, error } => {
            debug!("Rejected {} intent: {}", intent, error);
        }
        other => debug!("{:?}", other),
    }
}
