//! High-level runtime orchestrator.
//!
//! The runtime owns the simulation worker, wires up command/event channels,
//! and exposes a builder-based API for clients to drive the simulation.

use std::time::Duration;

use tokio::sync::{broadcast, mpsc};
use tokio::task::JoinHandle;
use tracing::{debug, info};

use game_core::{GameConfig, GameState};

use crate::api::{IntentProvider, Result, RuntimeError, RuntimeHandle, StepReport};
use crate::events::{Event, EventBus, Topic};
use crate::oracle::OracleManager;
use crate::workers::{Command, SimulationWorker};

/// Runtime configuration shared across the orchestrator and workers.
#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    pub game_config: GameConfig,
    pub event_buffer_size: usize,
    pub command_buffer_size: usize,
    /// Wall-clock pacing of [`Runtime::run`]; `None` ticks as fast as the
    /// provider answers.
    pub tick_interval: Option<Duration>,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            game_config: GameConfig::default(),
            event_buffer_size: 100,
            command_buffer_size: 32,
            tick_interval: None,
        }
    }
}

/// Main runtime that orchestrates game simulation
///
/// Runtime owns the worker and coordinates execution.
/// [`RuntimeHandle`] provides a cloneable façade for clients.
pub struct Runtime {
    handle: RuntimeHandle,
    provider: Option<Box<dyn IntentProvider>>,
    tick_interval: Option<Duration>,
    sim_worker_handle: JoinHandle<()>,
}

impl Runtime {
    /// Create a new runtime builder
    pub fn builder() -> RuntimeBuilder {
        RuntimeBuilder::new()
    }

    /// Get a cloneable handle to this runtime
    pub fn handle(&self) -> RuntimeHandle {
        self.handle.clone()
    }

    /// Subscribe to one topic of game events
    pub fn subscribe(&self, topic: Topic) -> broadcast::Receiver<Event> {
        self.handle.subscribe(topic)
    }

    /// Execute a single tick with the provider's intents.
    ///
    /// Returns `None` once the provider has nothing more to say.
    pub async fn step(&mut self) -> Result<Option<StepReport>> {
        let provider = self.provider.as_ref().ok_or(RuntimeError::ProviderNotSet)?;

        let snapshot = self.handle.snapshot().await?;
        let Some(intents) = provider.next_intents(&snapshot).await? else {
            return Ok(None);
        };

        self.handle.tick(intents).await.map(Some)
    }

    /// Run the game loop until the provider stops it; returns the number of
    /// ticks executed.
    pub async fn run(&mut self) -> Result<u64> {
        let mut interval = self.tick_interval.map(tokio::time::interval);
        let mut ticks = 0;

        loop {
            if let Some(interval) = interval.as_mut() {
                interval.tick().await;
            }
            if self.step().await?.is_none() {
                break;
            }
            ticks += 1;
        }

        info!("Game loop finished after {} ticks", ticks);
        Ok(ticks)
    }

    /// Set the intent provider
    pub fn set_provider(&mut self, provider: impl IntentProvider + 'static) {
        self.provider = Some(Box::new(provider));
    }

    /// Shutdown the runtime gracefully
    pub async fn shutdown(self) -> Result<()> {
        drop(self.handle);
        drop(self.provider);

        self.sim_worker_handle
            .await
            .map_err(RuntimeError::WorkerJoin)
    }
}

/// Builder for [`Runtime`] with flexible configuration.
pub struct RuntimeBuilder {
    config: RuntimeConfig,
    state: Option<GameState>,
    start_in_world: bool,
    oracles: Option<OracleManager>,
    provider: Option<Box<dyn IntentProvider>>,
}

impl RuntimeBuilder {
    fn new() -> Self {
        Self {
            config: RuntimeConfig::default(),
            state: None,
            start_in_world: false,
            oracles: None,
            provider: None,
        }
    }

    /// Override runtime configuration
    pub fn config(mut self, config: RuntimeConfig) -> Self {
        self.config = config;
        self
    }

    /// Provide initial game state
    pub fn initial_state(mut self, state: GameState) -> Self {
        self.state = Some(state);
        self
    }

    /// Skip the start menu and build the world right away.
    ///
    /// Ignored when an initial state is provided.
    pub fn start_in_world(mut self, start_in_world: bool) -> Self {
        self.start_in_world = start_in_world;
        self
    }

    /// Set required oracle manager
    pub fn oracles(mut self, oracles: OracleManager) -> Self {
        self.oracles = Some(oracles);
        self
    }

    /// Set intent provider (optional, required by [`Runtime::step`])
    pub fn intent_provider(mut self, provider: impl IntentProvider + 'static) -> Self {
        self.provider = Some(Box::new(provider));
        self
    }

    /// Build the runtime
    pub async fn build(self) -> Result<Runtime> {
        let oracles = self.oracles.ok_or(RuntimeError::MissingOracles)?;
        let game_config = self.config.game_config.clone();

        let initial_state = match self.state {
            Some(state) => state,
            None if self.start_in_world => {
                GameState::new_game(game_config, oracles.tables())
                    .map_err(RuntimeError::InitialState)?
            }
            None => GameState::new(game_config),
        };
        debug!("Building runtime in {} mode", initial_state.mode);

        let (command_tx, command_rx) =
            mpsc::channel::<Command>(self.config.command_buffer_size.max(1));
        let event_bus = EventBus::with_capacity(self.config.event_buffer_size);

        let handle = RuntimeHandle::new(command_tx, event_bus.clone());
        let sim_worker = SimulationWorker::new(initial_state, oracles, command_rx, event_bus);

        let sim_worker_handle = tokio::spawn(async move {
            sim_worker.run().await;
        });

        Ok(Runtime {
            handle,
            provider: self.provider,
            tick_interval: self.config.tick_interval,
            sim_worker_handle,
        })
    }
}
