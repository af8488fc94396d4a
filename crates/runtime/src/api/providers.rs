//! Asynchronous abstraction for sourcing player intent.
//!
//! Runtime users plug in [`IntentProvider`] implementations so the simulation
//! can run with human input, scripted fixtures, or a replay.
use std::collections::VecDeque;

use async_trait::async_trait;
use game_core::{Intent, RenderSnapshot};
use tokio::sync::Mutex;

use super::errors::Result;

/// Trait for providing the intents of the next tick.
///
/// Different implementations can handle:
/// - Player input (from a terminal or UI)
/// - Scripted or replayed sessions
/// - Testing fixtures
#[async_trait]
pub trait IntentProvider: Send + Sync {
    /// Intents for the next tick given what is currently on screen.
    ///
    /// `Ok(None)` ends the game loop.
    async fn next_intents(&self, snapshot: &RenderSnapshot) -> Result<Option<Vec<Intent>>>;
}

/// Provider that never asks for anything; the world just ticks.
pub struct IdleIntentProvider;

#[async_trait]
impl IntentProvider for IdleIntentProvider {
    async fn next_intents(&self, _snapshot: &RenderSnapshot) -> Result<Option<Vec<Intent>>> {
        Ok(Some(Vec::new()))
    }
}

/// Replays a fixed list of frames, then stops the loop.
pub struct ScriptedIntentProvider {
    frames: Mutex<VecDeque<Vec<Intent>>>,
}

impl ScriptedIntentProvider {
    pub fn new(frames: impl IntoIterator<Item = Vec<Intent>>) -> Self {
        Self {
            frames: Mutex::new(frames.into_iter().collect()),
        }
    }

    /// Frames not yet handed out.
    pub async fn remaining(&self) -> usize {
        self.frames.lock().await.len()
    }
}

#[async_trait]
impl IntentProvider for ScriptedIntentProvider {
    async fn next_intents(&self, _snapshot: &RenderSnapshot) -> Result<Option<Vec<Intent>>> {
        Ok(self.frames.lock().await.pop_front())
    }
}
