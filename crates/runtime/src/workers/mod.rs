//! Worker tasks that back the runtime orchestration.
//!
//! The simulation worker owns the game state and executes every command
//! sent through [`crate::RuntimeHandle`].

mod simulation;

pub use simulation::{Command, SimulationWorker};
