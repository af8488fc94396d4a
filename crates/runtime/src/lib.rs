//! Runtime orchestration for the encounter and progression simulation.
//!
//! This crate wires together the intent provider abstraction, oracle access
//! and the simulation worker into a cohesive runtime API. Consumers embed
//! [`Runtime`] to drive ticks, subscribe to events, and interact with the
//! world through [`RuntimeHandle`].
//!
//! Modules are organized by responsibility:
//! - [`runtime`] hosts the orchestrator and builder
//! - [`api`] exposes the types downstream clients interact with
//! - [`events`] provides topic-based event bus for flexible event routing
//! - [`workers`] keeps background tasks internal to the crate
//! - [`oracle`] provides content adapters reused by other crates
pub mod api;
pub mod events;
pub mod oracle;
pub mod runtime;

mod workers;

pub use api::{
    IdleIntentProvider, IntentProvider, Result, RuntimeError, RuntimeHandle,
    ScriptedIntentProvider, StepReport,
};
pub use events::{Event, EventBus, Topic};
pub use oracle::{ItemOracleImpl, OracleManager, TablesOracleImpl};
pub use runtime::{Runtime, RuntimeBuilder, RuntimeConfig};
