//! Turn-based combat resolver.
//!
//! An [`EncounterSession`] exists only while the player is fighting. It walks
//! the [`CombatPhase`] machine and mutates the two stat blocks passed to it;
//! victory payout and roster removal are applied by the engine once the
//! session reports [`Resolution::Victory`].
mod actions;
mod error;
mod session;

pub use actions::{CombatPhase, PlayerAction, Resolution};
pub use error::CombatError;
pub use session::{ActionEffect, ActionReport, EncounterSession, HostileStrike};
