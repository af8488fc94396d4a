//! Roaming hostiles and their bounce movement.
mod roster;

pub use roster::{Hostile, Roster};
