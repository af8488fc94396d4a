//! Combatant stat model.
//!
//! Every combatant (the player and each hostile) owns exactly one [`StatBlock`]:
//!
//! ```text
//! [ shield ] ──absorbs first──▶ [ health ] ──reaches 0──▶ defeated
//! ```
//!
//! ## Principles
//!
//! 1. **Clamped**: health and shield never leave `[0, max]`
//! 2. **Unsigned**: negative amounts are unrepresentable, so the contract
//!    violation "negative damage" is rejected at the type level
//! 3. **Deterministic**: Pure mutation, no I/O or randomness

pub mod block;

pub use block::{DamageReport, StatBlock};
