//! World initialization errors.

use crate::error::{ErrorSeverity, GameError};
use crate::state::ArchetypeId;

/// Errors that occur while building a fresh world from the spawn table.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum InitializationError {
    /// Spawn table has more rows than the roster can hold.
    #[error("Roster is full (max: {max}, requested: {requested})")]
    RosterFull {
        /// Maximum capacity.
        max: usize,
        /// Number of spawn rows.
        requested: usize,
    },

    /// Spawn row references an archetype missing from the tables.
    #[error("spawn table references unknown {0}")]
    UnknownArchetype(ArchetypeId),
}

impl GameError for InitializationError {
    fn severity(&self) -> ErrorSeverity {
        // Broken content tables: the world cannot be built at all.
        ErrorSeverity::Fatal
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::RosterFull { .. } => "INIT_ROSTER_FULL",
            Self::UnknownArchetype(_) => "INIT_UNKNOWN_ARCHETYPE",
        }
    }
}
