//! Oracle access errors.
//!
//! Errors related to oracle availability and data access.

use crate::error::{ErrorSeverity, GameError};
use crate::state::ArchetypeId;

/// Errors that occur when accessing Oracle data.
///
/// Oracle errors indicate that required game data is unavailable or invalid.
/// Missing oracles are fatal since the engine cannot proceed without the
/// item catalog or the rule tables.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum OracleError {
    /// ItemOracle is not available in the environment.
    #[error("ItemOracle not available")]
    ItemsNotAvailable,

    /// TablesOracle is not available in the environment.
    #[error("TablesOracle not available")]
    TablesNotAvailable,

    /// Hostile archetype was not found by ID.
    #[error("hostile archetype {0:?} not found")]
    ArchetypeNotFound(ArchetypeId),
}

impl GameError for OracleError {
    fn severity(&self) -> ErrorSeverity {
        use OracleError::*;
        match self {
            // Missing oracles are fatal - engine cannot proceed
            ItemsNotAvailable | TablesNotAvailable => ErrorSeverity::Fatal,

            // A spawn or encounter row pointing at a missing archetype
            ArchetypeNotFound(_) => ErrorSeverity::Validation,
        }
    }

    fn error_code(&self) -> &'static str {
        use OracleError::*;
        match self {
            ItemsNotAvailable => "ORACLE_ITEMS_NOT_AVAILABLE",
            TablesNotAvailable => "ORACLE_TABLES_NOT_AVAILABLE",
            ArchetypeNotFound(_) => "ORACLE_ARCHETYPE_NOT_FOUND",
        }
    }
}
