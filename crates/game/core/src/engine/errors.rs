//! Error types surfaced by the engine.

use crate::action::IntentKind;
use crate::combat::CombatError;
use crate::economy::EconomyError;
use crate::env::OracleError;
use crate::error::{ErrorSeverity, GameError};
use crate::state::{InitializationError, Mode};

/// Why a single intent was refused.
///
/// Rejections never abort a step: the engine reports them as
/// [`super::GameEvent::IntentRejected`] plus a status message and keeps going.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum IntentError {
    #[error("{intent} is not possible in {mode} mode")]
    InvalidTransition { mode: Mode, intent: IntentKind },

    #[error("the shop is closed")]
    ShopClosed,

    #[error(transparent)]
    Combat(#[from] CombatError),

    #[error(transparent)]
    Economy(#[from] EconomyError),
}

impl GameError for IntentError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::InvalidTransition { .. } | Self::ShopClosed => ErrorSeverity::Validation,
            Self::Combat(err) => err.severity(),
            Self::Economy(err) => err.severity(),
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::InvalidTransition { .. } => "INVALID_TRANSITION",
            Self::ShopClosed => "SHOP_CLOSED",
            Self::Combat(err) => err.error_code(),
            Self::Economy(err) => err.error_code(),
        }
    }
}

/// Errors that abort a whole engine step.
///
/// Both come from broken or missing content, never from player input.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum EngineError {
    #[error("oracle error: {0}")]
    Oracle(#[from] OracleError),

    #[error("world initialization failed: {0}")]
    Initialization(#[from] InitializationError),
}

impl GameError for EngineError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::Oracle(err) => err.severity(),
            Self::Initialization(err) => err.severity(),
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::Oracle(err) => err.error_code(),
            Self::Initialization(err) => err.error_code(),
        }
    }
}
