use crate::error::{ErrorSeverity, GameError};
use crate::state::ItemHandle;

/// Errors raised by shop purchases and inventory consumption.
///
/// Every variant leaves the purse and the inventory untouched.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum EconomyError {
    #[error("not enough money for {name}: costs {price}, you have {money}")]
    InsufficientFunds {
        item: ItemHandle,
        name: &'static str,
        price: u32,
        money: u32,
    },

    #[error("no item in inventory slot {index} (inventory holds {len})")]
    InvalidIndex { index: usize, len: usize },

    #[error("{} cannot be used", .name.unwrap_or("this item"))]
    NotUsable {
        item: ItemHandle,
        /// `None` when the catalog has no definition for the handle.
        name: Option<&'static str>,
    },

    #[error("{0} is not sold here")]
    NotForSale(ItemHandle),
}

impl GameError for EconomyError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::InsufficientFunds { .. } => ErrorSeverity::Recoverable,
            Self::InvalidIndex { .. } | Self::NotUsable { .. } | Self::NotForSale(_) => {
                ErrorSeverity::Validation
            }
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::InsufficientFunds { .. } => "INSUFFICIENT_FUNDS",
            Self::InvalidIndex { .. } => "INVALID_INDEX",
            Self::NotUsable { .. } => "NOT_USABLE",
            Self::NotForSale(_) => "NOT_FOR_SALE",
        }
    }
}
