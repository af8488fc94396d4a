//! Purchase and reward payout: the only two money mutators.

use super::{EconomyError, Inventory, Purse};
use crate::env::{ItemOracle, TablesOracle, WeaponData};
use crate::state::ItemHandle;

/// Successful purchase summary.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Receipt {
    pub item: ItemHandle,
    pub name: &'static str,
    pub price: u32,
    /// Balance after the debit.
    pub remaining: u32,
}

impl Receipt {
    pub fn message(&self) -> String {
        format!("You bought {} for {} coins!", self.name, self.price)
    }
}

/// Buys one `item` from the shop catalog.
///
/// Atomic: on error neither `purse` nor `bag` is touched. On success the purse
/// is debited by exactly the catalog price and exactly one handle is appended.
pub fn purchase(
    item: ItemHandle,
    tables: &(impl TablesOracle + ?Sized),
    items: &(impl ItemOracle + ?Sized),
    purse: &mut Purse,
    bag: &mut Inventory,
) -> Result<Receipt, EconomyError> {
    let price = tables.price_of(item).ok_or(EconomyError::NotForSale(item))?;
    let definition = items
        .definition(item)
        .ok_or(EconomyError::NotForSale(item))?;

    if !purse.can_afford(price) {
        return Err(EconomyError::InsufficientFunds {
            item,
            name: definition.name,
            price,
            money: purse.money(),
        });
    }

    purse.debit(price);
    bag.push(item);

    Ok(Receipt {
        item,
        name: definition.name,
        price,
        remaining: purse.money(),
    })
}

/// Credits a combat reward. Returns the new balance.
pub fn award(amount: u32, purse: &mut Purse) -> u32 {
    purse.credit(amount);
    purse.money()
}

/// Highest-rank weapon held in `bag`, if any.
pub fn best_weapon(bag: &Inventory, items: &(impl ItemOracle + ?Sized)) -> Option<WeaponData> {
    bag.iter()
        .filter_map(|handle| items.definition(handle)?.weapon())
        .max_by_key(|weapon| weapon.rank)
}
