//! Ledger accounts as seen by the boundary.
//! - LedgerAccount trait (address + balance accessors)
//! - BaseAccount (plain struct for callers without their own account type)

use serde::{Deserialize, Serialize};

use crate::types::{Address, Coin, Coins};

/// Read access to an account's address and balance.
pub trait LedgerAccount {
    fn address(&self) -> &Address;
    fn coins(&self) -> &[Coin];
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BaseAccount {
    pub address: Address,
    pub coins: Coins,
}

impl BaseAccount {
    pub fn new(address: Address, coins: Coins) -> Self {
        Self { address, coins }
    }
}

impl LedgerAccount for BaseAccount {
    fn address(&self) -> &Address {
        &self.address
    }

    fn coins(&self) -> &[Coin] {
        &self.coins
    }
}
