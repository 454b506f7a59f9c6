//! Token transfer seam
//!
//! The engine moves tokens only through [`TokenTransfer`], and only after its
//! own bookkeeping has validated the movement. Each call is atomic: it either
//! fully succeeds or fails without effect.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use thiserror::Error;

use crate::types::{Address, Amount};

/// Outbound payment of both tokens
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Payout {
    /// STK: returned principal plus STK rewards
    pub stk: Amount,
    /// GOV rewards
    pub gov: Amount,
}

impl Payout {
    pub fn is_zero(&self) -> bool {
        self.stk == 0 && self.gov == 0
    }
}

/// Transfer failures
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TransferError {
    #[error("Insufficient balance for {account}: need {needed}, have {available}")]
    InsufficientBalance {
        account: Address,
        needed: Amount,
        available: Amount,
    },

    #[error("Custody holds {available}, cannot release {needed}")]
    InsufficientCustody { needed: Amount, available: Amount },

    #[error("Balance overflow")]
    Overflow,
}

/// Token movement primitive
pub trait TokenTransfer: Send + Sync {
    /// Pull STK from `from` into engine custody
    fn transfer_in(&mut self, from: &Address, amount: Amount) -> Result<(), TransferError>;

    /// Release STK from custody and deliver GOV to `to`
    fn transfer_out(&mut self, to: &Address, payout: Payout) -> Result<(), TransferError>;
}

/// In-memory token ledger.
///
/// STK moves between wallets and engine custody; GOV is minted on payout.
#[derive(Clone, Debug, Default)]
pub struct InMemoryLedger {
    stk: HashMap<Address, Amount>,
    gov: HashMap<Address, Amount>,
    custody: Amount,
    gov_supply: Amount,
}

impl InMemoryLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Credit STK to a wallet out of thin air (fixtures, faucets)
    pub fn mint(&mut self, to: Address, amount: Amount) {
        let balance = self.stk.entry(to).or_insert(0);
        *balance = balance.saturating_add(amount);
    }

    pub fn stk_balance(&self, account: &Address) -> Amount {
        self.stk.get(account).copied().unwrap_or(0)
    }

    pub fn gov_balance(&self, account: &Address) -> Amount {
        self.gov.get(account).copied().unwrap_or(0)
    }

    /// STK held by the engine (staked principal plus reward pool)
    pub fn custody(&self) -> Amount {
        self.custody
    }

    pub fn gov_supply(&self) -> Amount {
        self.gov_supply
    }
}

impl TokenTransfer for InMemoryLedger {
    fn transfer_in(&mut self, from: &Address, amount: Amount) -> Result<(), TransferError> {
        let available = self.stk_balance(from);
        if available < amount {
            return Err(TransferError::InsufficientBalance {
                account: *from,
                needed: amount,
                available,
            });
        }
        let custody = self.custody.checked_add(amount).ok_or(TransferError::Overflow)?;

        self.stk.insert(*from, available - amount);
        self.custody = custody;
        Ok(())
    }

    fn transfer_out(&mut self, to: &Address, payout: Payout) -> Result<(), TransferError> {
        if self.custody < payout.stk {
            return Err(TransferError::InsufficientCustody {
                needed: payout.stk,
                available: self.custody,
            });
        }
        let stk = self
            .stk_balance(to)
            .checked_add(payout.stk)
            .ok_or(TransferError::Overflow)?;
        let gov = self
            .gov_balance(to)
            .checked_add(payout.gov)
            .ok_or(TransferError::Overflow)?;
        let gov_supply = self
            .gov_supply
            .checked_add(payout.gov)
            .ok_or(TransferError::Overflow)?;

        self.custody -= payout.stk;
        self.stk.insert(*to, stk);
        self.gov.insert(*to, gov);
        self.gov_supply = gov_supply;
        Ok(())
    }
}
