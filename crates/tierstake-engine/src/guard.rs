//! Guard layer
//!
//! Cross-cutting checks invoked before any mutation: pause state machine,
//! admin role, anti-whale cap, same-block (anti flash-loan) guard and clock
//! monotonicity. Checks never mutate; `record_*` methods are called only once
//! an operation commits.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::error::{Result, StakingError};
use crate::types::{Address, Amount, BlockNumber, Timestamp};

/// Administrative pause state
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PauseState {
    #[default]
    Active,
    Paused,
}

/// Guard layer state
#[derive(Debug)]
pub struct Guard {
    admin: Address,
    state: PauseState,
    max_stake_per_wallet: Amount,
    /// Block of each wallet's most recent stake
    last_stake_block: HashMap<Address, BlockNumber>,
    /// Latest committed timestamp
    last_timestamp: Timestamp,
}

impl Guard {
    pub fn new(admin: Address, max_stake_per_wallet: Amount) -> Self {
        Self {
            admin,
            state: PauseState::Active,
            max_stake_per_wallet,
            last_stake_block: HashMap::new(),
            last_timestamp: 0,
        }
    }

    pub fn admin(&self) -> Address {
        self.admin
    }

    pub fn state(&self) -> PauseState {
        self.state
    }

    pub fn is_paused(&self) -> bool {
        self.state == PauseState::Paused
    }

    pub fn max_stake_per_wallet(&self) -> Amount {
        self.max_stake_per_wallet
    }

    pub fn last_timestamp(&self) -> Timestamp {
        self.last_timestamp
    }

    /// Fail while paused
    pub fn ensure_active(&self) -> Result<()> {
        match self.state {
            PauseState::Active => Ok(()),
            PauseState::Paused => Err(StakingError::ContractPaused),
        }
    }

    /// Fail unless `caller` is the admin
    pub fn ensure_admin(&self, caller: &Address) -> Result<()> {
        if *caller == self.admin {
            Ok(())
        } else {
            Err(StakingError::Unauthorized(*caller))
        }
    }

    /// Fail if `now` precedes an already committed timestamp
    pub fn check_clock(&self, now: Timestamp) -> Result<()> {
        if now < self.last_timestamp {
            return Err(StakingError::ClockSkew {
                last: self.last_timestamp,
                now,
            });
        }
        Ok(())
    }

    /// Anti-whale: the wallet's active principal after staking must stay within the cap
    pub fn check_wallet_cap(&self, wallet_total: Amount, amount: Amount) -> Result<()> {
        let exceeds = StakingError::ExceedsMaxStake {
            requested: amount,
            wallet_total,
            cap: self.max_stake_per_wallet,
        };
        match wallet_total.checked_add(amount) {
            Some(after) if after <= self.max_stake_per_wallet => Ok(()),
            _ => Err(exceeds),
        }
    }

    /// Anti flash-loan: no withdrawal in the block the wallet last staked in
    pub fn check_same_block(&self, owner: &Address, block: BlockNumber) -> Result<()> {
        match self.last_stake_block.get(owner) {
            Some(b) if *b == block => Err(StakingError::SameBlockOperation { block }),
            _ => Ok(()),
        }
    }

    /// Transition to paused (admin only)
    pub fn pause(&mut self, caller: &Address) -> Result<()> {
        self.ensure_admin(caller)?;
        self.ensure_active()?;
        self.state = PauseState::Paused;
        Ok(())
    }

    /// Transition back to active (admin only)
    pub fn unpause(&mut self, caller: &Address) -> Result<()> {
        self.ensure_admin(caller)?;
        if self.state != PauseState::Paused {
            return Err(StakingError::NotPaused);
        }
        self.state = PauseState::Active;
        Ok(())
    }

    /// Remember the block a wallet staked in
    pub fn record_stake(&mut self, owner: Address, block: BlockNumber) {
        self.last_stake_block.insert(owner, block);
    }

    /// Advance the committed clock
    pub fn record_clock(&mut self, now: Timestamp) {
        self.last_timestamp = self.last_timestamp.max(now);
    }
}
