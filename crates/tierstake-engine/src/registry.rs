//! # Stake Registry
//!
//! Owns every stake record. A wallet may hold several concurrent stakes, each
//! with its own tier and lock. `total_staked` always equals the sum of active
//! principal; the registry is the only place that adjusts either.

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};

use crate::error::{Result, StakingError};
use crate::tier::LockTier;
use crate::types::{Address, Amount, StakeId, Timestamp};

/// A single stake position
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct StakeRecord {
    /// Stake identifier
    pub id: StakeId,

    /// Owner address
    pub owner: Address,

    /// Staked principal
    pub principal: Amount,

    /// Lock tier
    pub tier: LockTier,

    /// Liquidity-provider stake
    pub is_lp: bool,

    /// Fold rewards into principal on access
    pub auto_compound: bool,

    /// Stake timestamp
    pub created_at: Timestamp,

    /// Lock end timestamp (equals `created_at` for flexible stakes)
    pub unlock_at: Timestamp,

    /// Last reward realization
    pub last_accrual_at: Timestamp,

    /// Realized, unpaid STK
    pub accrued_stk: Amount,

    /// Realized, unpaid GOV
    pub accrued_gov: Amount,

    /// False once fully unstaked
    pub active: bool,
}

impl StakeRecord {
    /// Create a new stake record
    pub fn open(
        id: StakeId,
        owner: Address,
        principal: Amount,
        tier: LockTier,
        is_lp: bool,
        auto_compound: bool,
        now: Timestamp,
    ) -> Self {
        Self {
            id,
            owner,
            principal,
            tier,
            is_lp,
            auto_compound,
            created_at: now,
            unlock_at: now.saturating_add(tier.lock_duration()),
            last_accrual_at: now,
            accrued_stk: 0,
            accrued_gov: 0,
            active: true,
        }
    }

    /// Check if stake is unlocked
    pub fn is_unlocked(&self, now: Timestamp) -> bool {
        now >= self.unlock_at
    }

    /// Principal withdrawable at `now`
    pub fn unlockable(&self, now: Timestamp) -> Amount {
        if self.active && self.is_unlocked(now) {
            self.principal
        } else {
            0
        }
    }
}

/// Per-wallet aggregation across all stakes
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserStakeSummary {
    /// Wallet
    pub owner: Address,
    /// Sum of active principal
    pub total_principal: Amount,
    /// Number of active stakes
    pub active_stakes: usize,
    /// Earliest unlock among active stakes
    pub next_unlock_at: Option<Timestamp>,
}

/// A validated stake replacement and the TVL it leads to
#[derive(Debug)]
#[must_use]
pub struct StagedStake {
    record: StakeRecord,
    total_staked: Amount,
}

impl StagedStake {
    /// TVL once committed
    pub fn total_staked(&self) -> Amount {
        self.total_staked
    }
}

/// Stake registry
#[derive(Debug, Default)]
pub struct StakeRegistry {
    /// All stakes, active or not
    stakes: BTreeMap<StakeId, StakeRecord>,

    /// Stake ids by owner, in creation order
    by_owner: HashMap<Address, Vec<StakeId>>,

    /// Last assigned id
    last_id: u64,

    /// Sum of active principal
    total_staked: Amount,
}

impl StakeRegistry {
    /// Create new registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Total value locked
    pub fn total_staked(&self) -> Amount {
        self.total_staked
    }

    /// Id the next opened stake will receive
    pub fn next_id(&self) -> StakeId {
        StakeId(self.last_id + 1)
    }

    /// Insert a freshly opened stake
    pub fn insert(&mut self, record: StakeRecord) -> Result<StakeId> {
        debug_assert_eq!(record.id, self.next_id());
        let total_staked = self
            .total_staked
            .checked_add(record.principal)
            .ok_or(StakingError::MathOverflow)?;

        let id = record.id;
        self.by_owner.entry(record.owner).or_default().push(id);
        self.stakes.insert(id, record);
        self.last_id = id.0;
        self.total_staked = total_staked;
        Ok(id)
    }

    /// Validate replacing a stake with `updated` without applying it.
    ///
    /// The returned change is committed with [`StakeRegistry::commit`], which
    /// cannot fail.
    pub fn stage(&self, updated: StakeRecord) -> Result<StagedStake> {
        let current = self
            .stakes
            .get(&updated.id)
            .ok_or(StakingError::NotFound(updated.id))?;

        let old_active = if current.active { current.principal } else { 0 };
        let new_active = if updated.active { updated.principal } else { 0 };
        let total_staked = self
            .total_staked
            .checked_sub(old_active)
            .and_then(|v| v.checked_add(new_active))
            .ok_or(StakingError::MathOverflow)?;

        Ok(StagedStake {
            record: updated,
            total_staked,
        })
    }

    /// Apply a staged replacement
    pub fn commit(&mut self, staged: StagedStake) {
        self.stakes.insert(staged.record.id, staged.record);
        self.total_staked = staged.total_staked;
    }

    /// Replace a stake with an updated copy, keeping TVL in step
    pub fn replace(&mut self, updated: StakeRecord) -> Result<()> {
        let staged = self.stage(updated)?;
        self.commit(staged);
        Ok(())
    }

    /// Get a stake
    pub fn get(&self, id: StakeId) -> Result<&StakeRecord> {
        self.stakes.get(&id).ok_or(StakingError::NotFound(id))
    }

    /// All stakes of a wallet, in creation order
    pub fn stakes_of(&self, owner: &Address) -> Vec<&StakeRecord> {
        self.by_owner
            .get(owner)
            .map(|ids| ids.iter().filter_map(|id| self.stakes.get(id)).collect())
            .unwrap_or_default()
    }

    /// Sum of a wallet's active principal
    pub fn wallet_principal(&self, owner: &Address) -> Amount {
        self.stakes_of(owner)
            .iter()
            .filter(|s| s.active)
            .map(|s| s.principal)
            .sum()
    }

    /// Aggregate a wallet's stakes
    pub fn user_summary(&self, owner: &Address) -> UserStakeSummary {
        let mut summary = UserStakeSummary {
            owner: *owner,
            ..Default::default()
        };
        for stake in self.stakes_of(owner).into_iter().filter(|s| s.active) {
            summary.total_principal += stake.principal;
            summary.active_stakes += 1;
            summary.next_unlock_at = Some(match summary.next_unlock_at {
                Some(t) => t.min(stake.unlock_at),
                None => stake.unlock_at,
            });
        }
        summary
    }

    /// All active stakes
    pub fn active_stakes(&self) -> impl Iterator<Item = &StakeRecord> {
        self.stakes.values().filter(|s| s.active)
    }

    /// Number of stakes ever opened
    pub fn len(&self) -> usize {
        self.stakes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stakes.is_empty()
    }
}
