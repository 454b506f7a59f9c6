//! TVL/APY oracle
//!
//! Derives the dynamic APY bonus from total value locked. The bonus is a pure
//! step function of TVL: replaying the same TVL always yields the same bonus.

use crate::calculator::effective_rate_bps;
use crate::config::TvlSchedule;
use crate::error::Result;
use crate::tier::LockTier;
use crate::types::Amount;

/// TVL-driven APY oracle
#[derive(Clone, Debug)]
pub struct TvlOracle {
    schedule: TvlSchedule,
    base_apy_bps: u64,
}

impl TvlOracle {
    pub fn new(schedule: TvlSchedule, base_apy_bps: u64) -> Self {
        Self {
            schedule,
            base_apy_bps,
        }
    }

    pub fn schedule(&self) -> &TvlSchedule {
        &self.schedule
    }

    /// Bonus in basis points for the given TVL
    pub fn tvl_bonus(&self, total_staked: Amount) -> u64 {
        self.schedule
            .steps
            .iter()
            .find(|step| total_staked < step.below)
            .map(|step| step.bonus_bps)
            .unwrap_or(self.schedule.floor_bps)
    }

    /// Current APY of a tier in basis points
    pub fn current_apy(&self, tier: LockTier, total_staked: Amount) -> Result<u64> {
        effective_rate_bps(self.base_apy_bps, tier, self.tvl_bonus(total_staked))
    }

    /// Lock multiplier of a tier in basis points
    pub fn lock_multiplier(&self, tier: LockTier) -> u64 {
        tier.multiplier_bps()
    }
}
