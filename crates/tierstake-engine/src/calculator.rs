//! # Reward Calculation
//!
//! Pure accrual of dual-token rewards for a single stake.
//!
//! ```text
//! effective_rate = base_apy * tier_multiplier * tvl_bonus / BASIS_POINTS²
//! stk            = principal * effective_rate * elapsed / (BASIS_POINTS * SECONDS_PER_YEAR)
//! gov            = stk / gov_bonus_divisor
//! ```
//!
//! Every division truncates toward zero.

use primitive_types::U256;
use serde::{Deserialize, Serialize};

use crate::constants::*;
use crate::error::{Result, StakingError};
use crate::registry::StakeRecord;
use crate::tier::LockTier;
use crate::types::{Amount, Timestamp};

/// Rewards accrued over an interval
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Accrual {
    /// STK reward
    pub stk: Amount,
    /// GOV reward
    pub gov: Amount,
    /// Seconds covered
    pub elapsed: u64,
}

impl Accrual {
    /// Combined payout that the reward pool must cover
    pub fn total(&self) -> Result<Amount> {
        self.stk.checked_add(self.gov).ok_or(StakingError::MathOverflow)
    }

    pub fn is_zero(&self) -> bool {
        self.stk == 0 && self.gov == 0
    }
}

/// Effective annual rate in basis points.
///
/// Fails with `MathOverflow` when the inputs lie outside what a validated
/// configuration allows and the rate no longer fits.
pub fn effective_rate_bps(base_apy_bps: u64, tier: LockTier, tvl_bonus_bps: u64) -> Result<u64> {
    let bp = BASIS_POINTS as u128;
    let rate = (base_apy_bps as u128)
        .checked_mul(tier.multiplier_bps() as u128)
        .and_then(|v| v.checked_mul(tvl_bonus_bps as u128))
        .ok_or(StakingError::MathOverflow)?
        / (bp * bp);
    u64::try_from(rate).map_err(|_| StakingError::MathOverflow)
}

/// Reward calculator
#[derive(Clone, Debug)]
pub struct RewardCalculator {
    base_apy_bps: u64,
    gov_bonus_divisor: u128,
}

impl Default for RewardCalculator {
    fn default() -> Self {
        Self::new(BASE_APY_BPS, GOV_BONUS_DIVISOR)
    }
}

impl RewardCalculator {
    /// Create new reward calculator
    pub fn new(base_apy_bps: u64, gov_bonus_divisor: u128) -> Self {
        Self {
            base_apy_bps,
            gov_bonus_divisor: gov_bonus_divisor.max(1),
        }
    }

    pub fn base_apy_bps(&self) -> u64 {
        self.base_apy_bps
    }

    /// Effective rate for a tier at the given TVL bonus
    pub fn effective_rate_bps(&self, tier: LockTier, tvl_bonus_bps: u64) -> Result<u64> {
        effective_rate_bps(self.base_apy_bps, tier, tvl_bonus_bps)
    }

    /// Rewards for `principal` at `tier` over `elapsed` seconds.
    ///
    /// The product is formed in 256 bits; only a final STK amount beyond
    /// `Amount::MAX` is an overflow.
    pub fn rewards_for(
        &self,
        principal: Amount,
        tier: LockTier,
        tvl_bonus_bps: u64,
        elapsed: u64,
    ) -> Result<Accrual> {
        let rate = self.effective_rate_bps(tier, tvl_bonus_bps)?;
        let denominator = U256::from(BASIS_POINTS) * U256::from(SECONDS_PER_YEAR);

        let wide = U256::from(principal)
            .checked_mul(U256::from(rate))
            .and_then(|v| v.checked_mul(U256::from(elapsed)))
            .ok_or(StakingError::MathOverflow)?
            / denominator;
        if wide > U256::from(Amount::MAX) {
            return Err(StakingError::MathOverflow);
        }
        let stk = wide.as_u128();
        let gov = stk / self.gov_bonus_divisor;

        Ok(Accrual { stk, gov, elapsed })
    }

    /// Accrue rewards for a stake up to `now`.
    ///
    /// Fails with `ClockSkew` when `now` precedes the stake's last accrual.
    pub fn accrue(&self, stake: &StakeRecord, tvl_bonus_bps: u64, now: Timestamp) -> Result<Accrual> {
        if now < stake.last_accrual_at {
            return Err(StakingError::ClockSkew {
                last: stake.last_accrual_at,
                now,
            });
        }
        if !stake.active {
            return Ok(Accrual::default());
        }
        self.rewards_for(
            stake.principal,
            stake.tier,
            tvl_bonus_bps,
            now - stake.last_accrual_at,
        )
    }

    /// Read-path accrual: a clock behind the last accrual counts as zero
    /// elapsed time. Arithmetic failures are still reported.
    pub fn preview(&self, stake: &StakeRecord, tvl_bonus_bps: u64, now: Timestamp) -> Result<Accrual> {
        self.accrue(stake, tvl_bonus_bps, now.max(stake.last_accrual_at))
    }
}
