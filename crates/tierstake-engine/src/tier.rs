//! # Lock Tiers
//!
//! | Tier | Index | Lock Period | Multiplier |
//! |------|-------|-------------|------------|
//! | Flexible | 0 | none | 10000 bps (1.0x) |
//! | Lock30 | 1 | 30 days | 15000 bps (1.5x) |
//! | Lock60 | 2 | 60 days | 20000 bps (2.0x) |
//! | Lock90 | 3 | 90 days | 30000 bps (3.0x) |

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::constants::SECONDS_PER_DAY;

/// Lock-period category of a stake
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LockTier {
    /// No lock, withdrawable at any time
    Flexible,
    /// 30 day lock
    Lock30,
    /// 60 day lock
    Lock60,
    /// 90 day lock
    Lock90,
}

impl LockTier {
    /// All tiers, shortest lock first
    pub const ALL: [LockTier; 4] = [Self::Flexible, Self::Lock30, Self::Lock60, Self::Lock90];

    /// Reward multiplier in basis points
    pub fn multiplier_bps(&self) -> u64 {
        match self {
            Self::Flexible => 10_000,
            Self::Lock30 => 15_000,
            Self::Lock60 => 20_000,
            Self::Lock90 => 30_000,
        }
    }

    /// Lock duration in seconds
    pub fn lock_duration(&self) -> u64 {
        match self {
            Self::Flexible => 0,
            Self::Lock30 => 30 * SECONDS_PER_DAY,
            Self::Lock60 => 60 * SECONDS_PER_DAY,
            Self::Lock90 => 90 * SECONDS_PER_DAY,
        }
    }

    /// Numeric index as used by wallet front ends
    pub fn index(&self) -> u8 {
        match self {
            Self::Flexible => 0,
            Self::Lock30 => 1,
            Self::Lock60 => 2,
            Self::Lock90 => 3,
        }
    }

    /// Tier from numeric index
    pub fn from_index(index: u8) -> Option<Self> {
        Self::ALL.get(index as usize).copied()
    }

    /// Get tier name
    pub fn name(&self) -> &'static str {
        match self {
            Self::Flexible => "Flexible",
            Self::Lock30 => "30 Days",
            Self::Lock60 => "60 Days",
            Self::Lock90 => "90 Days",
        }
    }
}

impl fmt::Display for LockTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_multipliers() {
        assert_eq!(LockTier::Flexible.multiplier_bps(), 10_000);
        assert_eq!(LockTier::Lock30.multiplier_bps(), 15_000);
        assert_eq!(LockTier::Lock60.multiplier_bps(), 20_000);
        assert_eq!(LockTier::Lock90.multiplier_bps(), 30_000);
    }

    #[test]
    fn test_index_roundtrip() {
        for tier in LockTier::ALL {
            assert_eq!(LockTier::from_index(tier.index()), Some(tier));
        }
        assert_eq!(LockTier::from_index(4), None);
    }

    #[test]
    fn test_flexible_has_no_lock() {
        assert_eq!(LockTier::Flexible.lock_duration(), 0);
        assert_eq!(LockTier::Lock30.lock_duration(), 30 * 86_400);
    }
}
