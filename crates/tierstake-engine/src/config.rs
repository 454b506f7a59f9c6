//! Engine configuration types

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::constants::*;
use crate::error::{Result, StakingError};
use crate::types::{amount_str, Address, Amount};

/// Complete engine configuration
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Administrative identity (pause/unpause/fund)
    #[serde(default)]
    pub admin: Address,

    /// Base APY of the flexible tier, in basis points
    #[serde(default = "default_base_apy_bps")]
    pub base_apy_bps: u64,

    /// Anti-whale cap on a wallet's active principal
    #[serde(default = "default_max_stake_per_wallet", with = "amount_str")]
    pub max_stake_per_wallet: Amount,

    /// Minimum seconds between automatic compounds
    #[serde(default = "default_compound_interval")]
    pub compound_interval_secs: u64,

    /// GOV reward = STK reward / divisor
    #[serde(default = "default_gov_bonus_divisor")]
    pub gov_bonus_divisor: u64,

    /// TVL bonus schedule
    #[serde(default)]
    pub tvl: TvlSchedule,
}

fn default_base_apy_bps() -> u64 {
    BASE_APY_BPS
}

fn default_max_stake_per_wallet() -> Amount {
    MAX_STAKE_PER_WALLET
}

fn default_compound_interval() -> u64 {
    COMPOUND_INTERVAL_SECS
}

fn default_gov_bonus_divisor() -> u64 {
    GOV_BONUS_DIVISOR as u64
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            admin: Address::ZERO,
            base_apy_bps: default_base_apy_bps(),
            max_stake_per_wallet: default_max_stake_per_wallet(),
            compound_interval_secs: default_compound_interval(),
            gov_bonus_divisor: default_gov_bonus_divisor(),
            tvl: TvlSchedule::default(),
        }
    }
}

impl EngineConfig {
    /// Default configuration administered by `admin`
    pub fn with_admin(admin: Address) -> Self {
        Self {
            admin,
            ..Self::default()
        }
    }

    /// Parse from TOML text and validate
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: Self =
            toml::from_str(content).map_err(|e| StakingError::InvalidConfig(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Load from a TOML file and validate
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .map_err(|e| StakingError::InvalidConfig(format!("{}: {}", path.display(), e)))?;
        Self::from_toml_str(&content)
    }

    /// Render as TOML
    pub fn to_toml_string(&self) -> Result<String> {
        toml::to_string_pretty(self).map_err(|e| StakingError::InvalidConfig(e.to_string()))
    }

    /// Check internal consistency
    pub fn validate(&self) -> Result<()> {
        if self.base_apy_bps == 0 {
            return Err(StakingError::InvalidConfig(
                "base_apy_bps must be positive".into(),
            ));
        }
        if self.base_apy_bps > MAX_BASE_APY_BPS {
            return Err(StakingError::InvalidConfig(format!(
                "base_apy_bps {} exceeds {}",
                self.base_apy_bps, MAX_BASE_APY_BPS
            )));
        }
        if self.max_stake_per_wallet == 0 {
            return Err(StakingError::InvalidConfig(
                "max_stake_per_wallet must be positive".into(),
            ));
        }
        if self.gov_bonus_divisor == 0 {
            return Err(StakingError::InvalidConfig(
                "gov_bonus_divisor must be positive".into(),
            ));
        }
        self.tvl.validate()
    }
}

/// One step of the TVL bonus schedule
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TvlStep {
    /// Applies while TVL is strictly below this amount
    #[serde(with = "amount_str")]
    pub below: Amount,

    /// Bonus in basis points (10000 = 1.0x)
    pub bonus_bps: u64,
}

/// TVL-driven bonus schedule
///
/// Steps are checked in order; the first whose threshold exceeds the TVL
/// wins, otherwise the floor applies.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TvlSchedule {
    /// Bonus once TVL is past every step
    #[serde(default = "default_floor_bps")]
    pub floor_bps: u64,

    /// Ascending thresholds with non-increasing bonuses
    #[serde(default = "default_tvl_steps")]
    pub steps: Vec<TvlStep>,
}

fn default_floor_bps() -> u64 {
    TVL_BONUS_FLOOR_BPS
}

fn default_tvl_steps() -> Vec<TvlStep> {
    DEFAULT_TVL_STEPS
        .iter()
        .map(|(below, bonus_bps)| TvlStep {
            below: *below,
            bonus_bps: *bonus_bps,
        })
        .collect()
}

impl Default for TvlSchedule {
    fn default() -> Self {
        Self {
            floor_bps: default_floor_bps(),
            steps: default_tvl_steps(),
        }
    }
}

impl TvlSchedule {
    /// Flat schedule: the same bonus at every TVL
    pub fn flat(bonus_bps: u64) -> Self {
        Self {
            floor_bps: bonus_bps,
            steps: Vec::new(),
        }
    }

    /// Check the schedule is monotonically non-increasing
    pub fn validate(&self) -> Result<()> {
        if self.floor_bps == 0 {
            return Err(StakingError::InvalidConfig(
                "tvl.floor_bps must be positive".into(),
            ));
        }
        let highest = self.steps.iter().map(|s| s.bonus_bps).fold(self.floor_bps, u64::max);
        if highest > MAX_TVL_BONUS_BPS {
            return Err(StakingError::InvalidConfig(format!(
                "tvl bonus {} exceeds {}",
                highest, MAX_TVL_BONUS_BPS
            )));
        }
        for pair in self.steps.windows(2) {
            if pair[1].below <= pair[0].below {
                return Err(StakingError::InvalidConfig(
                    "tvl.steps thresholds must be strictly ascending".into(),
                ));
            }
            if pair[1].bonus_bps > pair[0].bonus_bps {
                return Err(StakingError::InvalidConfig(
                    "tvl.steps bonuses must not increase with TVL".into(),
                ));
            }
        }
        if let Some(step) = self.steps.iter().find(|s| s.bonus_bps < self.floor_bps) {
            return Err(StakingError::InvalidConfig(format!(
                "tvl step below {} has bonus {} under floor {}",
                step.below, step.bonus_bps, self.floor_bps
            )));
        }
        Ok(())
    }
}
