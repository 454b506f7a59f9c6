//! # Tierstake Engine - Tiered Staking Ledger & Reward System
//!
//! Deterministic accounting engine for time-locked staking with dynamic APY,
//! dual-token rewards (STK + GOV) and lazy auto-compounding.
//!
//! ## Key Features
//!
//! - **Lock tiers**: Flexible, 30, 60 and 90 day locks with reward multipliers
//! - **Dynamic APY**: TVL-driven bonus that decays as more value is locked
//! - **Dual rewards**: GOV paid alongside STK at a fixed fraction
//! - **Auto-compound**: rewards folded back into principal on access
//! - **Guards**: anti-whale cap, same-block (flash-loan) guard, admin pause
//!
//! ## Lock Tiers
//!
//! | Tier | Lock | Multiplier | APY @ 1.2x TVL bonus |
//! |------|------|------------|----------------------|
//! | Flexible | none | 1.0x | 12% |
//! | Lock30 | 30 days | 1.5x | 18% |
//! | Lock60 | 60 days | 2.0x | 24% |
//! | Lock90 | 90 days | 3.0x | 36% |
//!
//! ## Control Flow
//!
//! ```text
//! caller ──► Guard ──► Registry ──► Calculator ──► TokenTransfer ──► commit ──► EventSinks
//!                          ▲            │
//!                          └── Oracle ◄─┘
//! ```

pub mod calculator;
pub mod config;
pub mod engine;
pub mod error;
pub mod events;
pub mod guard;
pub mod oracle;
pub mod registry;
pub mod stats;
pub mod tier;
pub mod transfer;
pub mod types;

// Re-exports
pub use calculator::{Accrual, RewardCalculator};
pub use config::{EngineConfig, TvlSchedule, TvlStep};
pub use engine::{ClaimOutcome, CloseOutcome, GlobalState, StakingEngine};
pub use error::{Result, StakingError};
pub use events::{EventEnvelope, EventLog, EventSink, StakingEvent};
pub use guard::{Guard, PauseState};
pub use oracle::TvlOracle;
pub use registry::{StagedStake, StakeRecord, StakeRegistry, UserStakeSummary};
pub use stats::{UserStats, UserStatsRecorder};
pub use tier::LockTier;
pub use transfer::{InMemoryLedger, Payout, TokenTransfer, TransferError};
pub use types::{Address, Amount, StakeId, TxContext};

/// Engine constants
pub mod constants {
    /// Staking token symbol
    pub const STK_SYMBOL: &str = "STK";

    /// Governance token symbol
    pub const GOV_SYMBOL: &str = "GOV";

    /// Decimal places of both tokens
    pub const DECIMALS: u8 = 18;

    /// One whole token in base units
    pub const ONE_TOKEN: u128 = 1_000_000_000_000_000_000; // 10^18

    /// Basis points denominator (100% = 10000)
    pub const BASIS_POINTS: u64 = 10_000;

    /// Seconds in a day
    pub const SECONDS_PER_DAY: u64 = 86_400;

    /// Seconds in a year (365 days)
    pub const SECONDS_PER_YEAR: u64 = 365 * SECONDS_PER_DAY;

    /// Base APY for the flexible tier: 10%
    pub const BASE_APY_BPS: u64 = 1_000;

    /// GOV reward = STK reward / GOV_BONUS_DIVISOR (10%)
    pub const GOV_BONUS_DIVISOR: u128 = 10;

    /// Auto-compound interval: 7 days
    pub const COMPOUND_INTERVAL_SECS: u64 = 7 * SECONDS_PER_DAY;

    /// Anti-whale cap on a wallet's active principal: 1,000,000 STK
    pub const MAX_STAKE_PER_WALLET: u128 = 1_000_000 * ONE_TOKEN;

    /// TVL bonus floor: 1.0x
    pub const TVL_BONUS_FLOOR_BPS: u64 = 10_000;

    /// Default TVL bonus schedule: (TVL strictly below, bonus bps)
    pub const DEFAULT_TVL_STEPS: [(u128, u64); 3] = [
        (100_000 * ONE_TOKEN, 12_000),
        (500_000 * ONE_TOKEN, 11_000),
        (1_000_000 * ONE_TOKEN, 10_500),
    ];

    /// Highest configurable base APY: 1000%
    pub const MAX_BASE_APY_BPS: u64 = 100 * BASIS_POINTS;

    /// Highest configurable TVL bonus: 10.0x
    pub const MAX_TVL_BONUS_BPS: u64 = 10 * BASIS_POINTS;
}

pub use constants::*;
