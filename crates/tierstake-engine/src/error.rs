//! Error types for staking engine operations

use crate::types::{Address, Amount, BlockNumber, StakeId, Timestamp};
use thiserror::Error;

/// Result type alias for engine operations
pub type Result<T> = std::result::Result<T, StakingError>;

/// Errors returned by the staking engine.
///
/// Every variant is local and synchronous; the engine never retries and never
/// leaves state partially mutated when returning one of these.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StakingError {
    // === Input Validation ===
    /// Zero amount where a positive one is required
    #[error("Amount must be greater than zero")]
    InvalidAmount,

    /// Wallet would exceed the anti-whale cap
    #[error("Exceeds max stake: wallet holds {wallet_total}, requested {requested}, cap {cap}")]
    ExceedsMaxStake {
        requested: Amount,
        wallet_total: Amount,
        cap: Amount,
    },

    // === Guard ===
    /// Mutating operation attempted while paused
    #[error("Contract is paused")]
    ContractPaused,

    /// Unpause attempted while not paused
    #[error("Contract is not paused")]
    NotPaused,

    /// Stake opened in the same block (anti flash-loan)
    #[error("Stake and unstake in the same block {block} are not allowed")]
    SameBlockOperation { block: BlockNumber },

    /// Caller lacks the required role or ownership
    #[error("Unauthorized caller: {0}")]
    Unauthorized(Address),

    /// Supplied time precedes already-recorded time
    #[error("Clock skew: now {now} is before {last}")]
    ClockSkew { last: Timestamp, now: Timestamp },

    // === Stake State ===
    /// Lock period still running
    #[error("Tokens still locked until {unlock_at} (now {now})")]
    StillLocked { unlock_at: Timestamp, now: Timestamp },

    /// Requested more principal than the stake holds
    #[error("Insufficient stake: requested {requested}, available {available}")]
    InsufficientStake { requested: Amount, available: Amount },

    /// Unknown stake id
    #[error("Stake not found: {0}")]
    NotFound(StakeId),

    // === Reward Pool ===
    /// Pool cannot cover the realized payout
    #[error("Insufficient reward pool: required {required}, available {available}")]
    InsufficientRewardPool { required: Amount, available: Amount },

    // === Collaborators ===
    /// Token transfer primitive refused the movement
    #[error("Token transfer failed: {0}")]
    TransferFailed(String),

    /// Checked arithmetic overflowed
    #[error("Arithmetic overflow")]
    MathOverflow,

    /// Configuration rejected by validation
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

impl StakingError {
    /// Stable numeric code for callers and logs
    pub fn code(&self) -> u32 {
        match self {
            Self::InvalidAmount => 1001,
            Self::ExceedsMaxStake { .. } => 1002,
            Self::ContractPaused => 2001,
            Self::NotPaused => 2002,
            Self::SameBlockOperation { .. } => 2003,
            Self::Unauthorized(_) => 2004,
            Self::ClockSkew { .. } => 2005,
            Self::StillLocked { .. } => 3001,
            Self::InsufficientStake { .. } => 3002,
            Self::NotFound(_) => 3003,
            Self::InsufficientRewardPool { .. } => 4001,
            Self::TransferFailed(_) => 5001,
            Self::MathOverflow => 5002,
            Self::InvalidConfig(_) => 5003,
        }
    }

    /// Error kind name, surfaced verbatim to callers
    pub fn kind(&self) -> &'static str {
        match self {
            Self::InvalidAmount => "InvalidAmount",
            Self::ExceedsMaxStake { .. } => "ExceedsMaxStake",
            Self::ContractPaused => "ContractPaused",
            Self::NotPaused => "NotPaused",
            Self::SameBlockOperation { .. } => "SameBlockOperation",
            Self::Unauthorized(_) => "Unauthorized",
            Self::ClockSkew { .. } => "ClockSkew",
            Self::StillLocked { .. } => "StillLocked",
            Self::InsufficientStake { .. } => "InsufficientStake",
            Self::NotFound(_) => "NotFound",
            Self::InsufficientRewardPool { .. } => "InsufficientRewardPool",
            Self::TransferFailed(_) => "TransferFailed",
            Self::MathOverflow => "MathOverflow",
            Self::InvalidConfig(_) => "InvalidConfig",
        }
    }
}
