//! # Staking Engine
//!
//! Orchestrates the guard layer, stake registry, reward calculator, TVL oracle
//! and auto-compound scheduler behind a single writer lock.
//!
//! Every mutating call runs under the write lock from first check to last
//! event. Changes are staged on copies, the token transfer is performed, and
//! only then is anything committed: an error at any step leaves the engine
//! exactly as it was. Reads take the read lock and always see a consistent
//! snapshot.

use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{debug, info, warn};

use crate::calculator::{Accrual, RewardCalculator};
use crate::config::EngineConfig;
use crate::error::{Result, StakingError};
use crate::events::{EventBus, EventSink, StakingEvent};
use crate::guard::Guard;
use crate::oracle::TvlOracle;
use crate::registry::{StakeRecord, StakeRegistry, UserStakeSummary};
use crate::tier::LockTier;
use crate::transfer::{Payout, TokenTransfer};
use crate::types::{Address, Amount, StakeId, Timestamp, TxContext};

/// Snapshot of global ledger state
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GlobalState {
    /// Sum of active principal
    pub total_staked: Amount,
    /// STK paid out or compounded, ever
    pub total_rewards_paid_stk: Amount,
    /// GOV paid out, ever
    pub total_rewards_paid_gov: Amount,
    /// Tokens available for reward payouts
    pub reward_pool_balance: Amount,
    /// Administrative pause flag
    pub paused: bool,
}

/// Result of closing (part of) a stake
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CloseOutcome {
    pub principal_returned: Amount,
    pub stk_reward: Amount,
    pub gov_reward: Amount,
    /// STK folded into principal before closing
    pub compounded: Amount,
}

/// Result of a claim
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClaimOutcome {
    /// STK transferred out
    pub stk: Amount,
    /// GOV transferred out
    pub gov: Amount,
    /// STK folded into principal instead of transferred
    pub compounded: Amount,
}

/// When realized STK goes back into principal
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Compounding {
    /// Only for opted-in stakes once the compound interval elapsed
    Lazy,
    /// Always
    Forced,
}

/// Staged reward realization for one stake
struct Settlement {
    stake: StakeRecord,
    compounded: Amount,
    paid_stk: Amount,
    paid_gov: Amount,
}

impl Settlement {
    /// Tokens the reward pool must provide
    fn pool_debit(&self) -> Result<Amount> {
        self.compounded
            .checked_add(self.paid_stk)
            .and_then(|v| v.checked_add(self.paid_gov))
            .ok_or(StakingError::MathOverflow)
    }
}

/// Reward counters and pool
#[derive(Clone, Copy, Debug, Default)]
struct RewardBook {
    paid_stk: Amount,
    paid_gov: Amount,
    pool: Amount,
}

struct EngineState<T> {
    config: EngineConfig,
    registry: StakeRegistry,
    guard: Guard,
    calculator: RewardCalculator,
    oracle: TvlOracle,
    book: RewardBook,
    transfer: T,
    events: EventBus,
}

/// Staking ledger & reward engine
pub struct StakingEngine<T: TokenTransfer> {
    state: RwLock<EngineState<T>>,
}

fn rejected<V>(op: &'static str, result: Result<V>) -> Result<V> {
    if let Err(err) = &result {
        debug!(op, code = err.code(), kind = err.kind(), "Operation rejected: {}", err);
    }
    result
}

fn transfer_failed(err: impl std::fmt::Display) -> StakingError {
    StakingError::TransferFailed(err.to_string())
}

impl<T: TokenTransfer> StakingEngine<T> {
    /// Create an engine from a validated configuration
    pub fn new(config: EngineConfig, transfer: T) -> Result<Self> {
        config.validate()?;

        let state = EngineState {
            registry: StakeRegistry::new(),
            guard: Guard::new(config.admin, config.max_stake_per_wallet),
            calculator: RewardCalculator::new(
                config.base_apy_bps,
                config.gov_bonus_divisor as u128,
            ),
            oracle: TvlOracle::new(config.tvl.clone(), config.base_apy_bps),
            book: RewardBook::default(),
            transfer,
            events: EventBus::new(),
            config,
        };

        info!(
            admin = %state.config.admin,
            base_apy_bps = state.config.base_apy_bps,
            "Staking engine initialized"
        );

        Ok(Self {
            state: RwLock::new(state),
        })
    }

    /// Register an event observer.
    ///
    /// Sinks run under the write lock and must not call back into this engine.
    pub fn subscribe(&self, sink: Arc<dyn EventSink>) {
        self.state.write().events.subscribe(sink);
    }

    // === Mutating operations ===

    /// Open a new stake
    pub fn open_stake(
        &self,
        ctx: &TxContext,
        amount: Amount,
        tier: LockTier,
        is_lp: bool,
        auto_compound: bool,
    ) -> Result<StakeId> {
        let mut state = self.state.write();
        rejected("open_stake", state.open_stake(ctx, amount, tier, is_lp, auto_compound))
    }

    /// Withdraw principal (0 = everything unlockable) with realized rewards
    pub fn close_stake(&self, ctx: &TxContext, stake_id: StakeId, amount: Amount) -> Result<CloseOutcome> {
        let mut state = self.state.write();
        rejected("close_stake", state.close_stake(ctx, stake_id, amount))
    }

    /// Realize and pay (or auto-compound) rewards of one stake
    pub fn claim(&self, ctx: &TxContext, stake_id: StakeId) -> Result<ClaimOutcome> {
        let mut state = self.state.write();
        rejected("claim", state.claim(ctx, stake_id))
    }

    /// Fold accrued STK into principal now, regardless of flag or interval
    pub fn compound(&self, ctx: &TxContext, stake_id: StakeId) -> Result<Amount> {
        let mut state = self.state.write();
        rejected("compound", state.compound(ctx, stake_id))
    }

    /// Flip the auto-compound flag; returns the new value
    pub fn toggle_auto_compound(&self, ctx: &TxContext, stake_id: StakeId) -> Result<bool> {
        let mut state = self.state.write();
        rejected("toggle_auto_compound", state.toggle_auto_compound(ctx, stake_id))
    }

    /// Return full principal, forfeiting rewards. Works while paused and locked.
    pub fn emergency_withdraw(&self, ctx: &TxContext, stake_id: StakeId) -> Result<Amount> {
        let mut state = self.state.write();
        rejected("emergency_withdraw", state.emergency_withdraw(ctx, stake_id))
    }

    /// Pause all user mutations (admin)
    pub fn pause(&self, ctx: &TxContext) -> Result<()> {
        let mut state = self.state.write();
        rejected("pause", state.set_paused(ctx, true))
    }

    /// Resume user mutations (admin)
    pub fn unpause(&self, ctx: &TxContext) -> Result<()> {
        let mut state = self.state.write();
        rejected("unpause", state.set_paused(ctx, false))
    }

    /// Top up the reward pool (admin)
    pub fn fund_reward_pool(&self, ctx: &TxContext, amount: Amount) -> Result<Amount> {
        let mut state = self.state.write();
        rejected("fund_reward_pool", state.fund_reward_pool(ctx, amount))
    }

    // === Read operations ===

    /// Aggregate view of a wallet's active stakes
    pub fn get_user_stake(&self, owner: &Address) -> UserStakeSummary {
        self.state.read().registry.user_summary(owner)
    }

    /// Every stake a wallet ever opened, in creation order
    pub fn get_all_user_stakes(&self, owner: &Address) -> Vec<StakeRecord> {
        self.state
            .read()
            .registry
            .stakes_of(owner)
            .into_iter()
            .cloned()
            .collect()
    }

    pub fn get_stake(&self, stake_id: StakeId) -> Result<StakeRecord> {
        self.state.read().registry.get(stake_id).cloned()
    }

    /// Rewards a claim at `now` would realize, including already accrued ones.
    ///
    /// Fails with `MathOverflow` exactly when the claim itself would.
    pub fn pending_rewards(&self, stake_id: StakeId, now: Timestamp) -> Result<Accrual> {
        let state = self.state.read();
        let stake = state.registry.get(stake_id)?;
        state.preview(stake, now)
    }

    /// Pending rewards summed over a wallet's stakes
    pub fn pending_rewards_for(&self, owner: &Address, now: Timestamp) -> Result<Accrual> {
        let state = self.state.read();
        let mut total = Accrual::default();
        for stake in state.registry.stakes_of(owner).into_iter().filter(|s| s.active) {
            let pending = state.preview(stake, now)?;
            total = Accrual {
                stk: total.stk.checked_add(pending.stk).ok_or(StakingError::MathOverflow)?,
                gov: total.gov.checked_add(pending.gov).ok_or(StakingError::MathOverflow)?,
                elapsed: total.elapsed.max(pending.elapsed),
            };
        }
        Ok(total)
    }

    /// Current TVL bonus in basis points
    pub fn tvl_bonus(&self) -> u64 {
        let state = self.state.read();
        state.oracle.tvl_bonus(state.registry.total_staked())
    }

    /// Current APY of a tier in basis points
    pub fn current_apy(&self, tier: LockTier) -> Result<u64> {
        let state = self.state.read();
        state.oracle.current_apy(tier, state.registry.total_staked())
    }

    pub fn lock_multiplier(&self, tier: LockTier) -> u64 {
        self.state.read().oracle.lock_multiplier(tier)
    }

    pub fn global_state(&self) -> GlobalState {
        self.state.read().global_state()
    }

    pub fn is_paused(&self) -> bool {
        self.state.read().guard.is_paused()
    }

    pub fn config(&self) -> EngineConfig {
        self.state.read().config.clone()
    }

    /// Read access to the token transfer collaborator
    pub fn with_transfer<R>(&self, f: impl FnOnce(&T) -> R) -> R {
        f(&self.state.read().transfer)
    }

    /// Check that TVL equals the sum of active principal
    pub fn verify_invariants(&self) -> bool {
        let state = self.state.read();
        let sum: Amount = state.registry.active_stakes().map(|s| s.principal).sum();
        let principals_positive = state.registry.active_stakes().all(|s| s.principal > 0);
        sum == state.registry.total_staked() && principals_positive
    }
}

impl<T: TokenTransfer> EngineState<T> {
    fn global_state(&self) -> GlobalState {
        GlobalState {
            total_staked: self.registry.total_staked(),
            total_rewards_paid_stk: self.book.paid_stk,
            total_rewards_paid_gov: self.book.paid_gov,
            reward_pool_balance: self.book.pool,
            paused: self.guard.is_paused(),
        }
    }

    fn tvl_bonus(&self) -> u64 {
        self.oracle.tvl_bonus(self.registry.total_staked())
    }

    fn preview(&self, stake: &StakeRecord, now: Timestamp) -> Result<Accrual> {
        let fresh = self.calculator.preview(stake, self.tvl_bonus(), now)?;
        Ok(Accrual {
            stk: stake
                .accrued_stk
                .checked_add(fresh.stk)
                .ok_or(StakingError::MathOverflow)?,
            gov: stake
                .accrued_gov
                .checked_add(fresh.gov)
                .ok_or(StakingError::MathOverflow)?,
            elapsed: fresh.elapsed,
        })
    }

    /// Load a stake the caller owns
    fn owned_stake(&self, ctx: &TxContext, stake_id: StakeId) -> Result<StakeRecord> {
        let stake = self.registry.get(stake_id)?;
        if stake.owner != ctx.caller {
            return Err(StakingError::Unauthorized(ctx.caller));
        }
        if !stake.active {
            return Err(StakingError::InsufficientStake {
                requested: 0,
                available: 0,
            });
        }
        Ok(stake.clone())
    }

    /// Realize a stake's rewards on a copy, deciding what gets compounded
    fn settle(&self, stake: &StakeRecord, now: Timestamp, mode: Compounding) -> Result<Settlement> {
        let accrual = self.calculator.accrue(stake, self.tvl_bonus(), now)?;

        let mut updated = stake.clone();
        updated.accrued_stk = updated
            .accrued_stk
            .checked_add(accrual.stk)
            .ok_or(StakingError::MathOverflow)?;
        updated.accrued_gov = updated
            .accrued_gov
            .checked_add(accrual.gov)
            .ok_or(StakingError::MathOverflow)?;
        updated.last_accrual_at = now;

        let fold = match mode {
            Compounding::Forced => true,
            Compounding::Lazy => {
                updated.auto_compound && accrual.elapsed >= self.config.compound_interval_secs
            }
        };

        let (compounded, paid_stk) = if fold {
            (updated.accrued_stk, 0)
        } else {
            (0, updated.accrued_stk)
        };
        updated.principal = updated
            .principal
            .checked_add(compounded)
            .ok_or(StakingError::MathOverflow)?;

        let settlement = Settlement {
            paid_gov: updated.accrued_gov,
            paid_stk,
            compounded,
            stake: StakeRecord {
                accrued_stk: 0,
                accrued_gov: 0,
                ..updated
            },
        };

        // Block-and-report: never pay part of a reward
        let required = settlement.pool_debit()?;
        if required > self.book.pool {
            return Err(StakingError::InsufficientRewardPool {
                required,
                available: self.book.pool,
            });
        }

        Ok(settlement)
    }

    /// Reward book after applying a settlement
    fn book_after(&self, settlement: &Settlement) -> Result<RewardBook> {
        let debit = settlement.pool_debit()?;
        Ok(RewardBook {
            pool: self
                .book
                .pool
                .checked_sub(debit)
                .ok_or(StakingError::MathOverflow)?,
            paid_stk: self
                .book
                .paid_stk
                .checked_add(settlement.compounded)
                .and_then(|v| v.checked_add(settlement.paid_stk))
                .ok_or(StakingError::MathOverflow)?,
            paid_gov: self
                .book
                .paid_gov
                .checked_add(settlement.paid_gov)
                .ok_or(StakingError::MathOverflow)?,
        })
    }

    fn pay(&mut self, to: &Address, payout: Payout) -> Result<()> {
        if payout.is_zero() {
            return Ok(());
        }
        self.transfer.transfer_out(to, payout).map_err(transfer_failed)
    }

    fn open_stake(
        &mut self,
        ctx: &TxContext,
        amount: Amount,
        tier: LockTier,
        is_lp: bool,
        auto_compound: bool,
    ) -> Result<StakeId> {
        self.guard.ensure_active()?;
        self.guard.check_clock(ctx.timestamp)?;
        if amount == 0 {
            return Err(StakingError::InvalidAmount);
        }

        let wallet_total = self.registry.wallet_principal(&ctx.caller);
        self.guard.check_wallet_cap(wallet_total, amount)?;
        self.registry
            .total_staked()
            .checked_add(amount)
            .ok_or(StakingError::MathOverflow)?;

        self.transfer
            .transfer_in(&ctx.caller, amount)
            .map_err(transfer_failed)?;

        let record = StakeRecord::open(
            self.registry.next_id(),
            ctx.caller,
            amount,
            tier,
            is_lp,
            auto_compound,
            ctx.timestamp,
        );
        let unlock_at = record.unlock_at;
        let stake_id = self.registry.insert(record)?;
        self.guard.record_stake(ctx.caller, ctx.block);
        self.guard.record_clock(ctx.timestamp);

        info!(
            stake_id = %stake_id,
            owner = %ctx.caller,
            amount = %amount,
            tier = %tier,
            unlock_at,
            "Stake opened"
        );

        self.events.emit(StakingEvent::Staked {
            stake_id,
            owner: ctx.caller,
            amount,
            tier,
            is_lp,
            auto_compound,
            timestamp: ctx.timestamp,
        });

        Ok(stake_id)
    }

    fn close_stake(&mut self, ctx: &TxContext, stake_id: StakeId, amount: Amount) -> Result<CloseOutcome> {
        self.guard.ensure_active()?;
        self.guard.check_clock(ctx.timestamp)?;

        let stake = self.owned_stake(ctx, stake_id)?;
        self.guard.check_same_block(&stake.owner, ctx.block)?;
        if !stake.is_unlocked(ctx.timestamp) {
            return Err(StakingError::StillLocked {
                unlock_at: stake.unlock_at,
                now: ctx.timestamp,
            });
        }
        if amount > stake.principal {
            return Err(StakingError::InsufficientStake {
                requested: amount,
                available: stake.principal,
            });
        }

        let mut settlement = self.settle(&stake, ctx.timestamp, Compounding::Lazy)?;

        // Zero means everything unlockable, compounded rewards included
        let withdrawn = if amount == 0 {
            settlement.stake.principal
        } else {
            amount
        };
        settlement.stake.principal -= withdrawn;
        if settlement.stake.principal == 0 {
            settlement.stake.active = false;
        }

        let book = self.book_after(&settlement)?;
        let payout = Payout {
            stk: withdrawn
                .checked_add(settlement.paid_stk)
                .ok_or(StakingError::MathOverflow)?,
            gov: settlement.paid_gov,
        };

        let new_principal = settlement.stake.principal;
        let staged = self.registry.stage(settlement.stake)?;

        self.pay(&stake.owner, payout)?;
        self.registry.commit(staged);
        self.book = book;
        self.guard.record_clock(ctx.timestamp);

        info!(
            stake_id = %stake_id,
            owner = %stake.owner,
            withdrawn = %withdrawn,
            stk_reward = %settlement.paid_stk,
            gov_reward = %settlement.paid_gov,
            compounded = %settlement.compounded,
            "Stake closed"
        );

        if settlement.compounded > 0 {
            self.events.emit(StakingEvent::AutoCompounded {
                stake_id,
                owner: stake.owner,
                amount: settlement.compounded,
                gov_reward: 0,
                new_principal: new_principal + withdrawn,
                timestamp: ctx.timestamp,
            });
        }
        self.events.emit(StakingEvent::Unstaked {
            stake_id,
            owner: stake.owner,
            amount: withdrawn,
            stk_reward: settlement.paid_stk,
            gov_reward: settlement.paid_gov,
            timestamp: ctx.timestamp,
        });

        Ok(CloseOutcome {
            principal_returned: withdrawn,
            stk_reward: settlement.paid_stk,
            gov_reward: settlement.paid_gov,
            compounded: settlement.compounded,
        })
    }

    fn claim(&mut self, ctx: &TxContext, stake_id: StakeId) -> Result<ClaimOutcome> {
        self.guard.ensure_active()?;
        self.guard.check_clock(ctx.timestamp)?;

        let stake = self.owned_stake(ctx, stake_id)?;
        let settlement = self.settle(&stake, ctx.timestamp, Compounding::Lazy)?;
        self.commit_rewards(ctx, settlement, "claim")
    }

    fn compound(&mut self, ctx: &TxContext, stake_id: StakeId) -> Result<Amount> {
        self.guard.ensure_active()?;
        self.guard.check_clock(ctx.timestamp)?;

        let stake = self.owned_stake(ctx, stake_id)?;
        let settlement = self.settle(&stake, ctx.timestamp, Compounding::Forced)?;
        let outcome = self.commit_rewards(ctx, settlement, "compound")?;
        Ok(outcome.compounded)
    }

    /// Pay out and persist a claim or compound settlement
    fn commit_rewards(
        &mut self,
        ctx: &TxContext,
        settlement: Settlement,
        op: &'static str,
    ) -> Result<ClaimOutcome> {
        let book = self.book_after(&settlement)?;
        let owner = settlement.stake.owner;
        let stake_id = settlement.stake.id;
        let new_principal = settlement.stake.principal;
        let outcome = ClaimOutcome {
            stk: settlement.paid_stk,
            gov: settlement.paid_gov,
            compounded: settlement.compounded,
        };
        let staged = self.registry.stage(settlement.stake)?;

        self.pay(
            &owner,
            Payout {
                stk: outcome.stk,
                gov: outcome.gov,
            },
        )?;
        self.registry.commit(staged);
        self.book = book;
        self.guard.record_clock(ctx.timestamp);

        info!(
            op,
            stake_id = %stake_id,
            owner = %owner,
            stk = %outcome.stk,
            gov = %outcome.gov,
            compounded = %outcome.compounded,
            "Rewards realized"
        );

        let compounding = outcome.compounded > 0 || op == "compound";
        if compounding {
            self.events.emit(StakingEvent::AutoCompounded {
                stake_id,
                owner,
                amount: outcome.compounded,
                gov_reward: outcome.gov,
                new_principal,
                timestamp: ctx.timestamp,
            });
        } else {
            self.events.emit(StakingEvent::RewardsClaimed {
                stake_id,
                owner,
                stk_reward: outcome.stk,
                gov_reward: outcome.gov,
                timestamp: ctx.timestamp,
            });
        }

        Ok(outcome)
    }

    fn toggle_auto_compound(&mut self, ctx: &TxContext, stake_id: StakeId) -> Result<bool> {
        self.guard.ensure_active()?;
        self.guard.check_clock(ctx.timestamp)?;

        let mut stake = self.owned_stake(ctx, stake_id)?;
        stake.auto_compound = !stake.auto_compound;
        let enabled = stake.auto_compound;
        let owner = stake.owner;

        self.registry.replace(stake)?;
        self.guard.record_clock(ctx.timestamp);

        debug!(stake_id = %stake_id, enabled, "Auto-compound toggled");
        self.events.emit(StakingEvent::AutoCompoundToggled {
            stake_id,
            owner,
            enabled,
            timestamp: ctx.timestamp,
        });

        Ok(enabled)
    }

    fn emergency_withdraw(&mut self, ctx: &TxContext, stake_id: StakeId) -> Result<Amount> {
        self.guard.check_clock(ctx.timestamp)?;

        let stake = self.owned_stake(ctx, stake_id)?;
        self.guard.check_same_block(&stake.owner, ctx.block)?;

        // Forfeited amounts are informational; they never block the exit
        let forfeited = match self.preview(&stake, ctx.timestamp) {
            Ok(accrual) => accrual,
            Err(err) => {
                warn!(stake_id = %stake_id, "Forfeited rewards not computable: {}", err);
                Accrual {
                    stk: Amount::MAX,
                    gov: Amount::MAX,
                    elapsed: ctx.timestamp.saturating_sub(stake.last_accrual_at),
                }
            }
        };
        let amount = stake.principal;
        let closed = StakeRecord {
            principal: 0,
            accrued_stk: 0,
            accrued_gov: 0,
            last_accrual_at: ctx.timestamp.max(stake.last_accrual_at),
            active: false,
            ..stake
        };

        let owner = closed.owner;
        let staged = self.registry.stage(closed)?;

        self.pay(&owner, Payout { stk: amount, gov: 0 })?;
        self.registry.commit(staged);
        self.guard.record_clock(ctx.timestamp);

        info!(
            stake_id = %stake_id,
            owner = %owner,
            amount = %amount,
            forfeited_stk = %forfeited.stk,
            "Emergency withdrawal"
        );

        self.events.emit(StakingEvent::EmergencyWithdrawn {
            stake_id,
            owner,
            amount,
            forfeited_stk: forfeited.stk,
            forfeited_gov: forfeited.gov,
            timestamp: ctx.timestamp,
        });

        Ok(amount)
    }

    fn set_paused(&mut self, ctx: &TxContext, paused: bool) -> Result<()> {
        self.guard.check_clock(ctx.timestamp)?;
        if paused {
            self.guard.pause(&ctx.caller)?;
        } else {
            self.guard.unpause(&ctx.caller)?;
        }
        self.guard.record_clock(ctx.timestamp);

        info!(by = %ctx.caller, paused, "Pause state changed");
        self.events.emit(if paused {
            StakingEvent::Paused {
                by: ctx.caller,
                timestamp: ctx.timestamp,
            }
        } else {
            StakingEvent::Unpaused {
                by: ctx.caller,
                timestamp: ctx.timestamp,
            }
        });
        Ok(())
    }

    fn fund_reward_pool(&mut self, ctx: &TxContext, amount: Amount) -> Result<Amount> {
        self.guard.ensure_admin(&ctx.caller)?;
        self.guard.check_clock(ctx.timestamp)?;
        if amount == 0 {
            return Err(StakingError::InvalidAmount);
        }
        let new_balance = self
            .book
            .pool
            .checked_add(amount)
            .ok_or(StakingError::MathOverflow)?;

        self.transfer
            .transfer_in(&ctx.caller, amount)
            .map_err(transfer_failed)?;
        self.book.pool = new_balance;
        self.guard.record_clock(ctx.timestamp);

        info!(amount = %amount, new_balance = %new_balance, "Reward pool funded");
        self.events.emit(StakingEvent::RewardPoolFunded {
            from: ctx.caller,
            amount,
            new_balance,
            timestamp: ctx.timestamp,
        });

        Ok(new_balance)
    }
}
