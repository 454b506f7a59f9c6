//! Integration tests for the staking engine
//!
//! End-to-end flows through the public API: lock tiers, guards, auto-compound,
//! pause handling, pool exhaustion and the event stream.

use std::sync::Arc;
use tierstake_engine::constants::*;
use tierstake_engine::{
    Address, Amount, EngineConfig, EventLog, InMemoryLedger, LockTier, RewardCalculator,
    StakeId, StakingEngine, StakingError, StakingEvent, TxContext, UserStatsRecorder,
};

const ADMIN: Address = Address::repeat(0xad);
const ALICE: Address = Address::repeat(0x01);
const BOB: Address = Address::repeat(0x02);

const DAY: u64 = SECONDS_PER_DAY;

fn tokens(n: u128) -> Amount {
    n * ONE_TOKEN
}

fn engine_with_pool(pool: Amount) -> (StakingEngine<InMemoryLedger>, Arc<EventLog>) {
    let mut ledger = InMemoryLedger::new();
    ledger.mint(ADMIN, tokens(10_000_000));
    ledger.mint(ALICE, tokens(2_000_000));
    ledger.mint(BOB, tokens(2_000_000));

    let engine = StakingEngine::new(EngineConfig::with_admin(ADMIN), ledger).unwrap();
    if pool > 0 {
        engine.fund_reward_pool(&at(ADMIN, 0, 0), pool).unwrap();
    }

    let log = Arc::new(EventLog::new());
    engine.subscribe(log.clone());
    (engine, log)
}

fn setup() -> (StakingEngine<InMemoryLedger>, Arc<EventLog>) {
    engine_with_pool(tokens(1_000_000))
}

fn at(caller: Address, timestamp: u64, block: u64) -> TxContext {
    TxContext::new(caller, timestamp, block)
}

fn stk(engine: &StakingEngine<InMemoryLedger>, who: &Address) -> Amount {
    engine.with_transfer(|l| l.stk_balance(who))
}

fn gov(engine: &StakingEngine<InMemoryLedger>, who: &Address) -> Amount {
    engine.with_transfer(|l| l.gov_balance(who))
}

mod reward_tests {
    use super::*;

    #[test]
    fn test_flexible_one_year_with_tvl_bonus() {
        let (engine, _) = setup();
        assert_eq!(engine.tvl_bonus(), 12_000);

        let id = engine
            .open_stake(&at(ALICE, 0, 1), tokens(10_000), LockTier::Flexible, false, false)
            .unwrap();
        let outcome = engine.claim(&at(ALICE, SECONDS_PER_YEAR, 2), id).unwrap();

        assert_eq!(outcome.stk, tokens(1_200));
        assert_eq!(outcome.gov, tokens(120));
        assert_eq!(outcome.compounded, 0);
        assert_eq!(stk(&engine, &ALICE), tokens(2_000_000 - 10_000 + 1_200));
        assert_eq!(gov(&engine, &ALICE), tokens(120));
    }

    #[test]
    fn test_lock90_earns_three_times_flexible() {
        let (engine, _) = setup();
        let flex = engine
            .open_stake(&at(ALICE, 0, 1), tokens(10_000), LockTier::Flexible, false, false)
            .unwrap();
        let locked = engine
            .open_stake(&at(BOB, 0, 1), tokens(10_000), LockTier::Lock90, false, false)
            .unwrap();

        let flex_pending = engine.pending_rewards(flex, SECONDS_PER_YEAR).unwrap();
        let locked_pending = engine.pending_rewards(locked, SECONDS_PER_YEAR).unwrap();
        assert_eq!(flex_pending.stk, tokens(1_200));
        assert_eq!(locked_pending.stk, 3 * flex_pending.stk);
        assert_eq!(
            engine.current_apy(LockTier::Lock90).unwrap(),
            3 * engine.current_apy(LockTier::Flexible).unwrap()
        );
        assert_eq!(engine.lock_multiplier(LockTier::Lock90), 30_000);
    }

    #[test]
    fn test_tvl_bonus_steps_down() {
        let (engine, _) = setup();
        engine
            .open_stake(&at(ALICE, 0, 1), tokens(99_999), LockTier::Flexible, false, false)
            .unwrap();
        assert_eq!(engine.tvl_bonus(), 12_000);

        engine
            .open_stake(&at(ALICE, 0, 2), tokens(1), LockTier::Flexible, false, false)
            .unwrap();
        assert_eq!(engine.tvl_bonus(), 11_000);

        engine
            .open_stake(&at(BOB, 0, 3), tokens(900_000), LockTier::Flexible, false, false)
            .unwrap();
        assert_eq!(engine.global_state().total_staked, tokens(1_000_000));
        assert_eq!(engine.tvl_bonus(), 10_000);
    }

    #[test]
    fn test_queries_are_idempotent() {
        let (engine, _) = setup();
        engine
            .open_stake(&at(ALICE, 0, 1), tokens(500), LockTier::Lock60, false, false)
            .unwrap();

        let apy = engine.current_apy(LockTier::Lock60).unwrap();
        let summary = engine.get_user_stake(&ALICE);
        for _ in 0..3 {
            assert_eq!(engine.current_apy(LockTier::Lock60), Ok(apy));
            assert_eq!(engine.get_user_stake(&ALICE), summary);
        }
        assert_eq!(summary.total_principal, tokens(500));
        assert_eq!(summary.next_unlock_at, Some(60 * DAY));
    }

    #[test]
    fn test_multi_billion_stake_over_two_years() {
        let config = EngineConfig {
            max_stake_per_wallet: tokens(10_000_000_000),
            ..EngineConfig::with_admin(ADMIN)
        };
        let mut ledger = InMemoryLedger::new();
        ledger.mint(ADMIN, tokens(2_000_000_000));
        ledger.mint(ALICE, tokens(2_000_000_000));
        let engine = StakingEngine::new(config, ledger).unwrap();
        engine.fund_reward_pool(&at(ADMIN, 0, 0), tokens(2_000_000_000)).unwrap();

        let id = engine
            .open_stake(&at(ALICE, 0, 1), tokens(2_000_000_000), LockTier::Lock90, false, false)
            .unwrap();
        assert_eq!(engine.tvl_bonus(), 10_000);

        // 30% a year on two billion tokens, twice
        let two_years = 2 * SECONDS_PER_YEAR;
        let pending = engine.pending_rewards(id, two_years).unwrap();
        assert_eq!(pending.stk, tokens(1_200_000_000));
        assert_eq!(pending.gov, tokens(120_000_000));

        let claimed = engine.claim(&at(ALICE, two_years, 2), id).unwrap();
        assert_eq!(claimed.stk, tokens(1_200_000_000));
        assert_eq!(claimed.gov, tokens(120_000_000));

        let closed = engine.close_stake(&at(ALICE, two_years, 3), id, 0).unwrap();
        assert_eq!(closed.principal_returned, tokens(2_000_000_000));
        assert_eq!(stk(&engine, &ALICE), tokens(3_200_000_000));
        assert_eq!(gov(&engine, &ALICE), tokens(120_000_000));
        assert_eq!(engine.global_state().total_staked, 0);
    }
}

mod lock_tests {
    use super::*;

    #[test]
    fn test_lock30_close_before_and_after_unlock() {
        let (engine, _) = setup();
        let id = engine
            .open_stake(&at(ALICE, 0, 1), tokens(1_000), LockTier::Lock30, false, false)
            .unwrap();

        assert_eq!(
            engine.close_stake(&at(ALICE, 10 * DAY, 2), id, 0),
            Err(StakingError::StillLocked {
                unlock_at: 30 * DAY,
                now: 10 * DAY
            })
        );

        let before = stk(&engine, &ALICE);
        let outcome = engine.close_stake(&at(ALICE, 31 * DAY, 3), id, 0).unwrap();
        assert_eq!(outcome.principal_returned, tokens(1_000));
        assert!(outcome.stk_reward > 0);
        assert_eq!(
            stk(&engine, &ALICE),
            before + tokens(1_000) + outcome.stk_reward
        );
        assert!(!engine.get_stake(id).unwrap().active);
    }

    #[test]
    fn test_round_trip_returns_principal_exactly() {
        let (engine, _) = setup();
        let before = stk(&engine, &ALICE);
        let id = engine
            .open_stake(&at(ALICE, 500, 1), tokens(7), LockTier::Flexible, false, false)
            .unwrap();

        let outcome = engine.close_stake(&at(ALICE, 500, 2), id, 0).unwrap();
        assert_eq!(outcome.principal_returned, tokens(7));
        assert_eq!(outcome.stk_reward, 0);
        assert_eq!(outcome.gov_reward, 0);
        assert_eq!(stk(&engine, &ALICE), before);
    }

    #[test]
    fn test_same_block_open_and_close() {
        let (engine, _) = setup();
        let id = engine
            .open_stake(&at(ALICE, 100, 5), tokens(1), LockTier::Flexible, false, false)
            .unwrap();
        assert_eq!(
            engine.close_stake(&at(ALICE, 100, 5), id, 0),
            Err(StakingError::SameBlockOperation { block: 5 })
        );
        assert!(engine.close_stake(&at(ALICE, 100, 6), id, 0).is_ok());
    }

    #[test]
    fn test_emergency_withdraw_forfeits_rewards() {
        let (engine, log) = setup();
        let before = stk(&engine, &ALICE);
        let pool = engine.global_state().reward_pool_balance;
        let id = engine
            .open_stake(&at(ALICE, 0, 1), tokens(5_000), LockTier::Lock90, false, false)
            .unwrap();

        let returned = engine.emergency_withdraw(&at(ALICE, 10 * DAY, 2), id).unwrap();
        assert_eq!(returned, tokens(5_000));
        assert_eq!(stk(&engine, &ALICE), before);
        assert_eq!(gov(&engine, &ALICE), 0);

        let state = engine.global_state();
        assert_eq!(state.total_staked, 0);
        assert_eq!(state.reward_pool_balance, pool);
        assert!(!engine.get_stake(id).unwrap().active);

        match &log.named("EmergencyWithdrawn")[0].event {
            StakingEvent::EmergencyWithdrawn { forfeited_stk, .. } => assert!(*forfeited_stk > 0),
            other => panic!("unexpected event {:?}", other),
        }
    }
}

mod guard_tests {
    use super::*;

    #[test]
    fn test_wallet_cap() {
        let (engine, _) = setup();
        engine
            .open_stake(&at(ALICE, 0, 1), tokens(600_000), LockTier::Flexible, false, false)
            .unwrap();

        let result = engine.open_stake(
            &at(ALICE, 0, 2),
            tokens(400_001),
            LockTier::Lock30,
            false,
            false,
        );
        assert!(matches!(result, Err(StakingError::ExceedsMaxStake { .. })));

        engine
            .open_stake(&at(ALICE, 0, 3), tokens(400_000), LockTier::Lock30, false, false)
            .unwrap();
        assert_eq!(engine.get_user_stake(&ALICE).total_principal, MAX_STAKE_PER_WALLET);
    }

    #[test]
    fn test_cap_frees_up_after_close() {
        let (engine, _) = setup();
        let id = engine
            .open_stake(&at(ALICE, 0, 1), MAX_STAKE_PER_WALLET, LockTier::Flexible, false, false)
            .unwrap();
        engine
            .close_stake(&at(ALICE, 0, 2), id, tokens(1))
            .unwrap();
        assert!(engine
            .open_stake(&at(ALICE, 0, 3), tokens(1), LockTier::Flexible, false, false)
            .is_ok());
    }

    #[test]
    fn test_pause_blocks_user_mutations() {
        let (engine, log) = setup();
        let id = engine
            .open_stake(&at(ALICE, 0, 1), tokens(100), LockTier::Flexible, false, false)
            .unwrap();

        assert_eq!(
            engine.pause(&at(ALICE, 10, 2)),
            Err(StakingError::Unauthorized(ALICE))
        );
        engine.pause(&at(ADMIN, 10, 2)).unwrap();
        assert!(engine.is_paused());
        assert_eq!(engine.pause(&at(ADMIN, 11, 3)), Err(StakingError::ContractPaused));

        let paused = Err(StakingError::ContractPaused);
        assert_eq!(
            engine
                .open_stake(&at(BOB, 20, 4), tokens(1), LockTier::Flexible, false, false)
                .map(|_| ()),
            paused
        );
        assert_eq!(engine.close_stake(&at(ALICE, 20, 4), id, 0).map(|_| ()), paused);
        assert_eq!(engine.claim(&at(ALICE, 20, 4), id).map(|_| ()), paused);
        assert_eq!(engine.compound(&at(ALICE, 20, 4), id).map(|_| ()), paused);
        assert_eq!(engine.toggle_auto_compound(&at(ALICE, 20, 4), id).map(|_| ()), paused);

        // Admin can still top up the pool
        assert!(engine.fund_reward_pool(&at(ADMIN, 30, 5), tokens(1)).is_ok());

        engine.unpause(&at(ADMIN, 40, 6)).unwrap();
        assert_eq!(engine.unpause(&at(ADMIN, 41, 7)), Err(StakingError::NotPaused));
        assert!(engine.claim(&at(ALICE, 50, 8), id).is_ok());

        let names: Vec<_> = log.events().iter().map(|e| e.event.name()).collect();
        assert_eq!(
            names,
            vec!["Staked", "Paused", "RewardPoolFunded", "Unpaused", "RewardsClaimed"]
        );
    }

    #[test]
    fn test_emergency_withdraw_while_paused_and_locked() {
        let (engine, _) = setup();
        let id = engine
            .open_stake(&at(ALICE, 0, 1), tokens(100), LockTier::Lock90, false, false)
            .unwrap();
        engine.pause(&at(ADMIN, DAY, 2)).unwrap();

        assert_eq!(
            engine.emergency_withdraw(&at(BOB, DAY, 3), id),
            Err(StakingError::Unauthorized(BOB))
        );
        assert_eq!(engine.emergency_withdraw(&at(ALICE, DAY, 3), id), Ok(tokens(100)));
        assert!(matches!(
            engine.emergency_withdraw(&at(ALICE, DAY, 4), id),
            Err(StakingError::InsufficientStake { .. })
        ));
    }

    #[test]
    fn test_pool_exhaustion_leaves_state_untouched() {
        let (engine, log) = engine_with_pool(tokens(1));
        let id = engine
            .open_stake(&at(ALICE, 0, 1), tokens(10_000), LockTier::Flexible, false, false)
            .unwrap();

        let state = engine.global_state();
        let stake = engine.get_stake(id).unwrap();
        let balance = stk(&engine, &ALICE);
        let events = log.len();

        let result = engine.claim(&at(ALICE, SECONDS_PER_YEAR, 2), id);
        assert_eq!(
            result,
            Err(StakingError::InsufficientRewardPool {
                required: tokens(1_320),
                available: tokens(1)
            })
        );
        assert!(matches!(
            engine.close_stake(&at(ALICE, SECONDS_PER_YEAR, 2), id, 0),
            Err(StakingError::InsufficientRewardPool { .. })
        ));

        assert_eq!(engine.global_state(), state);
        assert_eq!(engine.get_stake(id).unwrap(), stake);
        assert_eq!(stk(&engine, &ALICE), balance);
        assert_eq!(log.len(), events);

        // Principal is still reachable
        assert_eq!(
            engine.emergency_withdraw(&at(ALICE, SECONDS_PER_YEAR, 2), id),
            Ok(tokens(10_000))
        );
    }
}

mod compound_tests {
    use super::*;

    #[test]
    fn test_auto_compound_after_interval() {
        let (engine, log) = setup();
        let id = engine
            .open_stake(&at(ALICE, 0, 1), tokens(10_000), LockTier::Flexible, false, true)
            .unwrap();
        let balance = stk(&engine, &ALICE);

        let expected = RewardCalculator::default()
            .rewards_for(tokens(10_000), LockTier::Flexible, 12_000, 8 * DAY)
            .unwrap();
        let outcome = engine.claim(&at(ALICE, 8 * DAY, 2), id).unwrap();

        assert_eq!(outcome.compounded, expected.stk);
        assert_eq!(outcome.stk, 0);
        assert_eq!(outcome.gov, expected.gov);
        assert_eq!(
            engine.get_stake(id).unwrap().principal,
            tokens(10_000) + expected.stk
        );
        assert_eq!(stk(&engine, &ALICE), balance);
        assert_eq!(gov(&engine, &ALICE), expected.gov);
        assert_eq!(
            engine.global_state().total_staked,
            tokens(10_000) + expected.stk
        );
        assert_eq!(log.named("AutoCompounded").len(), 1);
        assert!(log.named("RewardsClaimed").is_empty());
    }

    #[test]
    fn test_auto_compound_before_interval_pays_out() {
        let (engine, _) = setup();
        let id = engine
            .open_stake(&at(ALICE, 0, 1), tokens(10_000), LockTier::Flexible, false, true)
            .unwrap();

        let outcome = engine.claim(&at(ALICE, 6 * DAY, 2), id).unwrap();
        assert_eq!(outcome.compounded, 0);
        assert!(outcome.stk > 0);
        assert_eq!(engine.get_stake(id).unwrap().principal, tokens(10_000));
    }

    #[test]
    fn test_compounding_ignores_wallet_cap() {
        let (engine, _) = setup();
        let id = engine
            .open_stake(&at(ALICE, 0, 1), MAX_STAKE_PER_WALLET, LockTier::Lock90, false, true)
            .unwrap();

        let outcome = engine.claim(&at(ALICE, 30 * DAY, 2), id).unwrap();
        assert!(outcome.compounded > 0);
        assert!(engine.get_user_stake(&ALICE).total_principal > MAX_STAKE_PER_WALLET);
    }

    #[test]
    fn test_close_emits_compound_then_unstake() {
        let (engine, log) = setup();
        let id = engine
            .open_stake(&at(ALICE, 0, 1), tokens(1_000), LockTier::Flexible, false, true)
            .unwrap();

        let outcome = engine.close_stake(&at(ALICE, 10 * DAY, 2), id, 0).unwrap();
        assert!(outcome.compounded > 0);
        assert_eq!(outcome.principal_returned, tokens(1_000) + outcome.compounded);
        assert_eq!(outcome.stk_reward, 0);

        let names: Vec<_> = log.events().iter().map(|e| e.event.name()).collect();
        assert_eq!(names, vec!["Staked", "AutoCompounded", "Unstaked"]);
        let sequences: Vec<_> = log.events().iter().map(|e| e.sequence).collect();
        assert!(sequences.windows(2).all(|w| w[1] == w[0] + 1));
    }

    #[test]
    fn test_explicit_compound_with_flag_off() {
        let (engine, _) = setup();
        let id = engine
            .open_stake(&at(ALICE, 0, 1), tokens(1_000), LockTier::Lock30, false, false)
            .unwrap();

        let folded = engine.compound(&at(ALICE, DAY, 2), id).unwrap();
        assert!(folded > 0);
        assert_eq!(engine.global_state().total_rewards_paid_stk, folded);
        assert!(engine.verify_invariants());
    }
}

mod history_tests {
    use super::*;

    #[test]
    fn test_user_stats_follow_events() {
        let (engine, log) = setup();
        let stats = Arc::new(UserStatsRecorder::new());
        engine.subscribe(stats.clone());

        let id = engine
            .open_stake(&at(ALICE, 100, 1), tokens(1_000), LockTier::Flexible, false, false)
            .unwrap();
        let claimed = engine.claim(&at(ALICE, 100 + 30 * DAY, 2), id).unwrap();
        let closed = engine.close_stake(&at(ALICE, 100 + 60 * DAY, 3), id, 0).unwrap();

        let alice = stats.get(&ALICE).unwrap();
        assert_eq!(alice.total_staked, tokens(1_000));
        assert_eq!(alice.total_unstaked, tokens(1_000));
        assert_eq!(alice.total_stk_rewards, claimed.stk + closed.stk_reward);
        assert_eq!(alice.transaction_count, 3);
        assert_eq!(alice.first_stake_at, Some(100));
        assert_eq!(log.history_for(&ALICE).len(), 3);
        assert!(stats.get(&BOB).is_none());
    }

    #[test]
    fn test_multiple_stakes_per_wallet() {
        let (engine, _) = setup();
        let a = engine
            .open_stake(&at(ALICE, 0, 1), tokens(10), LockTier::Lock90, false, false)
            .unwrap();
        let b = engine
            .open_stake(&at(ALICE, 0, 2), tokens(20), LockTier::Flexible, true, false)
            .unwrap();
        assert_eq!((a, b), (StakeId(1), StakeId(2)));

        engine.close_stake(&at(ALICE, DAY, 3), b, 0).unwrap();

        let all = engine.get_all_user_stakes(&ALICE);
        assert_eq!(all.len(), 2);
        assert!(all[1].is_lp);
        let summary = engine.get_user_stake(&ALICE);
        assert_eq!(summary.active_stakes, 1);
        assert_eq!(summary.total_principal, tokens(10));

        let pending = engine.pending_rewards_for(&ALICE, 2 * DAY).unwrap();
        assert_eq!(pending, engine.pending_rewards(a, 2 * DAY).unwrap());
    }
}
