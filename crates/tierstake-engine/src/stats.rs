//! Per-wallet activity statistics built from the event stream

use parking_lot::RwLock;
use serde::Serialize;
use std::collections::HashMap;

use crate::events::{EventEnvelope, EventSink, StakingEvent};
use crate::types::{Address, Amount, Timestamp};

/// Running totals for one wallet
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct UserStats {
    pub address: Address,
    pub total_staked: Amount,
    pub total_unstaked: Amount,
    pub total_stk_rewards: Amount,
    pub total_gov_rewards: Amount,
    pub total_compounded: Amount,
    pub transaction_count: u64,
    pub first_stake_at: Option<Timestamp>,
    pub last_activity_at: Option<Timestamp>,
}

/// Event sink maintaining [`UserStats`] for every wallet
#[derive(Default)]
pub struct UserStatsRecorder {
    stats: RwLock<HashMap<Address, UserStats>>,
}

impl UserStatsRecorder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stats of one wallet, if it ever interacted
    pub fn get(&self, address: &Address) -> Option<UserStats> {
        self.stats.read().get(address).cloned()
    }

    /// Wallets ordered by total STK rewards, highest first
    pub fn leaderboard(&self, limit: usize) -> Vec<UserStats> {
        let mut all: Vec<UserStats> = self.stats.read().values().cloned().collect();
        all.sort_by(|a, b| {
            b.total_stk_rewards
                .cmp(&a.total_stk_rewards)
                .then(a.address.cmp(&b.address))
        });
        all.truncate(limit);
        all
    }

    pub fn wallet_count(&self) -> usize {
        self.stats.read().len()
    }
}

impl EventSink for UserStatsRecorder {
    fn on_event(&self, envelope: &EventEnvelope) {
        let event = &envelope.event;
        // Admin-level events carry no wallet activity
        if matches!(
            event,
            StakingEvent::Paused { .. }
                | StakingEvent::Unpaused { .. }
                | StakingEvent::RewardPoolFunded { .. }
        ) {
            return;
        }

        let address = event.account();
        let mut stats = self.stats.write();
        let entry = stats.entry(address).or_insert_with(|| UserStats {
            address,
            ..Default::default()
        });

        match event {
            StakingEvent::Staked {
                amount, timestamp, ..
            } => {
                entry.total_staked = entry.total_staked.saturating_add(*amount);
                entry.first_stake_at.get_or_insert(*timestamp);
            }
            StakingEvent::Unstaked {
                amount,
                stk_reward,
                gov_reward,
                ..
            } => {
                entry.total_unstaked = entry.total_unstaked.saturating_add(*amount);
                entry.total_stk_rewards = entry.total_stk_rewards.saturating_add(*stk_reward);
                entry.total_gov_rewards = entry.total_gov_rewards.saturating_add(*gov_reward);
            }
            StakingEvent::RewardsClaimed {
                stk_reward,
                gov_reward,
                ..
            } => {
                entry.total_stk_rewards = entry.total_stk_rewards.saturating_add(*stk_reward);
                entry.total_gov_rewards = entry.total_gov_rewards.saturating_add(*gov_reward);
            }
            StakingEvent::AutoCompounded {
                amount, gov_reward, ..
            } => {
                entry.total_compounded = entry.total_compounded.saturating_add(*amount);
                entry.total_stk_rewards = entry.total_stk_rewards.saturating_add(*amount);
                entry.total_gov_rewards = entry.total_gov_rewards.saturating_add(*gov_reward);
            }
            StakingEvent::EmergencyWithdrawn { amount, .. } => {
                entry.total_unstaked = entry.total_unstaked.saturating_add(*amount);
            }
            _ => {}
        }

        entry.transaction_count += 1;
        entry.last_activity_at = Some(event.timestamp());
    }
}
