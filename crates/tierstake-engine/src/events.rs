//! Engine events
//!
//! Every successful mutating call emits its events synchronously, after the
//! mutation commits and while the engine's write lock is still held. Sinks
//! therefore observe events exactly once and in mutation order.

use parking_lot::RwLock;
use serde::Serialize;
use std::sync::Arc;

use crate::tier::LockTier;
use crate::types::{Address, Amount, StakeId, Timestamp};

/// Event payloads
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "type")]
pub enum StakingEvent {
    /// New stake opened
    Staked {
        stake_id: StakeId,
        owner: Address,
        amount: Amount,
        tier: LockTier,
        is_lp: bool,
        auto_compound: bool,
        timestamp: Timestamp,
    },
    /// Principal withdrawn, rewards paid
    Unstaked {
        stake_id: StakeId,
        owner: Address,
        amount: Amount,
        stk_reward: Amount,
        gov_reward: Amount,
        timestamp: Timestamp,
    },
    /// Rewards paid without touching principal
    RewardsClaimed {
        stake_id: StakeId,
        owner: Address,
        stk_reward: Amount,
        gov_reward: Amount,
        timestamp: Timestamp,
    },
    /// STK rewards folded into principal
    AutoCompounded {
        stake_id: StakeId,
        owner: Address,
        amount: Amount,
        gov_reward: Amount,
        new_principal: Amount,
        timestamp: Timestamp,
    },
    /// Auto-compound flag flipped
    AutoCompoundToggled {
        stake_id: StakeId,
        owner: Address,
        enabled: bool,
        timestamp: Timestamp,
    },
    /// Principal returned, rewards forfeited
    EmergencyWithdrawn {
        stake_id: StakeId,
        owner: Address,
        amount: Amount,
        forfeited_stk: Amount,
        forfeited_gov: Amount,
        timestamp: Timestamp,
    },
    /// Reward pool topped up
    RewardPoolFunded {
        from: Address,
        amount: Amount,
        new_balance: Amount,
        timestamp: Timestamp,
    },
    Paused {
        by: Address,
        timestamp: Timestamp,
    },
    Unpaused {
        by: Address,
        timestamp: Timestamp,
    },
}

impl StakingEvent {
    /// Event name
    pub fn name(&self) -> &'static str {
        match self {
            Self::Staked { .. } => "Staked",
            Self::Unstaked { .. } => "Unstaked",
            Self::RewardsClaimed { .. } => "RewardsClaimed",
            Self::AutoCompounded { .. } => "AutoCompounded",
            Self::AutoCompoundToggled { .. } => "AutoCompoundToggled",
            Self::EmergencyWithdrawn { .. } => "EmergencyWithdrawn",
            Self::RewardPoolFunded { .. } => "RewardPoolFunded",
            Self::Paused { .. } => "Paused",
            Self::Unpaused { .. } => "Unpaused",
        }
    }

    /// Wallet the event concerns
    pub fn account(&self) -> Address {
        match self {
            Self::Staked { owner, .. }
            | Self::Unstaked { owner, .. }
            | Self::RewardsClaimed { owner, .. }
            | Self::AutoCompounded { owner, .. }
            | Self::AutoCompoundToggled { owner, .. }
            | Self::EmergencyWithdrawn { owner, .. } => *owner,
            Self::RewardPoolFunded { from, .. } => *from,
            Self::Paused { by, .. } | Self::Unpaused { by, .. } => *by,
        }
    }

    pub fn timestamp(&self) -> Timestamp {
        match self {
            Self::Staked { timestamp, .. }
            | Self::Unstaked { timestamp, .. }
            | Self::RewardsClaimed { timestamp, .. }
            | Self::AutoCompounded { timestamp, .. }
            | Self::AutoCompoundToggled { timestamp, .. }
            | Self::EmergencyWithdrawn { timestamp, .. }
            | Self::RewardPoolFunded { timestamp, .. }
            | Self::Paused { timestamp, .. }
            | Self::Unpaused { timestamp, .. } => *timestamp,
        }
    }
}

/// Event with its position in the engine's event stream
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct EventEnvelope {
    /// Strictly increasing, starting at 1
    pub sequence: u64,
    #[serde(flatten)]
    pub event: StakingEvent,
}

impl EventEnvelope {
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

/// Observer of engine events.
///
/// `on_event` is called synchronously while the engine's write lock is held.
/// A sink must not call back into the [`StakingEngine`](crate::StakingEngine)
/// that emitted the event, not even a read query: the lock is not reentrant
/// and the call deadlocks. Hand events off (channel, queue) if they trigger
/// further engine calls.
pub trait EventSink: Send + Sync {
    fn on_event(&self, envelope: &EventEnvelope);
}

/// Fan-out to registered sinks
#[derive(Default)]
pub struct EventBus {
    sinks: Vec<Arc<dyn EventSink>>,
    sequence: u64,
}

impl EventBus {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subscribe(&mut self, sink: Arc<dyn EventSink>) {
        self.sinks.push(sink);
    }

    pub fn subscriber_count(&self) -> usize {
        self.sinks.len()
    }

    /// Sequence number of the last emitted event
    pub fn last_sequence(&self) -> u64 {
        self.sequence
    }

    /// Deliver one event to every sink
    pub fn emit(&mut self, event: StakingEvent) {
        self.sequence += 1;
        let envelope = EventEnvelope {
            sequence: self.sequence,
            event,
        };
        for sink in &self.sinks {
            sink.on_event(&envelope);
        }
    }
}

/// Ordered in-memory event history
#[derive(Default)]
pub struct EventLog {
    events: RwLock<Vec<EventEnvelope>>,
}

impl EventLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// All events, oldest first
    pub fn events(&self) -> Vec<EventEnvelope> {
        self.events.read().clone()
    }

    /// Events concerning one wallet, oldest first
    pub fn history_for(&self, account: &Address) -> Vec<EventEnvelope> {
        self.events
            .read()
            .iter()
            .filter(|e| e.event.account() == *account)
            .cloned()
            .collect()
    }

    /// Events with the given name
    pub fn named(&self, name: &str) -> Vec<EventEnvelope> {
        self.events
            .read()
            .iter()
            .filter(|e| e.event.name() == name)
            .cloned()
            .collect()
    }

    pub fn len(&self) -> usize {
        self.events.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.read().is_empty()
    }
}

impl EventSink for EventLog {
    fn on_event(&self, envelope: &EventEnvelope) {
        self.events.write().push(envelope.clone());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn paused(by: u8, timestamp: Timestamp) -> StakingEvent {
        StakingEvent::Paused {
            by: Address::repeat(by),
            timestamp,
        }
    }

    #[test]
    fn test_sequence_increases() {
        let log = Arc::new(EventLog::new());
        let mut bus = EventBus::new();
        bus.subscribe(log.clone());

        bus.emit(paused(1, 10));
        bus.emit(paused(2, 11));

        let events = log.events();
        assert_eq!(events.len(), 2);
        assert_eq!(events[0].sequence, 1);
        assert_eq!(events[1].sequence, 2);
        assert_eq!(bus.last_sequence(), 2);
    }

    #[test]
    fn test_every_sink_sees_event_once() {
        let a = Arc::new(EventLog::new());
        let b = Arc::new(EventLog::new());
        let mut bus = EventBus::new();
        bus.subscribe(a.clone());
        bus.subscribe(b.clone());

        bus.emit(paused(1, 10));

        assert_eq!(a.len(), 1);
        assert_eq!(b.len(), 1);
        assert_eq!(bus.subscriber_count(), 2);
    }

    #[test]
    fn test_history_filter() {
        let log = EventLog::new();
        log.on_event(&EventEnvelope { sequence: 1, event: paused(1, 10) });
        log.on_event(&EventEnvelope { sequence: 2, event: paused(2, 11) });

        assert_eq!(log.history_for(&Address::repeat(1)).len(), 1);
        assert_eq!(log.named("Paused").len(), 2);
    }

    #[test]
    fn test_envelope_json_is_flat() {
        let envelope = EventEnvelope {
            sequence: 3,
            event: paused(1, 10),
        };
        let json = envelope.to_json().unwrap();
        assert!(json.contains("\"type\":\"Paused\""));
        assert!(json.contains("\"sequence\":3"));
    }
}
