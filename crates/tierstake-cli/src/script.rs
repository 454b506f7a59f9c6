//! Scripted scenarios replayed against an in-memory ledger

use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;
use std::sync::Arc;

use tierstake_engine::types::amount_str;
use tierstake_engine::{
    Address, Amount, EngineConfig, EventEnvelope, EventSink, GlobalState, InMemoryLedger,
    LockTier, StakeId, StakingEngine, TxContext, UserStats, UserStatsRecorder,
};

/// Scenario file
#[derive(Debug, Deserialize)]
pub struct Scenario {
    /// Overrides the configured admin
    #[serde(default)]
    pub admin: Option<Address>,

    /// Initial STK balances
    #[serde(default)]
    pub balances: BTreeMap<Address, Balance>,

    pub steps: Vec<Step>,
}

#[derive(Debug, Deserialize)]
#[serde(transparent)]
pub struct Balance(#[serde(with = "amount_str")] pub Amount);

/// One timestamped call
#[derive(Debug, Deserialize)]
pub struct Step {
    pub caller: Address,
    pub at: u64,
    /// Defaults to the step's position (1-based)
    #[serde(default)]
    pub block: Option<u64>,
    #[serde(flatten)]
    pub action: Action,
}

#[derive(Debug, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum Action {
    Stake {
        #[serde(with = "amount_str")]
        amount: Amount,
        tier: LockTier,
        #[serde(default)]
        is_lp: bool,
        #[serde(default)]
        auto_compound: bool,
    },
    Unstake {
        stake_id: u64,
        #[serde(default, with = "amount_str")]
        amount: Amount,
    },
    Claim {
        stake_id: u64,
    },
    Compound {
        stake_id: u64,
    },
    ToggleAutoCompound {
        stake_id: u64,
    },
    EmergencyWithdraw {
        stake_id: u64,
    },
    Fund {
        #[serde(with = "amount_str")]
        amount: Amount,
    },
    Pause,
    Unpause,
}

impl Scenario {
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("reading scenario {}", path.display()))?;
        serde_json::from_str(&content).with_context(|| format!("parsing scenario {}", path.display()))
    }
}

/// Prints every event as a JSON line
struct JsonLinePrinter;

impl EventSink for JsonLinePrinter {
    fn on_event(&self, envelope: &EventEnvelope) {
        match envelope.to_json() {
            Ok(line) => println!("{}", line),
            Err(e) => tracing::warn!("Unprintable event {}: {}", envelope.sequence, e),
        }
    }
}

/// Final state after a replay
#[derive(Debug, Serialize)]
pub struct Report {
    pub applied: usize,
    pub rejected: usize,
    pub global: GlobalState,
    pub wallets: Vec<WalletReport>,
}

#[derive(Debug, Serialize)]
pub struct WalletReport {
    pub address: Address,
    #[serde(with = "amount_str")]
    pub stk_balance: Amount,
    #[serde(with = "amount_str")]
    pub gov_balance: Amount,
    pub stats: Option<UserStats>,
}

/// Replay a scenario; with `strict` the first rejection aborts
pub fn run(mut config: EngineConfig, scenario: Scenario, strict: bool) -> anyhow::Result<Report> {
    if let Some(admin) = scenario.admin {
        config.admin = admin;
    }

    let mut ledger = InMemoryLedger::new();
    for (address, balance) in &scenario.balances {
        ledger.mint(*address, balance.0);
    }

    let engine = StakingEngine::new(config, ledger)?;
    let stats = Arc::new(UserStatsRecorder::new());
    engine.subscribe(Arc::new(JsonLinePrinter));
    engine.subscribe(stats.clone());

    let mut applied = 0;
    let mut rejected = 0;
    for (index, step) in scenario.steps.iter().enumerate() {
        let ctx = TxContext::new(step.caller, step.at, step.block.unwrap_or(index as u64 + 1));
        match apply(&engine, &ctx, &step.action) {
            Ok(()) => applied += 1,
            Err(e) if strict => {
                return Err(e).with_context(|| format!("step {} ({:?})", index + 1, step.action));
            }
            Err(e) => {
                rejected += 1;
                tracing::warn!(step = index + 1, "Rejected: {}", e);
            }
        }
    }

    let wallets = scenario
        .balances
        .keys()
        .map(|address| WalletReport {
            address: *address,
            stk_balance: engine.with_transfer(|l| l.stk_balance(address)),
            gov_balance: engine.with_transfer(|l| l.gov_balance(address)),
            stats: stats.get(address),
        })
        .collect();

    Ok(Report {
        applied,
        rejected,
        global: engine.global_state(),
        wallets,
    })
}

fn apply(
    engine: &StakingEngine<InMemoryLedger>,
    ctx: &TxContext,
    action: &Action,
) -> tierstake_engine::Result<()> {
    match *action {
        Action::Stake {
            amount,
            tier,
            is_lp,
            auto_compound,
        } => engine
            .open_stake(ctx, amount, tier, is_lp, auto_compound)
            .map(|_| ()),
        Action::Unstake { stake_id, amount } => {
            engine.close_stake(ctx, StakeId(stake_id), amount).map(|_| ())
        }
        Action::Claim { stake_id } => engine.claim(ctx, StakeId(stake_id)).map(|_| ()),
        Action::Compound { stake_id } => engine.compound(ctx, StakeId(stake_id)).map(|_| ()),
        Action::ToggleAutoCompound { stake_id } => engine
            .toggle_auto_compound(ctx, StakeId(stake_id))
            .map(|_| ()),
        Action::EmergencyWithdraw { stake_id } => engine
            .emergency_withdraw(ctx, StakeId(stake_id))
            .map(|_| ()),
        Action::Fund { amount } => engine.fund_reward_pool(ctx, amount).map(|_| ()),
        Action::Pause => engine.pause(ctx),
        Action::Unpause => engine.unpause(ctx),
    }
}
