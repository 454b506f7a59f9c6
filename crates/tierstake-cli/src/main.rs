//! Tierstake CLI
//!
//! Operator tool for the staking engine: APY tables, configuration and
//! scenario replay against an in-memory ledger.

mod script;

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tierstake_engine::constants::{DECIMALS, ONE_TOKEN, SECONDS_PER_DAY};
use tierstake_engine::{EngineConfig, LockTier, TvlOracle};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[derive(Parser)]
#[command(name = "tierstake")]
#[command(version)]
#[command(about = "Tierstake - tiered staking ledger & reward engine", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Engine configuration file (defaults apply when absent)
    #[arg(short, long, global = true, env = "TIERSTAKE_CONFIG")]
    config: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the APY of every tier at a given TVL
    Apy {
        /// Total value locked, in whole tokens
        #[arg(short, long, default_value = "0")]
        tvl: u64,

        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Configuration helpers
    Config {
        #[command(subcommand)]
        action: ConfigCommands,
    },

    /// Replay a JSON scenario and print events and final state
    Simulate {
        /// Scenario file
        scenario: PathBuf,

        /// Abort on the first rejected step
        #[arg(long)]
        strict: bool,
    },
}

#[derive(Subcommand)]
enum ConfigCommands {
    /// Print the effective configuration as TOML
    Show,
    /// Validate the configuration file
    Check,
}

fn init_logging(verbose: bool) {
    let env_filter = if verbose {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"))
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    };

    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(true)
                .with_thread_ids(false)
                .with_file(false),
        )
        .init();
}

fn load_config(path: Option<&PathBuf>) -> anyhow::Result<EngineConfig> {
    match path {
        Some(path) => {
            tracing::debug!("Loading config from {:?}", path);
            Ok(EngineConfig::load(path)?)
        }
        None => Ok(EngineConfig::default()),
    }
}

/// Render base units as a decimal token amount
fn format_tokens(amount: u128) -> String {
    let whole = amount / ONE_TOKEN;
    let frac = amount % ONE_TOKEN;
    if frac == 0 {
        return whole.to_string();
    }
    let digits = format!("{:0width$}", frac, width = DECIMALS as usize);
    format!("{}.{}", whole, digits.trim_end_matches('0'))
}

fn format_bps(bps: u64) -> String {
    format!("{}.{:02}%", bps / 100, bps % 100)
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = load_config(cli.config.as_ref())?;

    match cli.command {
        Commands::Apy { tvl, json } => {
            let total = tvl as u128 * ONE_TOKEN;
            let oracle = TvlOracle::new(config.tvl.clone(), config.base_apy_bps);

            if json {
                let rows = LockTier::ALL
                    .iter()
                    .map(|tier| {
                        Ok(serde_json::json!({
                            "tier": tier,
                            "lock_days": tier.lock_duration() / SECONDS_PER_DAY,
                            "multiplier_bps": oracle.lock_multiplier(*tier),
                            "apy_bps": oracle.current_apy(*tier, total)?,
                        }))
                    })
                    .collect::<tierstake_engine::Result<Vec<_>>>()?;
                let out = serde_json::json!({
                    "tvl": total.to_string(),
                    "tvl_bonus_bps": oracle.tvl_bonus(total),
                    "tiers": rows,
                });
                println!("{}", serde_json::to_string_pretty(&out)?);
            } else {
                println!("TVL:       {} STK", format_tokens(total));
                println!("TVL bonus: {}", format_bps(oracle.tvl_bonus(total)));
                println!();
                println!("{:<10} {:>9} {:>11} {:>9}", "Tier", "Lock", "Multiplier", "APY");
                for tier in LockTier::ALL {
                    println!(
                        "{:<10} {:>8}d {:>10.1}x {:>9}",
                        tier.name(),
                        tier.lock_duration() / SECONDS_PER_DAY,
                        oracle.lock_multiplier(tier) as f64 / 10_000.0,
                        format_bps(oracle.current_apy(tier, total)?),
                    );
                }
            }
        }

        Commands::Config { action } => match action {
            ConfigCommands::Show => {
                print!("{}", config.to_toml_string()?);
            }
            ConfigCommands::Check => {
                config.validate()?;
                println!("Configuration OK");
                println!("Admin: {}", config.admin);
                println!("Base APY: {}", format_bps(config.base_apy_bps));
                println!(
                    "Max stake per wallet: {} STK",
                    format_tokens(config.max_stake_per_wallet)
                );
            }
        },

        Commands::Simulate { scenario, strict } => {
            tracing::info!("Replaying scenario {:?}", scenario);
            let loaded = script::Scenario::load(&scenario)?;
            let report = script::run(config, loaded, strict)?;
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
    }

    Ok(())
}
