//! Adjustment Tester CLI Tool
//!
//! Command-line tool for exercising the rating engine against the
//! third-party reference calculator.
//!
//! Usage:
//!   cargo run --bin adjustment-tester -- --help
//!   cargo run --bin adjustment-tester rate --ptis 50,40,30,23 --score "6-2,2-6,6-3"
//!   cargo run --bin adjustment-tester compare --ptis 50,40,30,23 --score "6-2,2-6,6-3"
//!   cargo run --bin adjustment-tester convert --pti 30

use anyhow::{anyhow, Result};
use clap::{Args, Parser, Subcommand};
use pti_engine::config::EngineConfig;
use pti_engine::engine::RatingEngine;
use pti_engine::rating::{mu_to_pti, pti_to_mu};
use pti_engine::types::{MatchInput, PlayerEntry, StrategyKind};

#[derive(Parser)]
#[command(name = "adjustment-tester")]
#[command(about = "Rate a completed doubles match and print the adjustment as JSON")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "warn")]
    log_level: String,
}

/// Inputs describing one completed match.
#[derive(Args)]
struct MatchArgs {
    /// Display ratings in slot order: player,partner,opp1,opp2
    #[arg(long, value_delimiter = ',', num_args = 4)]
    ptis: Vec<f64>,

    /// Experience labels in slot order (defaults to 30+ for all)
    #[arg(long, value_delimiter = ',', num_args = 4)]
    tiers: Option<Vec<String>>,

    /// Set scores, e.g. "6-2,2-6,6-3"
    #[arg(long)]
    score: String,
}

impl MatchArgs {
    fn to_input(&self) -> MatchInput {
        let tier = |slot: usize| -> PlayerEntry {
            let label = self
                .tiers
                .as_ref()
                .map(|tiers| tiers[slot].as_str())
                .unwrap_or("30+");
            PlayerEntry::from_label(self.ptis[slot], label)
        };
        MatchInput::new(tier(0), tier(1), tier(2), tier(3), self.score.clone())
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Rate one match with a single strategy
    Rate {
        #[command(flatten)]
        match_args: MatchArgs,

        /// Strategy name (legacy or elo)
        #[arg(long, default_value = "legacy")]
        strategy: String,

        /// Base K-factor for the elo strategy
        #[arg(long, default_value = "4.0")]
        base_k: f64,
    },
    /// Rate one match with both strategies and print them side by side
    Compare {
        #[command(flatten)]
        match_args: MatchArgs,

        /// Base K-factor for the elo strategy
        #[arg(long, default_value = "4.0")]
        base_k: f64,
    },
    /// Convert a rating between its display and performance forms
    Convert {
        /// Display rating to convert to a performance value
        #[arg(long, conflicts_with = "mu")]
        pti: Option<f64>,

        /// Performance value to convert to a display rating
        #[arg(long)]
        mu: Option<f64>,
    },
}

/// Initialize structured logging with the configured level
fn init_logging(log_level: &str) -> Result<()> {
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::try_new(log_level)?)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;
    Ok(())
}

fn build_engine(strategy: StrategyKind, base_k: f64) -> Result<RatingEngine> {
    RatingEngine::new(EngineConfig { strategy, base_k })
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(&cli.log_level)?;

    match cli.command {
        Commands::Rate {
            match_args,
            strategy,
            base_k,
        } => {
            let kind = StrategyKind::from_name(&strategy)
                .ok_or_else(|| anyhow!("Unknown strategy name: {}", strategy))?;
            let engine = build_engine(kind, base_k)?;
            let result = engine.rate_match(&match_args.to_input());
            println!("{}", serde_json::to_string_pretty(&result)?);
        }
        Commands::Compare { match_args, base_k } => {
            let input = match_args.to_input();
            let comparison: Vec<serde_json::Value> =
                [StrategyKind::Legacy, StrategyKind::Elo]
                    .into_iter()
                    .map(|kind| -> Result<serde_json::Value> {
                        let engine = build_engine(kind, base_k)?;
                        Ok(serde_json::json!({
                            "strategy": engine.strategy_name(),
                            "config": engine.strategy_config(),
                            "result": engine.rate_match(&input),
                        }))
                    })
                    .collect::<Result<_>>()?;
            println!("{}", serde_json::to_string_pretty(&comparison)?);
        }
        Commands::Convert { pti, mu } => {
            let conversion = match (pti, mu) {
                (Some(pti), None) => serde_json::json!({ "pti": pti, "mu": pti_to_mu(pti) }),
                (None, Some(mu)) => serde_json::json!({ "mu": mu, "pti": mu_to_pti(mu) }),
                _ => return Err(anyhow!("Provide exactly one of --pti or --mu")),
            };
            println!("{}", serde_json::to_string_pretty(&conversion)?);
        }
    }

    Ok(())
}
