//! # Print renderer-ready chart data for a strategy
//! pnl-chart chart --legs demos/legs.json --pretty
//!
//! # Inspect the derived price range and grid size
//! pnl-chart range --legs demos/legs.json

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::info;

use pnl_chart::chart;
use pnl_chart::payoff::{compute_strategy_pnl, derive_range, grid_len};
use pnl_chart::strategy::OptionLeg;

#[derive(Parser)]
#[command(name = "pnl-chart")]
#[command(about = "PNL profile engine for multi-leg options strategies")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compute the PNL profile and print chart datasets as JSON
    Chart {
        /// Path to a JSON file with the leg list
        #[arg(short, long)]
        legs: PathBuf,

        /// Pretty-print the output
        #[arg(long)]
        pretty: bool,
    },

    /// Print the derived underlying-price range and grid size
    Range {
        /// Path to a JSON file with the leg list
        #[arg(short, long)]
        legs: PathBuf,
    },
}

fn load_legs(path: &PathBuf) -> Result<Vec<OptionLeg>> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("failed to read leg file {}", path.display()))?;
    let legs: Vec<OptionLeg> = serde_json::from_str(&content)
        .with_context(|| format!("failed to parse legs from {}", path.display()))?;
    Ok(legs)
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Chart { legs, pretty } => {
            let legs = load_legs(&legs)?;
            info!(legs = legs.len(), "computing strategy PNL");

            chart::ensure_registered();
            let pnl = compute_strategy_pnl(&legs)?;
            info!(
                grid_points = pnl.prices.len(),
                min = %pnl.range.min,
                max = %pnl.range.max,
                "payoff grid derived"
            );

            let payload = chart::build_chart_payload(&legs, &pnl);
            let json = if pretty {
                serde_json::to_string_pretty(&payload)?
            } else {
                serde_json::to_string(&payload)?
            };
            println!("{json}");
        }
        Commands::Range { legs } => {
            let legs = load_legs(&legs)?;
            let range = derive_range(&legs)?;
            println!(
                "min: {}, max: {}, grid points: {}",
                range.min,
                range.max,
                grid_len(&range)
            );
        }
    }

    Ok(())
}
