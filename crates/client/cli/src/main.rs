//! Command-line front end for the armor loadout optimizer.
//!
//! Run with: `loadout optimize --class hunter`

mod commands;
mod config;
mod dirs;
mod logging;
mod output;

use anyhow::Result;
use clap::Parser;
use commands::{Optimize, Pool};
use config::CliConfig;

/// Find the best armor loadouts for a character
#[derive(Parser)]
#[command(name = "loadout")]
#[command(about = "Armor loadout optimizer", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Parser)]
enum Command {
    /// Rank loadouts for a character's armor pool
    Optimize(Optimize),

    /// List the armor pool a character would be optimized over
    Pool(Pool),
}

fn main() -> Result<()> {
    // Load .env file if it exists (silently ignore if not found)
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();
    let config = CliConfig::from_env();

    // Keep the file writer alive until the command finishes
    let _guard = logging::setup_logging(&config)?;
    config.warn_ignored();

    match cli.command {
        Command::Optimize(cmd) => cmd.execute(&config),
        Command::Pool(cmd) => cmd.execute(),
    }
}
