//! Rank loadouts for a character.

use anyhow::{Context, Result};
use clap::Parser;
use loadout_content::{ArmorSource, ExoticLock};
use loadout_core::PieceId;
use optimizer::{Optimization, Optimizer};

use super::data::DataArgs;
use crate::config::CliConfig;
use crate::output::{self, OptimizeView, OutputFormat};

/// Rank loadouts for a character's armor pool
#[derive(Parser)]
pub struct Optimize {
    #[command(flatten)]
    data: DataArgs,

    /// Number of loadouts to return
    #[arg(short = 'n', long)]
    limit: Option<i64>,

    /// Only return loadouts wearing this exotic (piece id)
    #[arg(long, value_name = "ID")]
    lock: Option<u64>,

    /// Include per-phase search counts
    #[arg(long)]
    report: bool,

    /// Output format
    #[arg(short, long, value_enum, default_value = "text")]
    format: OutputFormat,
}

impl Optimize {
    pub fn execute(self, env: &CliConfig) -> Result<()> {
        let config = env.apply(self.data.load_config()?);
        let objectives = self.data.load_objectives()?;
        let source = self.data.load_armor()?;
        let limit = env.result_limit(self.limit, &config);

        let mut pool = source.pool(self.data.class);
        if let Some(id) = self.lock {
            pool = ExoticLock::new(PieceId(id))
                .apply(&pool)
                .context("Failed to apply exotic lock")?;
        }

        tracing::info!(
            class = %self.data.class,
            pieces = pool.len(),
            limit,
            "optimizing"
        );

        let Optimization { results, report } = Optimizer::new(config)
            .optimize_with_report(&objectives, &pool, limit)
            .context("Invalid optimization request")?;

        if results.is_empty() {
            tracing::warn!("no legal loadout for this pool");
        }

        let view = OptimizeView::new(&results, self.report.then_some(&report));
        match self.format {
            OutputFormat::Json => output::print_json(&view),
            OutputFormat::Text => {
                print!("{}", output::render_text(&view));
                Ok(())
            }
        }
    }
}
