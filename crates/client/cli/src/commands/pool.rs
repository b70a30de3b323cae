//! List a character's armor pool.

use anyhow::Result;
use clap::Parser;
use loadout_content::ArmorSource;
use loadout_core::ArmorSlot;

use super::data::DataArgs;
use crate::output::{self, OutputFormat, PieceView};

/// List the armor pool a character would be optimized over
#[derive(Parser)]
pub struct Pool {
    #[command(flatten)]
    data: DataArgs,

    /// Effective stats include the masterwork bonus on every piece
    #[arg(long)]
    assume_masterwork: bool,

    /// Output format
    #[arg(short, long, value_enum, default_value = "text")]
    format: OutputFormat,
}

impl Pool {
    pub fn execute(self) -> Result<()> {
        let source = self.data.load_armor()?;
        let mut pool = source.pool(self.data.class);
        pool.sort_by_key(|piece| (piece.slot, piece.id));

        let views: Vec<_> = pool
            .iter()
            .map(|piece| PieceView::new(piece, self.assume_masterwork))
            .collect();

        match self.format {
            OutputFormat::Json => output::print_json(&views),
            OutputFormat::Text => {
                println!("{} armor: {} pieces", self.data.class, pool.len());
                for slot in ArmorSlot::ALL {
                    let in_slot: Vec<_> = views.iter().filter(|v| v.slot == slot).collect();
                    println!("\n{} ({})", slot, in_slot.len());
                    for view in in_slot {
                        println!("  {}", output::piece_line(view));
                    }
                }
                Ok(())
            }
        }
    }
}
