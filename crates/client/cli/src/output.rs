//! Result rendering: JSON views and plain text.

use std::fmt::Write as _;

use anyhow::Result;
use loadout_core::{ArmorPiece, ArmorSlot, PieceId, StatKind, StatVector};
use optimizer::{LoadoutResult, SearchReport};
use serde::Serialize;

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    /// Human-readable summary
    Text,
    /// Pretty-printed JSON
    Json,
}

pub fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// One stat line: value and tier.
#[derive(Clone, Debug, Serialize)]
pub struct StatView {
    pub stat: StatKind,
    pub value: u16,
    pub tier: u8,
}

fn stat_views(stats: &StatVector) -> Vec<StatView> {
    let tiers = stats.tiers();
    stats
        .iter()
        .map(|(stat, value)| StatView {
            stat,
            value,
            tier: tiers.get(stat),
        })
        .collect()
}

#[derive(Clone, Debug, Serialize)]
pub struct PieceView {
    pub id: PieceId,
    pub slot: ArmorSlot,
    pub exotic: bool,
    pub masterworked: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub artifice: Option<StatKind>,
    /// Stats after masterwork and artifice bonuses.
    pub stats: StatVector,
}

impl PieceView {
    pub fn new(piece: &ArmorPiece, assume_masterwork: bool) -> Self {
        Self {
            id: piece.id,
            slot: piece.slot,
            exotic: piece.is_exotic,
            masterworked: piece.has_masterwork_bonus,
            artifice: piece.artifice_stat,
            stats: piece.effective_stats(assume_masterwork),
        }
    }
}

#[derive(Clone, Debug, Serialize)]
pub struct LoadoutView {
    pub rank: usize,
    pub score: u64,
    pub total_tier: u32,
    pub exotic_count: u8,
    pub stats: Vec<StatView>,
    pub pieces: Vec<PieceRef>,
}

#[derive(Clone, Debug, Serialize)]
pub struct PieceRef {
    pub slot: ArmorSlot,
    pub id: PieceId,
    pub exotic: bool,
}

impl LoadoutView {
    fn new(rank: usize, result: &LoadoutResult) -> Self {
        Self {
            rank,
            score: result.score,
            total_tier: result.total_tier,
            exotic_count: result.exotic_count,
            stats: stat_views(&result.stats),
            pieces: result
                .pieces
                .iter()
                .map(|piece| PieceRef {
                    slot: piece.slot,
                    id: piece.id,
                    exotic: piece.is_exotic,
                })
                .collect(),
        }
    }
}

#[derive(Clone, Debug, Serialize)]
pub struct ReportView {
    pub pool_size: usize,
    pub candidates_per_slot: [usize; ArmorSlot::COUNT],
    pub reduced_per_slot: [usize; ArmorSlot::COUNT],
    pub enumerated_per_group: [usize; 2],
    pub partials_per_group: [usize; 2],
    pub pairs_evaluated: u64,
    pub pairs_over_budget: u64,
    pub pairs_bounded: u64,
}

impl From<&SearchReport> for ReportView {
    fn from(report: &SearchReport) -> Self {
        Self {
            pool_size: report.pool_size,
            candidates_per_slot: report.candidates_per_slot,
            reduced_per_slot: report.reduced_per_slot,
            enumerated_per_group: report.enumerated_per_group,
            partials_per_group: report.partials_per_group,
            pairs_evaluated: report.pairs_evaluated,
            pairs_over_budget: report.pairs_over_budget,
            pairs_bounded: report.pairs_bounded,
        }
    }
}

#[derive(Clone, Debug, Serialize)]
pub struct OptimizeView {
    pub loadouts: Vec<LoadoutView>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub report: Option<ReportView>,
}

impl OptimizeView {
    pub fn new(results: &[LoadoutResult], report: Option<&SearchReport>) -> Self {
        Self {
            loadouts: results
                .iter()
                .enumerate()
                .map(|(i, result)| LoadoutView::new(i + 1, result))
                .collect(),
            report: report.map(ReportView::from),
        }
    }
}

/// Short column header for a stat.
fn abbrev(stat: StatKind) -> &'static str {
    match stat {
        StatKind::Mobility => "mob",
        StatKind::Resilience => "res",
        StatKind::Recovery => "rec",
        StatKind::Discipline => "dis",
        StatKind::Intellect => "int",
        StatKind::Strength => "str",
    }
}

pub fn piece_line(view: &PieceView) -> String {
    let mut line = format!("{:<22}", view.id.to_string());
    for (stat, value) in view.stats.iter() {
        let _ = write!(line, " {} {:>3}", abbrev(stat), value);
    }
    if view.exotic {
        line.push_str("  exotic");
    }
    if view.masterworked {
        line.push_str("  masterworked");
    }
    if let Some(stat) = view.artifice {
        let _ = write!(line, "  artifice(+{})", abbrev(stat));
    }
    line
}

pub fn render_text(view: &OptimizeView) -> String {
    let mut out = String::new();

    if view.loadouts.is_empty() {
        out.push_str("No legal loadout found.\n");
    }

    for loadout in &view.loadouts {
        let _ = writeln!(
            out,
            "#{:<3} score {:>4}  tiers {:>2}  exotics {}",
            loadout.rank, loadout.score, loadout.total_tier, loadout.exotic_count
        );

        let mut stats = String::from("     ");
        for stat in &loadout.stats {
            let _ = write!(stats, " {} {:>3} (T{:<2})", abbrev(stat.stat), stat.value, stat.tier);
        }
        let _ = writeln!(out, "{}", stats.trim_end());

        for piece in &loadout.pieces {
            let slot: &str = piece.slot.as_ref();
            let marker = if piece.exotic { "  exotic" } else { "" };
            let _ = writeln!(out, "      {:<10} {}{}", slot, piece.id, marker);
        }
        out.push('\n');
    }

    if let Some(report) = &view.report {
        let _ = writeln!(out, "search report");
        let _ = writeln!(out, "  pool size            {}", report.pool_size);
        let _ = writeln!(out, "  candidates per slot  {:?}", report.candidates_per_slot);
        let _ = writeln!(out, "  after reduction      {:?}", report.reduced_per_slot);
        let _ = writeln!(out, "  enumerated per group {:?}", report.enumerated_per_group);
        let _ = writeln!(out, "  partials per group   {:?}", report.partials_per_group);
        let _ = writeln!(out, "  pairs evaluated      {}", report.pairs_evaluated);
        let _ = writeln!(out, "  pairs over budget    {}", report.pairs_over_budget);
        let _ = writeln!(out, "  pairs bounded        {}", report.pairs_bounded);
    }

    out
}
