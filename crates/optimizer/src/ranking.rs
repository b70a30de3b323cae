//! Ranking & Result Projection
//!
//! Loadouts are ordered by a total order so that output is reproducible:
//!
//! 1. weighted tier score, higher first
//! 2. unweighted tier sum, higher first
//! 3. unweighted stat sum, higher first
//! 4. piece identities in slot order, lower first

use core::cmp::Ordering;

use loadout_core::{ArmorPiece, ArmorSlot, PieceId, StatVector, StatWeights, TierVector};

/// Sort key of a complete loadout. `a > b` means `a` ranks ahead of `b`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct RankKey {
    pub score: u64,
    pub tier_total: u32,
    pub stat_total: u32,
    pub ids: [PieceId; ArmorSlot::COUNT],
}

impl RankKey {
    pub fn new(stats: &StatVector, weights: &StatWeights, ids: [PieceId; ArmorSlot::COUNT]) -> Self {
        let tiers = stats.tiers();
        Self {
            score: weights.score(&tiers),
            tier_total: tiers.total(),
            stat_total: stats.total(),
            ids,
        }
    }
}

impl Ord for RankKey {
    fn cmp(&self, other: &Self) -> Ordering {
        self.score
            .cmp(&other.score)
            .then(self.tier_total.cmp(&other.tier_total))
            .then(self.stat_total.cmp(&other.stat_total))
            .then_with(|| other.ids.cmp(&self.ids))
    }
}

impl PartialOrd for RankKey {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// A complete loadout found by the search, before projection.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct Ranked {
    pub key: RankKey,
    /// Pool indices in slot order.
    pub pieces: [usize; ArmorSlot::COUNT],
    pub stats: StatVector,
    pub exotics: u8,
}

impl Ord for Ranked {
    fn cmp(&self, other: &Self) -> Ordering {
        self.key.cmp(&other.key)
    }
}

impl PartialOrd for Ranked {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// A complete, scored loadout as handed back to callers.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LoadoutResult {
    /// One piece per slot, in [`ArmorSlot::ALL`] order.
    pub pieces: Vec<ArmorPiece>,
    /// Summed effective stats.
    pub stats: StatVector,
    pub tiers: TierVector,
    /// Unweighted tier sum, for display.
    pub total_tier: u32,
    /// Weighted score used for ranking.
    pub score: u64,
    pub exotic_count: u8,
}

impl LoadoutResult {
    pub fn piece_ids(&self) -> impl Iterator<Item = PieceId> + '_ {
        self.pieces.iter().map(|piece| piece.id)
    }

    pub fn piece(&self, slot: ArmorSlot) -> Option<&ArmorPiece> {
        self.pieces.iter().find(|piece| piece.slot == slot)
    }
}

/// Sorts best-first and keeps at most `limit` loadouts.
pub(crate) fn rank(mut loadouts: Vec<Ranked>, limit: usize) -> Vec<Ranked> {
    loadouts.sort_unstable_by(|a, b| b.cmp(a));
    loadouts.truncate(limit);
    loadouts
}

/// Converts ranked loadouts into the external result shape.
pub(crate) fn project(ranked: &[Ranked], pool: &[ArmorPiece]) -> Vec<LoadoutResult> {
    ranked
        .iter()
        .map(|loadout| {
            let tiers = loadout.stats.tiers();
            LoadoutResult {
                pieces: loadout.pieces.iter().map(|&i| pool[i].clone()).collect(),
                stats: loadout.stats,
                tiers,
                total_tier: tiers.total(),
                score: loadout.key.score,
                exotic_count: loadout.exotics,
            }
        })
        .collect()
}
