//! Per-phase counters of one optimizer run.

use loadout_core::ArmorSlot;

/// How much each phase shrank (or grew) the search.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SearchReport {
    /// Pieces handed in by the caller.
    pub pool_size: usize,
    /// Usable pieces per slot before reduction.
    pub candidates_per_slot: [usize; ArmorSlot::COUNT],
    /// Pieces per slot that survived the reducer.
    pub reduced_per_slot: [usize; ArmorSlot::COUNT],
    /// Combinations generated per group, before the final pruning pass.
    pub enumerated_per_group: [usize; 2],
    /// Non-dominated partials per group.
    pub partials_per_group: [usize; 2],
    /// Cross-group pairs that were scored.
    pub pairs_evaluated: u64,
    /// Cross-group pairs skipped for exceeding the exotic budget.
    pub pairs_over_budget: u64,
    /// Cross-group pairs skipped because their score bound could not reach
    /// the kept results.
    pub pairs_bounded: u64,
    /// Loadouts returned.
    pub results: usize,
}

impl SearchReport {
    pub(crate) fn empty(pool_size: usize) -> Self {
        Self {
            pool_size,
            ..Self::default()
        }
    }
}
