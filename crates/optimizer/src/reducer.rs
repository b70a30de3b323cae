//! Candidate Reducer
//!
//! Drops pieces that can never appear in an optimal loadout: within one slot,
//! a piece is removed when another piece of the same exotic-class beats it on
//! every effective stat (and strictly on at least one). Exotics and
//! non-exotics are never compared with each other, because an exotic spends
//! the shared exotic budget and a non-exotic does not.

use loadout_core::ArmorSlot;

use crate::frontier::retain_non_dominated;
use crate::pool::{Candidate, SlotCandidates};

/// Reduces one slot's candidates to its non-dominated pieces.
///
/// Survivors keep pool order within their exotic-class (legendaries first).
pub(crate) fn reduce_slot(candidates: &[Candidate]) -> Vec<Candidate> {
    let (exotic, legendary): (Vec<Candidate>, Vec<Candidate>) =
        candidates.iter().partition(|c| c.is_exotic);

    let mut reduced = restore_pool_order(retain_non_dominated(legendary, |c| &c.stats));
    reduced.extend(restore_pool_order(retain_non_dominated(exotic, |c| &c.stats)));
    reduced
}

/// Reduces every slot in place.
pub(crate) fn reduce_all(candidates: &mut SlotCandidates) {
    for slot in ArmorSlot::ALL {
        let before = candidates.get(slot).len();
        let reduced = reduce_slot(candidates.get(slot));
        tracing::trace!("reducer: {} {} -> {}", slot, before, reduced.len());
        candidates.replace(slot, reduced);
    }
}

fn restore_pool_order(mut candidates: Vec<Candidate>) -> Vec<Candidate> {
    candidates.sort_by_key(|c| c.index);
    candidates
}
