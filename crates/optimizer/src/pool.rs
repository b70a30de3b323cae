//! Per-slot candidate lists built from the caller's armor pool.

use std::collections::HashSet;

use loadout_core::{ArmorPiece, ArmorSlot, PieceId, StatVector, ValidatedObjectives, ValidationError};

/// A piece as seen by the search: its pool position, its effective stats,
/// and whether it spends exotic budget.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct Candidate {
    pub index: usize,
    pub stats: StatVector,
    pub is_exotic: bool,
}

/// Candidates grouped by slot, in pool order within each slot.
#[derive(Clone, Debug, Default)]
pub(crate) struct SlotCandidates {
    slots: [Vec<Candidate>; ArmorSlot::COUNT],
}

impl SlotCandidates {
    /// Resolves effective stats for every usable piece.
    ///
    /// Exotics are dropped up front when the budget is zero; they could
    /// never be placed.
    pub fn build(pool: &[ArmorPiece], objectives: &ValidatedObjectives) -> Self {
        let mut slots: [Vec<Candidate>; ArmorSlot::COUNT] = Default::default();
        for (index, piece) in pool.iter().enumerate() {
            if piece.is_exotic && objectives.max_exotics == 0 {
                continue;
            }
            slots[piece.slot.index()].push(Candidate {
                index,
                stats: piece.effective_stats(objectives.assume_masterwork),
                is_exotic: piece.is_exotic,
            });
        }
        Self { slots }
    }

    pub fn get(&self, slot: ArmorSlot) -> &[Candidate] {
        &self.slots[slot.index()]
    }

    pub fn replace(&mut self, slot: ArmorSlot, candidates: Vec<Candidate>) {
        self.slots[slot.index()] = candidates;
    }

    pub fn counts(&self) -> [usize; ArmorSlot::COUNT] {
        core::array::from_fn(|i| self.slots[i].len())
    }

    /// First slot (in canonical order) without any candidate.
    pub fn first_empty_slot(&self) -> Option<ArmorSlot> {
        ArmorSlot::ALL
            .into_iter()
            .find(|slot| self.get(*slot).is_empty())
    }
}

/// Rejects pools that reuse an identity; ranking tie-breaks rely on
/// identities being unique.
pub(crate) fn check_unique_ids(pool: &[ArmorPiece]) -> Result<(), ValidationError> {
    let mut seen: HashSet<PieceId> = HashSet::with_capacity(pool.len());
    for piece in pool {
        if !seen.insert(piece.id) {
            return Err(ValidationError::DuplicatePiece(piece.id));
        }
    }
    Ok(())
}

/// First slot (in canonical order) the raw pool has no piece for.
pub(crate) fn first_uncovered_slot(pool: &[ArmorPiece]) -> Option<ArmorSlot> {
    ArmorSlot::ALL
        .into_iter()
        .find(|slot| !pool.iter().any(|piece| piece.slot == *slot))
}

#[cfg(test)]
mod tests {
    use super::*;
    use loadout_core::Objectives;

    fn piece(id: u64, slot: ArmorSlot) -> ArmorPiece {
        ArmorPiece::new(PieceId(id), slot, StatVector::splat(10))
    }

    #[test]
    fn groups_by_slot_and_applies_bonuses() {
        let pool = vec![
            piece(1, ArmorSlot::Helmet),
            piece(2, ArmorSlot::Legs),
            piece(3, ArmorSlot::Helmet).with_masterwork(),
        ];
        let objectives = Objectives::default()
            .with_assume_masterwork(true)
            .validate()
            .unwrap();
        let candidates = SlotCandidates::build(&pool, &objectives);

        let helmets = candidates.get(ArmorSlot::Helmet);
        assert_eq!(helmets.len(), 2);
        assert_eq!(helmets[0].stats, StatVector::splat(12));
        assert_eq!(helmets[1].stats, StatVector::splat(10));
        assert_eq!(candidates.counts(), [2, 0, 0, 1, 0]);
        assert_eq!(candidates.first_empty_slot(), Some(ArmorSlot::Gauntlets));
    }

    #[test]
    fn zero_budget_drops_exotics() {
        let pool = vec![
            piece(1, ArmorSlot::Chest).with_exotic(),
            piece(2, ArmorSlot::Chest),
        ];
        let objectives = Objectives::default().with_max_exotics(0).validate().unwrap();
        let candidates = SlotCandidates::build(&pool, &objectives);
        assert_eq!(candidates.get(ArmorSlot::Chest).len(), 1);
        assert_eq!(candidates.get(ArmorSlot::Chest)[0].index, 1);
    }

    #[test]
    fn duplicate_ids_are_rejected() {
        let pool = vec![piece(4, ArmorSlot::Helmet), piece(4, ArmorSlot::Chest)];
        assert_eq!(
            check_unique_ids(&pool),
            Err(ValidationError::DuplicatePiece(PieceId(4)))
        );
    }

    #[test]
    fn uncovered_slot_is_reported_in_canonical_order() {
        let pool = vec![piece(1, ArmorSlot::Helmet), piece(2, ArmorSlot::Gauntlets)];
        assert_eq!(first_uncovered_slot(&pool), Some(ArmorSlot::Chest));
    }
}
