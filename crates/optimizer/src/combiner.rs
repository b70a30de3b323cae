//! Half-Search Combiner
//!
//! Splits the five slots into two groups and enumerates each group on its
//! own, so the search never walks the full five-way cross product.
//!
//! ```text
//! group A: Helmet × Gauntlets             → partials A (bucketed by exotics)
//! group B: Chest × Legs × ClassItem       → partials B (bucketed by exotics)
//!                                          ↓
//!                                  assembler: A × B
//! ```
//!
//! Partials are pruned after every slot extension, separately per exotic
//! count: a 0-exotic partial only competes with other 0-exotic partials,
//! since it combines with a different set of partials downstream.

use arrayvec::ArrayVec;
use loadout_core::{ArmorSlot, SlotSet, StatVector};

use crate::frontier::retain_non_dominated;
use crate::pool::SlotCandidates;

/// Upper bound on the slots of one group (the other group is non-empty).
pub(crate) const MAX_GROUP_SLOTS: usize = ArmorSlot::COUNT - 1;

/// A combination of one piece per slot of a group.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct Partial {
    /// Pool indices, in the group's canonical slot order.
    pub pieces: ArrayVec<usize, MAX_GROUP_SLOTS>,
    pub stats: StatVector,
    pub exotics: u8,
}

impl Partial {
    fn empty() -> Self {
        Self {
            pieces: ArrayVec::new(),
            stats: StatVector::ZERO,
            exotics: 0,
        }
    }
}

/// Surviving partials of one group, indexed by exotic count.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub(crate) struct GroupFrontier {
    pub slots: ArrayVec<ArmorSlot, MAX_GROUP_SLOTS>,
    pub buckets: Vec<Vec<Partial>>,
    /// Combinations generated before the final pruning pass.
    pub enumerated: usize,
}

impl GroupFrontier {
    pub fn len(&self) -> usize {
        self.buckets.iter().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.buckets.iter().all(Vec::is_empty)
    }

    /// Partials with exactly `exotics` exotic pieces.
    pub fn bucket(&self, exotics: u8) -> &[Partial] {
        self.buckets
            .get(usize::from(exotics))
            .map_or(&[], Vec::as_slice)
    }

    /// All partials, lowest exotic count first.
    pub fn iter(&self) -> impl Iterator<Item = &Partial> {
        self.buckets.iter().flatten()
    }
}

/// Enumerates one group's legal combinations and keeps the non-dominated
/// ones per exotic-count bucket.
pub(crate) fn search_group(
    group: SlotSet,
    candidates: &SlotCandidates,
    max_exotics: u8,
) -> GroupFrontier {
    let bucket_count = usize::from(max_exotics) + 1;
    let mut buckets: Vec<Vec<Partial>> = vec![Vec::new(); bucket_count];
    buckets[0].push(Partial::empty());

    let mut slots = ArrayVec::new();
    let mut enumerated = 0;

    for slot in group.slots() {
        slots.push(slot);

        let mut next: Vec<Vec<Partial>> = vec![Vec::new(); bucket_count];
        for partial in buckets.iter().flatten() {
            for candidate in candidates.get(slot) {
                let exotics = partial.exotics + u8::from(candidate.is_exotic);
                if exotics > max_exotics {
                    continue;
                }
                let mut pieces = partial.pieces.clone();
                pieces.push(candidate.index);
                next[usize::from(exotics)].push(Partial {
                    pieces,
                    stats: partial.stats + candidate.stats,
                    exotics,
                });
            }
        }

        enumerated = next.iter().map(Vec::len).sum();
        buckets = next
            .into_iter()
            .map(|bucket| retain_non_dominated(bucket, |p| &p.stats))
            .collect();
    }

    let frontier = GroupFrontier {
        slots,
        buckets,
        enumerated,
    };

    tracing::debug!(
        "combiner: group {:?} enumerated={} kept={}",
        frontier.slots,
        frontier.enumerated,
        frontier.len()
    );
    for (exotics, bucket) in frontier.buckets.iter().enumerate() {
        tracing::trace!("combiner:   bucket exotics={} partials={}", exotics, bucket.len());
    }

    frontier
}

/// Searches both groups of a partition, concurrently with `parallel`.
pub(crate) fn search_groups(
    groups: [SlotSet; 2],
    candidates: &SlotCandidates,
    max_exotics: u8,
) -> [GroupFrontier; 2] {
    #[cfg(feature = "parallel")]
    {
        search_groups_parallel(groups, candidates, max_exotics)
    }
    #[cfg(not(feature = "parallel"))]
    {
        groups.map(|group| search_group(group, candidates, max_exotics))
    }
}

#[cfg(any(feature = "parallel", test))]
pub(crate) fn search_groups_parallel(
    groups: [SlotSet; 2],
    candidates: &SlotCandidates,
    max_exotics: u8,
) -> [GroupFrontier; 2] {
    let [first, second] = groups;
    let (a, b) = rayon::join(
        || search_group(first, candidates, max_exotics),
        || search_group(second, candidates, max_exotics),
    );
    [a, b]
}
