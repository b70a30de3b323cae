//! Loadout Assembler
//!
//! Merges the two groups' partials into complete loadouts. Pairs whose
//! combined exotic count exceeds the budget are skipped bucket-by-bucket
//! without being scored. Every scored loadout is offered to a bounded
//! collector ordered by the full [`RankKey`], so the cutoff never changes
//! which loadouts end up in the requested top N.
//!
//! Second-group partials are visited best-score first. Since
//! `tier(x + y) <= tier(x) + tier(y) + 1` for every stat,
//!
//! ```text
//! score(a + b) <= score(a) + score(b) + Σ weights
//! ```
//!
//! and once that bound falls below the worst kept score, the rest of the
//! bucket is skipped.

use core::cmp::Reverse;
use std::collections::BinaryHeap;

use loadout_core::{ArmorPiece, ArmorSlot, PieceId, StatWeights};

use crate::combiner::{GroupFrontier, Partial};
use crate::ranking::{RankKey, Ranked};

/// Keeps the best `capacity` loadouts seen so far.
#[derive(Debug)]
pub(crate) struct TopK {
    capacity: usize,
    // Min-heap: the root is the worst kept loadout.
    heap: BinaryHeap<Reverse<Ranked>>,
}

impl TopK {
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity,
            heap: BinaryHeap::with_capacity(capacity.min(4096)),
        }
    }

    /// Returns true if a loadout with this key would currently be kept.
    pub fn admits(&self, key: &RankKey) -> bool {
        if self.capacity == 0 {
            return false;
        }
        if self.heap.len() < self.capacity {
            return true;
        }
        self.heap
            .peek()
            .is_some_and(|Reverse(worst)| *key > worst.key)
    }

    /// Returns true if no loadout scoring at most `score` can be kept.
    pub fn rejects_below(&self, score: u64) -> bool {
        if self.capacity == 0 {
            return true;
        }
        self.heap.len() == self.capacity
            && self
                .heap
                .peek()
                .is_some_and(|Reverse(worst)| score < worst.key.score)
    }

    pub fn offer(&mut self, loadout: Ranked) {
        if !self.admits(&loadout.key) {
            return;
        }
        if self.heap.len() == self.capacity {
            self.heap.pop();
        }
        self.heap.push(Reverse(loadout));
    }

    /// Folds another collector's loadouts into this one.
    pub fn merge(mut self, other: TopK) -> Self {
        for Reverse(loadout) in other.heap {
            self.offer(loadout);
        }
        self
    }

    pub fn into_vec(self) -> Vec<Ranked> {
        self.heap.into_iter().map(|Reverse(loadout)| loadout).collect()
    }
}

/// Pair counters from a merge pass.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub(crate) struct MergeCounts {
    pub pairs_evaluated: u64,
    pub pairs_over_budget: u64,
    /// Pairs skipped because their score bound could not reach the top-K.
    pub pairs_bounded: u64,
}

impl MergeCounts {
    pub fn total(&self) -> u64 {
        self.pairs_evaluated + self.pairs_over_budget + self.pairs_bounded
    }
}

impl core::ops::Add for MergeCounts {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self {
            pairs_evaluated: self.pairs_evaluated + other.pairs_evaluated,
            pairs_over_budget: self.pairs_over_budget + other.pairs_over_budget,
            pairs_bounded: self.pairs_bounded + other.pairs_bounded,
        }
    }
}

/// Where each slot's piece lives: which group, and which position in that
/// group's partial.
#[derive(Clone, Copy, Debug)]
struct SlotLayout([(usize, usize); ArmorSlot::COUNT]);

impl SlotLayout {
    fn new(groups: [&GroupFrontier; 2]) -> Self {
        let mut layout = [(0, 0); ArmorSlot::COUNT];
        for (group, frontier) in groups.iter().enumerate() {
            for (position, slot) in frontier.slots.iter().enumerate() {
                layout[slot.index()] = (group, position);
            }
        }
        Self(layout)
    }

    fn pieces(&self, partials: [&Partial; 2]) -> [usize; ArmorSlot::COUNT] {
        self.0
            .map(|(group, position)| partials[group].pieces[position])
    }
}

/// A second-group partial with its own weighted score.
type Scored<'a> = (u64, &'a Partial);

/// Shared read-only inputs of a merge pass.
pub(crate) struct Assembler<'a> {
    pool: &'a [ArmorPiece],
    weights: StatWeights,
    max_exotics: u8,
    capacity: usize,
    first: &'a GroupFrontier,
    /// Second-group buckets by exotic count, best score first.
    second: Vec<Vec<Scored<'a>>>,
    layout: SlotLayout,
}

impl<'a> Assembler<'a> {
    pub fn new(
        pool: &'a [ArmorPiece],
        weights: StatWeights,
        max_exotics: u8,
        capacity: usize,
        groups: [&'a GroupFrontier; 2],
    ) -> Self {
        let second = (0..=max_exotics)
            .map(|exotics| {
                let mut bucket: Vec<Scored<'a>> = groups[1]
                    .bucket(exotics)
                    .iter()
                    .map(|partial| (weights.score(&partial.stats.tiers()), partial))
                    .collect();
                bucket.sort_by(|x, y| y.0.cmp(&x.0));
                bucket
            })
            .collect();

        Self {
            pool,
            weights,
            max_exotics,
            capacity,
            first: groups[0],
            second,
            layout: SlotLayout::new(groups),
        }
    }

    /// Merges a slice of first-group partials against every compatible
    /// second-group partial.
    fn merge_shard<'p>(
        &self,
        shard: impl IntoIterator<Item = &'p Partial>,
    ) -> (TopK, MergeCounts) {
        let mut top = TopK::new(self.capacity);
        let mut counts = MergeCounts::default();
        let slack = self.weights.total();

        for a in shard {
            let a_score = self.weights.score(&a.stats.tiers());
            let budget_left = self.max_exotics.saturating_sub(a.exotics);
            for (exotics, bucket) in self.second.iter().enumerate() {
                if exotics > usize::from(budget_left) {
                    counts.pairs_over_budget += bucket.len() as u64;
                    continue;
                }
                for (position, &(b_score, b)) in bucket.iter().enumerate() {
                    if top.rejects_below(a_score + b_score + slack) {
                        counts.pairs_bounded += (bucket.len() - position) as u64;
                        break;
                    }
                    counts.pairs_evaluated += 1;
                    let stats = a.stats + b.stats;
                    let pieces = self.layout.pieces([a, b]);
                    let ids: [PieceId; ArmorSlot::COUNT] = pieces.map(|i| self.pool[i].id);
                    let key = RankKey::new(&stats, &self.weights, ids);
                    if top.admits(&key) {
                        top.offer(Ranked {
                            key,
                            pieces,
                            stats,
                            exotics: a.exotics + b.exotics,
                        });
                    }
                }
            }
        }

        (top, counts)
    }

    /// Runs the merge, sharded over the rayon pool with `parallel`.
    pub fn assemble(&self) -> (TopK, MergeCounts) {
        #[cfg(feature = "parallel")]
        {
            self.assemble_parallel()
        }
        #[cfg(not(feature = "parallel"))]
        {
            self.assemble_sequential()
        }
    }

    /// Runs the full merge on the calling thread.
    pub fn assemble_sequential(&self) -> (TopK, MergeCounts) {
        self.merge_shard(self.first.iter())
    }

    /// Runs the merge sharded over the first group's partials, one bounded
    /// collector per shard, then folds the shards together.
    #[cfg(any(feature = "parallel", test))]
    pub fn assemble_parallel(&self) -> (TopK, MergeCounts) {
        use rayon::prelude::*;

        const SHARD_SIZE: usize = 64;

        if self.first.len() <= SHARD_SIZE {
            return self.assemble_sequential();
        }

        let outer: Vec<&Partial> = self.first.iter().collect();
        outer
            .par_chunks(SHARD_SIZE)
            .map(|shard| self.merge_shard(shard.iter().copied()))
            .reduce(
                || (TopK::new(self.capacity), MergeCounts::default()),
                |(top_a, counts_a), (top_b, counts_b)| {
                    (top_a.merge(top_b), counts_a + counts_b)
                },
            )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::combiner::{search_group, search_groups_parallel};
    use crate::pool::SlotCandidates;
    use crate::ranking::rank;
    use crate::testing::random_pool;
    use loadout_core::{Objectives, SlotSet, StatVector, ValidatedObjectives};

    fn ranked(score: u64, id: u64) -> Ranked {
        Ranked {
            key: RankKey {
                score,
                tier_total: 0,
                stat_total: 0,
                ids: [PieceId(id); ArmorSlot::COUNT],
            },
            pieces: [0; ArmorSlot::COUNT],
            stats: StatVector::ZERO,
            exotics: 0,
        }
    }

    fn scores(top: TopK) -> Vec<u64> {
        let mut scores: Vec<_> = top.into_vec().iter().map(|r| r.key.score).collect();
        scores.sort_unstable_by(|a, b| b.cmp(a));
        scores
    }

    #[test]
    fn keeps_only_the_best() {
        let mut top = TopK::new(3);
        for score in [5, 1, 9, 3, 7, 2] {
            top.offer(ranked(score, score));
        }
        assert_eq!(scores(top), vec![9, 7, 5]);
    }

    #[test]
    fn ties_resolve_by_identity() {
        let mut top = TopK::new(1);
        top.offer(ranked(5, 9));
        top.offer(ranked(5, 2));
        top.offer(ranked(5, 4));
        let kept = top.into_vec();
        assert_eq!(kept[0].key.ids[0], PieceId(2));
    }

    #[test]
    fn merge_matches_single_collector() {
        let mut left = TopK::new(2);
        let mut right = TopK::new(2);
        for score in [4, 8] {
            left.offer(ranked(score, score));
        }
        for score in [6, 1] {
            right.offer(ranked(score, score));
        }
        assert_eq!(scores(left.merge(right)), vec![8, 6]);
    }

    #[test]
    fn zero_capacity_keeps_nothing() {
        let mut top = TopK::new(0);
        top.offer(ranked(1, 1));
        assert!(top.into_vec().is_empty());
    }

    fn objectives(weights: [i32; 6], max_exotics: i32) -> ValidatedObjectives {
        Objectives::new(weights)
            .with_max_exotics(max_exotics)
            .validate()
            .unwrap()
    }

    /// Every budget-compatible pair, ranked without any collector.
    fn exhaustive(
        pool: &[ArmorPiece],
        objectives: &ValidatedObjectives,
        groups: [&GroupFrontier; 2],
        limit: usize,
    ) -> Vec<Ranked> {
        let layout = SlotLayout::new(groups);
        let mut all = Vec::new();
        for a in groups[0].iter() {
            for b in groups[1].iter() {
                if a.exotics + b.exotics > objectives.max_exotics {
                    continue;
                }
                let stats = a.stats + b.stats;
                let pieces = layout.pieces([a, b]);
                let ids = pieces.map(|i| pool[i].id);
                all.push(Ranked {
                    key: RankKey::new(&stats, &objectives.weights, ids),
                    pieces,
                    stats,
                    exotics: a.exotics + b.exotics,
                });
            }
        }
        rank(all, limit)
    }

    fn piece(id: u64, slot: ArmorSlot, stats: [u16; 6]) -> ArmorPiece {
        ArmorPiece::new(PieceId(id), slot, StatVector::new(stats))
    }

    #[test]
    fn score_bound_skips_hopeless_pairs() {
        let mut pool = vec![
            piece(1, ArmorSlot::Helmet, [10, 0, 0, 0, 0, 0]),
            piece(2, ArmorSlot::Gauntlets, [10, 0, 0, 0, 0, 0]),
            piece(3, ArmorSlot::Chest, [0; 6]),
            piece(4, ArmorSlot::ClassItem, [0; 6]),
            piece(10, ArmorSlot::Legs, [60, 0, 0, 0, 0, 0]),
        ];
        // Mutually non-dominated, all worthless for mobility.
        for k in 0..=20u16 {
            pool.push(piece(11 + u64::from(k), ArmorSlot::Legs, [0, k, 20 - k, 0, 0, 0]));
        }

        let objectives = objectives([1, 0, 0, 0, 0, 0], 0);
        let candidates = SlotCandidates::build(&pool, &objectives);
        let first = search_group(SlotSet::HELMET | SlotSet::GAUNTLETS, &candidates, 0);
        let second = search_group(
            SlotSet::CHEST | SlotSet::LEGS | SlotSet::CLASS_ITEM,
            &candidates,
            0,
        );
        assert_eq!(second.len(), 22);

        let assembler = Assembler::new(&pool, objectives.weights, 0, 1, [&first, &second]);
        let (top, counts) = assembler.assemble_sequential();

        assert_eq!(counts.pairs_evaluated, 1);
        assert_eq!(counts.pairs_bounded, 21);
        assert_eq!(counts.total(), 22);

        let best = top.into_vec();
        assert_eq!(best.len(), 1);
        assert_eq!(best[0].key.score, 8);
        assert_eq!(pool[best[0].pieces[ArmorSlot::Legs.index()]].id, PieceId(10));
    }

    #[test]
    fn bounded_merge_matches_exhaustive_ranking() {
        for seed in 0..4 {
            let pool = random_pool(6, seed);
            let objectives = objectives([3, 1, 0, 2, 1, 0], 1);
            let candidates = SlotCandidates::build(&pool, &objectives);
            let first = search_group(SlotSet::HELMET | SlotSet::GAUNTLETS, &candidates, 1);
            let second = search_group(
                SlotSet::CHEST | SlotSet::LEGS | SlotSet::CLASS_ITEM,
                &candidates,
                1,
            );

            let assembler = Assembler::new(&pool, objectives.weights, 1, 10, [&first, &second]);
            let (top, counts) = assembler.assemble_sequential();

            assert_eq!(counts.total(), (first.len() * second.len()) as u64);
            assert_eq!(
                rank(top.into_vec(), 10),
                exhaustive(&pool, &objectives, [&first, &second], 10)
            );
        }
    }

    #[test]
    fn parallel_merge_matches_sequential() {
        let pool = random_pool(8, 7);
        let objectives = objectives([3, 1, 0, 2, 1, 0], 1);
        let candidates = SlotCandidates::build(&pool, &objectives);
        let groups = [
            SlotSet::HELMET | SlotSet::GAUNTLETS | SlotSet::CHEST,
            SlotSet::LEGS | SlotSet::CLASS_ITEM,
        ];
        let [first, second] = search_groups_parallel(groups, &candidates, 1);
        // Enough outer partials for more than one shard.
        assert!(first.len() > 64);

        let assembler = Assembler::new(&pool, objectives.weights, 1, 40, [&first, &second]);
        let (sequential, sequential_counts) = assembler.assemble_sequential();
        let (parallel, parallel_counts) = assembler.assemble_parallel();

        assert_eq!(
            rank(sequential.into_vec(), 10),
            rank(parallel.into_vec(), 10)
        );
        assert_eq!(sequential_counts.total(), parallel_counts.total());
        assert_eq!(
            sequential_counts.pairs_over_budget,
            parallel_counts.pairs_over_budget
        );
    }
}
