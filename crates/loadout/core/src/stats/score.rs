//! Weighted tier score.

use core::ops::Index;

use super::kind::{STAT_COUNT, StatKind};
use super::tier::TierVector;

/// Validated, non-negative per-stat weights.
///
/// A weight of zero excludes the stat from ranking; its tier is still
/// computed and reported.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct StatWeights(pub [u32; STAT_COUNT]);

impl StatWeights {
    pub const fn new(weights: [u32; STAT_COUNT]) -> Self {
        Self(weights)
    }

    /// Every stat weighted equally; the score equals the total tier.
    pub const fn uniform() -> Self {
        Self([1; STAT_COUNT])
    }

    #[inline]
    pub const fn get(&self, stat: StatKind) -> u32 {
        self.0[stat.index()]
    }

    /// Returns a copy with one weight replaced.
    #[must_use]
    pub const fn with(mut self, stat: StatKind, weight: u32) -> Self {
        self.0[stat.index()] = weight;
        self
    }

    pub fn score(&self, tiers: &TierVector) -> u64 {
        weighted_score(tiers, self)
    }

    /// Sum of all weights: the score of one tier in every stat.
    pub fn total(&self) -> u64 {
        self.0.iter().map(|&weight| u64::from(weight)).sum()
    }
}

impl Index<StatKind> for StatWeights {
    type Output = u32;

    fn index(&self, stat: StatKind) -> &u32 {
        &self.0[stat.index()]
    }
}

/// `Σ tier[i] × weight[i]`, the primary ranking key.
pub fn weighted_score(tiers: &TierVector, weights: &StatWeights) -> u64 {
    tiers
        .0
        .iter()
        .zip(weights.0.iter())
        .map(|(&tier, &weight)| u64::from(tier) * u64::from(weight))
        .sum()
}
