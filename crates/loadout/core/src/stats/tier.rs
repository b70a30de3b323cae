//! Tier quantization.
//!
//! `tier = floor(min(100, value) / 10)`, always in `[0, 10]`.

use core::ops::Index;

use super::kind::{STAT_COUNT, StatKind};
use super::vector::StatVector;

/// Stat value past which no further tier is granted.
pub const STAT_CAP: u16 = 100;

/// Stat points per tier.
pub const TIER_STEP: u16 = 10;

/// Highest reachable tier.
pub const MAX_TIER: u8 = (STAT_CAP / TIER_STEP) as u8;

/// Quantizes a stat value into its tier.
#[inline]
pub const fn tier_of(value: u16) -> u8 {
    let capped = if value > STAT_CAP { STAT_CAP } else { value };
    (capped / TIER_STEP) as u8
}

/// Element-wise tiers of a [`StatVector`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct TierVector(pub [u8; STAT_COUNT]);

impl TierVector {
    pub fn from_stats(stats: &StatVector) -> Self {
        Self(stats.0.map(tier_of))
    }

    #[inline]
    pub const fn get(&self, stat: StatKind) -> u8 {
        self.0[stat.index()]
    }

    /// Unweighted tier sum, the "total tier" shown to players.
    pub fn total(&self) -> u32 {
        self.0.iter().map(|&t| u32::from(t)).sum()
    }
}

impl Index<StatKind> for TierVector {
    type Output = u8;

    fn index(&self, stat: StatKind) -> &u8 {
        &self.0[stat.index()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tier_boundaries() {
        assert_eq!(tier_of(0), 0);
        assert_eq!(tier_of(9), 0);
        assert_eq!(tier_of(10), 1);
        assert_eq!(tier_of(99), 9);
        assert_eq!(tier_of(100), 10);
        assert_eq!(tier_of(105), 10);
        assert_eq!(tier_of(u16::MAX), MAX_TIER);
    }

    #[test]
    fn tier_vector_totals() {
        let stats = StatVector::new([100, 99, 55, 10, 0, 240]);
        let tiers = stats.tiers();
        assert_eq!(tiers, TierVector([10, 9, 5, 1, 0, 10]));
        assert_eq!(tiers.total(), 35);
        assert_eq!(tiers[StatKind::Recovery], 5);
    }
}
