//! Six-dimensional stat vector.

use core::ops::{Add, AddAssign, Index};

use super::kind::{STAT_COUNT, StatKind};
use super::tier::TierVector;

/// Per-stat values of a piece, a partial loadout, or a complete loadout.
///
/// Values are not capped here; the 100-point cap only applies when the
/// vector is quantized into tiers. Addition saturates.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct StatVector(pub [u16; STAT_COUNT]);

impl StatVector {
    pub const ZERO: Self = Self([0; STAT_COUNT]);

    pub const fn new(values: [u16; STAT_COUNT]) -> Self {
        Self(values)
    }

    /// Same value in every stat.
    pub const fn splat(value: u16) -> Self {
        Self([value; STAT_COUNT])
    }

    #[inline]
    pub const fn get(&self, stat: StatKind) -> u16 {
        self.0[stat.index()]
    }

    /// Adds `amount` to a single stat.
    #[inline]
    pub fn add_to(&mut self, stat: StatKind, amount: u16) {
        let slot = &mut self.0[stat.index()];
        *slot = slot.saturating_add(amount);
    }

    /// Adds `amount` to every stat.
    pub fn add_all(&mut self, amount: u16) {
        for value in &mut self.0 {
            *value = value.saturating_add(amount);
        }
    }

    /// Unweighted sum of all six values.
    pub fn total(&self) -> u32 {
        self.0.iter().map(|&v| u32::from(v)).sum()
    }

    /// Returns true if every stat is at least the other's.
    #[inline]
    pub fn covers(&self, other: &Self) -> bool {
        self.0.iter().zip(other.0.iter()).all(|(a, b)| a >= b)
    }

    /// Strict Pareto dominance: never worse, better somewhere.
    ///
    /// Equal vectors do not dominate each other.
    #[inline]
    pub fn dominates(&self, other: &Self) -> bool {
        self.covers(other) && self != other
    }

    /// Quantizes every stat into its tier.
    pub fn tiers(&self) -> TierVector {
        TierVector::from_stats(self)
    }

    pub fn iter(&self) -> impl Iterator<Item = (StatKind, u16)> + '_ {
        StatKind::ALL.iter().map(move |&stat| (stat, self.get(stat)))
    }
}

impl From<[u16; STAT_COUNT]> for StatVector {
    fn from(values: [u16; STAT_COUNT]) -> Self {
        Self(values)
    }
}

impl Index<StatKind> for StatVector {
    type Output = u16;

    fn index(&self, stat: StatKind) -> &u16 {
        &self.0[stat.index()]
    }
}

impl AddAssign for StatVector {
    fn add_assign(&mut self, rhs: Self) {
        for (lhs, rhs) in self.0.iter_mut().zip(rhs.0) {
            *lhs = lhs.saturating_add(rhs);
        }
    }
}

impl Add for StatVector {
    type Output = Self;

    fn add(mut self, rhs: Self) -> Self {
        self += rhs;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn addition_is_element_wise() {
        let a = StatVector::new([1, 2, 3, 4, 5, 6]);
        let b = StatVector::new([10, 20, 30, 40, 50, 60]);
        assert_eq!(a + b, StatVector::new([11, 22, 33, 44, 55, 66]));
        assert_eq!((a + b).total(), 231);
    }

    #[test]
    fn dominance_requires_a_strict_improvement() {
        let base = StatVector::splat(10);
        let mut better = base;
        better.add_to(StatKind::Recovery, 1);

        assert!(better.dominates(&base));
        assert!(!base.dominates(&better));
        assert!(!base.dominates(&base));
        assert!(base.covers(&base));
    }

    #[test]
    fn incomparable_vectors_do_not_dominate() {
        let a = StatVector::new([20, 5, 5, 5, 5, 5]);
        let b = StatVector::splat(10);
        assert!(!a.dominates(&b));
        assert!(!b.dominates(&a));
    }

    #[test]
    fn indexing_by_stat() {
        let v = StatVector::new([1, 2, 3, 4, 5, 6]);
        assert_eq!(v[StatKind::Intellect], 5);
        assert_eq!(v.get(StatKind::Mobility), 1);
    }
}
