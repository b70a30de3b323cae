//! Optimizer configuration constants and tunable parameters.

use crate::armor::{ArmorSlot, SlotSet};
use crate::error::ValidationError;

/// Tunable search parameters.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct OptimizerConfig {
    /// Result count used when the caller does not pass one.
    pub default_result_limit: u32,
    /// Multiple of the result limit kept by the assembler's running top-K.
    pub retention_factor: u32,
    /// Run the per-slot dominance reducer before combining.
    pub reduce_candidates: bool,
    /// Treat a slot with no pieces as a validation error instead of an
    /// empty result.
    pub strict_coverage: bool,
    /// Slot groups searched independently before merging.
    pub partition: SlotPartition,
}

impl OptimizerConfig {
    pub const DEFAULT_RESULT_LIMIT: u32 = 20;
    pub const DEFAULT_RETENTION_FACTOR: u32 = 4;

    pub fn new() -> Self {
        Self {
            default_result_limit: Self::DEFAULT_RESULT_LIMIT,
            retention_factor: Self::DEFAULT_RETENTION_FACTOR,
            reduce_candidates: true,
            strict_coverage: false,
            partition: SlotPartition::default(),
        }
    }

    #[must_use]
    pub fn with_reduce_candidates(mut self, reduce_candidates: bool) -> Self {
        self.reduce_candidates = reduce_candidates;
        self
    }

    #[must_use]
    pub fn with_strict_coverage(mut self, strict_coverage: bool) -> Self {
        self.strict_coverage = strict_coverage;
        self
    }

    #[must_use]
    pub fn with_partition(mut self, partition: SlotPartition) -> Self {
        self.partition = partition;
        self
    }

    #[must_use]
    pub fn with_retention_factor(mut self, retention_factor: u32) -> Self {
        self.retention_factor = retention_factor;
        self
    }

    /// Capacity of the running top-K for a given result limit. Never below
    /// the limit itself.
    pub fn retention_capacity(&self, limit: usize) -> usize {
        limit.saturating_mul(self.retention_factor.max(1) as usize)
    }
}

impl Default for OptimizerConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Split of the five slots into two non-empty groups.
///
/// The first group holds the slots in `first`; the second holds the rest.
/// Any split is correct; the default balances branching factor.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "Vec<ArmorSlot>", into = "Vec<ArmorSlot>")
)]
pub struct SlotPartition {
    first: SlotSet,
}

impl SlotPartition {
    /// {Helmet, Gauntlets} | {Chest, Legs, ClassItem}
    pub const DEFAULT: Self = Self {
        first: SlotSet::HELMET.union(SlotSet::GAUNTLETS),
    };

    pub fn new(first: SlotSet) -> Result<Self, ValidationError> {
        let first = first & SlotSet::all();
        if first.is_empty() || first == SlotSet::all() {
            return Err(ValidationError::InvalidPartition);
        }
        Ok(Self { first })
    }

    pub const fn first(&self) -> SlotSet {
        self.first
    }

    pub fn second(&self) -> SlotSet {
        SlotSet::all() - self.first
    }

    /// Both groups, first then second.
    pub fn groups(&self) -> [SlotSet; 2] {
        [self.first(), self.second()]
    }
}

impl Default for SlotPartition {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl TryFrom<Vec<ArmorSlot>> for SlotPartition {
    type Error = ValidationError;

    fn try_from(first: Vec<ArmorSlot>) -> Result<Self, Self::Error> {
        Self::new(first.into_iter().collect())
    }
}

impl From<SlotPartition> for Vec<ArmorSlot> {
    fn from(partition: SlotPartition) -> Self {
        partition.first.slots().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_partition_splits_two_and_three() {
        let partition = SlotPartition::default();
        assert_eq!(partition.first().slots().count(), 2);
        assert_eq!(
            partition.second(),
            SlotSet::CHEST | SlotSet::LEGS | SlotSet::CLASS_ITEM
        );
    }

    #[test]
    fn degenerate_partitions_are_rejected() {
        assert_eq!(
            SlotPartition::new(SlotSet::empty()),
            Err(ValidationError::InvalidPartition)
        );
        assert_eq!(
            SlotPartition::new(SlotSet::all()),
            Err(ValidationError::InvalidPartition)
        );
        assert!(SlotPartition::new(SlotSet::CLASS_ITEM).is_ok());
    }

    #[test]
    fn retention_capacity_never_drops_below_limit() {
        let config = OptimizerConfig::new().with_retention_factor(0);
        assert_eq!(config.retention_capacity(20), 20);
        assert_eq!(OptimizerConfig::default().retention_capacity(5), 20);
    }
}
