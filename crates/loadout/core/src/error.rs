//! Validation errors for optimizer requests.
//!
//! Every error here is deterministic: the same request always fails the same
//! way, nothing is retried, and no partial result accompanies an error. A
//! request that is valid but admits no legal loadout is not an error; it
//! yields an empty result list.

use crate::armor::{ArmorSlot, PieceId};
use crate::stats::{STAT_COUNT, StatKind};

/// Malformed objectives or an unusable armor pool.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("stat priority must have {expected} entries, got {actual}")]
    PriorityLength { expected: usize, actual: usize },

    #[error("stat priority for {stat} is negative ({weight})")]
    NegativeWeight { stat: StatKind, weight: i32 },

    #[error("result limit must be positive, got {0}")]
    NonPositiveLimit(i64),

    #[error("max exotics must be non-negative, got {0}")]
    NegativeMaxExotics(i32),

    #[error("armor pool has no piece for slot {0}")]
    MissingSlot(ArmorSlot),

    #[error("armor pool contains piece {0} more than once")]
    DuplicatePiece(PieceId),

    #[error("slot partition must split the five slots into two non-empty groups")]
    InvalidPartition,
}

impl ValidationError {
    pub(crate) const fn priority_length(actual: usize) -> Self {
        Self::PriorityLength {
            expected: STAT_COUNT,
            actual,
        }
    }

    /// Stable identifier for this error variant.
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::PriorityLength { .. } => "priority_length",
            Self::NegativeWeight { .. } => "negative_weight",
            Self::NonPositiveLimit(_) => "non_positive_limit",
            Self::NegativeMaxExotics(_) => "negative_max_exotics",
            Self::MissingSlot(_) => "missing_slot",
            Self::DuplicatePiece(_) => "duplicate_piece",
            Self::InvalidPartition => "invalid_partition",
        }
    }
}
