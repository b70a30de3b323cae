//! Deterministic armor data model and stat rules shared by the optimizer.
//!
//! `loadout-core` defines the canonical types (armor pieces, stat vectors,
//! tiers, objectives) and the pure stat math the search is built on. It
//! performs no I/O; callers resolve inventory records into [`ArmorPiece`]s
//! before anything here sees them.
pub mod armor;
pub mod config;
pub mod error;
pub mod objectives;
pub mod stats;

pub use armor::{ArmorPiece, ArmorSlot, PieceId, SlotSet};
pub use config::{OptimizerConfig, SlotPartition};
pub use error::ValidationError;
pub use objectives::{Objectives, ValidatedObjectives};
pub use stats::{
    ARTIFICE_BONUS, MASTERWORK_BONUS, MAX_TIER, STAT_CAP, STAT_COUNT, StatKind, StatVector,
    StatWeights, TierVector, effective_stats, tier_of, weighted_score,
};
