//! Stat Model
//!
//! Everything the search needs to know about stats, in one direction:
//!
//! ```text
//! [ raw piece stats ]
//!      ↓  masterwork (+2 all) / artifice (+3 one)
//! [ effective piece stats ]
//!      ↓  element-wise sum over the loadout
//! [ loadout StatVector ]
//!      ↓  floor(min(100, v) / 10)
//! [ TierVector ]
//!      ↓  Σ tier[i] × weight[i]
//! [ weighted score ]
//! ```
//!
//! All functions here are pure and deterministic.

pub mod bonus;
pub mod kind;
pub mod score;
pub mod tier;
pub mod vector;

pub use bonus::{ARTIFICE_BONUS, MASTERWORK_BONUS, effective_stats};
pub use kind::{STAT_COUNT, StatKind};
pub use score::{StatWeights, weighted_score};
pub use tier::{MAX_TIER, STAT_CAP, TIER_STEP, TierVector, tier_of};
pub use vector::StatVector;
