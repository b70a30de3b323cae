//! Masterwork and artifice bonuses.
//!
//! Both bonuses are flat and additive, applied in this order:
//! `raw → +masterwork (all stats) → +artifice (one stat)`.
//!
//! `assume_masterwork` only adds the masterwork bonus to pieces that do not
//! already carry it; a realized masterwork is never counted twice.

use super::vector::StatVector;
use crate::armor::ArmorPiece;

/// Flat bonus to every stat of a fully masterworked piece.
pub const MASTERWORK_BONUS: u16 = 2;

/// Flat bonus to the chosen stat of an artifice piece.
pub const ARTIFICE_BONUS: u16 = 3;

/// Computes the stats a piece contributes to a loadout.
pub fn effective_stats(piece: &ArmorPiece, assume_masterwork: bool) -> StatVector {
    let mut stats = piece.raw_stats;

    if assume_masterwork && !piece.has_masterwork_bonus {
        stats.add_all(MASTERWORK_BONUS);
    }

    if let Some(stat) = piece.artifice_stat {
        stats.add_to(stat, ARTIFICE_BONUS);
    }

    stats
}
