//! Armor loadout optimizer.
//!
//! Given a player's armor pool and stat priorities, finds the best-scoring
//! legal five-piece loadouts (one piece per slot, exotic budget respected).
//!
//! The search is a meet-in-the-middle over two slot groups:
//!
//! - `reducer`: per-slot dominance pruning
//! - `combiner`: per-group enumeration with per-exotic-bucket pruning
//! - `assembler`: cross-group merge into a bounded top-K
//! - `ranking`: deterministic ordering and result projection
//!
//! The whole computation is pure and synchronous. With the `parallel`
//! feature the two half-searches and the merge run on the rayon pool; the
//! output does not change.
//!
//! ```
//! use loadout_core::{ArmorPiece, ArmorSlot, Objectives, PieceId, StatVector};
//!
//! let pool: Vec<_> = ArmorSlot::ALL
//!     .iter()
//!     .enumerate()
//!     .map(|(i, &slot)| ArmorPiece::new(PieceId(i as u64), slot, StatVector::splat(20)))
//!     .collect();
//!
//! let results = optimizer::optimize(&Objectives::default(), &pool, 5).unwrap();
//! assert_eq!(results.len(), 1);
//! assert_eq!(results[0].total_tier, 60);
//! ```

mod assembler;
mod combiner;
mod engine;
mod frontier;
mod pool;
mod ranking;
mod reducer;
mod report;

#[cfg(test)]
mod testing;

pub use engine::{Optimization, Optimizer, optimize};
pub use ranking::{LoadoutResult, RankKey};
pub use report::SearchReport;
