//! Seeded random pools for unit tests.

use loadout_core::{ArmorPiece, ArmorSlot, PieceId, StatVector};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// `per_slot` pieces in every slot, roughly one in five exotic.
pub(crate) fn random_pool(per_slot: usize, seed: u64) -> Vec<ArmorPiece> {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut pool = Vec::with_capacity(per_slot * ArmorSlot::COUNT);

    for slot in ArmorSlot::ALL {
        for i in 0..per_slot {
            let stats: [u16; 6] = core::array::from_fn(|_| rng.gen_range(2..=30));
            let id = (slot.index() * 1000 + i) as u64;
            let mut piece = ArmorPiece::new(PieceId(id), slot, StatVector::new(stats));
            if rng.gen_bool(0.2) {
                piece = piece.with_exotic();
            }
            pool.push(piece);
        }
    }

    pool
}
