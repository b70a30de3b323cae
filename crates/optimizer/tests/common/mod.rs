//! Shared fixtures and a brute-force reference search.
#![allow(dead_code)]

use loadout_core::{
    ArmorPiece, ArmorSlot, Objectives, PieceId, StatKind, StatVector, StatWeights,
};
use optimizer::LoadoutResult;
use proptest::prelude::*;

pub fn piece(id: u64, slot: ArmorSlot, stats: [u16; 6]) -> ArmorPiece {
    ArmorPiece::new(PieceId(id), slot, StatVector::new(stats))
}

/// One zero-stat legendary for every slot except those listed.
pub fn zero_fillers(except: &[ArmorSlot], first_id: u64) -> Vec<ArmorPiece> {
    ArmorSlot::ALL
        .iter()
        .filter(|slot| !except.contains(slot))
        .enumerate()
        .map(|(i, &slot)| piece(first_id + i as u64, slot, [0; 6]))
        .collect()
}

/// Ranking key of a returned loadout, comparable with [`brute_force_best`].
pub fn result_key(result: &LoadoutResult) -> (u64, u32, u32, Vec<PieceId>) {
    (
        result.score,
        result.total_tier,
        result.stats.total(),
        result.piece_ids().collect(),
    )
}

/// Best loadout by exhaustive five-way enumeration, or `None` when no legal
/// loadout exists.
pub fn brute_force_best(
    pool: &[ArmorPiece],
    objectives: &Objectives,
) -> Option<(u64, u32, u32, Vec<PieceId>)> {
    let validated = objectives.validate().unwrap();
    let by_slot: Vec<Vec<&ArmorPiece>> = ArmorSlot::ALL
        .iter()
        .map(|slot| pool.iter().filter(|p| p.slot == *slot).collect())
        .collect();

    let mut best: Option<(u64, u32, u32, Vec<PieceId>)> = None;
    let mut chosen: Vec<&ArmorPiece> = Vec::with_capacity(ArmorSlot::COUNT);
    walk(&by_slot, &mut chosen, &mut |loadout: &[&ArmorPiece]| {
        let exotics = loadout.iter().filter(|p| p.is_exotic).count();
        if exotics > usize::from(validated.max_exotics) {
            return;
        }
        let stats = loadout
            .iter()
            .fold(StatVector::ZERO, |acc, p| {
                acc + p.effective_stats(validated.assume_masterwork)
            });
        let tiers = stats.tiers();
        let ids: Vec<PieceId> = loadout.iter().map(|p| p.id).collect();
        let candidate = (
            validated.weights.score(&tiers),
            tiers.total(),
            stats.total(),
            ids,
        );
        best = Some(match best.take() {
            None => candidate,
            Some(current) => {
                if better(&candidate, &current) {
                    candidate
                } else {
                    current
                }
            }
        });
    });
    best
}

fn better(a: &(u64, u32, u32, Vec<PieceId>), b: &(u64, u32, u32, Vec<PieceId>)) -> bool {
    (a.0, a.1, a.2) > (b.0, b.1, b.2) || ((a.0, a.1, a.2) == (b.0, b.1, b.2) && a.3 < b.3)
}

fn walk<'a>(
    by_slot: &[Vec<&'a ArmorPiece>],
    chosen: &mut Vec<&'a ArmorPiece>,
    visit: &mut dyn FnMut(&[&'a ArmorPiece]),
) {
    let depth = chosen.len();
    if depth == by_slot.len() {
        visit(chosen);
        return;
    }
    for piece in &by_slot[depth] {
        chosen.push(piece);
        walk(by_slot, chosen, visit);
        chosen.pop();
    }
}

pub fn weights_of(objectives: &Objectives) -> StatWeights {
    objectives.validate().unwrap().weights
}

fn arb_piece_for(slot: ArmorSlot) -> impl Strategy<Value = ArmorPiece> {
    (
        prop::array::uniform6(0u16..=42),
        prop::bool::weighted(0.25),
        any::<bool>(),
        prop::option::weighted(0.3, 0usize..6),
    )
        .prop_map(move |(stats, is_exotic, masterworked, artifice)| ArmorPiece {
            id: PieceId(0),
            slot,
            is_exotic,
            raw_stats: StatVector::new(stats),
            has_masterwork_bonus: masterworked,
            artifice_stat: artifice.and_then(StatKind::from_index),
        })
}

/// Random pool with 1..=`max_per_slot` pieces in every slot and unique ids.
pub fn arb_pool(max_per_slot: usize) -> impl Strategy<Value = Vec<ArmorPiece>> {
    let slots: Vec<_> = ArmorSlot::ALL
        .iter()
        .map(|&slot| prop::collection::vec(arb_piece_for(slot), 1..=max_per_slot))
        .collect();
    slots.prop_map(|per_slot| {
        per_slot
            .into_iter()
            .flatten()
            .enumerate()
            .map(|(i, mut piece)| {
                piece.id = PieceId(1000 + i as u64);
                piece
            })
            .collect()
    })
}

pub fn arb_objectives() -> impl Strategy<Value = Objectives> {
    (
        prop::array::uniform6(0i32..=5),
        0i32..=2,
        any::<bool>(),
    )
        .prop_map(|(priority, max_exotics, assume_masterwork)| {
            Objectives::new(priority)
                .with_max_exotics(max_exotics)
                .with_assume_masterwork(assume_masterwork)
        })
}
