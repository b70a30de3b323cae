//! Non-dominated filtering over stat vectors.
//!
//! Shared by the per-slot reducer and the per-bucket partial pruning. Both
//! rely on the same fact: if `a` covers `b` stat-for-stat, then `a + x`
//! covers `b + x` for any `x`, and tiers are monotone in stats, so `b` can
//! never outrank `a` once the rest of the loadout is fixed.

use loadout_core::StatVector;

/// Keeps the items whose stats are not strictly dominated by another item.
///
/// Items with identical stats are all kept. Output is ordered by stat total
/// (descending), ties kept in input order, so the result is deterministic
/// for a deterministic input.
pub(crate) fn retain_non_dominated<T, F>(mut items: Vec<T>, stats_of: F) -> Vec<T>
where
    F: Fn(&T) -> &StatVector,
{
    if items.len() < 2 {
        return items;
    }

    // A strict dominator always has a strictly larger total, so it is
    // visited (and kept, or itself beaten by a kept item) first.
    items.sort_by_key(|item| core::cmp::Reverse(stats_of(item).total()));

    let mut kept: Vec<T> = Vec::with_capacity(items.len());
    for item in items {
        let stats = stats_of(&item);
        if !kept.iter().any(|k| stats_of(k).dominates(stats)) {
            kept.push(item);
        }
    }
    kept
}

#[cfg(test)]
mod tests {
    use super::*;

    fn v(values: [u16; 6]) -> StatVector {
        StatVector::new(values)
    }

    #[test]
    fn removes_strictly_dominated_vectors() {
        let items = vec![
            v([10, 10, 10, 10, 10, 10]),
            v([9, 10, 10, 10, 10, 10]),
            v([20, 5, 5, 5, 5, 5]),
            v([20, 5, 5, 5, 5, 4]),
        ];
        let kept = retain_non_dominated(items, |s| s);
        assert_eq!(
            kept,
            vec![v([10, 10, 10, 10, 10, 10]), v([20, 5, 5, 5, 5, 5])]
        );
    }

    #[test]
    fn keeps_duplicates_in_input_order() {
        let items = vec![(1, v([5; 6])), (2, v([5; 6])), (3, v([4; 6]))];
        let kept = retain_non_dominated(items, |(_, s)| s);
        let ids: Vec<_> = kept.iter().map(|(id, _)| *id).collect();
        assert_eq!(ids, vec![1, 2]);
    }

    #[test]
    fn transitive_chain_collapses_to_top() {
        let items = vec![v([1; 6]), v([2; 6]), v([3; 6]), v([4; 6])];
        assert_eq!(retain_non_dominated(items, |s| s), vec![v([4; 6])]);
    }
}
