mod common;

use common::{arb_objectives, arb_pool, brute_force_best, result_key};
use loadout_core::{OptimizerConfig, SlotPartition, SlotSet};
use optimizer::{Optimizer, optimize};
use proptest::prelude::*;

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    #[test]
    fn best_loadout_matches_exhaustive_search(
        pool in arb_pool(4),
        objectives in arb_objectives(),
    ) {
        let results = optimize(&objectives, &pool, 3).unwrap();
        let expected = brute_force_best(&pool, &objectives);
        prop_assert_eq!(results.first().map(result_key), expected);
    }

    #[test]
    fn reducer_never_changes_the_best_score(
        pool in arb_pool(5),
        objectives in arb_objectives(),
    ) {
        let reduced = optimize(&objectives, &pool, 1).unwrap();
        let unreduced = Optimizer::new(OptimizerConfig::new().with_reduce_candidates(false))
            .optimize(&objectives, &pool, 1)
            .unwrap();
        prop_assert_eq!(
            reduced.first().map(|r| r.score),
            unreduced.first().map(|r| r.score)
        );
        prop_assert_eq!(reduced.first(), unreduced.first());
    }

    #[test]
    fn exotic_budget_and_slot_coverage_hold(
        pool in arb_pool(4),
        objectives in arb_objectives(),
    ) {
        let budget = objectives.max_exotics as usize;
        for result in optimize(&objectives, &pool, 25).unwrap() {
            let exotics = result.pieces.iter().filter(|p| p.is_exotic).count();
            prop_assert!(exotics <= budget);
            prop_assert_eq!(exotics, usize::from(result.exotic_count));

            let mut slots: Vec<_> = result.pieces.iter().map(|p| p.slot).collect();
            slots.dedup();
            prop_assert_eq!(slots.len(), 5);
        }
    }

    #[test]
    fn repeated_runs_are_identical(
        pool in arb_pool(4),
        objectives in arb_objectives(),
    ) {
        let first = optimize(&objectives, &pool, 10).unwrap();
        let second = optimize(&objectives, &pool, 10).unwrap();
        prop_assert_eq!(first, second);
    }

    #[test]
    fn partition_choice_does_not_change_the_best_loadout(
        pool in arb_pool(3),
        objectives in arb_objectives(),
        mask in 1u8..31,
    ) {
        let partition = SlotPartition::new(SlotSet::from_bits_truncate(mask)).unwrap();
        let default = optimize(&objectives, &pool, 1).unwrap();
        let split = Optimizer::new(OptimizerConfig::new().with_partition(partition))
            .optimize(&objectives, &pool, 1)
            .unwrap();
        prop_assert_eq!(default, split);
    }
}
