//! Optimizer entry point.
//!
//! One call runs every phase in a fixed order:
//!
//! ```text
//! validate → reduce (per slot) → half-search (two groups) → assemble → rank/project
//! ```
//!
//! Nothing survives between calls; an [`Optimizer`] only carries its
//! configuration and can be shared freely across threads.

use loadout_core::{ArmorPiece, Objectives, OptimizerConfig, ValidationError};

use crate::assembler::Assembler;
use crate::combiner::{GroupFrontier, search_groups};
use crate::pool::{SlotCandidates, check_unique_ids, first_uncovered_slot};
use crate::ranking::{LoadoutResult, project, rank};
use crate::reducer::reduce_all;
use crate::report::SearchReport;

/// Results of one run together with its phase counters.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Optimization {
    pub results: Vec<LoadoutResult>,
    pub report: SearchReport,
}

/// Armor loadout search with a fixed configuration.
#[derive(Clone, Debug, Default)]
pub struct Optimizer {
    config: OptimizerConfig,
}

impl Optimizer {
    pub fn new(config: OptimizerConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &OptimizerConfig {
        &self.config
    }

    /// Returns the best `result_limit` loadouts, best first.
    pub fn optimize(
        &self,
        objectives: &Objectives,
        pool: &[ArmorPiece],
        result_limit: i64,
    ) -> Result<Vec<LoadoutResult>, ValidationError> {
        self.optimize_with_report(objectives, pool, result_limit)
            .map(|optimization| optimization.results)
    }

    /// [`Optimizer::optimize`] with the configured default result limit.
    pub fn optimize_default_limit(
        &self,
        objectives: &Objectives,
        pool: &[ArmorPiece],
    ) -> Result<Vec<LoadoutResult>, ValidationError> {
        self.optimize(
            objectives,
            pool,
            i64::from(self.config.default_result_limit),
        )
    }

    /// Runs the search and reports how each phase shaped it.
    pub fn optimize_with_report(
        &self,
        objectives: &Objectives,
        pool: &[ArmorPiece],
        result_limit: i64,
    ) -> Result<Optimization, ValidationError> {
        let objectives = objectives.validate()?;
        let limit = validate_limit(result_limit)?;
        check_unique_ids(pool)?;

        let mut report = SearchReport::empty(pool.len());

        if let Some(slot) = first_uncovered_slot(pool) {
            if self.config.strict_coverage {
                return Err(ValidationError::MissingSlot(slot));
            }
            tracing::warn!("optimizer: no piece for slot {}, no loadout possible", slot);
            return Ok(Optimization {
                results: Vec::new(),
                report,
            });
        }

        tracing::debug!(
            "optimizer: pool={} weights={:?} max_exotics={} assume_masterwork={} limit={}",
            pool.len(),
            objectives.weights,
            objectives.max_exotics,
            objectives.assume_masterwork,
            limit
        );

        let mut candidates = SlotCandidates::build(pool, &objectives);
        report.candidates_per_slot = candidates.counts();

        if let Some(slot) = candidates.first_empty_slot() {
            tracing::debug!("optimizer: every {} piece is exotic and the budget is zero", slot);
            return Ok(Optimization {
                results: Vec::new(),
                report,
            });
        }

        if self.config.reduce_candidates {
            reduce_all(&mut candidates);
        }
        report.reduced_per_slot = candidates.counts();

        tracing::debug!(
            "optimizer: candidates per slot {:?} -> {:?}",
            report.candidates_per_slot,
            report.reduced_per_slot
        );

        let frontiers = search_groups(
            self.config.partition.groups(),
            &candidates,
            objectives.max_exotics,
        );
        report.enumerated_per_group = [frontiers[0].enumerated, frontiers[1].enumerated];
        report.partials_per_group = [frontiers[0].len(), frontiers[1].len()];

        if frontiers.iter().any(GroupFrontier::is_empty) {
            tracing::debug!("optimizer: a slot group has no combination within the exotic budget");
        }

        let assembler = Assembler::new(
            pool,
            objectives.weights,
            objectives.max_exotics,
            self.config.retention_capacity(limit),
            [&frontiers[0], &frontiers[1]],
        );
        let (top, counts) = assembler.assemble();
        report.pairs_evaluated = counts.pairs_evaluated;
        report.pairs_over_budget = counts.pairs_over_budget;
        report.pairs_bounded = counts.pairs_bounded;

        let ranked = rank(top.into_vec(), limit);
        let results = project(&ranked, pool);
        report.results = results.len();

        tracing::debug!(
            "optimizer: partials={:?} pairs={}/{} over_budget={} bounded={} results={}",
            report.partials_per_group,
            report.pairs_evaluated,
            counts.total(),
            report.pairs_over_budget,
            report.pairs_bounded,
            report.results
        );

        Ok(Optimization { results, report })
    }
}

/// Runs the search with the default configuration.
pub fn optimize(
    objectives: &Objectives,
    pool: &[ArmorPiece],
    result_limit: i64,
) -> Result<Vec<LoadoutResult>, ValidationError> {
    Optimizer::default().optimize(objectives, pool, result_limit)
}

fn validate_limit(result_limit: i64) -> Result<usize, ValidationError> {
    if result_limit <= 0 {
        return Err(ValidationError::NonPositiveLimit(result_limit));
    }
    Ok(usize::try_from(result_limit).unwrap_or(usize::MAX))
}
