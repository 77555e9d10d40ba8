//! Evaluating many blueprints and combining their results.
//!
//! Each blueprint gets its own independent search. With the `parallel`
//! feature the searches run on the rayon thread pool; results always come
//! back in input order.

#[cfg(feature = "parallel")]
use rayon::prelude::*;
use serde::Serialize;
use tracing::info;

use crate::models::Blueprint;
use crate::optimizer::{find_best_plan, SearchConfig, SearchOutcome};

/// Outcome of one blueprint within a batch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BlueprintResult {
    pub id: u32,
    pub outcome: SearchOutcome,
}

impl BlueprintResult {
    /// Blueprint id multiplied by its best total.
    pub fn quality_level(&self) -> u64 {
        u64::from(self.id) * self.outcome.best
    }
}

/// Searches every blueprint with the same configuration.
///
/// # Arguments
///
/// * `blueprints` - Blueprints to evaluate
/// * `config` - Search configuration shared by every search
/// * `parallel` - Run searches concurrently (ignored without the `parallel` feature)
pub fn evaluate_all(
    blueprints: &[Blueprint],
    config: &SearchConfig,
    parallel: bool,
) -> Vec<BlueprintResult> {
    let evaluate = |blueprint: &Blueprint| BlueprintResult {
        id: blueprint.id(),
        outcome: find_best_plan(blueprint, config),
    };

    #[cfg(feature = "parallel")]
    let results: Vec<BlueprintResult> = if parallel {
        blueprints.par_iter().map(evaluate).collect()
    } else {
        blueprints.iter().map(evaluate).collect()
    };
    #[cfg(not(feature = "parallel"))]
    let results: Vec<BlueprintResult> = {
        let _ = parallel;
        blueprints.iter().map(evaluate).collect()
    };

    info!(
        blueprints = results.len(),
        minutes = config.minutes.get(),
        expanded = results.iter().map(|r| r.outcome.expanded).sum::<u64>(),
        "batch evaluated"
    );
    results
}

/// Sum of `id × best` over all results.
///
/// # Example
///
/// ```
/// use geodemax::batch::{evaluate_all, quality_level_sum};
/// use geodemax::models::Blueprint;
/// use geodemax::optimizer::SearchConfig;
///
/// let blueprints = vec![
///     Blueprint::standard(1, 4, 2, 3, 14, 2, 7),
///     Blueprint::standard(2, 2, 3, 3, 8, 3, 12),
/// ];
/// let results = evaluate_all(&blueprints, &SearchConfig::new(24), false);
/// assert_eq!(quality_level_sum(&results), 33);
/// ```
pub fn quality_level_sum(results: &[BlueprintResult]) -> u64 {
    results.iter().map(BlueprintResult::quality_level).sum()
}

/// Product of the best totals of the first `n` results.
///
/// An empty selection yields 1.
pub fn top_product(results: &[BlueprintResult], n: usize) -> u64 {
    results.iter().take(n).map(|r| r.outcome.best).product()
}
