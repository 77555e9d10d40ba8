//! Branch-and-bound search for the best achievable geode total.
//!
//! The search driver keeps a frontier of [`ProductionState`]s in a max-heap
//! ordered by their upper bound. Each popped state first raises the incumbent
//! with its leaf value (no further purchases), then, if its bound still beats
//! the incumbent, expands into one child per sensible robot purchase.

use std::cmp::Ordering;
use std::collections::BinaryHeap;
use std::rc::Rc;

use serde::Serialize;
use tracing::{debug, warn};

use crate::models::{Blueprint, BuildStep, Minutes, ResourceKind};
use crate::state::ProductionState;

/// Configuration for a single blueprint search.
///
/// # Example
///
/// ```
/// use geodemax::optimizer::SearchConfig;
///
/// let config = SearchConfig::new(32)
///     .with_node_limit(Some(1_000_000))
///     .with_plan(false);
/// assert!(config.pruning);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchConfig {
    /// Time budget.
    pub minutes: Minutes,
    /// Prune with the upper bound and the per-resource robot caps.
    ///
    /// Disabling this turns the search into an exhaustive enumeration of every
    /// purchase order, which is only affordable for small budgets.
    pub pruning: bool,
    /// Stop after expanding this many states and report the incumbent.
    pub node_limit: Option<u64>,
    /// Record the purchase order that reaches the best total.
    pub record_plan: bool,
}

impl SearchConfig {
    pub fn new(minutes: u32) -> Self {
        Self {
            minutes: Minutes(minutes),
            pruning: true,
            node_limit: None,
            record_plan: true,
        }
    }

    pub fn with_pruning(mut self, pruning: bool) -> Self {
        self.pruning = pruning;
        self
    }

    pub fn with_node_limit(mut self, limit: Option<u64>) -> Self {
        self.node_limit = limit;
        self
    }

    pub fn with_plan(mut self, record_plan: bool) -> Self {
        self.record_plan = record_plan;
        self
    }
}

/// How a search ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SearchStatus {
    /// The frontier was exhausted; `best` is the optimum.
    Optimal,
    /// The node limit was hit; `best` is achievable but may not be optimal.
    NodeLimit,
}

/// Result of searching one blueprint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchOutcome {
    /// Highest target total found.
    pub best: u64,
    pub status: SearchStatus,
    /// States popped and expanded into children.
    pub expanded: u64,
    /// States discarded because their bound could not beat the incumbent.
    pub pruned: u64,
    /// Largest frontier size seen.
    pub peak_frontier: usize,
    /// Purchases that reach `best`, in order. Empty when plans are not recorded.
    pub plan: Vec<BuildStep>,
}

/// Purchases made on the way to a state, newest first.
struct Trail {
    step: BuildStep,
    parent: Option<Rc<Trail>>,
}

fn collect_plan(trail: Option<&Rc<Trail>>) -> Vec<BuildStep> {
    let mut plan = Vec::new();
    let mut cursor = trail;
    while let Some(node) = cursor {
        plan.push(node.step);
        cursor = node.parent.as_ref();
    }
    plan.reverse();
    plan
}

/// A frontier entry. Ordered by bound, then leaf value, then minutes left.
struct Candidate {
    bound: u64,
    leaf: u64,
    state: ProductionState,
    trail: Option<Rc<Trail>>,
}

impl Candidate {
    fn new(state: ProductionState, trail: Option<Rc<Trail>>) -> Self {
        Self {
            bound: state.upper_bound(),
            leaf: state.leaf_value(),
            state,
            trail,
        }
    }

    fn key(&self) -> (u64, u64, Minutes) {
        (self.bound, self.leaf, self.state.remaining())
    }
}

impl PartialEq for Candidate {
    fn eq(&self, other: &Self) -> bool {
        self.key() == other.key()
    }
}

impl Eq for Candidate {}

impl PartialOrd for Candidate {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Candidate {
    fn cmp(&self, other: &Self) -> Ordering {
        self.key().cmp(&other.key())
    }
}

/// Search driver for one blueprint.
///
/// Owns its frontier and incumbent for the duration of [`BlueprintSearch::run`];
/// independent searches share nothing and can run on separate threads.
pub struct BlueprintSearch<'a> {
    blueprint: &'a Blueprint,
    config: &'a SearchConfig,
}

impl<'a> BlueprintSearch<'a> {
    pub fn new(blueprint: &'a Blueprint, config: &'a SearchConfig) -> Self {
        Self { blueprint, config }
    }

    /// Whether buying a `producer` robot next is worth exploring.
    ///
    /// Every resource the robot costs must already have a robot collecting it,
    /// and, except for the target robot, owning one more must not exceed the
    /// most of that resource any robot costs.
    pub fn is_sensible(&self, state: &ProductionState, producer: ResourceKind) -> bool {
        if !state.has_producers_for(self.blueprint.cost(producer)) {
            return false;
        }
        producer.is_target()
            || state.producers(producer) < self.blueprint.max_consumption(producer)
    }

    /// Children of `state`, one per sensible robot that can still be finished.
    pub fn expand(&self, state: &ProductionState) -> Vec<(ResourceKind, ProductionState)> {
        ResourceKind::ALL
            .into_iter()
            .filter(|&producer| !self.config.pruning || self.is_sensible(state, producer))
            .filter_map(|producer| {
                state
                    .advance_toward(self.blueprint, producer)
                    .map(|child| (producer, child))
            })
            .collect()
    }

    /// Runs the search to completion or until the node limit.
    pub fn run(&self) -> SearchOutcome {
        let budget = self.config.minutes;
        let mut frontier = BinaryHeap::new();
        frontier.push(Candidate::new(ProductionState::initial(budget), None));

        let mut best = 0;
        let mut best_trail: Option<Rc<Trail>> = None;
        let mut status = SearchStatus::Optimal;
        let mut expanded = 0u64;
        let mut pruned = 0u64;
        let mut peak_frontier = 1;

        while let Some(candidate) = frontier.pop() {
            if candidate.leaf > best {
                best = candidate.leaf;
                best_trail = candidate.trail.clone();
            }

            if self.config.pruning && !candidate.state.can_improve(best) {
                pruned += 1;
                continue;
            }

            if self.config.node_limit.is_some_and(|limit| expanded >= limit) {
                status = SearchStatus::NodeLimit;
                break;
            }
            expanded += 1;

            for (producer, child) in self.expand(&candidate.state) {
                if self.config.pruning && !child.can_improve(best) {
                    pruned += 1;
                    continue;
                }
                let trail = if self.config.record_plan {
                    let minute = budget.checked_sub(child.remaining()).unwrap_or(Minutes::ZERO);
                    Some(Rc::new(Trail {
                        step: BuildStep { minute, producer },
                        parent: candidate.trail.clone(),
                    }))
                } else {
                    None
                };
                frontier.push(Candidate::new(child, trail));
            }
            peak_frontier = peak_frontier.max(frontier.len());
        }

        if status == SearchStatus::NodeLimit {
            warn!(
                blueprint = self.blueprint.id(),
                expanded,
                best,
                "node limit reached; result may not be optimal"
            );
        }
        debug!(
            blueprint = self.blueprint.id(),
            minutes = budget.get(),
            best,
            expanded,
            pruned,
            peak_frontier,
            "search finished"
        );

        SearchOutcome {
            best,
            status,
            expanded,
            pruned,
            peak_frontier,
            plan: collect_plan(best_trail.as_ref()),
        }
    }
}

/// Searches `blueprint` with the given configuration.
pub fn find_best_plan(blueprint: &Blueprint, config: &SearchConfig) -> SearchOutcome {
    BlueprintSearch::new(blueprint, config).run()
}

/// The most geodes `blueprint` can yield in `minutes`.
///
/// Pure and deterministic: the same blueprint and budget always give the same
/// answer.
///
/// # Example
///
/// ```
/// use geodemax::models::Blueprint;
/// use geodemax::optimizer::best_achievable;
///
/// let blueprint = Blueprint::standard(1, 4, 2, 3, 14, 2, 7);
/// assert_eq!(best_achievable(&blueprint, 24), 9);
/// assert_eq!(best_achievable(&blueprint, 0), 0);
/// ```
pub fn best_achievable(blueprint: &Blueprint, minutes: u32) -> u64 {
    let config = SearchConfig::new(minutes).with_plan(false);
    find_best_plan(blueprint, &config).best
}
