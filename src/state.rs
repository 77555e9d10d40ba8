//! Production states and the transitions between them.
//!
//! A [`ProductionState`] is an immutable snapshot of a factory: minutes left,
//! resources in stock, and robots owned. Instead of stepping one minute at a
//! time, [`ProductionState::advance_toward`] jumps straight to the moment the
//! next chosen robot is finished, so the search branches once per purchase
//! rather than once per minute.

use crate::models::{Blueprint, Cost, Minutes, ResourceKind, ResourceMap};

/// A snapshot of the factory between two purchases.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ProductionState {
    remaining: Minutes,
    stock: ResourceMap<u64>,
    producers: ResourceMap<u64>,
}

impl ProductionState {
    /// The starting state: one seed robot, nothing in stock.
    ///
    /// # Example
    ///
    /// ```
    /// use geodemax::models::{Minutes, ResourceKind};
    /// use geodemax::state::ProductionState;
    ///
    /// let start = ProductionState::initial(Minutes(24));
    /// assert_eq!(start.producers(ResourceKind::Ore), 1);
    /// assert_eq!(start.stock(ResourceKind::Ore), 0);
    /// ```
    pub fn initial(budget: Minutes) -> Self {
        let mut producers = ResourceMap::default();
        producers[ResourceKind::SEED] = 1;
        Self {
            remaining: budget,
            stock: ResourceMap::default(),
            producers,
        }
    }

    /// Builds an arbitrary state, mainly for inspecting the bound and the
    /// transition rules in isolation.
    pub fn from_parts(
        remaining: Minutes,
        stock: ResourceMap<u64>,
        producers: ResourceMap<u64>,
    ) -> Self {
        Self {
            remaining,
            stock,
            producers,
        }
    }

    pub fn remaining(&self) -> Minutes {
        self.remaining
    }

    pub fn stock(&self, resource: ResourceKind) -> u64 {
        self.stock[resource]
    }

    pub fn producers(&self, resource: ResourceKind) -> u64 {
        self.producers[resource]
    }

    /// Target resource collected so far.
    pub fn target_total(&self) -> u64 {
        self.stock[ResourceKind::TARGET]
    }

    /// Whether every resource `cost` asks for already has at least one robot.
    pub fn has_producers_for(&self, cost: &Cost) -> bool {
        cost.required().all(|(resource, _)| self.producers[resource] > 0)
    }

    /// Minutes of waiting before `cost` can be paid from stock.
    ///
    /// Returns `None` if some required resource is short and nothing produces it.
    pub fn minutes_to_afford(&self, cost: &Cost) -> Option<u64> {
        let mut wait = 0;
        for (resource, amount) in cost.required() {
            let shortfall = amount.saturating_sub(self.stock[resource]);
            if shortfall == 0 {
                continue;
            }
            let rate = self.producers[resource];
            if rate == 0 {
                return None;
            }
            wait = wait.max(shortfall.div_ceil(rate));
        }
        Some(wait)
    }

    /// Returns the state right after the next `producer` robot is finished.
    ///
    /// The elapsed time is the wait until the robot is affordable plus one
    /// minute to build it. Robots owned before the purchase collect for the
    /// whole elapsed time; the new robot starts collecting afterwards.
    ///
    /// Returns `None` when the robot cannot be afforded at all, or cannot be
    /// finished within the minutes left.
    ///
    /// # Example
    ///
    /// ```
    /// use geodemax::models::{Blueprint, Minutes, ResourceKind};
    /// use geodemax::state::ProductionState;
    ///
    /// let blueprint = Blueprint::standard(1, 4, 2, 3, 14, 2, 7);
    /// let start = ProductionState::initial(Minutes(24));
    ///
    /// // Two minutes of collecting ore, one to build.
    /// let next = start.advance_toward(&blueprint, ResourceKind::Clay).unwrap();
    /// assert_eq!(next.remaining(), Minutes(21));
    /// assert_eq!(next.stock(ResourceKind::Ore), 1);
    /// assert_eq!(next.producers(ResourceKind::Clay), 1);
    ///
    /// // Obsidian robots need clay, and nothing produces clay yet.
    /// assert!(start.advance_toward(&blueprint, ResourceKind::Obsidian).is_none());
    /// ```
    pub fn advance_toward(&self, blueprint: &Blueprint, producer: ResourceKind) -> Option<Self> {
        let cost = blueprint.cost(producer);
        let elapsed = self.minutes_to_afford(cost)? + 1;
        if elapsed > self.remaining.as_amount() {
            return None;
        }

        let mut next = self.clone();
        next.remaining = Minutes(self.remaining.get() - u32::try_from(elapsed).ok()?);
        for resource in ResourceKind::ALL {
            next.stock[resource] += self.producers[resource] * elapsed;
            next.stock[resource] -= cost.amount(resource);
        }
        next.producers[producer] += 1;
        Some(next)
    }

    /// Target total if no further robots are bought.
    pub fn leaf_value(&self) -> u64 {
        self.target_total() + self.producers[ResourceKind::TARGET] * self.remaining.as_amount()
    }

    /// Optimistic target total reachable from this state.
    ///
    /// Assumes a new target robot could be finished at the end of every
    /// remaining minute: `total + Σ_{i=0}^{R-1} (i + robots)` for `R` minutes
    /// left. No real continuation can collect more, so pruning on this value
    /// never discards the optimum.
    pub fn upper_bound(&self) -> u64 {
        let minutes = self.remaining.as_amount();
        let robots = self.producers[ResourceKind::TARGET];
        self.target_total() + robots * minutes + minutes * minutes.saturating_sub(1) / 2
    }

    /// Whether any continuation of this state could beat `incumbent`.
    pub fn can_improve(&self, incumbent: u64) -> bool {
        self.upper_bound() > incumbent
    }
}
