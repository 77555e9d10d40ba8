//! Data models and structures for Geodemax.
//!
//! This module contains the cost model shared by every other part of the crate:
//! the resource kinds, per-resource quantity maps, the time budget type, and
//! the blueprints that describe what each robot costs.

use std::fmt;
use std::ops::{Index, IndexMut};

use serde::{Deserialize, Serialize};

use crate::error::BlueprintError;

/// A category of resource, ordered by its place in the dependency chain.
///
/// Each resource kind has exactly one robot (producer) kind that yields one
/// unit of it per minute. `Geode` is the target resource: it is never spent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResourceKind {
    Ore,
    Clay,
    Obsidian,
    Geode,
}

impl ResourceKind {
    /// Every resource kind, lowest tier first.
    pub const ALL: [ResourceKind; 4] = [
        ResourceKind::Ore,
        ResourceKind::Clay,
        ResourceKind::Obsidian,
        ResourceKind::Geode,
    ];

    /// The resource whose final total is maximized.
    pub const TARGET: ResourceKind = ResourceKind::Geode;

    /// The resource whose robot every factory starts with.
    pub const SEED: ResourceKind = ResourceKind::Ore;

    /// Position in the dependency chain, starting at 1.
    pub fn tier(self) -> u8 {
        self as u8 + 1
    }

    pub fn is_target(self) -> bool {
        self == Self::TARGET
    }

    /// Lowercase name as it appears in blueprint text.
    pub fn name(self) -> &'static str {
        match self {
            ResourceKind::Ore => "ore",
            ResourceKind::Clay => "clay",
            ResourceKind::Obsidian => "obsidian",
            ResourceKind::Geode => "geode",
        }
    }

    /// Looks up a resource kind by name, ignoring ASCII case.
    ///
    /// # Example
    ///
    /// ```
    /// use geodemax::models::ResourceKind;
    ///
    /// assert_eq!(ResourceKind::from_name("Obsidian"), Some(ResourceKind::Obsidian));
    /// assert_eq!(ResourceKind::from_name("diamond"), None);
    /// ```
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.name().eq_ignore_ascii_case(name))
    }

    fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.name())
    }
}

/// One value per [`ResourceKind`].
///
/// Indexing is only possible with a `ResourceKind`, so per-resource amounts
/// cannot be mixed up with plain positions or with time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
pub struct ResourceMap<T>([T; 4]);

impl<T: Copy> ResourceMap<T> {
    /// Builds a map by evaluating `f` for every resource kind.
    pub fn from_fn(f: impl FnMut(ResourceKind) -> T) -> Self {
        Self(ResourceKind::ALL.map(f))
    }

    /// Iterates over `(kind, value)` pairs, lowest tier first.
    pub fn iter(&self) -> impl Iterator<Item = (ResourceKind, T)> + '_ {
        ResourceKind::ALL.into_iter().map(move |kind| (kind, self[kind]))
    }
}

impl<T> Index<ResourceKind> for ResourceMap<T> {
    type Output = T;

    fn index(&self, kind: ResourceKind) -> &T {
        &self.0[kind.index()]
    }
}

impl<T> IndexMut<ResourceKind> for ResourceMap<T> {
    fn index_mut(&mut self, kind: ResourceKind) -> &mut T {
        &mut self.0[kind.index()]
    }
}

/// A span of time measured in whole minutes (search ticks).
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Minutes(pub u32);

impl Minutes {
    pub const ZERO: Minutes = Minutes(0);

    pub fn get(self) -> u32 {
        self.0
    }

    /// The minute count widened for multiplication with resource amounts.
    pub fn as_amount(self) -> u64 {
        u64::from(self.0)
    }

    pub fn checked_sub(self, other: Minutes) -> Option<Minutes> {
        self.0.checked_sub(other.0).map(Minutes)
    }
}

impl From<u32> for Minutes {
    fn from(value: u32) -> Self {
        Minutes(value)
    }
}

impl fmt::Display for Minutes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

/// The resources spent to build one robot.
///
/// # Example
///
/// ```
/// use geodemax::models::{Cost, ResourceKind};
///
/// let cost = Cost::new().with(ResourceKind::Ore, 3).with(ResourceKind::Clay, 14);
/// assert_eq!(cost.amount(ResourceKind::Clay), 14);
/// assert_eq!(cost.amount(ResourceKind::Obsidian), 0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
pub struct Cost(ResourceMap<u64>);

impl Cost {
    /// A cost of nothing at all.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns this cost with `amount` units of `resource` added.
    pub fn with(mut self, resource: ResourceKind, amount: u64) -> Self {
        self.0[resource] += amount;
        self
    }

    pub fn amount(&self, resource: ResourceKind) -> u64 {
        self.0[resource]
    }

    /// Iterates over the resources with a non-zero amount.
    pub fn required(&self) -> impl Iterator<Item = (ResourceKind, u64)> + '_ {
        self.0.iter().filter(|&(_, amount)| amount > 0)
    }
}

/// A complete problem instance: one [`Cost`] per robot kind.
///
/// Blueprints are validated on construction and immutable afterwards. The
/// per-resource consumption cap used to prune the search is computed once here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Blueprint {
    id: u32,
    costs: ResourceMap<Cost>,
    max_consumption: ResourceMap<u64>,
}

impl Blueprint {
    /// Creates a blueprint from one cost per robot kind.
    ///
    /// # Errors
    ///
    /// Returns [`BlueprintError::CyclicCost`] when a robot costs a resource of
    /// its own or a later tier (the seed robot may cost its own resource), or
    /// when any robot costs the target resource.
    pub fn new(id: u32, costs: ResourceMap<Cost>) -> Result<Self, BlueprintError> {
        for (producer, cost) in costs.iter() {
            for (resource, _) in cost.required() {
                let self_seeded = producer == ResourceKind::SEED && resource == ResourceKind::SEED;
                if resource.is_target() || (resource.tier() >= producer.tier() && !self_seeded) {
                    return Err(BlueprintError::CyclicCost {
                        blueprint: id,
                        producer,
                        resource,
                    });
                }
            }
        }
        Ok(Self::from_valid_costs(id, costs))
    }

    /// Creates a blueprint in the standard layout, where the ore and clay robots
    /// cost ore, the obsidian robot costs ore and clay, and the geode robot
    /// costs ore and obsidian.
    ///
    /// # Example
    ///
    /// ```
    /// use geodemax::models::{Blueprint, ResourceKind};
    ///
    /// let blueprint = Blueprint::standard(1, 4, 2, 3, 14, 2, 7);
    /// assert_eq!(blueprint.max_consumption(ResourceKind::Ore), 4);
    /// assert_eq!(blueprint.max_consumption(ResourceKind::Clay), 14);
    /// assert_eq!(blueprint.max_consumption(ResourceKind::Obsidian), 7);
    /// ```
    pub fn standard(
        id: u32,
        ore_robot_ore: u64,
        clay_robot_ore: u64,
        obsidian_robot_ore: u64,
        obsidian_robot_clay: u64,
        geode_robot_ore: u64,
        geode_robot_obsidian: u64,
    ) -> Self {
        use ResourceKind::*;

        let costs = ResourceMap::from_fn(|producer| match producer {
            Ore => Cost::new().with(Ore, ore_robot_ore),
            Clay => Cost::new().with(Ore, clay_robot_ore),
            Obsidian => Cost::new()
                .with(Ore, obsidian_robot_ore)
                .with(Clay, obsidian_robot_clay),
            Geode => Cost::new()
                .with(Ore, geode_robot_ore)
                .with(Obsidian, geode_robot_obsidian),
        });
        Self::from_valid_costs(id, costs)
    }

    fn from_valid_costs(id: u32, costs: ResourceMap<Cost>) -> Self {
        let max_consumption = ResourceMap::from_fn(|resource| {
            costs
                .iter()
                .map(|(_, cost)| cost.amount(resource))
                .max()
                .unwrap_or(0)
        });
        Self {
            id,
            costs,
            max_consumption,
        }
    }

    pub fn id(&self) -> u32 {
        self.id
    }

    /// The cost of one robot producing `producer`.
    pub fn cost(&self, producer: ResourceKind) -> &Cost {
        &self.costs[producer]
    }

    /// The most of `resource` any single robot costs.
    ///
    /// Only one robot can be built per minute, so owning more robots of this
    /// resource than this value never helps.
    pub fn max_consumption(&self, resource: ResourceKind) -> u64 {
        self.max_consumption[resource]
    }
}

/// One robot purchase in a build plan.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BuildStep {
    /// Minute (counted from the start of the budget) at which the robot is ready.
    pub minute: Minutes,
    /// Kind of robot built.
    pub producer: ResourceKind,
}

// ============================================================================
// CSV Row Structures
// ============================================================================

/// CSV row structure for a blueprint in the standard layout.
///
/// Amounts are read as signed integers so that negative costs can be reported
/// as such rather than as a generic number format error.
#[derive(Debug, Deserialize)]
pub struct BlueprintRow {
    /// Blueprint identifier
    pub id: u32,
    /// Ore cost of the ore robot
    pub ore_robot_ore: i64,
    /// Ore cost of the clay robot
    pub clay_robot_ore: i64,
    /// Ore cost of the obsidian robot
    pub obsidian_robot_ore: i64,
    /// Clay cost of the obsidian robot
    pub obsidian_robot_clay: i64,
    /// Ore cost of the geode robot
    pub geode_robot_ore: i64,
    /// Obsidian cost of the geode robot
    pub geode_robot_obsidian: i64,
}
