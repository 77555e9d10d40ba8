//! Tests for the branch-and-bound search.

use geodemax::models::{Blueprint, Minutes, ResourceKind};
use geodemax::optimizer::{
    best_achievable, find_best_plan, BlueprintSearch, SearchConfig, SearchStatus,
};
use geodemax::state::ProductionState;

fn first_example() -> Blueprint {
    Blueprint::standard(1, 4, 2, 3, 14, 2, 7)
}

fn second_example() -> Blueprint {
    Blueprint::standard(2, 2, 3, 3, 8, 3, 12)
}

/// Minute-by-minute reference: every minute either wait or pay for any
/// affordable robot.
fn simulate(blueprint: &Blueprint, minutes: u32, stock: [u64; 4], robots: [u64; 4]) -> u64 {
    if minutes == 0 {
        return stock[3];
    }

    let mut collected = stock;
    for (amount, rate) in collected.iter_mut().zip(robots) {
        *amount += rate;
    }
    let mut best = simulate(blueprint, minutes - 1, collected, robots);

    for (slot, producer) in ResourceKind::ALL.into_iter().enumerate() {
        let cost = blueprint.cost(producer);
        let affordable = ResourceKind::ALL
            .into_iter()
            .enumerate()
            .all(|(i, resource)| stock[i] >= cost.amount(resource));
        if !affordable {
            continue;
        }
        let mut paid = collected;
        for (i, resource) in ResourceKind::ALL.into_iter().enumerate() {
            paid[i] -= cost.amount(resource);
        }
        let mut more_robots = robots;
        more_robots[slot] += 1;
        best = best.max(simulate(blueprint, minutes - 1, paid, more_robots));
    }
    best
}

fn brute_force(blueprint: &Blueprint, minutes: u32) -> u64 {
    simulate(blueprint, minutes, [0; 4], [1, 0, 0, 0])
}

#[test]
fn test_example_blueprints_24_minutes() {
    assert_eq!(best_achievable(&first_example(), 24), 9);
    assert_eq!(best_achievable(&second_example(), 24), 12);
}

#[test]
fn test_example_blueprints_32_minutes() {
    assert_eq!(best_achievable(&first_example(), 32), 56);
    assert_eq!(best_achievable(&second_example(), 32), 62);
}

#[test]
fn test_zero_budget() {
    let outcome = find_best_plan(&first_example(), &SearchConfig::new(0));

    assert_eq!(outcome.best, 0);
    assert_eq!(outcome.status, SearchStatus::Optimal);
    assert!(outcome.plan.is_empty());
}

#[test]
fn test_short_budget_cannot_reach_geodes() {
    // The first obsidian robot alone needs clay robots and 14 clay.
    for minutes in 0..=10 {
        assert_eq!(best_achievable(&first_example(), minutes), 0);
    }
}

#[test]
fn test_matches_minute_by_minute_simulation() {
    let cheap = Blueprint::standard(9, 1, 1, 1, 1, 1, 1);
    let mixed = Blueprint::standard(3, 2, 1, 2, 2, 1, 2);

    for minutes in 0..=8 {
        assert_eq!(
            best_achievable(&cheap, minutes),
            brute_force(&cheap, minutes),
            "cheap blueprint, {} minutes",
            minutes
        );
        assert_eq!(
            best_achievable(&mixed, minutes),
            brute_force(&mixed, minutes),
            "mixed blueprint, {} minutes",
            minutes
        );
    }
}

#[test]
fn test_pruning_preserves_optimum() {
    let blueprints = [
        first_example(),
        second_example(),
        Blueprint::standard(4, 1, 1, 1, 1, 1, 1),
        Blueprint::standard(5, 3, 1, 1, 2, 2, 1),
    ];

    for blueprint in &blueprints {
        for minutes in 0..=8 {
            let pruned = find_best_plan(blueprint, &SearchConfig::new(minutes));
            let exhaustive =
                find_best_plan(blueprint, &SearchConfig::new(minutes).with_pruning(false));
            assert_eq!(pruned.best, exhaustive.best);
            assert!(pruned.expanded <= exhaustive.expanded);
            assert_eq!(exhaustive.pruned, 0);
        }
    }
}

#[test]
fn test_more_time_never_hurts() {
    let blueprint = second_example();
    let mut previous = 0;
    for minutes in 0..=24 {
        let best = best_achievable(&blueprint, minutes);
        assert!(best >= previous, "{} minutes gave {} < {}", minutes, best, previous);
        previous = best;
    }
}

#[test]
fn test_search_is_deterministic() {
    let config = SearchConfig::new(24);
    let first = find_best_plan(&first_example(), &config);
    let second = find_best_plan(&first_example(), &config);

    assert_eq!(first, second);
}

#[test]
fn test_plan_replays_to_best() {
    for blueprint in [first_example(), second_example()] {
        let budget = Minutes(24);
        let outcome = find_best_plan(&blueprint, &SearchConfig::new(budget.get()));
        assert!(!outcome.plan.is_empty());

        let mut state = ProductionState::initial(budget);
        for step in &outcome.plan {
            state = state
                .advance_toward(&blueprint, step.producer)
                .expect("every planned purchase is feasible");
            assert_eq!(budget.checked_sub(state.remaining()), Some(step.minute));
        }
        assert_eq!(state.leaf_value(), outcome.best);
    }
}

#[test]
fn test_plan_minutes_increase() {
    let outcome = find_best_plan(&second_example(), &SearchConfig::new(24));
    for pair in outcome.plan.windows(2) {
        assert!(pair[0].minute < pair[1].minute);
    }
}

#[test]
fn test_plan_not_recorded() {
    let outcome = find_best_plan(&first_example(), &SearchConfig::new(24).with_plan(false));

    assert_eq!(outcome.best, 9);
    assert!(outcome.plan.is_empty());
}

#[test]
fn test_node_limit() {
    let config = SearchConfig::new(24).with_node_limit(Some(10));
    let outcome = find_best_plan(&first_example(), &config);

    assert_eq!(outcome.status, SearchStatus::NodeLimit);
    assert_eq!(outcome.expanded, 10);
    assert!(outcome.best <= 9);
}

#[test]
fn test_zero_node_limit() {
    let config = SearchConfig::new(24).with_node_limit(Some(0));
    let outcome = find_best_plan(&first_example(), &config);

    assert_eq!(outcome.status, SearchStatus::NodeLimit);
    assert_eq!(outcome.expanded, 0);
    assert_eq!(outcome.best, 0);
}

#[test]
fn test_generous_node_limit_is_optimal() {
    let config = SearchConfig::new(24).with_node_limit(Some(u64::MAX));
    let outcome = find_best_plan(&first_example(), &config);

    assert_eq!(outcome.status, SearchStatus::Optimal);
    assert_eq!(outcome.best, 9);
}

#[test]
fn test_is_sensible() {
    let blueprint = first_example();
    let config = SearchConfig::new(24);
    let search = BlueprintSearch::new(&blueprint, &config);
    let start = ProductionState::initial(Minutes(24));

    assert!(search.is_sensible(&start, ResourceKind::Ore));
    assert!(search.is_sensible(&start, ResourceKind::Clay));
    assert!(!search.is_sensible(&start, ResourceKind::Obsidian));
    assert!(!search.is_sensible(&start, ResourceKind::Geode));

    // Four ore robots already cover the most ore any robot costs.
    let mut state = start;
    for _ in 0..3 {
        state = state
            .advance_toward(&blueprint, ResourceKind::Ore)
            .expect("ore robots are affordable");
    }
    assert_eq!(state.producers(ResourceKind::Ore), 4);
    assert!(!search.is_sensible(&state, ResourceKind::Ore));
}

#[test]
fn test_expand_initial_state() {
    let blueprint = first_example();
    let config = SearchConfig::new(24);
    let search = BlueprintSearch::new(&blueprint, &config);

    let children = search.expand(&ProductionState::initial(Minutes(24)));
    let producers: Vec<ResourceKind> = children.iter().map(|(p, _)| *p).collect();
    assert_eq!(producers, vec![ResourceKind::Ore, ResourceKind::Clay]);

    let exhaustive_config = SearchConfig::new(24).with_pruning(false);
    let exhaustive = BlueprintSearch::new(&blueprint, &exhaustive_config);
    // Unreachable robots are still skipped without pruning.
    assert_eq!(exhaustive.expand(&ProductionState::initial(Minutes(24))).len(), 2);
}

#[test]
fn test_free_robots() {
    let blueprint = Blueprint::standard(6, 0, 0, 0, 0, 0, 0);
    // A new geode robot every minute: 0 + 1 + ... + 4.
    assert_eq!(best_achievable(&blueprint, 5), 10);
}
