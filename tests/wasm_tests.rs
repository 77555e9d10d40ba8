//! Tests for the JSON entry points used by the WebAssembly build.

use geodemax::wasm::{best_achievable_json, get_version, optimize_example};
use serde_json::Value;

const EXAMPLE: &str = "Blueprint 1: Each ore robot costs 4 ore. Each clay robot costs 2 ore. Each obsidian robot costs 3 ore and 14 clay. Each geode robot costs 2 ore and 7 obsidian.\nBlueprint 2: Each ore robot costs 2 ore. Each clay robot costs 3 ore. Each obsidian robot costs 3 ore and 8 clay. Each geode robot costs 3 ore and 12 obsidian.";

fn parse(output: &str) -> Value {
    serde_json::from_str(output).expect("output is valid JSON")
}

#[test]
fn test_best_achievable_json() {
    let input = serde_json::json!({ "blueprints": EXAMPLE }).to_string();
    let output = parse(&best_achievable_json(&input));

    assert_eq!(output["success"], true);
    assert_eq!(output["minutes"], 24);
    assert_eq!(output["quality_level_sum"], 33);
    assert_eq!(output["top_three_product"], 108);
    assert_eq!(output["results"][0]["geodes"], 9);
    assert_eq!(output["results"][1]["geodes"], 12);
    assert_eq!(output["results"][1]["optimal"], true);
}

#[test]
fn test_best_achievable_json_with_plan() {
    let input = serde_json::json!({ "blueprints": EXAMPLE, "minutes": 24, "plan": true }).to_string();
    let output = parse(&best_achievable_json(&input));

    let plan = output["results"][0]["plan"]
        .as_array()
        .expect("plan is an array");
    assert!(!plan.is_empty());
    assert!(plan[0]["minute"].is_u64());
    assert!(plan.iter().any(|step| step["producer"] == "geode"));
}

#[test]
fn test_best_achievable_json_node_limit() {
    let input = serde_json::json!({ "blueprints": EXAMPLE, "node_limit": 5 }).to_string();
    let output = parse(&best_achievable_json(&input));

    assert_eq!(output["success"], true);
    assert_eq!(output["results"][0]["optimal"], false);
    assert_eq!(output["results"][0]["expanded"], 5);
}

#[test]
fn test_invalid_json() {
    let output = parse(&best_achievable_json("not json"));

    assert_eq!(output["success"], false);
    assert!(output["error"]
        .as_str()
        .is_some_and(|e| e.starts_with("Invalid input")));
}

#[test]
fn test_invalid_blueprint() {
    let input = serde_json::json!({ "blueprints": "Blueprint 1: Each ore robot costs 4 ore." })
        .to_string();
    let output = parse(&best_achievable_json(&input));

    assert_eq!(output["success"], false);
    assert!(output["error"]
        .as_str()
        .is_some_and(|e| e.starts_with("Invalid blueprint")));
    assert!(output["results"].as_array().is_some_and(|r| r.is_empty()));
}

#[test]
fn test_optimize_example() {
    let output = parse(&optimize_example(24));

    assert_eq!(output["success"], true);
    assert_eq!(output["quality_level_sum"], 33);
}

#[test]
fn test_version() {
    assert_eq!(get_version(), env!("CARGO_PKG_VERSION"));
}
