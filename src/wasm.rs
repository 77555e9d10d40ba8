//! WebAssembly bindings for Geodemax.
//!
//! This module provides JavaScript-accessible functions for the blueprint
//! search. Inputs and outputs cross the boundary as JSON strings.

use serde::{Deserialize, Serialize};
use wasm_bindgen::prelude::*;

use crate::batch::{evaluate_all, quality_level_sum, top_product, BlueprintResult};
use crate::data::parse_blueprints;
use crate::models::BuildStep;
use crate::optimizer::{SearchConfig, SearchStatus};

fn default_minutes() -> u32 {
    24
}

/// JavaScript-friendly input for a search.
#[derive(Debug, Clone, Deserialize)]
pub struct JsSearchInput {
    /// Blueprint text, one blueprint per line.
    pub blueprints: String,
    #[serde(default = "default_minutes")]
    pub minutes: u32,
    #[serde(default)]
    pub node_limit: Option<u64>,
    #[serde(default)]
    pub plan: bool,
}

/// JavaScript-friendly result for one blueprint.
#[derive(Debug, Clone, Serialize)]
pub struct JsBlueprintResult {
    pub id: u32,
    pub geodes: u64,
    pub quality_level: u64,
    pub optimal: bool,
    pub expanded: u64,
    pub plan: Vec<BuildStep>,
}

/// JavaScript-friendly search result.
#[derive(Debug, Clone, Serialize, Default)]
pub struct JsSearchResult {
    pub success: bool,
    pub error: Option<String>,
    pub minutes: u32,
    pub results: Vec<JsBlueprintResult>,
    pub quality_level_sum: u64,
    pub top_three_product: u64,
}

impl From<&BlueprintResult> for JsBlueprintResult {
    fn from(result: &BlueprintResult) -> Self {
        JsBlueprintResult {
            id: result.id,
            geodes: result.outcome.best,
            quality_level: result.quality_level(),
            optimal: result.outcome.status == SearchStatus::Optimal,
            expanded: result.outcome.expanded,
            plan: result.outcome.plan.clone(),
        }
    }
}

fn failure(minutes: u32, message: String) -> String {
    serde_json::to_string(&JsSearchResult {
        success: false,
        error: Some(message),
        minutes,
        ..JsSearchResult::default()
    })
    .unwrap_or_default()
}

fn run_search(input: &JsSearchInput) -> String {
    let blueprints = match parse_blueprints(&input.blueprints) {
        Ok(b) => b,
        Err(e) => return failure(input.minutes, format!("Invalid blueprint: {}", e)),
    };

    let config = SearchConfig::new(input.minutes)
        .with_node_limit(input.node_limit)
        .with_plan(input.plan);
    // Browsers without shared memory have no rayon pool.
    let results = evaluate_all(&blueprints, &config, false);

    serde_json::to_string(&JsSearchResult {
        success: true,
        error: None,
        minutes: input.minutes,
        results: results.iter().map(JsBlueprintResult::from).collect(),
        quality_level_sum: quality_level_sum(&results),
        top_three_product: top_product(&results, 3),
    })
    .unwrap_or_default()
}

/// Run the blueprint search with the given configuration.
///
/// Takes a JSON string input and returns a JSON string result. Malformed
/// JSON or blueprint text yields `success: false` and an error message; no
/// partial results are returned.
#[wasm_bindgen]
pub fn best_achievable_json(input_json: &str) -> String {
    match serde_json::from_str::<JsSearchInput>(input_json) {
        Ok(input) => run_search(&input),
        Err(e) => failure(0, format!("Invalid input: {}", e)),
    }
}

/// Searches the embedded two-blueprint example with the given budget.
#[wasm_bindgen]
pub fn optimize_example(minutes: u32) -> String {
    run_search(&JsSearchInput {
        blueprints: include_str!("../data/example.txt").to_string(),
        minutes,
        node_limit: None,
        plan: true,
    })
}

/// Get the version of the optimizer.
#[wasm_bindgen]
pub fn get_version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}
