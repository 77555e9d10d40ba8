//! Display and formatting utilities for Geodemax.
//!
//! This module renders search results as plain text for the command line.

use std::fmt::Write;

use crate::batch::{quality_level_sum, top_product, BlueprintResult};
use crate::models::BuildStep;
use crate::optimizer::SearchStatus;

/// How the per-blueprint results are combined into one number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum Aggregate {
    /// Sum of `id × best` over all blueprints.
    Quality,
    /// Product of the best totals of the first few blueprints.
    Product,
}

/// Formats a build plan, one purchase per line.
///
/// # Example
///
/// ```
/// use geodemax::display::format_plan;
/// use geodemax::models::{BuildStep, Minutes, ResourceKind};
///
/// let plan = [BuildStep { minute: Minutes(3), producer: ResourceKind::Clay }];
/// assert_eq!(format_plan(&plan), "    minute  3: clay robot\n");
/// ```
pub fn format_plan(plan: &[BuildStep]) -> String {
    let mut out = String::new();
    for step in plan {
        let _ = writeln!(out, "    minute {:>2}: {} robot", step.minute, step.producer);
    }
    out
}

/// Short label for a search status.
pub fn format_status(status: SearchStatus) -> &'static str {
    match status {
        SearchStatus::Optimal => "optimal",
        SearchStatus::NodeLimit => "node limit",
    }
}

/// Formats the per-blueprint results table.
pub fn format_results_table(results: &[BlueprintResult]) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "{:>9} {:>7} {:>8} {:>12} {:>10}  {}",
        "Blueprint", "Geodes", "Quality", "Expanded", "Pruned", "Status"
    );
    let _ = writeln!(out, "{}", "-".repeat(64));
    for result in results {
        let _ = writeln!(
            out,
            "{:>9} {:>7} {:>8} {:>12} {:>10}  {}",
            result.id,
            result.outcome.best,
            result.quality_level(),
            result.outcome.expanded,
            result.outcome.pruned,
            format_status(result.outcome.status)
        );
    }
    out
}

/// Displays the batch results and the requested aggregate to stdout.
///
/// # Arguments
///
/// * `results` - Per-blueprint results in input order
/// * `minutes` - Time budget that was searched
/// * `aggregate` - How to combine the results
/// * `take` - Number of blueprints used by [`Aggregate::Product`]
/// * `show_plan` - Print each blueprint's purchase order
pub fn display_results(
    results: &[BlueprintResult],
    minutes: u32,
    aggregate: Aggregate,
    take: usize,
    show_plan: bool,
) {
    println!();
    println!("[BEST GEODE YIELD] ({} minutes)", minutes);
    println!("----------------------------------------------------------------");
    print!("{}", format_results_table(results));

    if show_plan {
        println!();
        println!("[BUILD ORDERS]");
        println!("----------------------------------------------------------------");
        for result in results {
            println!("  Blueprint {} ({} geodes):", result.id, result.outcome.best);
            if result.outcome.plan.is_empty() {
                println!("    (no purchases)");
            } else {
                print!("{}", format_plan(&result.outcome.plan));
            }
        }
    }

    println!();
    println!("[SUMMARY]");
    println!("----------------------------------------------------------------");
    match aggregate {
        Aggregate::Quality => {
            println!("  Quality level sum: {}", quality_level_sum(results));
        }
        Aggregate::Product => {
            let used = take.min(results.len());
            println!(
                "  Product of first {}: {}",
                used,
                top_product(results, take)
            );
        }
    }
    if results
        .iter()
        .any(|r| r.outcome.status == SearchStatus::NodeLimit)
    {
        println!("  [WARNING] Some searches hit the node limit; totals may be below optimal.");
    }
    println!();
}
