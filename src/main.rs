//! Geodemax - Command Line Interface
//!
//! This is the main entry point for the blueprint search tool.
//! Run with `--help` to see all available options.

use clap::Parser;
use std::error::Error;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

use geodemax::{
    batch::evaluate_all,
    data::{load_blueprints, InputFormat},
    display::{display_results, Aggregate},
    optimizer::SearchConfig,
};

/// Command-line arguments for Geodemax.
#[derive(Parser, Debug)]
#[command(name = "geodemax")]
#[command(author, version, about = "Find the most geodes each robot factory blueprint can crack", long_about = None)]
struct Args {
    /// Blueprint file (puzzle text, or CSV in the standard layout)
    input: PathBuf,

    /// Time budget in minutes
    #[arg(short, long, default_value = "24")]
    minutes: u32,

    /// How to combine the per-blueprint results
    #[arg(long, value_enum, default_value = "quality")]
    mode: Aggregate,

    /// Number of leading blueprints searched in product mode
    #[arg(long, default_value = "3")]
    take: usize,

    /// Layout of the input file
    #[arg(long, value_enum, default_value = "auto")]
    format: InputFormat,

    /// Stop each search after expanding this many states
    #[arg(long)]
    node_limit: Option<u64>,

    /// Disable bound and robot-cap pruning (exhaustive; small budgets only)
    #[arg(long, default_value = "false")]
    no_prune: bool,

    /// Print the purchase order behind each result
    #[arg(long, default_value = "false")]
    plan: bool,

    /// Search blueprints one after another instead of concurrently
    #[arg(long, default_value = "false")]
    sequential: bool,
}

fn main() -> Result<(), Box<dyn Error>> {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    if !args.input.exists() {
        eprintln!("Error: '{}' not found.", args.input.display());
        std::process::exit(1);
    }

    let mut blueprints = load_blueprints(&args.input, args.format)?;
    if args.mode == Aggregate::Product {
        blueprints.truncate(args.take);
    }

    println!("Geodemax - Blueprint Geode Optimizer");
    println!("================================================================");
    println!();
    println!("Configuration:");
    println!("  Input:       {}", args.input.display());
    println!("  Blueprints:  {}", blueprints.len());
    println!("  Minutes:     {}", args.minutes);
    println!(
        "  Pruning:     {}",
        if args.no_prune { "off (exhaustive)" } else { "bound + robot caps" }
    );
    if let Some(limit) = args.node_limit {
        println!("  Node Limit:  {}", limit);
    }

    if blueprints.is_empty() {
        println!();
        println!("[WARNING] No blueprints found in the input.");
        return Ok(());
    }

    let config = SearchConfig::new(args.minutes)
        .with_pruning(!args.no_prune)
        .with_node_limit(args.node_limit)
        .with_plan(args.plan);

    let results = evaluate_all(&blueprints, &config, !args.sequential);
    display_results(&results, args.minutes, args.mode, args.take, args.plan);

    Ok(())
}
