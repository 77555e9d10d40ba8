//! Criterion benchmarks for the blueprint search.
//!
//! Uses the two example blueprints at both common budgets, plus the
//! exhaustive mode on a short budget to show what pruning saves.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use geodemax::batch::evaluate_all;
use geodemax::models::Blueprint;
use geodemax::optimizer::{find_best_plan, SearchConfig};

fn example_blueprints() -> Vec<Blueprint> {
    vec![
        Blueprint::standard(1, 4, 2, 3, 14, 2, 7),
        Blueprint::standard(2, 2, 3, 3, 8, 3, 12),
    ]
}

// ===========================================================================
// Single blueprint
// ===========================================================================

fn bench_single_blueprint(c: &mut Criterion) {
    let mut group = c.benchmark_group("single_blueprint");
    group.sample_size(10);

    for blueprint in example_blueprints() {
        for &minutes in &[24u32, 32] {
            let config = SearchConfig::new(minutes).with_plan(false);
            group.bench_with_input(
                BenchmarkId::new(format!("blueprint{}", blueprint.id()), minutes),
                &(blueprint.clone(), config),
                |b, (bp, cfg)| b.iter(|| black_box(find_best_plan(black_box(bp), black_box(cfg)))),
            );
        }
    }
    group.finish();
}

// ===========================================================================
// Pruning on and off
// ===========================================================================

fn bench_pruning(c: &mut Criterion) {
    let mut group = c.benchmark_group("pruning");
    group.sample_size(10);

    let blueprint = Blueprint::standard(3, 1, 1, 1, 2, 1, 2);
    for &pruning in &[true, false] {
        let config = SearchConfig::new(9).with_pruning(pruning).with_plan(false);
        group.bench_with_input(
            BenchmarkId::from_parameter(if pruning { "pruned" } else { "exhaustive" }),
            &config,
            |b, cfg| b.iter(|| black_box(find_best_plan(black_box(&blueprint), black_box(cfg)))),
        );
    }
    group.finish();
}

// ===========================================================================
// Batch
// ===========================================================================

fn bench_batch(c: &mut Criterion) {
    let mut group = c.benchmark_group("batch");
    group.sample_size(10);

    let blueprints = example_blueprints();
    let config = SearchConfig::new(24).with_plan(false);
    for &parallel in &[false, true] {
        group.bench_with_input(
            BenchmarkId::from_parameter(if parallel { "parallel" } else { "sequential" }),
            &parallel,
            |b, &par| b.iter(|| black_box(evaluate_all(black_box(&blueprints), &config, par))),
        );
    }
    group.finish();
}

criterion_group!(benches, bench_single_blueprint, bench_pruning, bench_batch);
criterion_main!(benches);
