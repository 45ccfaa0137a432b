//! Criterion benchmarks for the tabucol search core.
//!
//! Uses synthetic circulant graphs to measure conflict evaluation and
//! full-run cost independent of any input format.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use tabu_color::tabucol::{conflict_count, TabucolConfig, TabucolRunner};
use tabu_color::Graph;

/// Circulant graph C_n(1..=width): each vertex connects to its `width`
/// clockwise successors. Chromatic number is width + 1 when (width + 1)
/// divides n.
fn circulant(n: usize, width: usize) -> Graph {
    let mut edges = Vec::new();
    for v in 0..n {
        for d in 1..=width {
            edges.push((v, (v + d) % n));
        }
    }
    Graph::from_edges(n, &edges).unwrap()
}

fn bench_conflict_count(c: &mut Criterion) {
    let mut group = c.benchmark_group("conflict_count");
    for &n in &[100, 1_000, 10_000] {
        let graph = circulant(n, 4);
        let coloring: Vec<usize> = (0..n).map(|v| v % 3).collect();
        group.bench_with_input(BenchmarkId::from_parameter(n), &n, |b, _| {
            b.iter(|| conflict_count(black_box(&graph), black_box(&coloring)))
        });
    }
    group.finish();
}

fn bench_full_run(c: &mut Criterion) {
    let graph = circulant(60, 3);
    let config = TabucolConfig::default()
        .with_max_iterations(2_000)
        .with_reps(50)
        .with_seed(7);
    c.bench_function("tabucol_circulant_60_k4", |b| {
        b.iter(|| TabucolRunner::run(black_box(&graph), 4, black_box(&config)).unwrap())
    });
}

criterion_group!(benches, bench_conflict_count, bench_full_run);
criterion_main!(benches);
