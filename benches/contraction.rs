//! Benchmarks for the operations on the hot path of every algorithm:
//! contraction, ordering, and one full randomized-trial run.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use hypergraph_mincut::contraction::{run, Context, Cxy, Fpz};
use hypergraph_mincut::ordering::{ordering, TightenRule};
use hypergraph_mincut::vertex_order_mincut::vertex_order_mincut;
use hypergraph_mincut::{Hypergraph, VertexId};

fn ring(n: usize) -> Hypergraph {
    let vertices: Vec<VertexId> = (0..n as u64).collect();
    let edges: Vec<Vec<VertexId>> =
        (0..n as u64).map(|i| vec![i, (i + 1) % n as u64]).collect();
    Hypergraph::new(&vertices, &edges).unwrap()
}

fn disjoint_pairs(n: usize) -> Hypergraph {
    let vertices: Vec<VertexId> = (0..2 * n as u64).collect();
    let edges: Vec<Vec<VertexId>> = (0..n as u64).map(|i| vec![2 * i, 2 * i + 1]).collect();
    Hypergraph::new(&vertices, &edges).unwrap()
}

fn bench_contract(c: &mut Criterion) {
    let mut group = c.benchmark_group("contract");

    for size in [10usize, 50, 200] {
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, &size| {
            b.iter_batched(
                || ring(size),
                |h| {
                    let e = h.edges().next().unwrap();
                    black_box(h.contract(e).unwrap());
                },
                criterion::BatchSize::SmallInput,
            );
        });
    }

    group.finish();
}

fn bench_ordering(c: &mut Criterion) {
    let mut group = c.benchmark_group("ordering");

    for size in [10usize, 50, 200] {
        let h = ring(size);
        let start = h.vertices().next().unwrap();

        group.throughput(Throughput::Elements(size as u64));
        for rule in [TightenRule::Kw, TightenRule::Mw, TightenRule::Q] {
            group.bench_with_input(BenchmarkId::new(format!("{rule:?}"), size), &size, |b, _| {
                b.iter(|| black_box(ordering(&h, start, rule).unwrap()));
            });
        }
    }

    group.finish();
}

fn bench_vertex_order_mincut(c: &mut Criterion) {
    let mut group = c.benchmark_group("vertex_order_mincut");

    for size in [10usize, 50, 100] {
        let h = ring(size);
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, _| {
            b.iter(|| black_box(vertex_order_mincut(&h, TightenRule::Q).unwrap()));
        });
    }

    group.finish();
}

fn bench_randomized_runs(c: &mut Criterion) {
    let mut group = c.benchmark_group("randomized_runs");

    let h = disjoint_pairs(20);
    group.bench_function("cxy_k2", |b| {
        b.iter(|| {
            let ctx = Context::new(2).with_seed(1).with_discovery_value(0.0).with_max_runs(20);
            black_box(run(&Cxy, &h, &ctx).unwrap());
        });
    });

    group.bench_function("fpz_k2", |b| {
        b.iter(|| {
            let ctx = Context::new(2).with_seed(1).with_discovery_value(0.0).with_max_runs(20);
            black_box(run(&Fpz, &h, &ctx).unwrap());
        });
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_contract,
    bench_ordering,
    bench_vertex_order_mincut,
    bench_randomized_runs,
);
criterion_main!(benches);
