use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use keygraph_core::Graph;
use std::hint::black_box;

/// Build a layered graph where every node links to the next `fan_out` nodes.
fn layered(nodes: u32, fan_out: u32) -> Graph<u32, ()> {
    let mut graph = Graph::with_capacity(nodes as usize);
    for id in 0..nodes {
        graph.add_node(id).unwrap();
    }
    for id in 0..nodes {
        for next in (id + 1)..(id + 1 + fan_out).min(nodes) {
            graph.add_edge(&id, &next, i64::from(next - id)).unwrap();
        }
    }
    graph
}

/// Benchmark edge insertion for increasing graph sizes.
fn bench_build(c: &mut Criterion) {
    let mut group = c.benchmark_group("build_layered");
    for nodes in [100u32, 1_000, 10_000] {
        group.throughput(Throughput::Elements(u64::from(nodes) * 4));
        group.bench_with_input(BenchmarkId::from_parameter(nodes), &nodes, |b, &n| {
            b.iter(|| black_box(layered(n, 4)));
        });
    }
    group.finish();
}

/// Benchmark tearing a graph down root-first, the only order deletion allows.
fn bench_teardown(c: &mut Criterion) {
    let template = layered(1_000, 4);
    c.bench_function("teardown_1000", |b| {
        b.iter_batched(
            || template.clone(),
            |mut graph| {
                for id in 0..1_000u32 {
                    graph.delete_node(&id).unwrap();
                }
                black_box(graph)
            },
            criterion::BatchSize::SmallInput,
        );
    });
}

criterion_group!(benches, bench_build, bench_teardown);
criterion_main!(benches);
