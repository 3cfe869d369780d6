use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rand::rngs::StdRng;
use rand::SeedableRng;
use secret_santa::graph::{pairings, CompatibilityGraph};

fn no_exclusions() -> CompatibilityGraph<String> {
    CompatibilityGraph::from_exclusions((0..10).map(|i| (format!("N{}", i), Vec::<String>::new())))
}

fn partnered_exclusions() -> CompatibilityGraph<String> {
    let mut nodes = Vec::new();
    for i in 0..5 {
        let a = format!("N{}", 2 * i);
        let b = format!("N{}", 2 * i + 1);
        nodes.push((a.clone(), vec![b.clone()]));
        nodes.push((b, vec![a]));
    }
    CompatibilityGraph::from_exclusions(nodes)
}

fn pairings_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("Pairings");

    let graph = no_exclusions();
    let mut rng = StdRng::seed_from_u64(42);
    group.bench_function("no_exclusions_10", |b| {
        b.iter(|| pairings(black_box(&graph), &mut rng))
    });

    let graph = partnered_exclusions();
    let mut rng = StdRng::seed_from_u64(42);
    group.bench_function("partnered_exclusions_10", |b| {
        b.iter(|| pairings(black_box(&graph), &mut rng))
    });

    group.finish();
}

criterion_group!(benches, pairings_benchmark);
criterion_main!(benches);
