use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use graph_center::graph::generators::{generate_grid, generate_random};
use graph_center::{CenterFinder, NaiveCenterFinder, Workspace};
use rand::rngs::StdRng;
use rand::SeedableRng;

fn bench_random_graphs(c: &mut Criterion) {
    let mut group = c.benchmark_group("naive_center_random");
    let finder = NaiveCenterFinder::new();
    let mut rng = StdRng::seed_from_u64(7);

    for size in [50usize, 100, 200] {
        let generated = generate_random(size, 2.0, &mut rng).expect("graph generation failed");
        group.bench_with_input(BenchmarkId::from_parameter(size), &generated, |b, g| {
            b.iter(|| {
                finder
                    .find_center_nodes(black_box(&g.graph), g.nodes[0], &g.weights)
                    .expect("center finding failed")
            })
        });
    }
    group.finish();
}

fn bench_grid_with_reused_workspace(c: &mut Criterion) {
    let finder = NaiveCenterFinder::new();
    let generated = generate_grid(12, 12).expect("graph generation failed");
    let mut workspace = Workspace::with_capacity(generated.nodes.len());

    c.bench_function("naive_center_grid_12x12_reused_workspace", |b| {
        b.iter(|| {
            finder
                .find_center_nodes_with(
                    black_box(&generated.graph),
                    generated.nodes[0],
                    &generated.weights,
                    &mut workspace,
                )
                .expect("center finding failed")
        })
    });
}

criterion_group!(benches, bench_random_graphs, bench_grid_with_reused_workspace);
criterion_main!(benches);
