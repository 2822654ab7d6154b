use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use all_pairs_distances::all_pairs::all_pairs_algorithm::AllPairsAlgorithm;
use all_pairs_distances::all_pairs::dijkstra::DijkstraAllPairs;
use all_pairs_distances::all_pairs::floyd_warshall::ShortestPathEngine;
use all_pairs_distances::config::EngineConfig;
use all_pairs_distances::utils::generator::random_weighted_graph;

fn bench_all_pairs(c: &mut Criterion) {
    let mut group = c.benchmark_group("all_pairs");

    for num_nodes in [16u32, 64, 128] {
        let graph = random_weighted_graph(num_nodes, 0.1, 10, 42).unwrap();

        group.bench_with_input(BenchmarkId::new("floyd_warshall", num_nodes), &graph, |b, graph| {
            let mut engine = ShortestPathEngine::new();
            b.iter(|| {
                engine.calculate(black_box(graph)).unwrap();
            });
        });

        group.bench_with_input(BenchmarkId::new("repeated_dijkstra", num_nodes), &graph, |b, graph| {
            let mut algorithm = DijkstraAllPairs::new(EngineConfig::default());
            b.iter(|| {
                algorithm.calculate(black_box(graph)).unwrap();
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_all_pairs);
criterion_main!(benches);
