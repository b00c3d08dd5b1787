use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use dijkstra_core::{
    prelude::*,
    util::test_graphs::{generate_lattice, graph_from_edges},
};
use rand::prelude::*;

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);

fn gen_rand_graph(number_nodes: usize) -> Graph {
    let mut rng = StdRng::seed_from_u64(7);

    // 2.5 edges per node on average
    let number_edges: usize = (number_nodes as f32 * 2.5) as usize;

    let edges: Vec<(usize, usize, Weight)> = (0..number_edges)
        .map(|_| {
            (
                rng.gen_range(0..number_nodes),
                rng.gen_range(0..number_nodes),
                rng.gen_range(1..100),
            )
        })
        .collect();

    graph_from_edges(number_nodes, &edges).expect("random edges are valid")
}

fn criterion_benchmark(c: &mut Criterion) {
    let mut graphs: Vec<Graph> = [16, 64, 1000].iter().map(|i| gen_rand_graph(*i)).collect();
    graphs.push(generate_lattice(30, 30));

    let mut group = c.benchmark_group("frontier_kinds");
    for graph in graphs {
        let src = node_index(0);
        let dst = node_index(graph.num_nodes() - 1);

        for kind in [FrontierKind::LinearScan, FrontierKind::BinaryHeap] {
            group.bench_with_input(
                BenchmarkId::new(format!("{:?}", kind), graph.num_nodes()),
                &graph,
                |b, g| {
                    let mut dijkstra = Dijkstra::with_params(g, SearchParams::new().frontier(kind));
                    b.iter(|| dijkstra.search(black_box(src), black_box(dst)));
                },
            );
        }
    }
    group.finish();
}
