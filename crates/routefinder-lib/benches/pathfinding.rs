use criterion::{criterion_group, criterion_main, Criterion};
use once_cell::sync::Lazy;
use routefinder_lib::{
    load_graph, plan_route, MatrixCell, RouteAlgorithm, RouteRequest, WeightedGraph,
};
use std::hint::black_box;
use std::path::PathBuf;

fn fixture_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../docs/fixtures/cities.csv")
}

/// Ring of 12 locations where every location also links to the next three,
/// with weights that make longer detours occasionally cheaper.
fn ring_graph() -> WeightedGraph {
    const SIZE: usize = 12;
    let names: Vec<String> = (0..SIZE).map(|i| format!("L{i}")).collect();
    let rows: Vec<Vec<MatrixCell>> = (0..SIZE)
        .map(|from| {
            (0..SIZE)
                .map(|to| {
                    let offset = (to + SIZE - from) % SIZE;
                    match offset {
                        0 => MatrixCell::Weight(0),
                        1..=3 => MatrixCell::Weight(((from * 7 + to * 3) % 11 + offset) as u64),
                        _ => MatrixCell::Infinite,
                    }
                })
                .collect::<Vec<_>>()
        })
        .collect();
    WeightedGraph::from_matrix(names, rows).expect("ring matrix is square")
}

static CITIES: Lazy<WeightedGraph> =
    Lazy::new(|| load_graph(&fixture_path()).expect("fixture loads"));
static RING: Lazy<WeightedGraph> = Lazy::new(ring_graph);
static DFS_REQUEST: Lazy<RouteRequest> =
    Lazy::new(|| RouteRequest::dfs("Istanbul", "Antalya", 4));
static BFS_REQUEST: Lazy<RouteRequest> = Lazy::new(|| RouteRequest::bfs("Istanbul", "Antalya"));
static DIJKSTRA_REQUEST: Lazy<RouteRequest> = Lazy::new(|| RouteRequest {
    algorithm: RouteAlgorithm::Dijkstra,
    ..RouteRequest::bfs("Istanbul", "Antalya")
});

fn benchmark_pathfinding(c: &mut Criterion) {
    let cities = &*CITIES;

    c.bench_function("dfs_istanbul_antalya", |b| {
        let request = &*DFS_REQUEST;
        b.iter(|| {
            let plan = plan_route(cities, request).expect("known endpoints");
            black_box(plan.map(|plan| plan.distance))
        });
    });

    c.bench_function("bfs_istanbul_antalya", |b| {
        let request = &*BFS_REQUEST;
        b.iter(|| {
            let plan = plan_route(cities, request).expect("known endpoints");
            black_box(plan.map(|plan| plan.distance))
        });
    });

    c.bench_function("dijkstra_istanbul_antalya", |b| {
        let request = &*DIJKSTRA_REQUEST;
        b.iter(|| {
            let plan = plan_route(cities, request).expect("known endpoints");
            black_box(plan.map(|plan| plan.distance))
        });
    });

    let ring = &*RING;
    c.bench_function("dfs_ring_depth_8", |b| {
        let request = RouteRequest::dfs("L0", "L11", 8);
        b.iter(|| black_box(plan_route(ring, &request).expect("known endpoints")));
    });

    c.bench_function("bfs_ring", |b| {
        let request = RouteRequest::bfs("L0", "L11");
        b.iter(|| black_box(plan_route(ring, &request).expect("known endpoints")));
    });
}

criterion_group!(benches, benchmark_pathfinding);
criterion_main!(benches);
