//! Common test utilities and fixture helpers.
//!
//! This module provides shared test infrastructure for integration tests:
//! the checked-in city distance table and small hand-built graphs.

use std::path::PathBuf;

use routefinder_lib::{load_graph, MatrixCell, WeightedGraph};

/// Path to fixtures directory used by tests.
#[allow(dead_code)]
pub fn fixtures_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../docs/fixtures")
}

/// Path to the city distance table fixture.
#[allow(dead_code)]
pub fn fixture_path() -> PathBuf {
    fixtures_dir().join("cities.csv")
}

/// Load the city distance table fixture.
#[allow(dead_code)]
pub fn fixture_graph() -> WeightedGraph {
    load_graph(&fixture_path()).expect("fixture distance table loads")
}

/// Build a graph from `(from, to, weight)` triples over `names`.
#[allow(dead_code)]
pub fn graph_from_edges(names: &[&str], edges: &[(&str, &str, u64)]) -> WeightedGraph {
    let position = |name: &str| {
        names
            .iter()
            .position(|candidate| *candidate == name)
            .expect("edge endpoint is declared")
    };

    let mut rows = vec![vec![MatrixCell::Infinite; names.len()]; names.len()];
    for &(from, to, weight) in edges {
        rows[position(from)][position(to)] = MatrixCell::Weight(weight);
    }

    WeightedGraph::from_matrix(names.iter().map(|name| name.to_string()).collect(), rows)
        .expect("hand-built matrix is square")
}

/// Four locations where the two-hop route A->C->D (15) is more expensive
/// than the three-hop route A->B->C->D (13).
#[allow(dead_code)]
pub fn diamond_graph() -> WeightedGraph {
    graph_from_edges(
        &["A", "B", "C", "D"],
        &[("A", "B", 5), ("B", "C", 5), ("A", "C", 12), ("C", "D", 3)],
    )
}

/// Resolve a list of location ids back to names.
#[allow(dead_code)]
pub fn names(graph: &WeightedGraph, path: &[usize]) -> Vec<String> {
    path.iter()
        .map(|&id| {
            graph
                .location_name(id)
                .expect("path ids are valid")
                .to_string()
        })
        .collect()
}
