mod common;

use routefinder_lib::{
    find_route_dijkstra, find_route_relaxation, relaxation_distances, Error, SearchResult,
};

use common::{diamond_graph, fixture_graph, graph_from_edges, names};

#[test]
fn diamond_route_matches_depth_limited_result() {
    let graph = diamond_graph();

    let result = find_route_relaxation(&graph, "A", "D").expect("known endpoints");

    assert_eq!(result.distance(), Some(13));
    assert_eq!(names(&graph, result.path()), vec!["A", "B", "C", "D"]);
}

#[test]
fn later_discovery_undercuts_earlier_distance() {
    let graph = fixture_graph();

    // Antalya is first reached through Konya (1010) and later improved
    // through Izmir (945).
    let result = find_route_relaxation(&graph, "Istanbul", "Antalya").unwrap();

    assert_eq!(result.distance(), Some(945));
    assert_eq!(
        names(&graph, result.path()),
        vec!["Istanbul", "Bursa", "Izmir", "Antalya"]
    );
}

#[test]
fn distance_table_covers_every_reachable_location() {
    let graph = fixture_graph();

    let table = relaxation_distances(&graph, "Istanbul").unwrap();
    let id = |name: &str| graph.location_id(name).unwrap();

    assert_eq!(table.source(), id("Istanbul"));
    assert_eq!(table.distance(id("Istanbul")), Some(0));
    assert_eq!(table.distance(id("Bursa")), Some(155));
    assert_eq!(table.distance(id("Ankara")), Some(450));
    assert_eq!(table.distance(id("Izmir")), Some(485));
    assert_eq!(table.distance(id("Konya")), Some(710));
    assert_eq!(table.distance(id("Antalya")), Some(945));
    assert_eq!(table.distance(id("Van")), None);
    assert_eq!(table.predecessor(id("Antalya")), Some(id("Izmir")));
    assert_eq!(table.predecessor(id("Istanbul")), None);
}

#[test]
fn unreachable_destination_is_not_found() {
    let graph = fixture_graph();

    let result = find_route_relaxation(&graph, "Ankara", "Van").unwrap();
    assert_eq!(result, SearchResult::NotFound);
}

#[test]
fn destination_without_incoming_edges_is_not_found() {
    let graph = graph_from_edges(&["A", "B", "C"], &[("A", "B", 2), ("C", "A", 1)]);

    assert!(!find_route_relaxation(&graph, "A", "C").unwrap().is_found());
}

#[test]
fn start_equal_to_goal_is_zero_distance() {
    let graph = diamond_graph();

    let result = find_route_relaxation(&graph, "C", "C").unwrap();
    assert_eq!(result.distance(), Some(0));
    assert_eq!(names(&graph, result.path()), vec!["C"]);
}

#[test]
fn unknown_endpoints_are_rejected() {
    let graph = diamond_graph();

    let err = find_route_relaxation(&graph, "A", "Nowhere").expect_err("unknown goal");
    assert!(matches!(err, Error::UnknownVertex { ref name, .. } if name == "Nowhere"));

    let err = relaxation_distances(&graph, "Nowhere").expect_err("unknown source");
    assert!(matches!(err, Error::UnknownVertex { .. }));
}

#[test]
fn relaxation_agrees_with_dijkstra_on_fixture() {
    let graph = fixture_graph();

    for start in graph.locations() {
        for goal in graph.locations() {
            let relaxed = find_route_relaxation(&graph, start, goal).unwrap();
            let dijkstra = find_route_dijkstra(&graph, start, goal).unwrap();
            assert_eq!(relaxed.distance(), dijkstra.distance(), "{start}->{goal}");
        }
    }
}

#[test]
fn reconstructed_path_sums_to_reported_distance() {
    let graph = fixture_graph();

    for start in graph.locations() {
        for goal in graph.locations() {
            let result = find_route_relaxation(&graph, start, goal).unwrap();
            let SearchResult::Found { distance, path } = result else {
                continue;
            };
            let total: u64 = path
                .windows(2)
                .map(|pair| graph.edge_weight(pair[0], pair[1]).expect("adjacent hop"))
                .sum();
            assert_eq!(total, distance, "{start}->{goal}");
        }
    }
}

/// Complete DAG `N0..N9` where `Ni -> Nj` costs `3 * 2^(j - i)` plus noise,
/// forcing FIFO relaxation to improve later locations repeatedly.
fn doubling_dag_edges(labels: &[&'static str]) -> Vec<(&'static str, &'static str, u64)> {
    let mut edges = Vec::new();
    for (from, &source) in labels.iter().enumerate() {
        for (to, &target) in labels.iter().enumerate().skip(from + 1) {
            let noise = ((from * 5 + to * 3) % 3) as u64;
            edges.push((source, target, 3 * (1u64 << (to - from)) + noise));
        }
    }
    edges
}

const DAG_LABELS: [&str; 10] = ["N0", "N1", "N2", "N3", "N4", "N5", "N6", "N7", "N8", "N9"];

#[test]
fn repeated_improvements_converge_to_dijkstra_distances() {
    let graph = graph_from_edges(&DAG_LABELS, &doubling_dag_edges(&DAG_LABELS));

    for source in DAG_LABELS {
        let table = relaxation_distances(&graph, source).unwrap();
        for target in DAG_LABELS {
            let id = graph.location_id(target).unwrap();
            let dijkstra = find_route_dijkstra(&graph, source, target).unwrap();
            assert_eq!(table.distance(id), dijkstra.distance(), "{source}->{target}");
        }
    }

    let first = graph.location_id("N0").unwrap();
    let last = graph.location_id("N9").unwrap();
    let table = relaxation_distances(&graph, "N0").unwrap();
    let direct = graph.edge_weight(first, last).unwrap();
    assert!(table.distance(last).unwrap() < direct);
}

#[test]
fn predecessors_form_a_relaxed_fixpoint() {
    let graph = graph_from_edges(&DAG_LABELS, &doubling_dag_edges(&DAG_LABELS));
    let table = relaxation_distances(&graph, "N0").unwrap();

    for location in 1..graph.len() {
        let distance = table.distance(location).expect("every location is reachable");
        let predecessor = table.predecessor(location).expect("non-source has a predecessor");
        let via = table.distance(predecessor).unwrap()
            + graph.edge_weight(predecessor, location).unwrap();
        assert_eq!(via, distance, "N{location}");
    }
}
