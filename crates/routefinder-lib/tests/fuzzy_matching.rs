mod common;

use routefinder_lib::{find_route_depth_limited, Error};

use common::fixture_graph;

#[test]
fn fuzzy_matches_returns_similar_names() {
    let graph = fixture_graph();

    let exact = graph.fuzzy_location_matches("Izmir", 3);
    assert_eq!(exact.first().map(String::as_str), Some("Izmir"));

    let typo = graph.fuzzy_location_matches("Istambul", 3);
    assert!(typo.contains(&"Istanbul".to_string()), "{typo:?}");

    let lowercase = graph.fuzzy_location_matches("konya", 3);
    assert!(lowercase.contains(&"Konya".to_string()), "{lowercase:?}");
}

#[test]
fn fuzzy_matches_respects_limit() {
    let graph = fixture_graph();

    let matches = graph.fuzzy_location_matches("An", 1);
    assert!(matches.len() <= 1);
}

#[test]
fn fuzzy_matches_filters_low_similarity() {
    let graph = fixture_graph();

    let matches = graph.fuzzy_location_matches("Qqqqqqqqqqqq", 3);
    assert!(matches.is_empty(), "{matches:?}");
}

#[test]
fn unknown_vertex_includes_suggestions() {
    let graph = fixture_graph();

    let err = find_route_depth_limited(&graph, "Antalia", "Van", 3).expect_err("typo");
    match &err {
        Error::UnknownVertex { name, suggestions } => {
            assert_eq!(name, "Antalia");
            assert!(suggestions.contains(&"Antalya".to_string()));
        }
        other => panic!("unexpected error: {other}"),
    }
    assert!(err.to_string().contains("Did you mean"));
}
