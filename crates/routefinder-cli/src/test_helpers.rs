// Test utilities used across `routefinder-cli` tests.
// Kept under `#[cfg(test)]` so it is not part of the public crate API.
use routefinder_lib::{RouteAlgorithm, RouteSummary};

/// Three-location summary `A -> B -> C` with hops of 1200 and 35 km, planned
/// by the depth-limited search.
pub fn sample_summary() -> RouteSummary {
    let mut summary = RouteSummary::from_path_with(&["A", "B", "C"], |from, to| match (from, to)
    {
        ("A", "B") => Some(1200),
        ("B", "C") => Some(35),
        _ => None,
    })
    .expect("sample hops are adjacent");
    summary.algorithm = Some(RouteAlgorithm::Dfs);
    summary
}
