use std::cmp::Ordering;
use std::collections::{BinaryHeap, VecDeque};

use tracing::debug;

use crate::error::{Error, Result};
use crate::graph::{LocationId, Weight, WeightedGraph};

/// Outcome of a single search invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchResult {
    /// The destination was reached; `path` runs from source to destination.
    Found {
        distance: Weight,
        path: Vec<LocationId>,
    },
    /// The search exhausted its space without reaching the destination.
    NotFound,
}

impl SearchResult {
    pub fn is_found(&self) -> bool {
        matches!(self, SearchResult::Found { .. })
    }

    /// Total distance of the route, if one was found.
    pub fn distance(&self) -> Option<Weight> {
        match self {
            SearchResult::Found { distance, .. } => Some(*distance),
            SearchResult::NotFound => None,
        }
    }

    /// Locations along the route; empty when nothing was found.
    pub fn path(&self) -> &[LocationId] {
        match self {
            SearchResult::Found { path, .. } => path,
            SearchResult::NotFound => &[],
        }
    }
}

/// Resolve a search endpoint, failing with [`Error::UnknownVertex`].
pub(crate) fn resolve_vertex(graph: &WeightedGraph, name: &str) -> Result<LocationId> {
    graph.location_id(name).ok_or_else(|| Error::UnknownVertex {
        name: name.to_string(),
        suggestions: graph.fuzzy_location_matches(name, 3),
    })
}

// =============================================================================
// Depth-limited search
// =============================================================================

/// Best route recorded so far during one depth-limited search.
#[derive(Debug, Default)]
struct BestRoute {
    distance: Option<Weight>,
    path: Vec<LocationId>,
}

impl BestRoute {
    /// Replace the recorded route when `distance` is strictly shorter.
    /// Equal distances keep the route that was found first.
    fn offer(&mut self, distance: Weight, path: &[LocationId]) -> bool {
        if self.distance.is_some_and(|best| distance >= best) {
            return false;
        }
        self.distance = Some(distance);
        self.path.clear();
        self.path.extend_from_slice(path);
        true
    }

    fn into_result(self) -> SearchResult {
        match self.distance {
            Some(distance) => SearchResult::Found {
                distance,
                path: self.path,
            },
            None => SearchResult::NotFound,
        }
    }
}

/// Traversal state for one depth-limited search: the path under construction
/// and the visited markers, indexed by [`LocationId`].
struct DepthSearch<'a> {
    graph: &'a WeightedGraph,
    goal: LocationId,
    depth_limit: usize,
    visited: Vec<bool>,
    path: Vec<LocationId>,
    expanded: usize,
}

impl DepthSearch<'_> {
    fn explore(
        &mut self,
        current: LocationId,
        depth: usize,
        distance: Weight,
        best: &mut BestRoute,
    ) {
        self.expanded += 1;

        if current == self.goal {
            if best.offer(distance, &self.path) {
                debug!(distance, hops = depth, "depth-limited search improved best route");
            }
            return;
        }

        if depth >= self.depth_limit {
            return;
        }

        self.visited[current] = true;

        let graph = self.graph;
        for edge in graph.edges(current) {
            if self.visited[edge.target] {
                continue;
            }
            self.path.push(edge.target);
            self.explore(
                edge.target,
                depth + 1,
                distance.saturating_add(edge.weight),
                best,
            );
            self.path.pop();
        }

        self.visited[current] = false;
    }
}

/// Run a depth-limited backtracking search from `start` to `goal`.
///
/// Every simple path of at most `depth_limit` hops is explored and the one
/// with the lowest total weight is kept; among equal totals the first one
/// found wins. When the limit prunes the globally shortest route the result
/// is the best route within the limit, or [`SearchResult::NotFound`] when no
/// route fits.
pub fn find_route_depth_limited(
    graph: &WeightedGraph,
    start: &str,
    goal: &str,
    depth_limit: usize,
) -> Result<SearchResult> {
    let start = resolve_vertex(graph, start)?;
    let goal = resolve_vertex(graph, goal)?;
    if depth_limit == 0 {
        return Err(Error::InvalidDepthLimit);
    }

    let mut search = DepthSearch {
        graph,
        goal,
        depth_limit,
        visited: vec![false; graph.len()],
        path: vec![start],
        expanded: 0,
    };
    let mut best = BestRoute::default();
    search.explore(start, 0, 0, &mut best);

    debug_assert!(search.visited.iter().all(|marked| !marked));
    debug!(
        expanded = search.expanded,
        depth_limit,
        found = best.distance.is_some(),
        "depth-limited search finished"
    );

    Ok(best.into_result())
}

// =============================================================================
// Breadth-first relaxation
// =============================================================================

/// Per-source distance and predecessor tables produced by a relaxation run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DistanceTable {
    source: LocationId,
    distances: Vec<Option<Weight>>,
    predecessors: Vec<Option<LocationId>>,
}

impl DistanceTable {
    pub fn source(&self) -> LocationId {
        self.source
    }

    /// Best known distance to `location`, or `None` when it was never reached.
    pub fn distance(&self, location: LocationId) -> Option<Weight> {
        self.distances.get(location).copied().flatten()
    }

    /// Location from which `location`'s recorded distance was last improved.
    pub fn predecessor(&self, location: LocationId) -> Option<LocationId> {
        self.predecessors.get(location).copied().flatten()
    }

    /// Walk predecessor links back from `goal` and return the route in
    /// source-to-goal order.
    pub fn route_to(&self, goal: LocationId) -> SearchResult {
        let Some(distance) = self.distance(goal) else {
            return SearchResult::NotFound;
        };
        SearchResult::Found {
            distance,
            path: reconstruct_path(&self.predecessors, self.source, goal),
        }
    }
}

/// Compute the relaxation distance table for every location reachable from
/// `source`.
///
/// Locations are expanded in FIFO order. A location is enqueued again each
/// time its recorded distance improves, so the table converges to shortest
/// distances for non-negative weights, possibly after repeated expansions.
pub fn relaxation_distances(graph: &WeightedGraph, source: &str) -> Result<DistanceTable> {
    let source = resolve_vertex(graph, source)?;
    Ok(relax_from(graph, source))
}

fn relax_from(graph: &WeightedGraph, source: LocationId) -> DistanceTable {
    relax_from_with(graph, source, |_, _| {})
}

/// FIFO relaxation reporting every accepted improvement to `on_improve`.
fn relax_from_with<F>(
    graph: &WeightedGraph,
    source: LocationId,
    mut on_improve: F,
) -> DistanceTable
where
    F: FnMut(LocationId, Weight),
{
    let mut distances: Vec<Option<Weight>> = vec![None; graph.len()];
    let mut predecessors: Vec<Option<LocationId>> = vec![None; graph.len()];
    let mut queue = VecDeque::new();
    let mut dequeued = 0usize;
    let mut relaxations = 0usize;

    distances[source] = Some(0);
    queue.push_back(source);

    while let Some(current) = queue.pop_front() {
        dequeued += 1;
        let Some(current_distance) = distances[current] else {
            continue;
        };

        for edge in graph.edges(current) {
            let candidate = current_distance.saturating_add(edge.weight);
            let improves = distances[edge.target].map_or(true, |known| candidate < known);
            if improves {
                distances[edge.target] = Some(candidate);
                predecessors[edge.target] = Some(current);
                queue.push_back(edge.target);
                relaxations += 1;
                on_improve(edge.target, candidate);
            }
        }
    }

    debug!(dequeued, relaxations, "relaxation search finished");

    DistanceTable {
        source,
        distances,
        predecessors,
    }
}

/// Run the breadth-first relaxation search and reconstruct the route to `goal`.
pub fn find_route_relaxation(
    graph: &WeightedGraph,
    start: &str,
    goal: &str,
) -> Result<SearchResult> {
    let start = resolve_vertex(graph, start)?;
    let goal = resolve_vertex(graph, goal)?;
    Ok(relax_from(graph, start).route_to(goal))
}

// =============================================================================
// Dijkstra
// =============================================================================

/// Run Dijkstra's algorithm to find the lowest-cost route from `start` to
/// `goal`.
pub fn find_route_dijkstra(graph: &WeightedGraph, start: &str, goal: &str) -> Result<SearchResult> {
    let start = resolve_vertex(graph, start)?;
    let goal = resolve_vertex(graph, goal)?;

    let mut distances: Vec<Option<Weight>> = vec![None; graph.len()];
    let mut parents: Vec<Option<LocationId>> = vec![None; graph.len()];
    let mut queue = BinaryHeap::new();

    distances[start] = Some(0);
    queue.push(QueueEntry::new(start, 0));

    while let Some(entry) = queue.pop() {
        match distances[entry.node] {
            Some(distance) if distance < entry.cost => continue,
            Some(_) => {}
            None => continue,
        }

        if entry.node == goal {
            return Ok(SearchResult::Found {
                distance: entry.cost,
                path: reconstruct_path(&parents, start, goal),
            });
        }

        for edge in graph.edges(entry.node) {
            let next_cost = entry.cost.saturating_add(edge.weight);
            if distances[edge.target].map_or(true, |known| next_cost < known) {
                distances[edge.target] = Some(next_cost);
                parents[edge.target] = Some(entry.node);
                queue.push(QueueEntry::new(edge.target, next_cost));
            }
        }
    }

    Ok(SearchResult::NotFound)
}

fn reconstruct_path(
    parents: &[Option<LocationId>],
    start: LocationId,
    goal: LocationId,
) -> Vec<LocationId> {
    let mut path = Vec::new();
    let mut current = Some(goal);
    while let Some(node) = current {
        path.push(node);
        if node == start || path.len() > parents.len() {
            break;
        }
        current = parents.get(node).copied().flatten();
    }
    path.reverse();
    path
}

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
struct QueueEntry {
    node: LocationId,
    cost: Weight,
}

impl QueueEntry {
    fn new(node: LocationId, cost: Weight) -> Self {
        Self { node, cost }
    }
}

impl Ord for QueueEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reverse ordering so BinaryHeap becomes a min-heap by cost.
        other
            .cost
            .cmp(&self.cost)
            .then_with(|| other.node.cmp(&self.node))
    }
}

impl PartialOrd for QueueEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
