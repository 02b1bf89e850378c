//! Route planning strategies implementing the Strategy pattern.
//!
//! This module provides the `RoutePlanner` trait and implementations for the
//! supported search algorithms (depth-limited DFS, FIFO relaxation, Dijkstra).

use crate::error::Result;
use crate::graph::WeightedGraph;
use crate::path::{
    find_route_depth_limited, find_route_dijkstra, find_route_relaxation, SearchResult,
};

use super::{RouteAlgorithm, RouteRequest};

/// Trait for route planning strategies.
///
/// Each implementation encapsulates a specific search algorithm and the
/// parameters it needs beyond the two endpoints.
pub trait RoutePlanner: Send + Sync {
    /// The algorithm identifier for this planner.
    fn algorithm(&self) -> RouteAlgorithm;

    /// Execute the search on the given graph.
    fn find_path(&self, graph: &WeightedGraph, start: &str, goal: &str) -> Result<SearchResult>;
}

/// Depth-limited backtracking planner.
///
/// Keeps the cheapest route among all simple routes of at most `max_depth`
/// hops.
#[derive(Debug, Clone)]
pub struct DepthLimitedPlanner {
    max_depth: usize,
}

impl DepthLimitedPlanner {
    pub fn new(max_depth: usize) -> Self {
        Self { max_depth }
    }

    pub fn max_depth(&self) -> usize {
        self.max_depth
    }
}

impl RoutePlanner for DepthLimitedPlanner {
    fn algorithm(&self) -> RouteAlgorithm {
        RouteAlgorithm::Dfs
    }

    fn find_path(&self, graph: &WeightedGraph, start: &str, goal: &str) -> Result<SearchResult> {
        find_route_depth_limited(graph, start, goal, self.max_depth)
    }
}

/// Breadth-first relaxation planner.
///
/// Expands locations in FIFO order and re-enqueues a location whenever its
/// distance improves.
#[derive(Debug, Clone, Default)]
pub struct RelaxationPlanner;

impl RoutePlanner for RelaxationPlanner {
    fn algorithm(&self) -> RouteAlgorithm {
        RouteAlgorithm::Bfs
    }

    fn find_path(&self, graph: &WeightedGraph, start: &str, goal: &str) -> Result<SearchResult> {
        find_route_relaxation(graph, start, goal)
    }
}

/// Dijkstra's algorithm planner for provably shortest routes.
#[derive(Debug, Clone, Default)]
pub struct DijkstraPlanner;

impl RoutePlanner for DijkstraPlanner {
    fn algorithm(&self) -> RouteAlgorithm {
        RouteAlgorithm::Dijkstra
    }

    fn find_path(&self, graph: &WeightedGraph, start: &str, goal: &str) -> Result<SearchResult> {
        find_route_dijkstra(graph, start, goal)
    }
}

/// Select the appropriate planner for a given request.
pub fn select_planner(request: &RouteRequest) -> Box<dyn RoutePlanner> {
    match request.algorithm {
        RouteAlgorithm::Dfs => Box::new(DepthLimitedPlanner::new(request.max_depth)),
        RouteAlgorithm::Bfs => Box::new(RelaxationPlanner),
        RouteAlgorithm::Dijkstra => Box::new(DijkstraPlanner),
    }
}
