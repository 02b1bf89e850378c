//! Route planning module.
//!
//! This module provides:
//! - [`RouteAlgorithm`] - Supported search algorithms (DFS, BFS, Dijkstra)
//! - [`RouteRequest`] - High-level route planning request
//! - [`RoutePlan`] - Planned route result
//! - [`plan_route`] - Main entry point for computing routes
//!
//! # Strategy Pattern
//!
//! Each algorithm is encapsulated in its own planner struct implementing
//! [`RoutePlanner`], so new algorithms can be added without modifying the
//! orchestration in [`plan_route`].
//!
//! # Example
//!
//! ```ignore
//! use routefinder_lib::{load_graph, plan_route, RouteRequest};
//!
//! let graph = load_graph("distances.csv".as_ref())?;
//! let request = RouteRequest::dfs("Ankara", "Izmir", 4);
//! if let Some(plan) = plan_route(&graph, &request)? {
//!     println!("{} km over {} hops", plan.distance, plan.hop_count());
//! }
//! ```

mod planner;

pub use planner::{
    select_planner, DepthLimitedPlanner, DijkstraPlanner, RelaxationPlanner, RoutePlanner,
};

use std::fmt;

use serde::Serialize;
use tracing::info;

use crate::error::{Error, Result};
use crate::graph::{Weight, WeightedGraph};
use crate::path::{resolve_vertex, SearchResult};

/// Hop limit used by the depth-limited search when the caller does not pick one.
pub const DEFAULT_MAX_DEPTH: usize = 4;

/// Supported routing algorithms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum RouteAlgorithm {
    /// Depth-limited backtracking search keeping the cheapest route found.
    Dfs,
    /// Breadth-first relaxation search.
    #[default]
    Bfs,
    /// Dijkstra's algorithm (priority-queue relaxation).
    Dijkstra,
}

impl fmt::Display for RouteAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let value = match self {
            RouteAlgorithm::Dfs => "dfs",
            RouteAlgorithm::Bfs => "bfs",
            RouteAlgorithm::Dijkstra => "dijkstra",
        };
        f.write_str(value)
    }
}

/// High-level route planning request.
#[derive(Debug, Clone)]
pub struct RouteRequest {
    pub start: String,
    pub goal: String,
    pub algorithm: RouteAlgorithm,
    /// Maximum hops for [`RouteAlgorithm::Dfs`]; ignored by other algorithms.
    pub max_depth: usize,
}

impl RouteRequest {
    /// Convenience constructor for depth-limited routes.
    pub fn dfs(start: impl Into<String>, goal: impl Into<String>, max_depth: usize) -> Self {
        Self {
            start: start.into(),
            goal: goal.into(),
            algorithm: RouteAlgorithm::Dfs,
            max_depth,
        }
    }

    /// Convenience constructor for breadth-first relaxation routes.
    pub fn bfs(start: impl Into<String>, goal: impl Into<String>) -> Self {
        Self {
            start: start.into(),
            goal: goal.into(),
            algorithm: RouteAlgorithm::Bfs,
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

/// Planned route returned by the library.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RoutePlan {
    pub algorithm: RouteAlgorithm,
    pub start: String,
    pub goal: String,
    pub distance: Weight,
    pub steps: Vec<String>,
}

impl RoutePlan {
    /// Number of hops in the route.
    pub fn hop_count(&self) -> usize {
        self.steps.len().saturating_sub(1)
    }
}

/// Compute a route using the requested algorithm.
///
/// Returns `Ok(None)` when the search finishes without reaching the goal;
/// unknown endpoints and an invalid depth limit are errors.
pub fn plan_route(graph: &WeightedGraph, request: &RouteRequest) -> Result<Option<RoutePlan>> {
    resolve_vertex(graph, &request.start)?;
    resolve_vertex(graph, &request.goal)?;
    if request.algorithm == RouteAlgorithm::Dfs && request.max_depth == 0 {
        return Err(Error::InvalidDepthLimit);
    }

    let planner = select_planner(request);
    let result = planner.find_path(graph, &request.start, &request.goal)?;

    let SearchResult::Found { distance, path } = result else {
        info!(
            start = %request.start,
            goal = %request.goal,
            algorithm = %request.algorithm,
            "no route found"
        );
        return Ok(None);
    };

    let steps = path
        .iter()
        .map(|&id| {
            graph
                .location_name(id)
                .map(str::to_string)
                .ok_or_else(|| Error::UnknownLocation {
                    name: format!("#{id}"),
                    suggestions: Vec::new(),
                })
        })
        .collect::<Result<Vec<_>>>()?;

    Ok(Some(RoutePlan {
        algorithm: planner.algorithm(),
        start: request.start.clone(),
        goal: request.goal.clone(),
        distance,
        steps,
    }))
}
