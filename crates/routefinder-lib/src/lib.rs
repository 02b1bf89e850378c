//! Routefinder library entry points.
//!
//! This crate exposes helpers to locate and load a CSV distance table into a
//! [`WeightedGraph`], run the supported search algorithms over it, and render
//! the resulting routes. Higher-level consumers (the CLI) should only depend
//! on the functions exported here instead of reimplementing behavior.
//!

#![deny(warnings)]

pub mod dataset;
pub mod error;
pub mod graph;
pub mod output;
pub mod path;
pub mod routing;

pub use dataset::{default_dataset_path, load_graph, load_graph_from_reader, resolve_data_path};
pub use error::{Error, Result};
pub use graph::{Edge, LocationId, MatrixCell, Weight, WeightedGraph};
pub use output::{RouteRenderMode, RouteStep, RouteSummary};
pub use path::{
    find_route_depth_limited, find_route_dijkstra, find_route_relaxation, relaxation_distances,
    DistanceTable, SearchResult,
};
pub use routing::{plan_route, RouteAlgorithm, RoutePlan, RouteRequest, DEFAULT_MAX_DEPTH};
