use std::cmp::Ordering;
use std::collections::HashMap;

use tracing::{debug, warn};

use crate::error::{Error, Result};

/// Stable index of a location, i.e. its position in the declared name list.
pub type LocationId = usize;

/// Non-negative cost of travelling along a single edge.
pub type Weight = u64;

/// Minimum Jaro-Winkler similarity for a name to be offered as a suggestion.
const SUGGESTION_THRESHOLD: f64 = 0.75;

/// One cell of the input weight matrix.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatrixCell {
    /// Finite edge weight, zero included.
    Weight(Weight),
    /// The "no direct edge" sentinel.
    Infinite,
}

impl MatrixCell {
    fn finite(self) -> Option<Weight> {
        match self {
            MatrixCell::Weight(weight) => Some(weight),
            MatrixCell::Infinite => None,
        }
    }
}

/// Directed edge within the weighted graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Edge {
    pub target: LocationId,
    pub weight: Weight,
}

/// Weighted directed graph keyed by location name.
///
/// The graph has no mutators: once built from a matrix it can be shared
/// read-only between any number of searches.
#[derive(Debug, Clone, Default)]
pub struct WeightedGraph {
    locations: Vec<String>,
    index: HashMap<String, LocationId>,
    adjacency: Vec<Vec<Edge>>,
}

impl WeightedGraph {
    /// Build a graph from a square matrix indexed in parallel with `names`.
    ///
    /// [`MatrixCell::Infinite`] entries become "no edge"; every other entry,
    /// including zero, becomes a finite edge. Edges keep the column order of
    /// the matrix so neighbour iteration is deterministic.
    pub fn from_matrix(names: Vec<String>, rows: Vec<Vec<MatrixCell>>) -> Result<Self> {
        let size = names.len();
        if rows.len() != size {
            return Err(Error::MalformedGraph {
                message: format!("expected {size} rows, found {}", rows.len()),
            });
        }

        let mut index = HashMap::with_capacity(size);
        for (id, name) in names.iter().enumerate() {
            if name.is_empty() {
                return Err(Error::MalformedGraph {
                    message: format!("location name in column {} is empty", id + 1),
                });
            }
            if index.insert(name.clone(), id).is_some() {
                return Err(Error::MalformedGraph {
                    message: format!("duplicate location name: {name}"),
                });
            }
        }

        let mut adjacency = Vec::with_capacity(size);
        for (row_index, row) in rows.into_iter().enumerate() {
            if row.len() != size {
                return Err(Error::MalformedGraph {
                    message: format!(
                        "invalid number of columns in row {}: expected {size}, found {}",
                        row_index + 1,
                        row.len()
                    ),
                });
            }

            let edges: Vec<Edge> = row
                .into_iter()
                .enumerate()
                .filter_map(|(target, cell)| cell.finite().map(|weight| Edge { target, weight }))
                .collect();

            if let Some(edge) = edges
                .iter()
                .find(|edge| edge.target == row_index && edge.weight > 0)
            {
                warn!(
                    location = %names[row_index],
                    weight = edge.weight,
                    "self-loop with non-zero weight"
                );
            }

            adjacency.push(edges);
        }

        let graph = Self {
            locations: names,
            index,
            adjacency,
        };
        debug!(
            locations = graph.len(),
            edges = graph.edge_count(),
            "built weighted graph"
        );
        Ok(graph)
    }

    /// Number of locations.
    pub fn len(&self) -> usize {
        self.locations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.locations.is_empty()
    }

    /// Total number of finite edges.
    pub fn edge_count(&self) -> usize {
        self.adjacency.iter().map(Vec::len).sum()
    }

    /// All location names in their stable declaration order.
    pub fn locations(&self) -> &[String] {
        &self.locations
    }

    /// Lookup a location identifier by its case-sensitive name.
    pub fn location_id(&self, name: &str) -> Option<LocationId> {
        self.index.get(name).copied()
    }

    /// Lookup a location name by identifier.
    pub fn location_name(&self, id: LocationId) -> Option<&str> {
        self.locations.get(id).map(String::as_str)
    }

    /// Return the outgoing edges for a location identifier.
    pub fn edges(&self, id: LocationId) -> &[Edge] {
        self.adjacency
            .get(id)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Direct edge weight between two location identifiers, if any.
    pub fn edge_weight(&self, from: LocationId, to: LocationId) -> Option<Weight> {
        self.edges(from)
            .iter()
            .find(|edge| edge.target == to)
            .map(|edge| edge.weight)
    }

    /// Neighbours of `location` with the weight of the edge leading to each.
    pub fn neighbours(&self, location: &str) -> Result<Vec<(&str, Weight)>> {
        let id = self.require_location(location)?;
        Ok(self
            .edges(id)
            .iter()
            .map(|edge| (self.locations[edge.target].as_str(), edge.weight))
            .collect())
    }

    /// Direct edge weight between `from` and `to`, or `None` when there is no
    /// direct edge.
    pub fn weight(&self, from: &str, to: &str) -> Result<Option<Weight>> {
        let from = self.require_location(from)?;
        let to = self.require_location(to)?;
        Ok(self.edge_weight(from, to))
    }

    /// Resolve a name, failing with [`Error::UnknownLocation`] when absent.
    pub fn require_location(&self, name: &str) -> Result<LocationId> {
        self.location_id(name).ok_or_else(|| Error::UnknownLocation {
            name: name.to_string(),
            suggestions: self.fuzzy_location_matches(name, 3),
        })
    }

    /// Up to `limit` location names that look similar to `name`, best first.
    pub fn fuzzy_location_matches(&self, name: &str, limit: usize) -> Vec<String> {
        let needle = name.to_lowercase();
        let mut scored: Vec<(f64, &String)> = self
            .locations
            .iter()
            .map(|candidate| {
                let score = strsim::jaro_winkler(&needle, &candidate.to_lowercase());
                (score, candidate)
            })
            .filter(|(score, _)| *score >= SUGGESTION_THRESHOLD)
            .collect();

        scored.sort_by(|a, b| {
            b.0.partial_cmp(&a.0)
                .unwrap_or(Ordering::Equal)
                .then_with(|| a.1.cmp(b.1))
        });

        scored
            .into_iter()
            .take(limit)
            .map(|(_, candidate)| candidate.clone())
            .collect()
    }
}
