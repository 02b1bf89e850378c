use std::fmt::Write;

use serde::Serialize;

use crate::error::{Error, Result};
use crate::graph::{Weight, WeightedGraph};
use crate::routing::{RouteAlgorithm, RoutePlan};

/// Unit appended to every rendered distance.
const DISTANCE_UNIT: &str = "km";

/// Presentation style for turning a [`RouteSummary`] into text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteRenderMode {
    /// One line per location followed by the distance of the next hop.
    PlainText,
    /// Markdown list with running totals.
    RichText,
    /// Single line `A -> B -> C (N km)`.
    Compact,
}

/// Location visited along a route.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct RouteStep {
    pub index: usize,
    pub name: String,
    /// Weight of the hop that reached this location; `None` for the start.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hop_distance: Option<Weight>,
    /// Distance travelled from the start up to and including this location.
    pub cumulative_distance: Weight,
}

/// Structured representation of a route that higher-level consumers can serialise.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct RouteSummary {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub algorithm: Option<RouteAlgorithm>,
    pub hops: usize,
    pub start: String,
    pub goal: String,
    pub total_distance: Weight,
    pub steps: Vec<RouteStep>,
}

impl RouteSummary {
    /// Build a summary for `path`, looking up each hop with `lookup`.
    ///
    /// Fails with [`Error::InconsistentPath`] when `lookup` reports no direct
    /// edge for a consecutive pair, and with [`Error::EmptyRoutePlan`] for an
    /// empty path.
    pub fn from_path_with<S, F>(path: &[S], mut lookup: F) -> Result<Self>
    where
        S: AsRef<str>,
        F: FnMut(&str, &str) -> Option<Weight>,
    {
        let (Some(first), Some(last)) = (path.first(), path.last()) else {
            return Err(Error::EmptyRoutePlan);
        };

        let mut steps = Vec::with_capacity(path.len());
        steps.push(RouteStep {
            index: 0,
            name: first.as_ref().to_string(),
            hop_distance: None,
            cumulative_distance: 0,
        });

        let mut total: Weight = 0;
        for (index, pair) in path.windows(2).enumerate() {
            let (from, to) = (pair[0].as_ref(), pair[1].as_ref());
            let weight = lookup(from, to).ok_or_else(|| Error::InconsistentPath {
                from: from.to_string(),
                to: to.to_string(),
            })?;
            total = total.saturating_add(weight);
            steps.push(RouteStep {
                index: index + 1,
                name: to.to_string(),
                hop_distance: Some(weight),
                cumulative_distance: total,
            });
        }

        Ok(Self {
            algorithm: None,
            hops: path.len() - 1,
            start: first.as_ref().to_string(),
            goal: last.as_ref().to_string(),
            total_distance: total,
            steps,
        })
    }

    /// Build a summary for `path` using the edge weights stored in `graph`.
    pub fn from_path<S: AsRef<str>>(graph: &WeightedGraph, path: &[S]) -> Result<Self> {
        for name in path {
            graph.require_location(name.as_ref())?;
        }
        Self::from_path_with(path, |from, to| graph.weight(from, to).ok().flatten())
    }

    /// Convert a [`RoutePlan`] into a summary annotated with its algorithm.
    pub fn from_plan(graph: &WeightedGraph, plan: &RoutePlan) -> Result<Self> {
        let mut summary = Self::from_path(graph, &plan.steps)?;
        summary.algorithm = Some(plan.algorithm);
        Ok(summary)
    }

    /// Render the summary using the requested textual mode.
    pub fn render(&self, mode: RouteRenderMode) -> String {
        match mode {
            RouteRenderMode::PlainText => self.render_plain(),
            RouteRenderMode::RichText => self.render_rich(),
            RouteRenderMode::Compact => self.render_compact(),
        }
    }

    fn headline(&self) -> String {
        match self.algorithm {
            Some(algorithm) => format!(
                "Route from {} to {} ({} hops, algorithm: {})",
                self.start, self.goal, self.hops, algorithm
            ),
            None => format!(
                "Route from {} to {} ({} hops)",
                self.start, self.goal, self.hops
            ),
        }
    }

    fn render_plain(&self) -> String {
        let mut buffer = String::new();
        let _ = writeln!(buffer, "{}:", self.headline());
        for step in &self.steps {
            if let Some(distance) = step.hop_distance {
                let _ = writeln!(buffer, "  {distance} {DISTANCE_UNIT}.");
            }
            let _ = writeln!(buffer, "{}", step.name);
        }
        let _ = writeln!(buffer);
        let _ = writeln!(
            buffer,
            "Total Distance: {} {DISTANCE_UNIT}.",
            self.total_distance
        );
        buffer
    }

    fn render_rich(&self) -> String {
        let mut buffer = String::new();
        let _ = writeln!(buffer, "**{}**", self.headline());
        for step in &self.steps {
            match step.hop_distance {
                Some(distance) => {
                    let _ = writeln!(
                        buffer,
                        "* {:>2}. **{}** (+{distance} {DISTANCE_UNIT}, {} {DISTANCE_UNIT} total)",
                        step.index, step.name, step.cumulative_distance
                    );
                }
                None => {
                    let _ = writeln!(buffer, "* {:>2}. **{}**", step.index, step.name);
                }
            }
        }
        let _ = writeln!(
            buffer,
            "\n_Total distance: {} {DISTANCE_UNIT}_",
            self.total_distance
        );
        buffer
    }

    fn render_compact(&self) -> String {
        let joined = self
            .steps
            .iter()
            .map(|step| step.name.as_str())
            .collect::<Vec<_>>()
            .join(" -> ");
        format!("{joined} ({} {DISTANCE_UNIT})\n", self.total_distance)
    }
}
