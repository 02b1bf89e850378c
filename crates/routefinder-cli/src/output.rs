//! Output formatting for route rendering.
//!
//! This module provides formatters for rendering route summaries and
//! location listings in the formats selectable with `--format`.

use std::fmt::Write as _;
use std::io::{self, Write};

use clap::ValueEnum;
use routefinder_lib::{RouteRenderMode, RouteStep, RouteSummary, WeightedGraph};
use serde::Serialize;
use serde_json::json;

use crate::terminal::{format_with_separators, ColorPalette};

/// Output format for CLI results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// One line per location with hop distances and a trailing total.
    #[default]
    Text,
    /// Markdown list with running totals.
    Rich,
    /// Single-line route.
    Compact,
    /// Colored tree view with location tags.
    Enhanced,
    /// Pretty-printed JSON.
    Json,
}

impl OutputFormat {
    /// Print a route summary to stdout in this format.
    pub fn render_route_result(self, summary: &RouteSummary) -> io::Result<()> {
        let stdout = io::stdout();
        let mut out = stdout.lock();
        self.write_route_result(&mut out, summary)?;
        out.flush()
    }

    /// Write a route summary to `out` in this format.
    pub fn write_route_result<W: Write>(
        self,
        out: &mut W,
        summary: &RouteSummary,
    ) -> io::Result<()> {
        match self {
            OutputFormat::Text => write!(out, "{}", summary.render(RouteRenderMode::PlainText)),
            OutputFormat::Rich => write!(out, "{}", summary.render(RouteRenderMode::RichText)),
            OutputFormat::Compact => write!(out, "{}", summary.render(RouteRenderMode::Compact)),
            OutputFormat::Enhanced => write!(
                out,
                "{}",
                EnhancedRenderer::new(ColorPalette::detect()).render(summary)
            ),
            OutputFormat::Json => write_json(out, summary),
        }
    }

    /// Print the locations of `graph` with their outgoing edges.
    pub fn render_locations(self, graph: &WeightedGraph) -> io::Result<()> {
        let stdout = io::stdout();
        let mut out = stdout.lock();
        self.write_locations(&mut out, graph)?;
        out.flush()
    }

    /// Write the location listing of `graph` to `out`.
    pub fn write_locations<W: Write>(self, out: &mut W, graph: &WeightedGraph) -> io::Result<()> {
        match self {
            OutputFormat::Json => write_json(out, &location_listing(graph)),
            _ => out.write_all(render_locations_text(graph).as_bytes()),
        }
    }
}

/// Write `value` as pretty-printed JSON followed by a newline.
///
/// # Errors
///
/// Returns an error if JSON serialization or writing fails.
pub fn write_json<W: Write, T: Serialize + ?Sized>(out: &mut W, value: &T) -> io::Result<()> {
    serde_json::to_writer_pretty(&mut *out, value).map_err(io::Error::from)?;
    out.write_all(b"\n")
}

/// Neighbours of `id` other than the location itself.
fn outgoing(graph: &WeightedGraph, id: usize) -> Vec<(&str, u64)> {
    graph
        .edges(id)
        .iter()
        .filter(|edge| edge.target != id)
        .filter_map(|edge| {
            graph
                .location_name(edge.target)
                .map(|name| (name, edge.weight))
        })
        .collect()
}

fn location_listing(graph: &WeightedGraph) -> serde_json::Value {
    let locations = graph
        .locations()
        .iter()
        .enumerate()
        .map(|(id, name)| {
            let neighbours = outgoing(graph, id)
                .into_iter()
                .map(|(target, distance)| json!({ "name": target, "distance": distance }))
                .collect::<Vec<_>>();
            json!({ "name": name, "neighbours": neighbours })
        })
        .collect::<Vec<_>>();
    json!({ "locations": locations })
}

/// Render the location listing as text, one location per line.
pub fn render_locations_text(graph: &WeightedGraph) -> String {
    let mut buffer = String::new();
    let _ = writeln!(buffer, "{} locations:", graph.len());
    for (id, name) in graph.locations().iter().enumerate() {
        let neighbours = outgoing(graph, id);
        let _ = writeln!(buffer, " - {} ({} neighbours)", name, neighbours.len());
    }
    buffer
}

/// Renderer for enhanced output format with colored tags.
pub struct EnhancedRenderer {
    palette: ColorPalette,
}

impl EnhancedRenderer {
    /// Create a new enhanced renderer with the given color palette.
    #[must_use]
    pub const fn new(palette: ColorPalette) -> Self {
        Self { palette }
    }

    /// Render a route summary.
    pub fn render(&self, summary: &RouteSummary) -> String {
        let p = &self.palette;
        let mut buffer = String::new();

        let algorithm = summary
            .algorithm
            .map(|algorithm| format!("; algorithm: {algorithm}"))
            .unwrap_or_default();
        let _ = writeln!(
            buffer,
            "Route from {}{}{} to {}{}{} ({} hops{}):",
            p.white_bold,
            summary.start,
            p.reset,
            p.white_bold,
            summary.goal,
            p.reset,
            summary.hops,
            algorithm
        );

        let len = summary.steps.len();
        for (i, step) in summary.steps.iter().enumerate() {
            self.render_step(&mut buffer, step, i == 0, i + 1 == len);
        }

        let _ = writeln!(
            buffer,
            "\n{}Total distance:{} {} km",
            p.gray,
            p.reset,
            format_with_separators(summary.total_distance)
        );
        buffer
    }

    fn render_step(&self, buffer: &mut String, step: &RouteStep, is_first: bool, is_last: bool) {
        let p = &self.palette;

        if let Some(distance) = step.hop_distance {
            let _ = writeln!(
                buffer,
                "{} │{} {}{} km{}",
                p.gray,
                p.reset,
                p.green,
                format_with_separators(distance),
                p.reset
            );
        }

        let (tag_color, tag_text) = if is_first {
            (p.tag_start, "STRT")
        } else if is_last {
            (p.tag_goal, "GOAL")
        } else {
            (p.tag_hop, "HOP ")
        };

        let _ = writeln!(
            buffer,
            "{}{}{} {}{}{}",
            tag_color, tag_text, p.reset, p.white_bold, step.name, p.reset
        );
    }
}
