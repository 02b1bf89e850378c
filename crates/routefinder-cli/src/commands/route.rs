//! Route command handler for computing paths between locations.

use std::path::Path;

use anyhow::{Context, Result};
use tracing::debug;

use routefinder_lib::{
    load_graph, plan_route, resolve_data_path, Error as RouteError, RouteAlgorithm, RouteRequest,
    RouteSummary,
};

use routefinder_cli::output::OutputFormat;

/// Arguments for the route command.
#[derive(Debug, Clone)]
pub struct RouteCommandArgs {
    /// Starting location name.
    pub from: String,
    /// Destination location name.
    pub to: String,
    /// Algorithm to use when planning the route.
    pub algorithm: RouteAlgorithm,
    /// Hop limit for the depth-limited search.
    pub max_depth: usize,
}

impl RouteCommandArgs {
    /// Convert CLI args to a library RouteRequest.
    pub fn to_request(&self) -> RouteRequest {
        RouteRequest {
            start: self.from.clone(),
            goal: self.to.clone(),
            algorithm: self.algorithm,
            max_depth: self.max_depth,
        }
    }
}

/// Handle the route subcommand.
///
/// Loads the distance table and prints the route between two locations.
pub fn handle_route_command(
    target_path: Option<&Path>,
    format: OutputFormat,
    args: &RouteCommandArgs,
) -> Result<()> {
    let path = resolve_data_path(target_path).context("failed to locate the distance table")?;
    let graph = load_graph(&path)
        .with_context(|| format!("failed to load distance table from {}", path.display()))?;

    let request = args.to_request();
    debug!(?request, "planning route");

    let plan = match plan_route(&graph, &request) {
        Ok(Some(plan)) => plan,
        Ok(None) => {
            return Err(anyhow::anyhow!(format_route_not_found_message(&request)));
        }
        Err(err) => return Err(handle_route_failure(err)),
    };

    let summary = RouteSummary::from_plan(&graph, &plan)
        .context("failed to build route summary for display")?;

    format
        .render_route_result(&summary)
        .context("failed to write route output")
}

fn handle_route_failure(err: RouteError) -> anyhow::Error {
    match err {
        RouteError::UnknownVertex { name, suggestions } => {
            anyhow::anyhow!(format_unknown_location_message(&name, &suggestions))
        }
        RouteError::InvalidDepthLimit => anyhow::anyhow!("--max-depth must be at least 1."),
        other => anyhow::Error::new(other),
    }
}

fn format_unknown_location_message(name: &str, suggestions: &[String]) -> String {
    let mut message = format!("Unknown location '{}'.", name);
    if let [suggestion] = suggestions {
        message.push_str(&format!(" Did you mean '{suggestion}'?"));
    } else if !suggestions.is_empty() {
        let joined = suggestions
            .iter()
            .map(|s| format!("'{}'", s))
            .collect::<Vec<_>>()
            .join(", ");
        message.push_str(&format!(" Did you mean one of: {}?", joined));
    }
    message
}

fn format_route_not_found_message(request: &RouteRequest) -> String {
    let mut message = format!(
        "No route found between {} and {} using {}.",
        request.start, request.goal, request.algorithm
    );
    match request.algorithm {
        RouteAlgorithm::Dfs => message.push_str(&format!(
            " The depth limit was {}; try a larger --max-depth or --algorithm bfs.",
            request.max_depth
        )),
        RouteAlgorithm::Bfs | RouteAlgorithm::Dijkstra => {
            message.push_str(" The destination is not reachable from the start.")
        }
    }
    message
}
