//! Locations command handler for listing the loaded distance table.

use std::path::Path;

use anyhow::{Context, Result};

use routefinder_lib::{load_graph, resolve_data_path};

use routefinder_cli::output::OutputFormat;

/// Handle the locations subcommand.
///
/// Lists every location in declaration order with its outgoing edges.
pub fn handle_locations_command(target_path: Option<&Path>, format: OutputFormat) -> Result<()> {
    let path = resolve_data_path(target_path).context("failed to locate the distance table")?;
    let graph = load_graph(&path)
        .with_context(|| format!("failed to load distance table from {}", path.display()))?;

    format
        .render_locations(&graph)
        .context("failed to write location listing")
}
