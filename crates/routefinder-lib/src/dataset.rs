use std::env;
use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};

use csv::{ReaderBuilder, Trim};
use directories::ProjectDirs;
use tracing::{debug, info};

use crate::error::{Error, Result};
use crate::graph::{MatrixCell, Weight, WeightedGraph};

/// Default filename for the distance table.
const DATASET_FILENAME: &str = "distances.csv";

/// Environment variable consulted when no explicit data path is given.
pub const DATA_PATH_ENV: &str = "ROUTEFINDER_DATA";

/// Cell value that marks the absence of a direct edge.
pub const INFINITY_TOKEN: &str = "Infinity";

/// Resolve the default distance table location using platform-specific
/// project directories.
pub fn default_dataset_path() -> Result<PathBuf> {
    let dirs = ProjectDirs::from("org", "routefinder", "routefinder")
        .ok_or(Error::ProjectDirsUnavailable)?;
    Ok(dirs.data_dir().join(DATASET_FILENAME))
}

/// Resolve the distance table path and make sure it exists.
///
/// The resolution order is:
/// 1. Explicit `target` argument when provided.
/// 2. `ROUTEFINDER_DATA` environment variable.
/// 3. Platform-specific project data directory.
///
/// A directory resolves to `distances.csv` inside it.
pub fn resolve_data_path(target: Option<&Path>) -> Result<PathBuf> {
    let resolved = if let Some(explicit) = target {
        canonical_dataset_path(explicit)
    } else if let Some(env_path) = env::var_os(DATA_PATH_ENV) {
        canonical_dataset_path(Path::new(&env_path))
    } else {
        default_dataset_path()?
    };

    if !resolved.is_file() {
        return Err(Error::DataFileNotFound { path: resolved });
    }

    debug!(path = %resolved.display(), "resolved distance table");
    Ok(resolved)
}

fn canonical_dataset_path(path: &Path) -> PathBuf {
    if path.is_dir() {
        return path.join(DATASET_FILENAME);
    }
    path.to_path_buf()
}

/// Load a weighted graph from a CSV distance table on disk.
pub fn load_graph(path: &Path) -> Result<WeightedGraph> {
    let file = File::open(path).map_err(|err| match err.kind() {
        std::io::ErrorKind::NotFound => Error::DataFileNotFound {
            path: path.to_path_buf(),
        },
        _ => Error::Io(err),
    })?;
    let graph = load_graph_from_reader(file)?;
    info!(
        path = %path.display(),
        locations = graph.len(),
        edges = graph.edge_count(),
        "loaded distance table"
    );
    Ok(graph)
}

/// Load a weighted graph from any reader producing a CSV distance table.
///
/// The header row holds a label cell followed by the location names. Each
/// data row holds a row label followed by one cell per location: a
/// non-negative integer or `Infinity` for "no direct edge".
pub fn load_graph_from_reader<R: Read>(reader: R) -> Result<WeightedGraph> {
    let mut csv_reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .trim(Trim::All)
        .from_reader(reader);

    let mut records = csv_reader.records();
    let header = match records.next() {
        Some(record) => record?,
        None => {
            return Err(Error::MalformedGraph {
                message: "distance table is empty".to_string(),
            })
        }
    };

    let names: Vec<String> = header.iter().skip(1).map(str::to_string).collect();
    let expected_columns = names.len() + 1;

    let mut rows = Vec::with_capacity(names.len());
    for (row_index, record) in records.enumerate() {
        let record = record?;
        if record.iter().all(str::is_empty) {
            continue;
        }
        if record.len() != expected_columns {
            return Err(Error::MalformedGraph {
                message: format!(
                    "invalid number of columns in row {}: expected {expected_columns}, found {}",
                    row_index + 1,
                    record.len()
                ),
            });
        }

        let cells = record
            .iter()
            .enumerate()
            .skip(1)
            .map(|(column, value)| parse_cell(value, row_index + 1, column))
            .collect::<Result<Vec<_>>>()?;
        rows.push(cells);
    }

    WeightedGraph::from_matrix(names, rows)
}

fn parse_cell(value: &str, row: usize, column: usize) -> Result<MatrixCell> {
    if value.eq_ignore_ascii_case(INFINITY_TOKEN) {
        return Ok(MatrixCell::Infinite);
    }
    value
        .parse::<Weight>()
        .map(MatrixCell::Weight)
        .map_err(|_| Error::InvalidWeight {
            row,
            column,
            value: value.to_string(),
        })
}
