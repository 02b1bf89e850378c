use std::path::PathBuf;

use thiserror::Error;

/// Convenient result alias for the routefinder library.
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level library error type.
#[derive(Debug, Error)]
pub enum Error {
    /// Raised when the distance table does not describe a square matrix over
    /// unique location names.
    #[error("malformed distance table: {message}")]
    MalformedGraph { message: String },

    /// Raised when a matrix cell is neither a non-negative integer nor `Infinity`.
    #[error("invalid weight {value:?} at row {row}, column {column}")]
    InvalidWeight {
        row: usize,
        column: usize,
        value: String,
    },

    /// Raised when a graph lookup names a location that does not exist.
    #[error("unknown location: {name}{}", format_suggestions(.suggestions))]
    UnknownLocation {
        name: String,
        suggestions: Vec<String>,
    },

    /// Raised when a search is asked to start or finish at a location that
    /// does not exist.
    #[error("unknown vertex: {name}{}", format_suggestions(.suggestions))]
    UnknownVertex {
        name: String,
        suggestions: Vec<String>,
    },

    /// Raised when a produced path contains a hop with no direct edge.
    #[error("inconsistent path: no direct edge from {from} to {to}")]
    InconsistentPath { from: String, to: String },

    /// Raised when the depth-limited search is given a limit of zero.
    #[error("depth limit must be at least 1")]
    InvalidDepthLimit,

    /// Raised when a route summary is requested for an empty path.
    #[error("route plan was empty")]
    EmptyRoutePlan,

    /// Distance table could not be located at the resolved path.
    #[error("distance table not found at {path}")]
    DataFileNotFound { path: PathBuf },

    /// No suitable project directories could be resolved for this platform.
    #[error("failed to resolve project directories for the distance table")]
    ProjectDirsUnavailable,

    /// Wrapper for CSV reader errors.
    #[error(transparent)]
    Csv(#[from] csv::Error),

    /// Wrapper for IO errors.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

fn format_suggestions(suggestions: &[String]) -> String {
    if suggestions.is_empty() {
        String::new()
    } else if suggestions.len() == 1 {
        format!(". Did you mean '{}'?", suggestions[0])
    } else {
        format!(
            ". Did you mean one of: {}?",
            suggestions
                .iter()
                .map(|s| format!("'{}'", s))
                .collect::<Vec<_>>()
                .join(", ")
        )
    }
}
