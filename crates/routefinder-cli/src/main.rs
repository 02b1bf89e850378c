mod commands;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use routefinder_cli::output::OutputFormat;
use routefinder_lib::{RouteAlgorithm, DEFAULT_MAX_DEPTH};

use commands::locations::handle_locations_command;
use commands::route::{handle_route_command, RouteCommandArgs};

#[derive(Parser, Debug)]
#[command(author, version, about = "Find routes through a CSV distance table")]
struct Cli {
    /// Override the distance table file or directory
    /// (defaults to $ROUTEFINDER_DATA, then the platform data directory).
    #[arg(long, global = true)]
    data: Option<PathBuf>,

    /// Output format.
    #[arg(long, global = true, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Compute a route between two location names.
    Route {
        /// Starting location name.
        #[arg(long = "from")]
        from: String,
        /// Destination location name.
        #[arg(long = "to")]
        to: String,
        /// Search algorithm.
        #[arg(long, value_enum, default_value_t = AlgorithmArg::Bfs)]
        algorithm: AlgorithmArg,
        /// Maximum number of hops explored by the dfs algorithm.
        #[arg(long, default_value_t = DEFAULT_MAX_DEPTH)]
        max_depth: usize,
    },
    /// List every location in the distance table.
    Locations,
}

/// Algorithm names accepted on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum AlgorithmArg {
    /// Depth-limited search keeping the cheapest route found.
    Dfs,
    /// Breadth-first relaxation.
    Bfs,
    /// Dijkstra's algorithm.
    Dijkstra,
}

impl From<AlgorithmArg> for RouteAlgorithm {
    fn from(value: AlgorithmArg) -> Self {
        match value {
            AlgorithmArg::Dfs => RouteAlgorithm::Dfs,
            AlgorithmArg::Bfs => RouteAlgorithm::Bfs,
            AlgorithmArg::Dijkstra => RouteAlgorithm::Dijkstra,
        }
    }
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    match cli.command {
        Command::Route {
            from,
            to,
            algorithm,
            max_depth,
        } => {
            let args = RouteCommandArgs {
                from,
                to,
                algorithm: algorithm.into(),
                max_depth,
            };
            handle_route_command(cli.data.as_deref(), cli.format, &args)
        }
        Command::Locations => handle_locations_command(cli.data.as_deref(), cli.format),
    }
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .finish();

    let _ = tracing::subscriber::set_global_default(subscriber);
}
