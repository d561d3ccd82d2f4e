//! CLI argument parsing for graphlab
//!
//! Global flags: --format, --quiet, --verbose, --log-level, --log-json

pub mod parse;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

pub use graphlab_core::format::OutputFormat;
use graphlab_core::search::{Order, Selection};
use parse::{parse_format, parse_order, parse_selection};

/// Graphlab - weighted graphs, matrix views and shortest paths
#[derive(Parser, Debug)]
#[command(name = "graphlab")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output format (human or json)
    #[arg(long, global = true, value_parser = parse_format, default_value = "human")]
    pub format: OutputFormat,

    /// Suppress non-essential output
    #[arg(long, short, global = true)]
    pub quiet: bool,

    /// Enable debug logging
    #[arg(long, short, global = true)]
    pub verbose: bool,

    /// Log level or filter directive (overrides --verbose)
    #[arg(long, global = true, env = "GRAPHLAB_LOG_LEVEL")]
    pub log_level: Option<String>,

    /// Emit logs as JSON lines on stderr
    #[arg(long, global = true)]
    pub log_json: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Render a graph's connections and matrices
    Show {
        /// Graph document (.toml, .json, .yaml)
        file: PathBuf,
    },

    /// Find the shortest path between two vertices
    Path {
        /// Graph document (.toml, .json, .yaml)
        file: PathBuf,

        /// Start vertex id
        start: String,

        /// Target vertex id
        target: String,

        /// Vertex selection strategy (linear-scan or binary-heap)
        #[arg(long, value_parser = parse_selection)]
        selection: Option<Selection>,
    },

    /// List the shortest distance from a vertex to every vertex
    Distances {
        /// Graph document (.toml, .json, .yaml)
        file: PathBuf,

        /// Start vertex id
        start: String,

        /// Vertex selection strategy (linear-scan or binary-heap)
        #[arg(long, value_parser = parse_selection)]
        selection: Option<Selection>,
    },

    /// Walk the graph breadth-first or depth-first
    Traverse {
        /// Graph document (.toml, .json, .yaml)
        file: PathBuf,

        /// Start vertex id
        start: String,

        /// Visit order (bfs or dfs)
        #[arg(long, value_parser = parse_order)]
        order: Option<Order>,

        /// Stop at the first vertex whose data equals this value
        #[arg(long)]
        find: Option<String>,
    },
}
