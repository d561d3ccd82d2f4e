//! Error types and exit codes for graphlab
//!
//! Exit codes:
//! - 0: Success
//! - 1: Generic failure (I/O, document parsing)
//! - 2: Usage error (bad flags/args, invalid settings)
//! - 3: Graph error (missing vertex, bad edge, unreachable target)

mod macros;

use thiserror::Error;

use crate::graph::VertexId;

/// Exit codes for the graphlab binary
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Success (0)
    Success = 0,
    /// Generic failure (1)
    Failure = 1,
    /// Usage error - bad flags/args (2)
    Usage = 2,
    /// Graph model or search error (3)
    Graph = 3,
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> i32 {
        code as i32
    }
}

/// Errors raised by graph mutation, lookup and search
#[derive(Error, Debug)]
pub enum GraphError {
    // Graph errors (exit code 3)
    #[error("vertex already exists: {id}")]
    VertexAlreadyExists { id: String },

    #[error("vertex not found: {id}")]
    VertexNotFound { id: String },

    #[error("vertex {vertex} already lists neighbor {neighbor}")]
    DuplicateNeighbor { vertex: String, neighbor: VertexId },

    #[error("vertex {id} cannot be its own neighbor")]
    SelfLoop { id: String },

    #[error("edge weight is undefined (weights must be non-zero numbers)")]
    WeightUndefined,

    #[error("negative edge weight not supported: {weight}")]
    NegativeWeight { weight: f64 },

    #[error("weighted edges require a weighted graph")]
    WeightedEdgeOnUnweightedGraph,

    #[error("no path from {start} to {target}")]
    PathNotFound { start: String, target: String },

    // Usage errors (exit code 2)
    #[error("unknown format: {0} (expected: human or json)")]
    UnknownFormat(String),

    #[error("{0}")]
    UsageError(String),

    #[error("invalid {context}: {value}")]
    InvalidValue { context: String, value: String },

    // Generic failures (exit code 1)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML parsing error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("failed to {operation} {target}: {reason}")]
    FailedOperationWithTarget {
        operation: String,
        target: String,
        reason: String,
    },
}

impl GraphError {
    /// Create an error for an id that is not registered in the graph
    pub fn vertex_not_found(id: impl Into<String>) -> Self {
        GraphError::VertexNotFound { id: id.into() }
    }

    /// Create an error for an id that is already registered in the graph
    pub fn vertex_already_exists(id: impl Into<String>) -> Self {
        GraphError::VertexAlreadyExists { id: id.into() }
    }

    /// Create an error for an unreachable target
    pub fn path_not_found(start: impl Into<String>, target: impl Into<String>) -> Self {
        GraphError::PathNotFound {
            start: start.into(),
            target: target.into(),
        }
    }

    /// Create an error for an invalid value or setting
    pub fn invalid_value(context: &str, value: impl std::fmt::Display) -> Self {
        GraphError::InvalidValue {
            context: context.to_string(),
            value: value.to_string(),
        }
    }

    /// Create an error for a failed IO operation with context
    pub fn io_operation(
        operation: &str,
        path: impl std::fmt::Display,
        error: impl std::fmt::Display,
    ) -> Self {
        GraphError::FailedOperationWithTarget {
            operation: operation.to_string(),
            target: path.to_string(),
            reason: error.to_string(),
        }
    }

    /// Get the appropriate exit code for this error
    pub fn exit_code(&self) -> ExitCode {
        match self {
            GraphError::VertexAlreadyExists { .. }
            | GraphError::VertexNotFound { .. }
            | GraphError::DuplicateNeighbor { .. }
            | GraphError::SelfLoop { .. }
            | GraphError::WeightUndefined
            | GraphError::NegativeWeight { .. }
            | GraphError::WeightedEdgeOnUnweightedGraph
            | GraphError::PathNotFound { .. } => ExitCode::Graph,

            GraphError::UnknownFormat(_)
            | GraphError::UsageError(_)
            | GraphError::InvalidValue { .. } => ExitCode::Usage,

            GraphError::Io(_)
            | GraphError::Yaml(_)
            | GraphError::Json(_)
            | GraphError::Toml(_)
            | GraphError::FailedOperationWithTarget { .. } => ExitCode::Failure,
        }
    }

    /// Get the error type identifier
    pub fn error_type(&self) -> &'static str {
        match self {
            GraphError::VertexAlreadyExists { .. } => "vertex_already_exists",
            GraphError::VertexNotFound { .. } => "vertex_not_found",
            GraphError::DuplicateNeighbor { .. } => "duplicate_neighbor",
            GraphError::SelfLoop { .. } => "self_loop",
            GraphError::WeightUndefined => "weight_undefined",
            GraphError::NegativeWeight { .. } => "negative_weight",
            GraphError::WeightedEdgeOnUnweightedGraph => "weighted_edge_on_unweighted_graph",
            GraphError::PathNotFound { .. } => "path_not_found",
            GraphError::UnknownFormat(_) => "unknown_format",
            GraphError::UsageError(_) => "usage_error",
            GraphError::InvalidValue { .. } => "invalid_value",
            GraphError::Io(_) => "io_error",
            GraphError::Yaml(_) => "yaml_error",
            GraphError::Json(_) => "json_error",
            GraphError::Toml(_) => "toml_error",
            GraphError::FailedOperationWithTarget { .. } => "failed_operation_with_target",
        }
    }

    /// Convert error to JSON representation for structured error output.
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::json!({
            "error": {
                "code": self.exit_code() as i32,
                "type": self.error_type(),
                "message": self.to_string(),
            }
        })
    }
}

/// Result type alias for graphlab operations
pub type Result<T> = std::result::Result<T, GraphError>;
