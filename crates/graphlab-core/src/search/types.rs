use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::GraphError;

/// How Dijkstra picks the next vertex to finalize
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Selection {
    /// Scan every tracked distance on each step: O(V) per selection, O(V²) per search
    #[default]
    LinearScan,
    /// Pop from a min-heap of tentative distances, skipping stale entries
    BinaryHeap,
}

impl FromStr for Selection {
    type Err = GraphError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "linear-scan" | "linear" => Ok(Selection::LinearScan),
            "binary-heap" | "heap" => Ok(Selection::BinaryHeap),
            other => Err(GraphError::invalid_value(
                "selection (expected linear-scan or binary-heap)",
                other,
            )),
        }
    }
}

impl fmt::Display for Selection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Selection::LinearScan => write!(f, "linear-scan"),
            Selection::BinaryHeap => write!(f, "binary-heap"),
        }
    }
}

/// Visit order for uninformed traversal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Order {
    /// Breadth-first, driven by a FIFO queue
    #[default]
    #[serde(rename = "bfs")]
    BreadthFirst,
    /// Depth-first, driven by a LIFO stack
    #[serde(rename = "dfs")]
    DepthFirst,
}

impl FromStr for Order {
    type Err = GraphError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "bfs" | "breadth-first" => Ok(Order::BreadthFirst),
            "dfs" | "depth-first" => Ok(Order::DepthFirst),
            other => Err(GraphError::invalid_value(
                "order (expected bfs or dfs)",
                other,
            )),
        }
    }
}

impl fmt::Display for Order {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Order::BreadthFirst => write!(f, "bfs"),
            Order::DepthFirst => write!(f, "dfs"),
        }
    }
}

/// Work counters for one search
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct SearchStats {
    /// Vertices finalized
    pub selections: usize,
    /// Distance improvements applied
    pub relaxations: usize,
    /// Distance slots inspected (linear scan) or heap entries popped (binary heap)
    pub scanned: usize,
}

/// Result of a successful shortest-path search
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ShortestPath {
    /// Vertex ids from start to target, both inclusive
    pub vertices: Vec<String>,
    /// Sum of edge weights along `vertices`
    pub total_weight: f64,
    pub stats: SearchStats,
}
