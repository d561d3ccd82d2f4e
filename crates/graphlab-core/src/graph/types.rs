use serde::{Deserialize, Serialize};
use std::fmt;

/// Stable handle of a vertex inside the graph that owns it.
///
/// The handle equals the vertex's insertion rank, which is also its row and
/// column in the adjacency and weight matrices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct VertexId(usize);

impl VertexId {
    pub fn new(index: usize) -> Self {
        VertexId(index)
    }

    pub fn index(&self) -> usize {
        self.0
    }
}

impl fmt::Display for VertexId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// How weighted edges are recorded
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Orientation {
    /// `A -> B` only: one neighbor link, one matrix cell per matrix
    #[default]
    Directed,
    /// Mutual neighbor links and symmetric writes to both matrices
    Undirected,
}

/// Edge-insertion policy fixed when the graph is constructed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EdgeKind {
    /// Mutual linkage, symmetric adjacency, no weight matrix
    #[default]
    Unweighted,
    /// Every edge carries a weight recorded in a parallel weight matrix
    Weighted(Orientation),
}

impl EdgeKind {
    pub fn is_weighted(&self) -> bool {
        matches!(self, EdgeKind::Weighted(_))
    }

    /// Whether an edge insertion links both endpoints to each other
    pub fn is_mutual(&self) -> bool {
        matches!(
            self,
            EdgeKind::Unweighted | EdgeKind::Weighted(Orientation::Undirected)
        )
    }
}

impl fmt::Display for EdgeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EdgeKind::Unweighted => write!(f, "unweighted"),
            EdgeKind::Weighted(Orientation::Directed) => write!(f, "weighted (directed)"),
            EdgeKind::Weighted(Orientation::Undirected) => write!(f, "weighted (undirected)"),
        }
    }
}
