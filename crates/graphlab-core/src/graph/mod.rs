//! Graph model
//!
//! A single `Graph` type whose edge-insertion behavior is selected by an
//! [`EdgeKind`] at construction:
//! - `Unweighted`: mutual neighbor links, symmetric adjacency matrix
//! - `Weighted(Directed)`: one-way links, adjacency and weight cell for `A -> B`
//! - `Weighted(Undirected)`: mutual links, symmetric writes to both matrices
//!
//! Vertices live in an arena ordered by insertion; a vertex's position in the
//! arena is its row and column in every matrix.

pub mod matrix;
mod render;
pub mod types;
pub mod vertex;

use crate::collections::IdIndex;
use crate::error::{GraphError, Result};
use crate::{bail_invalid, bail_not_found};
pub use matrix::SquareMatrix;
pub use types::{EdgeKind, Orientation, VertexId};
pub use vertex::Vertex;

/// Vertex store with an adjacency matrix and, for weighted graphs, a parallel
/// weight matrix kept at the same dimensions.
#[derive(Debug, Clone)]
pub struct Graph<T> {
    kind: EdgeKind,
    vertices: Vec<Vertex<T>>,
    index: IdIndex,
    adjacency: SquareMatrix<u8>,
    weights: Option<SquareMatrix<f64>>,
}

impl<T> Graph<T> {
    /// Create an unweighted graph
    pub fn new() -> Self {
        Self::with_kind(EdgeKind::Unweighted)
    }

    /// Create the directed-graph variant.
    ///
    /// Edge insertion links both endpoints and writes both matrix cells,
    /// exactly like [`Graph::new`]. For one-way edges use [`Graph::weighted`].
    pub fn directed() -> Self {
        Self::with_kind(EdgeKind::Unweighted)
    }

    /// Create a weighted graph with one-way edges
    pub fn weighted() -> Self {
        Self::with_kind(EdgeKind::Weighted(Orientation::Directed))
    }

    pub fn with_kind(kind: EdgeKind) -> Self {
        Self {
            kind,
            vertices: Vec::new(),
            index: IdIndex::new(),
            adjacency: SquareMatrix::new(),
            weights: kind.is_weighted().then(SquareMatrix::new),
        }
    }

    pub fn kind(&self) -> EdgeKind {
        self.kind
    }

    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Register a new vertex and grow every matrix by one row and column.
    pub fn add_vertex(&mut self, id: &str, data: T) -> Result<&Vertex<T>> {
        let Some(position) = self.index.insert(id) else {
            return Err(GraphError::vertex_already_exists(id));
        };

        self.vertices
            .push(Vertex::new(VertexId::new(position), id, data));
        self.adjacency.push_vertex();
        if let Some(weights) = self.weights.as_mut() {
            weights.push_vertex();
        }

        tracing::trace!(vertex = id, index = position, "add_vertex");
        Ok(&self.vertices[position])
    }

    pub fn get_vertex(&self, id: &str) -> Option<&Vertex<T>> {
        self.index.get(id).map(|position| &self.vertices[position])
    }

    /// Look up a vertex by handle
    pub fn vertex(&self, handle: VertexId) -> Option<&Vertex<T>> {
        self.vertices.get(handle.index())
    }

    /// Vertices in insertion order
    pub fn vertices(&self) -> impl Iterator<Item = &Vertex<T>> {
        self.vertices.iter()
    }

    /// Vertex ids in insertion order
    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.index.iter()
    }

    /// Resolve an id to its handle
    pub fn handle_of(&self, id: &str) -> Result<VertexId> {
        match self.index.get(id) {
            Some(position) => Ok(VertexId::new(position)),
            None => bail_not_found!(id),
        }
    }

    pub fn contains(&self, id: &str) -> bool {
        self.index.contains(id)
    }

    /// Insert an edge without a weight.
    ///
    /// On a weighted graph this fails with `WeightUndefined`.
    pub fn add_edge(&mut self, from: &str, to: &str) -> Result<()> {
        self.insert_edge(from, to, None)
    }

    /// Insert an edge carrying `weight`.
    ///
    /// Zero, NaN and missing weights are rejected with `WeightUndefined`, so a
    /// zero-weight edge cannot be created.
    pub fn add_weighted_edge(
        &mut self,
        from: &str,
        to: &str,
        weight: impl Into<Option<f64>>,
    ) -> Result<()> {
        if !self.kind.is_weighted() {
            return Err(GraphError::WeightedEdgeOnUnweightedGraph);
        }
        self.insert_edge(from, to, weight.into())
    }

    fn insert_edge(&mut self, from_id: &str, to_id: &str, weight: Option<f64>) -> Result<()> {
        let weight = match self.kind {
            EdgeKind::Unweighted => None,
            EdgeKind::Weighted(_) => Some(validate_weight(weight)?),
        };

        let from = self.handle_of(from_id)?;
        let to = self.handle_of(to_id)?;
        let mutual = self.kind.is_mutual();

        // Reverse link is checked up front so a rejected edge leaves both
        // neighbor sets untouched.
        if mutual && self.vertices[to.index()].has_neighbor(from) {
            return Err(GraphError::DuplicateNeighbor {
                vertex: to_id.to_string(),
                neighbor: from,
            });
        }
        self.vertices[from.index()].add_neighbor(to)?;
        if mutual {
            self.vertices[to.index()].add_neighbor(from)?;
        }

        let (row, col) = (from.index(), to.index());
        self.adjacency.set(row, col, 1);
        if mutual {
            self.adjacency.set(col, row, 1);
        }
        if let (Some(weights), Some(weight)) = (self.weights.as_mut(), weight) {
            weights.set(row, col, weight);
            if mutual {
                weights.set(col, row, weight);
            }
        }

        tracing::trace!(from = from_id, to = to_id, weight = ?weight, "add_edge");
        Ok(())
    }

    /// Overwrite a vertex's data in place, keeping all of its edges.
    pub fn replace_data(&mut self, id: &str, data: T) -> Result<()> {
        let handle = self.handle_of(id)?;
        self.vertices[handle.index()].replace_data(data);
        Ok(())
    }

    /// Weight recorded for `from -> to`, or 0 when no edge was set in that direction.
    ///
    /// Unweighted graphs report 1 for every edge.
    pub fn get_weight(&self, from: &str, to: &str) -> Result<f64> {
        let from = self.handle_of(from)?;
        let to = self.handle_of(to)?;
        Ok(self.weight_between(from, to))
    }

    pub(crate) fn id_at(&self, handle: VertexId) -> &str {
        self.vertices[handle.index()].id()
    }

    pub(crate) fn neighbors_of(&self, handle: VertexId) -> &[VertexId] {
        self.vertices[handle.index()].neighbors()
    }

    pub(crate) fn weight_between(&self, from: VertexId, to: VertexId) -> f64 {
        match &self.weights {
            Some(weights) => weights.get(from.index(), to.index()),
            None => f64::from(self.adjacency.get(from.index(), to.index())),
        }
    }

    /// Whether the adjacency matrix records an edge `from -> to`
    pub fn has_edge(&self, from: &str, to: &str) -> Result<bool> {
        let from = self.handle_of(from)?;
        let to = self.handle_of(to)?;
        Ok(self.adjacency.get(from.index(), to.index()) == 1)
    }

    pub fn adjacency_matrix(&self) -> &SquareMatrix<u8> {
        &self.adjacency
    }

    /// Weight matrix, present only on weighted graphs
    pub fn weights_matrix(&self) -> Option<&SquareMatrix<f64>> {
        self.weights.as_ref()
    }
}

impl<T> Default for Graph<T> {
    fn default() -> Self {
        Self::new()
    }
}

fn validate_weight(weight: Option<f64>) -> Result<f64> {
    match weight {
        None => Err(GraphError::WeightUndefined),
        Some(w) if w == 0.0 || w.is_nan() => Err(GraphError::WeightUndefined),
        Some(w) if w < 0.0 => Err(GraphError::NegativeWeight { weight: w }),
        Some(w) if w.is_infinite() => bail_invalid!("edge weight", w),
        Some(w) => Ok(w),
    }
}

#[cfg(test)]
mod tests;
