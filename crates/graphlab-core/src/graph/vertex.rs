use crate::error::{GraphError, Result};
use crate::graph::VertexId;

/// A named data holder and the handles of the vertices it directly reaches.
#[derive(Debug, Clone)]
pub struct Vertex<T> {
    handle: VertexId,
    id: String,
    data: T,
    neighbors: Vec<VertexId>,
}

impl<T> Vertex<T> {
    pub(crate) fn new(handle: VertexId, id: impl Into<String>, data: T) -> Self {
        Self {
            handle,
            id: id.into(),
            data,
            neighbors: Vec::new(),
        }
    }

    pub fn handle(&self) -> VertexId {
        self.handle
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn data(&self) -> &T {
        &self.data
    }

    pub(crate) fn replace_data(&mut self, data: T) -> T {
        std::mem::replace(&mut self.data, data)
    }

    /// Neighbor handles in the order they were linked
    pub fn neighbors(&self) -> &[VertexId] {
        &self.neighbors
    }

    pub fn has_neighbor(&self, neighbor: VertexId) -> bool {
        self.neighbors.contains(&neighbor)
    }

    /// Link `neighbor` from this vertex. The reverse link is the caller's job.
    pub fn add_neighbor(&mut self, neighbor: VertexId) -> Result<()> {
        if neighbor == self.handle {
            return Err(GraphError::SelfLoop {
                id: self.id.clone(),
            });
        }
        if self.has_neighbor(neighbor) {
            return Err(GraphError::DuplicateNeighbor {
                vertex: self.id.clone(),
                neighbor,
            });
        }
        self.neighbors.push(neighbor);
        Ok(())
    }
}

impl<T: std::fmt::Display> std::fmt::Display for Vertex<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.id, self.data)
    }
}
