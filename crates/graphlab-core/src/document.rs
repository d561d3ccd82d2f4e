//! Graph description documents
//!
//! A document lists settings, vertices and edges. Building a graph replays
//! the vertex and edge insertions in file order, so a bad document fails with
//! the same error the equivalent API call would raise.
//!
//! ```toml
//! [graph]
//! kind = "weighted"
//! orientation = "directed"
//!
//! [search]
//! selection = "linear-scan"
//!
//! [[vertices]]
//! id = "start"
//!
//! [[edges]]
//! from = "start"
//! to = "A"
//! weight = 6
//! ```

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::config::{GraphConfig, SearchConfig};
use crate::error::{GraphError, Result};
use crate::graph::{EdgeKind, Graph};

/// Serialization syntax of a document, chosen by file extension
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentFormat {
    Toml,
    Json,
    Yaml,
}

impl DocumentFormat {
    /// Detect the syntax from `path`'s extension
    pub fn from_path(path: &Path) -> Result<Self> {
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_lowercase)
            .unwrap_or_default();

        match extension.as_str() {
            "toml" => Ok(DocumentFormat::Toml),
            "json" => Ok(DocumentFormat::Json),
            "yaml" | "yml" => Ok(DocumentFormat::Yaml),
            _ => Err(GraphError::invalid_value(
                "document extension (expected .toml, .json, .yaml or .yml)",
                path.display(),
            )),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VertexSpec {
    pub id: String,

    /// Vertex payload; defaults to the id
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EdgeSpec {
    pub from: String,
    pub to: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weight: Option<f64>,
}

/// A graph description: settings plus the insertions that build it
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GraphDocument {
    #[serde(default)]
    pub graph: GraphConfig,

    #[serde(default)]
    pub search: SearchConfig,

    #[serde(default)]
    pub vertices: Vec<VertexSpec>,

    #[serde(default)]
    pub edges: Vec<EdgeSpec>,
}

impl GraphDocument {
    /// Load a document from a file
    pub fn load(path: &Path) -> Result<Self> {
        let format = DocumentFormat::from_path(path)?;
        let content = fs::read_to_string(path)
            .map_err(|e| GraphError::io_operation("read", path.display(), e))?;
        let document = Self::parse(&content, format)?;

        tracing::debug!(
            path = %path.display(),
            vertices = document.vertices.len(),
            edges = document.edges.len(),
            "load_document"
        );
        Ok(document)
    }

    pub fn parse(content: &str, format: DocumentFormat) -> Result<Self> {
        Ok(match format {
            DocumentFormat::Toml => toml::from_str(content)?,
            DocumentFormat::Json => serde_json::from_str(content)?,
            DocumentFormat::Yaml => serde_yaml::from_str(content)?,
        })
    }

    /// Save the document, using the syntax implied by `path`
    pub fn save(&self, path: &Path) -> Result<()> {
        let content = match DocumentFormat::from_path(path)? {
            DocumentFormat::Toml => toml::to_string_pretty(self).map_err(|e| {
                GraphError::io_operation("serialize", path.display(), e)
            })?,
            DocumentFormat::Json => serde_json::to_string_pretty(self)?,
            DocumentFormat::Yaml => serde_yaml::to_string(self)?,
        };
        fs::write(path, content)
            .map_err(|e| GraphError::io_operation("write", path.display(), e))?;
        Ok(())
    }

    /// Build a graph by replaying every vertex, then every edge, in order.
    pub fn build(&self) -> Result<Graph<String>> {
        let mut graph = Graph::with_kind(self.graph.edge_kind());

        for vertex in &self.vertices {
            let data = vertex.data.clone().unwrap_or_else(|| vertex.id.clone());
            graph.add_vertex(&vertex.id, data)?;
        }

        for edge in &self.edges {
            match edge.weight {
                Some(weight) => graph.add_weighted_edge(&edge.from, &edge.to, weight)?,
                None => graph.add_edge(&edge.from, &edge.to)?,
            }
        }

        Ok(graph)
    }

    /// Describe an existing graph.
    ///
    /// Edges are listed in matrix order (row by row), so a graph rebuilt from
    /// the document may list neighbors in a different order than the original.
    /// Mutual edges are listed once.
    pub fn from_graph(graph: &Graph<String>, search: SearchConfig) -> Self {
        let ids: Vec<&str> = graph.ids().collect();
        let kind = graph.kind();

        let vertices = graph
            .vertices()
            .map(|vertex| VertexSpec {
                id: vertex.id().to_string(),
                data: (vertex.data() != vertex.id()).then(|| vertex.data().clone()),
            })
            .collect();

        let mut edges = Vec::new();
        for (row, cells) in graph.adjacency_matrix().rows().iter().enumerate() {
            for (col, &cell) in cells.iter().enumerate() {
                if cell == 0 || (kind.is_mutual() && col < row) {
                    continue;
                }
                let weight = graph
                    .weights_matrix()
                    .map(|weights| weights.get(row, col));
                edges.push(EdgeSpec {
                    from: ids[row].to_string(),
                    to: ids[col].to_string(),
                    weight,
                });
            }
        }

        GraphDocument {
            graph: GraphConfig::from_edge_kind(kind),
            search,
            vertices,
            edges,
        }
    }

    pub fn edge_kind(&self) -> EdgeKind {
        self.graph.edge_kind()
    }
}
