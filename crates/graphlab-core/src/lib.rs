//! Graphlab Core Library
//!
//! Weighted graph model backed by parallel adjacency and weight matrices,
//! plus the single-source shortest-path engine that runs over it.

pub mod collections;
pub mod config;
pub mod document;
pub mod error;
pub mod format;
pub mod graph;
pub mod logging;
pub mod search;

pub use error::{GraphError, Result};
pub use graph::{EdgeKind, Graph, Orientation, Vertex, VertexId};
pub use search::{Dijkstra, Selection, ShortestPath};
