//! Path-finding and traversal over a [`Graph`](crate::graph::Graph)
//!
//! - `dijkstra`: weighted shortest paths (linear-scan selection by default)
//! - `heap`: binary-heap selection strategy for the same engine
//! - `traversal`: breadth-first and depth-first walks over neighbor sets

pub mod dijkstra;
mod heap;
pub mod traversal;
pub mod types;

pub use dijkstra::Dijkstra;
pub use traversal::{breadth_first_search, contains, depth_first_search, visit_order};
pub use types::{Order, SearchStats, Selection, ShortestPath};
