//! Configuration type definitions

use serde::{Deserialize, Serialize};

use crate::graph::Orientation;
use crate::search::{Order, Selection};

/// Whether edges carry weights
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GraphKind {
    Unweighted,
    #[default]
    Weighted,
}

/// Graph construction settings (`[graph]` table)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct GraphConfig {
    /// Edge weighting
    #[serde(default)]
    pub kind: GraphKind,

    /// Orientation of weighted edges; unweighted edges are always mutual
    #[serde(default)]
    pub orientation: Orientation,
}

/// Search settings (`[search]` table)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SearchConfig {
    /// Dijkstra selection strategy
    #[serde(default)]
    pub selection: Selection,

    /// Default order for uninformed traversal
    #[serde(default)]
    pub order: Order,
}
