//! Graph and search configuration
//!
//! Settings are read from the `[graph]` and `[search]` tables of a graph
//! document (see [`crate::document`]).

pub mod types;

pub use types::{GraphConfig, GraphKind, SearchConfig};

use crate::graph::{EdgeKind, Orientation};

impl GraphConfig {
    /// Edge-insertion policy for graphs built from this configuration
    pub fn edge_kind(&self) -> EdgeKind {
        match self.kind {
            GraphKind::Unweighted => {
                if self.orientation == Orientation::Undirected {
                    tracing::debug!("orientation ignored for unweighted graphs");
                }
                EdgeKind::Unweighted
            }
            GraphKind::Weighted => EdgeKind::Weighted(self.orientation),
        }
    }

    /// Configuration that reproduces `kind`
    pub fn from_edge_kind(kind: EdgeKind) -> Self {
        match kind {
            EdgeKind::Unweighted => GraphConfig {
                kind: GraphKind::Unweighted,
                orientation: Orientation::default(),
            },
            EdgeKind::Weighted(orientation) => GraphConfig {
                kind: GraphKind::Weighted,
                orientation,
            },
        }
    }
}
