//! Command implementations for graphlab

pub mod dispatch;
pub mod distances;
pub mod path;
pub mod show;
pub mod traverse;

use std::path::Path;

use graphlab_core::document::GraphDocument;
use graphlab_core::{Graph, Result};

/// Load a document and build its graph
pub(crate) fn load_graph(file: &Path) -> Result<(GraphDocument, Graph<String>)> {
    let document = GraphDocument::load(file)?;
    let graph = document.build()?;
    Ok((document, graph))
}
