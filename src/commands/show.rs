//! `graphlab show` command

use std::path::Path;
use std::time::Instant;

use graphlab_core::{trace_time, Graph, Result};
use serde_json::json;

use crate::cli::{Cli, OutputFormat};
use crate::commands::load_graph;

/// Execute the show command
pub fn execute(cli: &Cli, file: &Path, start: Instant) -> Result<()> {
    let (_, graph) = load_graph(file)?;
    trace_time!(start, "build_graph");

    match cli.format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&graph_json(&graph))?);
        }
        OutputFormat::Human => {
            print!("{}", graph);
        }
    }

    Ok(())
}

fn graph_json(graph: &Graph<String>) -> serde_json::Value {
    let vertices: Vec<_> = graph
        .vertices()
        .map(|vertex| {
            let neighbors: Vec<&str> = vertex
                .neighbors()
                .iter()
                .filter_map(|&handle| graph.vertex(handle).map(|n| n.id()))
                .collect();
            json!({
                "id": vertex.id(),
                "data": vertex.data(),
                "neighbors": neighbors,
            })
        })
        .collect();

    json!({
        "kind": graph.kind().to_string(),
        "ids": graph.ids().collect::<Vec<_>>(),
        "vertices": vertices,
        "adjacency": graph.adjacency_matrix().rows(),
        "weights": graph.weights_matrix().map(|m| m.rows()),
    })
}
