//! `graphlab distances` command

use std::path::Path;
use std::time::Instant;

use graphlab_core::search::Selection;
use graphlab_core::{trace_time, Dijkstra, Result};
use serde_json::json;

use crate::cli::{Cli, OutputFormat};
use crate::commands::load_graph;

/// Execute the distances command
pub fn execute(
    cli: &Cli,
    file: &Path,
    from: &str,
    selection: Option<Selection>,
    start: Instant,
) -> Result<()> {
    let (document, graph) = load_graph(file)?;
    let selection = selection.unwrap_or(document.search.selection);

    let table = Dijkstra::with_selection(&graph, selection).distances(from)?;
    trace_time!(start, "distances");

    match cli.format {
        OutputFormat::Json => {
            // Unreachable vertices serialize as null
            let distances: Vec<_> = table
                .iter()
                .map(|(id, distance)| {
                    json!({
                        "id": id,
                        "distance": distance.is_finite().then_some(*distance),
                    })
                })
                .collect();
            let output = json!({
                "start": from,
                "selection": selection,
                "distances": distances,
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Human => {
            for (id, distance) in &table {
                if distance.is_finite() {
                    println!("{}: {}", id, distance);
                } else {
                    println!("{}: unreachable", id);
                }
            }
        }
    }

    Ok(())
}
