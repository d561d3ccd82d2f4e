//! `graphlab path` command

use std::path::Path;
use std::time::Instant;

use graphlab_core::search::Selection;
use graphlab_core::{trace_time, Dijkstra, Result};
use serde_json::json;

use crate::cli::{Cli, OutputFormat};
use crate::commands::load_graph;

/// Execute the path command
pub fn execute(
    cli: &Cli,
    file: &Path,
    from: &str,
    target: &str,
    selection: Option<Selection>,
    start: Instant,
) -> Result<()> {
    let (document, graph) = load_graph(file)?;
    let selection = selection.unwrap_or(document.search.selection);

    let path = Dijkstra::with_selection(&graph, selection).find_path(from, target)?;
    trace_time!(start, "shortest_path");

    match cli.format {
        OutputFormat::Json => {
            let output = json!({
                "start": from,
                "target": target,
                "selection": selection,
                "vertices": path.vertices,
                "total_weight": path.total_weight,
                "stats": path.stats,
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Human => {
            println!("{}", path.vertices.join(" -> "));
            if !cli.quiet {
                println!("total weight: {}", path.total_weight);
                println!(
                    "selections: {}, relaxations: {}, scanned: {}",
                    path.stats.selections, path.stats.relaxations, path.stats.scanned
                );
            }
        }
    }

    Ok(())
}
