//! `graphlab traverse` command

use std::path::Path;
use std::time::Instant;

use graphlab_core::search::{self, Order};
use graphlab_core::{trace_time, Result};
use serde_json::json;

use crate::cli::{Cli, OutputFormat};
use crate::commands::load_graph;

/// Execute the traverse command
///
/// Without `find`, lists every reachable vertex in visit order. With it,
/// reports whether a reachable vertex carries that data.
pub fn execute(
    cli: &Cli,
    file: &Path,
    from: &str,
    order: Option<Order>,
    find: Option<&str>,
    start: Instant,
) -> Result<()> {
    let (document, graph) = load_graph(file)?;
    let order = order.unwrap_or(document.search.order);

    match find {
        Some(data) => {
            let found = search::contains(&graph, from, order, |d| d == data)?;
            trace_time!(start, "traverse_find");

            match cli.format {
                OutputFormat::Json => {
                    let output = json!({
                        "start": from,
                        "order": order,
                        "find": data,
                        "found": found,
                    });
                    println!("{}", serde_json::to_string_pretty(&output)?);
                }
                OutputFormat::Human => {
                    if found {
                        println!("found {} from {}", data, from);
                    } else {
                        println!("{} not reachable from {}", data, from);
                    }
                }
            }
        }
        None => {
            let visited = search::visit_order(&graph, from, order)?;
            trace_time!(start, "traverse");

            match cli.format {
                OutputFormat::Json => {
                    let output = json!({
                        "start": from,
                        "order": order,
                        "visited": visited,
                    });
                    println!("{}", serde_json::to_string_pretty(&output)?);
                }
                OutputFormat::Human => {
                    for id in &visited {
                        println!("{}", id);
                    }
                }
            }
        }
    }

    Ok(())
}
