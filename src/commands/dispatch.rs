//! Command dispatch logic for graphlab

use std::time::Instant;

use graphlab_core::Result;

use crate::cli::{Cli, Commands};
use crate::commands;

pub fn run(cli: &Cli, start: Instant) -> Result<()> {
    match &cli.command {
        None => handle_no_command(),

        Some(Commands::Show { file }) => commands::show::execute(cli, file, start),

        Some(Commands::Path {
            file,
            start: from,
            target,
            selection,
        }) => commands::path::execute(cli, file, from, target, *selection, start),

        Some(Commands::Distances {
            file,
            start: from,
            selection,
        }) => commands::distances::execute(cli, file, from, *selection, start),

        Some(Commands::Traverse {
            file,
            start: from,
            order,
            find,
        }) => commands::traverse::execute(cli, file, from, *order, find.as_deref(), start),
    }
}

fn handle_no_command() -> Result<()> {
    println!("graphlab {}", env!("CARGO_PKG_VERSION"));
    println!();
    println!("Weighted graphs, matrix views and shortest paths.");
    println!();
    println!("Run `graphlab --help` for usage information.");
    Ok(())
}
