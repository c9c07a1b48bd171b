//! One-shot driver: load the input files, run one query, print the JSON.

use anyhow::{Context, Result, bail};
use tracing::debug;

use sigswap_service::{
    ParameterUpdate, Project, get_signature_parameters, sort_signature_parameters,
    swap_signature_parameters,
};

use crate::args::{CliArgs, Command, QueryArgs};

/// Runs one invocation and renders its result as pretty JSON.
pub fn run(args: &CliArgs) -> Result<String> {
    match &args.command {
        Command::Params(query) => {
            let (project, file) = load_project(query)?;
            let params = get_signature_parameters(&project, &file, query.position);
            Ok(serde_json::to_string_pretty(&params)?)
        }
        Command::Sort(sort) => {
            let orders = parse_orders(&sort.orders)?;
            let (project, file) = load_project(&sort.query)?;
            let update = ParameterUpdate::Reorder { orders };
            let changes = sort_signature_parameters(&project, &file, sort.query.position, &update);
            Ok(serde_json::to_string_pretty(&changes)?)
        }
        Command::Swap(swap) => {
            let (project, file) = load_project(&swap.query)?;
            let changes =
                swap_signature_parameters(&project, &file, swap.query.position, swap.from, swap.to);
            Ok(serde_json::to_string_pretty(&changes)?)
        }
    }
}

/// Reads every input file into one project. Files are keyed by the path
/// spelling on the command line, and `--file` must match it.
fn load_project(query: &QueryArgs) -> Result<(Project, String)> {
    let mut project = Project::new();
    for path in &query.files {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        let source = project.add_file(path.to_string_lossy(), text);
        debug!(file = source.file_name(), "loaded");
    }
    let file = match &query.file {
        Some(name) => name.clone(),
        None => match query.files.first() {
            Some(path) => path.to_string_lossy().into_owned(),
            None => bail!("no input files"),
        },
    };
    Ok((project, file))
}

/// Parses the `--orders` shape: comma-separated source indices, with `-`
/// marking a placeholder slot.
pub fn parse_orders(text: &str) -> Result<Vec<Option<u32>>> {
    text.split(',')
        .map(|piece| {
            let piece = piece.trim();
            if piece == "-" {
                Ok(None)
            } else {
                piece
                    .parse::<u32>()
                    .map(Some)
                    .with_context(|| format!("invalid order entry {piece:?}"))
            }
        })
        .collect()
}

#[cfg(test)]
#[path = "tests/driver_tests.rs"]
mod driver_tests;
