use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

/// CLI arguments for the sigswap binary.
#[derive(Parser, Debug)]
#[command(
    name = "sigswap",
    version,
    about = "Reorder, move, and delete function parameters across a TypeScript project"
)]
pub struct CliArgs {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// List the parameters of the signature at a position.
    Params(QueryArgs),
    /// Rewrite the signature and its call sites with an explicit order list.
    Sort(SortArgs),
    /// Move one parameter to a new slot, or delete it with a negative target.
    Swap(SwapArgs),
}

/// What every query needs: the project files and the query position.
#[derive(Args, Debug)]
pub struct QueryArgs {
    /// File containing the queried signature. Defaults to the first input file.
    #[arg(long)]
    pub file: Option<String>,

    /// Byte offset of the query position inside the queried file.
    #[arg(long)]
    pub position: u32,

    /// Input files, loaded into one project in the order given.
    #[arg(value_name = "FILE", required = true)]
    pub files: Vec<PathBuf>,
}

#[derive(Args, Debug)]
pub struct SortArgs {
    #[command(flatten)]
    pub query: QueryArgs,

    /// Comma-separated source indices naming what fills each output slot;
    /// `-` renders a placeholder (for example `2,0,-`).
    #[arg(long, value_name = "ORDERS")]
    pub orders: String,
}

#[derive(Args, Debug)]
pub struct SwapArgs {
    #[command(flatten)]
    pub query: QueryArgs,

    /// Source index of the parameter to move.
    #[arg(long)]
    pub from: u32,

    /// Target index. Negative deletes the parameter; past the end moves it
    /// to the tail.
    #[arg(long, allow_hyphen_values = true)]
    pub to: i64,
}

#[cfg(test)]
#[path = "tests/args_tests.rs"]
mod args_tests;
