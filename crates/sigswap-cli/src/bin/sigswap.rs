//! One-shot refactoring queries over a set of TypeScript files.

use anyhow::Result;
use clap::Parser;

use sigswap_cli::args::CliArgs;
use sigswap_cli::driver;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::WARN.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = CliArgs::parse();
    let output = driver::run(&args)?;
    println!("{output}");
    Ok(())
}
