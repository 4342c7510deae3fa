//! gasket-docs CLI: writes the top-level docs index for an app.
//!
//! Reads a config set produced by plugin discovery and renders
//! `<docsRoot>/README.md` from it.

mod commands;

use clap::Parser;
use color_eyre::eyre::Result;

use commands::Cli;

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    let cli = Cli::parse();
    commands::init_tracing(&cli);
    commands::run(cli).await
}
