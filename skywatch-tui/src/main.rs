//! Binary crate for the `skywatch` terminal weather screen.
//!
//! This crate focuses on:
//! - Parsing CLI arguments
//! - Interactive configuration
//! - The single-screen terminal UI

use clap::Parser;

mod cli;
mod logging;
mod tui;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    logging::init()?;
    let cmd = cli::Cli::parse();
    cmd.run().await
}
