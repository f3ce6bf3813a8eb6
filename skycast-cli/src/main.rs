//! Binary crate for the `skycast` terminal weather widget.
//!
//! This crate focuses on:
//! - Parsing CLI arguments
//! - The interactive search loop
//! - Human-friendly rendering of the widget state

use clap::Parser;

mod cli;
mod logging;
mod render;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cmd = cli::Cli::parse();
    logging::init(cmd.verbose)?;
    cmd.run().await
}
