//! Binary crate for the `moon` command-line tool.
//!
//! This crate focuses on:
//! - Parsing CLI arguments
//! - Interactive city/state prompts
//! - Running the lookup pipeline and printing the report

use clap::Parser;

mod cli;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    let cmd = cli::Cli::parse();
    cmd.run().await
}
