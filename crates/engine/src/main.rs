//! Profiler Engine - Main entry point.

use clap::Parser;

use profiler_engine::infrastructure::cli::Cli;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    profiler_engine::run::run(Cli::parse()).await
}
