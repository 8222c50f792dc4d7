//! Stitch CLI Application
//!
//! Command-line interface for the stitch delivery scheduling tool.

mod args;
mod cli;
mod mcp;
mod renderer;

use anyhow::{Context, Result};
use args::{Args, Commands};
use clap::Parser;
use cli::Cli;
use log::info;
use mcp::{run_stdio_server, StitchMcpServer};
use renderer::TerminalRenderer;
use stitch_core::params::ScenarioQuery;
use Commands::*;

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let Args { no_color, command } = Args::parse();

    let renderer = TerminalRenderer::new(!no_color);

    info!("Stitch started");

    match command {
        Some(Scenarios(args)) => Cli::new(renderer).handle_scenarios(&args.into()),
        Some(Schedule(args)) => Cli::new(renderer).handle_schedule(&args.into()),
        Some(Serve) => {
            info!("Starting Stitch MCP server");
            run_stdio_server(StitchMcpServer::new())
                .await
                .context("MCP server failed")
        }
        None => Cli::new(renderer).handle_scenarios(&ScenarioQuery::default()),
    }
}
