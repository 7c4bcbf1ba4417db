//! fitplan CLI Application
//!
//! Command-line interface and MCP server for the fitplan daily planner.

mod args;
mod cli;
mod mcp;
mod renderer;

use anyhow::{Context, Result};
use args::{Args, Commands};
use clap::Parser;
use cli::Cli;
use fitplan_core::{params::ListExercises, PlannerBuilder};
use log::info;
use mcp::{run_stdio_server, FitplanMcpServer};
use renderer::TerminalRenderer;
use Commands::*;

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let Args {
        no_color,
        json,
        command,
    } = Args::parse();

    let planner = PlannerBuilder::new().build();
    let renderer = TerminalRenderer::new(!no_color);

    info!("fitplan started");

    match command {
        Some(Schedule(args)) => Cli::new(planner, renderer, json).generate_schedule(&args.into()),
        Some(Workout(args)) => Cli::new(planner, renderer, json).generate_workout(&args.into()),
        Some(Exercise { command }) => {
            Cli::new(planner, renderer, json).handle_exercise_command(command)
        }
        Some(Diet(args)) => Cli::new(planner, renderer, json).recommend_diet(&args.into()),
        Some(Serve) => {
            info!("Starting fitplan MCP server");
            run_stdio_server(FitplanMcpServer::new(planner))
                .await
                .context("MCP server failed")
        }
        None => Cli::new(planner, renderer, json).list_exercises(&ListExercises::default()),
    }
}
