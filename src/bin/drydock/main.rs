//! Drydock CLI - drives multi-target docker buildx bake builds

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

mod cli;
mod commands;

use cli::{Cli, Commands};

fn main() {
    if let Err(e) = run() {
        eprintln!("error: {:#}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    // Parse CLI
    let cli = Cli::parse();

    // Set up logging
    let filter = if cli.verbose {
        EnvFilter::new("drydock=debug")
    } else {
        EnvFilter::new("drydock=info")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .without_time()
        .with_writer(std::io::stderr)
        .init();

    let state_file = cli
        .state_file
        .unwrap_or_else(drydock::StateFile::default_path);

    // Execute command
    match cli.command {
        Commands::Bake(args) => commands::bake::execute(args, state_file),
        Commands::Cleanup(args) => commands::cleanup::execute(args, state_file),
    }
}
