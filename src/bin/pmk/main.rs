//! pmk CLI - a small build helper for C/C++ projects

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
        EnvFilter::new("pmk=debug")
    } else {
        EnvFilter::new("pmk=info")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .without_time()
        .with_writer(std::io::stderr)
        .init();

    // Execute command
    match cli.command {
        Commands::Init(args) => commands::init::execute(args),
        Commands::Build(args) => commands::build::execute(args),
        Commands::Run(args) => commands::run::execute(args),
        Commands::Generate(args) => commands::generate::execute(args),
        Commands::Update(args) => commands::update::execute(args),
        Commands::Shell(args) => commands::shell::execute(args),
        Commands::Version => commands::version::execute(),
        Commands::Completions(args) => commands::completions::execute(args),
    }
}
