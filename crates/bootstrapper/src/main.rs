//! Bootstrapper CLI - scaffolds uv-managed Python projects
//!
//! This is the main entry point for the bootstrapper command-line interface.

mod cli;
mod commands;
mod output;
mod prompter;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use cli::{Cli, Commands};

fn main() -> Result<()> {
    let cli = Cli::parse();

    init_tracing(cli.verbose, cli.quiet);

    match cli.command.unwrap_or(Commands::New) {
        Commands::New => commands::new::run(&cli.config),
        Commands::Doctor => commands::doctor::run(&cli.config),
        Commands::Config(cmd) => commands::config::run(cmd, &cli.config),
    }
}

/// Initialize tracing with appropriate verbosity
fn init_tracing(verbose: u8, quiet: bool) {
    let filter = if quiet {
        EnvFilter::new("error")
    } else {
        match verbose {
            // Progress lines go through the prompter, logs stay quiet by default
            0 => EnvFilter::new("warn"),
            1 => EnvFilter::new("info"),
            2 => EnvFilter::new("debug"),
            _ => EnvFilter::new("trace"),
        }
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
        .with(filter)
        .init();
}
