//! CLI argument parsing with clap

use camino::Utf8PathBuf;
use clap::{Parser, Subcommand};

/// Bootstrapper - interactive scaffolder for uv-managed Python projects
#[derive(Parser, Debug)]
#[command(name = "bootstrapper")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Only log errors
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Path to the JSON config file
    #[arg(
        short,
        long,
        global = true,
        env = "BOOTSTRAPPER_CONFIG",
        default_value = bootstrapper_core::config::DEFAULT_CONFIG_FILE
    )]
    pub config: Utf8PathBuf,

    /// Defaults to `new` when omitted
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Create a new project interactively
    New,

    /// Check that uv is installed and recent enough
    Doctor,

    /// Configuration management
    #[command(subcommand)]
    Config(ConfigCommands),
}

// Config commands
#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Show the saved configuration with defaults applied
    Show,

    /// Print the config file location
    Path,
}
