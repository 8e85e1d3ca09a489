//! CLI definitions for Mergington.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

/// Mergington High School activities server.
#[derive(Parser)]
#[command(name = "mergington")]
#[command(about = "View and sign up for Mergington High School extracurricular activities")]
#[command(version)]
pub(crate) struct Cli {
    /// Configuration file path
    #[arg(short, long, default_value = "config/default.toml", global = true)]
    pub config: PathBuf,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub(crate) enum Commands {
    /// Run the server in foreground (default)
    Run {
        /// Server host (overrides config)
        #[arg(long)]
        host: Option<String>,

        /// Server port (overrides config)
        #[arg(long)]
        port: Option<u16>,

        /// Activity catalog file (overrides config)
        #[arg(long)]
        catalog: Option<PathBuf>,
    },

    /// Print the activity catalog the server would start with
    Activities {
        /// Output format
        #[arg(long, value_enum, default_value_t = OutputFormat::Table)]
        format: OutputFormat,
    },

    /// Validate the configuration and catalog
    CheckConfig,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub(crate) enum OutputFormat {
    Table,
    Json,
}
