//! Mergington - extracurricular activity sign-ups for Mergington High School
//!
//! Main entry point for the CLI and server.

mod cli;
mod cmd_activities;
mod server;

use clap::Parser;
use tracing::warn;

use mergington_config::{Config, ConfigLoader, ConfigValidator};

use crate::cli::{Cli, Commands};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let mut config = ConfigLoader::load_or_default(&cli.config)?;

    match cli.command {
        Some(Commands::Activities { format }) => cmd_activities::list_activities(&config, format),
        Some(Commands::CheckConfig) => cmd_activities::check_config(&cli.config, &config),
        Some(Commands::Run {
            host,
            port,
            catalog,
        }) => {
            if let Some(host) = host {
                config.server.host = host;
            }
            if let Some(port) = port {
                config.server.port = port;
            }
            if catalog.is_some() {
                config.catalog.path = catalog;
            }
            serve(config).await
        }
        // Default: run server with configured values
        None => serve(config).await,
    }
}

async fn serve(config: Config) -> Result<(), Box<dyn std::error::Error>> {
    server::init_tracing(&config.logging)?;

    let warnings = ConfigValidator::validate(&config).into_result()?;
    for warning in warnings {
        warn!("Config {}: {}", warning.path, warning.message);
    }

    server::run_server(config).await
}
