//! placeprompt - Google Places business data to landing page prompts
//!
//! Entry point for the placeprompt CLI application.

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use placeprompt::cli::{Cli, Commands};
use placeprompt::config::Settings;

#[tokio::main]
async fn main() -> Result<()> {
    // Pick up GOOGLE_API_KEY from a local .env file if one exists
    dotenv::dotenv().ok();

    // Initialize logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .init();

    // Parse CLI arguments
    let cli = Cli::parse();

    match cli.command.unwrap_or(Commands::Repl) {
        Commands::Completions { shell } => {
            placeprompt::cli::completions::print(shell);
        }
        command => {
            // Load configuration only for runtime commands.
            let settings = Settings::load()?;

            match command {
                Commands::Repl => {
                    placeprompt::cli::commands::run_repl(&settings).await?;
                }
                Commands::Lookup { query, json } => {
                    placeprompt::cli::commands::lookup_once(&settings, &query, json).await?;
                }
                Commands::Config(config_cmd) => {
                    placeprompt::cli::commands::config_command(&settings, config_cmd)?;
                }
                Commands::Completions { .. } => unreachable!(),
            }
        }
    }

    Ok(())
}
