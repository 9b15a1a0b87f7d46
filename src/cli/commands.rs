//! CLI command implementations

use std::io::Write;

use anyhow::Result;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::signal;

use crate::cli::args::ConfigCommand;
use crate::config::Settings;
use crate::places::{build_provider, PlacesError, PlacesProvider};
use crate::prompt::build_landing_page_prompt;

const INPUT_PROMPT: &str = "\n> Enter Business Name (or 'q' to quit): ";

/// What to do with one line of REPL input.
#[derive(Debug, PartialEq, Eq)]
enum ReplAction {
    Quit,
    Skip,
    Query(String),
}

fn classify_input(line: &str) -> ReplAction {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return ReplAction::Skip;
    }

    match trimmed.to_lowercase().as_str() {
        "q" | "quit" | "exit" => ReplAction::Quit,
        _ => ReplAction::Query(trimmed.to_string()),
    }
}

/// Run the interactive lookup loop.
///
/// The provider is built before the first prompt, so a missing API
/// credential aborts here with a non-zero exit instead of mid-session.
pub async fn run_repl(settings: &Settings) -> Result<()> {
    let provider = build_provider(settings)?;

    println!("=== {} v{} ===", crate::APP_NAME, crate::VERSION);
    println!("Tip: For best results, enter 'Business Name City' (e.g. 'LV Auto Body Shop Las Vegas')");

    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    loop {
        print!("{INPUT_PROMPT}");
        std::io::stdout().flush()?;

        // Ctrl-C while waiting for input ends the session cleanly.
        let line = tokio::select! {
            line = lines.next_line() => line?,
            _ = signal::ctrl_c() => {
                println!("\nExiting...");
                break;
            }
        };

        let Some(line) = line else {
            println!("\nExiting...");
            break;
        };

        match classify_input(&line) {
            ReplAction::Skip => continue,
            ReplAction::Quit => {
                println!("Exiting...");
                break;
            }
            ReplAction::Query(query) => run_query(provider.as_ref(), &query).await,
        }
    }

    Ok(())
}

/// One lookup within the loop. Every failure is recoverable here: report
/// it and hand control back to the prompt.
async fn run_query(provider: &dyn PlacesProvider, query: &str) {
    println!("\nQuerying Google Places for '{query}'...");

    match provider.lookup(query).await {
        Ok(detail) => {
            let prompt = build_landing_page_prompt(&detail);
            println!("\n{}", "=".repeat(40));
            println!("{prompt}");
            println!("{}\n", "=".repeat(40));
            println!("Prompt generated! Copy the text between the lines.");
        }
        Err(PlacesError::NoResults) => {
            println!("No results found. Try adding the city name (e.g. 'Business Name Las Vegas').");
        }
        Err(err) => {
            tracing::warn!("lookup failed: {err}");
            println!("Lookup failed: {err}");
        }
    }
}

/// One-shot lookup: print the generated prompt (or the raw detail record
/// as JSON) and exit. Unlike the loop, failures propagate to the caller.
pub async fn lookup_once(settings: &Settings, query: &str, json: bool) -> Result<()> {
    let provider = build_provider(settings)?;

    let detail = provider.lookup(query).await?;

    if json {
        println!("{}", serde_json::to_string_pretty(&detail)?);
    } else {
        println!("{}", build_landing_page_prompt(&detail));
    }

    Ok(())
}

/// Handle config subcommands
pub fn config_command(settings: &Settings, cmd: ConfigCommand) -> Result<()> {
    match cmd {
        ConfigCommand::Show => {
            let toml = toml::to_string_pretty(settings)?;
            println!("{}", toml);
        }
        ConfigCommand::Path => {
            let path = Settings::config_path()?;
            println!("{}", path.display());
        }
        ConfigCommand::Init { force } => {
            let path = Settings::config_path()?;
            if path.exists() && !force {
                anyhow::bail!(
                    "Config file already exists at {}. Use --force to overwrite.",
                    path.display()
                );
            }
            Settings::write_default(&path)?;
            println!("Configuration initialized at: {}", path.display());
        }
    }

    Ok(())
}
