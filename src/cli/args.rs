//! CLI argument definitions using clap

use clap::{Parser, Subcommand};
use clap_complete::Shell;

/// placeprompt - Google Places business data to landing page prompts
#[derive(Parser, Debug)]
#[command(name = "placeprompt")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Defaults to the interactive loop when no subcommand is given
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run the interactive lookup loop
    Repl,

    /// Look up a single business and print the generated prompt
    Lookup {
        /// Free-text business query (e.g. "Joe's Garage Las Vegas")
        query: String,

        /// Print the raw place detail record as JSON instead of the prompt
        #[arg(long)]
        json: bool,
    },

    /// Configuration management
    #[command(subcommand)]
    Config(ConfigCommand),

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        shell: Shell,
    },
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommand {
    /// Show current configuration
    Show,

    /// Show configuration file path
    Path,

    /// Initialize default configuration
    Init {
        /// Force overwrite existing config
        #[arg(short, long)]
        force: bool,
    },
}
