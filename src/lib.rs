//! placeprompt - Turn Google Places business data into ready-to-paste
//! landing page prompts.
//!
//! Look a business up by name, pull its public profile from the Places API,
//! and render a structured prompt for a code-generating LLM.

pub mod cli;
pub mod config;
pub mod places;
pub mod prompt;

/// Application version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Application name
pub const APP_NAME: &str = "placeprompt";
