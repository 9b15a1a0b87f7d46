//! CLI module for placeprompt
//!
//! Contains argument parsing, the interactive loop, and command
//! implementations.

pub mod args;
pub mod commands;
pub mod completions;

pub use args::{Cli, Commands, ConfigCommand};
