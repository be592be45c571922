//! Presentation layer for agentkit
//!
//! This crate contains the CLI definition and console formatters.

pub mod cli;
pub mod output;

// Re-export commonly used types
pub use cli::commands::{Cli, Command, OutputFormat};
pub use output::console::ConsoleFormatter;
