//! Cadence CLI Library
//!
//! Terminal display layer for the Cadence playback controller.
//!
//! This library exposes the command parser, renderer and loop for testing purposes.

pub mod commands;
pub mod config;
pub mod error;
pub mod render;
pub mod repl;

// Re-export commonly used types for convenience
pub use commands::{execute, Command, Outcome};
pub use config::CliConfig;
pub use error::{CliError, Result};
