// src/cli/mod.rs
//! CLI argument parsing and command handlers.

pub mod args;
pub mod handlers;

pub use args::Cli;
pub use handlers::{handle_analyze, resolve_config};
