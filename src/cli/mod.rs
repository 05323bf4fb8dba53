//! Command-line interface for repo-checker.
//!
//! - [`args`] - Argument definitions using clap derive macros
//! - [`commands`] - Command implementations

pub mod args;
pub mod commands;

pub use args::{CheckArgs, Cli, Commands, CompletionsArgs, InteractiveArgs, DEFAULT_REPO_URL};
pub use commands::{Command, CommandDispatcher, CommandResult};
