//! CLI argument definitions.
//!
//! This module defines all CLI arguments using clap's derive macros.
//! The main entry point is the [`Cli`] struct.

use clap::{Parser, Subcommand};
use clap_complete::Shell;

/// Repository URL pre-filled in the interactive form.
pub const DEFAULT_REPO_URL: &str = "https://github.com/cnnrbrn/html-test-repo";

/// repo-checker - Check a repository against a remote code checking service.
#[derive(Debug, Parser)]
#[command(name = "repo-checker")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Base URL of the checking service
    #[arg(long, global = true, env = "REPO_CHECKER_API_URL", value_name = "URL")]
    pub api_url: Option<String>,

    /// Show verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Minimal output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Check repositories interactively (default if no command specified)
    Interactive(InteractiveArgs),

    /// Check a single repository and exit
    Check(CheckArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Arguments for the `interactive` command.
#[derive(Debug, Clone, clap::Args)]
pub struct InteractiveArgs {
    /// Repository URL to pre-fill in the first prompt
    #[arg(long, value_name = "URL", default_value = DEFAULT_REPO_URL)]
    pub url: String,

    /// Use defaults, no prompts
    #[arg(long)]
    pub non_interactive: bool,
}

impl Default for InteractiveArgs {
    fn default() -> Self {
        Self {
            url: DEFAULT_REPO_URL.to_string(),
            non_interactive: false,
        }
    }
}

/// Arguments for the `check` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct CheckArgs {
    /// Repository URL to check
    #[arg(value_name = "REPO_URL")]
    pub repo_url: String,

    /// Output the result as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `completions` command.
#[derive(Debug, Clone, clap::Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}
