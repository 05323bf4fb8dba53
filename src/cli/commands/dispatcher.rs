//! Command dispatching.
//!
//! This module provides the core command infrastructure:
//! - [`Command`] trait for implementing commands
//! - [`CommandResult`] for uniform result reporting
//! - [`CommandDispatcher`] for routing CLI subcommands

use crate::cli::args::{Cli, Commands, InteractiveArgs};
use crate::client::{CheckClient, HttpCheckClient};
use crate::config::ApiConfig;
use crate::error::Result;
use crate::ui::UserInterface;
use crate::view::ViewState;

/// Trait for command implementations.
///
/// Each CLI subcommand implements this trait to provide its execution logic.
pub trait Command {
    /// Execute the command.
    ///
    /// # Arguments
    ///
    /// * `ui` - User interface for displaying output and prompts
    ///
    /// # Returns
    ///
    /// A [`CommandResult`] indicating success/failure and exit code.
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult>;
}

/// Result of command execution.
#[derive(Debug)]
pub struct CommandResult {
    /// Whether the command succeeded.
    pub success: bool,

    /// Exit code to use (0 for success, non-zero for failure).
    pub exit_code: i32,
}

impl CommandResult {
    /// Create a successful result.
    pub fn success() -> Self {
        Self {
            success: true,
            exit_code: 0,
        }
    }

    /// Create a failure result.
    pub fn failure(exit_code: i32) -> Self {
        Self {
            success: false,
            exit_code,
        }
    }

    /// Exit status for a view after its last submission.
    ///
    /// Only a successful check exits 0.
    pub fn from_state(state: &ViewState) -> Self {
        match state {
            ViewState::Succeeded(_) => Self::success(),
            _ => Self::failure(1),
        }
    }
}

/// Dispatches CLI commands to their implementations.
pub struct CommandDispatcher {
    api_url: Option<String>,
}

impl CommandDispatcher {
    /// Create a new dispatcher with the `--api-url` value, if any.
    pub fn new(api_url: Option<String>) -> Self {
        Self { api_url }
    }

    /// Get the API URL given on the command line.
    pub fn api_url(&self) -> Option<&str> {
        self.api_url.as_deref()
    }

    /// Resolve the service configuration and build the HTTP client.
    fn client(&self, ui: &mut dyn UserInterface) -> Result<Box<dyn CheckClient>> {
        let config = ApiConfig::resolve(self.api_url.as_deref())?;
        if ui.output_mode().shows_diagnostics() {
            ui.message(&format!("Checking service: {}", config.check_endpoint()));
        }
        Ok(Box::new(HttpCheckClient::new(config)?))
    }

    /// Dispatch and execute a command.
    ///
    /// Routes the CLI subcommand to the appropriate command implementation
    /// and executes it.
    pub fn dispatch(&self, cli: &Cli, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        match &cli.command {
            Some(Commands::Check(args)) => {
                let client = self.client(ui)?;
                let cmd = super::check::CheckCommand::new(args.clone(), client);
                cmd.execute(ui)
            }
            Some(Commands::Interactive(args)) => {
                let client = self.client(ui)?;
                let cmd = super::interactive::InteractiveCommand::new(args.clone(), client);
                cmd.execute(ui)
            }
            Some(Commands::Completions(args)) => {
                let cmd = super::completions::CompletionsCommand::new(args.clone());
                cmd.execute(ui)
            }
            None => {
                // Default to the interactive form
                let client = self.client(ui)?;
                let cmd = super::interactive::InteractiveCommand::new(
                    InteractiveArgs::default(),
                    client,
                );
                cmd.execute(ui)
            }
        }
    }
}
