//! Interactive session command.
//!
//! The `repo-checker interactive` command (and the bare `repo-checker`
//! invocation) shows the form, submits, renders the outcome, and offers
//! to check another repository.

use crate::cli::args::InteractiveArgs;
use crate::client::CheckClient;
use crate::error::{CheckerError, Result};
use crate::ui::{Prompt, UserInterface};
use crate::view::CheckerView;

use super::dispatcher::{Command, CommandResult};

/// Prompt key for the repository URL field.
pub const REPO_URL_KEY: &str = "repo_url";

/// Prompt key for the "check another" confirmation.
pub const CHECK_AGAIN_KEY: &str = "check_again";

/// The interactive command implementation.
pub struct InteractiveCommand {
    args: InteractiveArgs,
    client: Box<dyn CheckClient>,
}

impl InteractiveCommand {
    /// Create a new interactive command.
    pub fn new(args: InteractiveArgs, client: Box<dyn CheckClient>) -> Self {
        Self { args, client }
    }

    /// Get the command arguments.
    pub fn args(&self) -> &InteractiveArgs {
        &self.args
    }
}

impl Command for InteractiveCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        ui.show_header("Code Checker");

        let interactive = ui.is_interactive() && !self.args.non_interactive;
        let mut view = CheckerView::new();
        let mut default_url = self.args.url.clone();

        loop {
            let answer = ui.prompt(&Prompt::input(
                REPO_URL_KEY,
                "GitHub Repository URL",
                Some(default_url.clone()),
            ))?;
            let repo_url = answer.as_string();

            match view.submit(&repo_url, self.client.as_ref(), ui) {
                Ok(_) => view.show(ui),
                Err(e @ CheckerError::Validation { .. }) => {
                    if !interactive {
                        ui.error(&e.to_string());
                        return Ok(CommandResult::failure(2));
                    }
                    ui.warning(&e.to_string());
                    continue;
                }
                Err(e) => return Err(e),
            }

            if !interactive {
                break;
            }

            default_url = repo_url;
            let again = ui
                .prompt(&Prompt::confirm(
                    CHECK_AGAIN_KEY,
                    "Check another repository?",
                    false,
                ))?
                .as_bool()
                .unwrap_or(false);
            if !again {
                break;
            }
        }

        Ok(CommandResult::from_state(view.state()))
    }
}
