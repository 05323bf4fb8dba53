//! Check command implementation.
//!
//! The `repo-checker check <REPO_URL>` command runs one submission and
//! prints the report, the error alert, or the result as JSON.

use crate::cli::args::CheckArgs;
use crate::client::CheckClient;
use crate::error::{CheckerError, Result};
use crate::ui::UserInterface;
use crate::view::{CheckerView, ViewState};

use super::dispatcher::{Command, CommandResult};

/// The check command implementation.
pub struct CheckCommand {
    args: CheckArgs,
    client: Box<dyn CheckClient>,
}

impl CheckCommand {
    /// Create a new check command.
    pub fn new(args: CheckArgs, client: Box<dyn CheckClient>) -> Self {
        Self { args, client }
    }

    /// Get the command arguments.
    pub fn args(&self) -> &CheckArgs {
        &self.args
    }

    /// Submit without a spinner and print the outcome as JSON.
    fn execute_json(&self, view: &mut CheckerView, ui: &mut dyn UserInterface) -> Result<()> {
        let request = view.begin(&self.args.repo_url)?;
        view.settle(self.client.check(&request));

        match view.state() {
            ViewState::Succeeded(result) => {
                let json = serde_json::to_string_pretty(result)
                    .map_err(|e| CheckerError::Other(e.into()))?;
                ui.message(&json);
            }
            ViewState::Failed(message) => ui.error(message),
            ViewState::Idle | ViewState::Loading => {}
        }
        Ok(())
    }
}

impl Command for CheckCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let mut view = CheckerView::new();

        let submitted = if self.args.json {
            self.execute_json(&mut view, ui)
        } else {
            match view.submit(&self.args.repo_url, self.client.as_ref(), ui) {
                Ok(_) => {
                    view.show(ui);
                    Ok(())
                }
                Err(e) => Err(e),
            }
        };

        match submitted {
            Ok(()) => Ok(CommandResult::from_state(view.state())),
            Err(e @ CheckerError::Validation { .. }) => {
                ui.error(&e.to_string());
                Ok(CommandResult::failure(2))
            }
            Err(e) => Err(e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::CheckRequest;
    use crate::report::CheckResult;
    use crate::ui::MockUI;

    struct FixedClient(fn() -> Result<CheckResult>);

    impl CheckClient for FixedClient {
        fn check(&self, _request: &CheckRequest) -> Result<CheckResult> {
            (self.0)()
        }
    }

    fn ok_result() -> Result<CheckResult> {
        CheckResult::decode(
            r#"{
                "summary": {"totalFiles": 1, "syntax": {"label": "Syntax", "passed": 1, "failed": 0}},
                "details": [{"fileName": "index.html", "passed": true, "checks": {}}]
            }"#,
        )
    }

    fn not_found() -> Result<CheckResult> {
        Err(CheckerError::Request {
            status: 404,
            message: "Repository not found".to_string(),
        })
    }

    fn args(url: &str, json: bool) -> CheckArgs {
        CheckArgs {
            repo_url: url.to_string(),
            json,
        }
    }

    #[test]
    fn success_renders_report_and_exits_zero() {
        let cmd = CheckCommand::new(
            args("https://github.com/a/b", false),
            Box::new(FixedClient(ok_result)),
        );
        let mut ui = MockUI::new();

        let result = cmd.execute(&mut ui).unwrap();

        assert!(result.success);
        assert!(ui.has_message("Results Summary"));
        assert!(ui.has_message("Passed: 1 | Failed: 0"));
        assert_eq!(ui.spinners().len(), 1);
    }

    #[test]
    fn failure_renders_alert_and_exits_one() {
        let cmd = CheckCommand::new(
            args("https://github.com/a/missing", false),
            Box::new(FixedClient(not_found)),
        );
        let mut ui = MockUI::new();

        let result = cmd.execute(&mut ui).unwrap();

        assert_eq!(result.exit_code, 1);
        assert!(ui
            .messages()
            .contains(&"│ Repository not found".to_string()));
        assert!(!ui.has_message("Results Summary"));
    }

    #[test]
    fn empty_url_exits_two_without_request() {
        let cmd = CheckCommand::new(args("", false), Box::new(FixedClient(not_found)));
        let mut ui = MockUI::new();

        let result = cmd.execute(&mut ui).unwrap();

        assert_eq!(result.exit_code, 2);
        assert!(ui.has_error("Repository URL is required"));
        assert!(ui.spinners().is_empty());
    }

    #[test]
    fn json_output_is_the_decoded_result() {
        let cmd = CheckCommand::new(
            args("https://github.com/a/b", true),
            Box::new(FixedClient(ok_result)),
        );
        let mut ui = MockUI::new();

        let result = cmd.execute(&mut ui).unwrap();

        assert!(result.success);
        assert!(ui.spinners().is_empty());
        let printed: serde_json::Value = serde_json::from_str(&ui.messages()[0]).unwrap();
        assert_eq!(printed["summary"]["totalFiles"], 1);
        assert_eq!(printed["details"][0]["fileName"], "index.html");
    }

    #[test]
    fn json_failure_goes_to_error() {
        let cmd = CheckCommand::new(
            args("https://github.com/a/missing", true),
            Box::new(FixedClient(not_found)),
        );
        let mut ui = MockUI::new();

        let result = cmd.execute(&mut ui).unwrap();

        assert_eq!(result.exit_code, 1);
        assert_eq!(ui.errors(), &["Repository not found".to_string()]);
        assert!(ui.messages().is_empty());
    }
}
