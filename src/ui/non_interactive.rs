//! Non-interactive UI for CI/headless environments.

use std::collections::HashMap;

use crate::error::{CheckerError, Result};

use super::theme::CheckerTheme;
use super::{
    parse_bool_answer, OutputMode, Prompt, PromptResult, PromptType, SpinnerHandle, UserInterface,
};

/// Prefix of environment variables that answer prompts.
pub const PROMPT_ENV_PREFIX: &str = "REPO_CHECKER_PROMPT_";

/// UI implementation for non-interactive mode.
///
/// Prompts are answered from `REPO_CHECKER_PROMPT_<KEY>` variables or the
/// prompt's default. Output is plain text with no spinners or colors.
pub struct NonInteractiveUI {
    mode: OutputMode,
    env_overrides: HashMap<String, String>,
}

impl NonInteractiveUI {
    /// Create a new non-interactive UI.
    pub fn new(mode: OutputMode) -> Self {
        let env_overrides: HashMap<String, String> = std::env::vars()
            .filter(|(k, _)| k.starts_with(PROMPT_ENV_PREFIX))
            .collect();

        Self {
            mode,
            env_overrides,
        }
    }

    /// Create with explicit overrides (for testing).
    pub fn with_overrides(mode: OutputMode, overrides: HashMap<String, String>) -> Self {
        Self {
            mode,
            env_overrides: overrides,
        }
    }
}

impl UserInterface for NonInteractiveUI {
    fn output_mode(&self) -> OutputMode {
        self.mode
    }

    fn theme(&self) -> CheckerTheme {
        CheckerTheme::plain()
    }

    fn message(&mut self, msg: &str) {
        println!("{}", msg);
    }

    fn warning(&mut self, msg: &str) {
        eprintln!("⚠ {}", msg);
    }

    fn error(&mut self, msg: &str) {
        eprintln!("✗ {}", msg);
    }

    fn prompt(&mut self, prompt: &Prompt) -> Result<PromptResult> {
        let answer = self
            .env_overrides
            .get(&format!("{}{}", PROMPT_ENV_PREFIX, prompt.key.to_uppercase()))
            .or(prompt.default.as_ref())
            .ok_or_else(|| CheckerError::Validation {
                message: format!(
                    "Cannot prompt for '{}' in non-interactive mode (no default value)",
                    prompt.key
                ),
            })?;

        match prompt.prompt_type {
            PromptType::Confirm => Ok(PromptResult::Bool(parse_bool_answer(answer))),
            PromptType::Input => Ok(PromptResult::String(answer.clone())),
        }
    }

    fn start_spinner(&mut self, message: &str) -> Box<dyn SpinnerHandle> {
        if self.mode.shows_progress() {
            println!("  {}", message);
        }
        Box::new(NoopSpinner)
    }

    fn show_header(&mut self, title: &str) {
        if self.mode.shows_progress() {
            println!("\n{}\n", title);
        }
    }

    fn is_interactive(&self) -> bool {
        false
    }
}

/// Spinner that does nothing (for non-interactive mode).
struct NoopSpinner;

impl SpinnerHandle for NoopSpinner {
    fn set_message(&mut self, _msg: &str) {}

    fn finish_clear(&mut self) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input_prompt(default: Option<&str>) -> Prompt {
        Prompt::input("repo_url", "Repository URL", default.map(String::from))
    }

    #[test]
    fn non_interactive_is_not_interactive() {
        let ui = NonInteractiveUI::new(OutputMode::Normal);
        assert!(!ui.is_interactive());
    }

    #[test]
    fn prompt_uses_default() {
        let mut ui = NonInteractiveUI::with_overrides(OutputMode::Normal, HashMap::new());
        let result = ui.prompt(&input_prompt(Some("https://github.com/a/b"))).unwrap();
        assert_eq!(result.as_string(), "https://github.com/a/b");
    }

    #[test]
    fn prompt_fails_without_default() {
        let mut ui = NonInteractiveUI::with_overrides(OutputMode::Normal, HashMap::new());
        assert!(ui.prompt(&input_prompt(None)).is_err());
    }

    #[test]
    fn prompt_uses_env_override() {
        let mut overrides = HashMap::new();
        overrides.insert(
            "REPO_CHECKER_PROMPT_REPO_URL".to_string(),
            "https://github.com/override/repo".to_string(),
        );

        let mut ui = NonInteractiveUI::with_overrides(OutputMode::Normal, overrides);
        let result = ui.prompt(&input_prompt(Some("default"))).unwrap();
        assert_eq!(result.as_string(), "https://github.com/override/repo");
    }

    #[test]
    fn confirm_prompt_returns_bool() {
        let mut ui = NonInteractiveUI::with_overrides(OutputMode::Normal, HashMap::new());
        let result = ui.prompt(&Prompt::confirm("again", "Again?", false)).unwrap();
        assert_eq!(result, PromptResult::Bool(false));
    }

    #[test]
    fn confirm_prompt_env_override() {
        let mut overrides = HashMap::new();
        overrides.insert("REPO_CHECKER_PROMPT_AGAIN".to_string(), "yes".to_string());

        let mut ui = NonInteractiveUI::with_overrides(OutputMode::Normal, overrides);
        let result = ui.prompt(&Prompt::confirm("again", "Again?", false)).unwrap();
        assert_eq!(result, PromptResult::Bool(true));
    }

    #[test]
    fn theme_is_plain() {
        let ui = NonInteractiveUI::with_overrides(OutputMode::Normal, HashMap::new());
        assert_eq!(ui.theme().format_error("x"), "✗ x");
    }

    #[test]
    fn noop_spinner_methods() {
        let mut spinner = NoopSpinner;
        spinner.set_message("test");
        spinner.finish_clear();
    }
}
