//! Mock UI implementation for testing.
//!
//! `MockUI` implements the `UserInterface` trait and captures all
//! interactions for later assertion. It can be configured with
//! pre-determined prompt responses.
//!
//! # Example
//!
//! ```
//! use repo_checker::ui::{MockUI, UserInterface};
//!
//! let mut ui = MockUI::new();
//! ui.set_prompt_response("repo_url", "https://github.com/user/repo");
//!
//! // Use ui in code under test...
//! ui.message("Checking repository");
//! ui.error("Repository not found");
//!
//! // Assert on captured interactions
//! assert!(ui.has_message("Checking repository"));
//! assert!(ui.errors().contains(&"Repository not found".to_string()));
//! ```

use std::cell::RefCell;
use std::collections::{HashMap, VecDeque};
use std::rc::Rc;

use crate::error::Result;

use super::{
    parse_bool_answer, CheckerTheme, OutputMode, Prompt, PromptResult, PromptType, SpinnerHandle,
    UserInterface,
};

/// Mock UI implementation for testing.
///
/// Captures all UI interactions and allows pre-configured prompt responses.
/// Supports both single responses (via `set_prompt_response`) and queued
/// responses (via `queue_prompt_responses`) for keys prompted repeatedly.
#[derive(Debug, Default)]
pub struct MockUI {
    mode: OutputMode,
    interactive: bool,
    messages: Vec<String>,
    warnings: Vec<String>,
    errors: Vec<String>,
    headers: Vec<String>,
    spinners: Vec<String>,
    spinner_events: Rc<RefCell<Vec<SpinnerEvent>>>,
    prompt_responses: HashMap<String, String>,
    prompt_queues: HashMap<String, VecDeque<String>>,
    prompts_shown: Vec<String>,
}

impl MockUI {
    /// Create a new MockUI with Normal output mode.
    pub fn new() -> Self {
        Self {
            mode: OutputMode::Normal,
            ..Default::default()
        }
    }

    /// Create a new MockUI with a specific output mode.
    pub fn with_mode(mode: OutputMode) -> Self {
        Self {
            mode,
            ..Default::default()
        }
    }

    /// Set a response for a prompt key.
    pub fn set_prompt_response(&mut self, key: &str, response: &str) {
        self.prompt_responses
            .insert(key.to_string(), response.to_string());
    }

    /// Queue multiple responses for the same prompt key.
    ///
    /// Responses are returned in order. After the queue is exhausted,
    /// falls back to `set_prompt_response` or the prompt default.
    pub fn queue_prompt_responses(&mut self, key: &str, responses: Vec<&str>) {
        let queue = responses.into_iter().map(|s| s.to_string()).collect();
        self.prompt_queues.insert(key.to_string(), queue);
    }

    /// Set whether this mock behaves as interactive.
    pub fn set_interactive(&mut self, interactive: bool) {
        self.interactive = interactive;
    }

    /// Get all captured messages.
    pub fn messages(&self) -> &[String] {
        &self.messages
    }

    /// Get all captured warning messages.
    pub fn warnings(&self) -> &[String] {
        &self.warnings
    }

    /// Get all captured error messages.
    pub fn errors(&self) -> &[String] {
        &self.errors
    }

    /// Get all captured headers.
    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    /// Get all spinner messages that were started.
    pub fn spinners(&self) -> &[String] {
        &self.spinners
    }

    /// Get every message and finish sent to any spinner, in order.
    pub fn spinner_events(&self) -> Vec<SpinnerEvent> {
        self.spinner_events.borrow().clone()
    }

    /// Get all prompts that were shown (by key).
    pub fn prompts_shown(&self) -> &[String] {
        &self.prompts_shown
    }

    /// Check if a specific message was shown.
    pub fn has_message(&self, msg: &str) -> bool {
        self.messages.iter().any(|m| m.contains(msg))
    }

    /// Check if a specific error was shown.
    pub fn has_error(&self, msg: &str) -> bool {
        self.errors.iter().any(|m| m.contains(msg))
    }

    /// Check if a specific warning was shown.
    pub fn has_warning(&self, msg: &str) -> bool {
        self.warnings.iter().any(|m| m.contains(msg))
    }

    fn answer(prompt: &Prompt, response: &str) -> PromptResult {
        match prompt.prompt_type {
            PromptType::Confirm => PromptResult::Bool(parse_bool_answer(response)),
            PromptType::Input => PromptResult::String(response.to_string()),
        }
    }
}

impl UserInterface for MockUI {
    fn output_mode(&self) -> OutputMode {
        self.mode
    }

    fn theme(&self) -> CheckerTheme {
        CheckerTheme::plain()
    }

    fn message(&mut self, msg: &str) {
        self.messages.push(msg.to_string());
    }

    fn warning(&mut self, msg: &str) {
        self.warnings.push(msg.to_string());
    }

    fn error(&mut self, msg: &str) {
        self.errors.push(msg.to_string());
    }

    fn prompt(&mut self, prompt: &Prompt) -> Result<PromptResult> {
        self.prompts_shown.push(prompt.key.clone());

        // Check queued responses first (for keys prompted repeatedly)
        if let Some(response) = self
            .prompt_queues
            .get_mut(&prompt.key)
            .and_then(|queue| queue.pop_front())
        {
            return Ok(Self::answer(prompt, &response));
        }

        if let Some(response) = self.prompt_responses.get(&prompt.key) {
            return Ok(Self::answer(prompt, response));
        }

        if let Some(default) = &prompt.default {
            return Ok(Self::answer(prompt, default));
        }

        // Type-appropriate empty as last resort
        Ok(Self::answer(prompt, ""))
    }

    fn start_spinner(&mut self, message: &str) -> Box<dyn SpinnerHandle> {
        self.spinners.push(message.to_string());
        Box::new(MockSpinner {
            log: Rc::clone(&self.spinner_events),
        })
    }

    fn show_header(&mut self, title: &str) {
        self.headers.push(title.to_string());
    }

    fn is_interactive(&self) -> bool {
        self.interactive
    }
}

/// What a mock spinner was told, in order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SpinnerEvent {
    /// The spinner message was replaced.
    Message(String),
    /// The spinner was stopped and erased.
    Cleared,
}

/// Mock spinner that appends its events to the owning [`MockUI`].
#[derive(Debug)]
pub struct MockSpinner {
    log: Rc<RefCell<Vec<SpinnerEvent>>>,
}

impl SpinnerHandle for MockSpinner {
    fn set_message(&mut self, msg: &str) {
        self.log
            .borrow_mut()
            .push(SpinnerEvent::Message(msg.to_string()));
    }

    fn finish_clear(&mut self) {
        self.log.borrow_mut().push(SpinnerEvent::Cleared);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mock_ui_captures_messages() {
        let mut ui = MockUI::new();
        ui.message("Hello");
        ui.warning("Careful");
        ui.error("Failed");

        assert_eq!(ui.messages(), &["Hello".to_string()]);
        assert!(ui.has_warning("Careful"));
        assert!(ui.has_error("Failed"));
    }

    #[test]
    fn mock_ui_prompt_with_response() {
        let mut ui = MockUI::new();
        ui.set_prompt_response("repo_url", "https://github.com/a/b");

        let result = ui
            .prompt(&Prompt::input("repo_url", "URL", None))
            .unwrap();
        assert_eq!(result.as_string(), "https://github.com/a/b");
        assert_eq!(ui.prompts_shown(), &["repo_url".to_string()]);
    }

    #[test]
    fn mock_ui_prompt_falls_back_to_default() {
        let mut ui = MockUI::new();
        let result = ui
            .prompt(&Prompt::input("repo_url", "URL", Some("fallback".to_string())))
            .unwrap();
        assert_eq!(result.as_string(), "fallback");
    }

    #[test]
    fn mock_ui_queued_responses_returned_in_order() {
        let mut ui = MockUI::new();
        ui.queue_prompt_responses("again", vec!["yes", "no"]);
        let prompt = Prompt::confirm("again", "Again?", false);

        assert_eq!(ui.prompt(&prompt).unwrap(), PromptResult::Bool(true));
        assert_eq!(ui.prompt(&prompt).unwrap(), PromptResult::Bool(false));
        // Queue exhausted, default applies
        assert_eq!(ui.prompt(&prompt).unwrap(), PromptResult::Bool(false));
    }

    #[test]
    fn mock_ui_confirm_without_response_or_default_returns_false() {
        let mut ui = MockUI::new();
        let prompt = Prompt {
            key: "x".to_string(),
            question: "X?".to_string(),
            prompt_type: PromptType::Confirm,
            default: None,
        };
        assert_eq!(ui.prompt(&prompt).unwrap(), PromptResult::Bool(false));
    }

    #[test]
    fn mock_ui_captures_spinners_and_their_finish() {
        let mut ui = MockUI::new();
        let mut spinner = ui.start_spinner("Checking...");
        spinner.set_message("Checking...\n░░░");
        spinner.finish_clear();

        assert_eq!(ui.spinners(), &["Checking...".to_string()]);
        assert_eq!(
            ui.spinner_events(),
            vec![
                SpinnerEvent::Message("Checking...\n░░░".to_string()),
                SpinnerEvent::Cleared,
            ]
        );
    }

    #[test]
    fn mock_ui_captures_headers() {
        let mut ui = MockUI::new();
        ui.show_header("Code Checker");
        assert_eq!(ui.headers(), &["Code Checker".to_string()]);
    }

    #[test]
    fn mock_ui_output_mode_and_interactivity() {
        let mut ui = MockUI::with_mode(OutputMode::Quiet);
        assert_eq!(ui.output_mode(), OutputMode::Quiet);
        assert!(!ui.is_interactive());
        ui.set_interactive(true);
        assert!(ui.is_interactive());
    }
}
